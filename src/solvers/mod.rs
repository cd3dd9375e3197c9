// One module per kata. Each solver is a standalone pure function; nothing
// here does I/O or keeps state.

pub mod pair_sum;
pub mod version;
