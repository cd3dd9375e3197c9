pub mod config;
pub mod domain;
pub mod solvers;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use domain::model::{IndexPair, PairSumReport, VersionCompareReport};
pub use solvers::{pair_sum::find_index_pair, version::compare_versions};
pub use utils::error::{KataError, Result};
