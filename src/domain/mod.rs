// Domain layer: result models shared between the solvers and the CLI.

pub mod model;
