mod commands;

pub use commands::{CheckCmd, CliApp, Command, RunCmd};
