mod args;

pub use args::{Cli, Scenario};
