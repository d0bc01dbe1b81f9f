//! Command implementations

mod packages;
mod run;
mod tree;

pub use packages::cmd_packages;
pub use tree::cmd_tree;
