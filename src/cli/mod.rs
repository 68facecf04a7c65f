pub mod commands;
pub mod context;
pub mod form;
pub mod init;
pub mod query;
pub mod reports;
pub mod submit;

pub use commands::{Cli, Commands};
pub use context::AppContext;
