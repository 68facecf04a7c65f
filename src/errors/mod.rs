pub mod types;

pub use types::EchoError;
