pub mod connection;
pub mod reports;
pub mod schema;

pub use connection::ReportStore;
