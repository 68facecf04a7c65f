pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod form;
pub mod models;
pub mod reporting;
