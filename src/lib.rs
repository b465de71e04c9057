pub mod api;
pub mod config;
pub mod data_collector;
pub mod parser;
pub mod persistence;
pub mod rating;
pub mod schema;
pub mod shell;
