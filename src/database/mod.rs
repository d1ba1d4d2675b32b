/// Connection pool management and schema setup
pub mod connection;
/// Row types and queries
pub mod models;
