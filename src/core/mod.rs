pub mod errors;
pub mod models;
pub mod schemas;
pub mod services;
