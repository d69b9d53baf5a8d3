pub mod env;
pub mod errors;
pub mod image;
pub mod logger;
pub mod models;
