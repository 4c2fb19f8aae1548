pub mod dataset;
pub mod error;
pub mod forecast;
pub mod profile;
pub mod roles;
pub mod schema;
pub mod views;
