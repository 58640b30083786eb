pub mod db;

pub mod auth;
pub mod goals;
pub mod points;
pub mod rewards;

pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
