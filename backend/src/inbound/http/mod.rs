//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod tasks;
pub mod users;
pub mod validation;

pub use error::ApiResult;
