//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod data;
mod users;

pub use data::*;
pub use users::*;
