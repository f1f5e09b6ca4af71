//! Data models for the staff dashboard document.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless
//! interoperability, including the original's irregular wire names.

mod document;
mod event_master;
mod map;
mod moderator;

pub use document::*;
pub use event_master::*;
pub use map::*;
pub use moderator::*;
