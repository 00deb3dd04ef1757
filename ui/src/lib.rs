//! The restaurant admin dashboard.
//!
//! [`Dashboard`] only displays what it is given and reports user intents
//! through its event handlers. The caller owns every piece of domain data.

mod admin;
mod dashboard;
mod orders;
mod overview;
mod reviews;

pub use dashboard::Dashboard;
