//! UCP Engine library.
//!
//! Server-side code for the player control panel.
//!
//! ## Structure
//!
//! - `use_cases/` - Request orchestration over the record source
//! - `infrastructure/` - Record source port + MySQL adapter, session auth
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// In-memory record source fixtures for use-case tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
