//! Prelude module for stay_calendar crate.
//!
//! Re-exports the `Display` derive from derive_more and the logging macros.

#[allow(unused_imports)]
pub use derive_more::Display;
#[allow(unused_imports)]
pub use log::{debug, trace};
