//! Platform-free core of the folio portfolio site.
//!
//! Everything here is plain Rust: the web frontend feeds browser events and
//! frame deltas in, and writes the resulting values back to the DOM. Keeping
//! the state machines free of `web-sys` lets them run under `cargo test` on the
//! host.

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod cursor;
pub mod easing;
pub mod effect;
pub mod embed;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod nav;
pub mod prefs;
pub mod projects;
pub mod routes;
pub mod scroll;
pub mod task;
pub mod visibility;

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use cursor::*;
pub use easing::*;
pub use effect::*;
pub use embed::*;
pub use error::*;
pub use geometry::*;
pub use motion::*;
pub use nav::*;
pub use prefs::*;
pub use projects::*;
pub use routes::*;
pub use scroll::*;
pub use task::*;
pub use visibility::*;
