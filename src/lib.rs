//! ticker-rs: scroll-reactive marquee engine and contact relay.
//!
//! The crate keeps the animation core free of any UI toolkit: hosts feed
//! scroll samples and frame timestamps in, and receive horizontal transforms
//! out through the `render::StripRenderer` contract.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "relay")]
pub mod relay;

pub use api::{TickerEngine, TickerEngineConfig};
pub use error::{TickerError, TickerResult};
