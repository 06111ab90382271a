pub mod ease;
pub mod types;
pub mod wrap;

pub use ease::{Easing, lerp};
pub use types::{ScrollDirection, TickerDirection, VelocitySignal};
pub use wrap::{speed_multiplier, wrap_offset};
