mod observers;

pub use observers::{TickerContext, TickerEvent, TickerObserver};
