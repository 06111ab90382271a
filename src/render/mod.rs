mod frame;
mod null_renderer;

pub use frame::StripFrame;
pub use null_renderer::NullRenderer;

use crate::error::TickerResult;

/// Contract implemented by any host surface that displays the strip.
///
/// The engine measures through `content_width` and writes one `StripFrame`
/// per step, so the stepping loop stays independent of any declarative
/// re-render pass on the host side.
pub trait StripRenderer {
    /// Full rendered width of the duplicated strip in pixels.
    ///
    /// Returns `None` while the target is not attached to a layout yet.
    fn content_width(&self) -> Option<f64>;

    fn render(&mut self, frame: &StripFrame) -> TickerResult<()>;
}
