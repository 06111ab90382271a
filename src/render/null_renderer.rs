use crate::error::TickerResult;
use crate::render::{StripFrame, StripRenderer};

/// Headless render target used by tests and server-side simulation.
///
/// It still validates every frame so tests catch out-of-range transforms
/// before a real surface is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub content_width: Option<f64>,
    pub last_frame: Option<StripFrame>,
    pub frame_count: usize,
}

impl NullRenderer {
    /// Target already laid out with the given full strip width.
    #[must_use]
    pub fn attached(content_width: f64) -> Self {
        Self {
            content_width: Some(content_width),
            ..Self::default()
        }
    }

    /// Target that has not been attached to a layout yet.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn set_content_width(&mut self, content_width: Option<f64>) {
        self.content_width = content_width;
    }
}

impl StripRenderer for NullRenderer {
    fn content_width(&self) -> Option<f64> {
        self.content_width
    }

    fn render(&mut self, frame: &StripFrame) -> TickerResult<()> {
        frame.validate()?;
        self.last_frame = Some(*frame);
        self.frame_count += 1;
        Ok(())
    }
}
