use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LinkRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// One navigation link and the anchor of its pointer arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub bounds: LinkRect,
    pub arrow_center: (f64, f64),
}

impl LinkTarget {
    #[must_use]
    pub fn new(bounds: LinkRect, arrow_center: (f64, f64)) -> Self {
        Self {
            bounds,
            arrow_center,
        }
    }
}

/// Tuning for the hero-link highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkProximityConfig {
    /// Arrow stays hidden while the pointer is closer than this to the link centre.
    pub arrow_hide_radius_px: f64,
    /// Arrow is shown only when its angle to the pointer lies outside `±this`.
    pub arrow_visible_angle_deg: f64,
    pub scale_numerator: f64,
    pub scale_distance_offset_px: f64,
    pub min_effect_scale: f64,
    pub max_effect_scale: f64,
}

impl Default for LinkProximityConfig {
    fn default() -> Self {
        Self {
            arrow_hide_radius_px: 100.0,
            arrow_visible_angle_deg: 100.0,
            scale_numerator: 800.0,
            scale_distance_offset_px: 80.0,
            min_effect_scale: 2.5,
            max_effect_scale: 100.0,
        }
    }
}

/// Highlight derived from the latest pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkHighlight {
    pub hovered_index: Option<usize>,
    pub distance_px: f64,
    pub arrow_angle_deg: Option<f64>,
    pub arrow_visible: bool,
    /// Displacement-filter scale applied to the link text.
    pub effect_scale: f64,
}

impl LinkHighlight {
    fn cleared(config: LinkProximityConfig) -> Self {
        Self {
            hovered_index: None,
            distance_px: 0.0,
            arrow_angle_deg: None,
            arrow_visible: false,
            effect_scale: effect_scale(0.0, config),
        }
    }
}

/// Pointer-proximity highlighter for a vertical stack of links.
#[derive(Debug, Clone)]
pub struct LinkProximity {
    config: LinkProximityConfig,
    links: SmallVec<[LinkTarget; 4]>,
    highlight: LinkHighlight,
}

impl Default for LinkProximity {
    fn default() -> Self {
        Self::new(LinkProximityConfig::default())
    }
}

impl LinkProximity {
    #[must_use]
    pub fn new(config: LinkProximityConfig) -> Self {
        Self {
            config,
            links: SmallVec::new(),
            highlight: LinkHighlight::cleared(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> LinkProximityConfig {
        self.config
    }

    #[must_use]
    pub fn highlight(&self) -> LinkHighlight {
        self.highlight
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Replaces the link layout. Links with invalid geometry are skipped.
    pub fn set_links(&mut self, links: impl IntoIterator<Item = LinkTarget>) {
        self.links = links
            .into_iter()
            .filter(|link| link.bounds.is_valid())
            .collect();
        self.highlight = LinkHighlight::cleared(self.config);
    }

    pub fn on_pointer_leave(&mut self) {
        self.highlight = LinkHighlight::cleared(self.config);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> LinkHighlight {
        if !x.is_finite() || !y.is_finite() {
            return self.highlight;
        }
        let Some(index) = self.band_index(y) else {
            self.highlight = LinkHighlight::cleared(self.config);
            return self.highlight;
        };

        let link = self.links[index];
        let (center_x, center_y) = link.bounds.center();
        let distance_px = (x - center_x).hypot(y - center_y);

        let (arrow_x, arrow_y) = link.arrow_center;
        let angle = (y - arrow_y).atan2(x - arrow_x).to_degrees();
        let limit = self.config.arrow_visible_angle_deg;
        let arrow_visible = distance_px >= self.config.arrow_hide_radius_px
            && (angle < -limit || angle > limit);

        self.highlight = LinkHighlight {
            hovered_index: Some(index),
            distance_px,
            arrow_angle_deg: arrow_visible.then_some(angle),
            arrow_visible,
            effect_scale: effect_scale(distance_px, self.config),
        };
        self.highlight
    }

    /// Splits the stack's vertical extent into equal bands, one per link.
    fn band_index(&self, y: f64) -> Option<usize> {
        let first = self.links.first()?;
        let last = self.links.last()?;
        let top = first.bounds.top;
        let height = (last.bounds.top + last.bounds.height) - top;
        if height <= 0.0 {
            return Some(0);
        }

        let band = height / self.links.len() as f64;
        let raw = ((y - top) / band).floor();
        let max_index = self.links.len() - 1;
        if raw <= 0.0 {
            Some(0)
        } else {
            Some((raw as usize).min(max_index))
        }
    }
}

fn effect_scale(distance_px: f64, config: LinkProximityConfig) -> f64 {
    let raw = config.scale_numerator / (distance_px - config.scale_distance_offset_px);
    if raw.is_nan() {
        return config.min_effect_scale;
    }
    raw.max(config.min_effect_scale).min(config.max_effect_scale)
}
