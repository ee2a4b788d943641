//! # Responsive Layout
//!
//! Picks a card orientation and a uniform scale factor from the viewport.
//!
//! ```text
//! viewport ──▶ margins/reserved ──▶ available box
//!          ──▶ portrait & landscape fit scales
//!          ──▶ ordered rules (compact, height-bound, wide) ──▶ orientation
//!          ──▶ clamp + max pixel cap ──▶ scale_factor
//! ```
//!
//! Switching to landscape from cold (or from portrait) needs a bigger win
//! than staying in landscape, so viewports near the boundary do not flip
//! back and forth while a window is being resized.

use serde::{Deserialize, Serialize};

/// Card layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall 5:7 card.
    Portrait,
    /// Wide 7:5 card.
    Landscape,
    /// Small-screen portrait card with condensed content.
    Compact,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Compact => "compact",
        })
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Layout thresholds and bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Natural portrait card width.
    pub base_width: f32,
    /// Natural portrait card height.
    pub base_height: f32,
    /// Side margin as a fraction of viewport width.
    pub margin_ratio: f32,
    /// Side margin lower bound.
    pub min_margin: f32,
    /// Side margin upper bound.
    pub max_margin: f32,
    /// Reserved vertical space (header, buttons) as a fraction of viewport height.
    pub reserved_ratio: f32,
    /// Reserved space lower bound.
    pub min_reserved: f32,
    /// Reserved space upper bound.
    pub max_reserved: f32,
    /// Viewports narrower than this are always compact.
    pub compact_below_width: f32,
    /// Both fit scales under this means compact.
    pub poor_scale: f32,
    /// Portrait height scale under this is a severe height constraint.
    pub severe_height_scale: f32,
    /// Landscape win required under a severe height constraint.
    pub severe_margin: f32,
    /// Portrait height scale under this is a moderate height constraint.
    pub moderate_height_scale: f32,
    /// Landscape win required under a moderate height constraint.
    pub moderate_margin: f32,
    /// Minimum viewport width for the wide-screen landscape rule.
    pub wide_min_width: f32,
    /// Available-box aspect ratio that counts as wide.
    pub wide_aspect: f32,
    /// Landscape win required to switch into landscape.
    pub enter_landscape_margin: f32,
    /// Landscape win required to stay in landscape. Sits below
    /// `enter_landscape_margin` so a resize near the boundary doesn't flip.
    pub hold_landscape_margin: f32,
    /// Lower scale bound.
    pub min_scale: f32,
    /// Upper scale bound.
    pub max_scale: f32,
    /// Longest card edge in pixels for portrait and landscape.
    pub max_dimension_px: f32,
    /// Longest card edge in pixels for compact.
    pub compact_max_dimension_px: f32,
    /// Padding between the card edge and its content, at scale 1.
    pub content_padding: f32,
    /// Lower content scale bound.
    pub min_content_scale: f32,
    /// Upper content scale bound.
    pub max_content_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 320.0,
            base_height: 448.0,
            margin_ratio: 0.05,
            min_margin: 20.0,
            max_margin: 60.0,
            reserved_ratio: 0.18,
            min_reserved: 120.0,
            max_reserved: 200.0,
            compact_below_width: 420.0,
            poor_scale: 0.6,
            severe_height_scale: 0.6,
            severe_margin: 1.10,
            moderate_height_scale: 0.8,
            moderate_margin: 1.30,
            wide_min_width: 640.0,
            wide_aspect: 1.4,
            enter_landscape_margin: 1.15,
            hold_landscape_margin: 1.10,
            min_scale: 0.35,
            max_scale: 1.8,
            max_dimension_px: 500.0,
            compact_max_dimension_px: 420.0,
            content_padding: 16.0,
            min_content_scale: 0.5,
            max_content_scale: 1.25,
        }
    }
}

impl LayoutConfig {
    /// Natural card size for an orientation.
    #[must_use]
    pub fn base_size(&self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Portrait | Orientation::Compact => {
                Size::new(self.base_width, self.base_height)
            }
            Orientation::Landscape => Size::new(self.base_height, self.base_width),
        }
    }

    /// Largest scale at which the card's longest edge stays within the
    /// orientation's pixel cap.
    #[must_use]
    pub fn scale_cap(&self, orientation: Orientation) -> f32 {
        let longest = self.base_width.max(self.base_height);
        let limit = match orientation {
            Orientation::Compact => self.compact_max_dimension_px,
            Orientation::Portrait | Orientation::Landscape => self.max_dimension_px,
        };
        limit / longest
    }
}

/// Intermediate measurements, kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    /// Side margin.
    pub margin: f32,
    /// Reserved vertical space.
    pub reserved: f32,
    /// Width left for the card.
    pub available_width: f32,
    /// Height left for the card.
    pub available_height: f32,
    /// Fit scale for a portrait card.
    pub portrait_scale: f32,
    /// Fit scale for a landscape card.
    pub landscape_scale: f32,
}

impl LayoutMetrics {
    /// Measure a viewport.
    #[must_use]
    pub fn measure(viewport: Size, config: &LayoutConfig) -> Self {
        let margin = (viewport.width * config.margin_ratio).clamp(config.min_margin, config.max_margin);
        let reserved = (viewport.height * config.reserved_ratio)
            .clamp(config.min_reserved, config.max_reserved);
        let available_width = (viewport.width - 2.0 * margin).max(0.0);
        let available_height = (viewport.height - reserved).max(0.0);

        let portrait_scale = (available_width / config.base_width)
            .min(available_height / config.base_height);
        let landscape_scale = (available_width / config.base_height)
            .min(available_height / config.base_width);

        Self {
            margin,
            reserved,
            available_width,
            available_height,
            portrait_scale,
            landscape_scale,
        }
    }

    /// How far a portrait card could scale if only height mattered.
    #[must_use]
    pub fn portrait_height_scale(&self, config: &LayoutConfig) -> f32 {
        self.available_height / config.base_height
    }

    /// How far a portrait card could scale if only width mattered.
    #[must_use]
    pub fn portrait_width_scale(&self, config: &LayoutConfig) -> f32 {
        self.available_width / config.base_width
    }

    /// Width-to-height ratio of the available box.
    #[must_use]
    pub fn available_aspect(&self) -> f32 {
        if self.available_height > 0.0 {
            self.available_width / self.available_height
        } else {
            f32::INFINITY
        }
    }
}

/// Orientation choice plus the measurements behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutDecision {
    /// Chosen orientation.
    pub orientation: Orientation,
    /// Final clamped and capped scale.
    pub scale_factor: f32,
    /// Measurements.
    pub metrics: LayoutMetrics,
}

/// Choose an orientation and scale for a viewport.
///
/// `current` is the orientation in use, or `None` on first layout.
#[must_use]
pub fn select_layout(
    viewport: Size,
    current: Option<Orientation>,
    config: &LayoutConfig,
) -> LayoutDecision {
    let metrics = LayoutMetrics::measure(viewport, config);
    let orientation = choose_orientation(viewport, current, &metrics, config);

    let raw = match orientation {
        Orientation::Landscape => metrics.landscape_scale,
        Orientation::Portrait | Orientation::Compact => metrics.portrait_scale,
    };
    let scale_factor = raw
        .clamp(config.min_scale, config.max_scale)
        .min(config.scale_cap(orientation));

    LayoutDecision {
        orientation,
        scale_factor,
        metrics,
    }
}

fn choose_orientation(
    viewport: Size,
    current: Option<Orientation>,
    metrics: &LayoutMetrics,
    config: &LayoutConfig,
) -> Orientation {
    let portrait = metrics.portrait_scale;
    let landscape = metrics.landscape_scale;

    if viewport.width < config.compact_below_width
        || (portrait < config.poor_scale && landscape < config.poor_scale)
    {
        return Orientation::Compact;
    }

    // Past the pixel cap both orientations render the same size.
    let effective_portrait = portrait.min(config.scale_cap(Orientation::Portrait));
    let effective_landscape = landscape.min(config.scale_cap(Orientation::Landscape));
    let landscape_wins_by = |margin: f32| effective_landscape >= effective_portrait * margin;

    let height_scale = metrics.portrait_height_scale(config);
    if height_scale < config.severe_height_scale && landscape_wins_by(config.severe_margin) {
        return Orientation::Landscape;
    }
    if height_scale < config.moderate_height_scale && landscape_wins_by(config.moderate_margin) {
        return Orientation::Landscape;
    }

    // A portrait card already at its pixel cap is never traded away.
    let height_bound = height_scale < metrics.portrait_width_scale(config);
    if viewport.width >= config.wide_min_width
        && portrait < config.scale_cap(Orientation::Portrait)
        && (height_bound || metrics.available_aspect() > config.wide_aspect)
    {
        let margin = if current == Some(Orientation::Landscape) {
            config.hold_landscape_margin
        } else {
            config.enter_landscape_margin
        };
        if landscape_wins_by(margin) {
            return Orientation::Landscape;
        }
    }

    Orientation::Portrait
}

/// Scale that fits measured content into a card of `card` size.
///
/// Returns `1.0` when the content is unmeasured or degenerate.
#[must_use]
pub fn content_scale(card: Size, content: Option<Size>, scale_factor: f32, config: &LayoutConfig) -> f32 {
    let Some(content) = content else {
        return 1.0;
    };
    if content.width <= 0.0 || content.height <= 0.0 {
        return 1.0;
    }

    let padding = 2.0 * config.content_padding * scale_factor;
    let inner_width = (card.width - padding).max(0.0);
    let inner_height = (card.height - padding).max(0.0);

    (inner_width / content.width)
        .min(inner_height / content.height)
        .clamp(config.min_content_scale, config.max_content_scale)
}

/// Current layout as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Card orientation.
    pub orientation: Orientation,
    /// Uniform card scale.
    pub scale_factor: f32,
    /// Scale applied to card content.
    pub content_scale: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            scale_factor: 1.0,
            content_scale: 1.0,
        }
    }
}

/// Stateful wrapper that remembers the last layout for hysteresis.
#[derive(Debug, Clone, Default)]
pub struct LayoutSelector {
    config: LayoutConfig,
    current: Option<LayoutState>,
    viewport: Option<Size>,
    content: Option<Size>,
}

impl LayoutSelector {
    /// Create a selector with custom thresholds.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            current: None,
            viewport: None,
            content: None,
        }
    }

    /// Get the current configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Last computed layout, or the default before the first resize.
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.current.unwrap_or_default()
    }

    /// Pixel size of the card under the current layout.
    #[must_use]
    pub fn card_size(&self) -> Size {
        let state = self.state();
        let base = self.config.base_size(state.orientation);
        Size::new(base.width * state.scale_factor, base.height * state.scale_factor)
    }

    /// Recompute for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) -> LayoutState {
        let viewport = Size::new(width, height);
        self.viewport = Some(viewport);

        let previous = self.current.map(|s| s.orientation);
        let decision = select_layout(viewport, previous, &self.config);
        if previous.is_some_and(|p| p != decision.orientation) {
            tracing::debug!(
                from = ?previous,
                to = %decision.orientation,
                width,
                height,
                "layout orientation changed"
            );
        }

        let card = self.config.base_size(decision.orientation);
        let card = Size::new(
            card.width * decision.scale_factor,
            card.height * decision.scale_factor,
        );
        let state = LayoutState {
            orientation: decision.orientation,
            scale_factor: decision.scale_factor,
            content_scale: content_scale(card, self.content, decision.scale_factor, &self.config),
        };
        self.current = Some(state);
        state
    }

    /// Record the natural size of the card content and refit it.
    pub fn measure_content(&mut self, width: f32, height: f32) -> LayoutState {
        self.content = Some(Size::new(width, height));
        match self.current {
            Some(mut state) => {
                let scale = state.scale_factor;
                state.content_scale =
                    content_scale(self.card_size(), self.content, scale, &self.config);
                self.current = Some(state);
                state
            }
            None => self.state(),
        }
    }

    /// The last viewport passed to [`LayoutSelector::resize`].
    #[must_use]
    pub const fn viewport(&self) -> Option<Size> {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(width: f32, height: f32, current: Option<Orientation>) -> LayoutDecision {
        select_layout(Size::new(width, height), current, &LayoutConfig::default())
    }

    #[test]
    fn test_desktop_1080p_is_portrait() {
        let decision = select(1920.0, 1080.0, None);
        let m = decision.metrics;
        assert!((m.margin - 60.0).abs() < 1e-3);
        assert!((m.reserved - 194.4).abs() < 1e-3);
        assert!(m.portrait_scale > 1.5);
        assert!(m.landscape_scale > 1.5);
        assert_eq!(decision.orientation, Orientation::Portrait);
        assert!(decision.scale_factor <= 1.8);
        // 500px cap on a 448px edge
        assert!((decision.scale_factor - 500.0 / 448.0).abs() < 1e-4);
    }

    #[test]
    fn test_narrow_is_compact() {
        let decision = select(375.0, 667.0, None);
        assert_eq!(decision.orientation, Orientation::Compact);
        assert!((decision.metrics.margin - 20.0).abs() < f32::EPSILON);
        assert!(decision.scale_factor <= 420.0 / 448.0 + 1e-6);
    }

    #[test]
    fn test_tiny_viewport_is_compact_and_clamped() {
        let decision = select(200.0, 150.0, None);
        assert_eq!(decision.orientation, Orientation::Compact);
        assert!((decision.scale_factor - 0.35).abs() < f32::EPSILON);
    }

    #[test]
    fn test_severe_height_constraint_prefers_landscape() {
        // available 900x260: portrait ~0.58, landscape ~0.81
        let decision = select(1000.0, 380.0, None);
        assert_eq!(decision.orientation, Orientation::Landscape);
        assert!((decision.scale_factor - 0.8125).abs() < 1e-4);
    }

    #[test]
    fn test_moderate_height_constraint_prefers_landscape() {
        // available 900x320: portrait ~0.71, landscape 1.0
        let decision = select(1000.0, 440.0, None);
        assert_eq!(decision.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_tall_tablet_is_portrait() {
        let decision = select(1024.0, 1366.0, None);
        assert_eq!(decision.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_capped_portrait_ignores_current_landscape() {
        let decision = select(1920.0, 1080.0, Some(Orientation::Landscape));
        assert_eq!(decision.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_hysteresis_holds_landscape() {
        // Landscape is ~12.6% better than portrait after the pixel cap:
        // not enough to switch from cold, enough to stay.
        let cold = select(700.0, 564.0, None);
        assert_eq!(cold.orientation, Orientation::Portrait);

        let warm = select(700.0, 564.0, Some(Orientation::Landscape));
        assert_eq!(warm.orientation, Orientation::Landscape);

        let from_portrait = select(700.0, 564.0, Some(Orientation::Portrait));
        assert_eq!(from_portrait.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_small_landscape_advantage_is_not_held() {
        // ~6% better: below the 10% hold margin.
        let decision = select(700.0, 590.0, Some(Orientation::Landscape));
        assert_eq!(decision.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_content_scale_fits_and_clamps() {
        let config = LayoutConfig::default();
        let card = Size::new(320.0, 448.0);

        assert!((content_scale(card, None, 1.0, &config) - 1.0).abs() < f32::EPSILON);

        // inner box 288x416; content twice that is clamped at 0.5
        let huge = Size::new(1000.0, 1000.0);
        assert!((content_scale(card, Some(huge), 1.0, &config) - 0.5).abs() < f32::EPSILON);

        let tiny = Size::new(10.0, 10.0);
        assert!((content_scale(card, Some(tiny), 1.0, &config) - 1.25).abs() < f32::EPSILON);

        let snug = Size::new(320.0, 416.0);
        assert!((content_scale(card, Some(snug), 1.0, &config) - 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_selector_remembers_orientation() {
        let mut selector = LayoutSelector::default();
        assert_eq!(selector.state(), LayoutState::default());

        let state = selector.resize(1000.0, 440.0);
        assert_eq!(state.orientation, Orientation::Landscape);

        // Near the boundary the selector stays put.
        let state = selector.resize(700.0, 564.0);
        assert_eq!(state.orientation, Orientation::Landscape);

        // Portrait already reaches its full size here, so landscape is dropped.
        let state = selector.resize(1024.0, 1366.0);
        assert_eq!(state.orientation, Orientation::Portrait);
        assert_eq!(selector.viewport(), Some(Size::new(1024.0, 1366.0)));
    }

    #[test]
    fn test_selector_measure_content() {
        let mut selector = LayoutSelector::default();
        let before = selector.measure_content(1000.0, 1000.0);
        assert!((before.content_scale - 1.0).abs() < f32::EPSILON);

        selector.resize(1920.0, 1080.0);
        let state = selector.measure_content(2000.0, 2000.0);
        assert!((state.content_scale - 0.5).abs() < f32::EPSILON);

        let card = selector.card_size();
        assert!((card.height - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!("Landscape".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert!("square".parse::<Orientation>().is_err());
    }
}
