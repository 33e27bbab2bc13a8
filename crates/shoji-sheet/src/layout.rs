use std::rc::Rc;

use shoji_core::{Insets, Size};

use crate::config::SheetConfig;

/// Declarative description of how tall the sheet is in a given presentation
/// state, resolved to a container-local Y coordinate during a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightPolicy {
    /// Full container height (plus the resolved top offset).
    MaxHeight,
    /// Full height with a fixed inset from the top. Zero is `MaxHeight`.
    MaxHeightWithTopInset(f32),
    /// A fixed content height above the bottom safe-area inset.
    ContentHeight(f32),
    /// A fixed content height, ignoring the bottom safe-area inset.
    ContentHeightIgnoringSafeArea(f32),
    /// Ask the measurement callback for a compressed fit at container width.
    IntrinsicHeight,
    /// Intrinsic fit with extra insets applied below the content.
    IntrinsicHeightWithInsets(Insets),
}

/// Geometry the host resolves before each layout pass.
#[derive(Clone, Default)]
pub struct LayoutEnv {
    pub container: Size,
    pub top_inset: f32,
    pub bottom_inset: f32,
    /// An assistive "read everything" navigation mode is active. The sheet
    /// collapses to a single detent because a two-position drag model is
    /// unusable under that navigation.
    pub screen_reader_active: bool,
    /// Compressed-fit content height at a given width, for the intrinsic
    /// height policies.
    pub measure_content: Option<Rc<dyn Fn(f32) -> f32>>,
}

/// Resolved vertical anchors, container-local, 0 = top of container.
///
/// `short_form_y >= long_form_y` always holds after clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    pub short_form_y: f32,
    pub long_form_y: f32,
    /// The ceiling the sheet can never be moved above.
    pub anchored_y: f32,
    pub bottom_y: f32,
}

/// Clearance kept above the sheet when no explicit top offset is configured.
pub(crate) const TOP_OFFSET_MARGIN: f32 = 55.0;

fn resolved_top_offset(config: &SheetConfig, env: &LayoutEnv) -> f32 {
    config
        .top_offset
        .unwrap_or(env.top_inset + TOP_OFFSET_MARGIN)
}

/// Converts the configured height policies into anchor positions.
///
/// Returns `None` for a container with no usable area, so callers can treat
/// the layout pass as a no-op instead of propagating poisoned positions.
pub fn compute_anchors(config: &SheetConfig, env: &LayoutEnv) -> Option<Anchors> {
    if env.container.is_empty() {
        return None;
    }

    let top_offset = resolved_top_offset(config, env);
    let bottom_y = env.container.height - top_offset;

    // Long form is capped at the maximum possible extent so content never
    // lays out beyond the visible bounds.
    let long_form_y = top_margin(&config.long_form_height, bottom_y, env)
        .max(top_margin(&HeightPolicy::MaxHeight, bottom_y, env))
        + top_offset;

    let short_form_y = if env.screen_reader_active {
        long_form_y
    } else {
        // Short form never sits above long form.
        (top_margin(&config.short_form_height, bottom_y, env) + top_offset).max(long_form_y)
    };

    let anchored_y = if config.anchor_modal_to_long_form {
        long_form_y
    } else {
        top_offset
    };

    Some(Anchors {
        short_form_y,
        long_form_y,
        anchored_y,
        bottom_y,
    })
}

fn top_margin(policy: &HeightPolicy, bottom_y: f32, env: &LayoutEnv) -> f32 {
    match policy {
        HeightPolicy::MaxHeight => 0.0,
        HeightPolicy::MaxHeightWithTopInset(inset) => *inset,
        HeightPolicy::ContentHeight(height) => bottom_y - (height + env.bottom_inset),
        HeightPolicy::ContentHeightIgnoringSafeArea(height) => bottom_y - height,
        HeightPolicy::IntrinsicHeight => bottom_y - (measure(env) + env.bottom_inset),
        HeightPolicy::IntrinsicHeightWithInsets(insets) => {
            bottom_y - (measure(env) + env.bottom_inset + insets.bottom)
        }
    }
}

fn measure(env: &LayoutEnv) -> f32 {
    match &env.measure_content {
        Some(measure) => measure(env.container.width),
        None => {
            log::warn!("intrinsic sheet height requested without a measurement callback");
            0.0
        }
    }
}
