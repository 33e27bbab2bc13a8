use std::rc::Rc;

use web_time::Duration;

use crate::layout::HeightPolicy;
use crate::presentation::PresentationState;

/// Layout and behavior options supplied by the presented content.
///
/// Resolved once per presentation. After changing values while the sheet is
/// up, call `SheetController::set_needs_layout_update` so anchors and the
/// scroll observer are rebuilt.
#[derive(Clone, Copy, Debug)]
pub struct SheetConfig {
    pub short_form_height: HeightPolicy,
    pub long_form_height: HeightPolicy,
    /// Fixed clearance kept above the sheet. `None` derives it from the top
    /// safe-area inset.
    pub top_offset: Option<f32>,
    /// Cap dragging at the long-form anchor instead of the top offset.
    pub anchor_modal_to_long_form: bool,
    /// Hand scrolling over to the embedded scrollable once the sheet rests
    /// at its ceiling.
    pub allows_extended_pan_scrolling: bool,
    pub allows_drag_to_dismiss: bool,
    pub allows_tap_to_dismiss: bool,
    /// The presented content's root view is itself the scrollable; enables
    /// the top-bounce hand-off.
    pub content_is_scrollable: bool,
    pub spring_damping: f32,
    pub transition_duration: Duration,
    /// In `0..=1`; higher values let smaller flick velocities trigger a
    /// snap instead of a nearest-anchor settle.
    pub snap_movement_sensitivity: f32,
    pub is_haptic_feedback_enabled: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            short_form_height: HeightPolicy::MaxHeight,
            long_form_height: HeightPolicy::MaxHeight,
            top_offset: None,
            anchor_modal_to_long_form: true,
            allows_extended_pan_scrolling: false,
            allows_drag_to_dismiss: true,
            allows_tap_to_dismiss: true,
            content_is_scrollable: false,
            spring_damping: 0.8,
            transition_duration: Duration::from_millis(500),
            snap_movement_sensitivity: 0.7,
            is_haptic_feedback_enabled: true,
        }
    }
}

/// Host-side predicates and notifications. Every field defaults to a
/// harmless no-op so content only wires what it cares about.
#[derive(Clone)]
pub struct SheetHooks {
    pub should_respond_to_gesture: Rc<dyn Fn() -> bool>,
    pub should_prioritize_gesture_over_scroll: Rc<dyn Fn() -> bool>,
    pub should_transition: Rc<dyn Fn(PresentationState) -> bool>,
    pub will_transition: Rc<dyn Fn(PresentationState)>,
    pub will_respond_to_gesture: Rc<dyn Fn()>,
    pub will_dismiss: Rc<dyn Fn()>,
    pub did_dismiss: Rc<dyn Fn()>,
    /// The core wants the sheet torn down (flick past the bottom, overlay
    /// tap); the host owns the actual dismissal transition.
    pub request_dismiss: Rc<dyn Fn()>,
    /// Cancel the host's pan recognizer. Fired only when a fresh gesture
    /// start is rejected, never mid-drag.
    pub reject_gesture: Rc<dyn Fn()>,
    /// Interrupt the embedded scrollable's own gesture so the sheet takes
    /// priority for the rest of the pan.
    pub interrupt_scroll_gesture: Rc<dyn Fn()>,
    /// Selection-changed style feedback at presentation start.
    pub haptic: Rc<dyn Fn()>,
}

impl Default for SheetHooks {
    fn default() -> Self {
        Self {
            should_respond_to_gesture: Rc::new(|| true),
            should_prioritize_gesture_over_scroll: Rc::new(|| false),
            should_transition: Rc::new(|_| true),
            will_transition: Rc::new(|_| {}),
            will_respond_to_gesture: Rc::new(|| {}),
            will_dismiss: Rc::new(|| {}),
            did_dismiss: Rc::new(|| {}),
            request_dismiss: Rc::new(|| {}),
            reject_gesture: Rc::new(|| {}),
            interrupt_scroll_gesture: Rc::new(|| {}),
            haptic: Rc::new(|| {}),
        }
    }
}
