use shoji_core::{PanPhase, PanSample};

use crate::layout::Anchors;
use crate::presentation::{PresentationState, SheetController};

/// Flick velocities are measured against `SNAP_VELOCITY_BASE * (1 -
/// sensitivity)`; anything slower settles on the nearest anchor instead.
const SNAP_VELOCITY_BASE: f32 = 1000.0;

impl SheetController {
    /// Feed one pan sample from the host's recognizer.
    ///
    /// Samples are consumed strictly in gesture order. A fresh start may be
    /// rejected through the `reject_gesture` hook, but a gesture that is
    /// already past `Began` is never orphaned mid-drag.
    pub fn handle_pan(&self, sample: PanSample) {
        if !self.should_respond(sample.phase) {
            return;
        }
        // Without container geometry the gesture is inert: the sample is
        // consumed and nothing moves.
        let Some(anchors) = self.anchors.get() else {
            return;
        };

        match sample.phase {
            PanPhase::Began | PanPhase::Changed => {
                self.respond_to_drag(sample, anchors);

                // Dragged flush against the ceiling with hand-off enabled:
                // the embedded scrollable is about to take over.
                if self.position() == anchors.anchored_y
                    && self.config.get().allows_extended_pan_scrolling
                {
                    (self.hooks.will_transition)(PresentationState::LongForm);
                }
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                self.finish_drag(sample.velocity, anchors);
            }
        }
    }

    fn should_respond(&self, phase: PanPhase) -> bool {
        let fresh_start = matches!(phase, PanPhase::Began | PanPhase::Cancelled);
        if !((self.hooks.should_respond_to_gesture)() || !fresh_start) {
            (self.hooks.reject_gesture)();
            return false;
        }
        !self.should_fail(phase)
    }

    // Suppresses processing without cancelling the platform gesture, so the
    // hand-off to the embedded scrollable stays continuous.
    fn should_fail(&self, phase: PanPhase) -> bool {
        if phase == PanPhase::Began && (self.hooks.should_prioritize_gesture_over_scroll)() {
            (self.hooks.interrupt_scroll_gesture)();
            return false;
        }

        let Some(scrollable) = self.scroll.scrollable() else {
            return false;
        };
        self.is_anchored() && scrollable.content_offset() > 0.0 && scrollable.is_scrolling()
    }

    fn respond_to_drag(&self, sample: PanSample, anchors: Anchors) {
        (self.hooks.will_respond_to_gesture)();

        let y = self.position();
        let mut delta = sample.translation_delta;
        // Past the long-form anchor the sheet resists: half rate of
        // movement.
        if y < anchors.long_form_y {
            delta /= 2.0;
        }
        self.adjust(y + delta);
    }

    fn finish_drag(&self, velocity: f32, anchors: Anchors) {
        let config = self.config.get();
        let container_height = self.env.borrow().container.height;
        let y = self.position();

        let threshold = SNAP_VELOCITY_BASE * (1.0 - config.snap_movement_sensitivity);
        if velocity.abs() > threshold {
            // Fast flick: direction decides, letting a long-form sheet be
            // dismissed directly without visiting short form.
            if velocity < 0.0 {
                self.transition(PresentationState::LongForm, true);
            } else if (nearest(y, &[anchors.long_form_y, container_height])
                == anchors.long_form_y
                && y < anchors.short_form_y)
                || !config.allows_drag_to_dismiss
            {
                self.transition(PresentationState::ShortForm, true);
            } else {
                (self.hooks.request_dismiss)();
            }
        } else {
            // Slow release: settle on whichever anchor is closest, with the
            // container bottom standing in for dismissal.
            let position = nearest(
                y,
                &[container_height, anchors.short_form_y, anchors.long_form_y],
            );

            if position == anchors.long_form_y {
                self.transition(PresentationState::LongForm, true);
            } else if position == anchors.short_form_y || !config.allows_drag_to_dismiss {
                self.transition(PresentationState::ShortForm, true);
            } else {
                (self.hooks.request_dismiss)();
            }
        }
    }
}

/// Closest candidate to `to`; strict `<` comparison, so the first
/// enumerated candidate wins ties.
pub(crate) fn nearest(to: f32, candidates: &[f32]) -> f32 {
    let Some(&first) = candidates.first() else {
        return to;
    };
    let mut best = first;
    for &candidate in &candidates[1..] {
        if (to - candidate).abs() < (to - best).abs() {
            best = candidate;
        }
    }
    best
}
