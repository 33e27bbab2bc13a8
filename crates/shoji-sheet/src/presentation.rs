use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use shoji_core::{signal, Animated, AnimationSpec, Clock, Rect, Signal, Size, SystemClock};

use crate::config::{SheetConfig, SheetHooks};
use crate::dim::{dim_for_position, DimState};
use crate::layout::{compute_anchors, Anchors, LayoutEnv};
use crate::scroll::ScrollTracking;

/// The two resting detents of the sheet. Dismissal is a terminal exit
/// signalled through the hooks, not a state of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationState {
    ShortForm,
    LongForm,
}

/// Coordinates the sheet's position against its anchors: owns the frame,
/// the resting state, and the snap animator. The pan interpreter and the
/// scroll coordinator feed into it but never write position themselves.
pub struct SheetController {
    pub(crate) weak_self: Weak<SheetController>,
    pub(crate) config: Cell<SheetConfig>,
    pub(crate) hooks: SheetHooks,
    pub(crate) env: RefCell<LayoutEnv>,
    pub(crate) clock: Rc<dyn Clock>,
    pub(crate) anchors: Cell<Option<Anchors>>,
    frame: Signal<Rect>,
    dim: Signal<DimState>,
    state: Cell<PresentationState>,
    pub(crate) animating: Cell<bool>,
    anim: RefCell<Animated<f32>>,
    pub(crate) presenting: Cell<bool>,
    pub(crate) dismissing: Cell<bool>,
    pub(crate) scroll: ScrollTracking,
}

impl SheetController {
    pub fn new(config: SheetConfig, hooks: SheetHooks) -> Rc<Self> {
        Self::new_with_clock(config, hooks, Rc::new(SystemClock))
    }

    /// Like [`SheetController::new`] with an injected clock; scripted
    /// drivers and tests pass a manual clock here.
    pub fn new_with_clock(
        config: SheetConfig,
        hooks: SheetHooks,
        clock: Rc<dyn Clock>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            weak_self: weak.clone(),
            config: Cell::new(config),
            hooks,
            env: RefCell::new(LayoutEnv::default()),
            clock,
            anchors: Cell::new(None),
            frame: signal(Rect::default()),
            dim: signal(DimState::Off),
            state: Cell::new(PresentationState::ShortForm),
            animating: Cell::new(false),
            anim: RefCell::new(Animated::new(0.0)),
            presenting: Cell::new(false),
            dismissing: Cell::new(false),
            scroll: ScrollTracking::new(),
        })
    }

    // --- read surface ---------------------------------------------------

    pub fn config(&self) -> SheetConfig {
        self.config.get()
    }

    /// Replace the configuration. Follow up with
    /// [`SheetController::set_needs_layout_update`] once all values are in
    /// place; anchors are never recomputed implicitly.
    pub fn set_config(&self, config: SheetConfig) {
        self.config.set(config);
    }

    pub fn anchors(&self) -> Option<Anchors> {
        self.anchors.get()
    }

    pub fn presentation_state(&self) -> PresentationState {
        self.state.get()
    }

    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    /// Observable frame, for renderers that redraw on position changes.
    pub fn frame_signal(&self) -> Signal<Rect> {
        self.frame.clone()
    }

    /// The sheet's top edge in container coordinates.
    pub fn position(&self) -> f32 {
        self.frame.with(|f| f.min_y())
    }

    pub fn dim_state(&self) -> DimState {
        self.dim.get()
    }

    pub fn dim_signal(&self) -> Signal<DimState> {
        self.dim.clone()
    }

    /// Size available to the presented content below the anchored ceiling.
    pub fn content_size(&self) -> Size {
        let container = self.env.borrow().container;
        let anchored_y = self.anchors.get().map(|a| a.anchored_y).unwrap_or(0.0);
        Size::new(container.width, container.height - anchored_y)
    }

    pub fn is_animating(&self) -> bool {
        self.animating.get()
    }

    /// The sheet rests at its ceiling with hand-off to the embedded
    /// scrollable enabled, and nothing is in flight.
    pub fn is_anchored(&self) -> bool {
        let Some(anchors) = self.anchors.get() else {
            return false;
        };
        !self.animating.get()
            && self.config.get().allows_extended_pan_scrolling
            && self.position().round() <= anchors.anchored_y.round()
    }

    // --- layout ---------------------------------------------------------

    /// Install the geometry for the next layout pass and rebuild anchors,
    /// frame fit, and the scroll observer.
    pub fn set_environment(&self, env: LayoutEnv) {
        *self.env.borrow_mut() = env;
        self.set_needs_layout_update();
    }

    /// Recomputes anchors from the current config and environment, re-fits
    /// the frame, and re-attaches the scroll observer. Call whenever any
    /// configuration value changes after the initial presentation.
    pub fn set_needs_layout_update(&self) {
        self.configure_layout();
        self.refit_frame();
        self.observe_scrollable();
        self.configure_scroll_insets();
    }

    fn configure_layout(&self) {
        let config = self.config.get();
        let env = self.env.borrow();
        if env.container.is_empty() {
            log::warn!("sheet layout skipped: container has no size");
            return;
        }
        self.anchors.set(compute_anchors(&config, &env));
    }

    // Re-derives the frame after container changes. A sheet resting at an
    // anchor keeps its position; anything else is re-offset by the height
    // delta so rotations don't leave it out of sync.
    fn refit_frame(&self) {
        let Some(anchors) = self.anchors.get() else {
            return;
        };
        let container = self.env.borrow().container;
        let old = self.frame.get();

        if old.y != anchors.short_form_y && old.y != anchors.long_form_y {
            let y = old.y - old.h + container.height;
            self.frame.set(Rect {
                x: 0.0,
                y: y.max(anchors.anchored_y),
                w: container.width,
                h: container.height,
            });
        } else {
            self.frame.update(|f| {
                f.x = 0.0;
                f.w = container.width;
                f.h = container.height;
            });
        }
    }

    // --- presentation lifecycle ------------------------------------------

    /// Bring the sheet up from the bottom edge to its short form. The host
    /// calls [`SheetController::finish_presentation`] when its transition
    /// completes; a non-animated presentation finishes immediately.
    pub fn present(&self, animated: bool) {
        let Some(anchors) = self.anchors.get() else {
            log::warn!("present skipped: no layout has been computed");
            return;
        };
        let container = self.env.borrow().container;

        self.frame.set(Rect {
            x: 0.0,
            y: container.height,
            w: container.width,
            h: container.height,
        });
        self.presenting.set(true);
        self.dim.set(DimState::Max);

        if self.config.get().is_haptic_feedback_enabled {
            (self.hooks.haptic)();
        }

        log::debug!("presenting sheet at short form (y = {})", anchors.short_form_y);
        self.snap(anchors.short_form_y, animated);
        if !animated {
            self.presenting.set(false);
        }
    }

    pub fn finish_presentation(&self) {
        self.presenting.set(false);
    }

    /// Start tearing the sheet down: notifies the host, kills the dim
    /// overlay, and sends the sheet below the bottom edge.
    pub fn begin_dismissal(&self, animated: bool) {
        (self.hooks.will_dismiss)();
        self.dismissing.set(true);
        self.dim.set(DimState::Off);

        if self.anchors.get().is_some() {
            let container = self.env.borrow().container;
            self.snap(container.height, animated);
        }
    }

    pub fn finish_dismissal(&self) {
        self.dismissing.set(false);
        (self.hooks.did_dismiss)();
    }

    /// A tap landed on the dim overlay.
    pub fn handle_overlay_tap(&self) {
        if self.config.get().allows_tap_to_dismiss {
            (self.hooks.request_dismiss)();
        }
    }

    // --- position machine ------------------------------------------------

    /// Move between the resting detents. No-op unless the host's
    /// `should_transition` predicate approves; requesting the current state
    /// is harmless (the animation still runs so callers can re-lay-out).
    pub fn transition(&self, state: PresentationState, animated: bool) {
        let Some(anchors) = self.anchors.get() else {
            return;
        };
        if !(self.hooks.should_transition)(state) {
            return;
        }
        (self.hooks.will_transition)(state);
        log::debug!("transition to {state:?} (animated: {animated})");

        self.state.set(state);
        match state {
            PresentationState::ShortForm => self.snap(anchors.short_form_y, animated),
            PresentationState::LongForm => self.snap(anchors.long_form_y, animated),
        }
    }

    /// Authoritative position setter. The target is clamped so the sheet
    /// can never end up above its anchored ceiling.
    pub(crate) fn snap(&self, y: f32, animated: bool) {
        let Some(anchors) = self.anchors.get() else {
            return;
        };
        let target = y.max(anchors.anchored_y);

        if animated {
            let config = self.config.get();
            let now = self.clock.now();
            self.animating.set(true);
            let mut anim = self.anim.borrow_mut();
            anim.set(self.position());
            anim.animate_to(
                target,
                AnimationSpec::spring(config.spring_damping, config.transition_duration),
                now,
            );
        } else {
            self.adjust(target);
        }
    }

    /// Continuous-drag position setter: clamps, supersedes any in-flight
    /// snap, and recomputes the dim overlay.
    pub(crate) fn adjust(&self, y: f32) {
        if self.anim.borrow().is_animating() {
            // The explicit write wins; the cancelled animation never
            // re-asserts its target.
            self.anim.borrow_mut().cancel();
            self.animating.set(false);
        }
        self.apply_position(y);
    }

    fn apply_position(&self, y: f32) {
        let Some(anchors) = self.anchors.get() else {
            return;
        };
        let y = y.max(anchors.anchored_y);
        self.frame.update(|f| f.y = y);

        if self.presenting.get() || self.dismissing.get() {
            // Dim is pinned to Max/Off for the duration of the transition.
            return;
        }
        let height = self.frame.with(|f| f.h);
        self.dim.set(dim_for_position(y, anchors.short_form_y, height));
    }

    /// Raw frame write for the bounce hand-off; deliberately unclamped so
    /// the sheet can follow the scrollable's rubber-band above its ceiling.
    pub(crate) fn set_position_raw(&self, y: f32) {
        self.frame.update(|f| f.y = y);
    }

    pub(crate) fn set_bounds_height(&self, height: f32) {
        self.frame.update(|f| f.h = height);
    }

    /// Advances the snap animation on the host's cadence; returns true
    /// while motion is still in flight. Completion only clears the
    /// animating flag — it never re-sets position.
    pub fn tick(&self) -> bool {
        if !self.anim.borrow().is_animating() {
            return false;
        }
        let now = self.clock.now();
        let (running, value) = {
            let mut anim = self.anim.borrow_mut();
            let running = anim.tick(now);
            (running, *anim.get())
        };
        self.apply_position(value);
        if !running {
            self.animating.set(false);
        }
        running
    }
}
