use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shoji_core::{signal, Dispose, ScrollChange, Signal};

use crate::presentation::SheetController;

/// Interaction surface of the embedded scrollable.
///
/// The host mirrors its real scroll view into this object: offset changes
/// (old and new value), plus the dragging / decelerating / tracking flags.
/// The sheet writes back through the same object when it halts scrolling or
/// toggles the indicator.
pub struct ContentScrollState {
    offset_y: Cell<f32>,
    pub(crate) changes: Signal<ScrollChange>,
    dragging: Cell<bool>,
    decelerating: Cell<bool>,
    tracking: Cell<bool>,
    shows_indicator: Cell<bool>,
    bottom_inset: Cell<f32>,
}

impl ContentScrollState {
    pub fn new() -> Self {
        Self {
            offset_y: Cell::new(0.0),
            changes: signal(ScrollChange { old: 0.0, new: 0.0 }),
            dragging: Cell::new(false),
            decelerating: Cell::new(false),
            tracking: Cell::new(false),
            shows_indicator: Cell::new(true),
            bottom_inset: Cell::new(0.0),
        }
    }

    pub fn content_offset(&self) -> f32 {
        self.offset_y.get()
    }

    /// Both the host and the sheet route offset writes through here.
    /// Writing the current value again does not re-notify, which lets a
    /// halt settle instead of echoing forever.
    pub fn set_content_offset(&self, y: f32) {
        let old = self.offset_y.get();
        if old == y {
            return;
        }
        self.offset_y.set(y);
        self.changes.set(ScrollChange { old, new: y });
    }

    pub fn set_dragging(&self, dragging: bool) {
        self.dragging.set(dragging);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    pub fn set_decelerating(&self, decelerating: bool) {
        self.decelerating.set(decelerating);
    }

    pub fn is_decelerating(&self) -> bool {
        self.decelerating.get()
    }

    /// A touch currently rests on the scrollable, moving or not.
    pub fn set_tracking(&self, tracking: bool) {
        self.tracking.set(tracking);
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.get()
    }

    /// The user is actively driving the scrollable (as opposed to it
    /// coasting through a deceleration).
    pub fn is_scrolling(&self) -> bool {
        self.dragging.get() && !self.decelerating.get() || self.tracking.get()
    }

    pub fn shows_indicator(&self) -> bool {
        self.shows_indicator.get()
    }

    pub(crate) fn set_shows_indicator(&self, shows: bool) {
        self.shows_indicator.set(shows);
    }

    pub fn bottom_inset(&self) -> f32 {
        self.bottom_inset.get()
    }

    pub(crate) fn set_bottom_inset(&self, inset: f32) {
        self.bottom_inset.set(inset);
    }

    /// Offset-change subscription; the returned handle unsubscribes.
    pub fn observe_changes(&self, f: impl Fn(&ScrollChange) + 'static) -> Dispose {
        self.changes.subscribe(f)
    }
}

impl Default for ContentScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scroll-coordination state owned by the sheet: the offset baseline the
/// scrollable is held at while the sheet is mid-drag, and the single
/// exclusively-owned change subscription.
pub(crate) struct ScrollTracking {
    pub(crate) last_offset_y: Cell<f32>,
    pub(crate) observer: RefCell<Option<Dispose>>,
    pub(crate) scrollable: RefCell<Option<Rc<ContentScrollState>>>,
}

impl ScrollTracking {
    pub(crate) fn new() -> Self {
        Self {
            last_offset_y: Cell::new(0.0),
            observer: RefCell::new(None),
            scrollable: RefCell::new(None),
        }
    }

    pub(crate) fn scrollable(&self) -> Option<Rc<ContentScrollState>> {
        self.scrollable.borrow().clone()
    }
}

impl SheetController {
    /// Attach (or detach) the embedded scrollable and take over its offset
    /// observation.
    pub fn set_scrollable(&self, scrollable: Option<Rc<ContentScrollState>>) {
        *self.scroll.scrollable.borrow_mut() = scrollable;
        self.observe_scrollable();
        self.configure_scroll_insets();
    }

    pub fn scrollable(&self) -> Option<Rc<ContentScrollState>> {
        self.scroll.scrollable()
    }

    /// (Re-)subscribes to the scrollable's offset changes. The prior
    /// subscription is always released first so events are never delivered
    /// twice.
    pub(crate) fn observe_scrollable(&self) {
        let prior = self.scroll.observer.borrow_mut().take();
        if let Some(prior) = prior {
            prior.run();
        }

        let Some(scrollable) = self.scroll.scrollable() else {
            return;
        };
        let weak = self.weak_self.clone();
        let handle = scrollable.observe_changes(move |change| {
            let Some(sheet) = weak.upgrade() else {
                return;
            };
            // No layout yet: scroll events have no position to relate to.
            if sheet.anchors.get().is_none() {
                return;
            }
            sheet.on_scroll_change(*change);
        });
        *self.scroll.observer.borrow_mut() = Some(handle);
    }

    pub(crate) fn configure_scroll_insets(&self) {
        let Some(scrollable) = self.scroll.scrollable() else {
            return;
        };
        if scrollable.is_scrolling() {
            return;
        }
        // Indicator stays hidden until scrolling actually starts.
        scrollable.set_shows_indicator(false);
        scrollable.set_bottom_inset(self.env.borrow().bottom_inset);
    }

    // Decides, per offset change, whether the event belongs to the sheet
    // drag or to the content's own scrolling.
    fn on_scroll_change(&self, change: ScrollChange) {
        // No coordination while the sheet itself is being shown or torn
        // down.
        if self.presenting.get() || self.dismissing.get() {
            return;
        }
        let Some(scrollable) = self.scroll.scrollable() else {
            return;
        };

        if !self.is_anchored() && change.new > 0.0 {
            // Sheet is mid-drag; the content must not also scroll.
            self.halt_scrolling(&scrollable);
        } else if scrollable.is_scrolling() || self.is_animating() {
            if self.is_anchored() {
                self.track_scrolling(&scrollable, change.new);
            } else {
                // Sheet still settling; keep the content pinned.
                self.halt_scrolling(&scrollable);
            }
        } else if self.config.get().content_is_scrollable
            && !self.is_animating()
            && change.new <= 0.0
        {
            self.handle_top_bounce(&scrollable, change);
        } else {
            self.track_scrolling(&scrollable, change.new);
        }
    }

    fn halt_scrolling(&self, scrollable: &ContentScrollState) {
        scrollable.set_content_offset(self.scroll.last_offset_y.get());
        scrollable.set_shows_indicator(false);
    }

    fn track_scrolling(&self, scrollable: &ContentScrollState, offset: f32) {
        self.scroll.last_offset_y.set(offset.max(0.0));
        scrollable.set_shows_indicator(true);
    }

    // The scrollable has rubber-banded past its top while decelerating.
    // Follow its curve with the sheet's own edge so the two surfaces read
    // as one, then finish the hand-off with a single animated snap once the
    // deceleration reverses.
    fn handle_top_bounce(&self, scrollable: &ContentScrollState, change: ScrollChange) {
        if !scrollable.is_decelerating() {
            return;
        }
        let Some(anchors) = self.anchors.get() else {
            return;
        };
        let container = self.env.borrow().container;
        let offset = change.new;

        self.set_bounds_height(container.height + offset);

        if change.old > offset {
            // Overscroll still growing: transfer the deceleration into
            // continued sheet motion.
            self.set_position_raw(anchors.long_form_y - offset);
        } else {
            self.scroll.last_offset_y.set(0.0);
            self.snap(anchors.long_form_y, true);
        }
        scrollable.set_shows_indicator(false);
    }
}
