/// Lifecycle phase of a pan gesture. Per gesture the host delivers one
/// `Began`, zero or more `Changed`, and exactly one terminal phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl PanPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PanPhase::Ended | PanPhase::Cancelled)
    }
}

/// One vertical pan sample as delivered by the host's recognizer.
///
/// `translation_delta` is the movement since the previous sample; the host
/// resets its accumulated translation after handing each sample over, so
/// deltas never double-count.
#[derive(Clone, Copy, Debug)]
pub struct PanSample {
    pub phase: PanPhase,
    pub translation_delta: f32,
    pub velocity: f32,
}

impl PanSample {
    pub fn began() -> Self {
        Self {
            phase: PanPhase::Began,
            translation_delta: 0.0,
            velocity: 0.0,
        }
    }

    pub fn changed(translation_delta: f32) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation_delta,
            velocity: 0.0,
        }
    }

    pub fn ended(velocity: f32) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation_delta: 0.0,
            velocity,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation_delta: 0.0,
            velocity: 0.0,
        }
    }
}

/// Content-offset change of an embedded scrollable, old value included —
/// the direction of travel matters to the consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollChange {
    pub old: f32,
    pub new: f32,
}
