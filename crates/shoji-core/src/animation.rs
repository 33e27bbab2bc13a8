use std::cell::Cell;
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Underdamped settle toward the target. `damping` is the damping
    /// ratio; `1.0` and above degenerate to an ease-out.
    Spring { damping: f32 },
}

impl Easing {
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping } => {
                let zeta = damping.max(0.05);
                if zeta >= 1.0 {
                    return t * (2.0 - t);
                }
                // Natural frequency chosen so the response settles within
                // the normalized interval.
                let omega = 12.0_f32;
                let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn spring(damping: f32, duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Spring { damping },
        }
    }
}

/// Source of the current instant. Hosts install [`SystemClock`]; tests
/// drive a [`ManualClock`].
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock advanced by hand, for deterministic tests and scripted drivers.
pub struct ManualClock {
    t: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// A value tweened toward a target on externally driven ticks.
pub struct Animated<T: Interpolate + Clone> {
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    started_at: Option<Instant>,
}

impl<T: Interpolate + Clone> Animated<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            started_at: None,
        }
    }

    /// Jump to `value` immediately, dropping any running animation.
    pub fn set(&mut self, value: T) {
        self.current = value.clone();
        self.target = value;
        self.started_at = None;
    }

    pub fn animate_to(&mut self, target: T, spec: AnimationSpec, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.spec = spec;
        self.started_at = Some(now);
    }

    /// Stop where we are; the target is never re-asserted.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    /// Advance to `now`; returns true while the animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.started_at = None;
            return false;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        self.current = self.start.interpolate(&self.target, self.spec.easing.evaluate(t));
        true
    }
}
