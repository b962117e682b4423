//! Time-based offset animation with easing curves.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use flipsnap_core::{Clock, TimerRegistration, TimerScheduler};

/// Cadence of the manual animator, in milliseconds.
pub const TICK_INTERVAL_MILLIS: u64 = 10;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions run by the manual animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quadratic ease-out, `f(t) = -t * (t - 2)`.
    EaseOutQuad,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => t,
            Easing::EaseOutQuad => -t * (t - 2.0),
        }
    }
}

/// CSS `cubic-bezier()` timing function handed to declarative transitions.
/// The host evaluates it; only its CSS form is needed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// `cubic-bezier(0,0,0.25,1)`, the carousel's transition curve.
    pub const DECELERATE: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.25,
        y2: 1.0,
    };
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({},{},{},{})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(350, Easing::EaseOutQuad)
    }
}

/// Timer-driven animator for a single horizontal offset.
///
/// Each run owns one repeating timer registration. Starting a new run or
/// calling [`OffsetAnimator::cancel`] drops the previous registration, so two
/// runs can never write to the same element concurrently.
pub struct OffsetAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

struct AnimatorInner {
    position: f32,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    begin_millis: u64,
    generation: u64,
    registration: Option<TimerRegistration>,
    on_frame: Option<Box<dyn FnMut(f32)>>,
    on_finished: Option<Box<dyn FnOnce()>>,
}

impl OffsetAnimator {
    pub fn new(initial: f32) -> Self {
        let inner = AnimatorInner {
            position: initial,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            begin_millis: 0,
            generation: 0,
            registration: None,
            on_frame: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Last value written by the animator (or recorded via `set_position`).
    pub fn position(&self) -> f32 {
        self.inner.borrow().position
    }

    /// Record a position written outside the animator, e.g. during a drag.
    pub fn set_position(&self, position: f32) {
        self.inner.borrow_mut().position = position;
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate from the current position to `target`.
    ///
    /// `on_frame` receives every interpolated value, ending with exactly
    /// `target`. `on_finished` runs once after the final frame; it does not
    /// run if the animation is cancelled or superseded.
    pub fn animate_to(
        &self,
        target: f32,
        spec: AnimationSpec,
        clock: &Rc<dyn Clock>,
        scheduler: &Rc<dyn TimerScheduler>,
        on_frame: impl FnMut(f32) + 'static,
        on_finished: impl FnOnce() + 'static,
    ) {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.registration.take();
            inner.generation += 1;
            inner.start = inner.position;
            inner.target = target;
            inner.spec = spec;
            inner.begin_millis = clock.now_millis();
            inner.on_frame = Some(Box::new(on_frame));
            inner.on_finished = Some(Box::new(on_finished));
            inner.generation
        };
        log::trace!(
            "animator run {generation}: {} -> {target} over {}ms",
            self.position(),
            spec.duration_millis
        );

        let weak = Rc::downgrade(&self.inner);
        let clock = Rc::clone(clock);
        let registration =
            TimerRegistration::repeating(scheduler, TICK_INTERVAL_MILLIS, move || {
                if let Some(strong) = weak.upgrade() {
                    Self::on_tick(&strong, clock.as_ref(), generation);
                }
            });

        let mut inner = self.inner.borrow_mut();
        if inner.generation == generation {
            inner.registration = Some(registration);
        }
    }

    /// Stop the current run, leaving the position at the last written frame.
    pub fn cancel(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.on_frame = None;
            inner.on_finished = None;
            inner.target = inner.position;
            inner.registration.take()
        };
        drop(registration);
    }

    fn on_tick(this: &Rc<RefCell<AnimatorInner>>, clock: &dyn Clock, generation: u64) {
        let (value, finished, mut on_frame) = {
            let mut inner = this.borrow_mut();
            if inner.generation != generation {
                return;
            }
            let elapsed = clock.now_millis().saturating_sub(inner.begin_millis);
            let duration = inner.spec.duration_millis;
            let (value, finished) = if elapsed > duration {
                (inner.target, true)
            } else {
                let fraction = elapsed as f32 / duration.max(1) as f32;
                let progress = inner.spec.easing.transform(fraction);
                (inner.start.lerp(&inner.target, progress), false)
            };
            inner.position = value;
            (value, finished, inner.on_frame.take())
        };

        if let Some(callback) = on_frame.as_mut() {
            callback(value);
        }

        let (registration, on_finished) = {
            let mut inner = this.borrow_mut();
            if inner.generation != generation {
                return;
            }
            if finished {
                inner.start = inner.target;
                (inner.registration.take(), inner.on_finished.take())
            } else {
                inner.on_frame = on_frame;
                (None, None)
            }
        };
        drop(registration);

        if let Some(callback) = on_finished {
            callback();
        }
    }
}

impl Default for OffsetAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl std::fmt::Debug for OffsetAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("OffsetAnimator")
            .field("position", &inner.position)
            .field("target", &inner.target)
            .field("running", &inner.registration.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
