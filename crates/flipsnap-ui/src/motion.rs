use crate::env::CarouselEnv;
use flipsnap_animation::{AnimationSpec, CubicBezier, Easing, OffsetAnimator};
use flipsnap_foundation::{Capabilities, StyleDeclaration, StyleSink, Translate};
use flipsnap_ui_graphics::Px;

/// Whether a motion finished on the spot or is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    Immediate,
    InFlight,
}

/// Moves the container to a horizontal offset.
///
/// With transform and transition support the offset is written as a
/// transform and the host animates it. Otherwise `left` is written, either
/// directly or through an [`OffsetAnimator`] when a duration is armed.
/// `current_x` is always the logical target of the latest motion, relative
/// to `origin`.
#[derive(Debug)]
pub struct MotionEngine {
    capabilities: Capabilities,
    use_3d: bool,
    current_x: f32,
    origin: f32,
    manual: bool,
    duration_millis: u64,
    in_flight: bool,
    animator: OffsetAnimator,
}

impl MotionEngine {
    pub fn new(capabilities: Capabilities, disable_3d: bool) -> Self {
        Self {
            capabilities,
            use_3d: capabilities.transform3d && !disable_3d,
            current_x: 0.0,
            origin: 0.0,
            manual: false,
            duration_millis: 0,
            in_flight: false,
            animator: OffsetAnimator::new(0.0),
        }
    }

    /// Initial styles written once at construction.
    pub fn install(&self, sink: &impl StyleSink) {
        if self.uses_transitions() {
            sink.apply_styles(&[
                StyleDeclaration::TransitionProperty,
                StyleDeclaration::TransitionTimingFunction(CubicBezier::DECELERATE),
                StyleDeclaration::TransitionDuration { millis: 0 },
                StyleDeclaration::Transform(self.translate(0.0)),
            ]);
        } else {
            sink.apply_styles(&[
                StyleDeclaration::PositionRelative,
                StyleDeclaration::Left(Px(0.0)),
            ]);
        }
        if self.capabilities.pointer_events {
            sink.apply_style(&StyleDeclaration::TouchActionPanY);
        }
    }

    pub fn uses_transitions(&self) -> bool {
        self.capabilities.css_animation()
    }

    pub fn uses_3d(&self) -> bool {
        self.use_3d
    }

    pub fn current_x(&self) -> f32 {
        self.current_x
    }

    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// Offset the container is currently rendered at. Mid-animation this
    /// lags `origin + current_x` on the manual path; with transitions only
    /// the target is known.
    pub fn visual_offset(&self) -> f32 {
        if self.uses_transitions() {
            self.origin + self.current_x
        } else {
            self.animator.position()
        }
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight || self.animator.is_running()
    }

    /// Prepare for a drag: stop animating and follow the pointer 1:1.
    pub fn begin_tracking(&mut self, sink: &impl StyleSink) {
        self.animator.cancel();
        self.in_flight = false;
        self.duration_millis = 0;
        if self.uses_transitions() {
            sink.apply_style(&StyleDeclaration::TransitionDuration { millis: 0 });
        } else {
            self.manual = false;
            self.write_left(sink);
        }
    }

    /// Set the duration used by the next `animate_to`.
    pub fn arm(&mut self, sink: &impl StyleSink, duration_millis: u64) {
        self.duration_millis = duration_millis;
        if self.uses_transitions() {
            sink.apply_style(&StyleDeclaration::TransitionDuration {
                millis: duration_millis,
            });
        } else {
            self.manual = true;
        }
    }

    /// Follow the pointer without animation.
    pub fn drag_to(&mut self, sink: &impl StyleSink, x: f32) {
        self.current_x = x;
        if self.uses_transitions() {
            sink.apply_style(&StyleDeclaration::Transform(self.translate(x)));
        } else {
            self.write_left(sink);
        }
    }

    /// Move to `x` using the armed duration. `on_finished` only runs for
    /// motions driven by the manual animator; declarative transitions end
    /// through [`MotionEngine::finish_transition`].
    pub fn animate_to<S>(
        &mut self,
        sink: &S,
        x: f32,
        env: &CarouselEnv,
        on_finished: impl FnOnce() + 'static,
    ) -> Settle
    where
        S: StyleSink + Clone + 'static,
    {
        let moved = self.current_x != x;
        self.current_x = x;
        if self.uses_transitions() {
            sink.apply_style(&StyleDeclaration::Transform(self.translate(x)));
            // an unchanged transform never reports transitionend
            self.in_flight = self.duration_millis > 0 && (moved || self.in_flight);
        } else if self.manual && self.duration_millis > 0 {
            let target = self.origin + x;
            let frame_sink = sink.clone();
            self.animator.animate_to(
                target,
                AnimationSpec::tween(self.duration_millis, Easing::EaseOutQuad),
                &env.clock,
                &env.scheduler,
                move |value| frame_sink.apply_style(&StyleDeclaration::Left(Px(value))),
                on_finished,
            );
        } else {
            self.animator.cancel();
            self.write_left(sink);
        }

        if self.is_animating() {
            Settle::InFlight
        } else {
            Settle::Immediate
        }
    }

    /// Jump to `x` with no animation and leave the duration at zero.
    pub fn snap_to(&mut self, sink: &impl StyleSink, x: f32) {
        self.animator.cancel();
        self.in_flight = false;
        self.duration_millis = 0;
        self.current_x = x;
        if self.uses_transitions() {
            sink.apply_styles(&[
                StyleDeclaration::TransitionDuration { millis: 0 },
                StyleDeclaration::Transform(self.translate(x)),
            ]);
        } else {
            self.write_left(sink);
        }
    }

    /// Shift the resting position, used by the marquee ring.
    pub fn set_origin(&mut self, sink: &impl StyleSink, origin: f32) {
        self.origin = origin;
        sink.apply_style(&StyleDeclaration::PositionRelative);
        if self.uses_transitions() {
            sink.apply_style(&StyleDeclaration::Left(Px(origin)));
        } else {
            self.animator.cancel();
            self.write_left(sink);
        }
    }

    /// Mark a declarative transition as ended. Returns whether one was
    /// running.
    pub fn finish_transition(&mut self) -> bool {
        std::mem::replace(&mut self.in_flight, false)
    }

    pub fn cancel(&mut self) {
        self.animator.cancel();
        self.in_flight = false;
    }

    fn translate(&self, x: f32) -> Translate {
        Translate::new(x, self.use_3d)
    }

    fn write_left(&self, sink: &impl StyleSink) {
        let left = self.origin + self.current_x;
        self.animator.set_position(left);
        sink.apply_style(&StyleDeclaration::Left(Px(left)));
    }
}

#[cfg(test)]
#[path = "tests/motion_tests.rs"]
mod tests;
