use crate::env::CarouselEnv;
use crate::events::{CarouselEvent, PointMoveDetail, TouchEndDetail};
use crate::host::{CarouselElement, ElementResolver, ListenerKind, Target};
use crate::marquee::MarqueeRing;
use crate::motion::{MotionEngine, Settle};
use crate::options::CarouselOptions;
use crate::CarouselError;
use flipsnap_core::TimerRegistration;
use flipsnap_foundation::{
    rubber_band, snap_point, ClickEvent, EndOutcome, MoveOutcome, PointerEvent, PointerEventKind,
    PointerSource, PointerTarget, StyleDeclaration, StyleSink, SwipeDirection, SwipeGesture,
    SwipePhase, CLICK_SUPPRESSION_MILLIS,
};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const SOURCES: [PointerSource; 2] = [PointerSource::Touch, PointerSource::Mouse];

/// Paginated swipe carousel bound to one container element.
///
/// Cloning yields another handle to the same carousel. Notifications are
/// dispatched after internal state is released, so listeners may call back
/// into any handle.
pub struct Carousel<E: CarouselElement> {
    inner: Rc<RefCell<CarouselInner<E>>>,
}

impl<E: CarouselElement> Clone for Carousel<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct CarouselInner<E: CarouselElement> {
    element: E,
    options: CarouselOptions,
    env: CarouselEnv,
    max_point: i32,
    distance: f32,
    max_x: f32,
    current_point: i32,
    direction: SwipeDirection,
    gesture: SwipeGesture,
    motion: MotionEngine,
    marquee: Option<MarqueeRing>,
    click_intercepting: bool,
    click_release: Option<TimerRegistration>,
    destroyed: bool,
    outbox: SmallVec<[CarouselEvent; 4]>,
    this: Weak<RefCell<CarouselInner<E>>>,
}

/// A confirmed drag step waiting on the `fstouchmove` veto.
#[derive(Clone, Copy, Debug)]
struct DragStep {
    delta_x: f32,
    direction: SwipeDirection,
}

impl<E: CarouselElement> Carousel<E> {
    pub fn new(element: E, options: CarouselOptions, env: CarouselEnv) -> Self {
        let motion = MotionEngine::new(env.capabilities, options.disable_3d);
        let inner = Rc::new_cyclic(|this| {
            RefCell::new(CarouselInner {
                element,
                options,
                env,
                max_point: 0,
                distance: 0.0,
                max_x: 0.0,
                current_point: 0,
                direction: SwipeDirection::None,
                gesture: SwipeGesture::new(),
                motion,
                marquee: None,
                click_intercepting: false,
                click_release: None,
                destroyed: false,
                outbox: SmallVec::new(),
                this: this.clone(),
            })
        });
        {
            let mut guard = inner.borrow_mut();
            let state = &mut *guard;
            state.motion.install(&state.element);
            state.refresh();
            for source in SOURCES {
                state.element.listen(ListenerKind::Start(source));
            }
            state.element.listen(ListenerKind::TransitionEnd);
            log::debug!(
                "carousel created: max_point={} distance={} marquee={}",
                state.max_point,
                state.distance,
                state.marquee.is_some()
            );
        }
        let carousel = Self { inner };
        carousel.flush();
        carousel
    }

    /// Resolve `target` and attach a carousel to it.
    pub fn with_target(
        target: Target<'_, E>,
        resolver: &impl ElementResolver<E>,
        options: CarouselOptions,
        env: CarouselEnv,
    ) -> Result<Self, CarouselError> {
        let element = target.resolve(resolver)?;
        Ok(Self::new(element, options, env))
    }

    /// Re-measure layout and re-snap to the current point.
    pub fn refresh(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.is_live("refresh") {
                return;
            }
            inner.refresh();
        }
        self.flush();
    }

    pub fn has_next(&self) -> bool {
        self.inner.borrow().has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.inner.borrow().has_prev()
    }

    pub fn to_next(&self) {
        self.to_next_with(None);
    }

    /// Advance one point, overriding the animation duration.
    pub fn to_next_with(&self, duration_millis: Option<u64>) {
        self.inner.borrow_mut().step(SwipeDirection::Forward, duration_millis);
        self.flush();
    }

    pub fn to_prev(&self) {
        self.to_prev_with(None);
    }

    pub fn to_prev_with(&self, duration_millis: Option<u64>) {
        self.inner.borrow_mut().step(SwipeDirection::Backward, duration_millis);
        self.flush();
    }

    pub fn move_to_point(&self, point: i32) {
        self.move_to_point_with(point, None);
    }

    /// Move to `point`, clamped to `[0, max_point]` outside marquee mode.
    pub fn move_to_point_with(&self, point: i32, duration_millis: Option<u64>) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.is_live("move_to_point") {
                return;
            }
            inner.settle_marquee();
            inner.move_to_point(point, duration_millis);
        }
        self.flush();
    }

    /// Feed one pointer event from the host.
    pub fn handle_pointer(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.inner.borrow_mut().on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.inner.borrow_mut().on_pointer_up(event)
            }
        }
        self.flush();
    }

    /// Capture-phase click hook. Returns `true` when the click was
    /// swallowed because it ended a swipe.
    pub fn handle_click(&self, click: &ClickEvent) -> bool {
        let inner = self.inner.borrow();
        if inner.destroyed || !inner.click_intercepting {
            return false;
        }
        click.prevent_default();
        click.stop_propagation();
        log::trace!("click suppressed after swipe");
        true
    }

    /// The host reports the end of a transform transition.
    pub fn handle_transition_end(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.motion.finish_transition() {
                inner.complete_motion();
            }
        }
        self.flush();
    }

    /// Detach every listener and stop pending timers. Later calls are
    /// ignored.
    pub fn destroy(&self) {
        self.inner.borrow_mut().destroy();
    }

    pub fn current_point(&self) -> i32 {
        self.inner.borrow().current_point
    }

    pub fn current_x(&self) -> f32 {
        self.inner.borrow().motion.current_x()
    }

    pub fn visual_offset(&self) -> f32 {
        self.inner.borrow().motion.visual_offset()
    }

    pub fn max_point(&self) -> i32 {
        self.inner.borrow().max_point
    }

    pub fn max_x(&self) -> f32 {
        self.inner.borrow().max_x
    }

    pub fn distance(&self) -> f32 {
        self.inner.borrow().distance
    }

    pub fn direction(&self) -> SwipeDirection {
        self.inner.borrow().direction
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.borrow().gesture.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().motion.is_animating()
    }

    pub fn is_intercepting_clicks(&self) -> bool {
        self.inner.borrow().click_intercepting
    }

    pub fn marquee_ring(&self) -> Option<MarqueeRing> {
        self.inner.borrow().marquee
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    pub fn options(&self) -> CarouselOptions {
        self.inner.borrow().options.clone()
    }

    pub fn element(&self) -> E {
        self.inner.borrow().element.clone()
    }

    fn on_pointer_move(&self, event: &PointerEvent) {
        let Some(step) = self.inner.borrow_mut().begin_drag(event) else {
            return;
        };
        self.flush();
        let element = self.element();
        let allowed = element.dispatch_event(&CarouselEvent::TouchMove {
            delta: step.delta_x,
            direction: step.direction,
        });
        self.inner.borrow_mut().finish_drag(step, allowed);
    }

    fn flush(&self) {
        loop {
            let (element, events) = {
                let mut inner = self.inner.borrow_mut();
                if inner.outbox.is_empty() {
                    return;
                }
                (inner.element.clone(), std::mem::take(&mut inner.outbox))
            };
            for event in &events {
                log::trace!("dispatch {}", event.event_type());
                element.dispatch_event(event);
            }
        }
    }
}

impl<E: CarouselElement> std::fmt::Debug for Carousel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Carousel")
            .field("current_point", &inner.current_point)
            .field("max_point", &inner.max_point)
            .field("distance", &inner.distance)
            .field("phase", &inner.gesture.phase())
            .field("marquee", &inner.marquee)
            .field("destroyed", &inner.destroyed)
            .finish_non_exhaustive()
    }
}

impl<E: CarouselElement> CarouselInner<E> {
    fn refresh(&mut self) {
        if self.marquee.take().is_some() {
            self.element.remove_clones();
            self.element.apply_style(&StyleDeclaration::WidthAuto);
        }
        self.motion.cancel();

        let child_count = self.element.child_element_count();
        self.max_point = self
            .options
            .max_point
            .unwrap_or(child_count as i32 - 1);
        self.distance = match self.options.distance {
            Some(distance) => distance,
            None if self.max_point < 0 => 0.0,
            None => self.element.scroll_width() / (self.max_point + 1) as f32,
        };
        log::debug!(
            "refresh: children={child_count} max_point={} distance={}",
            self.max_point,
            self.distance
        );

        if self.options.marquee {
            self.marquee = MarqueeRing::measure(&self.element, child_count, self.distance);
            if let Some(ring) = self.marquee {
                ring.install(&self.element);
                self.motion.set_origin(&self.element, ring.origin());
                self.current_point = 0;
                self.motion.snap_to(&self.element, 0.0);
                return;
            }
            if self.motion.origin() != 0.0 {
                self.motion.set_origin(&self.element, 0.0);
            }
        }

        self.max_x = -self.distance * self.max_point as f32;
        self.move_to_point(self.current_point, Some(0));
    }

    fn has_next(&self) -> bool {
        self.current_point < self.max_point
    }

    fn has_prev(&self) -> bool {
        self.current_point > 0
    }

    fn is_live(&self, operation: &str) -> bool {
        if self.destroyed {
            log::debug!("{operation} ignored: carousel destroyed");
        }
        !self.destroyed
    }

    fn step(&mut self, direction: SwipeDirection, duration_millis: Option<u64>) {
        if !self.is_live("step") {
            return;
        }
        self.settle_marquee();
        self.direction = direction;
        if self.marquee.is_none() {
            let available = match direction {
                SwipeDirection::Forward => self.has_next(),
                _ => self.has_prev(),
            };
            if !available {
                return;
            }
        }
        self.move_to_point(self.current_point + direction.signum(), duration_millis);
    }

    fn clamp_point(&self, point: i32) -> i32 {
        match self.marquee {
            Some(ring) => ring.clamp_point(point),
            None => point.min(self.max_point).max(0),
        }
    }

    fn move_to_point(&mut self, point: i32, duration_millis: Option<u64>) {
        let before = self.current_point;
        self.current_point = self.clamp_point(point);

        let duration = duration_millis.unwrap_or(self.options.transition_duration_millis);
        self.motion.arm(&self.element, duration);
        let target_x = -(self.current_point as f32) * self.distance;
        let this = self.this.clone();
        let settle = self
            .motion
            .animate_to(&self.element, target_x, &self.env, move || {
                Self::on_animation_finished(&this)
            });

        if before != self.current_point {
            let detail = PointMoveDetail {
                original_point: before,
                new_point: self.current_point,
            };
            self.outbox.push(CarouselEvent::MoveEnd(detail));
            self.outbox.push(CarouselEvent::PointMove(detail));
        }
        if settle == Settle::Immediate {
            self.complete_motion();
        }
    }

    fn on_animation_finished(this: &Weak<RefCell<Self>>) {
        let Some(strong) = this.upgrade() else {
            return;
        };
        match strong.try_borrow_mut() {
            Ok(mut inner) => inner.complete_motion(),
            Err(_) => log::warn!("animation finished while carousel was busy"),
        };
    }

    /// Post-motion bookkeeping: re-home the marquee ring at its edges.
    fn complete_motion(&mut self) {
        let Some(ring) = self.marquee else {
            return;
        };
        if let Some(point) = ring.rehome_target(self.current_point) {
            log::debug!("marquee re-home {} -> {point}", self.current_point);
            self.current_point = point;
            self.motion
                .snap_to(&self.element, -(point as f32) * self.distance);
        }
    }

    /// Finish an in-flight marquee motion so its re-home happens before
    /// anything else moves the ring.
    fn settle_marquee(&mut self) {
        if self.marquee.is_some() && self.motion.is_animating() {
            self.motion.cancel();
            self.complete_motion();
        }
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) {
        if self.destroyed
            || self.options.disable_touch
            || self.gesture.phase().is_tracking()
            || self.env.gestures.in_progress()
        {
            return;
        }
        if let Some(stale) = self.gesture.session().map(|session| session.source) {
            self.detach_session_listeners(stale);
        }
        if !self.gesture.on_down(event) {
            return;
        }
        let source = event.source;
        self.element.listen(ListenerKind::Move(source));
        self.element.listen(ListenerKind::End(source));
        if source == PointerSource::Mouse && event.target != PointerTarget::FormControl {
            event.consume();
        }

        if self.motion.is_animating() {
            self.motion.cancel();
            self.complete_motion();
        }
        self.motion.begin_tracking(&self.element);
        self.direction = SwipeDirection::None;
        self.outbox.push(CarouselEvent::TouchStart);
    }

    fn begin_drag(&mut self, event: &PointerEvent) -> Option<DragStep> {
        if self.destroyed || self.env.gestures.in_progress() || !self.owns(event) {
            return None;
        }
        match self.gesture.on_move(event) {
            MoveOutcome::Ignored | MoveOutcome::Pending => None,
            MoveOutcome::Rejected => {
                log::trace!("vertical gesture, leaving it to the page");
                None
            }
            MoveOutcome::Confirmed => {
                event.consume();
                self.intercept_clicks();
                None
            }
            MoveOutcome::Dragged { delta_x, direction } => {
                event.consume();
                self.direction = direction;
                Some(DragStep { delta_x, direction })
            }
        }
    }

    fn finish_drag(&mut self, step: DragStep, allowed: bool) {
        if self.destroyed || self.gesture.phase() != SwipePhase::Swiping {
            return;
        }
        if !allowed {
            log::debug!("swipe vetoed by fstouchmove listener");
            self.gesture.cancel();
            let point = self.current_point;
            self.touch_after(TouchEndDetail {
                moved: false,
                original_point: point,
                new_point: point,
                cancelled: true,
            });
            return;
        }
        let (min_x, max_x) = match self.marquee {
            Some(ring) => ring.drag_range(self.distance),
            None => (self.max_x, 0.0),
        };
        let new_x = rubber_band(self.motion.current_x(), step.delta_x, min_x, max_x);
        self.motion.drag_to(&self.element, new_x);
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) {
        if self.destroyed || !self.owns(event) {
            return;
        }
        match self.gesture.on_up() {
            EndOutcome::Ignored => {}
            EndOutcome::Abandoned { source } => self.detach_session_listeners(source),
            EndOutcome::Released { source, direction } => {
                self.detach_session_listeners(source);
                self.direction = direction;
                let raw = if self.distance > 0.0 {
                    -self.motion.current_x() / self.distance
                } else {
                    self.current_point as f32
                };
                let target = self.clamp_point(snap_point(raw, direction));
                let original = self.current_point;
                self.touch_after(TouchEndDetail {
                    moved: target != original,
                    original_point: original,
                    new_point: target,
                    cancelled: false,
                });
                if self.marquee.is_none() || direction != SwipeDirection::None {
                    self.move_to_point(target, None);
                }
            }
        }
    }

    fn owns(&self, event: &PointerEvent) -> bool {
        self.gesture
            .session()
            .map_or(true, |session| session.source == event.source)
    }

    fn detach_session_listeners(&self, source: PointerSource) {
        self.element.unlisten(ListenerKind::Move(source));
        self.element.unlisten(ListenerKind::End(source));
    }

    fn touch_after(&mut self, detail: TouchEndDetail) {
        self.schedule_click_release();
        self.outbox.push(CarouselEvent::TouchEnd(detail));
    }

    fn intercept_clicks(&mut self) {
        self.click_release = None;
        if !self.click_intercepting {
            self.element.listen(ListenerKind::ClickCapture);
            self.click_intercepting = true;
        }
    }

    fn schedule_click_release(&mut self) {
        if !self.click_intercepting {
            return;
        }
        let this = self.this.clone();
        self.click_release = Some(TimerRegistration::once(
            &self.env.scheduler,
            CLICK_SUPPRESSION_MILLIS,
            move || {
                let Some(strong) = this.upgrade() else {
                    return;
                };
                match strong.try_borrow_mut() {
                    Ok(mut inner) => inner.release_clicks(),
                    Err(_) => log::warn!("click release fired while carousel was busy"),
                };
            },
        ));
    }

    fn release_clicks(&mut self) {
        if self.click_intercepting {
            self.element.unlisten(ListenerKind::ClickCapture);
            self.click_intercepting = false;
        }
        self.click_release = None;
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for source in SOURCES {
            self.element.unlisten(ListenerKind::Start(source));
        }
        if let Some(source) = self.gesture.session().map(|session| session.source) {
            self.detach_session_listeners(source);
        }
        self.gesture.reset();
        self.release_clicks();
        self.element.unlisten(ListenerKind::TransitionEnd);
        self.motion.cancel();
        self.outbox.clear();
        self.destroyed = true;
        log::debug!("carousel destroyed at point {}", self.current_point);
    }
}
