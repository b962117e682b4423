//! Robot-style driver for a carousel on virtual time.
//!
//! ```
//! use flipsnap_testing::{CarouselTestRule, FakeElement};
//! use flipsnap_ui::CarouselOptions;
//!
//! let mut rule = CarouselTestRule::new(FakeElement::with_items(3, 100.0), CarouselOptions::new());
//! rule.swipe(200.0, 120.0);
//! rule.wait_for_idle();
//! assert_eq!(rule.carousel().current_point(), 1);
//! ```

use crate::element::FakeElement;
use flipsnap_core::ManualTimers;
use flipsnap_foundation::{
    Capabilities, ClickEvent, InputRouter, PointerEvent, PointerEventKind, PointerSource,
    PointerTarget,
};
use flipsnap_ui::{Carousel, CarouselEnv, CarouselEvent, CarouselOptions, ListenerKind};
use flipsnap_ui_graphics::Point;

/// Number of intermediate moves in [`CarouselTestRule::swipe`].
const SWIPE_STEPS: usize = 10;
/// Virtual time between consecutive pointer samples.
const SAMPLE_INTERVAL_MILLIS: u64 = 16;
/// Upper bound for [`CarouselTestRule::wait_for_idle`].
const IDLE_LIMIT_MILLIS: u64 = 5_000;

pub struct CarouselTestRule {
    timers: ManualTimers,
    element: FakeElement,
    carousel: Carousel<FakeElement>,
    router: InputRouter,
    source: PointerSource,
    target: PointerTarget,
    cursor: Point,
}

impl CarouselTestRule {
    /// Carousel with transform and transition support.
    pub fn new(element: FakeElement, options: CarouselOptions) -> Self {
        Self::with_capabilities(element, options, Capabilities::ACCELERATED)
    }

    /// Carousel that animates through the manual `left` animator.
    pub fn legacy(element: FakeElement, options: CarouselOptions) -> Self {
        Self::with_capabilities(element, options, Capabilities::LEGACY)
    }

    pub fn with_capabilities(
        element: FakeElement,
        options: CarouselOptions,
        capabilities: Capabilities,
    ) -> Self {
        let timers = ManualTimers::new();
        let router = InputRouter::new();
        let env = CarouselEnv::manual(&timers)
            .with_capabilities(capabilities)
            .with_gestures(router.gesture_flag());
        let carousel = Carousel::new(element.clone(), options, env);
        Self {
            timers,
            element,
            carousel,
            router,
            source: PointerSource::Touch,
            target: PointerTarget::Content,
            cursor: Point::ZERO,
        }
    }

    pub fn carousel(&self) -> &Carousel<FakeElement> {
        &self.carousel
    }

    pub fn element(&self) -> &FakeElement {
        &self.element
    }

    pub fn timers(&self) -> &ManualTimers {
        &self.timers
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Drive subsequent gestures with the mouse instead of touch.
    pub fn use_mouse(&mut self) {
        self.source = PointerSource::Mouse;
    }

    pub fn use_touch(&mut self) {
        self.source = PointerSource::Touch;
    }

    /// Press on a form control instead of plain content.
    pub fn target_form_control(&mut self, form_control: bool) {
        self.target = if form_control {
            PointerTarget::FormControl
        } else {
            PointerTarget::Content
        };
    }

    pub fn press(&mut self, x: f32, y: f32) -> PointerEvent {
        self.cursor = Point::new(x, y);
        self.send(PointerEventKind::Down)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> PointerEvent {
        self.cursor = Point::new(x, y);
        self.send(PointerEventKind::Move)
    }

    /// Move horizontally by `dx`, keeping the current y.
    pub fn move_by(&mut self, dx: f32) -> PointerEvent {
        let Point { x, y } = self.cursor;
        self.move_to(x + dx, y)
    }

    pub fn release(&mut self) -> PointerEvent {
        self.send(PointerEventKind::Up)
    }

    pub fn cancel(&mut self) -> PointerEvent {
        self.send(PointerEventKind::Cancel)
    }

    /// Press at `from_x`, move horizontally to `to_x` in even steps and
    /// release.
    pub fn swipe(&mut self, from_x: f32, to_x: f32) {
        let y = 50.0;
        self.press(from_x, y);
        for step in 1..=SWIPE_STEPS {
            let t = step as f32 / SWIPE_STEPS as f32;
            self.move_to(from_x + (to_x - from_x) * t, y);
        }
        self.release();
    }

    /// Deliver a click and report whether the carousel swallowed it.
    pub fn click(&self) -> ClickEvent {
        let click = ClickEvent::new();
        if self.element.is_listening(ListenerKind::ClickCapture) {
            self.carousel.handle_click(&click);
        }
        click
    }

    pub fn advance_time(&self, millis: u64) {
        self.timers.advance_by(millis);
    }

    /// Run every pending timer and end any declarative transition.
    pub fn wait_for_idle(&self) {
        self.timers.run_until_idle(IDLE_LIMIT_MILLIS);
        if self.carousel.is_animating() {
            self.carousel.handle_transition_end();
            self.timers.run_until_idle(IDLE_LIMIT_MILLIS);
        }
    }

    /// The host reports a `transitionend`.
    pub fn end_transition(&self) {
        self.carousel.handle_transition_end();
    }

    pub fn platform_gesture_started(&self) {
        self.router.gesture_started();
    }

    pub fn platform_gesture_ended(&self) {
        self.router.gesture_ended();
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        self.element.events()
    }

    pub fn take_events(&self) -> Vec<CarouselEvent> {
        self.element.take_events()
    }

    fn send(&mut self, kind: PointerEventKind) -> PointerEvent {
        self.timers.advance_by(SAMPLE_INTERVAL_MILLIS);
        let event = PointerEvent::new(kind, self.source, self.cursor, self.timers.now())
            .with_target(self.target);
        let sent = event.clone();
        self.router.push(event);
        let carousel = &self.carousel;
        self.router.drain(|event| carousel.handle_pointer(&event));
        sent
    }
}
