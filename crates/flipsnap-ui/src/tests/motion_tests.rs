use super::*;
use flipsnap_core::ManualTimers;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<StyleDeclaration>>>);

impl Recorder {
    fn take(&self) -> Vec<StyleDeclaration> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    fn last_left(&self) -> Option<f32> {
        self.0.borrow().iter().rev().find_map(|declaration| match declaration {
            StyleDeclaration::Left(Px(value)) => Some(*value),
            _ => None,
        })
    }
}

impl StyleSink for Recorder {
    fn apply_style(&self, declaration: &StyleDeclaration) {
        self.0.borrow_mut().push(*declaration);
    }
}

#[test]
fn accelerated_install_writes_transition_styles() {
    let sink = Recorder::default();
    let engine = MotionEngine::new(Capabilities::ACCELERATED.with_pointer_events(true), false);
    engine.install(&sink);
    assert_eq!(
        sink.take(),
        vec![
            StyleDeclaration::TransitionProperty,
            StyleDeclaration::TransitionTimingFunction(CubicBezier::DECELERATE),
            StyleDeclaration::TransitionDuration { millis: 0 },
            StyleDeclaration::Transform(Translate::new(0.0, true)),
            StyleDeclaration::TouchActionPanY,
        ]
    );
}

#[test]
fn legacy_install_positions_with_left() {
    let sink = Recorder::default();
    let engine = MotionEngine::new(Capabilities::LEGACY, false);
    engine.install(&sink);
    assert_eq!(
        sink.take(),
        vec![
            StyleDeclaration::PositionRelative,
            StyleDeclaration::Left(Px(0.0)),
        ]
    );
}

#[test]
fn disable_3d_uses_plain_translate() {
    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::ACCELERATED, true);
    engine.drag_to(&sink, -12.0);
    assert_eq!(
        sink.take(),
        vec![StyleDeclaration::Transform(Translate::new(-12.0, false))]
    );
}

#[test]
fn transition_stays_in_flight_until_finished() {
    let timers = ManualTimers::new();
    let env = CarouselEnv::manual(&timers);
    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::ACCELERATED, false);

    engine.arm(&sink, 350);
    let settle = engine.animate_to(&sink, -200.0, &env, || {});
    assert_eq!(settle, Settle::InFlight);
    assert!(engine.is_animating());
    assert_eq!(
        sink.take(),
        vec![
            StyleDeclaration::TransitionDuration { millis: 350 },
            StyleDeclaration::Transform(Translate::new(-200.0, true)),
        ]
    );

    assert!(engine.finish_transition());
    assert!(!engine.finish_transition());
    assert!(!engine.is_animating());
}

#[test]
fn unchanged_transform_is_not_in_flight() {
    let timers = ManualTimers::new();
    let env = CarouselEnv::manual(&timers);
    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::ACCELERATED, false);

    engine.arm(&sink, 350);
    assert_eq!(engine.animate_to(&sink, 0.0, &env, || {}), Settle::Immediate);
    assert!(!engine.is_animating());

    engine.arm(&sink, 350);
    assert_eq!(engine.animate_to(&sink, -100.0, &env, || {}), Settle::InFlight);
    engine.arm(&sink, 350);
    assert_eq!(
        engine.animate_to(&sink, -100.0, &env, || {}),
        Settle::InFlight,
        "retargeting a running transition keeps waiting for its end"
    );
}

#[test]
fn zero_duration_settles_immediately() {
    let timers = ManualTimers::new();
    let env = CarouselEnv::manual(&timers);
    let sink = Recorder::default();
    for capabilities in [Capabilities::ACCELERATED, Capabilities::LEGACY] {
        let mut engine = MotionEngine::new(capabilities, false);
        engine.arm(&sink, 0);
        assert_eq!(
            engine.animate_to(&sink, -100.0, &env, || {}),
            Settle::Immediate
        );
        assert_eq!(engine.current_x(), -100.0);
    }
    assert_eq!(timers.pending(), 0);
}

#[test]
fn manual_animation_reaches_target_and_reports_completion() {
    let timers = ManualTimers::new();
    let env = CarouselEnv::manual(&timers);
    let sink = Recorder::default();
    let finished = Rc::new(Cell::new(false));
    let mut engine = MotionEngine::new(Capabilities::LEGACY, false);

    engine.arm(&sink, 350);
    let flag = Rc::clone(&finished);
    let settle = engine.animate_to(&sink, -300.0, &env, move || flag.set(true));
    assert_eq!(settle, Settle::InFlight);
    assert_eq!(engine.current_x(), -300.0);

    timers.advance_by(100);
    let midway = sink.last_left().unwrap();
    assert!(midway < 0.0 && midway > -300.0, "midway was {midway}");
    assert!(!finished.get());

    timers.advance_by(300);
    assert_eq!(sink.last_left(), Some(-300.0));
    assert!(finished.get());
    assert!(!engine.is_animating());
    assert_eq!(engine.visual_offset(), -300.0);
}

#[test]
fn tracking_interrupts_manual_animation() {
    let timers = ManualTimers::new();
    let env = CarouselEnv::manual(&timers);
    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::LEGACY, false);

    engine.arm(&sink, 350);
    engine.animate_to(&sink, -300.0, &env, || {});
    timers.advance_by(50);
    engine.begin_tracking(&sink);
    assert!(!engine.is_animating());
    assert_eq!(sink.last_left(), Some(-300.0));
    assert_eq!(timers.pending(), 0);
}

#[test]
fn origin_offsets_left_writes() {
    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::LEGACY, false);
    engine.set_origin(&sink, -100.0);
    engine.drag_to(&sink, -30.0);
    assert_eq!(sink.last_left(), Some(-130.0));
    assert_eq!(engine.visual_offset(), -130.0);

    let sink = Recorder::default();
    let mut engine = MotionEngine::new(Capabilities::ACCELERATED, false);
    engine.set_origin(&sink, -100.0);
    assert_eq!(
        sink.take(),
        vec![
            StyleDeclaration::PositionRelative,
            StyleDeclaration::Left(Px(-100.0)),
        ]
    );
    engine.snap_to(&sink, -200.0);
    assert_eq!(engine.visual_offset(), -300.0);
}
