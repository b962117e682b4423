use flipsnap_testing::prelude::*;
use flipsnap_ui::{
    CarouselEvent, CarouselOptions, ListenerKind, PointMoveDetail, PointerSource, SwipeDirection,
    SwipePhase, TouchEndDetail,
};

fn five_items() -> CarouselTestRule {
    CarouselTestRule::new(FakeElement::with_items(5, 100.0), CarouselOptions::new())
}

#[test]
fn derives_points_from_children() {
    let rule = five_items();
    assert_eq!(rule.carousel().max_point(), 4);
    assert_eq!(rule.carousel().distance(), 100.0);
    assert_eq!(rule.carousel().max_x(), -400.0);
    assert_eq!(rule.carousel().current_point(), 0);
    assert!(rule.events().is_empty());
}

#[test]
fn swipe_left_advances_one_point() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    // 80 degrees from vertical
    let confirm = rule.move_to(294.0, 101.0);
    assert!(confirm.is_consumed());
    rule.move_to(240.0, 110.0);
    rule.release();

    assert_eq!(rule.carousel().current_point(), 1);
    assert_eq!(rule.carousel().current_x(), -100.0);
    assert_eq!(rule.element().translate_x(), Some(-100.0));

    let events = rule.events();
    assert_event_types(
        &events,
        &[
            "fstouchstart",
            "fstouchmove",
            "fstouchend",
            "fsmoveend",
            "fspointmove",
        ],
        "swipe",
    );
    assert_eq!(
        events[2],
        CarouselEvent::TouchEnd(TouchEndDetail {
            moved: true,
            original_point: 0,
            new_point: 1,
            cancelled: false,
        })
    );
    assert_eq!(
        events[4],
        CarouselEvent::PointMove(PointMoveDetail {
            original_point: 0,
            new_point: 1,
        })
    );
}

#[test]
fn touch_move_reports_delta_and_direction() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.move_to(275.0, 100.0);
    assert_eq!(
        rule.events().last(),
        Some(&CarouselEvent::TouchMove {
            delta: -15.0,
            direction: SwipeDirection::Forward,
        })
    );
    assert_eq!(rule.element().translate_x(), Some(-15.0));
    assert_eq!(rule.carousel().phase(), SwipePhase::Swiping);
}

#[test]
fn short_drag_never_confirms() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    let moved = rule.move_to(297.0, 100.0);
    rule.release();

    assert!(!moved.is_consumed());
    assert_event_types(&rule.events(), &["fstouchstart"], "short drag");
    assert_eq!(rule.carousel().current_point(), 0);
    assert!(!rule.element().is_listening(ListenerKind::ClickCapture));
}

#[test]
fn vertical_drag_is_left_to_the_page() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    let first = rule.move_to(298.0, 130.0);
    assert_eq!(rule.carousel().phase(), SwipePhase::Rejected);
    let second = rule.move_to(200.0, 140.0);
    rule.release();

    assert!(!first.is_consumed());
    assert!(!second.is_consumed());
    assert_eq!(rule.carousel().current_point(), 0);
    assert_eq!(rule.carousel().phase(), SwipePhase::Idle);
    assert_event_types(&rule.events(), &["fstouchstart"], "vertical drag");
}

#[test]
fn slight_drag_backward_snaps_to_lower_point() {
    let mut rule = five_items();
    rule.carousel().move_to_point_with(2, Some(0));
    rule.take_events();

    rule.swipe(100.0, 130.0);
    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 1);
    assert_eq!(rule.carousel().direction(), SwipeDirection::Backward);
}

#[test]
fn rubber_band_dampens_overscroll() {
    let mut rule = five_items();
    rule.press(100.0, 100.0);
    rule.move_to(110.0, 100.0);
    rule.move_to(130.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 7.0);
    rule.move_to(160.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 17.0);
    rule.release();

    assert_eq!(rule.carousel().current_point(), 0);
    assert_eq!(rule.carousel().current_x(), 0.0);
    assert_eq!(
        rule.events()
            .into_iter()
            .filter(|event| matches!(event, CarouselEvent::TouchEnd(_)))
            .collect::<Vec<_>>(),
        vec![CarouselEvent::TouchEnd(TouchEndDetail {
            moved: false,
            original_point: 0,
            new_point: 0,
            cancelled: false,
        })]
    );
}

#[test]
fn release_past_last_point_clamps() {
    let mut rule = five_items();
    rule.carousel().move_to_point_with(4, Some(0));
    rule.swipe(300.0, 100.0);
    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 4);
    assert_eq!(rule.carousel().current_x(), -400.0);
}

#[test]
fn repeated_swipes_stay_in_range() {
    let mut rule = five_items();
    for _ in 0..8 {
        rule.swipe(400.0, 100.0);
        rule.wait_for_idle();
        let point = rule.carousel().current_point();
        assert!((0..=4).contains(&point), "point {point} out of range");
        assert_eq!(rule.carousel().current_x(), -(point as f32) * 100.0);
    }
    assert_eq!(rule.carousel().current_point(), 4);
    for _ in 0..8 {
        rule.swipe(100.0, 400.0);
        rule.wait_for_idle();
        let point = rule.carousel().current_point();
        assert!((0..=4).contains(&point), "point {point} out of range");
    }
    assert_eq!(rule.carousel().current_point(), 0);
}

#[test]
fn vetoed_touch_move_cancels_the_swipe() {
    let mut rule = five_items();
    rule.element().veto_touch_moves();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.move_to(250.0, 100.0);
    assert_eq!(rule.carousel().phase(), SwipePhase::Cancelled);
    rule.move_to(200.0, 100.0);
    rule.release();

    assert_eq!(rule.carousel().current_x(), 0.0);
    assert_eq!(rule.element().translate_x(), Some(0.0));
    assert_eq!(rule.carousel().current_point(), 0);
    let events = rule.events();
    assert_event_types(
        &events,
        &["fstouchstart", "fstouchmove", "fstouchend"],
        "vetoed swipe",
    );
    assert_eq!(
        events[2],
        CarouselEvent::TouchEnd(TouchEndDetail {
            moved: false,
            original_point: 0,
            new_point: 0,
            cancelled: true,
        })
    );
    assert!(!rule
        .element()
        .is_listening(ListenerKind::Move(PointerSource::Touch)));
}

#[test]
fn pointer_cancel_behaves_like_release() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.move_to(230.0, 100.0);
    rule.cancel();
    assert_eq!(rule.carousel().current_point(), 1);
    assert_eq!(rule.carousel().phase(), SwipePhase::Idle);
}

#[test]
fn clicks_are_swallowed_until_shortly_after_release() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    assert!(rule.element().is_listening(ListenerKind::ClickCapture));
    assert!(rule.click().is_default_prevented());

    rule.move_to(200.0, 100.0);
    rule.release();
    let click = rule.click();
    assert!(click.is_default_prevented());
    assert!(click.is_propagation_stopped());

    rule.advance_time(199);
    assert!(rule.carousel().is_intercepting_clicks());
    rule.advance_time(1);
    assert!(!rule.carousel().is_intercepting_clicks());
    assert!(!rule.element().is_listening(ListenerKind::ClickCapture));
    assert!(!rule.click().is_default_prevented());
}

#[test]
fn click_release_runs_when_time_passes_inside_a_listener() {
    let mut rule = five_items();
    let timers = rule.timers().clone();
    rule.element().add_listener(move |event| {
        if matches!(event, CarouselEvent::TouchEnd(_)) {
            timers.advance_by(250);
        }
        true
    });
    rule.swipe(300.0, 200.0);
    assert!(!rule.carousel().is_intercepting_clicks());
    assert!(!rule.element().is_listening(ListenerKind::ClickCapture));
}

#[test]
fn new_confirmation_keeps_interception_armed() {
    let mut rule = five_items();
    rule.swipe(300.0, 200.0);
    rule.advance_time(100);
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.advance_time(300);
    assert!(rule.carousel().is_intercepting_clicks());
    rule.release();
    rule.advance_time(200);
    assert!(!rule.carousel().is_intercepting_clicks());
}

#[test]
fn mouse_press_prevents_default_except_on_form_controls() {
    let mut rule = five_items();
    rule.use_mouse();
    let press = rule.press(300.0, 100.0);
    assert!(press.is_consumed());
    assert!(rule
        .element()
        .is_listening(ListenerKind::Move(PointerSource::Mouse)));
    rule.release();
    assert!(!rule
        .element()
        .is_listening(ListenerKind::End(PointerSource::Mouse)));

    rule.target_form_control(true);
    let press = rule.press(300.0, 100.0);
    assert!(!press.is_consumed());
    rule.release();
}

#[test]
fn mouse_swipe_moves_like_touch() {
    let mut rule = five_items();
    rule.use_mouse();
    rule.swipe(300.0, 220.0);
    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 1);
}

#[test]
fn touch_session_ignores_mouse_events() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.use_mouse();
    rule.move_to(100.0, 100.0);
    rule.release();
    assert_eq!(rule.carousel().phase(), SwipePhase::Swiping);
    rule.use_touch();
    rule.release();
    assert_eq!(rule.carousel().phase(), SwipePhase::Idle);
    assert_eq!(rule.carousel().current_point(), 0);
}

#[test]
fn second_press_during_session_is_ignored() {
    let mut rule = five_items();
    rule.press(300.0, 100.0);
    rule.press(100.0, 100.0);
    assert_event_types(&rule.events(), &["fstouchstart"], "double press");
}

#[test]
fn platform_gesture_blocks_input() {
    let mut rule = five_items();
    rule.platform_gesture_started();
    rule.press(300.0, 100.0);
    assert_eq!(rule.carousel().phase(), SwipePhase::Idle);
    assert!(rule.events().is_empty());

    rule.platform_gesture_ended();
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.platform_gesture_started();
    rule.move_to(200.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 0.0);
}

#[test]
fn disable_touch_ignores_pointers() {
    let mut rule = CarouselTestRule::new(
        FakeElement::with_items(5, 100.0),
        CarouselOptions::new().disable_touch(true),
    );
    rule.swipe(300.0, 100.0);
    assert!(rule.events().is_empty());
    assert_eq!(rule.carousel().current_point(), 0);
}

#[test]
fn legacy_swipe_animates_left() {
    let mut rule =
        CarouselTestRule::legacy(FakeElement::with_items(5, 100.0), CarouselOptions::new());
    rule.swipe(300.0, 200.0);
    assert_eq!(rule.element().left(), Some(-90.0));
    assert!(rule.carousel().is_animating());
    rule.wait_for_idle();
    assert_eq!(rule.element().left(), Some(-100.0));
    assert!(!rule.carousel().is_animating());
    assert_eq!(rule.timers().pending(), 0);
}

#[test]
fn press_interrupts_running_animation() {
    let mut rule =
        CarouselTestRule::legacy(FakeElement::with_items(5, 100.0), CarouselOptions::new());
    rule.carousel().to_next();
    rule.advance_time(50);
    rule.press(300.0, 100.0);
    assert!(!rule.carousel().is_animating());
    assert_eq!(rule.element().left(), Some(-100.0));
    assert_eq!(rule.carousel().current_x(), -100.0);
}
