use flipsnap_testing::prelude::*;
use flipsnap_ui::{
    CarouselEvent, CarouselOptions, PointMoveDetail, SwipeDirection, TouchEndDetail,
};

fn marquee(count: usize) -> CarouselTestRule {
    CarouselTestRule::new(
        FakeElement::with_items(count, 100.0),
        CarouselOptions::new().marquee(true),
    )
}

#[test]
fn builds_clone_ring() {
    let rule = marquee(5);
    let ring = rule.carousel().marquee_ring().unwrap();
    assert_eq!(ring.addition_count, 1);
    assert_eq!(ring.slider_width, 100.0);

    let element = rule.element();
    assert_eq!(element.items().len(), 5 + 2 * ring.addition_count);
    assert_eq!(
        element.labels(),
        vec!["item-4", "item-0", "item-1", "item-2", "item-3", "item-4", "item-0"]
    );
    assert_eq!(element.style("width").as_deref(), Some("700px"));
    assert_eq!(element.style("left").as_deref(), Some("-100px"));
    assert_eq!(rule.carousel().visual_offset(), -100.0);
    assert_eq!(rule.carousel().current_point(), 0);
}

#[test]
fn refresh_rebuilds_instead_of_stacking_clones() {
    let rule = marquee(5);
    rule.carousel().refresh();
    rule.carousel().refresh();
    assert_eq!(rule.element().clone_count(), 2);
    assert_eq!(rule.element().style("width").as_deref(), Some("700px"));
}

#[test]
fn wide_viewport_gets_more_clones() {
    let element = FakeElement::with_items(4, 100.0);
    element.set_viewport_width(250.0);
    let rule = CarouselTestRule::new(element, CarouselOptions::new().marquee(true));
    let ring = rule.carousel().marquee_ring().unwrap();
    assert_eq!(ring.addition_count, 3);
    assert_eq!(ring.move_right, 2.0);
    assert_eq!(
        rule.element().labels(),
        vec![
            "item-1", "item-2", "item-3", "item-0", "item-1", "item-2", "item-3", "item-0",
            "item-1", "item-2",
        ]
    );
    assert_eq!(rule.carousel().visual_offset(), -300.0);
}

#[test]
fn to_next_from_last_point_wraps_to_start() {
    let rule = marquee(5);
    rule.carousel().move_to_point_with(4, Some(0));
    rule.take_events();

    rule.carousel().to_next();
    assert_eq!(rule.carousel().current_point(), 5);
    assert_eq!(rule.element().translate_x(), Some(-500.0));

    rule.end_transition();
    assert_eq!(rule.carousel().current_point(), 0);
    assert_eq!(rule.carousel().current_x(), 0.0);
    assert_eq!(rule.element().translate_x(), Some(0.0));
    assert_eq!(
        rule.element().style("transition-duration").as_deref(),
        Some("0ms")
    );
    assert_eq!(
        rule.events(),
        vec![
            CarouselEvent::MoveEnd(PointMoveDetail {
                original_point: 4,
                new_point: 5,
            }),
            CarouselEvent::PointMove(PointMoveDetail {
                original_point: 4,
                new_point: 5,
            }),
        ]
    );
}

#[test]
fn to_prev_from_start_wraps_to_last_point() {
    let rule = marquee(5);
    rule.carousel().to_prev();
    assert_eq!(rule.carousel().current_point(), -1);
    assert_eq!(rule.element().translate_x(), Some(100.0));
    rule.end_transition();
    assert_eq!(rule.carousel().current_point(), 4);
    assert_eq!(rule.element().translate_x(), Some(-400.0));
}

#[test]
fn stray_transition_end_is_ignored() {
    let rule = marquee(5);
    rule.end_transition();
    assert_eq!(rule.carousel().current_point(), 0);
    assert!(rule.events().is_empty());
}

#[test]
fn navigation_settles_pending_wrap_first() {
    let rule = marquee(5);
    rule.carousel().move_to_point_with(4, Some(0));
    rule.carousel().to_next();
    rule.carousel().to_next();
    assert_eq!(rule.carousel().current_point(), 1);
}

#[test]
fn press_settles_pending_wrap() {
    let mut rule = marquee(5);
    rule.carousel().to_prev();
    rule.press(300.0, 100.0);
    assert_eq!(rule.carousel().current_point(), 4);
    assert_eq!(rule.carousel().current_x(), -400.0);
}

#[test]
fn swipe_backward_from_start_wraps() {
    let mut rule = marquee(5);
    rule.swipe(100.0, 160.0);
    assert_eq!(rule.carousel().current_point(), -1);
    assert!(rule.events().contains(&CarouselEvent::TouchEnd(TouchEndDetail {
        moved: true,
        original_point: 0,
        new_point: -1,
        cancelled: false,
    })));
    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 4);
    assert_eq!(rule.carousel().visual_offset(), -500.0);
}

#[test]
fn drag_beyond_clone_coverage_is_damped() {
    let mut rule = marquee(5);
    rule.press(100.0, 100.0);
    rule.move_to(110.0, 100.0);
    rule.move_to(190.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 80.0);
    rule.move_to(220.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 90.0);
    rule.release();
    assert_eq!(rule.carousel().current_point(), -1);
}

#[test]
fn release_without_direction_does_not_snap() {
    let mut rule = marquee(5);
    rule.press(100.0, 100.0);
    rule.move_to(100.0, 100.0);
    rule.move_to(90.0, 100.0);
    rule.release();
    let touch_ends: Vec<_> = rule
        .events()
        .into_iter()
        .filter(|event| matches!(event, CarouselEvent::TouchEnd(_)))
        .collect();
    assert_eq!(touch_ends.len(), 1);
    assert!(!rule.carousel().is_animating());
}

#[test]
fn pulling_back_onto_forward_edge_still_wraps() {
    let mut rule = marquee(5);
    rule.carousel().move_to_point_with(4, Some(0));
    rule.press(300.0, 100.0);
    rule.move_to(290.0, 100.0);
    rule.move_to(200.0, 100.0);
    rule.move_to(190.0, 100.0);
    rule.move_to(180.0, 100.0);
    rule.move_to(182.0, 100.0);
    assert_eq!(rule.carousel().current_x(), -502.0);
    assert_eq!(rule.carousel().direction(), SwipeDirection::Backward);
    rule.release();
    assert_eq!(rule.carousel().current_point(), 5);

    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 0);
    assert_eq!(rule.carousel().current_x(), 0.0);

    rule.take_events();
    rule.carousel().to_next();
    assert_eq!(rule.carousel().current_point(), 1);
    assert!(rule.events().contains(&CarouselEvent::PointMove(PointMoveDetail {
        original_point: 0,
        new_point: 1,
    })));
}

#[test]
fn pushing_back_onto_backward_edge_still_wraps() {
    let mut rule = marquee(5);
    rule.press(100.0, 100.0);
    rule.move_to(110.0, 100.0);
    rule.move_to(190.0, 100.0);
    rule.move_to(210.0, 100.0);
    rule.move_to(220.0, 100.0);
    rule.move_to(218.0, 100.0);
    assert_eq!(rule.carousel().current_x(), 102.0);
    assert_eq!(rule.carousel().direction(), SwipeDirection::Forward);
    rule.release();
    assert_eq!(rule.carousel().current_point(), -1);

    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 4);

    rule.take_events();
    rule.carousel().to_prev();
    assert_eq!(rule.carousel().current_point(), 3);
}

#[test]
fn legacy_marquee_wraps_after_manual_animation() {
    let rule = CarouselTestRule::legacy(
        FakeElement::with_items(5, 100.0),
        CarouselOptions::new().marquee(true),
    );
    assert_eq!(rule.element().left(), Some(-100.0));
    rule.carousel().to_prev();
    rule.wait_for_idle();
    assert_eq!(rule.carousel().current_point(), 4);
    assert_eq!(rule.element().left(), Some(-500.0));
    assert_eq!(rule.timers().pending(), 0);
}

#[test]
fn empty_marquee_falls_back_to_plain_mode() {
    let rule = CarouselTestRule::new(FakeElement::new(), CarouselOptions::new().marquee(true));
    assert_eq!(rule.carousel().marquee_ring(), None);
    rule.carousel().to_next();
    assert_eq!(rule.carousel().current_point(), 0);
}
