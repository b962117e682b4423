use flipsnap_testing::prelude::*;
use flipsnap_ui::prelude::*;

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn describe(rule: &CarouselTestRule, label: &str) {
    let carousel = rule.carousel();
    log::info!(
        "{label}: point {}/{} x={} offset={} labels={:?}",
        carousel.current_point(),
        carousel.max_point(),
        carousel.current_x(),
        carousel.visual_offset(),
        rule.element().labels(),
    );
    for event in rule.take_events() {
        log::info!("  {} {:?}", event.event_type(), event);
    }
}

fn paged() {
    let mut rule = CarouselTestRule::new(FakeElement::with_items(5, 100.0), CarouselOptions::new());
    describe(&rule, "created");

    rule.swipe(300.0, 200.0);
    rule.wait_for_idle();
    describe(&rule, "swiped left");

    rule.carousel().to_next();
    rule.wait_for_idle();
    describe(&rule, "to_next");

    rule.swipe(200.0, 350.0);
    rule.wait_for_idle();
    describe(&rule, "swiped right");

    rule.carousel().move_to_point(99);
    rule.wait_for_idle();
    describe(&rule, "move_to_point(99)");
}

fn legacy() {
    let mut rule = CarouselTestRule::legacy(
        FakeElement::with_items(4, 120.0),
        CarouselOptions::new().transition_duration(200),
    );
    rule.carousel().to_next();
    rule.advance_time(100);
    describe(&rule, "legacy halfway");
    rule.wait_for_idle();
    describe(&rule, "legacy settled");
    rule.use_mouse();
    rule.swipe(300.0, 200.0);
    rule.wait_for_idle();
    describe(&rule, "legacy mouse swipe");
}

fn marquee() {
    let rule = CarouselTestRule::new(
        FakeElement::with_items(3, 100.0),
        CarouselOptions::new().marquee(true),
    );
    describe(&rule, "marquee created");
    for step in 0..4 {
        rule.carousel().to_next();
        rule.wait_for_idle();
        describe(&rule, &format!("marquee next #{step}"));
    }
    rule.carousel().to_prev();
    rule.wait_for_idle();
    describe(&rule, "marquee prev");
}

fn main() {
    init_logging();
    println!("=== flipsnap carousel walkthrough ===");
    println!("Set RUST_LOG=debug to see carousel internals.");
    println!();
    paged();
    legacy();
    marquee();
    println!("done");
}
