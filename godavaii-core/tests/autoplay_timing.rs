use std::time::Duration;

use godavaii_core::ui::{AutoplayConfig, JumpBehavior, TestimonialAutoplayCarousel};
use godavaii_model::catalog::default_testimonials;
use tokio::time;

const PERIOD: Duration = Duration::from_millis(3500);

fn mount(config: AutoplayConfig) -> TestimonialAutoplayCarousel {
    TestimonialAutoplayCarousel::mount(default_testimonials(), config)
        .expect("six testimonials")
}

#[tokio::test(start_paused = true)]
async fn three_uninterrupted_ticks_reach_index_three() {
    let carousel = mount(AutoplayConfig::default());
    assert_eq!(carousel.current_index(), 0);

    time::sleep(PERIOD * 3 + Duration::from_millis(100)).await;

    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.translate_x_percent(), 300);
}

#[tokio::test(start_paused = true)]
async fn autoplay_wraps_after_last_testimonial() {
    let carousel = mount(AutoplayConfig::default());
    time::sleep(PERIOD * 7 + Duration::from_millis(100)).await;
    assert_eq!(carousel.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn hover_freezes_index_and_leave_needs_full_period() {
    let mut carousel = mount(AutoplayConfig::default());

    time::sleep(Duration::from_millis(2000)).await;
    carousel.hover_enter();

    // Well past where ticks would have landed.
    time::sleep(PERIOD * 4).await;
    assert_eq!(carousel.current_index(), 0);

    carousel.hover_leave();
    time::sleep(PERIOD - Duration::from_millis(100)).await;
    assert_eq!(carousel.current_index(), 0, "no catch-up after hover");

    time::sleep(Duration::from_millis(200)).await;
    assert_eq!(carousel.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn repeated_hover_cycles_never_double_tick() {
    let mut carousel = mount(AutoplayConfig::default());
    for _ in 0..5 {
        carousel.hover_enter();
        carousel.hover_leave();
    }
    carousel.hover_leave();

    time::sleep(PERIOD + Duration::from_millis(100)).await;
    assert_eq!(carousel.current_index(), 1);
    time::sleep(PERIOD).await;
    assert_eq!(carousel.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_ticks() {
    let carousel = mount(AutoplayConfig::default());
    let updates = carousel.subscribe();

    time::sleep(PERIOD + Duration::from_millis(100)).await;
    assert_eq!(carousel.current_index(), 1);

    carousel.unmount();
    time::sleep(PERIOD * 5).await;

    assert_eq!(updates.borrow().current_index(), 1);
    assert!(
        updates.has_changed().is_err(),
        "state channel closes once the timer task is gone"
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_the_carousel_stops_ticks() {
    let carousel = mount(AutoplayConfig::default());
    let updates = carousel.subscribe();
    drop(carousel);

    time::sleep(PERIOD * 3).await;
    assert_eq!(updates.borrow().current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn jump_restarts_phase_by_default() {
    let mut carousel = mount(AutoplayConfig::default());

    time::sleep(Duration::from_millis(3000)).await;
    carousel.jump_to(4);

    // The old timer would have fired at 3500ms.
    time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(carousel.current_index(), 4);

    time::sleep(PERIOD - Duration::from_millis(1000) + Duration::from_millis(100))
        .await;
    assert_eq!(carousel.current_index(), 5);
}

#[tokio::test(start_paused = true)]
async fn jump_keeps_phase_when_configured() {
    let config = AutoplayConfig::default().with_jump_behavior(JumpBehavior::KeepPhase);
    let mut carousel = mount(config);

    time::sleep(Duration::from_millis(3000)).await;
    carousel.jump_to(4);

    time::sleep(Duration::from_millis(600)).await;
    assert_eq!(carousel.current_index(), 5);
}

#[tokio::test(start_paused = true)]
async fn custom_period_is_honoured() {
    let config = AutoplayConfig::default().with_period(Duration::from_millis(1000));
    let carousel = mount(config);
    time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(carousel.current_index(), 2);
}
