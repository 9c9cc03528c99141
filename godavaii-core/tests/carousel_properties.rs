use godavaii_core::{
    CoreError,
    ui::{CarouselState, ScreenshotCarousel},
};
use godavaii_model::{SiteCatalog, catalog::default_screenshots};

/// Deterministic pseudo-random step sequence so failures are reproducible.
fn steps(seed: u64, len: usize) -> Vec<bool> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            state >> 63 == 1
        })
        .collect()
}

#[test]
fn index_stays_in_range_for_any_walk() {
    for item_count in 1..=12 {
        let mut state = CarouselState::new(item_count).unwrap();
        for (i, forward) in steps(item_count as u64, 500).into_iter().enumerate() {
            if forward {
                state.next();
            } else {
                state.previous();
            }
            assert!(
                state.current_index() < item_count,
                "step {i}: index {} escaped [0, {item_count})",
                state.current_index()
            );
        }
    }
}

#[test]
fn full_cycle_returns_to_start() {
    for item_count in 1..=12 {
        for start in 0..item_count {
            let mut state = CarouselState::new(item_count).unwrap();
            state.jump_to(start);
            for _ in 0..item_count {
                state.next();
            }
            assert_eq!(state.current_index(), start);
            for _ in 0..item_count {
                state.previous();
            }
            assert_eq!(state.current_index(), start);
        }
    }
}

#[test]
fn previous_from_first_screenshot_wraps_to_last() {
    let catalog = SiteCatalog::default();
    let mut carousel = ScreenshotCarousel::new(&catalog.screenshots).unwrap();
    assert_eq!(carousel.current_index(), 0);
    carousel.previous();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.current().src, "/HOME.png");
}

#[test]
fn next_walks_every_screenshot_in_order() {
    let screenshots = default_screenshots();
    let mut carousel = ScreenshotCarousel::new(&screenshots).unwrap();
    let seen: Vec<_> = (0..3)
        .map(|_| {
            let alt = carousel.current().alt.clone();
            carousel.next();
            alt
        })
        .collect();
    assert_eq!(seen, ["Logo", "Medicines", "Home"]);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn exactly_one_indicator_is_active() {
    let screenshots = default_screenshots();
    let mut carousel = ScreenshotCarousel::new(&screenshots).unwrap();
    carousel.jump_to(1);
    let active: Vec<_> = carousel
        .state()
        .indicators()
        .filter(|(_, active)| *active)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(active, [1]);
}

#[test]
fn untrusted_jump_is_checked() {
    let screenshots = default_screenshots();
    let mut carousel = ScreenshotCarousel::new(&screenshots).unwrap();
    let err = carousel.try_jump_to(3).unwrap_err();
    assert!(matches!(
        err,
        CoreError::IndexOutOfRange {
            index: 3,
            item_count: 3
        }
    ));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn empty_carousel_is_rejected() {
    assert!(matches!(
        ScreenshotCarousel::new(&[]),
        Err(CoreError::EmptyCarousel)
    ));
}
