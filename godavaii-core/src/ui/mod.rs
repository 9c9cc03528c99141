//! Interactive view-state of the landing page.
//!
//! Each component is created fresh per page view and torn down with it.
//! Components never talk to each other; they are composed only by being
//! rendered on the same page.

pub mod autoplay;
pub mod carousel;
pub mod display_date;
pub mod nav;

pub use autoplay::{AutoplayConfig, JumpBehavior, TestimonialAutoplayCarousel};
pub use carousel::{CarouselState, ScreenshotCarousel};
pub use display_date::{
    Clock, DisplayDate, DisplayDateFormatter, FixedClock, SystemClock,
};
pub use nav::{
    DocumentScroll, NavEvent, NavTransition, NavigationMenuController,
    ScrollSurface,
};
