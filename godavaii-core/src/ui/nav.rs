//! Mobile navigation drawer.
//!
//! The drawer owns the page scroll lock while it is open. The lock is a guard
//! value: it is acquired when the drawer opens and released when the guard is
//! dropped, which happens on every way the drawer can close (close button,
//! backdrop, swipe, link click, toggle) and when the controller itself is
//! dropped.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, warn};

/// Leftward drag distance, in CSS pixels, that closes the drawer.
pub const DEFAULT_SWIPE_CLOSE_THRESHOLD: f32 = 60.0;

/// Document-level scrolling, as seen by the drawer.
pub trait ScrollSurface {
    fn suppress(&self);
    fn restore(&self);
    fn is_suppressed(&self) -> bool;
}

/// Scroll state of a single document.
///
/// Clones share the same flag, so a renderer can keep a handle and read the
/// state the drawer left behind.
#[derive(Debug, Clone, Default)]
pub struct DocumentScroll {
    suppressed: Arc<AtomicBool>,
}

impl DocumentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline style for `<body>` reflecting the current state.
    pub fn body_style(&self) -> Option<&'static str> {
        self.is_suppressed().then_some("overflow:hidden")
    }
}

impl ScrollSurface for DocumentScroll {
    fn suppress(&self) {
        self.suppressed.store(true, Ordering::Release);
    }

    fn restore(&self) {
        self.suppressed.store(false, Ordering::Release);
    }

    fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::Acquire)
    }
}

/// Held while the drawer is open; restores scrolling when dropped.
#[derive(Debug)]
#[must_use = "scroll is restored as soon as the lock is dropped"]
struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    fn acquire(surface: S) -> Self {
        surface.suppress();
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Touch tracking inside the drawer panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum SwipeGesture {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// Hamburger button.
    Toggle,
    Open,
    /// Explicit close button inside the drawer.
    Close,
    /// Tap on the dimmed area around the drawer.
    BackdropClick,
    /// Tap anywhere inside the drawer panel. Never bubbles to the backdrop.
    PanelClick,
    /// One of the section links inside the drawer.
    LinkClick,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTransition {
    Opened,
    Closed,
    Unchanged,
}

#[derive(Debug)]
pub struct NavigationMenuController<S: ScrollSurface + Clone> {
    surface: S,
    lock: Option<ScrollLock<S>>,
    gesture: SwipeGesture,
    swipe_threshold: f32,
}

impl<S: ScrollSurface + Clone> NavigationMenuController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_swipe_threshold(surface, DEFAULT_SWIPE_CLOSE_THRESHOLD)
    }

    /// Controller with a custom swipe distance. The sign is ignored; a zero
    /// or non-finite distance falls back to
    /// [`DEFAULT_SWIPE_CLOSE_THRESHOLD`].
    pub fn with_swipe_threshold(surface: S, swipe_threshold: f32) -> Self {
        let distance = swipe_threshold.abs();
        let swipe_threshold = if distance.is_finite() && distance > 0.0 {
            distance
        } else {
            warn!(
                requested = swipe_threshold,
                fallback = DEFAULT_SWIPE_CLOSE_THRESHOLD,
                "unusable swipe threshold"
            );
            DEFAULT_SWIPE_CLOSE_THRESHOLD
        };
        Self {
            surface,
            lock: None,
            gesture: SwipeGesture::Idle,
            swipe_threshold,
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, SwipeGesture::Dragging { .. })
    }

    pub fn open(&mut self) -> NavTransition {
        if self.lock.is_some() {
            return NavTransition::Unchanged;
        }
        self.lock = Some(ScrollLock::acquire(self.surface.clone()));
        debug!("navigation drawer opened");
        NavTransition::Opened
    }

    pub fn close(&mut self) -> NavTransition {
        self.gesture = SwipeGesture::Idle;
        match self.lock.take() {
            Some(lock) => {
                drop(lock);
                debug!("navigation drawer closed");
                NavTransition::Closed
            }
            None => NavTransition::Unchanged,
        }
    }

    pub fn toggle(&mut self) -> NavTransition {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn update(&mut self, event: NavEvent) -> NavTransition {
        match event {
            NavEvent::Toggle => self.toggle(),
            NavEvent::Open => self.open(),
            NavEvent::Close | NavEvent::BackdropClick | NavEvent::LinkClick => {
                self.close()
            }
            NavEvent::PanelClick => NavTransition::Unchanged,
            NavEvent::TouchStart { x } => {
                if self.is_open() {
                    self.gesture = SwipeGesture::Dragging { start_x: x };
                }
                NavTransition::Unchanged
            }
            NavEvent::TouchMove { x } => self.on_touch_move(x),
            NavEvent::TouchEnd => {
                self.gesture = SwipeGesture::Idle;
                NavTransition::Unchanged
            }
        }
    }

    fn on_touch_move(&mut self, x: f32) -> NavTransition {
        let SwipeGesture::Dragging { start_x } = self.gesture else {
            return NavTransition::Unchanged;
        };

        if x - start_x <= -self.swipe_threshold {
            debug!(start_x, x, "swipe past threshold");
            return self.close();
        }
        NavTransition::Unchanged
    }
}
