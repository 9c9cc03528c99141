//! Autoplaying testimonial carousel.
//!
//! The carousel owns at most one [`AutoplayTimer`]. Every path that starts a
//! timer drops the previous one first, and dropping a timer cancels its task,
//! so two tickers can never run for the same carousel. Unmounting (or simply
//! dropping) the carousel cancels whatever timer is active.
//!
//! Index state lives in a `watch` channel shared with the timer task, which
//! gives observers a change feed and makes every update a single atomic
//! `send_modify`.

use std::{sync::Arc, time::Duration};

use godavaii_model::Testimonial;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

use crate::error::{CoreError, Result};

use super::carousel::CarouselState;

pub const DEFAULT_AUTOPLAY_PERIOD: Duration = Duration::from_millis(3500);

/// What a manual jump does to a running autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpBehavior {
    /// Restart the timer so the chosen slide stays up for a full period.
    #[default]
    RestartPhase,
    /// Leave the timer alone; the next tick may come right after the jump.
    KeepPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub period: Duration,
    pub jump_behavior: JumpBehavior,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_AUTOPLAY_PERIOD,
            jump_behavior: JumpBehavior::default(),
        }
    }
}

impl AutoplayConfig {
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_jump_behavior(mut self, jump_behavior: JumpBehavior) -> Self {
        self.jump_behavior = jump_behavior;
        self
    }
}

/// A running repeating timer. Dropping it stops the task.
#[derive(Debug)]
struct AutoplayTimer {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AutoplayTimer {
    fn start(state: Arc<watch::Sender<CarouselState>>, period: Duration) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        // First advance is one full period from now, never immediate.
        let first_tick = Instant::now() + period;
        let task =
            tokio::spawn(autoplay_loop(state, first_tick, period, stop_rx));
        Self { stop_tx, task }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(true);
        self.task.abort();
    }
}

async fn autoplay_loop(
    state: Arc<watch::Sender<CarouselState>>,
    first_tick: Instant,
    period: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                state.send_modify(|carousel| {
                    carousel.next();
                });
                trace!(index = state.borrow().current_index(), "autoplay tick");
            }
        }
    }
}

/// The "Loved by customers" carousel.
///
/// Must be mounted inside a tokio runtime: the autoplay timer is a spawned
/// task.
#[derive(Debug)]
pub struct TestimonialAutoplayCarousel {
    testimonials: Vec<Testimonial>,
    state: Arc<watch::Sender<CarouselState>>,
    config: AutoplayConfig,
    timer: Option<AutoplayTimer>,
    hovered: bool,
}

impl TestimonialAutoplayCarousel {
    /// Build the carousel at index 0 and start autoplay.
    ///
    /// Fails with [`CoreError::EmptyCarousel`] for an empty list and
    /// [`CoreError::ZeroAutoplayPeriod`] for a zero period.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn mount(
        testimonials: Vec<Testimonial>,
        config: AutoplayConfig,
    ) -> Result<Self> {
        if config.period.is_zero() {
            return Err(CoreError::ZeroAutoplayPeriod);
        }
        let initial = CarouselState::new(testimonials.len())?;
        let (state_tx, _) = watch::channel(initial);
        let mut carousel = Self {
            testimonials,
            state: Arc::new(state_tx),
            config,
            timer: None,
            hovered: false,
        };
        carousel.restart_timer();
        debug!(
            items = carousel.testimonials.len(),
            period_ms = config.period.as_millis() as u64,
            "testimonial carousel mounted"
        );
        Ok(carousel)
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    pub fn current(&self) -> &Testimonial {
        &self.testimonials[self.current_index()]
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn snapshot(&self) -> CarouselState {
        *self.state.borrow()
    }

    /// Change feed of the carousel state. Closes once the carousel is
    /// unmounted and its timer task has stopped.
    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state.subscribe()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered the carousel: stop autoplay.
    pub fn hover_enter(&mut self) {
        self.hovered = true;
        if self.timer.take().is_some() {
            debug!(index = self.current_index(), "autoplay paused on hover");
        }
    }

    /// Pointer left the carousel: start a fresh timer from the current index.
    /// Ticks missed while hovered are not replayed.
    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.restart_timer();
        debug!(index = self.current_index(), "autoplay resumed");
    }

    /// Indicator click.
    pub fn jump_to(&mut self, index: usize) {
        self.state.send_modify(|carousel| carousel.jump_to(index));
        if self.config.jump_behavior == JumpBehavior::RestartPhase
            && self.timer.is_some()
        {
            self.restart_timer();
        }
    }

    pub fn translate_x_percent(&self) -> usize {
        self.state.borrow().translate_x_percent()
    }

    /// Tear the carousel down. Equivalent to dropping it; no tick fires
    /// afterwards.
    pub fn unmount(mut self) {
        self.timer = None;
        debug!("testimonial carousel unmounted");
    }

    fn restart_timer(&mut self) {
        // Cancel before starting so there is never more than one ticker.
        self.timer = None;
        self.timer = Some(AutoplayTimer::start(
            Arc::clone(&self.state),
            self.config.period,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use godavaii_model::catalog::default_testimonials;

    const PERIOD: Duration = DEFAULT_AUTOPLAY_PERIOD;

    #[tokio::test(start_paused = true)]
    async fn mount_rejects_empty_list() {
        let result =
            TestimonialAutoplayCarousel::mount(Vec::new(), AutoplayConfig::default());
        assert!(matches!(result, Err(CoreError::EmptyCarousel)));
    }

    #[tokio::test(start_paused = true)]
    async fn mount_rejects_zero_period() {
        let result = TestimonialAutoplayCarousel::mount(
            default_testimonials(),
            AutoplayConfig::default().with_period(Duration::ZERO),
        );
        assert!(matches!(result, Err(CoreError::ZeroAutoplayPeriod)));

        let carousel = TestimonialAutoplayCarousel::mount(
            default_testimonials(),
            AutoplayConfig::default().with_period(Duration::from_millis(1)),
        )
        .unwrap();
        time::sleep(Duration::from_millis(3)).await;
        assert!(carousel.is_autoplaying());
        assert!(carousel.current_index() > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn first_advance_waits_a_full_period() {
        let carousel = TestimonialAutoplayCarousel::mount(
            default_testimonials(),
            AutoplayConfig::default(),
        )
        .unwrap();
        time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert_eq!(carousel.current_index(), 0);
        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(carousel.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn hover_pauses_and_leave_resumes() {
        let mut carousel = TestimonialAutoplayCarousel::mount(
            default_testimonials(),
            AutoplayConfig::default(),
        )
        .unwrap();
        carousel.hover_enter();
        assert!(!carousel.is_autoplaying());
        assert!(carousel.is_hovered());
        carousel.hover_enter();
        assert!(!carousel.is_autoplaying());
        carousel.hover_leave();
        assert!(carousel.is_autoplaying());
        assert!(!carousel.is_hovered());
    }

    #[tokio::test(start_paused = true)]
    async fn jump_while_hovered_keeps_autoplay_off() {
        let mut carousel = TestimonialAutoplayCarousel::mount(
            default_testimonials(),
            AutoplayConfig::default(),
        )
        .unwrap();
        carousel.hover_enter();
        carousel.jump_to(4);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.translate_x_percent(), 400);
        assert!(!carousel.is_autoplaying());
    }
}
