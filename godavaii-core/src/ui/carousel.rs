use godavaii_model::Screenshot;
use tracing::trace;

use crate::error::{CoreError, Result};

/// Index of the visible item in a fixed, non-empty sequence.
///
/// `current_index` is always in `0..item_count`; stepping wraps around in
/// both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    item_count: usize,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Result<Self> {
        if item_count == 0 {
            return Err(CoreError::EmptyCarousel);
        }
        Ok(Self {
            current_index: 0,
            item_count,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index `next()` would move to.
    pub fn peek_next(&self) -> usize {
        (self.current_index + 1) % self.item_count
    }

    /// Index `previous()` would move to.
    pub fn peek_previous(&self) -> usize {
        (self.current_index + self.item_count - 1) % self.item_count
    }

    pub fn next(&mut self) -> usize {
        self.current_index = self.peek_next();
        trace!(index = self.current_index, "carousel advanced");
        self.current_index
    }

    pub fn previous(&mut self) -> usize {
        self.current_index = self.peek_previous();
        trace!(index = self.current_index, "carousel retreated");
        self.current_index
    }

    /// Jump straight to `index`.
    ///
    /// Indicator dots only ever emit valid indices, so this is not checked in
    /// release builds beyond reducing modulo `item_count`. Use
    /// [`CarouselState::try_jump_to`] for untrusted input.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(
            index < self.item_count,
            "jump_to({index}) with {} items",
            self.item_count
        );
        self.current_index = index % self.item_count;
    }

    pub fn try_jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.item_count {
            return Err(CoreError::IndexOutOfRange {
                index,
                item_count: self.item_count,
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// `(index, is_active)` for each indicator dot.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.item_count).map(move |idx| (idx, idx == self.current_index))
    }

    /// Horizontal offset of a sliding track showing the current item.
    pub fn translate_x_percent(&self) -> usize {
        self.current_index * 100
    }
}

/// The app preview carousel: one screenshot visible at a time, manual
/// navigation only.
#[derive(Debug, Clone)]
pub struct ScreenshotCarousel<'a> {
    items: &'a [Screenshot],
    state: CarouselState,
}

impl<'a> ScreenshotCarousel<'a> {
    pub fn new(items: &'a [Screenshot]) -> Result<Self> {
        Ok(Self {
            items,
            state: CarouselState::new(items.len())?,
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current(&self) -> &'a Screenshot {
        &self.items[self.state.current_index()]
    }

    pub fn items(&self) -> &'a [Screenshot] {
        self.items
    }

    pub fn next(&mut self) -> &'a Screenshot {
        self.state.next();
        self.current()
    }

    pub fn previous(&mut self) -> &'a Screenshot {
        self.state.previous();
        self.current()
    }

    pub fn jump_to(&mut self, index: usize) {
        self.state.jump_to(index);
    }

    pub fn try_jump_to(&mut self, index: usize) -> Result<()> {
        self.state.try_jump_to(index)
    }
}
