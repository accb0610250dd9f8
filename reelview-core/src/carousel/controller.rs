use tracing::{debug, trace};

use super::types::{CarouselPhase, Direction};

/// Paging state for one content list.
///
/// The controller tracks the item count of the list it pages over but not
/// the list itself; callers hand the list to [`window`](Self::window) when
/// rendering. Sibling controllers page independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    page_index: usize,
    page_size: usize,
    item_count: usize,
    skip_first: bool,
    direction: Direction,
    phase: CarouselPhase,
}

impl CarouselController {
    /// `skip_first` drops the first item of the list before paging, for
    /// lists whose first entry is already shown in the banner.
    pub fn new(page_size: usize, skip_first: bool) -> Self {
        Self {
            page_index: 0,
            page_size,
            item_count: 0,
            skip_first,
            direction: Direction::Still,
            phase: CarouselPhase::Idle,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.set_item_count(item_count);
        self
    }

    /// Record the length of a freshly loaded list. The current page is
    /// clamped so it stays addressable.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let last = self.last_page_index();
        if self.page_index > last {
            debug!(
                from = self.page_index,
                to = last,
                "clamping carousel page after list change"
            );
            self.page_index = last;
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn skip_first(&self) -> bool {
        self.skip_first
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }

    /// Number of full pages after the banner item is dropped:
    /// `floor(effective_len / page_size)`. Zero for an empty list or a
    /// zero page size. A trailing partial page is not counted.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.effective_len() / self.page_size
    }

    /// Highest page index `advance` can reach.
    pub fn last_page_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    fn effective_len(&self) -> usize {
        if self.skip_first {
            self.item_count.saturating_sub(1)
        } else {
            self.item_count
        }
    }

    /// Request a page change, wrapping in both directions.
    ///
    /// Ignored while a transition is in flight, for [`Direction::Still`],
    /// and when there is at most one page to show. Returns whether a
    /// transition was started; on `true` the caller must eventually call
    /// [`on_transition_complete`](Self::on_transition_complete).
    pub fn advance(&mut self, direction: Direction) -> bool {
        if let CarouselPhase::Transitioning { from, to } = self.phase {
            trace!(from, to, "page change ignored while animating");
            return false;
        }
        if direction == Direction::Still || self.item_count == 0 {
            return false;
        }

        let pages = self.last_page_index() + 1;
        if pages <= 1 {
            return false;
        }

        let from = self.page_index;
        let to = (from as i64 + i64::from(direction.step()))
            .rem_euclid(pages as i64) as usize;

        self.page_index = to;
        self.direction = direction;
        self.phase = CarouselPhase::Transitioning { from, to };
        debug!(from, to, pages, ?direction, "carousel page change");
        true
    }

    /// Release the animation lock. Returns `false` if no transition was in
    /// flight.
    pub fn on_transition_complete(&mut self) -> bool {
        match self.phase {
            CarouselPhase::Transitioning { .. } => {
                self.phase = CarouselPhase::Idle;
                true
            }
            CarouselPhase::Idle => false,
        }
    }

    /// Items on the current page of `list`.
    pub fn window<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        Self::window_for(list, self.page_index, self.page_size, self.skip_first)
    }

    /// `list[size * page .. size * page + size]` after optionally dropping
    /// the first element. Out-of-range pages and short lists produce a
    /// shorter or empty slice, never a panic.
    pub fn window_for<T>(
        list: &[T],
        page_index: usize,
        page_size: usize,
        skip_first: bool,
    ) -> &[T] {
        let list = if skip_first {
            list.get(1..).unwrap_or_default()
        } else {
            list
        };
        let start = page_size.saturating_mul(page_index).min(list.len());
        let end = start.saturating_add(page_size).min(list.len());
        &list[start..end]
    }
}
