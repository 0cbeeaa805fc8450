use core::cell::Cell;

use crate::extended::COPIES;
use crate::{AdvanceError, CardKey, CarouselOptions, Direction, Frame, ItemKey, Phase, Window};

/// A headless infinite-loop carousel controller.
///
/// The controller never holds the items themselves, only their count. It tracks a position in
/// the sequence repeated three times (see [`crate::ExtendedSequence`]) and keeps that position
/// inside the middle copy between transitions, so the strip never runs out of cards in either
/// direction.
///
/// Time is adapter-driven. An accepted advance schedules its completion `transition_duration_ms`
/// after the `now_ms` it was given, and the adapter calls [`LoopController::tick`] from its frame
/// loop or timer to fire it. Adapters with their own completion signal (e.g. a `transitionend`
/// event) can call [`LoopController::complete_transition`] directly instead.
#[derive(Clone, Debug)]
pub struct LoopController<K = ItemKey> {
    options: CarouselOptions<K>,
    len: usize,
    position: usize,
    phase: Phase,
    completes_at_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K> LoopController<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        cdebug!(
            slide_width = options.slide_width,
            gap = options.gap,
            transition_duration_ms = options.transition_duration_ms,
            "LoopController::new"
        );
        Self {
            options,
            len: 0,
            position: 0,
            phase: Phase::Uninitialized,
            completes_at_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// Replaces the options. Position and phase are left untouched.
    ///
    /// A pending completion keeps its original deadline even if the duration changed.
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        self.options = options;
        self.notify();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&LoopController<K>, Frame) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    fn notify_now(&self) {
        let (Some(cb), Some(frame)) = (&self.options.on_change, self.frame()) else {
            return;
        };
        cb(self, frame);
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Useful when an adapter handles a resize and a completion on the same frame.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// (Re)initializes the controller for a sequence of `len` items.
    ///
    /// Any pending completion is cancelled and the position is placed on the first card of the
    /// middle copy. With `len == 0` the controller goes back to [`Phase::Uninitialized`] and
    /// returns `None`.
    pub fn initialize(&mut self, len: usize) -> Option<Frame> {
        self.cancel_pending_completion();
        if len == 0 {
            ctrace!("LoopController::initialize: empty sequence, not ready");
            self.len = 0;
            self.position = 0;
            self.phase = Phase::Uninitialized;
            return None;
        }

        self.len = len;
        self.position = len;
        self.phase = Phase::Idle;
        cdebug!(len, position = self.position, "LoopController::initialize");
        self.notify();
        self.frame()
    }

    /// Convenience for `initialize(items.len())`.
    pub fn initialize_from<T>(&mut self, items: &[T]) -> Option<Frame> {
        self.initialize(items.len())
    }

    /// Tears the controller down: cancels any pending completion and forgets the sequence.
    pub fn reset(&mut self) {
        self.cancel_pending_completion();
        self.len = 0;
        self.position = 0;
        self.phase = Phase::Uninitialized;
    }

    fn cancel_pending_completion(&mut self) {
        let cancelled = self.completes_at_ms.take();
        if cancelled.is_some() {
            cdebug!(
                completes_at_ms = ?cancelled,
                position = self.position,
                "LoopController: cancelled pending completion"
            );
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase != Phase::Uninitialized
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Length of the original sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the extended (tripled) sequence.
    pub fn extended_len(&self) -> usize {
        self.len.saturating_mul(COPIES)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// When the in-flight transition is due to complete, if any.
    pub fn completes_at_ms(&self) -> Option<u64> {
        self.completes_at_ms
    }

    /// Requests a one-card move.
    ///
    /// Requests are dropped, not queued: while uninitialized this returns
    /// [`AdvanceError::NotReady`], and while a transition is in flight it returns
    /// [`AdvanceError::Busy`]. Neither changes any state.
    pub fn advance(&mut self, direction: Direction, now_ms: u64) -> Result<Frame, AdvanceError> {
        match self.phase {
            Phase::Uninitialized => {
                ctrace!(?direction, "LoopController::advance: not ready");
                return Err(AdvanceError::NotReady);
            }
            Phase::Transitioning => {
                ctrace!(?direction, "LoopController::advance: busy");
                return Err(AdvanceError::Busy);
            }
            Phase::Idle => {}
        }

        self.position = match direction {
            Direction::Forward => self.position.saturating_add(1),
            Direction::Backward => self.position.saturating_sub(1),
        };
        self.phase = Phase::Transitioning;
        self.completes_at_ms = Some(now_ms.saturating_add(self.options.transition_duration_ms));
        ctrace!(
            ?direction,
            position = self.position,
            completes_at_ms = ?self.completes_at_ms,
            "LoopController::advance"
        );

        self.notify();
        Ok(self.current_frame())
    }

    pub fn next(&mut self, now_ms: u64) -> Result<Frame, AdvanceError> {
        self.advance(Direction::Forward, now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> Result<Frame, AdvanceError> {
        self.advance(Direction::Backward, now_ms)
    }

    /// Fires the pending completion once its deadline has passed.
    ///
    /// Returns the (non-animated) frame produced by the completion, or `None` if nothing was
    /// due.
    pub fn tick(&mut self, now_ms: u64) -> Option<Frame> {
        let at = self.completes_at_ms?;
        if now_ms < at {
            return None;
        }
        self.complete_transition()
    }

    /// Ends the in-flight transition and snaps the position back into the middle copy.
    ///
    /// The snap uses the current sequence length and is reported with `animated == false` so
    /// the renderer can apply it without a visible jump. Returns `None` if no transition was in
    /// flight.
    pub fn complete_transition(&mut self) -> Option<Frame> {
        if self.phase != Phase::Transitioning {
            return None;
        }
        self.completes_at_ms = None;
        self.phase = Phase::Idle;

        let snapped = snap_to_middle(self.position, self.len);
        if snapped != self.position {
            cdebug!(
                from = self.position,
                to = snapped,
                len = self.len,
                "LoopController: boundary snap"
            );
            self.position = snapped;
        }

        self.notify();
        Some(self.current_frame())
    }

    /// Updates the presentational card width (e.g. after a viewport resize).
    ///
    /// This never touches the transition state; the next frame simply reads the new width.
    pub fn set_slide_width(&mut self, slide_width: u32) -> Option<Frame> {
        if self.options.slide_width != slide_width {
            self.options.slide_width = slide_width;
            self.notify();
        }
        self.frame()
    }

    pub fn set_gap(&mut self, gap: u32) -> Option<Frame> {
        if self.options.gap != gap {
            self.options.gap = gap;
            self.notify();
        }
        self.frame()
    }

    /// Pixel offset of the card strip for the current position.
    pub fn offset_px(&self) -> i64 {
        self.offset_at(self.position)
    }

    /// Pixel offset of the card strip when `position` is aligned with the window's leading edge.
    pub fn offset_at(&self, position: usize) -> i64 {
        let px = (position as u64).saturating_mul(self.options.stride());
        -(px.min(i64::MAX as u64) as i64)
    }

    /// The current render instruction, or `None` while uninitialized.
    pub fn frame(&self) -> Option<Frame> {
        self.is_ready().then(|| self.current_frame())
    }

    fn current_frame(&self) -> Frame {
        Frame {
            extended_len: self.extended_len(),
            position: self.position,
            offset_px: self.offset_px(),
            animated: self.is_transitioning(),
            transition_duration_ms: self.options.transition_duration_ms,
        }
    }

    /// Extended indexes of the `len` cards starting at the current position.
    pub fn window(&self) -> Window {
        Window {
            start_index: self.position,
            end_index: self.position.saturating_add(self.len),
        }
    }

    /// Source index of an extended index.
    pub fn source_index(&self, extended_index: usize) -> Option<usize> {
        if extended_index >= self.extended_len() {
            return None;
        }
        Some(extended_index % self.len)
    }

    /// Source index of the leftmost visible card.
    pub fn current_index(&self) -> Option<usize> {
        self.source_index(self.position)
    }

    pub fn key_for(&self, source_index: usize) -> K {
        (self.options.get_item_key)(source_index)
    }

    /// Render key for an extended index: the item identity plus the extended index.
    pub fn card_key(&self, extended_index: usize) -> Option<CardKey<K>> {
        let source_index = self.source_index(extended_index)?;
        Some(CardKey {
            key: self.key_for(source_index),
            index: extended_index,
        })
    }
}

/// Maps any position onto the equivalent card of the middle copy `[len, 2 * len)`.
///
/// Positions already inside the middle copy are returned unchanged.
pub(crate) fn snap_to_middle(position: usize, len: usize) -> usize {
    if len == 0 {
        return position;
    }
    let upper = len.saturating_mul(2);
    if (len..upper).contains(&position) {
        return position;
    }
    len + position % len
}
