use alloc::sync::Arc;

use crate::{Frame, ItemKey, LoopController};

/// A callback fired whenever the controller emits a new [`Frame`].
pub type OnChangeCallback<K> = Arc<dyn Fn(&LoopController<K>, Frame) + Send + Sync>;

pub const DEFAULT_SLIDE_WIDTH: u32 = 320;
pub const DEFAULT_GAP: u32 = 16;
/// Must match the renderer's CSS/animation duration, or the snap becomes visible mid-move.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 500;

/// Configuration for [`crate::LoopController`].
///
/// Heavy fields are stored in `Arc`s so adapters can tweak a value and call
/// `LoopController::set_options` without reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Width of one card in pixels.
    pub slide_width: u32,
    /// Space between two cards in pixels.
    pub gap: u32,
    pub transition_duration_ms: u64,
    /// Maps a source index to a stable identity. Used for render keys only.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
    /// Optional callback fired with every emitted frame.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            slide_width: self.slide_width,
            gap: self.gap,
            transition_duration_ms: self.transition_duration_ms,
            get_item_key: Arc::clone(&self.get_item_key),
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a carousel keyed by source index (`ItemKey = u64`).
    pub fn new() -> Self {
        Self::new_with_key(|i| i as u64)
    }
}

impl Default for CarouselOptions<ItemKey> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the item at source index `i`.
    pub fn new_with_key(get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            slide_width: DEFAULT_SLIDE_WIDTH,
            gap: DEFAULT_GAP,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            get_item_key: Arc::new(get_item_key),
            on_change: None,
        }
    }

    pub fn with_slide_width(mut self, slide_width: u32) -> Self {
        self.slide_width = slide_width;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_get_item_key<K2>(
        self,
        get_item_key: impl Fn(usize) -> K2 + Send + Sync + 'static,
    ) -> CarouselOptions<K2> {
        // `on_change` is typed over the key, so it cannot carry over.
        CarouselOptions {
            slide_width: self.slide_width,
            gap: self.gap,
            transition_duration_ms: self.transition_duration_ms,
            get_item_key: Arc::new(get_item_key),
            on_change: None,
        }
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&LoopController<K>, Frame) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Distance between the leading edges of two neighbouring cards.
    pub fn stride(&self) -> u64 {
        self.slide_width as u64 + self.gap as u64
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("slide_width", &self.slide_width)
            .field("gap", &self.gap)
            .field("transition_duration_ms", &self.transition_duration_ms)
            .finish_non_exhaustive()
    }
}
