#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Lifecycle phase of a [`crate::LoopController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No (non-empty) sequence has been delivered yet.
    #[default]
    Uninitialized,
    Idle,
    /// An animated move is in flight; advances are rejected until it completes.
    Transitioning,
}

/// A render instruction for the view layer.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Number of cards in the tripled sequence (`3 * len`).
    pub extended_len: usize,
    pub position: usize,
    /// Horizontal translation of the card strip, in pixels (always `<= 0`).
    pub offset_px: i64,
    /// Whether the move to `offset_px` should be animated. `false` for snaps and resizes.
    pub animated: bool,
    pub transition_duration_ms: u64,
}

/// The slice of extended indexes that is aligned with the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl Window {
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }
}

/// One card of the extended sequence, as handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedItem<'a, T> {
    /// Index into the extended (tripled) sequence.
    pub index: usize,
    /// Index into the original sequence (`index % len`).
    pub source_index: usize,
    /// Which copy the card belongs to: 0, 1 (the middle copy) or 2.
    pub copy: usize,
    pub item: &'a T,
}

/// A render key that stays unique across the three copies of the same item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardKey<K> {
    pub key: K,
    pub index: usize,
}

impl<K: core::fmt::Display> core::fmt::Display for CardKey<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.key, self.index)
    }
}
