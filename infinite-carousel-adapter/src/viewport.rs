use alloc::vec;
use alloc::vec::Vec;

/// Gap between cards used by the inline carousel, in pixels.
pub const INLINE_GAP: u32 = 40;

/// Maps a viewport width to a card width.
///
/// Steps are `(max_viewport_width, slide_width)` pairs checked in ascending order; the first
/// step whose bound is `>=` the viewport width wins, otherwise `fallback` applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    steps: Vec<(u32, u32)>,
    fallback: u32,
}

impl Default for Breakpoints {
    /// Phone (<= 500px): 20rem, tablet (<= 980px): 25rem, desktop: 28.5rem.
    fn default() -> Self {
        Self::new(vec![(500, 320), (980, 400)], 456)
    }
}

impl Breakpoints {
    pub fn new(mut steps: Vec<(u32, u32)>, fallback: u32) -> Self {
        steps.sort_unstable_by_key(|&(max, _)| max);
        Self { steps, fallback }
    }

    /// A single width regardless of viewport.
    pub fn fixed(slide_width: u32) -> Self {
        Self::new(Vec::new(), slide_width)
    }

    /// Card width when the viewport width is not known yet.
    pub fn fallback(&self) -> u32 {
        self.fallback
    }

    pub fn slide_width_for(&self, viewport_width: u32) -> u32 {
        self.steps
            .iter()
            .find(|&&(max, _)| viewport_width <= max)
            .map_or(self.fallback, |&(_, width)| width)
    }
}
