//! A headless infinite-loop carousel controller.
//!
//! For adapter-level utilities (item sources, responsive widths, inline and mounted views), see
//! the `infinite-carousel-adapter` crate.
//!
//! The carousel renders its items three times back to back and keeps the position inside the
//! middle copy. Each advance moves one card with an animated transition; once the transition
//! completes, a position that drifted into an outer copy is silently moved to the equivalent card
//! of the middle copy, so the strip can be scrolled forever in both directions.
//!
//! It is UI-agnostic. A view layer is expected to provide:
//! - the item count (whenever the data source delivers or changes)
//! - navigation requests (forward / backward)
//! - the current time on each frame or timer tick
//! - the card width and gap (e.g. recomputed on viewport resize)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod extended;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use controller::LoopController;
pub use error::AdvanceError;
pub use extended::{COPIES, ExtendedSequence, Iter};
pub use options::{
    CarouselOptions, DEFAULT_GAP, DEFAULT_SLIDE_WIDTH, DEFAULT_TRANSITION_DURATION_MS,
    OnChangeCallback,
};
pub use types::{CardKey, Direction, ExtendedItem, Frame, Phase, Window};

pub type ItemKey = u64;
