//! Adapter utilities for the `infinite-carousel` crate.
//!
//! The `infinite-carousel` crate only knows about positions and offsets. This crate provides the
//! framework-neutral pieces a view layer typically needs around it:
//!
//! - Item records (`Testimonial`) and the host payload (`CarouselData`, `CarouselStyle`)
//! - Item discovery by observing a source until data appears (`SourceWatcher`)
//! - Responsive card widths (`Breakpoints`) and host-owned navigation controls (`NavBindings`)
//! - Render snapshots with CSS-ready transform/transition values (`CarouselView`)
//! - Two hosting strategies on top of one controller: `InlineCarousel` and `mount`
//!
//! This crate is intentionally framework-agnostic (no DOM or widget-toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod inline;
mod item;
mod mount;
mod nav;
mod payload;
mod source;
mod testimonial;
mod view;
mod viewport;


pub use inline::{InlineCarousel, Rendered};
pub use item::CarouselItem;
pub use mount::{MountError, MountedCarousel, mount, mount_testimonials, mount_with_nav};
pub use nav::{BoundNav, Host, NavBindings};
pub use payload::{CarouselData, CarouselStyle, FALLBACK_SLIDE_WIDTH};
pub use source::{ItemSource, SourceWatcher};
pub use testimonial::Testimonial;
pub use view::{Card, CarouselView};
pub use viewport::{Breakpoints, INLINE_GAP};
