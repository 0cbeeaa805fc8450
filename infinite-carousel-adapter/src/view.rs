use alloc::format;
use alloc::string::String;

use infinite_carousel::{CardKey, ExtendedSequence, Frame, LoopController, Window};

use crate::CarouselItem;

/// One card to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card<'a, T: CarouselItem> {
    pub key: CardKey<T::Key>,
    /// Index into the extended (tripled) sequence.
    pub index: usize,
    pub source_index: usize,
    /// Whether the card sits inside the window aligned with the viewport.
    pub in_window: bool,
    pub item: &'a T,
}

/// Everything a renderer needs for one frame: the whole card strip plus where to put it.
#[derive(Debug)]
pub struct CarouselView<'a, T> {
    frame: Frame,
    window: Window,
    slide_width: u32,
    gap: u32,
    cards: ExtendedSequence<'a, T>,
}

impl<T> Clone for CarouselView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            frame: self.frame,
            window: self.window,
            slide_width: self.slide_width,
            gap: self.gap,
            cards: self.cards,
        }
    }
}

impl<'a, T: CarouselItem> CarouselView<'a, T> {
    /// Builds a view, or `None` while the controller is not ready or the items do not match
    /// its length.
    pub fn new<K>(controller: &LoopController<K>, items: &'a [T]) -> Option<Self> {
        let frame = controller.frame()?;
        if items.len() != controller.len() {
            awarn!(
                items = items.len(),
                len = controller.len(),
                "CarouselView::new: item count out of sync with controller"
            );
            return None;
        }
        Some(Self {
            frame,
            window: controller.window(),
            slide_width: controller.options().slide_width,
            gap: controller.options().gap,
            cards: ExtendedSequence::new(items),
        })
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn slide_width(&self) -> u32 {
        self.slide_width
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards of the strip, in render order.
    pub fn cards(&self) -> impl Iterator<Item = Card<'a, T>> + use<'a, T> {
        let window = self.window;
        self.cards.iter().map(move |it| Card {
            key: CardKey {
                key: it.item.key(),
                index: it.index,
            },
            index: it.index,
            source_index: it.source_index,
            in_window: window.contains(it.index),
            item: it.item,
        })
    }

    /// Only the cards inside the window.
    pub fn visible_cards(&self) -> impl Iterator<Item = Card<'a, T>> + use<'a, T> {
        self.cards().filter(|card| card.in_window)
    }

    /// CSS `transform` value for the card strip, e.g. `translateX(-1008px)`.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.frame.offset_px)
    }

    /// CSS `transition` value: animated moves ease in and out, snaps apply instantly.
    pub fn transition(&self) -> String {
        if self.frame.animated {
            format!(
                "transform {}ms ease-in-out",
                self.frame.transition_duration_ms
            )
        } else {
            String::from("none")
        }
    }
}
