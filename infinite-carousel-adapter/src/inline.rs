use alloc::vec::Vec;

use infinite_carousel::{CarouselOptions, Direction, Frame, LoopController};

use crate::{
    Breakpoints, BoundNav, CarouselItem, CarouselView, Host, INLINE_GAP, ItemSource, NavBindings,
    SourceWatcher,
};

/// What the inline carousel shows for the current frame.
#[derive(Debug)]
pub enum Rendered<'a, T> {
    /// The item source has not delivered anything yet.
    Loading,
    Ready(CarouselView<'a, T>),
}

impl<'a, T> Rendered<'a, T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn view(&self) -> Option<&CarouselView<'a, T>> {
        match self {
            Self::Loading => None,
            Self::Ready(view) => Some(view),
        }
    }
}

/// The carousel rendered directly into the page.
///
/// It discovers its items by observing a source, sizes its cards from the viewport width, and
/// listens to two host-owned controls. All of it is event driven: the host forwards mutations,
/// resizes, clicks and timer ticks, and reads [`InlineCarousel::render`] afterwards.
pub struct InlineCarousel<T, S> {
    controller: LoopController,
    items: Vec<T>,
    watcher: SourceWatcher<S>,
    breakpoints: Breakpoints,
    nav: BoundNav,
}

impl<T, S> core::fmt::Debug for InlineCarousel<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InlineCarousel")
            .field("controller", &self.controller)
            .field("items", &self.items.len())
            .field("connected", &self.watcher.is_connected())
            .field("breakpoints", &self.breakpoints)
            .field("nav", &self.nav)
            .finish()
    }
}

impl<T: CarouselItem, S: ItemSource<T>> InlineCarousel<T, S> {
    /// Creates the carousel with the default breakpoints and controls, and probes the source
    /// once.
    ///
    /// `viewport_width` is `None` when the width is not known yet (e.g. pre-rendering).
    pub fn new(source: S, host: &impl Host, viewport_width: Option<u32>) -> Self {
        Self::with_config(
            source,
            host,
            viewport_width,
            Breakpoints::default(),
            NavBindings::inline(),
        )
    }

    pub fn with_config(
        source: S,
        host: &impl Host,
        viewport_width: Option<u32>,
        breakpoints: Breakpoints,
        nav: NavBindings,
    ) -> Self {
        let slide_width = viewport_width.map_or(breakpoints.fallback(), |w| {
            breakpoints.slide_width_for(w)
        });
        let options = CarouselOptions::new()
            .with_slide_width(slide_width)
            .with_gap(INLINE_GAP);

        let mut carousel = Self {
            controller: LoopController::new(options),
            items: Vec::new(),
            watcher: SourceWatcher::new(source),
            breakpoints,
            nav: nav.bind(host),
        };
        carousel.on_mutation();
        carousel
    }

    pub fn controller(&self) -> &LoopController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LoopController {
        &mut self.controller
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn watcher(&self) -> &SourceWatcher<S> {
        &self.watcher
    }

    /// Call this when the host reports a change; probes the source while it is still observed.
    ///
    /// Returns the initial frame if items were found.
    pub fn on_mutation(&mut self) -> Option<Frame> {
        let items = self.watcher.observe()?;
        self.set_items(items)
    }

    /// Replaces the items, e.g. from a push-style subscription.
    ///
    /// The controller is reinitialized, which cancels an in-flight transition. An empty list puts
    /// the carousel back into the loading state.
    pub fn set_items(&mut self, items: Vec<T>) -> Option<Frame> {
        self.items = items;
        if self.items.is_empty() {
            adebug!("InlineCarousel: waiting for items");
        }
        self.controller.initialize(self.items.len())
    }

    pub fn on_resize(&mut self, viewport_width: u32) -> Option<Frame> {
        let slide_width = self.breakpoints.slide_width_for(viewport_width);
        self.controller.set_slide_width(slide_width)
    }

    /// Handles a click on a host element. Clicks on anything but a bound control are ignored, as
    /// are clicks while the carousel is loading or moving.
    pub fn on_click(&mut self, element_id: &str, now_ms: u64) -> Option<Frame> {
        let direction = self.nav.resolve(element_id)?;
        self.advance(direction, now_ms)
    }

    pub fn advance(&mut self, direction: Direction, now_ms: u64) -> Option<Frame> {
        self.controller.advance(direction, now_ms).ok()
    }

    pub fn next(&mut self, now_ms: u64) -> Option<Frame> {
        self.advance(Direction::Forward, now_ms)
    }

    pub fn prev(&mut self, now_ms: u64) -> Option<Frame> {
        self.advance(Direction::Backward, now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<Frame> {
        self.controller.tick(now_ms)
    }

    pub fn render(&self) -> Rendered<'_, T> {
        match CarouselView::new(&self.controller, &self.items) {
            Some(view) => Rendered::Ready(view),
            None => Rendered::Loading,
        }
    }
}
