use alloc::string::String;

use infinite_carousel::{Direction, Frame, LoopController};

use crate::{
    BoundNav, CarouselData, CarouselItem, CarouselStyle, CarouselView, Host, NavBindings,
    Testimonial,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no container with id `{0}`")]
    MissingContainer(String),
}

/// A carousel mounted into a host container.
///
/// Created by [`mount`]; nothing is shown until [`MountedCarousel::start`] is called, and
/// [`MountedCarousel::stop`] tears the controller down again (cancelling any pending transition).
#[derive(Debug)]
pub struct MountedCarousel<T> {
    container_id: String,
    controller: LoopController,
    data: CarouselData<T>,
    nav: BoundNav,
    started: bool,
}

/// Mounts a carousel into the host container `container_id`.
pub fn mount<T: CarouselItem>(
    host: &impl Host,
    container_id: &str,
    data: CarouselData<T>,
) -> Result<MountedCarousel<T>, MountError> {
    mount_with_nav(host, container_id, data, NavBindings::mounted())
}

/// Mounts a testimonial carousel, falling back to the built-in payload without custom data.
pub fn mount_testimonials(
    host: &impl Host,
    container_id: &str,
    custom: Option<CarouselData<Testimonial>>,
) -> Result<MountedCarousel<Testimonial>, MountError> {
    mount(host, container_id, custom.unwrap_or_default())
}

pub fn mount_with_nav<T: CarouselItem>(
    host: &impl Host,
    container_id: &str,
    data: CarouselData<T>,
    nav: NavBindings,
) -> Result<MountedCarousel<T>, MountError> {
    if !host.has_element(container_id) {
        awarn!(container_id, "mount: container not found");
        return Err(MountError::MissingContainer(String::from(container_id)));
    }
    adebug!(container_id, len = data.data.len(), "mount");

    Ok(MountedCarousel {
        container_id: String::from(container_id),
        controller: LoopController::new(data.style.options()),
        data,
        nav: nav.bind(host),
        started: false,
    })
}

impl<T: CarouselItem> MountedCarousel<T> {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn controller(&self) -> &LoopController {
        &self.controller
    }

    pub fn style(&self) -> &CarouselStyle {
        &self.data.style
    }

    pub fn items(&self) -> &[T] {
        &self.data.data
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn start(&mut self) -> Option<Frame> {
        self.started = true;
        self.controller.initialize(self.data.data.len())
    }

    pub fn stop(&mut self) {
        self.started = false;
        self.controller.reset();
    }

    /// Replaces the payload. A started carousel is reinitialized with the new items and style.
    pub fn set_data(&mut self, data: CarouselData<T>) -> Option<Frame> {
        self.data = data;
        self.controller.set_options(self.data.style.options());
        if !self.started {
            return None;
        }
        self.controller.initialize(self.data.data.len())
    }

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

    /// The view to portal into the container; `None` before `start` or while there are no items.
    pub fn render(&self) -> Option<CarouselView<'_, T>> {
        if !self.started {
            return None;
        }
        CarouselView::new(&self.controller, &self.data.data)
    }
}
