use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::Testimonial;

/// Card width used when the style leaves `slide_width` at zero.
pub const FALLBACK_SLIDE_WIDTH: u32 = 500;

/// Presentation settings supplied alongside the data by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CarouselStyle {
    pub primary_text: String,
    pub secondary_text: String,
    pub slide_width: u32,
    pub paddings_between_slides: u32,
    pub border_radius: u32,
}

impl Default for CarouselStyle {
    fn default() -> Self {
        Self {
            primary_text: String::from("#000000"),
            secondary_text: String::from("#161616"),
            slide_width: infinite_carousel::DEFAULT_SLIDE_WIDTH,
            paddings_between_slides: infinite_carousel::DEFAULT_GAP,
            border_radius: 16,
        }
    }
}

impl CarouselStyle {
    pub fn effective_slide_width(&self) -> u32 {
        if self.slide_width == 0 {
            FALLBACK_SLIDE_WIDTH
        } else {
            self.slide_width
        }
    }

    /// Carousel options matching this style.
    pub fn options(&self) -> infinite_carousel::CarouselOptions {
        infinite_carousel::CarouselOptions::new()
            .with_slide_width(self.effective_slide_width())
            .with_gap(self.paddings_between_slides)
    }
}

/// The payload a host hands to a mounted carousel: the cards plus their style.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselData<T> {
    pub data: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: CarouselStyle,
}

impl<T> CarouselData<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            style: CarouselStyle::default(),
        }
    }

    pub fn with_style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for CarouselData<Testimonial> {
    /// The payload used when a carousel is mounted without custom data.
    fn default() -> Self {
        Self::new(vec![
            Testimonial::new(
                "John Doe",
                "this is a great app that is very useful, and i love using it. i would recommend \
                 this to anyone who wants to be more productive.",
            )
            .with_id(1)
            .with_photo_url("https://picsum.photos/800/400?random=1")
            .with_job_title("Senior Developer")
            .with_company("Google"),
        ])
    }
}
