/// A record that can be shown on a carousel card.
///
/// The controller only needs the item count; adapters use `key` to build render keys that stay
/// unique across the three copies of the sequence.
pub trait CarouselItem {
    type Key: Clone;

    fn key(&self) -> Self::Key;
}

impl CarouselItem for u64 {
    type Key = u64;

    fn key(&self) -> u64 {
        *self
    }
}

impl CarouselItem for &str {
    type Key = alloc::string::String;

    fn key(&self) -> Self::Key {
        alloc::string::String::from(*self)
    }
}
