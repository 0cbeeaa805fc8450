use alloc::string::String;

use infinite_carousel::Direction;

/// The page the carousel lives in, reduced to what the adapters ask of it.
pub trait Host {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Host for F {
    fn has_element(&self, id: &str) -> bool {
        self(id)
    }
}

/// Ids of the host-owned controls that move the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavBindings {
    pub next_id: String,
    pub prev_id: String,
}

impl NavBindings {
    pub fn new(next_id: impl Into<String>, prev_id: impl Into<String>) -> Self {
        Self {
            next_id: next_id.into(),
            prev_id: prev_id.into(),
        }
    }

    /// Controls used by the inline carousel.
    pub fn inline() -> Self {
        Self::new("slideright", "slideleft")
    }

    /// Controls used by a mounted carousel.
    pub fn mounted() -> Self {
        Self::new("nextslide", "previousslide")
    }

    /// Looks the controls up on the host. Missing controls are simply never bound.
    pub fn bind(&self, host: &impl Host) -> BoundNav {
        let next = host.has_element(&self.next_id);
        let prev = host.has_element(&self.prev_id);
        if !next || !prev {
            atrace!(next, prev, "NavBindings::bind: control missing, left inert");
        }
        BoundNav {
            bindings: self.clone(),
            next,
            prev,
        }
    }
}

/// Navigation controls after looking them up on the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundNav {
    bindings: NavBindings,
    next: bool,
    prev: bool,
}

impl BoundNav {
    pub fn bindings(&self) -> &NavBindings {
        &self.bindings
    }

    pub fn is_bound(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        }
    }

    /// The direction a click on `element_id` requests, if that element is a bound control.
    pub fn resolve(&self, element_id: &str) -> Option<Direction> {
        if self.next && element_id == self.bindings.next_id {
            Some(Direction::Forward)
        } else if self.prev && element_id == self.bindings.prev_id {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
