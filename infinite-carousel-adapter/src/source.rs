use alloc::vec::Vec;

/// Something that may (eventually) provide the carousel's items.
///
/// `fetch` is probed whenever the host reports a change; it returns `None` until the data
/// exists. Closures of the form `FnMut() -> Option<Vec<T>>` implement this trait.
pub trait ItemSource<T> {
    fn fetch(&mut self) -> Option<Vec<T>>;
}

impl<T, F> ItemSource<T> for F
where
    F: FnMut() -> Option<Vec<T>>,
{
    fn fetch(&mut self) -> Option<Vec<T>> {
        self()
    }
}

/// Observes an [`ItemSource`] until it yields a non-empty sequence, then disconnects.
///
/// Adapters call [`SourceWatcher::observe`] once at startup and again on every host mutation
/// notification. The first non-empty result is returned and further probes are skipped until
/// [`SourceWatcher::reconnect`] is called.
#[derive(Clone, Debug)]
pub struct SourceWatcher<S> {
    source: S,
    connected: bool,
    probes: u64,
}

impl<S> SourceWatcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            connected: true,
            probes: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// How many times the source has been probed.
    pub fn probes(&self) -> u64 {
        self.probes
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Starts observing again, e.g. to pick up a later update of the source.
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn observe<T>(&mut self) -> Option<Vec<T>>
    where
        S: ItemSource<T>,
    {
        if !self.connected {
            return None;
        }
        self.probes = self.probes.saturating_add(1);

        match self.source.fetch() {
            Some(items) if !items.is_empty() => {
                adebug!(
                    len = items.len(),
                    probes = self.probes,
                    "SourceWatcher: found items"
                );
                self.connected = false;
                Some(items)
            }
            _ => {
                atrace!(probes = self.probes, "SourceWatcher: waiting for items");
                None
            }
        }
    }
}
