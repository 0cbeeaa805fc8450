/// Why an advance request was dropped.
///
/// Both variants are expected during normal operation; adapters usually discard them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    #[error("carousel has no items yet")]
    NotReady,
    #[error("a transition is already in flight")]
    Busy,
}
