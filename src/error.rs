/// The heap could not satisfy an allocation request.
///
/// Returned by the fallible constructors and insertion methods
/// ([`TextQueue::try_new`], [`TextQueue::try_push_front`], and friends).
/// When a multi-step construction fails partway, everything already
/// allocated is released before this error is returned, so a failed
/// operation leaves the queue exactly as it was.
///
/// [`TextQueue::try_new`]: crate::TextQueue::try_new
/// [`TextQueue::try_push_front`]: crate::TextQueue::try_push_front
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("allocation failed")]
pub struct AllocError;
