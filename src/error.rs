// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Errors returned by list operations.

use thiserror::Error;

use crate::slot::Idx;
use crate::state::State;

/// Every way a list operation can fail.
///
/// The variants fall into four groups:
///
/// - allocation: [`ListError::Alloc`]
/// - size validation: [`ListError::Size`]
/// - structural corruption: [`ListError::Broken`], [`ListError::BadCounter`],
///   [`ListError::BadHead`], [`ListError::BadTail`], [`ListError::BadHeadTail`],
///   [`ListError::BadLink`], [`ListError::BadFree`]
/// - invalid input: [`ListError::BadIndex`], [`ListError::BadPosition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// Storage for `slots` slots could not be reserved.
    #[error("failed to allocate storage for {slots} slots")]
    Alloc { slots: usize },

    /// The requested capacity cannot hold a single element.
    #[error("requested capacity {requested} is too small")]
    Size { requested: usize },

    /// The list is not usable; carries the state it is stuck in.
    #[error("list is not usable: {0}")]
    Broken(State),

    /// The element counter disagrees with the linked structure.
    #[error("element counter is {counted}, but {walked} slots are linked")]
    BadCounter { counted: usize, walked: usize },

    /// The sentinel's head link is inconsistent.
    #[error("head link is inconsistent")]
    BadHead,

    /// The sentinel's tail link is inconsistent.
    #[error("tail link is inconsistent")]
    BadTail,

    /// Both sentinel links are inconsistent.
    #[error("head and tail links are inconsistent")]
    BadHeadTail,

    /// A link between two occupied slots is not symmetric.
    #[error("link at slot {0} is inconsistent")]
    BadLink(Idx),

    /// The free chain is inconsistent, or growth was requested with free slots left.
    #[error("free chain is inconsistent")]
    BadFree,

    /// The slot is the sentinel, out of range, or not occupied.
    #[error("slot {0} does not hold an element")]
    BadIndex(Idx),

    /// The logical position is outside the list.
    #[error("position {position} is out of range for a list of length {len}")]
    BadPosition { position: usize, len: usize },
}

impl ListError {
    /// The numeric error code, for callers that branch on integers.
    pub fn code(&self) -> u8 {
        return match self {
            ListError::Alloc { .. } => 11,
            ListError::Size { .. } => 102,
            ListError::Broken(_) => 192,
            ListError::BadLink(_) => 192,
            ListError::BadCounter { .. } => 194,
            ListError::BadHead => 196,
            ListError::BadHeadTail => 197,
            ListError::BadTail => 198,
            ListError::BadFree => 200,
            ListError::BadIndex(_) => 202,
            ListError::BadPosition { .. } => 202,
        };
    }

    /// True for errors caused by bad caller input; the list stays usable.
    pub fn is_input(&self) -> bool {
        return matches!(
            self,
            ListError::Size { .. } | ListError::BadIndex(_) | ListError::BadPosition { .. }
        );
    }

    /// True for errors describing a corrupted or unusable structure.
    /// Only re-initialization recovers from these.
    pub fn is_structural(&self) -> bool {
        return matches!(
            self,
            ListError::Broken(_)
                | ListError::BadCounter { .. }
                | ListError::BadHead
                | ListError::BadTail
                | ListError::BadHeadTail
                | ListError::BadLink(_)
                | ListError::BadFree
        );
    }

    /// The state a list ends up in after an integrity scan reports this error.
    pub(crate) fn corrupted_state(&self) -> State {
        return match self {
            ListError::BadHead => State::BadHead,
            ListError::BadTail => State::BadTail,
            ListError::BadHeadTail => State::BadHeadTail,
            _ => State::Broken,
        };
    }
}
