//! Pagination result of a range scan
//!
//! A page carries the positions inside the requested window plus two hints
//! that let a client move to the neighbouring window without rescanning from
//! the start of the conversation.

use serde::{Deserialize, Serialize};

use bitestore_core::Position;

/// Positions in a window plus the boundary hints around it
///
/// Serializes as `{"previous": u64|null, "starts": [u64], "next": u64|null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    /// Greatest stored position strictly below the window start
    pub previous: Option<Position>,
    /// Stored positions inside the window, ascending
    #[serde(rename = "starts")]
    pub items: Vec<Position>,
    /// Smallest stored position strictly above the window end
    pub next: Option<Position>,
}

impl PaginationResult {
    /// Returns true if the window holds no positions
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of positions in the window
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is stored on either side of the window
    pub fn is_complete(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Zero-collapsed page shape for clients that predate nullable hints
///
/// Absent hints are written as `0`, so a hint of position `0` and an absent
/// hint look the same. Prefer [`PaginationResult`] wherever the client can
/// read `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPage {
    /// Previous hint, `0` when absent
    pub previous: Position,
    /// Positions inside the window, ascending
    pub starts: Vec<Position>,
    /// Next hint, `0` when absent
    pub next: Position,
}

impl From<PaginationResult> for LegacyPage {
    fn from(page: PaginationResult) -> Self {
        LegacyPage {
            previous: page.previous.unwrap_or(0),
            starts: page.items,
            next: page.next.unwrap_or(0),
        }
    }
}
