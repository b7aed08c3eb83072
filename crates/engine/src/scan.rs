//! Range scan over one conversation
//!
//! ## Algorithm
//!
//! Given a window `[from, to]` the scan makes two one-directional passes over
//! the same read view, both positioned at the key for `from`:
//!
//! 1. **Previous pass** (reverse): seek lands on the greatest key `<= from`.
//!    If that is `from` itself, step once more, since `from` belongs to the
//!    window. Whatever remains inside the conversation prefix is `previous`.
//! 2. **Forward pass**: walk keys `>= from` while they stay inside the prefix.
//!    Positions `<= to` are collected; the first position `> to` becomes
//!    `next` and ends the pass.
//!
//! `from > to` is not rejected: the window is empty and the first stored
//! position at or after `from` is reported as `next`.
//!
//! ## Failure Handling
//!
//! Opening or positioning an iterator is fatal (`StoreUnavailable`). Keys
//! inside the prefix that fail to decode are logged and skipped; in the
//! previous pass that leaves `previous` absent. A failure to advance ends
//! the pass with what was collected so far.

use tracing::warn;

use bitestore_core::{
    decode_key, encode_key, encode_prefix, IteratorOptions, ObjectKind, Position, ReadView,
    Result,
};

use crate::pagination::PaginationResult;

/// Scan `[from, to]` of one conversation on a single read view
///
/// # Errors
///
/// Returns `InvalidAddress` if the conversation fails validation and
/// `StoreUnavailable` if an iterator cannot be opened or positioned.
pub fn scan_window(
    view: &dyn ReadView,
    kind: ObjectKind,
    conversation: &str,
    from: Position,
    to: Position,
) -> Result<PaginationResult> {
    let prefix = encode_prefix(kind, conversation)?;
    let from_key = encode_key(kind, conversation, from)?;

    let previous = find_previous(view, &prefix, &from_key)?;
    let (items, next) = collect_forward(view, &prefix, &from_key, to)?;

    Ok(PaginationResult {
        previous,
        items,
        next,
    })
}

fn find_previous(
    view: &dyn ReadView,
    prefix: &[u8],
    from_key: &[u8],
) -> Result<Option<Position>> {
    let mut it = view.iter(IteratorOptions::reverse_keys_only())?;
    it.seek(from_key)?;

    if it.key() == Some(from_key) {
        if let Err(e) = it.next() {
            warn!(target: "bitestore::scan", error = %e, "Previous pass failed to advance");
            return Ok(None);
        }
    }

    if !it.valid_for_prefix(prefix) {
        return Ok(None);
    }
    let Some(key) = it.key() else {
        return Ok(None);
    };

    match decode_key(key) {
        Ok(addr) => Ok(Some(addr.position)),
        Err(e) => {
            warn!(
                target: "bitestore::scan",
                error = %e,
                key = ?String::from_utf8_lossy(key),
                "Skipping malformed key in previous pass"
            );
            Ok(None)
        }
    }
}

fn collect_forward(
    view: &dyn ReadView,
    prefix: &[u8],
    from_key: &[u8],
    to: Position,
) -> Result<(Vec<Position>, Option<Position>)> {
    let mut it = view.iter(IteratorOptions::keys_only())?;
    it.seek(from_key)?;

    let mut items = Vec::new();
    while it.valid_for_prefix(prefix) {
        if let Some(key) = it.key() {
            match decode_key(key) {
                Ok(addr) if addr.position > to => return Ok((items, Some(addr.position))),
                Ok(addr) => items.push(addr.position),
                Err(e) => {
                    warn!(
                        target: "bitestore::scan",
                        error = %e,
                        key = ?String::from_utf8_lossy(key),
                        "Skipping malformed key in forward pass"
                    );
                }
            }
        }

        if let Err(e) = it.next() {
            warn!(target: "bitestore::scan", error = %e, "Forward pass failed to advance");
            break;
        }
    }

    Ok((items, None))
}
