//! Length capping for oversized sequences

use crate::io::configuration::TRUNCATE_LIMIT;
use log::{debug, warn};
use std::borrow::Cow;

/// Keep at most the first `TRUNCATE_LIMIT` elements
///
/// The cap is fixed at `TRUNCATE_LIMIT` whatever `max_count` says; callers
/// that need their own bound use [`truncate_to`]. Dropping elements is not an
/// error, only a logged warning.
pub fn truncate<T: Clone>(data: &[T], max_count: usize) -> Cow<'_, [T]> {
    if max_count != TRUNCATE_LIMIT && data.len() > max_count.min(TRUNCATE_LIMIT) {
        debug!("truncate: requested bound {max_count} ignored, using {TRUNCATE_LIMIT}");
    }
    truncate_to(data, TRUNCATE_LIMIT)
}

/// Keep at most the first `limit` elements
///
/// Input within the limit is returned borrowed; otherwise an owned copy of
/// the prefix is returned.
pub fn truncate_to<T: Clone>(data: &[T], limit: usize) -> Cow<'_, [T]> {
    if data.len() <= limit {
        return Cow::Borrowed(data);
    }

    warn!("Got too many elements, drawing only first {limit} elements");
    Cow::Owned(data.iter().take(limit).cloned().collect())
}
