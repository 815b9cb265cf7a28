//! Batch processing
//!
//! Applies the list operations to many independent lists. With the
//! `parallel` feature, batches of at least `PARALLEL_THRESHOLD` lists are
//! spread over the rayon pool. Results always follow input order.

use crate::domain::arrange::{ArrangeError, split_and_arrange};
use crate::domain::parity::sort_even_odd_by_index;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Interleave every list of a batch by parity
pub fn sort_even_odd_batch(lists: &[Vec<Option<i32>>]) -> Vec<Vec<Option<i32>>> {
    map_batch(lists, |list| sort_even_odd_by_index(Some(list)))
}

/// Split-and-arrange every list of a batch
///
/// Each list gets its own result, so an invalid list does not abort the batch.
pub fn split_and_arrange_batch(lists: &[Vec<Option<i32>>]) -> Vec<Result<Vec<i32>, ArrangeError>> {
    let results = map_batch(lists, |list| split_and_arrange(Some(list)));

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!("{} of {} lists could not be arranged", failed, results.len());
    }

    results
}

#[cfg(feature = "parallel")]
fn map_batch<R, F>(lists: &[Vec<Option<i32>>], op: F) -> Vec<R>
where
    R: Send,
    F: Fn(&[Option<i32>]) -> R + Sync + Send,
{
    if lists.len() < PARALLEL_THRESHOLD {
        return lists.iter().map(|list| op(list.as_slice())).collect();
    }

    log::debug!("processing {} lists in parallel", lists.len());
    lists.par_iter().map(|list| op(list.as_slice())).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_batch<R, F>(lists: &[Vec<Option<i32>>], op: F) -> Vec<R>
where
    F: Fn(&[Option<i32>]) -> R,
{
    log::debug!("processing {} lists sequentially", lists.len());
    lists.iter().map(|list| op(list.as_slice())).collect()
}
