//! Parity interleaving
//!
//! Rearranges a list so that odd values sit at even indices and even values
//! sit at odd indices, each parity track keeping its original order.

/// Interleave odd and even values of a list
///
/// Absent entries are skipped. The output alternates between the next odd
/// value and the next even value; once one track runs out its slots are
/// padded with `None`. The output length is `2 * max(odd_count, even_count)`.
///
/// An absent list yields an empty output.
pub fn sort_even_odd_by_index(list: Option<&[Option<i32>]>) -> Vec<Option<i32>> {
    let Some(list) = list else {
        return Vec::new();
    };

    let (evens, odds): (Vec<i32>, Vec<i32>) = list
        .iter()
        .flatten()
        .copied()
        .partition(|value| value % 2 == 0);

    let pairs = odds.len().max(evens.len());
    let mut result = Vec::with_capacity(pairs * 2);

    for i in 0..pairs {
        result.push(odds.get(i).copied());
        result.push(evens.get(i).copied());
    }

    log::debug!(
        "interleaved {} odd and {} even values into {} slots",
        odds.len(),
        evens.len(),
        result.len()
    );

    result
}
