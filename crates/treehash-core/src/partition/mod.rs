//! Partition module: Split the file sequence into per-worker slices

use std::ops::Range;

/// A contiguous half-open range `[start, end)` of record indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkSlice {
    pub start: usize,
    pub end: usize,
}

impl WorkSlice {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices in the slice
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `num_files` indices into `num_threads` contiguous slices
///
/// Slice `t` covers `[t * n / threads, (t + 1) * n / threads)` and the last
/// slice always ends at `num_files`. Returns no slices when there are no
/// files. A thread count of zero is treated as one.
#[must_use]
pub fn partition(num_files: usize, num_threads: usize) -> Vec<WorkSlice> {
    if num_files == 0 {
        return Vec::new();
    }
    let threads = num_threads.max(1);

    let boundary = |t: usize| -> usize {
        // u128 keeps t * n exact for any usize inputs
        let scaled = (t as u128 * num_files as u128) / threads as u128;
        usize::try_from(scaled).unwrap_or(num_files)
    };

    (0..threads)
        .map(|t| {
            let end = if t + 1 == threads {
                num_files
            } else {
                boundary(t + 1)
            };
            WorkSlice::new(boundary(t), end)
        })
        .collect()
}

/// Cut `items` into disjoint mutable sub-slices matching `slices`
///
/// `slices` must be the output of [`partition`] for `items.len()`.
pub(crate) fn split_by_slices<'a, T>(items: &'a mut [T], slices: &[WorkSlice]) -> Vec<&'a mut [T]> {
    debug_assert_eq!(
        slices.iter().map(WorkSlice::len).sum::<usize>(),
        items.len()
    );

    let mut rest = items;
    let mut parts = Vec::with_capacity(slices.len());
    for slice in slices {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(slice.len());
        parts.push(head);
        rest = tail;
    }
    parts
}

#[cfg(test)]
mod tests;
