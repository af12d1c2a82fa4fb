//! Tests for work partitioning

use rstest::rstest;

use crate::partition::{partition, split_by_slices, WorkSlice};

/// Slices must tile `[0, num_files)` in order with no gaps or overlap
fn assert_tiles(slices: &[WorkSlice], num_files: usize) {
    let mut expected_start = 0;
    for slice in slices {
        assert_eq!(slice.start, expected_start, "gap or overlap at {slice:?}");
        assert!(slice.start <= slice.end, "inverted slice {slice:?}");
        expected_start = slice.end;
    }
    assert_eq!(expected_start, num_files);
    assert_eq!(slices.iter().map(WorkSlice::len).sum::<usize>(), num_files);
}

#[test]
fn test_partition_no_files_gives_no_slices() {
    assert!(partition(0, 8).is_empty());
    assert!(partition(0, 1).is_empty());
}

#[rstest]
#[case(1, 1)]
#[case(10, 1)]
#[case(10, 3)]
#[case(10, 4)]
#[case(24, 24)]
#[case(7, 16)]
#[case(1, 24)]
#[case(1000, 7)]
#[case(999_983, 24)]
fn test_partition_tiles_sequence(#[case] num_files: usize, #[case] num_threads: usize) {
    let slices = partition(num_files, num_threads);

    assert_eq!(slices.len(), num_threads);
    assert_tiles(&slices, num_files);
}

#[test]
fn test_partition_exhaustive_small_inputs() {
    for num_files in 0..64 {
        for num_threads in 1..20 {
            let slices = partition(num_files, num_threads);
            assert_tiles(&slices, num_files);
        }
    }
}

#[test]
fn test_partition_matches_reference_formula() {
    let slices = partition(10, 4);
    assert_eq!(
        slices,
        vec![
            WorkSlice::new(0, 2),
            WorkSlice::new(2, 5),
            WorkSlice::new(5, 7),
            WorkSlice::new(7, 10),
        ]
    );
}

#[test]
fn test_partition_more_threads_than_files() {
    let slices = partition(3, 5);

    assert_tiles(&slices, 3);
    assert_eq!(slices.iter().filter(|s| s.is_empty()).count(), 2);
}

#[test]
fn test_partition_is_near_equal() {
    let slices = partition(1003, 10);
    let min = slices.iter().map(WorkSlice::len).min().unwrap_or(0);
    let max = slices.iter().map(WorkSlice::len).max().unwrap_or(0);
    assert!(max - min <= 1);
}

#[test]
fn test_partition_zero_threads_is_one_slice() {
    assert_eq!(partition(5, 0), vec![WorkSlice::new(0, 5)]);
}

#[test]
fn test_partition_huge_counts_do_not_overflow() {
    let slices = partition(usize::MAX, 3);
    assert_tiles(&slices, usize::MAX);
}

#[test]
fn test_work_slice_accessors() {
    let slice = WorkSlice::new(3, 7);

    assert_eq!(slice.len(), 4);
    assert!(!slice.is_empty());
    assert!(slice.contains(3));
    assert!(slice.contains(6));
    assert!(!slice.contains(7));
    assert_eq!(slice.range(), 3..7);
    assert!(WorkSlice::new(4, 4).is_empty());
}

#[test]
fn test_split_by_slices_matches_ranges() {
    let mut items: Vec<usize> = (0..11).collect();
    let slices = partition(items.len(), 3);

    let parts = split_by_slices(&mut items, &slices);

    assert_eq!(parts.len(), slices.len());
    for (part, slice) in parts.iter().zip(&slices) {
        assert_eq!(part.to_vec(), slice.range().collect::<Vec<_>>());
    }
}

#[test]
fn test_split_by_slices_parts_are_disjoint_and_writable() {
    let mut items = vec![0u8; 9];
    let slices = partition(items.len(), 4);

    for (id, part) in split_by_slices(&mut items, &slices).into_iter().enumerate() {
        for item in part.iter_mut() {
            *item = u8::try_from(id).unwrap_or(u8::MAX) + 1;
        }
    }

    // Every slot written by exactly one part, none left untouched
    assert!(items.iter().all(|&v| v > 0));
    assert_eq!(items, vec![1, 1, 2, 2, 3, 3, 4, 4, 4]);
}
