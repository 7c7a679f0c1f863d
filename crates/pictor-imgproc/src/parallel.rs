//! Row partitioning for the worker pool.
//!
//! The convolution engine splits an image into contiguous blocks of rows,
//! one block per worker. The split is computed once per invocation and is a
//! pure function of `(height, num_workers)`, so the same inputs always yield
//! the same schedule.

/// A half-open range `[start, end)` of image row indices assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row of the block.
    pub start: usize,
    /// One past the last row of the block.
    pub end: usize,
}

impl RowRange {
    /// Number of rows in the block.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the block contains no rows.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Divide the row range `[0, height)` into `num_workers` contiguous blocks.
///
/// Every worker receives `height / num_workers` rows; the first
/// `height % num_workers` workers receive one extra row. The returned ranges
/// are consecutive, non-overlapping and cover `[0, height)` exactly. When
/// `height < num_workers` the trailing ranges are empty.
///
/// `num_workers` must be greater than zero.
pub fn partition_rows(height: usize, num_workers: usize) -> Vec<RowRange> {
    debug_assert!(num_workers > 0, "num_workers must be > 0");

    let base = height / num_workers;
    let remainder = height % num_workers;

    let mut ranges = Vec::with_capacity(num_workers);
    let mut start = 0;
    for i in 0..num_workers {
        let extra = usize::from(i < remainder);
        let end = start + base + extra;
        ranges.push(RowRange { start, end });
        start = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(height: usize, ranges: &[RowRange]) {
        let mut expected_start = 0;
        for range in ranges {
            assert_eq!(range.start, expected_start);
            assert!(range.end >= range.start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, height);
    }

    #[test]
    fn test_partition_even() {
        let ranges = partition_rows(8, 4);
        assert_eq!(
            ranges,
            vec![
                RowRange { start: 0, end: 2 },
                RowRange { start: 2, end: 4 },
                RowRange { start: 4, end: 6 },
                RowRange { start: 6, end: 8 },
            ]
        );
    }

    #[test]
    fn test_partition_remainder_goes_first() {
        let ranges = partition_rows(10, 4);
        assert_eq!(
            ranges,
            vec![
                RowRange { start: 0, end: 3 },
                RowRange { start: 3, end: 6 },
                RowRange { start: 6, end: 8 },
                RowRange { start: 8, end: 10 },
            ]
        );
    }

    #[test]
    fn test_partition_covers_without_gaps() {
        for height in 0..40 {
            for num_workers in 1..10 {
                let ranges = partition_rows(height, num_workers);
                assert_eq!(ranges.len(), num_workers);
                assert_covers(height, &ranges);
            }
        }
    }

    #[test]
    fn test_partition_fairness() {
        for height in 0..40 {
            for num_workers in 1..10 {
                let ranges = partition_rows(height, num_workers);
                let min = ranges.iter().map(RowRange::len).min().unwrap();
                let max = ranges.iter().map(RowRange::len).max().unwrap();
                assert!(max - min <= 1, "height={height} workers={num_workers}");
            }
        }
    }

    #[test]
    fn test_partition_more_workers_than_rows() {
        let ranges = partition_rows(3, 8);
        assert_covers(3, &ranges);
        assert!(ranges[..3].iter().all(|r| r.len() == 1));
        assert!(ranges[3..].iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_partition_zero_height() {
        let ranges = partition_rows(0, 4);
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_partition_deterministic() {
        assert_eq!(partition_rows(123, 7), partition_rows(123, 7));
    }
}
