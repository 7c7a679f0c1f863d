use crate::filter::kernels::Kernel3x3;
use crate::parallel::{partition_rows, RowRange};
use pictor_image::{Image, ImageError};

/// Errors that can occur when applying a filter.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The requested worker count is invalid.
    #[error("worker count must be > 0, got {0}")]
    InvalidWorkerCount(usize),

    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// The number of worker threads used when the caller does not pick one.
pub const DEFAULT_NUM_WORKERS: usize = 4;

/// Compute one output value as the weighted 3x3 neighborhood sum around
/// `(x, y)` in channel `ch`.
///
/// Neighbors that fall outside the image replicate the nearest edge pixel.
/// The sum is accumulated in `f32`, truncated toward zero and narrowed to
/// `u8` with wrap-around, so out-of-range sums alias instead of saturating.
pub fn convolve_pixel<const C: usize>(
    src: &Image<u8, C>,
    x: usize,
    y: usize,
    ch: usize,
    kernel: &Kernel3x3,
) -> u8 {
    let src_data = src.as_slice();
    let mut sum = 0.0f32;
    for dy in 0..3 {
        for dx in 0..3 {
            let row = (y + dy).min(src.rows()).max(1) - 1;
            let col = (x + dx).min(src.cols()).max(1) - 1;
            let src_pix_offset = (row * src.cols() + col) * C + ch;
            sum += f32::from(src_data[src_pix_offset]) * kernel[dy][dx];
        }
    }
    sum as i32 as u8
}

/// Filter one contiguous block of destination rows.
fn convolve_rows<const C: usize>(
    src: &Image<u8, C>,
    dst_block: &mut [u8],
    rows: RowRange,
    kernel: &Kernel3x3,
) {
    let row_stride = src.cols() * C;
    dst_block
        .chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(dy, dst_row)| {
            let y = rows.start + dy;
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pix)| {
                    for (ch, dst_val) in dst_pix.iter_mut().enumerate() {
                        *dst_val = convolve_pixel(src, x, y, ch, kernel);
                    }
                });
        });
}

/// Convolve an image with a 3x3 kernel.
///
/// The rows are split into one contiguous range per worker and each worker
/// writes its own disjoint slice of the destination. The call blocks until
/// every row has been filtered.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, with the same shape as `src`.
/// * `kernel` - The 3x3 weight table, e.g. from [`FilterKind::kernel`].
/// * `num_workers` - The number of worker threads, must be greater than zero.
///
/// # Errors
///
/// Returns an error if the images differ in shape, if `num_workers` is zero
/// or if the thread pool cannot be built.
///
/// [`FilterKind::kernel`]: crate::filter::kernels::FilterKind::kernel
pub fn convolve<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel3x3,
    num_workers: usize,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    if num_workers == 0 {
        return Err(FilterError::InvalidWorkerCount(num_workers));
    }

    if src.as_slice().is_empty() {
        return Ok(());
    }

    let row_stride = src.cols() * C;
    let ranges = partition_rows(src.rows(), num_workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .map_err(|e| FilterError::ThreadPool(e.to_string()))?;

    pool.scope(|s| {
        let mut remaining = dst.as_slice_mut();
        for rows in ranges {
            let (block, tail) = remaining.split_at_mut(rows.len() * row_stride);
            remaining = tail;

            if rows.is_empty() {
                continue;
            }

            s.spawn(move |_| convolve_rows(src, block, rows, kernel));
        }
    });

    Ok(())
}
