use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use argh::FromArgs;

use pictor::image::Image;
use pictor::imgproc::filter::kernels::{FilterKind, Kernel3x3};
use pictor::imgproc::filter::{convolve, DEFAULT_NUM_WORKERS};
use pictor::io::functional::{read_image_any, GenericImage};
use pictor::io::png;

const OUTPUT_PATH: &str = "output.png";

#[derive(FromArgs)]
/// Apply a 3x3 convolution filter to an image
struct Args {
    /// path to an input image
    #[argh(positional)]
    image_path: PathBuf,

    /// the filter to apply, one of edge, sharpen, blur, gauss, emboss, identity
    #[argh(positional)]
    filter: String,
}

fn filter_image<const C: usize>(
    src: &Image<u8, C>,
    kernel: &Kernel3x3,
) -> anyhow::Result<Image<u8, C>> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    convolve(src, &mut dst, kernel, DEFAULT_NUM_WORKERS)?;
    Ok(dst)
}

fn main() -> anyhow::Result<()> {
    let start = Instant::now();

    env_logger::init();

    let args: Args = argh::from_env();

    // resolve the filter, unknown names keep the image unchanged
    let kind = match FilterKind::parse(&args.filter) {
        Some(kind) => kind,
        None => {
            log::warn!("unknown filter '{}', applying identity", args.filter);
            FilterKind::Identity
        }
    };
    let kernel = kind.kernel();

    // read the image
    let image = read_image_any(&args.image_path)
        .with_context(|| format!("failed to read {}", args.image_path.display()))?;

    log::info!(
        "loaded {}x{} with {} channels",
        image.size().width,
        image.size().height,
        image.num_channels()
    );

    // filter and write the result, keeping the pixel layout of the input
    match image {
        GenericImage::L8(src) => {
            png::write_image_png_gray8(OUTPUT_PATH, &filter_image(&src, &kernel)?)
        }
        GenericImage::La8(src) => {
            png::write_image_png_gray_alpha8(OUTPUT_PATH, &filter_image(&src, &kernel)?)
        }
        GenericImage::Rgb8(src) => {
            png::write_image_png_rgb8(OUTPUT_PATH, &filter_image(&src, &kernel)?)
        }
        GenericImage::Rgba8(src) => {
            png::write_image_png_rgba8(OUTPUT_PATH, &filter_image(&src, &kernel)?)
        }
    }
    .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;

    println!("Took {} seconds", start.elapsed().as_secs());

    Ok(())
}
