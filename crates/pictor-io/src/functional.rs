use std::path::Path;

use pictor_image::{Image, ImageSize};

use crate::error::IoError;

/// A generic image type that can be any of the supported pixel layouts.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// The size of the underlying image.
    pub fn size(&self) -> ImageSize {
        match self {
            Self::L8(image) => image.size(),
            Self::La8(image) => image.size(),
            Self::Rgb8(image) => image.size(),
            Self::Rgba8(image) => image.size(),
        }
    }

    /// The number of channels of the underlying image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::L8(_) => 1,
            Self::La8(_) => 2,
            Self::Rgb8(_) => 3,
            Self::Rgba8(_) => 4,
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate and reports the pixel layout the file decoded to.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A [`GenericImage`] containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 => {
            GenericImage::L8(Image::<u8, 1>::new(size, img.into_luma8().to_vec())?)
        }
        image::ColorType::La8 => {
            GenericImage::La8(Image::<u8, 2>::new(size, img.into_luma_alpha8().to_vec())?)
        }
        image::ColorType::Rgb8 => {
            GenericImage::Rgb8(Image::<u8, 3>::new(size, img.into_rgb8().to_vec())?)
        }
        image::ColorType::Rgba8 => {
            GenericImage::Rgba8(Image::<u8, 4>::new(size, img.into_rgba8().to_vec())?)
        }
        other => return Err(IoError::UnsupportedImageFormat(format!("{other:?}"))),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use crate::functional::{read_image_any, GenericImage};
    use crate::png::write_image_png_rgb8;
    use pictor_image::{Image, ImageSize};

    #[test]
    fn read_any_missing_file() {
        let res = read_image_any("/path/to/nowhere.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_any_detects_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let data: Vec<u8> = (0..8 * 5 * 3).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8, 3>::new(ImageSize { width: 8, height: 5 }, data)?;
        write_image_png_rgb8(&file_path, &image)?;

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back.size().width, 8);
        assert_eq!(image_back.size().height, 5);
        assert_eq!(image_back.num_channels(), 3);

        match image_back {
            GenericImage::Rgb8(rgb) => assert_eq!(rgb.as_slice(), image.as_slice()),
            _ => panic!("expected an rgb8 image"),
        }

        Ok(())
    }
}
