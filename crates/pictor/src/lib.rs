#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pictor_image as image;

#[doc(inline)]
pub use pictor_imgproc as imgproc;

#[doc(inline)]
pub use pictor_io as io;
