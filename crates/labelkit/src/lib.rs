#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use labelkit_image as image;

#[doc(inline)]
pub use labelkit_imgproc as imgproc;
