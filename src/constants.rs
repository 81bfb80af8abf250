//! Constants shared across the crate.

/// Width (and height) of every image, in pixels.
pub const IMAGE_WIDTH: usize = 28;

/// Total number of pixels per image.
pub const NUM_PIXELS: usize = IMAGE_WIDTH * IMAGE_WIDTH;

/// Number of distinct class labels. Labels take values in `0..NUM_LABELS`.
pub const NUM_LABELS: usize = 10;

/// An intensity below this value counts as "off" when splitting
/// a subset during training.
pub const PIXEL_ON_THRESHOLD: u8 = 128;

/// Default majority ratio at which a subset becomes a leaf.
pub const DEFAULT_PURITY_THRESHOLD: f64 = 0.95;
