//! Defines the in-memory representation of an image dataset.
use crate::constants::{NUM_LABELS, NUM_PIXELS};

/// A single grayscale image of fixed size
/// [`IMAGE_WIDTH`](crate::constants::IMAGE_WIDTH)
/// × [`IMAGE_WIDTH`](crate::constants::IMAGE_WIDTH).
/// Pixel intensities take values in `0..=255` and
/// are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Box<[u8]>,
}

impl Image {
    /// Construct a new instance of [`Image`] from row-major pixels.
    #[inline]
    pub fn new(pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(), NUM_PIXELS,
            "every image must have {NUM_PIXELS} pixels. got {}.",
            pixels.len(),
        );
        Self { pixels: pixels.into_boxed_slice() }
    }

    /// Returns the intensity of the pixel at position `pixel`.
    #[inline]
    pub fn pixel(&self, pixel: usize) -> u8 {
        self.pixels[pixel]
    }

    /// Returns all pixel intensities in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// An ordered collection of image/label pairs.
/// Index `i` refers to the same logical example
/// in `images` and `labels`.
/// A dataset is read-only for the lifetime of
/// training and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    images: Vec<Image>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Construct a new instance of [`Dataset`].
    /// `images` and `labels` must have equal length and
    /// each label must be in `0..NUM_LABELS`.
    #[inline]
    pub fn new(images: Vec<Image>, labels: Vec<u8>) -> Self {
        assert_eq!(
            images.len(), labels.len(),
            "images and labels must have equal length. \
            got {} images and {} labels.",
            images.len(), labels.len(),
        );
        assert!(
            labels.iter().all(|&l| (l as usize) < NUM_LABELS),
            "every label must be in 0..{NUM_LABELS}.",
        );
        Self { images, labels }
    }

    /// Number of examples in the dataset.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the dataset has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the `i`-th image.
    #[inline]
    pub fn image(&self, i: usize) -> &Image {
        &self.images[i]
    }

    /// Returns the label of the `i`-th example.
    #[inline]
    pub fn label(&self, i: usize) -> u8 {
        self.labels[i]
    }

    /// Iterate over image/label pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Image, u8)> + '_ {
        self.images.iter().zip(self.labels.iter().copied())
    }
}
