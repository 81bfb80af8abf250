//! Provides a function that reads a [`Dataset`]
//! from a binary image file.
use crate::constants::{NUM_LABELS, NUM_PIXELS};
use crate::dataset::{Dataset, Image};

use std::path::Path;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::fs::File;


/// The function `read_dataset` reads a file with the following
/// binary format:
///
/// - 4 bytes: `n`, the number of examples (little-endian),
/// - then `n` records, each consisting of
///   1 label byte in `0..10` followed by
///   `NUM_PIXELS` pixel intensity bytes in row-major order.
///
/// A truncated file or an out-of-range label yields an `Err`;
/// no partially-read dataset is ever returned.
pub fn read_dataset<P>(path: P) -> io::Result<Dataset>
    where P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut count = [0u8; 4];
    reader.read_exact(&mut count)?;
    let n_examples = u32::from_le_bytes(count) as usize;

    let mut images: Vec<Image> = Vec::with_capacity(n_examples);
    let mut labels: Vec<u8> = Vec::with_capacity(n_examples);

    for i in 0..n_examples {
        let mut label = [0u8; 1];
        reader.read_exact(&mut label)?;
        let label = label[0];

        if label as usize >= NUM_LABELS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "label of example {i} must be in 0..{NUM_LABELS}. \
                    got {label}."
                ),
            ));
        }

        let mut pixels = vec![0u8; NUM_PIXELS];
        reader.read_exact(&mut pixels)?;

        images.push(Image::new(pixels));
        labels.push(label);
    }

    Ok(Dataset::new(images, labels))
}
