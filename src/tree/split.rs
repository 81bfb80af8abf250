//! Partitions an index subset for a chosen split pixel.
use crate::constants::PIXEL_ON_THRESHOLD;
use crate::dataset::Dataset;


/// Split `indices` into two owned groups by the rule
/// "intensity at `pixel` < 128 goes left, the rest right."
///
/// The relative order of indices is preserved within each group;
/// every input index appears in exactly one output group.
#[inline]
pub fn partition(data: &Dataset, indices: &[usize], pixel: usize)
    -> (Vec<usize>, Vec<usize>)
{
    let mut lindices = Vec::new();
    let mut rindices = Vec::new();
    for &i in indices {
        if data.image(i).pixel(pixel) < PIXEL_ON_THRESHOLD {
            lindices.push(i);
        } else {
            rindices.push(i);
        }
    }
    (lindices, rindices)
}
