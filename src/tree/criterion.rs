//! Defines the split criterion of the decision tree:
//! Gini impurity, majority voting, and best-split selection.
use rayon::prelude::*;

use crate::constants::{NUM_LABELS, NUM_PIXELS, PIXEL_ON_THRESHOLD};
use crate::dataset::Dataset;


/// Count the label occurrences over `indices`.
#[inline]
pub(super) fn label_frequencies(data: &Dataset, indices: &[usize])
    -> [usize; NUM_LABELS]
{
    let mut frequencies = [0usize; NUM_LABELS];
    for &i in indices {
        frequencies[data.label(i) as usize] += 1;
    }
    frequencies
}


/// Returns the most frequent label over `indices`
/// together with its occurrence count.
/// If multiple labels attain the maximal frequency,
/// the smallest one wins.
#[inline]
pub fn majority_label(data: &Dataset, indices: &[usize]) -> (u8, usize) {
    assert!(
        !indices.is_empty(),
        "majority label is undefined for an empty subset.",
    );

    let frequencies = label_frequencies(data, indices);

    let mut label = 0u8;
    let mut freq = frequencies[0];
    for (l, &f) in frequencies.iter().enumerate().skip(1) {
        // A strict comparison keeps the smallest label on ties.
        if f > freq {
            label = l as u8;
            freq = f;
        }
    }
    (label, freq)
}


/// Computes the Gini impurity over `indices` for a split at `pixel`.
///
/// The subset is partitioned by the rule
/// "intensity at `pixel` < 128 → group A, else → group B,"
/// each group scores `1 − Σ_label (count/size)²`, and the result is
/// the size-weighted average of the two scores.
///
/// If either group is empty its score is a `0/0` computation and the
/// returned value is NaN. Callers must reject NaN results with an
/// explicit [`f64::is_nan`] check; any ordering or equality
/// comparison against NaN is always `false` and filters nothing.
#[inline]
pub fn gini_impurity(data: &Dataset, indices: &[usize], pixel: usize)
    -> f64
{
    let mut a_freq = [0usize; NUM_LABELS];
    let mut a_count = 0usize;
    let mut b_freq = [0usize; NUM_LABELS];
    let mut b_count = 0usize;

    for &i in indices {
        let label = data.label(i) as usize;
        if data.image(i).pixel(pixel) < PIXEL_ON_THRESHOLD {
            a_freq[label] += 1;
            a_count += 1;
        } else {
            b_freq[label] += 1;
            b_count += 1;
        }
    }

    let a_gini = gini_of_group(&a_freq, a_count);
    let b_gini = gini_of_group(&b_freq, b_count);

    // Weighted average of the children impurities.
    // NaN from an empty group propagates through here.
    (a_gini * a_count as f64 + b_gini * b_count as f64)
        / indices.len() as f64
}


/// Gini impurity of one group. `0/0 = NaN` when the group is empty.
#[inline]
fn gini_of_group(freq: &[usize; NUM_LABELS], count: usize) -> f64 {
    let count = count as f64;
    let correct = freq.iter()
        .map(|&f| (f as f64 / count).powi(2))
        .sum::<f64>();
    1.0 - correct
}


/// Returns the pixel in `0..NUM_PIXELS` minimizing
/// [`gini_impurity`] over `indices`,
/// or `None` if every pixel evaluates to NaN
/// (i.e., no pixel separates the subset at all).
/// If multiple pixels attain the minimal impurity,
/// the smallest one wins.
#[inline]
pub fn best_split(data: &Dataset, indices: &[usize]) -> Option<usize> {
    (0..NUM_PIXELS).into_par_iter()
        .map(|pixel| (pixel, gini_impurity(data, indices, pixel)))
        .filter(|(_, impurity)| !impurity.is_nan())
        .min_by(|x, y| {
            x.1.partial_cmp(&y.1)
                .expect("NaN impurities are filtered before comparison")
                .then(x.0.cmp(&y.0))
        })
        .map(|(pixel, _)| pixel)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUM_PIXELS;
    use crate::dataset::Image;

    fn image_with(pixel: usize, intensity: u8) -> Image {
        let mut pixels = vec![0u8; NUM_PIXELS];
        pixels[pixel] = intensity;
        Image::new(pixels)
    }

    fn blank_dataset(labels: Vec<u8>) -> Dataset {
        let images = labels.iter()
            .map(|_| Image::new(vec![0u8; NUM_PIXELS]))
            .collect();
        Dataset::new(images, labels)
    }

    #[test]
    fn test_majority_label_01() {
        let data = blank_dataset(vec![1, 1, 2]);
        let (label, freq) = majority_label(&data, &[0, 1, 2]);
        assert_eq!((label, freq), (1, 2));
    }

    #[test]
    fn test_majority_label_tie_breaks_to_smallest_01() {
        let data = blank_dataset(vec![5, 2, 2, 5]);
        let (label, freq) = majority_label(&data, &[0, 1, 2, 3]);
        assert_eq!((label, freq), (2, 2));
    }

    #[test]
    fn test_majority_label_subset_01() {
        let data = blank_dataset(vec![9, 0, 9, 0, 9]);
        let (label, freq) = majority_label(&data, &[0, 2, 4]);
        assert_eq!((label, freq), (9, 3));
    }

    #[test]
    #[should_panic]
    fn test_majority_label_empty_failure_01() {
        let data = blank_dataset(vec![1]);
        let _ = majority_label(&data, &[]);
    }

    #[test]
    fn test_gini_pure_split_01() {
        // Pixel 0 separates the labels perfectly,
        // so both groups are pure.
        let images = vec![
            image_with(0, 0),
            image_with(0, 0),
            image_with(0, 255),
            image_with(0, 255),
        ];
        let data = Dataset::new(images, vec![0, 0, 1, 1]);
        let impurity = gini_impurity(&data, &[0, 1, 2, 3], 0);
        assert!((impurity - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_gini_mixed_split_01() {
        // Each group holds one example of either label:
        // both groups score 0.5, as does the weighted average.
        let images = vec![
            image_with(0, 0),
            image_with(0, 0),
            image_with(0, 255),
            image_with(0, 255),
        ];
        let data = Dataset::new(images, vec![0, 1, 0, 1]);
        let impurity = gini_impurity(&data, &[0, 1, 2, 3], 0);
        assert!((impurity - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_gini_nan_on_empty_group_01() {
        // Every image is dark at pixel 7, so group B is empty.
        let data = blank_dataset(vec![0, 1, 2]);
        let impurity = gini_impurity(&data, &[0, 1, 2], 7);
        assert!(impurity.is_nan());
    }

    #[test]
    fn test_gini_in_unit_interval_01() {
        let images = vec![
            image_with(3, 255),
            image_with(3, 127),
            image_with(3, 128),
            image_with(3, 0),
        ];
        let data = Dataset::new(images, vec![0, 1, 2, 3]);
        let impurity = gini_impurity(&data, &[0, 1, 2, 3], 3);
        assert!((0.0..=1.0).contains(&impurity));
    }

    #[test]
    fn test_best_split_excludes_nan_01() {
        // Only pixel 1 separates the subset; every other pixel
        // puts all examples in group A and scores NaN.
        // A naive minimum over raw f64 could pick such a pixel,
        // since NaN fails every relational comparison.
        let images = vec![
            image_with(1, 0),
            image_with(1, 255),
        ];
        let data = Dataset::new(images, vec![0, 1]);
        assert_eq!(best_split(&data, &[0, 1]), Some(1));
    }

    #[test]
    fn test_best_split_none_when_inseparable_01() {
        // Identical images: every pixel leaves one group empty.
        let data = blank_dataset(vec![0, 1]);
        assert_eq!(best_split(&data, &[0, 1]), None);
    }

    #[test]
    fn test_best_split_tie_breaks_to_smallest_pixel_01() {
        // Pixels 4 and 9 induce the same (perfect) split.
        let mut bright = vec![0u8; NUM_PIXELS];
        bright[4] = 255;
        bright[9] = 255;
        let images = vec![
            Image::new(vec![0u8; NUM_PIXELS]),
            Image::new(bright),
        ];
        let data = Dataset::new(images, vec![0, 1]);
        assert_eq!(best_split(&data, &[0, 1]), Some(4));
    }
}
