pub mod preprocessing;
pub mod regions;

use image::DynamicImage;
use log::debug;

use crate::models::{ObservationCircle, Point};

/// Blur radius applied before thresholding; wide enough to merge the mottled
/// interior of a lit observation dish into one region.
const BLUR_SIGMA: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    #[error("no regions detected")]
    NoRegions,
}

/// Detect the observation area in a still image.
///
/// Blur, Otsu-threshold, and label the 8-connected foreground; the largest
/// region wins and becomes a circle centered on its centroid with radius
/// half its larger ellipse axis. Stateless and synchronous; on failure the
/// caller's annotation state is untouched.
pub fn detect(img: &DynamicImage) -> Result<ObservationCircle, DetectError> {
    let gray = preprocessing::to_grayscale(img);
    let blurred = preprocessing::apply_blur(&gray, BLUR_SIGMA);
    let (level, mask) = preprocessing::otsu_mask(&blurred);
    debug!("otsu threshold level: {level}");

    let regions = regions::measure_regions(&mask);
    debug!("labeled {} foreground region(s)", regions.len());

    let largest = regions
        .into_iter()
        .max_by_key(|r| r.area)
        .ok_or(DetectError::NoRegions)?;
    debug!(
        "largest region: label={} area={} centroid=({:.1}, {:.1})",
        largest.label, largest.area, largest.cx, largest.cy
    );

    Ok(ObservationCircle::new(
        Point::new(largest.cx, largest.cy),
        largest.radius(),
    ))
}
