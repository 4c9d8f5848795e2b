use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use std::collections::HashMap;

/// Raw moment sums accumulated per labeled component.
#[derive(Debug, Clone, Copy, Default)]
struct MomentSums {
    n: u64,
    sx: f64,
    sy: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

/// Shape statistics for one connected foreground region.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub label: u32,
    /// Pixel count.
    pub area: u64,
    /// Centroid in image coordinates.
    pub cx: f64,
    pub cy: f64,
    /// Axis lengths of the moment-equivalent ellipse (regionprops
    /// convention: 4·sqrt of the covariance eigenvalues).
    pub major_axis_length: f64,
    pub minor_axis_length: f64,
}

impl Region {
    /// Radius of the circle used to stand in for this region: half the
    /// larger axis. A single scalar keeps the region editable as a circle;
    /// it is not a measurement of true shape.
    pub fn radius(&self) -> f64 {
        self.major_axis_length.max(self.minor_axis_length) / 2.0
    }
}

/// Label 8-connected foreground components in a binary mask and measure
/// each one: area, centroid, and ellipse axes from central second moments.
pub fn measure_regions(mask: &GrayImage) -> Vec<Region> {
    let labeled = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut sums: HashMap<u32, MomentSums> = HashMap::new();
    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }
        let (xf, yf) = (x as f64, y as f64);
        let m = sums.entry(label_val).or_default();
        m.n += 1;
        m.sx += xf;
        m.sy += yf;
        m.sxx += xf * xf;
        m.syy += yf * yf;
        m.sxy += xf * yf;
    }

    sums.into_iter()
        .map(|(label, m)| {
            let n = m.n as f64;
            let cx = m.sx / n;
            let cy = m.sy / n;
            // Normalized central second moments.
            let mu20 = m.sxx / n - cx * cx;
            let mu02 = m.syy / n - cy * cy;
            let mu11 = m.sxy / n - cx * cy;
            // Eigenvalues of the covariance matrix.
            let common = (((mu20 - mu02) / 2.0).powi(2) + mu11 * mu11).sqrt();
            let l1 = ((mu20 + mu02) / 2.0 + common).max(0.0);
            let l2 = ((mu20 + mu02) / 2.0 - common).max(0.0);
            Region {
                label,
                area: m.n,
                cx,
                cy,
                major_axis_length: 4.0 * l1.sqrt(),
                minor_axis_length: 4.0 * l2.sqrt(),
            }
        })
        .collect()
}
