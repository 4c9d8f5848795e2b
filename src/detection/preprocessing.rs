use image::{DynamicImage, GrayImage};
use imageproc::contrast::otsu_level;
use imageproc::filter::gaussian_blur_f32;

/// Convert image to single-channel intensity
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply Gaussian blur to suppress noise before thresholding
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Binarize with Otsu's global threshold. Foreground is strictly brighter
/// than the computed level, so a uniform image produces an empty mask.
pub fn otsu_mask(img: &GrayImage) -> (u8, GrayImage) {
    let level = otsu_level(img);
    let mask = GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y)[0] > level {
            image::Luma([255u8])
        } else {
            image::Luma([0u8])
        }
    });
    (level, mask)
}
