use image::{DynamicImage, GrayImage, Luma};

use dictypick::{Point, PointLabel, Shell};

/// Shell double that records every outward callback and answers the label
/// prompt with a canned choice.
#[derive(Default)]
pub struct RecordingShell {
    pub statuses: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub refreshes: usize,
    pub prompts: Vec<Point>,
    pub next_label: Option<PointLabel>,
}

impl Shell for RecordingShell {
    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }

    fn report_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn report_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn prompt_label_choice(&mut self, at: Point, _choices: &[PointLabel]) -> Option<PointLabel> {
        self.prompts.push(at);
        self.next_label
    }
}

/// A flat gray image of the given size.
pub fn uniform_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// A bright disk on a dark background.
pub fn disk_image(width: u32, height: u32, cx: f64, cy: f64, radius: f64) -> DynamicImage {
    let img = GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        if (dx * dx + dy * dy).sqrt() <= radius {
            Luma([220u8])
        } else {
            Luma([20u8])
        }
    });
    DynamicImage::ImageLuma8(img)
}
