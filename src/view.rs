use crate::models::Point;

/// Mapping between display (canvas) coordinates and image-pixel coordinates,
/// parameterized by a scalar zoom and a display-space offset.
///
/// `to_image` and `to_display` are exact inverses for any given zoom/offset
/// snapshot. Annotation geometry is always stored in image space; only
/// pointer events and rendering go through this transform.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    zoom: f64,
    offset: Point,
    image_size: Option<(u32, u32)>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Point::new(0.0, 0.0),
            image_size: None,
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image_size
    }

    /// Record the pixel dimensions of the loaded image. Resets zoom/offset to
    /// identity; callers follow up with `fit_to_viewport`.
    pub fn set_image_size(&mut self, size: Option<(u32, u32)>) {
        self.image_size = size;
        self.zoom = 1.0;
        self.offset = Point::new(0.0, 0.0);
    }

    /// Display coordinates to image-pixel coordinates.
    pub fn to_image(&self, display: Point) -> Point {
        Point::new(
            (display.x - self.offset.x) / self.zoom,
            (display.y - self.offset.y) / self.zoom,
        )
    }

    /// Image-pixel coordinates to display coordinates.
    pub fn to_display(&self, image: Point) -> Point {
        Point::new(
            image.x * self.zoom + self.offset.x,
            image.y * self.zoom + self.offset.y,
        )
    }

    /// Multiply the zoom by `factor`, keeping the image point under
    /// `pivot` (a display position) at the same display pixel.
    pub fn zoom_at(&mut self, pivot: Point, factor: f64) {
        self.offset = Point::new(
            pivot.x - (pivot.x - self.offset.x) * factor,
            pivot.y - (pivot.y - self.offset.y) * factor,
        );
        self.zoom *= factor;
    }

    /// Scale the image to fit the viewport and center it. No-op when no
    /// image is set or either dimension is zero.
    pub fn fit_to_viewport(&mut self, viewport_w: f64, viewport_h: f64) {
        let Some((iw, ih)) = self.image_size else {
            return;
        };
        if iw == 0 || ih == 0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        let (iw, ih) = (iw as f64, ih as f64);
        self.zoom = (viewport_w / iw).min(viewport_h / ih);
        self.offset = Point::new(
            (viewport_w - iw * self.zoom) / 2.0,
            (viewport_h - ih * self.zoom) / 2.0,
        );
    }

    /// Shift the view by a display-space delta.
    pub fn pan(&mut self, delta: Point) {
        self.offset.x += delta.x;
        self.offset.y += delta.y;
    }
}
