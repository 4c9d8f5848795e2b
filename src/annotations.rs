use serde::{Deserialize, Serialize};

use crate::models::{FeedingFront, LabeledPoint, ObservationCircle, Point, PointLabel};

/// Display pixels below which a resize drag stops shrinking the circle, so
/// the boundary handle never collapses past grabbing size.
pub const MIN_HANDLE_PX: f64 = 5.0;

/// Failures from store operations that the caller must surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no observation area to edit")]
    NoCircle,
    #[error("a feeding front needs at least 3 points; polygon discarded")]
    TooFewVertices,
}

/// Owner of all annotation data for one loaded image: labeled points, the
/// feeding-front polygon, and the observation circle. All mutation goes
/// through these operations; the store holds no rendering or view concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationStore {
    points: Vec<LabeledPoint>,
    front: FeedingFront,
    circle: Option<ObservationCircle>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn front(&self) -> &FeedingFront {
        &self.front
    }

    pub fn circle(&self) -> Option<ObservationCircle> {
        self.circle
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.front.is_empty() && self.circle.is_none()
    }

    /// Append a labeled point. No dedup; identical positions are allowed.
    pub fn add_point(&mut self, label: PointLabel, pos: Point) {
        self.points.push(LabeledPoint { label, pos });
    }

    /// Remove the first point strictly closer than `tolerance` (image-pixel
    /// units, pre-scaled by the caller) to `pos`. Returns whether a point
    /// was removed.
    pub fn remove_point_near(&mut self, pos: Point, tolerance: f64) -> bool {
        if let Some(idx) = self
            .points
            .iter()
            .position(|p| p.pos.distance_to(pos) < tolerance)
        {
            self.points.remove(idx);
            return true;
        }
        false
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    pub fn clear_front(&mut self) {
        self.front.vertices.clear();
    }

    pub fn clear_circle(&mut self) {
        self.circle = None;
    }

    pub fn clear_all(&mut self) {
        self.clear_points();
        self.clear_front();
        self.clear_circle();
    }

    /// Replace the observation circle wholesale (detection result or a
    /// completed manual edit).
    pub fn set_circle(&mut self, center: Point, radius: f64) {
        self.circle = Some(ObservationCircle::new(center, radius));
    }

    /// Translate the circle center by an image-space delta.
    pub fn move_circle(&mut self, delta: Point) -> Result<(), StoreError> {
        let circle = self.circle.as_mut().ok_or(StoreError::NoCircle)?;
        circle.center.x += delta.x;
        circle.center.y += delta.y;
        Ok(())
    }

    /// Set a new radius from a resize drag. Ignored (not an error) unless the
    /// radius spans more than `MIN_HANDLE_PX` display pixels at the supplied
    /// zoom.
    pub fn resize_circle(&mut self, new_radius: f64, zoom_hint: f64) -> Result<(), StoreError> {
        let circle = self.circle.as_mut().ok_or(StoreError::NoCircle)?;
        if new_radius * zoom_hint > MIN_HANDLE_PX {
            circle.radius = new_radius;
        }
        Ok(())
    }

    /// Begin a fresh front draw, discarding any in-progress vertices.
    pub fn start_front(&mut self) {
        self.front.vertices.clear();
    }

    pub fn add_front_vertex(&mut self, pos: Point) {
        self.front.vertices.push(pos);
    }

    /// Close out a front draw. Zero vertices is a no-op; one or two vertices
    /// discard the polygon and fail; three or more are kept as-is.
    pub fn finalize_front(&mut self) -> Result<(), StoreError> {
        match self.front.len() {
            0 => Ok(()),
            1 | 2 => {
                self.front.vertices.clear();
                Err(StoreError::TooFewVertices)
            }
            _ => Ok(()),
        }
    }
}
