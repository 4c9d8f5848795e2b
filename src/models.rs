use serde::{Deserialize, Serialize};

/// A 2D point. Annotation geometry lives in image-pixel space; the same type
/// doubles as a display-space position in pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Marker labels for picked points. `Center` is reserved for rendering the
/// observation-area center and is never offered by the picker menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointLabel {
    Radius,
    Mound,
    Finger,
    Slug,
    FruitingBody,
    Center,
}

impl PointLabel {
    /// Labels offered to the user in picker mode.
    pub const PICKER_CHOICES: [PointLabel; 5] = [
        PointLabel::Radius,
        PointLabel::Mound,
        PointLabel::Finger,
        PointLabel::Slug,
        PointLabel::FruitingBody,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PointLabel::Radius => "radius",
            PointLabel::Mound => "mound",
            PointLabel::Finger => "finger",
            PointLabel::Slug => "slug",
            PointLabel::FruitingBody => "fruiting body",
            PointLabel::Center => "center",
        }
    }
}

impl std::fmt::Display for PointLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled point marker in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub label: PointLabel,
    pub pos: Point,
}

/// The feeding-front polygon: an ordered vertex sequence, implicitly closed
/// by connecting the last vertex back to the first.
///
/// Invariant (enforced by `AnnotationStore::finalize_front`): a front is
/// either empty or has at least 3 vertices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedingFront {
    pub vertices: Vec<Point>,
}

impl FeedingFront {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arithmetic mean of the vertices, or None when empty.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Some(Point::new(sx / n, sy / n))
    }
}

/// The circular observation area, detected or hand-edited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationCircle {
    pub center: Point,
    pub radius: f64,
}

impl ObservationCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Signed distance from a point to the circle boundary (negative inside).
    pub fn boundary_distance(&self, p: Point) -> f64 {
        p.distance_to(self.center) - self.radius
    }

    pub fn contains(&self, p: Point) -> bool {
        p.distance_to(self.center) < self.radius
    }
}
