pub mod annotations;
pub mod detection;
pub mod export;
pub mod models;
pub mod session;
pub mod view;

pub use annotations::{AnnotationStore, StoreError};
pub use detection::{DetectError, detect};
pub use models::{FeedingFront, LabeledPoint, ObservationCircle, Point, PointLabel};
pub use session::{Button, Command, DragIntent, Mode, PointerEvent, Session, Shell};
pub use view::ViewTransform;
