use std::path::Path;

use anyhow::Context;

use crate::annotations::AnnotationStore;

/// Serialize a store to the flat CSV export.
///
/// Blocks appear in a fixed order and each is emitted only when its data is
/// present: observation area, feeding-front vertices, front center, labeled
/// points. Circle and centroid rows use 2-decimal formatting; vertex and
/// point rows keep full precision.
pub fn render_csv(store: &AnnotationStore) -> String {
    let mut out = String::new();

    if let Some(circle) = store.circle() {
        out.push_str("# OBSERVATION AREA (Circle)\n# cx,cy,radius\n");
        out.push_str(&format!(
            "{:.2},{:.2},{:.2}\n\n",
            circle.center.x, circle.center.y, circle.radius
        ));
    }

    let front = store.front();
    if !front.is_empty() {
        out.push_str("# FEEDING FRONT (Polygon Points)\n# x,y\n");
        for v in &front.vertices {
            out.push_str(&format!("{},{}\n", v.x, v.y));
        }
        out.push('\n');
        if let Some(center) = front.centroid() {
            out.push_str("# FEEDING FRONT CENTER\n# cx,cy\n");
            out.push_str(&format!("{:.2},{:.2}\n\n", center.x, center.y));
        }
    }

    if !store.points().is_empty() {
        out.push_str("# LABELED POINTS\n# label,x,y\n");
        for p in store.points() {
            out.push_str(&format!("{},{},{}\n", p.label, p.pos.x, p.pos.y));
        }
    }

    out
}

/// Write the CSV export to a file.
pub fn write_csv(store: &AnnotationStore, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, render_csv(store))
        .with_context(|| format!("failed to write CSV export to {}", path.display()))
}

/// JSON sidecar carrying the same three collections.
pub fn render_json(store: &AnnotationStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store)
}

/// Parse a JSON sidecar back into a store.
pub fn parse_json(json: &str) -> serde_json::Result<AnnotationStore> {
    serde_json::from_str(json)
}
