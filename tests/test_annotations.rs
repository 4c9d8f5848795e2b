use dictypick::{AnnotationStore, Point, PointLabel, StoreError};

#[test]
fn test_finalize_front_empty_is_noop() {
    let mut store = AnnotationStore::new();
    store.start_front();
    assert_eq!(store.finalize_front(), Ok(()));
    assert!(store.front().is_empty());
}

#[test]
fn test_finalize_front_discards_degenerate_polygon() {
    for n in [1, 2] {
        let mut store = AnnotationStore::new();
        store.start_front();
        for i in 0..n {
            store.add_front_vertex(Point::new(i as f64, 0.0));
        }
        assert_eq!(store.finalize_front(), Err(StoreError::TooFewVertices));
        assert!(store.front().is_empty());
    }
}

#[test]
fn test_finalize_front_keeps_valid_polygon() {
    let mut store = AnnotationStore::new();
    store.start_front();
    store.add_front_vertex(Point::new(0.0, 0.0));
    store.add_front_vertex(Point::new(10.0, 0.0));
    store.add_front_vertex(Point::new(5.0, 8.0));
    assert_eq!(store.finalize_front(), Ok(()));
    assert_eq!(store.front().len(), 3);
    assert_eq!(store.front().vertices[1], Point::new(10.0, 0.0));
}

#[test]
fn test_start_front_discards_in_progress_vertices() {
    let mut store = AnnotationStore::new();
    store.add_front_vertex(Point::new(1.0, 1.0));
    store.start_front();
    assert!(store.front().is_empty());
}

#[test]
fn test_remove_point_near_uses_strict_tolerance() {
    let mut store = AnnotationStore::new();
    store.add_point(PointLabel::Mound, Point::new(100.0, 100.0));

    // Exactly at the tolerance: not removed.
    assert!(!store.remove_point_near(Point::new(105.0, 100.0), 5.0));
    assert_eq!(store.points().len(), 1);

    assert!(store.remove_point_near(Point::new(104.9, 100.0), 5.0));
    assert!(store.points().is_empty());
}

#[test]
fn test_remove_point_near_takes_first_match() {
    let mut store = AnnotationStore::new();
    store.add_point(PointLabel::Finger, Point::new(10.0, 0.0));
    store.add_point(PointLabel::Slug, Point::new(11.0, 0.0));

    // Both candidates are in range; the second is nearer but the first
    // encountered wins.
    assert!(store.remove_point_near(Point::new(11.0, 0.0), 5.0));
    assert_eq!(store.points().len(), 1);
    assert_eq!(store.points()[0].label, PointLabel::Slug);
}

#[test]
fn test_add_point_allows_duplicates() {
    let mut store = AnnotationStore::new();
    store.add_point(PointLabel::Radius, Point::new(1.0, 2.0));
    store.add_point(PointLabel::Radius, Point::new(1.0, 2.0));
    assert_eq!(store.points().len(), 2);
}

#[test]
fn test_circle_edits_require_circle() {
    let mut store = AnnotationStore::new();
    assert_eq!(
        store.move_circle(Point::new(1.0, 1.0)),
        Err(StoreError::NoCircle)
    );
    assert_eq!(store.resize_circle(50.0, 1.0), Err(StoreError::NoCircle));
}

#[test]
fn test_move_circle_translates_center() {
    let mut store = AnnotationStore::new();
    store.set_circle(Point::new(50.0, 60.0), 20.0);
    store.move_circle(Point::new(3.0, -4.0)).unwrap();
    let circle = store.circle().unwrap();
    assert_eq!(circle.center, Point::new(53.0, 56.0));
    assert_eq!(circle.radius, 20.0);
}

#[test]
fn test_resize_circle_floor() {
    let mut store = AnnotationStore::new();
    store.set_circle(Point::new(50.0, 50.0), 20.0);

    // radius * zoom <= 5 display px: silently ignored.
    store.resize_circle(2.0, 2.5).unwrap();
    assert_eq!(store.circle().unwrap().radius, 20.0);

    store.resize_circle(2.0, 2.6).unwrap();
    assert_eq!(store.circle().unwrap().radius, 2.0);

    // At high zoom a tiny radius is still a grabbable handle.
    store.resize_circle(0.4, 20.0).unwrap();
    assert_eq!(store.circle().unwrap().radius, 0.4);
}

#[test]
fn test_clear_all_resets_every_collection() {
    let mut store = AnnotationStore::new();
    store.add_point(PointLabel::Mound, Point::new(1.0, 1.0));
    store.add_front_vertex(Point::new(0.0, 0.0));
    store.set_circle(Point::new(5.0, 5.0), 2.0);

    store.clear_all();
    assert!(store.is_empty());
    assert!(store.circle().is_none());
}
