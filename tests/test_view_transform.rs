use dictypick::{Point, ViewTransform};

const EPS: f64 = 1e-9;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[test]
fn test_round_trip() {
    let mut view = ViewTransform::new();
    view.set_image_size(Some((800, 600)));
    view.zoom_at(Point::new(120.0, 45.0), 2.75);
    view.pan(Point::new(-33.5, 17.25));

    for &(x, y) in &[(0.0, 0.0), (123.4, 567.8), (-50.0, 912.0), (0.5, -0.5)] {
        let display = Point::new(x, y);
        assert!(approx(view.to_display(view.to_image(display)), display));
        let image = Point::new(x, y);
        assert!(approx(view.to_image(view.to_display(image)), image));
    }
}

#[test]
fn test_zoom_pivot_invariance() {
    let mut view = ViewTransform::new();
    view.set_image_size(Some((640, 480)));
    view.pan(Point::new(12.0, -7.0));

    let pivot = Point::new(300.0, 200.0);
    let before = view.to_image(pivot);
    view.zoom_at(pivot, 1.1);
    let after = view.to_image(pivot);
    assert!(approx(before, after));

    view.zoom_at(pivot, 1.0 / 1.1);
    assert!(approx(view.to_image(pivot), before));
}

#[test]
fn test_fit_to_viewport_centers_image() {
    let mut view = ViewTransform::new();
    view.set_image_size(Some((400, 200)));
    view.fit_to_viewport(1000.0, 800.0);

    // Width-limited: zoom = min(1000/400, 800/200) = 2.5.
    assert!((view.zoom() - 2.5).abs() < EPS);

    let top_left = view.to_display(Point::new(0.0, 0.0));
    let bottom_right = view.to_display(Point::new(400.0, 200.0));
    assert!((top_left.x - 0.0).abs() < EPS);
    assert!((1000.0 - bottom_right.x).abs() < EPS);
    // Vertical margins equal above and below.
    assert!((top_left.y - (800.0 - bottom_right.y)).abs() < EPS);
}

#[test]
fn test_fit_to_viewport_without_image_is_noop() {
    let mut view = ViewTransform::new();
    view.pan(Point::new(5.0, 6.0));
    view.fit_to_viewport(1000.0, 800.0);
    assert!((view.zoom() - 1.0).abs() < EPS);
    assert!(approx(view.offset(), Point::new(5.0, 6.0)));
}

#[test]
fn test_pan_shifts_offset() {
    let mut view = ViewTransform::new();
    view.set_image_size(Some((100, 100)));
    let before = view.to_display(Point::new(10.0, 10.0));
    view.pan(Point::new(30.0, -12.0));
    let after = view.to_display(Point::new(10.0, 10.0));
    assert!((after.x - before.x - 30.0).abs() < EPS);
    assert!((after.y - before.y + 12.0).abs() < EPS);
}
