use deltri::geometry::util::linear_coefficient;
use deltri::geometry::{Point2, Vector2};
use deltri::kernel::{in_circle, is_ccw, on_segment, segments_properly_intersect, signed_area};
use deltri::Tolerances;

#[test]
fn test_signed_area_signs() {
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(4.0, 0.0);
    let c = Point2::new(0.0, 4.0);

    assert!(signed_area(&a, &b, &c) > 0.0);
    assert!(signed_area(&a, &c, &b) < 0.0);
    assert_eq!(signed_area(&a, &b, &Point2::new(8.0, 0.0)), 0.0);
}

#[test]
fn test_is_ccw_is_strict() {
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(1.0, 1.0);
    let c = Point2::new(2.0, 2.0);

    assert!(!is_ccw(&a, &b, &c));
    assert!(!is_ccw(&a, &c, &b));
}

#[test]
fn test_in_circle_interior_and_exterior() {
    let tol = Tolerances::default();
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(10.0, 0.0);
    let c = Point2::new(10.0, 10.0);

    assert!(in_circle(&a, &b, &c, &Point2::new(6.0, 4.0), &tol));
    assert!(!in_circle(&a, &b, &c, &Point2::new(30.0, 1.0), &tol));
}

#[test]
fn test_in_circle_cocircular_is_outside() {
    let tol = Tolerances::default();
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(10.0, 0.0);
    let c = Point2::new(10.0, 10.0);
    // the fourth corner of the square lies exactly on the circumcircle
    assert!(!in_circle(&a, &b, &c, &Point2::new(0.0, 10.0), &tol));
}

#[test]
fn test_on_segment_endpoints_and_interior() {
    let tol = Tolerances::default();
    let p1 = Point2::new(0.0_f64, 0.0);
    let p2 = Point2::new(4.0, 4.0);

    assert!(on_segment(&p1, &p1, &p2, &tol));
    assert!(on_segment(&p2, &p1, &p2, &tol));
    assert!(on_segment(&Point2::new(2.0, 2.0), &p1, &p2, &tol));
    assert!(!on_segment(&Point2::new(5.0, 5.0), &p1, &p2, &tol));
    assert!(!on_segment(&Point2::new(2.0, 2.5), &p1, &p2, &tol));
}

#[test]
fn test_on_segment_tolerance_is_configurable() {
    let loose = Tolerances {
        coincidence: 1e-1,
        ..Tolerances::default()
    };
    let tight = Tolerances::default();
    let p1 = Point2::new(0.0_f64, 0.0);
    let p2 = Point2::new(4.0, 0.0);
    let near = Point2::new(2.0, 0.01);

    assert!(on_segment(&near, &p1, &p2, &loose));
    assert!(!on_segment(&near, &p1, &p2, &tight));
}

#[test]
fn test_proper_intersection() {
    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(4.0, 4.0);
    let c = Point2::new(0.0, 4.0);
    let d = Point2::new(4.0, 0.0);

    assert!(segments_properly_intersect(&a, &b, &c, &d));
    // shared endpoint never counts as a crossing
    assert!(!segments_properly_intersect(&a, &b, &b, &c));
    // touching at an interior point of one segment only
    assert!(!segments_properly_intersect(
        &a,
        &Point2::new(2.0, 2.0),
        &c,
        &d
    ));
    // disjoint
    assert!(!segments_properly_intersect(
        &a,
        &Point2::new(1.0, 0.0),
        &c,
        &Point2::new(1.0, 4.0)
    ));
}

#[test]
fn test_linear_coefficient_contract() {
    let origin = Point2::new(1.0_f64, 2.0);
    let direction = Vector2::new(3.0_f64, -1.0);
    let (a, b, c) = linear_coefficient(&origin, &direction);

    // the origin and any point along the direction satisfy the equation
    assert!((a * 1.0 + b * 2.0 + c).abs() < 1e-12);
    assert!((a * 4.0 + b * 1.0 + c).abs() < 1e-12);
    // a point off the line does not
    assert!((a * 0.0 + b * 0.0 + c).abs() > 1e-6);
}

#[test]
fn test_f32_points_survive_large_coordinates() {
    // squared magnitudes overflow f32 precision; predicates must widen
    let a = Point2::new(10_000.0_f32, 10_000.0);
    let b = Point2::new(10_001.0, 10_000.0);
    let c = Point2::new(10_001.0, 10_001.0);
    let d = Point2::new(10_000.0, 10_001.0);
    let tol = Tolerances::default();

    assert!(is_ccw(&a, &b, &c));
    assert!(!in_circle(&a, &b, &c, &d, &tol));
    assert!(in_circle(
        &a,
        &b,
        &c,
        &Point2::new(10_000.5, 10_000.5),
        &tol
    ));
}
