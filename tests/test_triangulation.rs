use deltri::geometry::Point2;
use deltri::kernel::{in_circle, is_ccw};
use deltri::operations::triangulation::DelaunayTriangulation;
use deltri::Tolerances;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build(points: Vec<(f64, f64)>) -> DelaunayTriangulation<f64, usize> {
    let mut dt = DelaunayTriangulation::new();
    dt.initialize(
        points
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| (Point2::new(x, y), i))
            .collect(),
    );
    dt.run();
    dt
}

/// Hull vertex count by monotone chain; `points` must be sorted
/// lexicographically and free of collinear hull runs.
fn hull_size(points: &[(f64, f64)]) -> usize {
    let cross = |o: (f64, f64), a: (f64, f64), b: (f64, f64)| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };
    let chain = |iter: &mut dyn Iterator<Item = (f64, f64)>| {
        let mut hull: Vec<(f64, f64)> = Vec::new();
        for p in iter {
            while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        hull
    };
    let lower = chain(&mut points.iter().copied());
    let upper = chain(&mut points.iter().rev().copied());
    lower.len() + upper.len() - 2
}

#[test]
fn test_empty_and_tiny_inputs() {
    let mut dt = DelaunayTriangulation::<f64, usize>::new();
    dt.run();
    assert_eq!(dt.edge_count(), 0);
    assert!(dt.collect_triangles().is_empty());

    let mut dt = build(vec![(1.0, 1.0)]);
    assert_eq!(dt.edge_count(), 0);
    assert!(dt.collect_triangles().is_empty());

    let mut dt = build(vec![(0.0, 0.0), (5.0, 5.0)]);
    assert_eq!(dt.edge_count(), 1);
    assert!(dt.collect_triangles().is_empty());
}

#[test]
fn test_single_triangle() {
    let mut dt = build(vec![(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
    assert_eq!(dt.edge_count(), 3);
    let triangles = dt.collect_triangles();
    assert_eq!(triangles.len(), 1);
    let mut bindings = triangles[0].bindings.to_vec();
    bindings.sort_unstable();
    assert_eq!(bindings, vec![0, 1, 2]);
}

#[test]
fn test_square_yields_two_triangles_sharing_a_diagonal() {
    let mut dt = build(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    // n = 4, h = 4: five edges, two triangles
    assert_eq!(dt.edge_count(), 5);
    let triangles = dt.collect_triangles();
    assert_eq!(triangles.len(), 2);
}

#[test]
fn test_collinear_points_degrade_to_a_chain() {
    let mut dt = build(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert_eq!(dt.edge_count(), 2);
    assert!(dt.collect_triangles().is_empty());

    let mut dt = build(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
    assert_eq!(dt.edge_count(), 4);
    assert!(dt.collect_triangles().is_empty());
}

#[test]
fn test_duplicate_points_are_dropped() {
    let mut dt = DelaunayTriangulation::<f64, u32>::new();
    dt.initialize(vec![
        (Point2::new(0.0, 0.0), 10),
        (Point2::new(10.0, 0.0), 11),
        (Point2::new(0.0, 0.0), 12),
        (Point2::new(5.0, 8.0), 13),
        (Point2::new(10.0, 0.0), 14),
    ]);
    assert_eq!(dt.joints().len(), 3);
    dt.run();
    let triangles = dt.collect_triangles();
    assert_eq!(triangles.len(), 1);
    // the first occurrence of a duplicated point keeps its binding
    assert!(!triangles[0].bindings.contains(&12));
    assert!(!triangles[0].bindings.contains(&14));
}

#[test]
fn test_grid_satisfies_the_euler_relation() {
    // 5x5 grid: n = 25, 16 hull vertices
    let mut points = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            points.push((i as f64, j as f64));
        }
    }
    let mut dt = build(points);
    assert_eq!(dt.edge_count(), 3 * 25 - 3 - 16);
    assert_eq!(dt.collect_triangles().len(), 2 * 25 - 2 - 16);
}

#[test]
fn test_random_cloud_satisfies_euler_and_delaunay() {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<(f64, f64)> = (0..60)
        .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();
    let mut dt = build(points.clone());

    let n = dt.joints().len();
    assert_eq!(n, 60);
    let sorted: Vec<(f64, f64)> = dt
        .joints()
        .iter()
        .map(|j| (j.point.x, j.point.y))
        .collect();
    let h = hull_size(&sorted);
    assert_eq!(dt.edge_count(), 3 * n - 3 - h);

    let triangles = dt.collect_triangles();
    assert_eq!(triangles.len(), 2 * n - 2 - h);

    // empty-circumcircle property, with headroom for rounding noise
    let tol = Tolerances {
        in_circle: 1e-9,
        ..Tolerances::default()
    };
    for t in &triangles {
        let a = Point2::new(points[t.bindings[0]].0, points[t.bindings[0]].1);
        let b = Point2::new(points[t.bindings[1]].0, points[t.bindings[1]].1);
        let c = Point2::new(points[t.bindings[2]].0, points[t.bindings[2]].1);
        assert!(is_ccw(&a, &b, &c), "emitted triangle must be ccw");
        for (i, &(x, y)) in points.iter().enumerate() {
            if t.bindings.contains(&i) {
                continue;
            }
            assert!(
                !in_circle(&a, &b, &c, &Point2::new(x, y), &tol),
                "vertex {i} lies inside a circumcircle"
            );
        }
    }
}

#[test]
fn test_collect_triangles_is_repeatable() {
    let mut dt = build(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(dt.collect_triangles().len(), 2);
    assert_eq!(dt.collect_triangles().len(), 2);
}

#[test]
fn test_f32_coordinates() {
    let mut dt = DelaunayTriangulation::<f32, char>::new();
    dt.initialize(vec![
        (Point2::new(0.0_f32, 0.0), 'a'),
        (Point2::new(4.0, 0.0), 'b'),
        (Point2::new(4.0, 4.0), 'c'),
        (Point2::new(0.0, 4.0), 'd'),
    ]);
    dt.run();
    assert_eq!(dt.edge_count(), 5);
    assert_eq!(dt.collect_triangles().len(), 2);
}

#[test]
fn test_rerun_rebuilds_from_scratch() {
    let mut dt = build(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(dt.edge_count(), 5);
    dt.run();
    assert_eq!(dt.edge_count(), 5);
    assert_eq!(dt.collect_triangles().len(), 2);
}
