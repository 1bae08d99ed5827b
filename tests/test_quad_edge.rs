use deltri::geometry::Point2;
use deltri::operations::triangulation::DelaunayTriangulation;

fn build(points: &[(f64, f64)]) -> DelaunayTriangulation<f64, usize> {
    let mut dt = DelaunayTriangulation::new();
    dt.initialize(
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| (Point2::new(x, y), i))
            .collect(),
    );
    dt.run();
    dt
}

#[test]
fn test_sym_is_an_involution() {
    let dt = build(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    for e in dt.arena().iter() {
        assert_eq!(e.sym().sym(), e);
        assert_eq!(e.pair(), e.sym().pair());
        assert_ne!(e, e.sym());
    }
}

#[test]
fn test_origin_rings_close() {
    let dt = build(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (5.0, 5.0),
        (2.0, 7.0),
    ]);
    let arena = dt.arena();
    let bound = arena.len() * 2 + 1;
    for rep in arena.iter() {
        for e in [rep, rep.sym()] {
            let org = arena.org(e);
            let mut walker = arena.onext(e);
            let mut steps = 1;
            while walker != e {
                assert_eq!(arena.org(walker), org, "origin ring mixes origins");
                walker = arena.onext(walker);
                steps += 1;
                assert!(steps <= bound, "origin ring does not close");
            }
        }
    }
}

#[test]
fn test_face_links_are_consistent() {
    let dt = build(&[
        (0.0, 0.0),
        (4.0, 1.0),
        (8.0, 0.0),
        (6.0, 5.0),
        (1.0, 6.0),
    ]);
    let arena = dt.arena();
    for rep in arena.iter() {
        for e in [rep, rep.sym()] {
            assert_eq!(arena.lnext(arena.lprev(e)), e);
            assert_eq!(arena.lprev(arena.lnext(e)), e);
            // lnext continues where e ends
            assert_eq!(arena.org(arena.lnext(e)), arena.dest(e));
            // onext keeps the origin
            assert_eq!(arena.org(arena.onext(e)), arena.org(e));
        }
    }
    // validates every edge's linkage in debug builds
    dt.log_mesh();
}

#[test]
fn test_every_half_edge_has_a_live_partner() {
    let dt = build(&[(0.0, 0.0), (3.0, 0.0), (1.5, 2.5), (1.5, -2.5)]);
    let arena = dt.arena();
    let mut halves = 0;
    for e in arena.iter() {
        assert!(arena.get(e).is_some());
        assert!(arena.get(e.sym()).is_some());
        halves += 2;
    }
    assert_eq!(halves, arena.len() * 2);
}

#[test]
fn test_clear_frees_the_arena() {
    let mut dt = build(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
    assert_eq!(dt.edge_count(), 3);
    let handle = dt.arena().iter().next().unwrap();
    dt.clear();
    assert_eq!(dt.edge_count(), 0);
    assert!(dt.arena().get(handle).is_none());
    assert!(dt.joints().is_empty());
}
