// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 the deltri authors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Constraint insertion.
//!
//! A constraint segment is forced into the mesh by collecting every edge it
//! properly crosses, deleting them, reconnecting the two endpoint fans with
//! the constraint edge itself and re-triangulating the two polygonal holes
//! left on either side.

use smallvec::SmallVec;
use tracing::debug;

use crate::geometry::Point2;
use crate::kernel;
use crate::mesh::half_edge::EdgeId;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::delaunay::DelaunayTriangulation;
use crate::operations::triangulation::TriangulationError;

enum WalkStep {
    /// Scanning the fan of a vertex lying on the segment.
    FromVertex(EdgeId),
    /// Walking triangle to triangle through a crossed edge.
    Crossed(EdgeId),
}

impl<T, B> DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    /// Forces the open segment `p1 -> p2` to exist as a mesh edge and marks
    /// it as a constraint. Both endpoints must already be triangulated
    /// vertices.
    ///
    /// Idempotent: if the edge already exists it is only (re)flagged. The
    /// returned handle stays valid as long as the constraint survives and
    /// is the currency accepted by [`trim`](Self::trim).
    pub fn add_constraint(
        &mut self,
        p1: Point2<T>,
        p2: Point2<T>,
    ) -> Result<EdgeId, TriangulationError> {
        let (x1, y1) = p1.as_f64();
        let not_found = || TriangulationError::PointNotFound(x1, y1);
        let range = self.range.ok_or_else(not_found)?;
        let mut init = self
            .locate_point(&p1, range.left)
            .or_else(|| self.locate_point(&p1, range.right))
            .ok_or_else(not_found)?;
        if *self.point(self.arena.org(init)) != p1 {
            init = init.sym();
        }
        if *self.point(self.arena.org(init)) != p1 {
            return Err(not_found());
        }

        // fast path: the segment is already an edge of the origin ring
        let mut existing = None;
        if *self.point(self.arena.dest(init)) == p2 {
            existing = Some(init);
        } else {
            let mut e = self.arena.oprev(init);
            while e != init {
                if *self.point(self.arena.dest(e)) == p2 {
                    existing = Some(e);
                    break;
                }
                e = self.arena.oprev(e);
            }
        }
        if let Some(e) = existing {
            self.arena.set_constraint_pair(e);
            return Ok(e);
        }

        let edges = self.collect_intersect_edges(&p1, &p2, init);
        if edges.is_empty() {
            let (x2, y2) = p2.as_f64();
            return Err(TriangulationError::NoCrossedEdges(x1, y1, x2, y2));
        }

        // the fan edges incident to p1 and p2 survive the cut and bound the
        // carved region
        let firstcut = edges[0];
        let cand1 = self.arena.lprev(firstcut);
        let cand2 = self.arena.rnext(firstcut);
        let loop1 = if *self.point(self.arena.org(cand1)) == p1 {
            cand1
        } else {
            cand2
        };
        debug_assert_eq!(*self.point(self.arena.org(loop1)), p1);
        let lastcut = edges[edges.len() - 1];
        let cand3 = self.arena.lnext(lastcut);
        let cand4 = self.arena.rprev(lastcut);
        let loop2 = if *self.point(self.arena.dest(cand3)) == p2 {
            cand3
        } else {
            cand4
        };
        debug_assert_eq!(*self.point(self.arena.dest(loop2)), p2);

        for &e in &edges {
            debug_assert!(!self.arena.is_constraint(e));
            self.arena.delete_edge(e);
        }

        let after = self.arena.lnext(loop2);
        let cut = self.arena.connect_edges(loop1.sym(), after);
        self.shrink_triangulate(cut);
        self.shrink_triangulate(cut.sym());
        self.arena.set_constraint_pair(cut);
        debug!(crossed = edges.len(), "constraint inserted");
        Ok(cut)
    }

    /// Collects, in crossing order, the symmetric halves of every edge the
    /// open segment `p1 -> p2` properly crosses, starting from an edge
    /// whose origin is `p1`.
    ///
    /// A triangle vertex lying exactly on the segment never counts as a
    /// crossing; the walk re-routes through that vertex's fan instead.
    fn collect_intersect_edges(
        &self,
        p1: &Point2<T>,
        p2: &Point2<T>,
        init: EdgeId,
    ) -> Vec<EdgeId> {
        let mut edges = Vec::new();
        let mut step = WalkStep::FromVertex(init);
        loop {
            match step {
                WalkStep::FromVertex(init) => {
                    if *self.point(self.arena.org(init)) == *p2 {
                        return edges;
                    }
                    // an edge overlapping the segment is skipped; the scan
                    // resumes from its far endpoint
                    if self.vertex_on_segment(self.arena.dest(init), p1, p2) {
                        step = WalkStep::FromVertex(self.arena.lnext(init));
                        continue;
                    }
                    let mut found = None;
                    let e = self.arena.lnext(init);
                    if self.crosses(p1, p2, e) {
                        found = Some(e);
                    } else {
                        let mut rerouted = false;
                        let mut dir = self.arena.oprev(init);
                        while dir != init {
                            if self.vertex_on_segment(self.arena.dest(dir), p1, p2) {
                                step = WalkStep::FromVertex(self.arena.lnext(dir));
                                rerouted = true;
                                break;
                            }
                            let e = self.arena.lnext(dir);
                            if self.crosses(p1, p2, e) {
                                found = Some(e);
                                break;
                            }
                            dir = self.arena.oprev(dir);
                        }
                        if rerouted {
                            continue;
                        }
                    }
                    let Some(ints) = found else {
                        return edges;
                    };
                    debug_assert!(self.right_of_point(p2, ints));
                    let ints = ints.sym();
                    edges.push(ints);
                    step = WalkStep::Crossed(ints);
                }
                WalkStep::Crossed(last) => {
                    let e1 = self.arena.lprev(last);
                    let e2 = self.arena.lnext(last);
                    let far = self.arena.org(e1);
                    debug_assert_eq!(far, self.arena.dest(e2), "crossing walk left a triangle");
                    if *self.point(far) == *p2 {
                        return edges;
                    }
                    if self.vertex_on_segment(far, p1, p2) {
                        step = WalkStep::FromVertex(e1);
                        continue;
                    }
                    let ints = if self.crosses(p1, p2, e1) { e1 } else { e2 };
                    debug_assert!(self.crosses(p1, p2, ints));
                    debug_assert!(self.right_of_point(p2, ints));
                    let ints = ints.sym();
                    edges.push(ints);
                    step = WalkStep::Crossed(ints);
                }
            }
        }
    }

    #[inline]
    fn vertex_on_segment(&self, joint: usize, p1: &Point2<T>, p2: &Point2<T>) -> bool {
        kernel::on_segment(self.point(joint), p1, p2, &self.tol)
    }

    #[inline]
    fn crosses(&self, p1: &Point2<T>, p2: &Point2<T>, e: EdgeId) -> bool {
        kernel::segments_properly_intersect(
            p1,
            p2,
            self.point(self.arena.org(e)),
            self.point(self.arena.dest(e)),
        )
    }

    /// Re-triangulates the polygonal hole on the left of `cut` by collapsing
    /// counter-clockwise ears strip by strip, then restores the Delaunay
    /// criterion locally by flipping the edges the collapse introduced.
    pub(crate) fn shrink_triangulate(&mut self, cut: EdgeId) {
        let from = self.arena.lnext(cut);
        let to = self.arena.lprev(cut);
        if self.arena.dest(from) == self.arena.org(to) {
            return; // the hole is already a triangle
        }
        let mut strips: SmallVec<[EdgeId; 8]> = SmallVec::new();
        let mut e = from;
        while e != cut {
            strips.push(e);
            e = self.arena.lnext(e);
        }
        let mut temps: SmallVec<[EdgeId; 8]> = SmallVec::new();
        while strips.len() > 2 {
            let mut next: SmallVec<[EdgeId; 8]> = SmallVec::new();
            let mut i = 0;
            while i < strips.len() {
                if i + 1 == strips.len() {
                    next.push(strips[i]);
                    break;
                }
                let e1 = strips[i];
                let e2 = strips[i + 1];
                if self.ccw(
                    self.arena.org(e1),
                    self.arena.org(e2),
                    self.arena.dest(e2),
                ) {
                    let e = self.arena.connect_edges(e2, e1);
                    next.push(e.sym());
                    temps.push(e);
                    i += 2;
                } else {
                    next.push(e1);
                    i += 1;
                }
            }
            debug_assert!(next.len() < strips.len(), "strip collapse stalled");
            if next.len() >= strips.len() {
                break;
            }
            strips = next;
        }
        for e in temps {
            if self.need_flip(e) {
                self.flip(e);
            }
        }
    }

    /// A diagonal wants flipping when its surrounding quadrilateral is
    /// convex (all four turns agree) and the flip strictly shortens the
    /// diagonal.
    fn need_flip(&self, e: EdgeId) -> bool {
        let e1 = self.arena.lnext(e);
        let e2 = self.arena.rnext(e);
        let p1 = self.arena.org(e);
        let p2 = self.arena.org(e2);
        let p3 = self.arena.org(e1);
        let p4 = self.arena.dest(e1);
        let b1 = self.ccw(p1, p2, p3);
        let b2 = self.ccw(p2, p3, p4);
        let b3 = self.ccw(p3, p4, p1);
        let b4 = self.ccw(p4, p1, p2);
        if !(b1 == b2 && b2 == b3 && b3 == b4) {
            return false;
        }
        let d1 = self.point(p1).distance_sq(self.point(p3));
        let d2 = self.point(p2).distance_sq(self.point(p4));
        d1 > d2
    }

    /// Rotates `e` to the other diagonal of its quadrilateral, purely by
    /// splicing.
    fn flip(&mut self, e: EdgeId) {
        let a = self.arena.oprev(e);
        let b = self.arena.oprev(e.sym());
        self.arena.splice(e, a);
        self.arena.splice(e.sym(), b);
        let la = self.arena.lnext(a);
        self.arena.splice(e, la);
        let lb = self.arena.lnext(b);
        self.arena.splice(e.sym(), lb);
        let org = self.arena.dest(a);
        let dest = self.arena.dest(b);
        self.arena.set_org(e, org);
        self.arena.set_dest(e, dest);
    }
}
