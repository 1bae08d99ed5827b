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

//! The divide-and-conquer Delaunay builder.
//!
//! Joints are sorted lexicographically once; the recursion triangulates
//! index ranges of that order and the merge step zips two sub-hulls along
//! their lower common tangent, establishing the empty-circumcircle property
//! as it goes.

use tracing::debug;

use crate::geometry::Point2;
use crate::kernel::{self, Tolerances};
use crate::mesh::arena::EdgeArena;
use crate::mesh::half_edge::EdgeId;
use crate::numeric::scalar::Scalar;

/// An input site: a position plus the caller's binding, carried through to
/// the emitted triangles untouched.
#[derive(Debug, Clone)]
pub struct Joint<T, B>
where
    T: Scalar,
{
    pub point: Point2<T>,
    pub binding: B,
}

/// Leftmost and rightmost outgoing boundary edges of a triangulated range's
/// convex hull. Only a stitching handle; it holds no ownership.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeRange {
    pub left: EdgeId,
    pub right: EdgeId,
}

/// Constrained Delaunay triangulation over a quad-edge arena.
///
/// `T` is the coordinate scalar, `B` the caller-owned binding attached to
/// every joint. Lifecycle: [`initialize`](Self::initialize) once,
/// [`run`](Self::run) to build, then any number of
/// [`add_constraint`](Self::add_constraint) /
/// [`trim`](Self::trim) /
/// [`collect_triangles`](Self::collect_triangles) calls;
/// [`clear`](Self::clear) frees everything.
#[derive(Debug)]
pub struct DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    pub(crate) joints: Vec<Joint<T, B>>,
    pub(crate) arena: EdgeArena,
    pub(crate) range: Option<EdgeRange>,
    pub(crate) tol: Tolerances,
}

impl<T, B> Default for DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    pub fn new() -> Self {
        Self::with_tolerances(Tolerances::default())
    }

    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self {
            joints: Vec::new(),
            arena: EdgeArena::new(),
            range: None,
            tol,
        }
    }

    /// Takes the input sites, sorts them lexicographically (x major, y
    /// minor) and drops exact duplicate points. The first occurrence of a
    /// duplicated point keeps its binding.
    pub fn initialize(&mut self, inputs: Vec<(Point2<T>, B)>) {
        self.clear();
        let mut joints: Vec<Joint<T, B>> = inputs
            .into_iter()
            .map(|(point, binding)| Joint { point, binding })
            .collect();
        joints.sort_by(|a, b| a.point.lex_cmp(&b.point));
        joints.dedup_by(|a, b| a.point == b.point);
        self.joints = joints;
    }

    /// Builds the Delaunay triangulation of the initialized joints. A no-op
    /// below two joints.
    pub fn run(&mut self) {
        if self.joints.len() < 2 {
            return;
        }
        if !self.arena.is_empty() {
            self.arena.clear();
            self.range = None;
        }
        let range = self.delaunay(0, self.joints.len() - 1);
        self.range = Some(range);
        debug!(
            joints = self.joints.len(),
            edges = self.arena.len(),
            "triangulation built"
        );
    }

    /// Frees every half-edge pair and forgets the joints.
    pub fn clear(&mut self) {
        self.joints.clear();
        self.range = None;
        self.arena.clear();
    }

    pub fn joints(&self) -> &[Joint<T, B>] {
        &self.joints
    }

    /// Number of live undirected edges.
    pub fn edge_count(&self) -> usize {
        self.arena.len()
    }

    pub fn tolerances(&self) -> Tolerances {
        self.tol
    }

    pub fn arena(&self) -> &EdgeArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn point(&self, joint: usize) -> &Point2<T> {
        &self.joints[joint].point
    }

    #[inline]
    pub(crate) fn ccw(&self, a: usize, b: usize, c: usize) -> bool {
        kernel::is_ccw(self.point(a), self.point(b), self.point(c))
    }

    /// `p` strictly left of the directed edge `e`.
    #[inline]
    pub(crate) fn left_of(&self, p: usize, e: EdgeId) -> bool {
        self.ccw(p, self.arena.org(e), self.arena.dest(e))
    }

    /// `p` strictly right of the directed edge `e`.
    #[inline]
    pub(crate) fn right_of(&self, p: usize, e: EdgeId) -> bool {
        self.ccw(p, self.arena.dest(e), self.arena.org(e))
    }

    #[inline]
    pub(crate) fn right_of_point(&self, p: &Point2<T>, e: EdgeId) -> bool {
        kernel::is_ccw(p, self.point(self.arena.dest(e)), self.point(self.arena.org(e)))
    }

    /// `e` still makes a right turn against the merge base edge.
    #[inline]
    fn valid(&self, e: EdgeId, basel: EdgeId) -> bool {
        self.right_of(self.arena.dest(e), basel)
    }

    /// Strict in-circle over joint indices; a corner of the circle is never
    /// inside it.
    #[inline]
    pub(crate) fn in_circle(&self, a: usize, b: usize, c: usize, d: usize) -> bool {
        if d == a || d == b || d == c {
            return false;
        }
        kernel::in_circle(
            self.point(a),
            self.point(b),
            self.point(c),
            self.point(d),
            &self.tol,
        )
    }

    /// Triangulates the inclusive joint range `begin..=end`.
    fn delaunay(&mut self, begin: usize, end: usize) -> EdgeRange {
        let size = end - begin + 1;
        debug_assert!(size >= 2);
        if size == 2 {
            let e = self.arena.create_edge_pair(begin, end);
            return EdgeRange {
                left: e,
                right: e.sym(),
            };
        }
        if size == 3 {
            let p1 = begin;
            let p2 = begin + 1;
            let p3 = end;
            let e1 = self.arena.create_edge_pair(p1, p2);
            let e2 = self.arena.create_edge_pair(p2, p3);
            self.arena.splice(e1.sym(), e2);
            return if self.ccw(p1, p2, p3) {
                self.arena.connect_edges(e2, e1);
                EdgeRange {
                    left: e1,
                    right: e2.sym(),
                }
            } else if self.ccw(p1, p3, p2) {
                let e3 = self.arena.connect_edges(e2, e1);
                EdgeRange {
                    left: e3.sym(),
                    right: e3,
                }
            } else {
                // collinear triple: stay a two-edge chain
                EdgeRange {
                    left: e1,
                    right: e2.sym(),
                }
            };
        }
        let center = begin + size / 2;
        let left = self.delaunay(begin, center - 1);
        let right = self.delaunay(center, end);
        self.merge(begin, center, end, left, right)
    }

    /// The merge step: finds the lower common tangent of the two sub-hulls,
    /// then zips upward. Candidate edges that fail the in-circle test
    /// against their ring successor are evicted (left side first); the side
    /// whose candidate keeps the opposite apex outside its circumcircle
    /// supplies the next cross edge.
    fn merge(
        &mut self,
        begin: usize,
        center: usize,
        end: usize,
        left: EdgeRange,
        right: EdgeRange,
    ) -> EdgeRange {
        let mut ldo = left.left;
        let mut ldi = left.right;
        let mut rdi = right.left;
        let mut rdo = right.right;

        loop {
            if self.left_of(self.arena.org(rdi), ldi) {
                ldi = self.arena.lnext(ldi);
            } else if self.right_of(self.arena.org(ldi), rdi) {
                rdi = self.arena.rprev(rdi);
            } else {
                break;
            }
        }

        let mut basel = self.arena.connect_edges(rdi.sym(), ldi);
        if self.arena.org(ldi) == self.arena.org(ldo) {
            ldo = basel.sym();
        }
        if self.arena.org(rdi) == self.arena.org(rdo) {
            rdo = basel;
        }

        loop {
            let mut lcand = self.arena.onext(basel.sym());
            if self.valid(lcand, basel) {
                // eviction must stay inside the left range, or basel itself
                // could be deleted
                loop {
                    let next = self.arena.onext(lcand);
                    let apex = self.arena.dest(next);
                    if !(begin..center).contains(&apex)
                        || !self.right_of(apex, basel)
                        || !self.in_circle(
                            self.arena.dest(basel),
                            self.arena.org(basel),
                            self.arena.dest(lcand),
                            apex,
                        )
                    {
                        break;
                    }
                    self.arena.delete_edge(lcand);
                    lcand = next;
                }
            }
            let mut rcand = self.arena.oprev(basel);
            if self.valid(rcand, basel) {
                loop {
                    let next = self.arena.oprev(rcand);
                    let apex = self.arena.dest(next);
                    if !(center..=end).contains(&apex)
                        || !self.right_of(apex, basel)
                        || !self.in_circle(
                            self.arena.dest(basel),
                            self.arena.org(basel),
                            self.arena.dest(rcand),
                            apex,
                        )
                    {
                        break;
                    }
                    self.arena.delete_edge(rcand);
                    rcand = next;
                }
            }

            let lvalid = self.valid(lcand, basel);
            let rvalid = self.valid(rcand, basel);
            if !lvalid && !rvalid {
                break;
            }
            basel = if !lvalid
                || (rvalid
                    && self.in_circle(
                        self.arena.dest(lcand),
                        self.arena.org(lcand),
                        self.arena.org(rcand),
                        self.arena.dest(rcand),
                    ))
            {
                self.arena.connect_edges(rcand, basel.sym())
            } else {
                self.arena.connect_edges(basel.sym(), lcand.sym())
            };
        }

        EdgeRange {
            left: ldo,
            right: rdo,
        }
    }

    /// Orientation-steered walk toward `p` starting from `start`.
    ///
    /// Ends on an edge whose origin or destination coincides with `p`, or on
    /// the edge of the local triangle containing `p` (callers validate the
    /// endpoints). `None` when a ring is exhausted or the step budget runs
    /// out, which covers unreachable points on a torn mesh.
    pub(crate) fn locate_point(&self, p: &Point2<T>, start: EdgeId) -> Option<EdgeId> {
        if self.arena.is_empty() {
            return None;
        }
        let mut anchor = start;
        let mut e = start;
        let mut strategy = 0u8;
        let budget = self.arena.len() * 4 + 8;
        for _ in 0..budget {
            if *self.point(self.arena.org(e)) == *p || *self.point(self.arena.dest(e)) == *p {
                return Some(e);
            }
            let onext = self.arena.onext(e);
            if !self.right_of_point(p, onext) {
                if strategy != 1 {
                    strategy = 1;
                    anchor = e;
                }
                e = onext;
                if e == anchor {
                    return None;
                }
                continue;
            }
            let dprev = self.arena.dprev(e);
            if !self.right_of_point(p, dprev) {
                if strategy != 2 {
                    strategy = 2;
                    anchor = e;
                }
                e = dprev;
                if e == anchor {
                    return None;
                }
                continue;
            }
            return Some(e);
        }
        None
    }
}
