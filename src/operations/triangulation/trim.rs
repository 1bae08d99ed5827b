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

//! Boundary trimming: removing everything outside the constraint loops.

use tracing::debug;

use crate::mesh::half_edge::EdgeId;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::delaunay::DelaunayTriangulation;

impl<T, B> DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    /// Removes every triangle not enclosed by the given constraint edges:
    /// from each constraint not already on the boundary, flood-fills
    /// outward through non-constraint neighbors and destroys everything
    /// reached. Hull handles pointing into the trimmed region are
    /// reassigned to a surviving boundary edge.
    ///
    /// Each handle must be directed so that the region to discard lies on
    /// its left; for a closed loop that means walking it with the kept
    /// region on the right.
    pub fn trim(&mut self, constraints: &[EdgeId]) {
        let mut for_trim: Vec<EdgeId> = Vec::new();
        for &e in constraints {
            debug_assert!(self.arena.contains(e) && self.arena.is_constraint(e));
            if !self.arena.contains(e) {
                continue;
            }
            self.arena.set_boundary(e, true);
            if self.is_boundary_by_dcel(e) {
                continue;
            }
            let e1 = self.arena.lprev(e);
            let e2 = self.arena.lnext(e);
            if !self.arena.is_checked(e1) {
                self.collect_trim_edges(&mut for_trim, e1.sym());
            }
            if !self.arena.is_checked(e2) {
                self.collect_trim_edges(&mut for_trim, e2.sym());
            }
        }

        let mut reset_left = false;
        let mut reset_right = false;
        for &e in &for_trim {
            if let Some(range) = self.range {
                if e.pair() == range.left.pair() {
                    reset_left = true;
                }
                if e.pair() == range.right.pair() {
                    reset_right = true;
                }
            }
            self.arena.delete_edge(e);
        }
        debug!(trimmed = for_trim.len(), "trim pass finished");

        if !(reset_left || reset_right) {
            return;
        }
        let picks: Vec<EdgeId> = self
            .arena
            .iter()
            .filter(|&e| self.arena.is_boundary(e) || self.is_boundary_by_dcel(e))
            .take(2)
            .collect();
        let Some(mut range) = self.range else {
            return;
        };
        let mut next = picks.iter().copied();
        if reset_left {
            if let Some(e) = next.next() {
                range.left = e;
            }
        }
        if reset_right {
            if let Some(e) = next.next() {
                range.right = e;
            }
        }
        self.range = Some(range);
    }

    /// Depth-first collection of the trimmable region reachable from `e`,
    /// stopping at constraint edges, cached-boundary edges and anything
    /// already visited. Iterative with an explicit stack; the walk can be
    /// as long as the mesh.
    fn collect_trim_edges(&mut self, out: &mut Vec<EdgeId>, e: EdgeId) {
        let mut stack = vec![e];
        while let Some(e) = stack.pop() {
            if self.arena.is_checked(e) || self.arena.is_constraint(e) {
                continue;
            }
            self.arena.set_checked_pair(e, true);
            out.push(e);
            if self.arena.is_boundary(e) {
                continue;
            }
            let e1 = self.arena.lnext(e);
            let e2 = self.arena.lprev(e);
            if !self.arena.is_checked(e1) {
                stack.push(e1.sym());
            }
            if !self.arena.is_checked(e2) {
                stack.push(e2.sym());
            }
        }
    }

    /// True when the face on the left of `e` is not a triangle, i.e. `e`
    /// borders the outer face. Fails on a mesh consisting of one single
    /// triangle, where both faces close after three edges.
    pub(crate) fn is_outside_boundary(&self, e: EdgeId) -> bool {
        let i = self.arena.org(self.arena.lprev(e));
        let j = self.arena.dest(self.arena.lnext(e));
        i != j
    }

    /// Boundary test that also recognizes thin sliver boundaries.
    ///
    /// When both halves report a triangular local face, the edge can still
    /// be a boundary of a degenerate sliver; there the two local faces
    /// disagree in winding, which the plain face-count test cannot see.
    pub(crate) fn is_boundary_by_dcel(&self, e: EdgeId) -> bool {
        let turn = |x: EdgeId| {
            let p1 = self.arena.org(x);
            let p2 = self.arena.dest(x);
            let p3 = self.arena.org(self.arena.lprev(x));
            self.ccw(p1, p2, p3)
        };
        if !self.is_outside_boundary(e) {
            if !self.is_outside_boundary(e.sym()) {
                return turn(e) != turn(e.sym());
            }
            return true;
        }
        if !self.is_outside_boundary(e.sym()) {
            return true;
        }
        false
    }
}
