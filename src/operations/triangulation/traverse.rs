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

//! Triangle extraction and mesh diagnostics.

use tracing::trace;

use crate::mesh::half_edge::EdgeId;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::delaunay::DelaunayTriangulation;

/// One extracted triangle: the three joint bindings in counter-clockwise
/// order plus, per edge, the cached boundary flag.
#[derive(Debug, Clone)]
pub struct MeshTriangle<B> {
    pub bindings: [B; 3],
    pub is_boundary: [bool; 3],
}

impl<T, B> DelaunayTriangulation<T, B>
where
    T: Scalar,
{
    /// Walks all live half-edges and emits each counter-clockwise triangle
    /// face exactly once. No ordering is guaranteed.
    ///
    /// Triangles whose three edges all carry the boundary flag are held
    /// back; one of them is still emitted when nothing else was, so a mesh
    /// that genuinely is a single triangle is not mistaken for a hole.
    pub fn collect_triangles(&mut self) -> Vec<MeshTriangle<B>>
    where
        B: Clone,
    {
        let mut triangles = Vec::new();
        let mut bound_triangles = Vec::new();
        let reps: Vec<EdgeId> = self.arena.iter().collect();
        for e in reps {
            self.traverse_per_edge(e, &mut triangles, &mut bound_triangles);
            self.traverse_per_edge(e.sym(), &mut triangles, &mut bound_triangles);
        }
        if triangles.is_empty() {
            if let Some(first) = bound_triangles.into_iter().next() {
                triangles.push(first);
            }
        }
        self.arena.reset_checked();
        triangles
    }

    fn traverse_per_edge(
        &mut self,
        e: EdgeId,
        triangles: &mut Vec<MeshTriangle<B>>,
        bound_triangles: &mut Vec<MeshTriangle<B>>,
    ) where
        B: Clone,
    {
        if self.arena.is_checked(e) {
            return;
        }
        let e1 = self.arena.lprev(e);
        let e2 = self.arena.lnext(e);
        debug_assert!(!self.arena.is_checked(e1) && !self.arena.is_checked(e2));
        let j1 = self.arena.org(e);
        let j2 = self.arena.dest(e);
        let j3 = self.arena.org(e1);
        if j3 != self.arena.dest(e2) {
            return; // the left face is not a triangle
        }
        if !self.ccw(j1, j2, j3) {
            return; // the outer face winds the other way
        }
        let triangle = MeshTriangle {
            bindings: [
                self.joints[j1].binding.clone(),
                self.joints[j2].binding.clone(),
                self.joints[j3].binding.clone(),
            ],
            is_boundary: [
                self.arena.is_boundary(e),
                self.arena.is_boundary(e1),
                self.arena.is_boundary(e2),
            ],
        };
        if triangle.is_boundary.iter().all(|&b| b) {
            bound_triangles.push(triangle);
        } else {
            triangles.push(triangle);
        }
        self.arena.set_checked(e, true);
        self.arena.set_checked(e1, true);
        self.arena.set_checked(e2, true);
    }

    /// Dumps every live edge at TRACE level and validates its linkage in
    /// debug builds. A debugging aid; does nothing observable otherwise.
    pub fn log_mesh(&self) {
        for e in self.arena.iter() {
            let (x1, y1) = self.point(self.arena.org(e)).as_f64();
            let (x2, y2) = self.point(self.arena.dest(e)).as_f64();
            trace!(
                x1,
                y1,
                x2,
                y2,
                constraint = self.arena.is_constraint(e),
                boundary = self.arena.is_boundary(e),
                "edge"
            );
            self.arena.assert_linkage(e);
            self.arena.assert_linkage(e.sym());
        }
    }
}
