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

use thiserror::Error;

pub mod constraint;
pub mod delaunay;
pub mod traverse;
pub mod trim;

pub use delaunay::{DelaunayTriangulation, Joint};
pub use traverse::MeshTriangle;

/// Failures of the graph-navigation operations.
///
/// Geometric predicates are total; only point location and the constraint
/// walk can fail, and both leave the mesh untouched when they do.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("point ({0}, {1}) is not a vertex of the triangulation")]
    PointNotFound(f64, f64),

    #[error("segment ({0}, {1}) -> ({2}, {3}) crosses no mesh edges")]
    NoCrossedEdges(f64, f64, f64, f64),
}
