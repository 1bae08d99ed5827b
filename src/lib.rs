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

//! Constrained Delaunay triangulation over a quad-edge mesh.
//!
//! The builder is the classic Guibas–Stolfi divide-and-conquer algorithm;
//! constraints are inserted afterwards by carving the crossed edges out of
//! the mesh, reconnecting across the constraint segment and re-triangulating
//! the two polygonal holes. A flood-fill trim pass can then discard every
//! triangle outside a set of constraint loops.
//!
//! ```
//! use deltri::geometry::Point2;
//! use deltri::operations::triangulation::DelaunayTriangulation;
//!
//! let mut dt = DelaunayTriangulation::<f64, usize>::new();
//! dt.initialize(vec![
//!     (Point2::new(0.0, 0.0), 0),
//!     (Point2::new(10.0, 0.0), 1),
//!     (Point2::new(10.0, 10.0), 2),
//!     (Point2::new(0.0, 10.0), 3),
//! ]);
//! dt.run();
//! assert_eq!(dt.collect_triangles().len(), 2);
//! ```

pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use crate::geometry::Point2;
pub use crate::kernel::Tolerances;
pub use crate::mesh::EdgeId;
pub use crate::operations::triangulation::{
    DelaunayTriangulation, MeshTriangle, TriangulationError,
};
