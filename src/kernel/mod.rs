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

pub mod orientation;
pub mod predicates;

pub use orientation::{is_ccw, signed_area};
pub use predicates::{in_circle, on_segment, segments_properly_intersect};

/// Tolerances of the coordinate-level predicates.
///
/// `coincidence` bounds squared distances and line residuals; `in_circle`
/// bounds the lifted determinant, which operates on squared coordinates and
/// therefore needs its own, looser scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub coincidence: f64,
    pub in_circle: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            coincidence: 1e-6,
            in_circle: 1e-12,
        }
    }
}
