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

use crate::geometry::point_2::Point2;
use crate::geometry::vector_2::Vector2;
use crate::numeric::scalar::Scalar;

/// Coefficients `(a, b, c)` of the implicit line `a*x + b*y + c = 0`
/// through `origin` along `direction`.
///
/// The coefficients are not normalized; residuals scale with the length of
/// `direction`.
pub fn linear_coefficient<T>(origin: &Point2<T>, direction: &Vector2<T>) -> (f64, f64, f64)
where
    T: Scalar,
{
    let dx = direction.x.as_f64();
    let dy = direction.y.as_f64();
    debug_assert!(dx != 0.0 || dy != 0.0);
    let c = direction.cross(&Vector2::new(origin.x, origin.y));
    (dy, -dx, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_passes_through_origin_point() {
        let p = Point2::new(2.0_f64, 3.0);
        let d = Vector2::new(1.0_f64, 1.0);
        let (a, b, c) = linear_coefficient(&p, &d);
        assert!((a * 2.0 + b * 3.0 + c).abs() < 1e-12);
        assert!((a * 4.0 + b * 5.0 + c).abs() < 1e-12);
    }
}
