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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Twice the signed area of triangle `a, b, c`, computed in `f64`.
///
/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn signed_area<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> f64
where
    T: Scalar,
{
    let (ax, ay) = a.as_f64();
    let (bx, by) = b.as_f64();
    let (cx, cy) = c.as_f64();
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Strict counter-clockwise turn through `a, b, c`.
pub fn is_ccw<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool
where
    T: Scalar,
{
    signed_area(a, b, c) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        assert!(signed_area(&a, &b, &c) > 0.0); // Counter-clockwise
        assert!(is_ccw(&a, &b, &c));
        assert!(!is_ccw(&a, &c, &b));
    }

    #[test]
    fn collinear_has_zero_area() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);

        assert_eq!(signed_area(&a, &b, &c), 0.0);
        assert!(!is_ccw(&a, &b, &c));
    }

    #[test]
    fn f32_input_is_widened() {
        let a = Point2::new(0.0_f32, 0.0);
        let b = Point2::new(1.0e3_f32, 0.0);
        let c = Point2::new(1.0e3_f32, 1.0e-3);

        assert!(is_ccw(&a, &b, &c));
    }
}
