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

use crate::geometry::util::linear_coefficient;
use crate::geometry::Point2;
use crate::kernel::orientation::{is_ccw, signed_area};
use crate::kernel::Tolerances;
use crate::numeric::scalar::Scalar;

#[inline]
fn length_sq<T: Scalar>(p: &Point2<T>) -> f64 {
    let (x, y) = p.as_f64();
    x * x + y * y
}

/// True iff `d` lies strictly inside the circle through `a, b, c`.
///
/// Standard determinant on the paraboloid lift, expanded as alternating
/// cofactors; strictness is taken against `tol.in_circle`. Callers are
/// expected to have short-circuited the case where `d` is one of the three
/// circle points.
pub fn in_circle<T>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    tol: &Tolerances,
) -> bool
where
    T: Scalar,
{
    let f = length_sq(a) * signed_area(b, c, d) - length_sq(b) * signed_area(a, c, d)
        + length_sq(c) * signed_area(a, b, d)
        - length_sq(d) * signed_area(a, b, c);
    f > tol.in_circle
}

/// True if `p` coincides with an endpoint of `p1 -> p2` (squared-distance
/// tolerance) or lies between them on the carrying line.
pub fn on_segment<T>(p: &Point2<T>, p1: &Point2<T>, p2: &Point2<T>, tol: &Tolerances) -> bool
where
    T: Scalar,
{
    let t1 = p.distance_sq(p1);
    let t2 = p.distance_sq(p2);
    if t1 < tol.coincidence || t2 < tol.coincidence {
        return true;
    }
    let t3 = p1.distance_sq(p2);
    if t1 > t3 || t2 > t3 {
        return false;
    }
    let (a, b, c) = linear_coefficient(p1, &(*p2 - *p1));
    let (px, py) = p.as_f64();
    (a * px + b * py + c).abs() < tol.coincidence
}

/// True iff segment `p1 -> p2` properly crosses `p3 -> p4`: no shared
/// endpoint, and each segment's endpoints straddle the other segment.
pub fn segments_properly_intersect<T>(
    p1: &Point2<T>,
    p2: &Point2<T>,
    p3: &Point2<T>,
    p4: &Point2<T>,
) -> bool
where
    T: Scalar,
{
    if p1 == p3 || p1 == p4 || p2 == p3 || p2 == p4 {
        return false;
    }
    (is_ccw(p3, p4, p1) != is_ccw(p3, p4, p2)) && (is_ccw(p1, p2, p3) != is_ccw(p1, p2, p4))
}
