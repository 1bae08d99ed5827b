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

/// Generational handle to a half-edge in the arena.
///
/// A handle is invalidated the moment its pair is destroyed; resolving a
/// stale handle is a programmer error caught by the arena in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl EdgeId {
    /// The opposite-direction half of the same undirected edge.
    #[inline]
    pub fn sym(self) -> EdgeId {
        EdgeId {
            index: self.index ^ 1,
            generation: self.generation,
        }
    }

    /// Number of the undirected pair; equal for `e` and `e.sym()`.
    #[inline]
    pub fn pair(self) -> u32 {
        self.index >> 1
    }
}

/// One directed half of an undirected mesh edge.
///
/// `next`/`prev` walk the cycle of the face to the left of the edge; the
/// origin ring and every other traversal are compositions of those links
/// with `sym` (see the navigation methods on [`crate::mesh::EdgeArena`]).
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// Joint index this half-edge starts at; the partner's origin is the
    /// destination.
    pub origin: usize,
    pub next: EdgeId,
    pub prev: EdgeId,
    /// Must survive every retriangulation and trim pass.
    pub constraint: bool,
    /// Cached boundary status, maintained by the trim pass.
    pub boundary: bool,
    /// Transient traversal mark.
    pub(crate) checked: bool,
}
