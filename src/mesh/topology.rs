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

//! Navigation and the splice-based topological operators.
//!
//! Every structural mutation of the mesh goes through [`EdgeArena::splice`];
//! `connect_edges` and `delete_edge` are compositions of it, which is what
//! keeps the ring invariants intact across arbitrary surgery.

use crate::mesh::arena::EdgeArena;
use crate::mesh::half_edge::EdgeId;

impl EdgeArena {
    #[inline]
    pub fn org(&self, e: EdgeId) -> usize {
        self[e].origin
    }

    #[inline]
    pub fn dest(&self, e: EdgeId) -> usize {
        self[e.sym()].origin
    }

    #[inline]
    pub(crate) fn set_org(&mut self, e: EdgeId, joint: usize) {
        self[e].origin = joint;
    }

    #[inline]
    pub(crate) fn set_dest(&mut self, e: EdgeId, joint: usize) {
        self[e.sym()].origin = joint;
    }

    /// Next edge around the left face.
    #[inline]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self[e].next
    }

    /// Previous edge around the left face.
    #[inline]
    pub fn lprev(&self, e: EdgeId) -> EdgeId {
        self[e].prev
    }

    /// Next edge counter-clockwise around the origin.
    #[inline]
    pub fn onext(&self, e: EdgeId) -> EdgeId {
        self[e].prev.sym()
    }

    /// Next edge clockwise around the origin.
    #[inline]
    pub fn oprev(&self, e: EdgeId) -> EdgeId {
        self[e.sym()].next
    }

    /// Next edge counter-clockwise around the destination.
    #[inline]
    pub fn dnext(&self, e: EdgeId) -> EdgeId {
        self[e.sym()].prev
    }

    /// Next edge clockwise around the destination.
    #[inline]
    pub fn dprev(&self, e: EdgeId) -> EdgeId {
        self[e].next.sym()
    }

    /// Next edge around the right face.
    #[inline]
    pub fn rnext(&self, e: EdgeId) -> EdgeId {
        self[e.sym()].next.sym()
    }

    /// Previous edge around the right face.
    #[inline]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self[e.sym()].prev.sym()
    }

    /// The fundamental quad-edge operator: exchanges the predecessor links
    /// of `e1` and `e2`, merging their origin rings if they are distinct
    /// and splitting the ring if they share it. Self-inverse.
    pub fn splice(&mut self, e1: EdgeId, e2: EdgeId) {
        let t1 = self[e1].prev;
        let t2 = self[e2].prev;
        self[t1].next = e2;
        self[t2].next = e1;
        self[e1].prev = t2;
        self[e2].prev = t1;
    }

    /// Creates a new edge from `dest(e1)` to `org(e2)`, spliced so that the
    /// three edges share a left face.
    pub fn connect_edges(&mut self, e1: EdgeId, e2: EdgeId) -> EdgeId {
        let org = self.dest(e1);
        let dest = self.org(e2);
        let e = self.create_edge_pair(org, dest);
        let after = self.lnext(e1);
        self.splice(e, after);
        self.splice(e.sym(), e2);
        e
    }

    /// Splices the pair out of both origin rings, then frees it.
    ///
    /// Constraint edges must never reach this; the flag is checked in debug
    /// builds only, as all internal callers filter on it already.
    pub fn delete_edge(&mut self, e: EdgeId) {
        debug_assert!(!self[e].constraint && !self[e.sym()].constraint);
        let op = self.oprev(e);
        self.splice(e, op);
        let s = e.sym();
        let sop = self.oprev(s);
        self.splice(s, sop);
        self.free_edge_pair(e);
    }

    #[inline]
    pub fn is_constraint(&self, e: EdgeId) -> bool {
        self[e].constraint
    }

    /// Flags both halves of the pair as a constraint.
    pub fn set_constraint_pair(&mut self, e: EdgeId) {
        self[e].constraint = true;
        self[e.sym()].constraint = true;
    }

    #[inline]
    pub fn is_boundary(&self, e: EdgeId) -> bool {
        self[e].boundary
    }

    #[inline]
    pub(crate) fn set_boundary(&mut self, e: EdgeId, value: bool) {
        self[e].boundary = value;
    }

    #[inline]
    pub(crate) fn is_checked(&self, e: EdgeId) -> bool {
        self[e].checked
    }

    #[inline]
    pub(crate) fn set_checked(&mut self, e: EdgeId, value: bool) {
        self[e].checked = value;
    }

    /// Marks both halves of the pair.
    pub(crate) fn set_checked_pair(&mut self, e: EdgeId, value: bool) {
        self[e].checked = value;
        self[e.sym()].checked = value;
    }

    /// Debug validation of the face-cycle links around `e`.
    pub(crate) fn assert_linkage(&self, e: EdgeId) {
        let p = self.lprev(e);
        let n = self.lnext(e);
        debug_assert_eq!(self.lnext(p), e);
        debug_assert_eq!(self.dest(p), self.org(e));
        debug_assert_eq!(self.lprev(n), e);
        debug_assert_eq!(self.dest(e), self.org(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_edge_is_its_own_ring() {
        let mut arena = EdgeArena::new();
        let e = arena.create_edge_pair(0, 1);

        assert_eq!(e.sym().sym(), e);
        assert_eq!(arena.org(e), 0);
        assert_eq!(arena.dest(e), 1);
        assert_eq!(arena.onext(e), e);
        assert_eq!(arena.oprev(e), e);
        assert_eq!(arena.lnext(e), e.sym());
    }

    #[test]
    fn splice_is_self_inverse() {
        let mut arena = EdgeArena::new();
        let a = arena.create_edge_pair(0, 1);
        let b = arena.create_edge_pair(0, 2);

        arena.splice(a, b);
        assert_eq!(arena.onext(a), b);
        assert_eq!(arena.onext(b), a);

        arena.splice(a, b);
        assert_eq!(arena.onext(a), a);
        assert_eq!(arena.onext(b), b);
    }

    #[test]
    fn connect_links_a_shared_face() {
        let mut arena = EdgeArena::new();
        let a = arena.create_edge_pair(0, 1);
        let b = arena.create_edge_pair(1, 2);
        arena.splice(a.sym(), b);

        let c = arena.connect_edges(b, a);
        assert_eq!(arena.org(c), 2);
        assert_eq!(arena.dest(c), 0);
        // the three edges close a triangle on their shared left face
        assert_eq!(arena.lnext(a), b);
        assert_eq!(arena.lnext(b), c);
        assert_eq!(arena.lnext(c), a);
        arena.assert_linkage(a);
        arena.assert_linkage(b);
        arena.assert_linkage(c);
    }

    #[test]
    fn delete_recycles_and_invalidates() {
        let mut arena = EdgeArena::new();
        let a = arena.create_edge_pair(0, 1);
        let b = arena.create_edge_pair(0, 2);
        arena.splice(a, b);

        assert_eq!(arena.len(), 2);
        arena.delete_edge(b);
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(b));
        assert!(arena.get(b).is_none());
        assert_eq!(arena.onext(a), a);

        // the slot comes back with a new generation
        let c = arena.create_edge_pair(3, 4);
        assert_eq!(c.pair(), b.pair());
        assert_ne!(c, b);
        assert!(!arena.contains(b));
    }
}
