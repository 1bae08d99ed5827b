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

use std::ops::{Index, IndexMut};

use crate::mesh::half_edge::{EdgeId, HalfEdge};

#[derive(Debug)]
struct Slot {
    generation: u32,
    edge: Option<HalfEdge>,
}

/// Ownership authority over every live half-edge pair.
///
/// A pair occupies the adjacent slots `2k` and `2k + 1`, so `sym` is a pure
/// index flip. Destroyed pairs are recycled through a free list and their
/// generation is bumped, which keeps stale [`EdgeId`]s from resolving.
#[derive(Debug, Default)]
pub struct EdgeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl EdgeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a mutually symmetric pair running `org -> dest`.
    ///
    /// A fresh edge is alone on both of its origin rings: its left-face
    /// cycle is the 2-cycle `e -> sym(e) -> e`.
    pub fn create_edge_pair(&mut self, org: usize, dest: usize) -> EdgeId {
        let pair = match self.free.pop() {
            Some(pair) => pair,
            None => {
                let pair = (self.slots.len() / 2) as u32;
                self.slots.push(Slot {
                    generation: 0,
                    edge: None,
                });
                self.slots.push(Slot {
                    generation: 0,
                    edge: None,
                });
                pair
            }
        };
        let base = (pair as usize) * 2;
        let generation = self.slots[base].generation;
        let e = EdgeId {
            index: base as u32,
            generation,
        };
        let s = e.sym();
        self.slots[base].edge = Some(HalfEdge {
            origin: org,
            next: s,
            prev: s,
            constraint: false,
            boundary: false,
            checked: false,
        });
        self.slots[base + 1].edge = Some(HalfEdge {
            origin: dest,
            next: e,
            prev: e,
            constraint: false,
            boundary: false,
            checked: false,
        });
        self.live += 1;
        e
    }

    /// Frees both halves of the pair. The caller must have spliced the pair
    /// out of its rings first; [`EdgeArena::delete_edge`] does both.
    pub(crate) fn free_edge_pair(&mut self, e: EdgeId) {
        debug_assert!(self.contains(e));
        let base = (e.pair() as usize) * 2;
        self.slots[base].edge = None;
        self.slots[base + 1].edge = None;
        self.slots[base].generation = self.slots[base].generation.wrapping_add(1);
        self.slots[base + 1].generation = self.slots[base + 1].generation.wrapping_add(1);
        self.free.push(e.pair());
        self.live -= 1;
    }

    /// Liveness check; false for stale or destroyed handles.
    pub fn contains(&self, e: EdgeId) -> bool {
        self.slots
            .get(e.index as usize)
            .is_some_and(|s| s.generation == e.generation && s.edge.is_some())
    }

    pub fn get(&self, e: EdgeId) -> Option<&HalfEdge> {
        self.slots
            .get(e.index as usize)
            .filter(|s| s.generation == e.generation)
            .and_then(|s| s.edge.as_ref())
    }

    /// Number of live undirected edges.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every pair at once.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    /// One representative half-edge per live pair.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .step_by(2)
            .filter_map(|(i, s)| {
                s.edge.as_ref().map(|_| EdgeId {
                    index: i as u32,
                    generation: s.generation,
                })
            })
    }

    /// Clears the transient traversal marks on every live half-edge.
    pub(crate) fn reset_checked(&mut self) {
        for slot in &mut self.slots {
            if let Some(edge) = slot.edge.as_mut() {
                edge.checked = false;
            }
        }
    }
}

impl Index<EdgeId> for EdgeArena {
    type Output = HalfEdge;

    fn index(&self, e: EdgeId) -> &HalfEdge {
        let slot = &self.slots[e.index as usize];
        debug_assert_eq!(slot.generation, e.generation, "stale edge handle");
        match slot.edge.as_ref() {
            Some(edge) => edge,
            None => panic!("destroyed edge handle"),
        }
    }
}

impl IndexMut<EdgeId> for EdgeArena {
    fn index_mut(&mut self, e: EdgeId) -> &mut HalfEdge {
        let slot = &mut self.slots[e.index as usize];
        debug_assert_eq!(slot.generation, e.generation, "stale edge handle");
        match slot.edge.as_mut() {
            Some(edge) => edge,
            None => panic!("destroyed edge handle"),
        }
    }
}
