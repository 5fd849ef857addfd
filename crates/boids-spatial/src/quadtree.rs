//! Lazy, non-relocating point quadtree.
//!
//! # Node lifecycle
//!
//! ```text
//! leaf-with-room ──(capacity reached)──▶ overflowing ──(subdivide)──▶ internal
//!        ▲                                                               │
//!        └──────────────────────────── clear() ──────────────────────────┘
//! ```
//!
//! A node keeps up to `capacity` entries in its own list.  The first insert
//! that finds the list full creates four equal quadrants and routes that
//! entry (and every later one) into the first quadrant that accepts it, in
//! `[TL, TR, BL, BR]` order.  Entries already stored in the node are **not**
//! redistributed, so an internal node still holds exactly `capacity` entries
//! of its own.  This weakens worst-case pruning compared with a textbook
//! point quadtree; queries stay correct because every surviving node tests
//! its own list before recursing.
//!
//! # Ownership
//!
//! Entries carry an [`AgentId`] and a copy of the position it was inserted
//! at.  The index never borrows agent storage, so the agent `Vec` may be
//! mutated freely between rebuilds.  The snapshot positions are only coherent
//! with the agents until the next commit phase, which is why the simulation
//! rebuilds the tree from empty every tick.

use boids_core::{AgentId, Vec2};

use crate::{Aabb, Region, SpatialError, SpatialResult};

/// Node capacity used by the simulation unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 4;

/// Nodes at this depth stop subdividing and accept entries past capacity.
/// Bounds recursion when many agents share one position, and keeps leaf
/// extents well above `f32` resolution for any realistic world size.
pub const MAX_DEPTH: u32 = 16;

/// One indexed point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    pub id:       AgentId,
    pub position: Vec2,
}

/// A quadtree node; the root is the whole index.
#[derive(Clone, Debug)]
pub struct QuadTree {
    boundary: Aabb,
    capacity: usize,
    depth:    u32,
    points:   Vec<Entry>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    /// Create an empty index covering `boundary`.
    ///
    /// # Errors
    /// - [`SpatialError::InvalidCapacity`] if `capacity == 0`.
    /// - [`SpatialError::InvalidBoundary`] if either extent is negative or
    ///   not finite.
    pub fn new(boundary: Aabb, capacity: usize) -> SpatialResult<Self> {
        if capacity == 0 {
            return Err(SpatialError::InvalidCapacity(capacity));
        }
        let (width, height) = (boundary.width(), boundary.height());
        let center = boundary.center();
        let extents_ok = width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0;
        if !extents_ok || !center.x.is_finite() || !center.y.is_finite() {
            return Err(SpatialError::InvalidBoundary { width, height });
        }
        Ok(Self::node(boundary, capacity, 0))
    }

    fn node(boundary: Aabb, capacity: usize, depth: u32) -> Self {
        Self {
            boundary,
            capacity,
            depth,
            points: Vec::with_capacity(capacity),
            children: None,
        }
    }

    #[inline]
    pub fn boundary(&self) -> &Aabb {
        &self.boundary
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries stored directly in this node (not its descendants).
    #[inline]
    pub fn points(&self) -> &[Entry] {
        &self.points
    }

    /// The four quadrants in `[TL, TR, BL, BR]` order, once subdivided.
    #[inline]
    pub fn children(&self) -> Option<&[QuadTree; 4]> {
        self.children.as_deref()
    }

    /// `true` once this node has created its four quadrants.
    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Drop every entry and every child, returning the root to
    /// leaf-with-room.  The root's point buffer keeps its allocation.
    pub fn clear(&mut self) {
        self.points.clear();
        self.children = None;
    }

    /// Insert `id` at `position`.
    ///
    /// Returns `false` (and leaves the tree unchanged) if `position` lies
    /// outside this node's boundary.  A `false` for a point inside the
    /// boundary is possible only when rounding leaves a sliver between
    /// quadrants.
    pub fn insert(&mut self, id: AgentId, position: Vec2) -> bool {
        if !self.boundary.contains(position) {
            return false;
        }

        if self.points.len() < self.capacity || self.depth >= MAX_DEPTH {
            self.points.push(Entry { id, position });
            return true;
        }

        let capacity = self.capacity;
        let depth = self.depth;
        let boundary = self.boundary;
        let children = self.children.get_or_insert_with(|| {
            let [tl, tr, bl, br] = boundary.quadrants();
            Box::new([
                QuadTree::node(tl, capacity, depth + 1),
                QuadTree::node(tr, capacity, depth + 1),
                QuadTree::node(bl, capacity, depth + 1),
                QuadTree::node(br, capacity, depth + 1),
            ])
        });

        children.iter_mut().any(|child| child.insert(id, position))
    }

    /// All ids whose position lies inside `range`.  Order is unspecified.
    pub fn query<R: Region + ?Sized>(&self, range: &R) -> Vec<AgentId> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    /// Like [`query`](Self::query) but appends into a caller-owned buffer, so
    /// a per-tick loop can reuse one allocation.
    pub fn query_into<R: Region + ?Sized>(&self, range: &R, out: &mut Vec<AgentId>) {
        self.collect(range, &mut |_: AgentId| true, out);
    }

    /// Ids inside `range` for which `keep` also returns `true`.
    pub fn query_filtered<R, F>(&self, range: &R, mut keep: F) -> Vec<AgentId>
    where
        R: Region + ?Sized,
        F: FnMut(AgentId) -> bool,
    {
        let mut found = Vec::new();
        self.collect(range, &mut keep, &mut found);
        found
    }

    fn collect<R: Region + ?Sized>(
        &self,
        range: &R,
        keep:  &mut dyn FnMut(AgentId) -> bool,
        out:   &mut Vec<AgentId>,
    ) {
        if !range.overlaps(&self.boundary) {
            return;
        }
        for entry in &self.points {
            if range.contains(entry.position) && keep(entry.id) {
                out.push(entry.id);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect(range, keep, out);
            }
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Total entries in this node and all descendants.
    pub fn len(&self) -> usize {
        self.points.len()
            + self
                .children
                .as_ref()
                .map_or(0, |c| c.iter().map(QuadTree::len).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(QuadTree::node_count).sum())
    }

    /// Height of the subtree rooted here; a lone leaf has height 1.
    pub fn height(&self) -> u32 {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(QuadTree::height).max().unwrap_or(0))
    }

    /// Visit every node boundary depth-first, with the node's depth (root = 0).
    /// Lets a host draw the current partition.
    pub fn for_each_boundary<F: FnMut(&Aabb, u32)>(&self, mut visit: F) {
        self.visit_boundaries(&mut visit);
    }

    fn visit_boundaries(&self, visit: &mut dyn FnMut(&Aabb, u32)) {
        visit(&self.boundary, self.depth);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.visit_boundaries(visit);
            }
        }
    }
}
