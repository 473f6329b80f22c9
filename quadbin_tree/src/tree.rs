// Copyright 2026 the Quadbin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: adaptive refinement, neighbor graph, joining.

use alloc::vec::Vec;
use kurbo::Rect;
use quadbin_geom::{contains_half_open, edge_adjacent, quadrants};

use crate::classify::{Classifier, Thresholds};
use crate::types::{NodeFlags, NodeId, Sample};

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    rect: Rect,
    depth: u8,
    bin: usize,
    flags: NodeFlags,
    // Leaf XOR internal: `children` is `None` exactly while `samples` may be
    // non-empty. Subdivision happens at most once and is never reversed.
    children: Option<[NodeId; 4]>,
    samples: Vec<Sample>,
    neighbors: Vec<NodeId>,
}

impl Node {
    fn new(generation: u32, rect: Rect, depth: u8) -> Self {
        Self {
            generation,
            rect,
            depth,
            bin: 0,
            flags: NodeFlags::empty(),
            children: None,
            samples: Vec::new(),
            neighbors: Vec::new(),
        }
    }
}

/// Adaptive region tree over a pluggable value [`Classifier`].
///
/// Nodes live in an arena of generational slots and are addressed by
/// [`NodeId`] handles; the neighbor graph stores handles, never owning
/// references, so removal only needs to scrub the handles that pointed at a
/// freed slot. Several independently rooted trees may share one arena, which
/// is what lets [`join`](Self::join) link leaves across root boundaries.
pub struct TreeGeneric<C: Classifier> {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    classifier: C,
    max_depth: u8,
}

/// A region tree classified by an ascending [`Thresholds`] table.
pub type Tree = TreeGeneric<Thresholds>;

impl<C: Classifier> core::fmt::Debug for TreeGeneric<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("TreeGeneric")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<C: Classifier> TreeGeneric<C> {
    /// Create an empty tree with the given classifier and depth cap.
    ///
    /// `max_depth` bounds recursion and memory: a leaf at the cap records the
    /// minimum bin seen instead of subdividing.
    pub fn new(classifier: C, max_depth: u8) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            classifier,
            max_depth,
        }
    }

    /// Reserve space for at least `n` additional nodes.
    pub fn reserve(&mut self, n: usize) {
        self.nodes.reserve(n);
        self.generations.reserve(n);
    }

    /// The configured depth cap.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Allocate a fresh depth-0 leaf covering `rect`.
    pub fn new_root(&mut self, rect: Rect) -> NodeId {
        self.alloc(rect, 0)
    }

    /// Insert a sample into the subtree rooted at `id`.
    ///
    /// Returns `false` without mutation when `id` is stale or the sample lies
    /// outside the node's rectangle (half-open semantics). Otherwise the
    /// sample is routed to the leaf covering it; a classification boundary
    /// crossing below the depth cap subdivides that leaf before the insert
    /// completes.
    ///
    /// # Panics
    ///
    /// Panics if an internal node contains the sample but every child refuses
    /// it. The four children partition their parent exactly, so this can only
    /// mean the partition invariant is broken.
    pub fn insert(&mut self, id: NodeId, sample: Sample) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.insert_inner(id, sample)
    }

    fn insert_inner(&mut self, id: NodeId, sample: Sample) -> bool {
        if !contains_half_open(self.node(id).rect, sample.pos) {
            return false;
        }
        if let Some(children) = self.node(id).children {
            for child in children {
                if self.insert_inner(child, sample) {
                    return true;
                }
            }
            panic!("quadrant partition broken: sample accepted by parent, refused by every child");
        }

        let bin = self.classifier.bin_of(sample.value);
        let max_depth = self.max_depth;
        let split = {
            let node = self.node_mut(id);
            node.samples.push(sample);
            if !node.flags.contains(NodeFlags::SEEDED) {
                node.bin = bin;
                node.flags.insert(NodeFlags::SEEDED);
                false
            } else if node.depth >= max_depth {
                // At the cap: keep lowering the recorded bin (bin 0 is the
                // most extreme) instead of refining further.
                node.bin = node.bin.min(bin);
                false
            } else {
                bin != node.bin
            }
        };
        if split {
            self.subdivide(id);
        }
        true
    }

    /// Transition the leaf `id` into an internal node.
    fn subdivide(&mut self, id: NodeId) {
        debug_assert!(
            self.node(id).children.is_none(),
            "only a leaf can subdivide"
        );
        let (rect, depth) = {
            let n = self.node(id);
            (n.rect, n.depth)
        };

        let quads = quadrants(rect);
        let mut children = [NodeId::new(0, 0); 4];
        for (slot, quad) in children.iter_mut().zip(quads) {
            *slot = self.alloc(quad, depth + 1);
        }

        // Every pair of siblings becomes a neighbor pair, including the two
        // diagonal pairs that only meet at the center point. Cross-tree
        // joining uses the stricter edge test; the mismatch is intentional
        // (see DESIGN.md).
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    self.node_mut(children[i]).neighbors.push(children[j]);
                }
            }
        }

        self.node_mut(id).children = Some(children);

        // Hand the external links down before redistributing samples, so a
        // child that subdivides during redistribution propagates them to its
        // own children rather than leaving them attached to an internal node.
        let externals = core::mem::take(&mut self.node_mut(id).neighbors);
        for ne in externals {
            self.node_mut(ne).neighbors.retain(|n| *n != id);
            let ne_rect = self.node(ne).rect;
            for child in children {
                if edge_adjacent(ne_rect, self.node(child).rect) {
                    self.link_neighbors(ne, child);
                }
            }
        }

        // Redistribute the held samples into the children; this can trigger
        // further subdivision below.
        let samples = core::mem::take(&mut self.node_mut(id).samples);
        for sample in samples {
            let _ = self.insert_inner(id, sample);
        }
    }

    /// Extend the neighbor graph across the boundary of two subtrees.
    ///
    /// Both subtrees are expected to be fully built. Descends on whichever
    /// side still has children, pruning branches whose rectangles do not
    /// share an edge with the opposite rectangle, and links every adjacent
    /// leaf pair it reaches. Stale ids are ignored.
    pub fn join(&mut self, a: NodeId, b: NodeId) {
        if !self.is_alive(a) || !self.is_alive(b) {
            return;
        }
        self.join_inner(a, b);
    }

    fn join_inner(&mut self, a: NodeId, b: NodeId) {
        if !edge_adjacent(self.node(a).rect, self.node(b).rect) {
            return;
        }
        if let Some(children) = self.node(a).children {
            for child in children {
                self.join_inner(child, b);
            }
        } else if self.node(b).children.is_none() {
            self.link_neighbors(a, b);
        } else {
            // `a` is a leaf; descend into `b`'s children instead.
            self.join_inner(b, a);
        }
    }

    /// Release transient sample storage throughout the subtree at `id`.
    ///
    /// Leaves keep their rectangle, bin, and neighbor set; only the samples
    /// are dropped. No-op on stale ids.
    pub fn finalize(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        let node = self.node_mut(id);
        node.samples = Vec::new();
        node.flags.insert(NodeFlags::FINALIZED);
        if let Some(children) = self.node(id).children {
            for child in children {
                self.finalize(child);
            }
        }
    }

    /// Remove the subtree rooted at `id`, children first.
    ///
    /// Severs every neighbor back-reference before freeing each slot, so no
    /// surviving node is left holding a stale handle. No-op on stale ids.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(children) = self.node(id).children {
            for child in children {
                self.remove(child);
            }
        }
        // Symmetry means the nodes referencing `id` are exactly its neighbors.
        let neighbors = core::mem::take(&mut self.node_mut(id).neighbors);
        for ne in neighbors {
            if self.is_alive(ne) {
                self.node_mut(ne).neighbors.retain(|n| *n != id);
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    // --- queries ---

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The rectangle owned by a node, if the id is live.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.rect)
    }

    /// The depth of a node (0 at roots), if the id is live.
    pub fn depth(&self, id: NodeId) -> Option<u8> {
        self.node_opt(id).map(|n| n.depth)
    }

    /// The recorded bin of a node.
    ///
    /// Only meaningful for a leaf that has received at least one sample;
    /// returns `None` otherwise.
    pub fn bin(&self, id: NodeId) -> Option<usize> {
        self.node_opt(id)
            .filter(|n| n.flags.contains(NodeFlags::SEEDED))
            .map(|n| n.bin)
    }

    /// True if `id` is live and has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| n.children.is_none())
    }

    /// The four children of an internal node, in quadrant order.
    pub fn children(&self, id: NodeId) -> Option<[NodeId; 4]> {
        self.node_opt(id).and_then(|n| n.children)
    }

    /// The current neighbor set of a node. Empty for stale ids.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(&[], |n| n.neighbors.as_slice())
    }

    /// Number of samples currently held by a node (zero after finalization).
    pub fn sample_count(&self, id: NodeId) -> usize {
        self.node_opt(id).map_or(0, |n| n.samples.len())
    }

    /// Node state flags, if the id is live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.flags)
    }

    /// Number of live nodes in the arena.
    pub fn alive_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Collect the leaves of the subtree rooted at `id`, depth-first.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(id, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        match self.node(id).children {
            Some(children) => {
                for child in children {
                    self.collect_leaves(child, out);
                }
            }
            None => out.push(id),
        }
    }

    // --- internals ---

    fn alloc(&mut self, rect: Rect, depth: u8) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, rect, depth));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, rect, depth)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    /// Link `a` and `b` as symmetric neighbors, once.
    ///
    /// Joining runs over every ordered root pair, so the same leaf pair can
    /// be offered twice; the symmetry invariant makes checking one side
    /// sufficient.
    fn link_neighbors(&mut self, a: NodeId, b: NodeId) {
        if !self.node(a).neighbors.contains(&b) {
            self.node_mut(a).neighbors.push(b);
            self.node_mut(b).neighbors.push(a);
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}
