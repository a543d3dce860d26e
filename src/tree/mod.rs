//! Array-backed range aggregation tree
//!
//! Complete binary tree over the input padded to P = N.next_power_of_two()
//! leaves, stored implicitly in 2P - 1 slots. All three walks (build,
//! query, assign) recurse from the root along midpoint splits, so
//! recursion depth is log2(P) + 1.
//!
//! Sharing across threads is left to the caller: queries take `&self` and
//! updates `&mut self`, so wrapping the tree in a `RwLock` is sufficient.

mod node;
mod traversal;

use node::TreeNode;
pub use traversal::{Dump, Slot};

use std::fmt;
use std::ops::{Add, Bound, RangeBounds};

use tracing::{debug, trace};

use crate::algebra::{Combiner, Sum, Zero};
use crate::util::{backing_len, logical_capacity};
use crate::TreeError;

/// Segment tree answering range aggregates and point updates in O(log N)
pub struct RangeAggregationTree<C: Combiner> {
    combiner: C,

    /// Implicit tree, node i has children 2i+1 and 2i+2
    nodes: Vec<C::Aggregate>,

    /// Length N of the original sequence
    len: usize,

    /// Logical capacity P (leaf count)
    capacity: usize,
}

impl<T> RangeAggregationTree<Sum<T>>
where
    T: Zero + Clone + Add<Output = T>,
{
    /// Build a sum tree (the default operation)
    pub fn new(values: &[T]) -> Result<Self, TreeError> {
        Self::with_combiner(values, Sum::new())
    }
}

impl<C: Combiner> RangeAggregationTree<C> {
    /// Build a tree over `values` aggregated by `combiner`
    ///
    /// Fails with [`TreeError::EmptySequence`] if `values` is empty.
    pub fn with_combiner(values: &[C::Element], combiner: C) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::EmptySequence);
        }

        let capacity = logical_capacity(values.len());
        let mut tree = Self {
            nodes: vec![combiner.identity(); backing_len(capacity)],
            combiner,
            len: values.len(),
            capacity,
        };
        tree.build(values, TreeNode::root(capacity));

        debug!(len = tree.len, capacity, "built range aggregation tree");
        Ok(tree)
    }

    /// Aggregate over the inclusive range `[l, r]`
    ///
    /// Requires `l <= r < len()`, otherwise [`TreeError::InvalidRange`].
    pub fn query(&self, l: usize, r: usize) -> Result<C::Aggregate, TreeError> {
        if l > r || r >= self.len {
            return Err(TreeError::InvalidRange {
                left: l,
                right: r,
                len: self.len,
            });
        }
        Ok(self.query_node(l, r, self.root()))
    }

    /// [`query`](Self::query) with Rust range syntax, e.g. `tree.query_range(2..5)`
    pub fn query_range<R: RangeBounds<usize>>(&self, range: R) -> Result<C::Aggregate, TreeError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            // Excluded(usize::MAX) starts past every index
            Bound::Excluded(&s) => s.checked_add(1).ok_or(TreeError::InvalidRange {
                left: s,
                right: s,
                len: self.len,
            })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e,
            Bound::Excluded(&e) => e.checked_sub(1).ok_or(TreeError::InvalidRange {
                left: start,
                right: e,
                len: self.len,
            })?,
            Bound::Unbounded => self.len - 1,
        };

        self.query(start, end)
    }

    /// Aggregate over the whole sequence (the root)
    pub fn total(&self) -> &C::Aggregate {
        &self.nodes[0]
    }

    /// Replace the element at `pos`
    ///
    /// Touches only the root-to-leaf path; all other positions are unaffected.
    pub fn update(&mut self, pos: usize, element: C::Element) -> Result<(), TreeError> {
        self.check_position(pos)?;
        let value = self.combiner.lift(&element);
        self.assign(pos, value, self.root());
        trace!(position = pos, "updated element");
        Ok(())
    }

    /// Remove the contribution of `pos` by resetting it to the identity
    ///
    /// The sequence keeps its length; later queries treat the slot as absent.
    pub fn delete(&mut self, pos: usize) -> Result<(), TreeError> {
        self.check_position(pos)?;
        let identity = self.combiner.identity();
        self.assign(pos, identity, self.root());
        trace!(position = pos, "deleted element");
        Ok(())
    }

    /// Leaf aggregate for `pos`
    pub fn get(&self, pos: usize) -> Result<&C::Aggregate, TreeError> {
        self.check_position(pos)?;
        Ok(&self.nodes[self.capacity - 1 + pos])
    }

    /// Lazily walk every backing-array slot with its index
    pub fn dump(&self) -> Dump<'_, C::Aggregate> {
        Dump::new(&self.nodes)
    }

    /// The backing array, root first
    pub fn as_slice(&self) -> &[C::Aggregate] {
        &self.nodes
    }

    /// Length N of the original sequence
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; empty trees cannot be built
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical capacity P: leaf count after padding
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Combine operation this tree aggregates with
    pub fn combiner(&self) -> &C {
        &self.combiner
    }

    fn root(&self) -> TreeNode {
        TreeNode::root(self.capacity)
    }

    fn check_position(&self, pos: usize) -> Result<(), TreeError> {
        if pos >= self.len {
            return Err(TreeError::PositionOutOfRange {
                position: pos,
                len: self.len,
            });
        }
        Ok(())
    }

    fn build(&mut self, values: &[C::Element], node: TreeNode) {
        if node.is_leaf() {
            // Leaves past the input are padding
            self.nodes[node.index] = match values.get(node.left) {
                Some(element) => self.combiner.lift(element),
                None => self.combiner.identity(),
            };
            return;
        }

        let (left, right) = node.children();
        self.build(values, left);
        self.build(values, right);
        self.pull(node);
    }

    fn query_node(&self, l: usize, r: usize, node: TreeNode) -> C::Aggregate {
        if node.is_disjoint(l, r) {
            return self.combiner.identity();
        }
        if node.is_within(l, r) {
            return self.nodes[node.index].clone();
        }

        let (left, right) = node.children();
        let left_value = self.query_node(l, r, left);
        let right_value = self.query_node(l, r, right);
        self.combiner.combine(&left_value, &right_value)
    }

    fn assign(&mut self, pos: usize, value: C::Aggregate, node: TreeNode) {
        if node.is_leaf() {
            self.nodes[node.index] = value;
            return;
        }

        let (left, right) = node.children();
        if pos <= node.midpoint() {
            self.assign(pos, value, left);
        } else {
            self.assign(pos, value, right);
        }
        self.pull(node);
    }

    /// Restore combine(left, right) at an internal node
    fn pull(&mut self, node: TreeNode) {
        let (left, right) = node.child_indices();
        self.nodes[node.index] = self.combiner.combine(&self.nodes[left], &self.nodes[right]);
    }
}

impl<C> Clone for RangeAggregationTree<C>
where
    C: Combiner + Clone,
{
    fn clone(&self) -> Self {
        Self {
            combiner: self.combiner.clone(),
            nodes: self.nodes.clone(),
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<C> fmt::Debug for RangeAggregationTree<C>
where
    C: Combiner + fmt::Debug,
    C::Aggregate: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeAggregationTree")
            .field("combiner", &self.combiner)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("nodes", &self.nodes)
            .finish()
    }
}

/// One line per backing slot, numbered from 1: `"{n}: {value}"`
impl<C> fmt::Display for RangeAggregationTree<C>
where
    C: Combiner,
    C::Aggregate: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.dump() {
            writeln!(f, "{}: {}", slot.index + 1, slot.value)?;
        }
        Ok(())
    }
}
