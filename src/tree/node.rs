//! Implicit tree node representation
//!
//! Node = (array index, interval [left, right]) ⊆ [0, P-1]
//! Children computed via midpoint: m = ⌊(left + right) / 2⌋
//!   Left child: [left, m] at index 2i+1
//!   Right child: [m+1, right] at index 2i+2

/// Tree node (implicit - an array slot and the interval it covers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeNode {
    /// Position in the backing array
    pub(crate) index: usize,

    /// Left sequence index (inclusive)
    pub(crate) left: usize,

    /// Right sequence index (inclusive)
    pub(crate) right: usize,
}

impl TreeNode {
    /// Create root at index 0 spanning [0, capacity - 1]
    pub(crate) fn root(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "root needs at least one leaf");
        Self {
            index: 0,
            left: 0,
            right: capacity - 1,
        }
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// Compute midpoint for split
    #[inline]
    pub(crate) fn midpoint(&self) -> usize {
        (self.left + self.right) / 2
    }

    /// Array indices of the two children
    #[inline]
    pub(crate) fn child_indices(&self) -> (usize, usize) {
        (self.index * 2 + 1, self.index * 2 + 2)
    }

    /// Get children via midpoint split
    ///
    /// Returns: ([left, mid], [mid+1, right])
    pub(crate) fn children(&self) -> (TreeNode, TreeNode) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        let (left_index, right_index) = self.child_indices();
        let left_child = TreeNode {
            index: left_index,
            left: self.left,
            right: mid,
        };
        let right_child = TreeNode {
            index: right_index,
            left: mid + 1,
            right: self.right,
        };

        (left_child, right_child)
    }

    /// No overlap with [l, r]
    #[inline]
    pub(crate) fn is_disjoint(&self, l: usize, r: usize) -> bool {
        self.right < l || r < self.left
    }

    /// Fully inside [l, r]
    #[inline]
    pub(crate) fn is_within(&self, l: usize, r: usize) -> bool {
        l <= self.left && self.right <= r
    }
}
