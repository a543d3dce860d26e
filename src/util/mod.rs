//! Capacity arithmetic for the implicit layout

/// Logical capacity P: smallest power of two ≥ `len`
///
/// An empty sequence still maps to one leaf; construction rejects it first.
#[inline]
pub fn logical_capacity(len: usize) -> usize {
    len.next_power_of_two()
}

/// Backing array size 2P - 1 for a complete tree with `capacity` leaves
#[inline]
pub fn backing_len(capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    2 * capacity - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rounds_up() {
        assert_eq!(logical_capacity(1), 1);
        assert_eq!(logical_capacity(6), 8);
        assert_eq!(logical_capacity(8), 8);
        assert_eq!(logical_capacity(9), 16);
    }

    #[test]
    fn test_backing_len() {
        assert_eq!(backing_len(1), 1);
        assert_eq!(backing_len(8), 15);
    }
}
