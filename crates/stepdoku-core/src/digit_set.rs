//! Sets of sudoku digits 1-9.

use std::{iter::FusedIterator, ops};

/// A set of digits 1-9, backed by a 16-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. Used for candidate sets and
/// for duplicate detection during validation.
///
/// # Examples
///
/// ```
/// use stepdoku_core::DigitSet;
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
///
/// # Set Operations
///
/// ```
/// use stepdoku_core::DigitSet;
///
/// let a = DigitSet::from_iter([1, 2, 3]);
/// let b = DigitSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a & b, DigitSet::from_iter([2, 3]));
/// assert_eq!(a | b, DigitSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([1]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn mask(digit: u8) -> u16 {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Inserts a digit into the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn insert(&mut self, digit: u8) {
        self.bits |= Self::mask(digit);
    }

    /// Removes a digit from the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn remove(&mut self, digit: u8) {
        self.bits &= !Self::mask(digit);
    }

    /// Returns `true` if the set contains `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.bits & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the digits present in both `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits present in either `self` or `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepdoku_core::DigitSet;
    ///
    /// let set = DigitSet::from_iter([9, 1, 5]);
    /// let digits: Vec<_> = set.iter().collect();
    /// assert_eq!(digits, vec![1, 5, 9]);
    /// ```
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(index + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(1);
        set.insert(9);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(5));

        set.remove(1);
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op.
        set.remove(4);
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9, got 0")]
    fn test_rejects_zero() {
        let mut set = DigitSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9, got 10")]
    fn test_rejects_ten() {
        let mut set = DigitSet::new();
        set.insert(10);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in 1..=9 {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([1, 2, 3]);
        let b = DigitSet::from_iter([2, 3, 4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_iter([1]));
        assert_eq!(DigitSet::FULL.difference(DigitSet::FULL), DigitSet::EMPTY);
    }
}
