use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Two lists are equal if they have the same length and pairwise equal
/// elements in the same order.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lists are ordered lexicographically by their elements.
///
/// `<`, `<=`, `>` and `>=` are all derived from this single comparison,
/// so they always agree with each other.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let a = List::from([1, 2, 3]);
/// let b = List::from([1, 2, 4]);
/// assert!(a < b);
/// assert!(a <= b);
/// assert!(!(a > b));
/// assert!(!(b <= a));
///
/// // A proper prefix is less.
/// assert!(List::from([1, 2]) < a);
/// ```
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: `other` is copied into a temporary list first, so
    /// `self` is left untouched if cloning any element panics.
    fn clone_from(&mut self, other: &Self) {
        self.assign(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{self, AssertUnwindSafe};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        assert_eq!(List::from([1, 2, 3]), List::from([1, 2, 3]));
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2]));
        assert_ne!(List::from([1, 2, 3]), List::from([3, 2, 1]));
        assert_eq!(List::<i32>::new(), List::from([]));
    }

    #[test]
    fn list_lexicographic_order() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 4]);
        assert!(a < b);
        assert!(a <= b);
        assert!(!(a > b));
        assert!(!(b <= a));
        assert!(b >= a);
        assert_eq!(a.cmp(&b), Ordering::Less);

        let empty = List::new();
        assert!(empty < a);
        assert!(List::from([1, 2]) < a);
        assert!(List::from([2]) > a);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
    }

    #[test]
    fn list_partial_order() {
        let a = List::from([1.0, f64::NAN]);
        let b = List::from([1.0, f64::NAN]);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a <= b) && !(a > b) && !(a >= b));

        // The first difference decides before any NaN is reached.
        let c = List::from([0.0, f64::NAN]);
        assert!(c < a);
    }

    #[test]
    fn list_clone() {
        let a = List::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);

        b.push_front(0);
        *b.front_mut().unwrap() = 7;
        b.cursor_start_mut().erase_after();
        assert_eq!(a, List::from([1, 2, 3]));
        assert_eq!(b, List::from([7, 2, 3]));

        b.clone_from(&a);
        assert_eq!(b, a);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn list_clone_from_keeps_list_on_panic() {
        struct Fragile<'a> {
            value: i32,
            clones_left: &'a Cell<usize>,
        }
        impl Clone for Fragile<'_> {
            fn clone(&self) -> Self {
                let left = self.clones_left.get();
                if left == 0 {
                    panic!("out of clones");
                }
                self.clones_left.set(left - 1);
                Fragile {
                    value: self.value,
                    clones_left: self.clones_left,
                }
            }
        }

        let clones_left = Cell::new(0);
        let source: List<_> = (0..4)
            .map(|value| Fragile {
                value,
                clones_left: &clones_left,
            })
            .collect();
        let mut target: List<_> = (10..12)
            .map(|value| Fragile {
                value,
                clones_left: &clones_left,
            })
            .collect();

        clones_left.set(2);
        let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target.len(), 2);
        assert_eq!(target.iter().map(|f| f.value).collect::<Vec<_>>(), vec![10, 11]);

        clones_left.set(4);
        target.clone_from(&source);
        assert_eq!(target.iter().map(|f| f.value).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn list_hash() {
        let a = List::from([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_eq!(hash_of(&List::<i32>::new()), hash_of(&List::<i32>::new()));
    }

    #[test]
    fn list_contains() {
        let list = List::from(["a", "b"]);
        assert!(list.contains(&"a"));
        assert!(!list.contains(&"c"));
        assert!(!List::new().contains(&0));
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::List;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn to_list<T: Clone>(values: &[T]) -> List<T> {
        values.iter().cloned().collect()
    }

    proptest! {
        #[test]
        fn order_is_consistent(x in prop::collection::vec(0u8..4, 0..6), y in prop::collection::vec(0u8..4, 0..6)) {
            let (a, b) = (to_list(&x), to_list(&y));
            let holds = [a < b, a == b, b < a];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
            prop_assert_eq!(a <= b, !(b < a));
            prop_assert_eq!(a > b, b < a);
            prop_assert_eq!(a >= b, !(a < b));
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        }

        #[test]
        fn traversal_reproduces_sequence(x in prop::collection::vec(any::<i64>(), 0..32)) {
            let list = to_list(&x);
            prop_assert_eq!(list.len(), x.len());
            prop_assert!(list.iter().eq(x.iter()));
            prop_assert_eq!(list.clone().cmp(&list), Ordering::Equal);
        }
    }
}
