use crate::list::cursor::Cursor;
use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            next: list.front_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: nodes reachable from the front are owned by the list,
        // which is borrowed for `'a`.
        let current = unsafe { &*self.next?.as_ptr() };
        self.next = current.link.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            next: list.front_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: nodes reachable from the front are owned by the list,
        // which is borrowed mutably for `'a`, and each node is yielded once.
        let current = unsafe { &mut *self.next?.as_ptr() };
        self.next = current.link.next;
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// `CursorIter` iterates from the position of a [`Cursor`] to the end of
/// the list. A cursor before start yields every element.
///
/// If you are looking for container-like iterators,
/// see [`Iter`] and [`IterMut`] for details.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start();
/// assert!(cursor.move_next().is_ok());
///
/// let rest: Vec<_> = cursor.into_iter().collect();
/// assert_eq!(rest, vec![&2, &3]);
///
/// // The cursor is `Copy`, so it can still be resumed.
/// assert_eq!(cursor.current(), Some(&2));
/// ```
#[derive(Clone, Debug)]
pub struct CursorIter<'a, T: 'a> {
    cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    /// Returns the cursor at the element that will be yielded next.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_before_start() {
            self.cursor.move_next().ok()?;
        }
        let current = self.cursor.current()?;
        self.cursor.move_next().ok()?;
        Some(current)
    }
}

impl<'a, T: 'a> FusedIterator for CursorIter<'a, T> {}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

/// Convert the cursor to an iterator from its position to the end.
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Build a list in a single forward pass, appending every element at the
/// tail link.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Build a list from a literal sequence.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// ```
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        List::from_iter(array)
    }
}

/// Append the elements after the last node.
///
/// Finding the last node takes *O*(*n*) time, then every element is linked
/// in *O*(1) time.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.back_link();
        for item in iter {
            // SAFETY: `tail` is always the last link of the list.
            tail = unsafe { self.attach_after(tail, item) }.cast();
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        fn test_case<T, I>(input: I)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T>,
        {
            let mut vec = Vec::from_iter(input);
            let mut list = List::from_iter(vec.clone());
            let len = vec.len();
            assert_eq!(list.len(), len);

            let mut iter = list.iter();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.len(), len - i);
                assert_eq!(iter.next(), Some(item));
            }
            assert_eq!(iter.len(), 0);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);

            let mut iter = list.iter_mut();
            for (i, item) in vec.iter_mut().enumerate() {
                assert_eq!(iter.len(), len - i);
                assert_eq!(iter.next(), Some(item));
            }
            assert_eq!(iter.next(), None);

            let cursor_items: Vec<T> = list.cursor_before_start().into_iter().cloned().collect();
            assert_eq!(cursor_items, vec);
            let cursor_items: Vec<T> = list.cursor_start().into_iter().cloned().collect();
            assert_eq!(cursor_items, vec);

            let mut iter = list.into_iter();
            assert_eq!(iter.len(), len);
            assert_eq!(Vec::from_iter(iter.by_ref()), vec);
            assert_eq!(iter.next(), None);
        }
        test_case(0..10);
        test_case(0..2);
        test_case(0..1);
        test_case(0..0);
        test_case(vec!["a", "b", "a"]);
    }

    #[test]
    fn test_iter_mut_modifies() {
        let mut list = List::from([1, 2, 3]);
        for item in &mut list {
            *item *= 2;
        }
        let mut sum = 0;
        for item in &list {
            sum += *item;
        }
        assert_eq!(sum, 12);
        assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
    }

    #[test]
    fn test_cursor_iter() {
        let list = List::from_iter(0..6);
        let mut cursor = list.cursor_start();
        cursor.move_next().unwrap();
        cursor.move_next().unwrap();
        let mut iter = cursor.into_iter();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        let resumed = iter.clone().into_cursor();
        assert_eq!(resumed.current(), Some(&4));
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.next(), None);
        assert!(iter.into_cursor() == list.cursor_end());

        assert_eq!(list.cursor_end().into_iter().next(), None);
        let empty = List::<i32>::new();
        assert_eq!(empty.cursor_before_start().into_iter().next(), None);
    }

    #[test]
    fn test_extend() {
        let mut list = List::from([1, 2]);
        list.extend(vec![3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(list.len(), 6);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5, 6]);

        let mut empty = List::<i32>::new();
        empty.extend(Some(1));
        assert_eq!(empty.front(), Some(&1));
        assert_eq!(empty.len(), 1);
    }
}
