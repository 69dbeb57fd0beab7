use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A read-only cursor over a `List`.
///
/// A `Cursor` is like an iterator that can be stopped, copied, compared and
/// resumed. It only moves forward.
///
/// In a list with length *n*, there are *n* + 2 locations for the cursor:
/// the ghost in front of the first node ("before start"), the *n* nodes,
/// and the end past the last node.
///
/// Cursors are compared by the node they are located at, never by the
/// elements.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost of the
/// list is denoted by `#`, and the end by `$`).
/// ```
/// use forward_list::List;
///
/// // Create a list: [# A B C $]
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor before start: [|# A B C $]
/// let mut cursor = list.cursor_before_start();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor forward: [# |A B C $]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Copies of a cursor move independently.
/// let mut copy = cursor;
/// assert!(copy.move_next().is_ok());
/// assert_eq!(copy.current(), Some(&'B'));
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Create a cursor in the end: [# A B C |$]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    before_start: bool,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// A cursor located nowhere, which only equals end cursors.
///
/// # Examples
/// ```
/// use forward_list::{Cursor, List};
///
/// let list = List::from([1, 2, 3]);
/// let cursor: Cursor<'_, i32> = Cursor::default();
/// assert!(cursor == list.cursor_end());
/// assert!(cursor != list.cursor_start());
/// ```
impl<'a, T: 'a> Default for Cursor<'a, T> {
    fn default() -> Self {
        Self {
            current: None,
            before_start: false,
            _marker: PhantomData,
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a [`Cursor`], except that it can insert or erase
/// the node right after its position. The lifetime of its yielded references
/// is tied to its own lifetime instead of the underlying list.
///
/// [`CursorMut::view`] temporarily borrows the whole list back.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    before_start: bool,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The node the cursor is located at, if it is neither the ghost
            /// nor the end.
            pub(crate) fn current_node(&self) -> Option<NonNull<Node<T>>> {
                if self.before_start {
                    return None;
                }
                self.current.map(NonNull::cast)
            }
            pub(crate) fn next_node(&self) -> Option<NonNull<Node<T>>> {
                // SAFETY: a cursor not at the end is located at a live link
                // of the list it borrows.
                self.current.and_then(|link| unsafe { link.as_ref().next })
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is past the last node.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the cursor is at the ghost, in front of the
            /// first node.
            pub fn is_before_start(&self) -> bool {
                self.before_start
            }

            /// Move the cursor to the next position, or return an error if it
            /// is already at the end. The cursor stays put on error.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1]);
            /// let mut cursor = list.cursor_before_start();
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert_eq!(cursor.current(), Some(&1));
            /// assert!(cursor.move_next().is_ok());
            /// assert!(cursor.is_end());
            ///
            /// // Forbid to move past the end
            /// assert!(cursor.move_next().is_err());
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_end() {
                    return Err("`move_next` past the end of the list");
                }
                self.current = self.next_node().map(NonNull::cast);
                self.before_start = false;
                Ok(())
            }
        }

        impl<'a, 'b, T: 'a> PartialEq<Cursor<'b, T>> for $CURSOR<'a, T> {
            fn eq(&self, other: &Cursor<'b, T>) -> bool {
                self.current == other.current
            }
        }

        impl<'a, 'b, T: 'a> PartialEq<CursorMut<'b, T>> for $CURSOR<'a, T> {
            fn eq(&self, other: &CursorMut<'b, T>) -> bool {
                self.current == other.current
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("before_start", &self.before_start)
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        _list: &'a List<T>,
        current: Option<NonNull<Link<T>>>,
        before_start: bool,
    ) -> Self {
        Self {
            current,
            before_start,
            _marker: PhantomData,
        }
    }

    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is before start or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(list.cursor_before_start().current(), None);
    /// assert_eq!(list.cursor_start().current(), Some(&1));
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: a non-ghost node holds a valid element, and the list is
        // borrowed for `'a`.
        self.current_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a reference to the element after the cursor, or `None` if the
    /// cursor is at the last node or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(list.cursor_before_start().peek_next(), Some(&1));
    /// assert_eq!(list.cursor_start().peek_next(), Some(&2));
    /// assert_eq!(list.cursor_end().peek_next(), None);
    /// ```
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: the next node is never the ghost.
        self.next_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: Option<NonNull<Link<T>>>,
        before_start: bool,
    ) -> Self {
        Self {
            current,
            before_start,
            list,
        }
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is before start or at the end.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: a non-ghost node holds a valid element.
        self.current_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a mutable reference to the element at the cursor, or `None` if
    /// the cursor is before start or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost.
    /// assert!(list.cursor_before_start_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-ghost node holds a valid element, and the list is
        // borrowed mutably through the cursor.
        self.current_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Return a reference to the element after the cursor, or `None` if
    /// nothing follows the cursor.
    pub fn peek_next(&self) -> Option<&T> {
        // SAFETY: the next node is never the ghost.
        self.next_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Return a read-only cursor at the same position, which borrows this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.before_start)
    }

    /// Convert into a read-only cursor at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert_after(4);
    ///
    /// let cursor = cursor.into_cursor();
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    /// ```
    pub fn into_cursor(self) -> Cursor<'a, T> {
        let CursorMut {
            current,
            before_start,
            list,
        } = self;
        Cursor::new(list, current, before_start)
    }

    /// Provides a read-only view of the list the cursor borrows.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 3]);
    /// let mut cursor = list.cursor_before_start_mut();
    /// cursor.insert_after(1);
    /// assert_eq!(cursor.view(), &List::from([1, 2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert a new element right after the cursor, and move the cursor onto
    /// the inserted node.
    ///
    /// The cursor may be before start, where the element becomes the new
    /// first one.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert_after(9); // becomes [1, 9, 2, 3], points to 9
    /// assert_eq!(cursor.current(), Some(&9));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    ///
    /// assert_eq!(list.len(), 4);
    /// assert_eq!(list, List::from([1, 9, 2, 3]));
    /// ```
    pub fn insert_after(&mut self, item: T) {
        let anchor = match self.current {
            Some(anchor) => anchor,
            None => panic!("Cannot insert after the end of the list"),
        };
        // SAFETY: `anchor` is a live link of the list the cursor borrows.
        let node = unsafe { self.list.attach_after(anchor, item) };
        self.current = Some(node.cast());
        self.before_start = false;
    }

    /// Erase the node right after the cursor and return its element, or
    /// return `None` if the cursor is at the end or nothing follows it.
    ///
    /// The cursor stays put, and the node that followed the erased one (if
    /// any) becomes the next one.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.erase_after(), Some(2)); // becomes [1, 3]
    /// assert_eq!(cursor.peek_next(), Some(&3));
    /// assert_eq!(cursor.erase_after(), Some(3)); // becomes [1]
    /// assert_eq!(cursor.erase_after(), None);
    ///
    /// assert_eq!(list, List::from([1]));
    /// ```
    pub fn erase_after(&mut self) -> Option<T> {
        let anchor = self.current?;
        // SAFETY: `anchor` is a live link of the list the cursor borrows.
        unsafe { self.list.detach_after(anchor) }.map(Node::into_element)
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::cursor::Cursor;
    use crate::List;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn cursor_move_next() {
        let list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_before_start();
        assert!(cursor.is_before_start());
        assert!(!cursor.is_end());

        for expected in 1..=3 {
            assert!(cursor.move_next().is_ok());
            assert!(!cursor.is_before_start());
            assert_eq!(cursor.current(), Some(&expected));
        }
        assert!(cursor.move_next().is_ok());
        assert!(cursor.is_end());
        assert!(cursor == list.cursor_end());
        assert!(cursor.move_next().is_err());
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_identity() {
        let list = List::from([7, 7, 7]);
        let first = list.cursor_start();
        let mut second = first;
        assert!(second.move_next().is_ok());
        // Same elements, different nodes.
        assert_eq!(first.current(), second.current());
        assert!(first != second);

        let other = List::from([7, 7, 7]);
        assert!(list.cursor_start() != other.cursor_start());
        assert!(list.cursor_before_start() != list.cursor_start());
        // Every end is the same position.
        assert!(list.cursor_end() == other.cursor_end());
        assert!(Cursor::<i32>::default() == list.cursor_end());
    }

    #[test]
    fn cursor_multi_pass() {
        let list = List::from([1, 2, 3, 4]);
        fn collect(mut cursor: Cursor<'_, i32>) -> Vec<i32> {
            let mut items = Vec::new();
            while let Some(item) = cursor.current() {
                items.push(*item);
                cursor.move_next().unwrap();
            }
            items
        }
        let saved = list.cursor_start();
        assert_eq!(collect(saved), vec![1, 2, 3, 4]);
        assert_eq!(collect(saved), vec![1, 2, 3, 4]);
        assert_eq!(saved.current(), Some(&1));
    }

    #[test]
    fn cursor_mut_compares_with_cursor() {
        let mut list = List::from([1, 2]);
        let cursor = list.cursor_start_mut();
        let read_only = cursor.as_cursor();
        assert!(cursor == read_only);
        assert!(read_only == cursor);
        assert!(cursor != Cursor::<i32>::default());

        let mut cursor = list.cursor_end_mut();
        assert!(cursor == Cursor::<i32>::default());
        assert!(cursor.move_next().is_err());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.erase_after(), None);
    }

    #[test]
    fn cursor_insert_after() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        cursor.insert_after(9);
        assert_eq!(cursor.current(), Some(&9));
        assert_eq!(to_vec(&list), vec![1, 9, 2, 3]);
        assert_eq!(list.len(), 4);

        // Inserting repeatedly from the ghost keeps the order.
        let mut list = List::new();
        let mut cursor = list.cursor_before_start_mut();
        for item in 0..5 {
            cursor.insert_after(item);
        }
        assert_eq!(cursor.view().len(), 5);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);

        // Inserting after the last node appends.
        let mut cursor = list.cursor_start_mut();
        while cursor.peek_next().is_some() {
            cursor.move_next().unwrap();
        }
        cursor.insert_after(5);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "Cannot insert after the end of the list")]
    fn cursor_insert_after_end() {
        let mut list = List::from([1, 2, 3]);
        list.cursor_end_mut().insert_after(4);
    }

    #[test]
    #[should_panic(expected = "Cannot insert after the end of the list")]
    fn cursor_insert_after_end_of_empty() {
        let mut list = List::new();
        list.cursor_start_mut().insert_after(1);
    }

    #[test]
    fn cursor_erase_after() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_before_start_mut();
        assert_eq!(cursor.erase_after(), Some(1));
        assert!(cursor.is_before_start());
        // The same as popping the front and then starting over.
        let mut popped = List::from([1, 2, 3]);
        popped.pop_front();
        assert_eq!(cursor.peek_next(), popped.cursor_start().current());
        assert_eq!(list.len(), 2);

        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.erase_after(), Some(3));
        assert_eq!(cursor.erase_after(), None);
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(to_vec(&list), vec![2]);
        assert_eq!(list.len(), 1);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.cursor_before_start_mut().erase_after(), None);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn cursor_into_cursor() {
        let mut list = List::from(["a", "b"]);
        let mut cursor = list.cursor_before_start_mut();
        cursor.move_next().unwrap();
        let read_only: Cursor<'_, &str> = cursor.into();
        assert_eq!(read_only.current(), Some(&"a"));
        assert_eq!(read_only.peek_next(), Some(&"b"));
        assert!(!read_only.is_before_start());
    }
}
