use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes and a sentinel head.
/// It allows inserting and removing elements at the front, or right after any
/// cursor position, in constant time. In compromise, reaching an element at
/// a given position takes *O*(*n*) time, and the list can only be traversed
/// forward.
///
/// The `List` contains:
/// - a pointer `ghost` to the sentinel link, which points to the first node;
/// - a length field `len` indicating the number of elements in the list.
///
/// # Naming Conventions
///
/// - `before start`: the sentinel position in front of the first node;
/// - `start..end`: the half-open range of real nodes, where `end` is the
///   position past the last node (no node at all).
pub struct List<T> {
    ghost: NonNull<Link<T>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// The link part of a node. The ghost of a list is a bare `Link` without
/// any payload.
pub(crate) struct Link<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
}

/// `link` must stay the first field, so that a pointer to a node is also a
/// valid pointer to its link.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) link: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `ghost` is allocated in `List::new` and freed only when
        // the list is dropped.
        unsafe { self.ghost.as_ref().next }
    }

    /// Returns the link of the last node, or the ghost link if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub(crate) fn back_link(&self) -> NonNull<Link<T>> {
        let mut link = self.ghost;
        // SAFETY: every link reachable from the ghost belongs to the list.
        while let Some(next) = unsafe { link.as_ref().next } {
            link = next.cast();
        }
        link
    }

    /// Attach a new node holding `element` right after the link `prev`, and
    /// return the new node.
    ///
    /// The node is allocated before any existing link is touched.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_after(
        &mut self,
        mut prev: NonNull<Link<T>>,
        element: T,
    ) -> NonNull<Node<T>> {
        let node = Node::new_detached(element, prev.as_ref().next);
        prev.as_mut().next = Some(node);
        self.len += 1;
        node
    }

    /// Detach the node right after the link `prev`, and return it as a box,
    /// or return `None` if nothing follows `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_after(&mut self, mut prev: NonNull<Link<T>>) -> Option<Box<Node<T>>> {
        let node = Box::from_raw(prev.as_ref().next?.as_ptr());
        prev.as_mut().next = node.link.next;
        self.len -= 1;
        Some(node)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = NonNull::from(Box::leak(Box::new(Link { next: None })));
        let _marker = PhantomData;
        Self {
            ghost,
            len: 0,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.front_node().is_none());
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// assert!(list.cursor_start() == list.cursor_end());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1]);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the front node is owned by the list, which is borrowed
        // mutably for the lifetime of the returned reference.
        self.front_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(5);
    /// list.push_front(6);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![6, 5]);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_before_start_mut().insert_after(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_before_start_mut().erase_after()
    }

    /// Swaps the contents of two lists.
    ///
    /// Only the lengths and the links of the two ghosts are exchanged, no
    /// node is touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut a = List::from([1, 2, 3]);
    /// let mut b = List::from([4]);
    ///
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from([4]));
    /// assert_eq!(b, List::from([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.len, &mut other.len);
        // SAFETY: the ghosts of two lists are distinct allocations, and both
        // lists are borrowed mutably.
        unsafe { std::mem::swap(&mut self.ghost.as_mut().next, &mut other.ghost.as_mut().next) }
    }

    /// Replaces the contents of the list with the elements of `iter`.
    ///
    /// The new elements are linked into a temporary list first, which is then
    /// swapped in. If `iter` panics halfway, the list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time, where *n* is the
    /// old length and *m* the number of new elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.assign(7..10);
    /// assert_eq!(list, List::from([7, 8, 9]));
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut rebuilt = iter.into_iter().collect::<List<T>>();
        self.swap(&mut rebuilt);
    }

    /// Provides a cursor at the ghost, in front of the first node.
    ///
    /// This is the anchor to insert or erase the first element through
    /// [`CursorMut::insert_after`] and [`CursorMut::erase_after`]. The
    /// cursor has no current element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_before_start();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert!(cursor == list.cursor_start());
    /// ```
    pub fn cursor_before_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.ghost), true)
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end of the list if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert!(empty.cursor_start() == empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node().map(NonNull::cast), false)
    }

    /// Provides a cursor past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert!(cursor.move_next().is_err());
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, false)
    }

    /// Provides a cursor with editing operations at the ghost, in front of
    /// the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 3]);
    /// let mut cursor = list.cursor_before_start_mut();
    /// cursor.insert_after(1);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn cursor_before_start_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost;
        CursorMut::new(self, Some(ghost), true)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node().map(NonNull::cast);
        CursorMut::new(self, front, false)
    }

    /// Provides a cursor with editing operations past the last node.
    ///
    /// Nothing can be inserted or erased through it, but it still compares
    /// with other cursors.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None, false)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a node that is not linked from anywhere yet.
    pub(crate) fn new_detached(element: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            link: Link { next },
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost is leaked from a box in `List::new`, and no
        // cursor can outlive the list.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::List;

    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn list_state_machine_test(sequential 1..100 => List<u32>);
    }

    /// Anchors are counted like positions in front of the nodes: `0` is the
    /// ghost, `k` is the `k`-th node.
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        InsertAfter(usize, u32),
        EraseAfter(usize),
        Clear,
        Assign(Vec<u32>),
    }

    pub struct ListStateMachine;

    impl ReferenceStateMachine for ListStateMachine {
        type State = Vec<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(Vec::new()).boxed()
        }

        fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
            let len = state.len();
            prop_oneof![
                3 => any::<u32>().prop_map(Transition::PushFront),
                1 => Just(Transition::PopFront),
                3 => (0..=len, any::<u32>()).prop_map(|(at, v)| Transition::InsertAfter(at, v)),
                2 => (0..=len).prop_map(Transition::EraseAfter),
                1 => Just(Transition::Clear),
                1 => prop::collection::vec(any::<u32>(), 0..8).prop_map(Transition::Assign),
            ]
            .boxed()
        }

        fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
            match transition {
                Transition::InsertAfter(at, _) | Transition::EraseAfter(at) => *at <= state.len(),
                _ => true,
            }
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PushFront(value) => state.insert(0, *value),
                Transition::PopFront => {
                    if !state.is_empty() {
                        state.remove(0);
                    }
                }
                Transition::InsertAfter(at, value) => state.insert(*at, *value),
                Transition::EraseAfter(at) => {
                    if *at < state.len() {
                        state.remove(*at);
                    }
                }
                Transition::Clear => state.clear(),
                Transition::Assign(values) => state = values.clone(),
            }
            state
        }
    }

    impl StateMachineTest for List<u32> {
        type SystemUnderTest = Self;
        type Reference = ListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            List::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfter(at, value) => {
                    let mut cursor = state.cursor_before_start_mut();
                    for _ in 0..at {
                        cursor.move_next().unwrap();
                    }
                    cursor.insert_after(value);
                    assert_eq!(cursor.current(), Some(&value));
                }
                Transition::EraseAfter(at) => {
                    let mut cursor = state.cursor_before_start_mut();
                    for _ in 0..at {
                        cursor.move_next().unwrap();
                    }
                    let follower = cursor.peek_next().copied();
                    assert_eq!(cursor.erase_after(), follower);
                }
                Transition::Clear => state.clear(),
                Transition::Assign(values) => state.assign(values),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());
            assert_eq!(state.iter().count(), state.len());
            assert_eq!(state.is_empty(), ref_state.is_empty());
            assert!(state.iter().eq(ref_state.iter()));
        }
    }
}
