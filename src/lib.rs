//! This crate provides a singly-linked list with owned nodes and a sentinel
//! head, edited through cursors.
//!
//! The [`List`] allows inserting and removing elements at the front, or right
//! after any cursor position, in constant time. In compromise, it can only be
//! traversed forward, and reaching an element at any position takes *O*(*n*)
//! time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert_after(9); // insert 9 after 1, the cursor moves onto 9
//! assert_eq!(cursor.current(), Some(&9));
//! assert_eq!(cursor.view(), &List::from([1, 9, 2, 3]));
//!
//! assert_eq!(cursor.erase_after(), Some(2)); // erase the node after 9
//! assert_eq!(cursor.view(), &List::from([1, 9, 3]));
//!
//! list.push_front(0); // pushing front to the list is also allowed
//! assert_eq!(list, List::from([0, 1, 9, 3]));
//! assert_eq!(list.len(), 4);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   (Ghost) Link
//!    ┌───────────┐           ╔═══════════╗           ╔═══════════╗
//!    │   next    │ ────────→ ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──→ (end)
//!    └───────────┘           ╟───────────╢           ╟───────────╢
//!          ↑                 ║ payload T ║           ║ payload T ║
//!          │                 ╚═══════════╝           ╚═══════════╝
//!          │                     Node 0                  Node 1
//! ╔═══════════╗
//! ║   ghost   ║
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost link;
//! - a length field `len` counting the nodes, so that the length is known in
//!   *O*(1) time.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next node, or nothing if it is the
//!   last node;
//! - the actual payload `T`.
//!
//! The ghost is a bare link without payload. It is never counted, and lives
//! as long as the list. Its `next` pointer points to the first node, or
//! nothing if the list is empty.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are forward, exact-size and fused iterators. [`IterMut`] provides mutability
//! of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] are handles to a
//! position in the list. In a list with length *n*, there are *n* + 2
//! positions: the ghost ("before start"), the *n* nodes, and the end.
//!
//! Cursors only move forward. They are compared by position, not by element,
//! and a [`CursorMut`] can be compared with a [`Cursor`] or turned into one.
//!
//! [`CursorMut`] edits the list right after its position:
//! - [`insert_after`]: insert a new node after the cursor and move onto it;
//! - [`erase_after`]: erase the node after the cursor.
//!
//! A cursor before start is the anchor to edit the front of the list, the same
//! way as any other node.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([2, 4]);
//!
//! let mut cursor = list.cursor_before_start_mut();
//! cursor.insert_after(1); // becomes [1, 2, 4], points to 1
//! assert!(cursor.move_next().is_ok()); // points to 2
//! cursor.insert_after(3); // becomes [1, 2, 3, 4], points to 3
//!
//! let mut cursor = list.cursor_before_start_mut();
//! assert_eq!(cursor.erase_after(), Some(1)); // becomes [2, 3, 4]
//!
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`erase_after`]: crate::list::cursor::CursorMut::erase_after

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{CursorIter, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;
