//! Linked list containers.
//!
//! [`forward::ForwardList`] is a singly linked list that owns its nodes. It is
//! headed by a sentinel link, so every position in the list, including the
//! one before the first element, supports O(1) insertion and removal of the
//! element that follows it.
//!
//! # Examples
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! // Insert 99 after the element 2.
//! let mut cursor = list.cursor_front_mut();
//! cursor.move_next();
//! assert_eq!(cursor.current(), Some(&2));
//! cursor.insert_after(99);
//! assert_eq!(cursor.current(), Some(&99));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 99, 3]);
//!
//! // Remove the first element through the before-begin position.
//! assert_eq!(list.before_begin_mut().erase_after(), Some(1));
//! assert_eq!(list, ForwardList::from([2, 99, 3]));
//! ```
pub mod forward;
