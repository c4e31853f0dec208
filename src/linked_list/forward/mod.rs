//! # Forward List
//!
//! An owning singly linked list with a sentinel head.
//!
//! ## Core Components
//!
//! - `traits`: The `Link` and `NodeWithData` traits shared by the sentinel and the nodes.
//! - `link::SingleLink`: The successor link. The list embeds one as its sentinel.
//! - `node::Node`: The heap node, a link followed by its element.
//! - [`list::ForwardList`]: The container itself.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: Positions in the list, including before-begin and end.
//! - [`iter`]: Forward iterators over shared, mutable and owned elements.
//!
//! ## Safety
//!
//! Nodes are allocated with `Box` and linked with raw pointers. The list is the
//! sole owner of its chain:
//!
//! - Every node reachable from the sentinel was produced by `Node::alloc` and is
//!   released exactly once, by `pop_front`, `erase_after` or `clear`.
//! - A node is never part of two chains.
//! - Cursors and iterators borrow the list, so a node cannot be erased while a
//!   position pointing to it is alive.
//! - The raw link layer (`traits`, `link`, `node`) is private to the crate.
//!   Rewiring a link is safe to call but only sound under the rules above, so
//!   the only way in from outside is through the list and its cursors.

pub(crate) mod traits;
pub(crate) mod link;
pub(crate) mod node;
pub mod list;
pub mod cursor;
pub mod iter;
mod impls;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;
