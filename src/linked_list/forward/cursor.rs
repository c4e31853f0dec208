use core::{fmt, ptr::NonNull};

use super::{
    link::SingleLink,
    list::ForwardList,
    node::Node,
    traits::Link,
};

/// A position in a list: the sentinel, a node, or one past the last node.
///
/// Shared by [`Cursor`] and [`CursorMut`].
pub(super) enum Position<T> {
    BeforeBegin,
    At(NonNull<Node<T>>),
    End,
}

impl<T> Position<T> {
    #[inline]
    pub(super) fn from_link(link: Option<NonNull<SingleLink>>) -> Self {
        link.map_or(Position::End, |link| Position::At(Node::from_link(link)))
    }

    /// The position following this one. The end position is its own successor.
    #[inline]
    fn successor(self, list: &ForwardList<T>) -> Self {
        match self {
            Position::BeforeBegin => Position::from_link(list.head.next()),
            Position::At(node) => Position::from_link(unsafe { node.as_ref() }.next()),
            Position::End => Position::End,
        }
    }

    #[inline]
    fn node(self) -> Option<NonNull<Node<T>>> {
        match self {
            Position::At(node) => Some(node),
            _ => None,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::BeforeBegin, Position::BeforeBegin) => true,
            (Position::At(a), Position::At(b)) => a == b,
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

/// A read-only position in a [`ForwardList`].
///
/// Two cursors are equal when they reference the same position of the same
/// list. The cursor borrows the list, so the node it references stays alive
/// for as long as the cursor does.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a ForwardList<T>, position: Position<T>) -> Self {
        Self { list, position }
    }

    /// Returns the element at the cursor, or `None` at the sentinel or the end.
    pub fn current(&self) -> Option<&'a T> {
        self.position
            .node()
            .map(|node| unsafe { Node::data_ref(node) })
    }

    /// Returns the element after the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.position
            .successor(self.list)
            .node()
            .map(|node| unsafe { Node::data_ref(node) })
    }

    /// Advances to the next position. Moving past the end position is a no-op.
    pub fn move_next(&mut self) {
        self.position = self.position.successor(self.list);
    }

    /// Returns `true` if the cursor is at the sentinel.
    pub fn is_before_begin(&self) -> bool {
        self.position == Position::BeforeBegin
    }

    /// Returns `true` if the cursor is one past the last element.
    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

/// A position in a [`ForwardList`] that can insert and erase the element
/// following it.
///
/// Insertion and erasure only touch the links around the cursor; no other
/// node moves.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut ForwardList<T>, position: Position<T>) -> Self {
        Self { list, position }
    }

    /// Returns the element at the cursor, or `None` at the sentinel or the end.
    pub fn current(&self) -> Option<&T> {
        self.position
            .node()
            .map(|node| unsafe { Node::data_ref(node) })
    }

    /// Returns a mutable reference to the element at the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.position
            .node()
            .map(|node| unsafe { Node::data_mut_ref(node) })
    }

    /// Returns the element after the cursor, if any.
    pub fn peek_next(&self) -> Option<&T> {
        self.position
            .successor(self.list)
            .node()
            .map(|node| unsafe { Node::data_ref(node) })
    }

    /// Returns a mutable reference to the element after the cursor, if any.
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        self.position
            .successor(self.list)
            .node()
            .map(|node| unsafe { Node::data_mut_ref(node) })
    }

    /// Advances to the next position. Moving past the end position is a no-op.
    pub fn move_next(&mut self) {
        self.position = self.position.successor(self.list);
    }

    /// Returns `true` if the cursor is at the sentinel.
    pub fn is_before_begin(&self) -> bool {
        self.position == Position::BeforeBegin
    }

    /// Returns `true` if the cursor is one past the last element.
    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.position)
    }

    /// Inserts `value` directly after the cursor and moves the cursor onto
    /// the new element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position, which has no successor
    /// link to insert into.
    pub fn insert_after(&mut self, value: T) {
        assert!(!self.is_end(), "cannot insert after the end position");

        let node = Node::alloc(value);
        let link = self.link_mut();
        unsafe { link.splice_after(Node::as_link(node)) };
        self.list.len += 1;
        self.position = Position::At(node);
    }

    /// Removes the element directly after the cursor and returns it.
    ///
    /// The cursor does not move; afterwards [`peek_next`](Self::peek_next)
    /// yields the element that followed the removed one. Returns `None`, and
    /// changes nothing, when there is no element after the cursor.
    pub fn erase_after(&mut self) -> Option<T> {
        if self.is_end() {
            return None;
        }

        let link = self.link_mut();
        let erased = unsafe { link.unsplice_after() }?;
        debug_assert!(self.list.len > 0, "element count out of sync with chain");
        self.list.len -= 1;
        Some(unsafe { Node::free(Node::from_link(erased)) })
    }

    /// The link owned by the current position. Must not be called at the end.
    fn link_mut(&mut self) -> &mut SingleLink {
        match self.position {
            Position::BeforeBegin => &mut self.list.head,
            Position::At(node) => unsafe { Node::link_mut(node) },
            Position::End => unreachable!("the end position owns no link"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current()).finish()
    }
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
