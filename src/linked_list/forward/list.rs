use alloc::boxed::Box;
use core::{marker::PhantomData, ptr::NonNull};

use super::{
    cursor::{Cursor, CursorMut, Position},
    iter::{Iter, IterMut},
    link::SingleLink,
    node::Node,
    traits::Link,
};

/// A singly linked list that owns its elements.
///
/// The list is headed by a sentinel link that holds no element. Its successor
/// is the first node, which makes the position "before the first element" an
/// ordinary position: inserting or erasing after it is the same operation as
/// inserting or erasing after any node.
///
/// The links themselves are never exposed; the chain can only be edited
/// through the list and its cursors.
///
/// ```compile_fail
/// use forward_list::linked_list::forward::traits::Link;
///
/// let mut list = forward_list::ForwardList::from([1, 2, 3]);
/// list.set_next(None);
/// ```
pub struct ForwardList<T> {
    pub(super) head: SingleLink,
    pub(super) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        ForwardList {
            head: SingleLink::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.first().map(|node| unsafe { Node::data_ref(node) })
    }

    /// Returns a mutable reference to the first element, or `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first().map(|node| unsafe { Node::data_mut_ref(node) })
    }

    /// Adds an element to the front of the list in O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value);
        unsafe { self.splice_after(Node::as_link(node)) };
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let link = unsafe { self.unsplice_after() }?;
        debug_assert!(self.len > 0, "element count out of sync with chain");
        self.len -= 1;
        Some(unsafe { Node::free(Node::from_link(link)) })
    }

    /// Drops every element, front to back, leaving the list empty and usable.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        debug_assert!(self.head.next().is_none());
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Only the sentinel successors and the counts move; no node is touched.
    /// Each sentinel stays with its list.
    pub fn swap(&mut self, other: &mut Self) {
        let next = self.head.next();
        self.head.set_next(other.head.next());
        other.head.set_next(next);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Reverses the order of the elements in place, relinking the existing
    /// nodes.
    pub fn reverse(&mut self) {
        let mut rest = self.head.next();
        let mut reversed = None;
        while let Some(link) = rest {
            let link_ref = unsafe { &mut *link.as_ptr() };
            rest = link_ref.next();
            link_ref.set_next(reversed);
            reversed = Some(link);
        }
        self.head.set_next(reversed);
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == value)
    }

    /// Returns an iterator over shared references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first(), self.len)
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first(), self.len)
    }

    /// Returns a read-only cursor at the sentinel, before the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// Returns a read-only cursor at the first element, or at the end if the
    /// list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_link(self.head.next()))
    }

    /// Returns a read-only cursor at the end position, one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Returns a cursor at the sentinel, the only position from which the
    /// first element can be inserted or erased.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    /// Returns a cursor at the first element, or at the end if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let position = Position::from_link(self.head.next());
        CursorMut::new(self, position)
    }

    #[inline]
    fn first(&self) -> Option<NonNull<Node<T>>> {
        self.head.next().map(Node::from_link)
    }
}

/// The list is its own sentinel: head operations are the general
/// after-position operations applied to the list.
impl<T> Link for ForwardList<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<SingleLink>> {
        self.head.next()
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<SingleLink>>) {
        self.head.set_next(next);
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}
