use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::ForwardList, node::Node, traits::Link};

/// The traversal state shared by [`Iter`] and [`IterMut`].
struct RawIter<T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
}

impl<T> RawIter<T> {
    fn new(current: Option<NonNull<Node<T>>>, remaining: usize) -> Self {
        Self { current, remaining }
    }

    fn next_node(&mut self) -> Option<NonNull<Node<T>>> {
        if self.remaining == 0 {
            return None;
        }
        self.current.inspect(|current| {
            self.remaining -= 1;
            self.current = unsafe { current.as_ref() }.next().map(Node::from_link);
        })
    }
}

impl<T> Clone for RawIter<T> {
    fn clone(&self) -> Self {
        Self::new(self.current, self.remaining)
    }
}

/// An iterator over shared references to the elements of a [`ForwardList`].
pub struct Iter<'a, T> {
    raw: RawIter<T>,
    _list: PhantomData<&'a ForwardList<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            raw: RawIter::new(head, len),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw
            .next_node()
            .map(|node| unsafe { Node::data_ref(node) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.remaining, Some(self.raw.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _list: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An iterator over mutable references to the elements of a [`ForwardList`].
pub struct IterMut<'a, T> {
    raw: RawIter<T>,
    _list: PhantomData<&'a mut ForwardList<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            raw: RawIter::new(head, len),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw
            .next_node()
            .map(|node| unsafe { Node::data_mut_ref(node) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.remaining, Some(self.raw.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`ForwardList`], front to back.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
