use core::ptr::NonNull;

use super::link::SingleLink;

/// A trait for anything that owns a successor link: the list sentinel and
/// every node.
pub trait Link {
    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<SingleLink>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<SingleLink>>);

    /// Links `node` directly after `self`, in front of the current successor.
    ///
    /// # Safety
    ///
    /// `node` must point to a live link that is not part of any chain.
    unsafe fn splice_after(&mut self, node: NonNull<SingleLink>) {
        unsafe { (*node.as_ptr()).set_next(self.next()) };
        self.set_next(Some(node));
    }

    /// Unlinks the successor of `self` and returns it.
    ///
    /// The returned link keeps its stale next pointer; the caller takes over
    /// ownership of the node.
    ///
    /// # Safety
    ///
    /// The successor, if any, must point to a live link.
    unsafe fn unsplice_after(&mut self) -> Option<NonNull<SingleLink>> {
        let next = self.next()?;
        self.set_next(unsafe { next.as_ref().next() });
        Some(next)
    }
}

/// A trait for a node that carries a value.
pub trait NodeWithData: Link + Sized {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data;
}
