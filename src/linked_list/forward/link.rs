use core::ptr::NonNull;

use super::traits::Link;

/// A link in a singly linked list.
///
/// An unattached link, or the last link of a chain, has no successor.
#[derive(Debug, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl SingleLink {
    /// Creates a link with no successor.
    pub const fn new() -> Self {
        Self { next: None }
    }
}

impl Link for SingleLink {
    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}
