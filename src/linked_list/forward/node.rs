use alloc::boxed::Box;
use core::ptr::NonNull;

use forward_list_derive::Node;

use super::{link::SingleLink, traits::NodeWithData};

/// A heap node of a [`ForwardList`](super::list::ForwardList).
///
/// The link is the first field of a `#[repr(C)]` struct, so a pointer to the
/// link and a pointer to the node are interchangeable.
#[derive(Node)]
#[node(crate_path = "crate")]
#[repr(C)]
pub struct Node<T> {
    link: SingleLink,
    data: T,
}

impl<T> Node<T> {
    /// Allocates an unlinked node holding `data`.
    pub(crate) fn alloc(data: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self {
            link: SingleLink::new(),
            data,
        })))
    }

    /// Releases a node allocated by [`Node::alloc`] and returns its data.
    ///
    /// # Safety
    ///
    /// `node` must come from `Node::<T>::alloc`, must already be unlinked and
    /// must not be used afterwards.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        (*node).into_data()
    }

    #[inline]
    pub(crate) fn from_link(link: NonNull<SingleLink>) -> NonNull<Self> {
        link.cast()
    }

    #[inline]
    pub(crate) fn as_link(node: NonNull<Self>) -> NonNull<SingleLink> {
        node.cast()
    }

    /// # Safety
    ///
    /// `node` must be live for `'a` and not otherwise borrowed.
    #[inline]
    pub(crate) unsafe fn link_mut<'a>(node: NonNull<Self>) -> &'a mut SingleLink {
        unsafe { &mut (*node.as_ptr()).link }
    }

    /// # Safety
    ///
    /// `node` must be live for `'a` and not mutably borrowed.
    #[inline]
    pub(crate) unsafe fn data_ref<'a>(node: NonNull<Self>) -> &'a T {
        unsafe { (*node.as_ptr()).data() }
    }

    /// # Safety
    ///
    /// `node` must be live for `'a` and not otherwise borrowed.
    #[inline]
    pub(crate) unsafe fn data_mut_ref<'a>(node: NonNull<Self>) -> &'a mut T {
        unsafe { (*node.as_ptr()).data_mut() }
    }
}
