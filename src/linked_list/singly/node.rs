use alloc::{
    alloc::{Layout, alloc},
    boxed::Box,
};
use core::ptr::NonNull;

use log::error;

use super::{error::ListError, traits::Link};

/// A heap allocated element of a singly linked list.
///
/// Nodes are created detached and are owned by exactly one list from the
/// moment they are linked until they are destroyed with [`ListNode::into_data`].
pub(crate) struct ListNode<T> {
    data: T,
    next: Option<NonNull<Self>>,
}

impl<T> ListNode<T> {
    /// Allocate a detached node holding `data`.
    ///
    /// Fails without aborting when there is no value to store or the
    /// allocator is out of memory.
    pub(crate) fn create(data: Option<T>) -> Result<NonNull<Self>, ListError> {
        let Some(data) = data else {
            error!("[ERROR] {}.", ListError::NullData);
            return Err(ListError::NullData);
        };

        // SAFETY: `ListNode` always carries a pointer, so the layout is never zero sized.
        let raw = unsafe { alloc(Layout::new::<Self>()) }.cast::<Self>();
        let Some(node) = NonNull::new(raw) else {
            error!("[ERROR] {}.", ListError::AllocationFailed);
            return Err(ListError::AllocationFailed);
        };

        // SAFETY: `node` is freshly allocated with the layout of `Self`.
        unsafe { node.as_ptr().write(ListNode { data, next: None }) };
        Ok(node)
    }

    /// Free a node and hand its value back.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::create`], must already be unlinked
    /// and must not be used again.
    pub(crate) unsafe fn into_data(node: NonNull<Self>) -> T {
        // SAFETY: `create` allocates with the global allocator and the layout
        // of `Self`, which is exactly what `Box` expects.
        let boxed = unsafe { Box::from_raw(node.as_ptr()) };
        boxed.data
    }

    #[inline]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Unlink this node from `parent`, which must currently point at it.
    ///
    /// The parent is either the list itself, when the node is the head, or
    /// the preceding node.
    pub(crate) fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(
            parent.next(),
            Some(NonNull::from(&mut *self)),
            "Parent must be the one that contains this node"
        );
        parent.set_next(self.next.take());
    }
}

impl<T> Link for ListNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}
