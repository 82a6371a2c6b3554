use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::SinglyLinkedList, node::ListNode, traits::{DataPolicy, Link}};

/// A borrowing iterator over the values of a list, head to tail.
pub struct Iter<'a, T> {
    current: Option<NonNull<ListNode<T>>>,
    _list: PhantomData<&'a ListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<NonNull<ListNode<T>>>) -> Self {
        Self {
            current: head,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the list is borrowed for `'a`, so no node can be
            // unlinked or freed while the iterator is alive.
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            node.data()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.current)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An owning iterator that hands values back, head first.
///
/// Yielded values are not passed to the policy's `release`. Values left
/// when the iterator is dropped are released together with the list.
pub struct IntoIter<T, P>
where
    P: DataPolicy<T>,
{
    list: SinglyLinkedList<T, P>,
}

impl<T, P> IntoIter<T, P>
where
    P: DataPolicy<T>,
{
    pub(crate) fn new(list: SinglyLinkedList<T, P>) -> Self {
        Self { list }
    }
}

impl<T, P> Iterator for IntoIter<T, P>
where
    P: DataPolicy<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T, P> FusedIterator for IntoIter<T, P> where P: DataPolicy<T> {}
