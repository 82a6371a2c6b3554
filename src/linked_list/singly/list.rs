use core::{
    fmt::{self, Display, Write},
    marker::PhantomData,
    ptr::NonNull,
};

use alloc::boxed::Box;
use log::{error, trace};

use super::{
    error::ListError,
    iter::{IntoIter, Iter},
    node::ListNode,
    policy::{FnPolicy, PolicyBuilder},
    traits::{DataPolicy, DisplayPolicy, Link},
};

/// A singly linked list whose element behaviour is supplied by a policy.
///
/// The list owns every value pushed into it. Values leave the list either
/// through the policy's `release` (deletion, [`clear`](Self::clear), drop)
/// or by being handed back to the caller ([`pop_front`](Self::pop_front),
/// [`into_iter`](IntoIterator::into_iter)).
///
/// `head` is `None` exactly when `tail` is `None`, and `tail` always points
/// at the last node.
pub struct SinglyLinkedList<T, P = DisplayPolicy>
where
    P: DataPolicy<T>,
{
    head: Option<NonNull<ListNode<T>>>,
    tail: Option<NonNull<ListNode<T>>>,
    policy: P,
    _marker: PhantomData<Box<ListNode<T>>>,
}

impl<T> SinglyLinkedList<T>
where
    T: Display + PartialEq,
{
    /// Creates a new, empty list that prints with `Display` and compares
    /// with `PartialEq`.
    pub const fn new() -> Self {
        Self::with_policy(DisplayPolicy)
    }
}

impl<T> SinglyLinkedList<T, FnPolicy<T>> {
    /// Start building a list from print, release and equality closures.
    ///
    /// ```
    /// use mola_singly_list::linked_list::singly::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::<i32, _>::builder()
    ///     .print(|v, out| write!(out, "{v} "))
    ///     .release(drop)
    ///     .equals(|a, b| a == b)
    ///     .build_list();
    /// assert!(list.is_ok());
    ///
    /// let list = SinglyLinkedList::<i32, _>::builder().release(drop).build_list();
    /// assert!(list.is_err());
    /// ```
    pub fn builder() -> PolicyBuilder<T> {
        PolicyBuilder::new()
    }
}

impl<T, P> SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    /// Creates a new, empty list driven by `policy`.
    pub const fn with_policy(policy: P) -> Self {
        Self {
            head: None,
            tail: None,
            policy,
            _marker: PhantomData,
        }
    }

    /// The policy this list was built with.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The first value, if any.
    pub fn head(&self) -> Option<&T> {
        // SAFETY: nodes reachable from the list are live for as long as `self` is borrowed.
        self.head.map(|node| unsafe { node.as_ref() }.data())
    }

    /// The last value, if any.
    pub fn tail(&self) -> Option<&T> {
        // SAFETY: see `head`.
        self.tail.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count the elements by walking the chain from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Insert a value before the current head.
    pub fn push_front(&mut self, data: T) -> Result<(), ListError> {
        self.link_front(Some(data))
    }

    /// Append a value after the current tail.
    pub fn push_back(&mut self, data: T) -> Result<(), ListError> {
        self.link_back(Some(data))
    }

    pub(crate) fn link_front(&mut self, data: Option<T>) -> Result<(), ListError> {
        let node = Self::create_node(data)?;

        // SAFETY: `node` was just allocated and is not shared.
        unsafe { (*node.as_ptr()).set_next(self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        trace!("linked node at head");
        Ok(())
    }

    pub(crate) fn link_back(&mut self, data: Option<T>) -> Result<(), ListError> {
        let node = Self::create_node(data)?;

        match self.tail {
            // SAFETY: `tail` is a live node owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        trace!("linked node at tail");
        Ok(())
    }

    fn create_node(data: Option<T>) -> Result<NonNull<ListNode<T>>, ListError> {
        ListNode::create(data)
            .inspect_err(|_| error!("[ERROR] An error occurred while creating a new node."))
    }

    /// Detach the head and give its value back to the caller.
    ///
    /// The value is not passed to the policy's `release`.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` is a live node owned by this list, and once
            // detached nothing else points at it.
            unsafe {
                (*head.as_ptr()).detach(self);
                if self.head.is_none() {
                    self.tail = None;
                }
                ListNode::into_data(head)
            }
        })
    }

    /// Write every value, head to tail, through the policy's `print`.
    pub fn print_to<W>(&self, out: &mut W) -> fmt::Result
    where
        W: Write,
    {
        for data in self.iter() {
            self.policy.print(data, out)?;
        }
        Ok(())
    }

    /// Print every value to standard output.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let mut rendered = alloc::string::String::new();
        match self.print_to(&mut rendered) {
            Ok(()) => std::print!("{rendered}"),
            Err(_) => error!("[ERROR] Failed to print the singly linked list."),
        }
    }

    /// Reverse the list in place.
    ///
    /// The old head becomes the tail. Reversing an empty list is reported
    /// and leaves the list untouched.
    pub fn reverse(&mut self) -> Result<(), ListError> {
        if self.is_empty() {
            error!("[ERROR] You cannot reverse an empty singly linked list.");
            return Err(ListError::Empty);
        }

        let old_head = self.head;
        let mut previous = None;
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every node reachable from the head is live and owned by this list.
            let node_ref = unsafe { &mut *node.as_ptr() };
            current = node_ref.next();
            node_ref.set_next(previous);
            previous = Some(node);
        }

        self.head = previous;
        self.tail = old_head;
        trace!("reversed singly linked list");
        Ok(())
    }

    /// Find the first value the policy considers equal to `data`.
    pub fn find(&self, data: &T) -> Option<&T> {
        self.iter().find(|value| self.policy.equals(value, data))
    }

    /// Like [`find`](Self::find), but returns a mutable reference.
    pub fn find_mut(&mut self, data: &T) -> Option<&mut T> {
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: `&mut self` guarantees exclusive access to every node.
            let node_ref = unsafe { &mut *node.as_ptr() };
            if self.policy.equals(node_ref.data(), data) {
                return Some(node_ref.data_mut());
            }
            current = node_ref.next();
        }
        None
    }

    /// Remove every value equal to `data`, releasing each one.
    ///
    /// # Returns
    /// The number of removed values
    pub fn delete(&mut self, data: &T) -> usize {
        let mut removed = 0;
        let mut previous: Option<NonNull<ListNode<T>>> = None;
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: every node reachable from the head is live and owned by this list.
            let node_ref = unsafe { &mut *node.as_ptr() };
            current = node_ref.next();

            if !self.policy.equals(node_ref.data(), data) {
                previous = Some(node);
                continue;
            }

            match previous {
                // SAFETY: `previous` is the live node right before `node`.
                Some(prev) => node_ref.detach(unsafe { &mut *prev.as_ptr() }),
                None => node_ref.detach(self),
            }
            if self.tail == Some(node) {
                self.tail = previous;
            }

            // SAFETY: `node` is unlinked and no longer reachable.
            let value = unsafe { ListNode::into_data(node) };
            self.policy.release(value);
            removed += 1;
        }

        trace!("deleted {removed} node(s)");
        removed
    }

    /// Release every value and free every node, leaving the list empty.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut current = self.head.take();
        self.tail = None;

        while let Some(node) = current {
            // SAFETY: the chain was detached from the list above, so each node
            // is visited and freed exactly once.
            let value = unsafe {
                current = node.as_ref().next();
                ListNode::into_data(node)
            };
            self.policy.release(value);
            released += 1;
        }

        if released > 0 {
            trace!("released {released} node(s)");
        }
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head)
    }
}

impl<T, P> Link for SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    type Target = ListNode<T>;

    #[inline]
    fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.head
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.head = next;
    }
}

impl<T, P> Drop for SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, P> Default for SinglyLinkedList<T, P>
where
    P: DataPolicy<T> + Default,
{
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<T, P> Extend<T> for SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            if self.push_back(data).is_err() {
                break;
            }
        }
    }
}

impl<T, P> FromIterator<T> for SinglyLinkedList<T, P>
where
    P: DataPolicy<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a, T, P> IntoIterator for &'a SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> IntoIterator for SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T, P> Display for SinglyLinkedList<T, P>
where
    P: DataPolicy<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_to(f)
    }
}

impl<T, P> fmt::Debug for SinglyLinkedList<T, P>
where
    T: fmt::Debug,
    P: DataPolicy<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send, P: DataPolicy<T> + Send> Send for SinglyLinkedList<T, P> {}
unsafe impl<T: Sync, P: DataPolicy<T> + Sync> Sync for SinglyLinkedList<T, P> {}
