use core::fmt::{self, Display, Write};
use core::ptr::NonNull;

/// Per-element behaviour injected into a list at construction time.
///
/// The list never inspects its values directly. Printing, releasing and
/// comparing all go through the policy, which is fixed for the lifetime
/// of the list.
pub trait DataPolicy<T> {
    /// Write a human readable representation of `data` to `out`.
    fn print(&self, data: &T, out: &mut dyn Write) -> fmt::Result;

    /// Release a value leaving the list.
    ///
    /// Called exactly once for every value removed by `delete` or by
    /// tearing the list down. Values handed back to the caller (for
    /// example by `pop_front`) are not released.
    fn release(&self, data: T);

    /// Equality used by search and deletion.
    fn equals(&self, lhs: &T, rhs: &T) -> bool;
}

/// Policy for types that already know how to print and compare themselves.
///
/// Values are printed one per line and released by dropping them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayPolicy;

impl<T> DataPolicy<T> for DisplayPolicy
where
    T: Display + PartialEq,
{
    #[inline]
    fn print(&self, data: &T, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "{data}")
    }

    #[inline]
    fn release(&self, data: T) {
        drop(data);
    }

    #[inline]
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T, P> DataPolicy<T> for &P
where
    P: DataPolicy<T> + ?Sized,
{
    fn print(&self, data: &T, out: &mut dyn Write) -> fmt::Result {
        (**self).print(data, out)
    }

    fn release(&self, data: T) {
        (**self).release(data)
    }

    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        (**self).equals(lhs, rhs)
    }
}

/// A slot pointing at the next node of a chain.
///
/// Implemented by nodes and by the list itself, whose "next" is the head.
/// This lets unlinking treat "remove the head" and "remove after a node"
/// the same way.
pub(crate) trait Link {
    /// The node type the link points at.
    type Target;

    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}
