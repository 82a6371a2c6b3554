use alloc::boxed::Box;
use core::fmt::{self, Write};

use log::error;

use super::{error::ListError, list::SinglyLinkedList, traits::DataPolicy};

type PrintFn<T> = Box<dyn Fn(&T, &mut dyn Write) -> fmt::Result>;
type ReleaseFn<T> = Box<dyn Fn(T)>;
type EqualsFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// A policy assembled from three closures.
///
/// Built through [`PolicyBuilder`], which refuses to produce a policy with
/// a missing callback.
pub struct FnPolicy<T> {
    print: PrintFn<T>,
    release: ReleaseFn<T>,
    equals: EqualsFn<T>,
}

impl<T> FnPolicy<T> {
    /// Start building a closure based policy.
    pub fn builder() -> PolicyBuilder<T> {
        PolicyBuilder::new()
    }
}

impl<T> DataPolicy<T> for FnPolicy<T> {
    #[inline]
    fn print(&self, data: &T, out: &mut dyn Write) -> fmt::Result {
        (self.print)(data, out)
    }

    #[inline]
    fn release(&self, data: T) {
        (self.release)(data)
    }

    #[inline]
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        (self.equals)(lhs, rhs)
    }
}

impl<T> fmt::Debug for FnPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}

/// Builder for [`FnPolicy`] and lists that use it.
pub struct PolicyBuilder<T> {
    print: Option<PrintFn<T>>,
    release: Option<ReleaseFn<T>>,
    equals: Option<EqualsFn<T>>,
}

impl<T> Default for PolicyBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolicyBuilder<T> {
    /// Create a builder with no callbacks set.
    pub fn new() -> Self {
        Self {
            print: None,
            release: None,
            equals: None,
        }
    }

    /// Set the callback that prints one value.
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn print<F>(mut self, print: F) -> Self
    where
        F: Fn(&T, &mut dyn Write) -> fmt::Result + 'static,
    {
        self.print = Some(Box::new(print));
        self
    }

    /// Set the callback that releases a value leaving the list.
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn release<F>(mut self, release: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        self.release = Some(Box::new(release));
        self
    }

    /// Set the equality predicate used by search and deletion.
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn equals<F>(mut self, equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.equals = Some(Box::new(equals));
        self
    }

    /// Build the policy.
    ///
    /// Callbacks are checked in the order print, release, equals and the
    /// first missing one is reported.
    pub fn build(self) -> Result<FnPolicy<T>, ListError> {
        let Some(print) = self.print else {
            return Err(missing("print"));
        };
        let Some(release) = self.release else {
            return Err(missing("release"));
        };
        let Some(equals) = self.equals else {
            return Err(missing("equals"));
        };

        Ok(FnPolicy {
            print,
            release,
            equals,
        })
    }

    /// Build the policy and wrap it in a new, empty list.
    pub fn build_list(self) -> Result<SinglyLinkedList<T, FnPolicy<T>>, ListError> {
        self.build().map(SinglyLinkedList::with_policy)
    }
}

fn missing(name: &'static str) -> ListError {
    let err = ListError::MissingCallback(name);
    error!("[ERROR] {err}.");
    err
}
