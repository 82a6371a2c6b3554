//! # Singly Linked List
//!
//! ## Core Components
//!
//! - [`list::SinglyLinkedList`]: the list itself, tracking head and tail.
//! - [`traits::DataPolicy`]: print, release and equality for the stored values.
//! - [`policy::FnPolicy`] and [`policy::PolicyBuilder`]: a policy made of closures.
//! - [`checked`]: operations over optional list handles and optional values.
//!
//! ## Ownership
//!
//! Values moved into the list belong to it. Each value leaves the list
//! exactly once: through the policy's `release` when it is deleted or the
//! list is cleared or dropped, or by being returned to the caller.

pub mod checked;
pub mod error;
pub mod iter;
pub mod list;
mod node;
pub mod policy;
pub mod traits;

pub use error::ListError;
pub use list::SinglyLinkedList;
pub use policy::{FnPolicy, PolicyBuilder};
pub use traits::{DataPolicy, DisplayPolicy};

#[cfg(test)]
mod tests;
