//! A singly linked list parameterized over a data policy.
//!
//! The list owns its values, but never looks at them itself. Printing,
//! releasing and comparing values is delegated to a [`singly::DataPolicy`]
//! chosen when the list is built. Types that are `Display + PartialEq` can use
//! the default [`singly::DisplayPolicy`]; anything else supplies closures
//! through [`singly::PolicyBuilder`].
//!
//! # Examples
//!
//! ```
//! use mola_singly_list::linked_list::singly::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_front(0).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! assert_eq!(list.delete(&1), 1);
//! list.reverse().unwrap();
//! assert_eq!(list.to_string(), "2\n0\n");
//! assert_eq!(list.tail(), Some(&0));
//! ```
pub mod singly;
