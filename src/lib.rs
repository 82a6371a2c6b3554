//! Generic collections built around caller-supplied data policies.
//!
//! The crate is `no_std` with `alloc`; the `std` feature (on by default)
//! adds printing straight to standard output.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod linked_list;
