//! Handle style operations that tolerate absent lists and absent values.
//!
//! Every function here takes the list as an `Option`. An absent list, or an
//! absent value where one is required, is reported through `log` and the
//! call degrades to a no-op, `0` or `None`. Nothing in this module panics.
//!
//! Reports carry a literal `[ERROR]` prefix on top of the log level, so the
//! text stays recognisable when it is forwarded to a plain output sink.

use core::fmt::Write;

use log::error;

use super::{error::ListError, list::SinglyLinkedList, traits::DataPolicy};

fn report_absent_list(action: &'static str) {
    error!("[ERROR] {}.", ListError::InvalidList(action));
}

/// Whether the list handle is present.
///
/// This is a shallow check; a present list always upholds its own
/// structural invariants.
pub fn is_valid<T, P>(list: Option<&SinglyLinkedList<T, P>>) -> bool
where
    P: DataPolicy<T>,
{
    list.is_some()
}

/// Insert `data` before the head of `list`.
pub fn insert_at_head<T, P>(list: Option<&mut SinglyLinkedList<T, P>>, data: Option<T>)
where
    P: DataPolicy<T>,
{
    let Some(list) = list else {
        report_absent_list("insert a node on");
        return;
    };
    // Failures are already reported by the list.
    let _ = list.link_front(data);
}

/// Append `data` after the tail of `list`.
pub fn insert_at_tail<T, P>(list: Option<&mut SinglyLinkedList<T, P>>, data: Option<T>)
where
    P: DataPolicy<T>,
{
    let Some(list) = list else {
        report_absent_list("insert a node on");
        return;
    };
    // Failures are already reported by the list.
    let _ = list.link_back(data);
}

/// Print every value of `list` to `out`.
pub fn print<T, P, W>(list: Option<&SinglyLinkedList<T, P>>, out: &mut W)
where
    P: DataPolicy<T>,
    W: Write,
{
    let Some(list) = list else {
        report_absent_list("print");
        return;
    };
    if list.print_to(out).is_err() {
        error!("[ERROR] Failed to print the singly linked list.");
    }
}

/// Number of values in `list`, `0` when the list is absent.
pub fn length<T, P>(list: Option<&SinglyLinkedList<T, P>>) -> usize
where
    P: DataPolicy<T>,
{
    list.map_or(0, |list| list.len())
}

/// Reverse `list` in place.
pub fn reverse<T, P>(list: Option<&mut SinglyLinkedList<T, P>>)
where
    P: DataPolicy<T>,
{
    let Some(list) = list else {
        report_absent_list("reverse");
        return;
    };
    // Failures are already reported by the list.
    let _ = list.reverse();
}

/// Find the first value in `list` equal to `data`.
pub fn find<'a, T, P>(list: Option<&'a SinglyLinkedList<T, P>>, data: Option<&T>) -> Option<&'a T>
where
    P: DataPolicy<T>,
{
    let Some(list) = list else {
        report_absent_list("search");
        return None;
    };
    let Some(data) = data else {
        error!("[ERROR] You cannot search for a NULL value.");
        return None;
    };
    list.find(data)
}

/// Remove every value in `list` equal to `data`.
///
/// # Returns
/// The number of removed values
pub fn delete<T, P>(list: Option<&mut SinglyLinkedList<T, P>>, data: Option<&T>) -> usize
where
    P: DataPolicy<T>,
{
    let Some(list) = list else {
        report_absent_list("delete a node on");
        return 0;
    };
    let Some(data) = data else {
        error!("[ERROR] You cannot delete a NULL value.");
        return 0;
    };
    list.delete(data)
}

/// Release every value of `list` and leave it empty.
pub fn teardown<T, P>(list: Option<&mut SinglyLinkedList<T, P>>)
where
    P: DataPolicy<T>,
{
    match list {
        Some(list) => list.clear(),
        None => report_absent_list("free"),
    }
}
