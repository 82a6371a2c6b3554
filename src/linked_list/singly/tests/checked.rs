extern crate std;

use std::vec;

use alloc::{boxed::Box, string::String};

use crate::linked_list::singly::checked;

use super::support::{RecordingList, recording_list, values};

#[test]
fn test_absent_list_is_invalid() {
    let (list, _log) = recording_list();
    assert!(checked::is_valid(Some(&list)));
    assert!(!checked::is_valid::<Box<i32>, _>(None::<&RecordingList>));
}

#[test]
fn test_absent_list_operations_are_no_ops() {
    let none = || None::<&mut RecordingList>;

    checked::insert_at_head(none(), Some(Box::new(1)));
    checked::insert_at_tail(none(), Some(Box::new(1)));
    checked::reverse(none());
    checked::teardown(none());
    assert_eq!(checked::delete(none(), Some(&Box::new(1))), 0);
    assert_eq!(checked::length(None::<&RecordingList>), 0);
    assert!(checked::find(None::<&RecordingList>, Some(&Box::new(1))).is_none());

    let mut out = String::new();
    checked::print(None::<&RecordingList>, &mut out);
    assert!(out.is_empty());
}

#[test]
fn test_absent_value_is_not_inserted() {
    let (mut list, _log) = recording_list();
    checked::insert_at_head(Some(&mut list), None);
    checked::insert_at_tail(Some(&mut list), None);
    assert_eq!(checked::length(Some(&list)), 0);
    assert!(list.tail().is_none());

    checked::insert_at_tail(Some(&mut list), Some(Box::new(1)));
    checked::insert_at_head(Some(&mut list), None);
    assert_eq!(values(&list), vec![1]);
}

#[test]
fn test_absent_value_search_and_delete() {
    let (mut list, log) = recording_list();
    list.push_back(Box::new(1)).unwrap();

    assert!(checked::find(Some(&list), None).is_none());
    assert_eq!(checked::delete(Some(&mut list), None), 0);
    assert_eq!(list.len(), 1);
    assert_eq!(log.total(), 0);
}

#[test]
fn test_present_list_round_trip() {
    let (mut list, log) = recording_list();
    checked::insert_at_tail(Some(&mut list), Some(Box::new(1)));
    checked::insert_at_tail(Some(&mut list), Some(Box::new(2)));
    checked::insert_at_head(Some(&mut list), Some(Box::new(0)));
    assert_eq!(checked::length(Some(&list)), 3);

    let mut out = String::new();
    checked::print(Some(&list), &mut out);
    assert_eq!(out, "0 1 2 ");

    assert_eq!(checked::delete(Some(&mut list), Some(&Box::new(1))), 1);
    checked::reverse(Some(&mut list));
    assert_eq!(values(&list), vec![2, 0]);
    assert_eq!(
        checked::find(Some(&list), Some(&Box::new(0))).map(|v| **v),
        Some(0)
    );

    checked::teardown(Some(&mut list));
    assert_eq!(checked::length(Some(&list)), 0);
    assert_eq!(log.total(), 3);
}

#[test]
fn test_reverse_empty_list_is_no_op() {
    let (mut list, _log) = recording_list();
    checked::reverse(Some(&mut list));
    assert!(list.is_empty());
}
