extern crate std;

use std::{cell::Cell, rc::Rc, vec, vec::Vec};

use crate::linked_list::forward::ForwardList;

fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Counts how many times a value has been dropped.
struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_new_list_is_empty() {
    let list = ForwardList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.iter().next(), None);
}

#[test]
fn test_push_front_builds_in_reverse_push_order() {
    let mut list = ForwardList::new();
    list.push_front(3);
    list.push_front(2);
    list.push_front(1);

    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.front(), Some(&1));
}

#[test]
fn test_pop_front() {
    let mut list = ForwardList::from([1, 2]);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.len(), 1);
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.len(), 0);

    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_front_mut() {
    let mut list = ForwardList::from([1, 2, 3]);
    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    assert_eq!(collect(&list), vec![10, 2, 3]);

    let mut empty = ForwardList::<i32>::new();
    assert!(empty.front_mut().is_none());
}

#[test]
fn test_from_sequence_preserves_order() {
    let list: ForwardList<_> = (0..100).collect();
    assert_eq!(collect(&list), (0..100).collect::<Vec<_>>());
    assert_eq!(list.len(), 100);

    let list = ForwardList::from(["a", "b", "c"]);
    assert_eq!(collect(&list), vec!["a", "b", "c"]);
    assert_eq!(list.front(), Some(&"a"));
}

#[test]
fn test_clear() {
    let mut list = ForwardList::from([1, 2, 3]);
    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);

    // Still usable afterwards
    list.push_front(7);
    assert_eq!(collect(&list), vec![7]);

    let mut empty = ForwardList::<i32>::new();
    empty.clear();
    assert!(empty.is_empty());
}

#[test]
fn test_swap() {
    let mut a = ForwardList::from([1, 2, 3]);
    let mut b = ForwardList::from([4, 5]);

    a.swap(&mut b);
    assert_eq!(collect(&a), vec![4, 5]);
    assert_eq!(a.len(), 2);
    assert_eq!(collect(&b), vec![1, 2, 3]);
    assert_eq!(b.len(), 3);

    // Swapping twice restores both lists
    a.swap(&mut b);
    assert_eq!(collect(&a), vec![1, 2, 3]);
    assert_eq!(collect(&b), vec![4, 5]);

    let mut empty = ForwardList::new();
    a.swap(&mut empty);
    assert!(a.is_empty());
    assert_eq!(collect(&empty), vec![1, 2, 3]);
}

#[test]
fn test_swap_keeps_node_addresses() {
    let mut a = ForwardList::from([1, 2]);
    let mut b = ForwardList::new();
    let first = a.front().map(|v| v as *const i32);

    a.swap(&mut b);
    assert_eq!(b.front().map(|v| v as *const i32), first);
}

#[test]
fn test_reverse() {
    let mut list = ForwardList::from([1, 2, 3, 4]);
    list.reverse();
    assert_eq!(collect(&list), vec![4, 3, 2, 1]);
    assert_eq!(list.len(), 4);

    list.push_front(5);
    assert_eq!(collect(&list), vec![5, 4, 3, 2, 1]);

    let mut single = ForwardList::from([1]);
    single.reverse();
    assert_eq!(collect(&single), vec![1]);

    let mut empty = ForwardList::<i32>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_contains() {
    let list = ForwardList::from([1, 2, 3]);
    assert!(list.contains(&2));
    assert!(!list.contains(&4));
}

#[test]
fn test_iter_mut() {
    let mut list = ForwardList::from([1, 2, 3]);
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(collect(&list), vec![10, 20, 30]);

    for value in &mut list {
        *value += 1;
    }
    assert_eq!(collect(&list), vec![11, 21, 31]);
}

#[test]
fn test_iter_is_restartable() {
    let list = ForwardList::from([1, 2, 3]);
    let iter = list.iter();
    assert_eq!(iter.len(), 3);

    let first: Vec<_> = iter.clone().copied().collect();
    let second: Vec<_> = iter.copied().collect();
    assert_eq!(first, second);

    let mut iter = list.iter();
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    iter.next();
    iter.next();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter() {
    let list = ForwardList::from([1, 2, 3]);
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_len_matches_traversal() {
    let mut list = ForwardList::new();
    for i in 0..10 {
        list.push_front(i);
    }
    for _ in 0..4 {
        list.pop_front();
    }
    list.before_begin_mut().insert_after(42);
    {
        let mut cursor = list.cursor_front_mut();
        cursor.move_next();
        cursor.erase_after();
    }
    assert_eq!(list.len(), list.iter().count());
    assert_eq!(list.len(), 6);
}

#[test]
fn test_every_node_dropped_once() {
    let drops = Rc::new(Cell::new(0));
    let make = || DropCounter {
        drops: Rc::clone(&drops),
    };

    let mut list = ForwardList::new();
    for _ in 0..5 {
        list.push_front(make());
    }
    drop(list.pop_front());
    assert_eq!(drops.get(), 1);

    drop(list.before_begin_mut().erase_after());
    assert_eq!(drops.get(), 2);

    list.clear();
    assert_eq!(drops.get(), 5);

    for _ in 0..3 {
        list.push_front(make());
    }
    let mut other = ForwardList::from([make()]);
    list.swap(&mut other);
    drop(list);
    assert_eq!(drops.get(), 6);
    drop(other);
    assert_eq!(drops.get(), 9);
}

#[test]
fn test_long_list_drop_does_not_recurse() {
    let list: ForwardList<_> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);
}
