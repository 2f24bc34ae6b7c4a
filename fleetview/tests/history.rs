//! Bounded window behaviour.

use std::collections::VecDeque;

use fleetview::history::{push_capped, Window};

#[test]
fn never_exceeds_capacity() {
    let mut w = Window::new(30);
    for i in 0..100 {
        w.push(i);
        assert!(w.len() <= 30);
    }
    assert_eq!(w.len(), 30);
    assert_eq!(w.capacity(), 30);
}

#[test]
fn keeps_most_recent_in_push_order() {
    let mut w = Window::new(5);
    for i in 1..=12 {
        w.push(i);
    }
    assert_eq!(w.values(), vec![8, 9, 10, 11, 12]);
    assert_eq!(w.latest(), Some(&12));
    assert_eq!(w.iter().next(), Some(&8));
}

#[test]
fn below_capacity_nothing_is_dropped() {
    let mut w = Window::new(30);
    assert!(w.is_empty());
    w.push(1.5);
    w.push(2.5);
    assert_eq!(w.values(), vec![1.5, 2.5]);
}

#[test]
fn zero_capacity_is_clamped() {
    let mut w = Window::new(0);
    w.push("a");
    w.push("b");
    assert_eq!(w.capacity(), 1);
    assert_eq!(w.values(), vec!["b"]);
}

#[test]
fn push_capped_drops_head() {
    let mut dq: VecDeque<u32> = VecDeque::new();
    for v in 0..4 {
        push_capped(&mut dq, v, 3);
    }
    assert_eq!(dq, VecDeque::from(vec![1, 2, 3]));
}
