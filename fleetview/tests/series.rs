//! Series set reconciliation: additions, no deletions, untouched when absent.

use fleetview::series::SeriesSet;

#[test]
fn absent_series_keeps_last_value_while_axis_advances() {
    let mut set = SeriesSet::new(30);
    set.reconcile([("x", 7.0), ("y", 1.0)], "t1");
    set.reconcile([("y", 2.0)], "t2");

    assert_eq!(set.get("x").unwrap().values(), vec![7.0]);
    assert_eq!(set.get("y").unwrap().values(), vec![1.0, 2.0]);
    assert_eq!(set.timestamps().values(), vec!["t1", "t2"]);
}

#[test]
fn new_series_mid_stream() {
    let mut set = SeriesSet::new(30);
    set.reconcile([("alpha", 1.0)], "t1");
    set.reconcile([("alpha", 2.0), ("beta", 5.0)], "t2");

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("alpha").unwrap().len(), 2);
    assert_eq!(set.get("beta").unwrap().len(), 1);
    assert_eq!(set.timestamps().len(), 2);
}

#[test]
fn iteration_follows_first_seen_order() {
    let mut set = SeriesSet::new(30);
    set.reconcile([("zeta", 1.0), ("alpha", 1.0)], "t1");
    set.reconcile([("mid", 1.0), ("alpha", 2.0), ("zeta", 2.0)], "t2");

    let ids: Vec<&str> = set.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn empty_tick_still_advances_axis() {
    let mut set = SeriesSet::new(3);
    set.reconcile([("a", 1.0)], "t1");
    for t in ["t2", "t3", "t4"] {
        set.reconcile(std::iter::empty(), t);
    }
    assert_eq!(set.timestamps().values(), vec!["t2", "t3", "t4"]);
    assert_eq!(set.get("a").unwrap().values(), vec![1.0]);
}

#[test]
fn values_pass_through_unvalidated() {
    let mut set = SeriesSet::new(30);
    set.reconcile([("neg", -4.0), ("nan", f64::NAN)], "t1");
    assert_eq!(set.get("neg").unwrap().values(), vec![-4.0]);
    assert!(set.get("nan").unwrap().latest().unwrap().is_nan());
}

#[test]
fn unknown_lookup_is_none() {
    let set = SeriesSet::new(30);
    assert!(set.is_empty());
    assert!(set.get("ghost").is_none());
}
