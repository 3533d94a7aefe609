use crate::sim::{SimTime, TIME_EPS};
use std::cmp::Ordering;

#[test]
fn sim_time_within_eps_compares_equal() {
    let a = SimTime(1.0);
    let b = SimTime(1.0 + TIME_EPS / 2.0);
    assert_eq!(a.approx_cmp(b), Ordering::Equal);
    assert_eq!(b.approx_cmp(a), Ordering::Equal);
    assert!(a.approx_eq(b));
    assert!(!a.is_before(b));
}

#[test]
fn sim_time_beyond_eps_orders_ascending() {
    let a = SimTime(1.0);
    let b = SimTime(1.0 + 10.0 * TIME_EPS);
    assert_eq!(a.approx_cmp(b), Ordering::Less);
    assert_eq!(b.approx_cmp(a), Ordering::Greater);
    assert!(a.is_before(b));
}

#[test]
fn sim_time_after_and_max() {
    assert_eq!(SimTime::ZERO.after(2.5), SimTime(2.5));
    assert_eq!(SimTime(3.0).max(SimTime(1.0)), SimTime(3.0));
    assert_eq!(SimTime(1.0).max(SimTime(3.0)), SimTime(3.0));
}

#[test]
fn sim_time_equality_follows_eps() {
    let a = SimTime(2.0);
    assert_eq!(a, SimTime(2.0 + TIME_EPS / 2.0));
    assert_ne!(a, SimTime(2.0 + 10.0 * TIME_EPS));
    assert_eq!(a == SimTime(2.0 - TIME_EPS / 4.0), a.approx_eq(SimTime(2.0 - TIME_EPS / 4.0)));
}

#[test]
fn sim_time_finiteness() {
    assert!(SimTime(0.0).is_finite());
    assert!(!SimTime(f64::NAN).is_finite());
    assert!(!SimTime(f64::INFINITY).is_finite());
}
