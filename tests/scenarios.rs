//! Reference scenarios for the standard fuzzy operations, compared within 1e-4.

use approx::assert_abs_diff_eq;
use fuzzy_membership::{complement, intersection, union, Membership};

const EPS: f64 = 1e-4;

#[test]
fn complement_of_constants() {
    assert_abs_diff_eq!(complement(|_: i32| 0.0f64).degree(5), 1.0, epsilon = EPS);
    assert_abs_diff_eq!(complement(|_: i32| 1.0f64).degree(10), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(complement(|_: i32| 0.5f64).degree(3), 0.5, epsilon = EPS);
    assert_abs_diff_eq!(complement(|_: i32| 0.9f64).degree(7), 0.1, epsilon = EPS);
}

#[test]
fn complement_of_linear() {
    let f = |x: i32| f64::from(x) / 10.0;

    assert_abs_diff_eq!(complement(f).degree(2), 0.8, epsilon = EPS);
}

#[test]
fn union_of_constants() {
    assert_abs_diff_eq!(union(|_: i32| 0.0f64, |_: i32| 0.5f64).degree(4), 0.5, epsilon = EPS);
    assert_abs_diff_eq!(union(|_: i32| 1.0f64, |_: i32| 0.3f64).degree(6), 1.0, epsilon = EPS);
    assert_abs_diff_eq!(union(|_: i32| 0.4f64, |_: i32| 0.4f64).degree(2), 0.4, epsilon = EPS);
    assert_abs_diff_eq!(union(|_: i32| 0.9f64, |_: i32| 0.1f64).degree(9), 0.9, epsilon = EPS);
}

#[test]
fn intersection_of_constants() {
    assert_abs_diff_eq!(intersection(|_: i32| 0.0f64, |_: i32| 0.7f64).degree(1), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(intersection(|_: i32| 1.0f64, |_: i32| 0.6f64).degree(8), 0.6, epsilon = EPS);
    assert_abs_diff_eq!(intersection(|_: i32| 0.5f64, |_: i32| 0.5f64).degree(3), 0.5, epsilon = EPS);
    assert_abs_diff_eq!(intersection(|_: i32| 0.9f64, |_: i32| 0.1f64).degree(5), 0.1, epsilon = EPS);
}

#[test]
fn complementary_linear_pair() {
    let f = |x: i32| f64::from(x) / 10.0;
    let g = |x: i32| f64::from(10 - x) / 10.0;

    assert_abs_diff_eq!(union(f, g).degree(2), 0.8, epsilon = EPS);
    assert_abs_diff_eq!(intersection(f, g).degree(2), 0.2, epsilon = EPS);
    assert_abs_diff_eq!(intersection(f, g).degree(8), 0.2, epsilon = EPS);
}

#[test]
fn composed_expression() {
    let cold = |t: i32| (f64::from(15 - t) / 15.0).clamp(0.0, 1.0);
    let hot = |t: i32| (f64::from(t - 20) / 15.0).clamp(0.0, 1.0);

    // neither cold nor hot
    let mild = complement(union(cold, hot));

    assert_abs_diff_eq!(mild.degree(18), 1.0, epsilon = EPS);
    assert_abs_diff_eq!(mild.degree(0), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(mild.degree(35), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(mild.degree(10), 1.0 - 5.0 / 15.0, epsilon = EPS);
}

#[test]
fn single_precision() {
    let f = |x: i32| x as f32 / 10.0;

    assert_abs_diff_eq!(complement(f).degree(2), 0.8f32, epsilon = 1e-4);
    assert_abs_diff_eq!(f.union(|_: i32| 0.5f32).degree(2), 0.5f32, epsilon = 1e-4);
}
