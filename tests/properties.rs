//! Property-based tests for the membership operations.

use fuzzy_membership::{
    complement, complement_with, intersection, intersection_with, union, union_with, AndOp, Membership, NotOp, OrOp,
    TryMembership,
};
use proptest::prelude::*;

const EPS: f64 = 1e-4;

// ===== Strategies =====

fn arb_degree() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn arb_and_op() -> impl Strategy<Value = AndOp> {
    prop_oneof![
        Just(AndOp::Min),
        Just(AndOp::Prod),
        Just(AndOp::BoundedProd),
        Just(AndOp::DrasticProd),
    ]
}

fn arb_or_op() -> impl Strategy<Value = OrOp> {
    prop_oneof![
        Just(OrOp::Max),
        Just(OrOp::ProbOr),
        Just(OrOp::BoundedSum),
        Just(OrOp::DrasticSum),
    ]
}

fn arb_not_op() -> impl Strategy<Value = NotOp> {
    prop_oneof![
        Just(NotOp::Standard),
        (-0.9..10.0f64).prop_map(|lambda| NotOp::Sugeno { lambda }),
        (0.5..3.0f64).prop_map(|w| NotOp::Yager { w }),
    ]
}

/// A linear membership `x -> clamp(a * x + b)` over the integers.
fn arb_linear() -> impl Strategy<Value = (f64, f64)> {
    (-0.2..0.2f64, arb_degree())
}

fn linear((a, b): (f64, f64)) -> impl Fn(i32) -> f64 + Copy {
    move |x| (a * f64::from(x) + b).clamp(0.0, 1.0)
}

// ===== Standard operators =====

proptest! {
    #[test]
    fn prop_complement_is_one_minus(f in arb_linear(), x in -50..50i32) {
        let f = linear(f);

        prop_assert!((complement(f).degree(x) - (1.0 - f(x))).abs() < EPS);
    }

    #[test]
    fn prop_double_complement_is_identity(f in arb_linear(), x in -50..50i32) {
        let f = linear(f);

        prop_assert!((complement(complement(f)).degree(x) - f(x)).abs() < EPS);
    }

    #[test]
    fn prop_union_is_max(f in arb_linear(), g in arb_linear(), x in -50..50i32) {
        let (f, g) = (linear(f), linear(g));

        prop_assert_eq!(union(f, g).degree(x), f(x).max(g(x)));
        prop_assert_eq!(union(f, g).degree(x), union(g, f).degree(x));
    }

    #[test]
    fn prop_intersection_is_min(f in arb_linear(), g in arb_linear(), x in -50..50i32) {
        let (f, g) = (linear(f), linear(g));

        prop_assert_eq!(intersection(f, g).degree(x), f(x).min(g(x)));
        prop_assert_eq!(intersection(f, g).degree(x), intersection(g, f).degree(x));
    }

    #[test]
    fn prop_complementary_pair_sums_to_one(f in arb_linear(), x in -50..50i32) {
        let f = linear(f);
        let g = move |x: i32| 1.0 - f(x);

        let sum = union(f, g).degree(x) + intersection(f, g).degree(x);

        prop_assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn prop_stays_in_unit_interval(f in arb_linear(), g in arb_linear(), x in -50..50i32) {
        let (f, g) = (linear(f), linear(g));

        for degree in [
            complement(f).degree(x),
            union(f, g).degree(x),
            intersection(f, g).degree(x),
        ] {
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    #[test]
    fn prop_de_morgan(f in arb_linear(), g in arb_linear(), x in -50..50i32) {
        let (f, g) = (linear(f), linear(g));

        let lhs = complement(union(f, g)).degree(x);
        let rhs = intersection(complement(f), complement(g)).degree(x);

        prop_assert!((lhs - rhs).abs() < EPS);
    }
}

// ===== Operator families =====

proptest! {
    #[test]
    fn prop_tnorm_identity_and_commutativity(op in arb_and_op(), a in arb_degree(), b in arb_degree()) {
        prop_assert!((op.call(a, 1.0) - a).abs() < EPS);
        prop_assert!((op.call(1.0, a) - a).abs() < EPS);
        prop_assert!((op.call(a, b) - op.call(b, a)).abs() < EPS);
        prop_assert!(op.call(a, b) <= a.min(b) + EPS);
    }

    #[test]
    fn prop_tconorm_identity_and_commutativity(op in arb_or_op(), a in arb_degree(), b in arb_degree()) {
        prop_assert!((op.call(a, 0.0) - a).abs() < EPS);
        prop_assert!((op.call(0.0, a) - a).abs() < EPS);
        prop_assert!((op.call(a, b) - op.call(b, a)).abs() < EPS);
        prop_assert!(op.call(a, b) + EPS >= a.max(b));
    }

    #[test]
    fn prop_negations_are_involutive(op in arb_not_op(), a in arb_degree()) {
        prop_assert!(op.validate().is_ok());
        prop_assert!((op.call(op.call(a)) - a).abs() < EPS);
        prop_assert!((op.call(0.0f64) - 1.0).abs() < EPS);
        prop_assert!(op.call(1.0f64).abs() < EPS);
    }

    #[test]
    fn prop_with_variants_apply_the_given_op(
        not in arb_not_op(),
        and in arb_and_op(),
        or in arb_or_op(),
        a in arb_degree(),
        b in arb_degree(),
    ) {
        let f = move |_: i32| a;
        let g = move |_: i32| b;

        prop_assert_eq!(complement_with(not, f).degree(0), not.call(a));
        prop_assert_eq!(union_with(or, f, g).degree(0), or.call(a, b));
        prop_assert_eq!(intersection_with(and, f, g).degree(0), and.call(a, b));
    }
}

// ===== Fallible membership functions =====

proptest! {
    #[test]
    fn prop_failures_propagate(f in arb_linear(), g in arb_linear(), x in -50..50i32, hole in -50..50i32) {
        let (f, g) = (linear(f), linear(g));
        let f = move |x: i32| if x == hole { Err(x) } else { Ok(f(x)) };
        let g = move |x: i32| Ok::<_, i32>(g(x));

        let u = union(f, g);
        let i = intersection(g, f);
        let c = complement(f);

        if x == hole {
            prop_assert_eq!(u.try_degree(x), Err(hole));
            prop_assert_eq!(i.try_degree(x), Err(hole));
            prop_assert_eq!(c.try_degree(x), Err(hole));
        } else {
            let (fx, gx) = (f(x).unwrap(), g(x).unwrap());

            prop_assert_eq!(u.try_degree(x), Ok(fx.max(gx)));
            prop_assert_eq!(i.try_degree(x), Ok(gx.min(fx)));
            prop_assert_eq!(c.try_degree(x), Ok(1.0 - fx));
        }
    }

    #[test]
    fn prop_checked_accepts_unit_interval(f in arb_linear(), x in -50..50i32) {
        let f = linear(f);

        prop_assert_eq!(f.checked().try_degree(x), Ok(f(x)));
    }

    #[test]
    fn prop_clamped_is_in_unit_interval(scale in -10.0..10.0f64, x in -50..50i32) {
        let f = move |x: i32| scale * f64::from(x);
        let degree = f.clamped().degree(x);

        prop_assert!((0.0..=1.0).contains(&degree));
    }
}
