use num::Float;

use crate::combinators::{Checked, Clamped, Complement, Intersection, Union};
use crate::ops::{AndOp, NotOp, OrOp};

/// A fuzzy membership function: maps an element of the domain `X` to its
/// degree of membership, nominally in [0, 1].
///
/// Any `Fn(X) -> F` where `F: Float` is a membership function. Degrees are
/// not range checked; see [`Membership::clamped`] and [`Membership::checked`]
/// for the opt-in alternatives.
pub trait Membership<X> {
    type Degree: Float;

    fn degree(&self, x: X) -> Self::Degree;

    /// `1 - f(x)`
    fn complement(self) -> Complement<Self>
    where
        Self: Sized,
    {
        Complement::new(NotOp::Standard, self)
    }

    /// `max(f(x), g(x))`
    fn union<G>(self, other: G) -> Union<Self, G>
    where
        Self: Sized,
        G: Membership<X, Degree = Self::Degree>,
    {
        Union::new(OrOp::Max, self, other)
    }

    /// `min(f(x), g(x))`
    fn intersection<G>(self, other: G) -> Intersection<Self, G>
    where
        Self: Sized,
        G: Membership<X, Degree = Self::Degree>,
    {
        Intersection::new(AndOp::Min, self, other)
    }

    fn clamped(self) -> Clamped<Self>
    where
        Self: Sized,
    {
        Clamped::new(self)
    }

    fn checked(self) -> Checked<Self>
    where
        Self: Sized,
    {
        Checked::new(self)
    }

    /// Erase the adapter type into a plain closure.
    fn into_fn(self) -> impl Fn(X) -> Self::Degree
    where
        Self: Sized,
    {
        move |x| self.degree(x)
    }
}

impl<X, F, M> Membership<X> for M
where
    F: Float,
    M: Fn(X) -> F,
{
    type Degree = F;

    #[inline]
    fn degree(&self, x: X) -> F {
        self(x)
    }
}

/// A membership function whose evaluation can fail. Combinators built over
/// fallible functions surface the first error encountered, evaluating the
/// left operand before the right one.
pub trait TryMembership<X> {
    type Degree: Float;
    type Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Self::Error>;
}

impl<X, F, E, M> TryMembership<X> for M
where
    F: Float,
    M: Fn(X) -> Result<F, E>,
{
    type Degree = F;
    type Error = E;

    #[inline]
    fn try_degree(&self, x: X) -> Result<F, E> {
        self(x)
    }
}

/// Standard fuzzy complement, `1 - f(x)`.
///
/// The result evaluates through [`Membership`] or [`TryMembership`],
/// whichever `f` implements.
pub fn complement<M>(f: M) -> Complement<M> {
    Complement::new(NotOp::Standard, f)
}

/// Standard fuzzy union, `max(f(x), g(x))`.
pub fn union<A, B>(f: A, g: B) -> Union<A, B> {
    Union::new(OrOp::Max, f, g)
}

/// Standard fuzzy intersection, `min(f(x), g(x))`.
pub fn intersection<A, B>(f: A, g: B) -> Intersection<A, B> {
    Intersection::new(AndOp::Min, f, g)
}

pub fn complement_with<M>(op: NotOp, f: M) -> Complement<M> {
    Complement::new(op, f)
}

pub fn union_with<A, B>(op: OrOp, f: A, g: B) -> Union<A, B> {
    Union::new(op, f, g)
}

pub fn intersection_with<A, B>(op: AndOp, f: A, g: B) -> Intersection<A, B> {
    Intersection::new(op, f, g)
}

#[test]
fn test_closures_are_memberships() {
    let half = |_: i32| 0.5f64;
    let linear = |x: i32| f64::from(x) / 10.;

    assert_eq!(half.degree(3), 0.5);
    assert_eq!(linear.degree(2), 0.2);
}

#[test]
fn test_method_forms_match_free_functions() {
    let f = |x: i32| f64::from(x) / 10.;
    let g = |x: i32| f64::from(10 - x) / 10.;

    for x in 0..=10 {
        assert_eq!(f.complement().degree(x), complement(f).degree(x));
        assert_eq!(f.union(g).degree(x), union(f, g).degree(x));
        assert_eq!(f.intersection(g).degree(x), intersection(f, g).degree(x));
    }
}

#[test]
fn test_into_fn() {
    let f = |x: i32| f64::from(x) / 10.;
    let not_f = f.complement().into_fn();
    let degrees: Vec<f64> = (0..3).map(not_f).collect();

    assert_eq!(degrees, vec![1.0, 1.0 - 0.1, 1.0 - 0.2]);
}

#[test]
fn test_fallible_closures() {
    let f = |x: i32| if x >= 0 { Ok(0.5f64) } else { Err("negative") };

    assert_eq!(f.try_degree(1), Ok(0.5));
    assert_eq!(f.try_degree(-1), Err("negative"));
}
