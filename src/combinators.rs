//! Adapters returned by the membership operations. Each one is itself a
//! membership function, so they nest: `union(complement(f), g)` works the
//! same whether `f` and `g` are closures or other adapters.

use num::Float;

use crate::degree::ZeroOne;
use crate::error::Error;
use crate::membership::{Membership, TryMembership};
use crate::ops::{AndOp, NotOp, OrOp};

#[derive(Clone, Copy, Debug)]
pub struct Complement<M> {
    op: NotOp,
    inner: M,
}

impl<M> Complement<M> {
    pub fn new(op: NotOp, inner: M) -> Self {
        Self { op, inner }
    }

    pub fn op(&self) -> NotOp {
        self.op
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<X, M: Membership<X>> Membership<X> for Complement<M> {
    type Degree = M::Degree;

    fn degree(&self, x: X) -> Self::Degree {
        self.op.call(self.inner.degree(x))
    }
}

impl<X, M: TryMembership<X>> TryMembership<X> for Complement<M> {
    type Degree = M::Degree;
    type Error = M::Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Self::Error> {
        self.inner.try_degree(x).map(|u| self.op.call(u))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Union<A, B> {
    op: OrOp,
    lhs: A,
    rhs: B,
}

impl<A, B> Union<A, B> {
    pub fn new(op: OrOp, lhs: A, rhs: B) -> Self {
        Self { op, lhs, rhs }
    }

    pub fn op(&self) -> OrOp {
        self.op
    }

    pub fn into_inner(self) -> (A, B) {
        (self.lhs, self.rhs)
    }
}

impl<X, A, B> Membership<X> for Union<A, B>
where
    X: Clone,
    A: Membership<X>,
    B: Membership<X, Degree = A::Degree>,
{
    type Degree = A::Degree;

    fn degree(&self, x: X) -> Self::Degree {
        let u = self.lhs.degree(x.clone());
        let v = self.rhs.degree(x);

        self.op.call(u, v)
    }
}

impl<X, A, B> TryMembership<X> for Union<A, B>
where
    X: Clone,
    A: TryMembership<X>,
    B: TryMembership<X, Degree = A::Degree, Error = A::Error>,
{
    type Degree = A::Degree;
    type Error = A::Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Self::Error> {
        let u = self.lhs.try_degree(x.clone())?;
        let v = self.rhs.try_degree(x)?;

        Ok(self.op.call(u, v))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Intersection<A, B> {
    op: AndOp,
    lhs: A,
    rhs: B,
}

impl<A, B> Intersection<A, B> {
    pub fn new(op: AndOp, lhs: A, rhs: B) -> Self {
        Self { op, lhs, rhs }
    }

    pub fn op(&self) -> AndOp {
        self.op
    }

    pub fn into_inner(self) -> (A, B) {
        (self.lhs, self.rhs)
    }
}

impl<X, A, B> Membership<X> for Intersection<A, B>
where
    X: Clone,
    A: Membership<X>,
    B: Membership<X, Degree = A::Degree>,
{
    type Degree = A::Degree;

    fn degree(&self, x: X) -> Self::Degree {
        let u = self.lhs.degree(x.clone());
        let v = self.rhs.degree(x);

        self.op.call(u, v)
    }
}

impl<X, A, B> TryMembership<X> for Intersection<A, B>
where
    X: Clone,
    A: TryMembership<X>,
    B: TryMembership<X, Degree = A::Degree, Error = A::Error>,
{
    type Degree = A::Degree;
    type Error = A::Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Self::Error> {
        let u = self.lhs.try_degree(x.clone())?;
        let v = self.rhs.try_degree(x)?;

        Ok(self.op.call(u, v))
    }
}

/// Clamps every degree into [0, 1]; NaN becomes zero.
#[derive(Clone, Copy, Debug)]
pub struct Clamped<M>(M);

impl<M> Clamped<M> {
    pub fn new(inner: M) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

fn clamp<F: Float>(degree: F) -> F {
    let clamped = ZeroOne::saturating(degree).get();

    if clamped != degree {
        tracing::debug!(degree = ?degree.to_f64(), clamped = ?clamped.to_f64(), "clamped membership degree");
    }

    clamped
}

impl<X, M: Membership<X>> Membership<X> for Clamped<M> {
    type Degree = M::Degree;

    fn degree(&self, x: X) -> Self::Degree {
        clamp(self.0.degree(x))
    }
}

impl<X, M: TryMembership<X>> TryMembership<X> for Clamped<M> {
    type Degree = M::Degree;
    type Error = M::Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Self::Error> {
        self.0.try_degree(x).map(clamp)
    }
}

/// Rejects any degree outside [0, 1] with [`Error::OutOfRange`].
///
/// Only wraps infallible membership functions. A fallible function can
/// check its own degrees with [`ZeroOne::new`], which yields the same
/// [`Error`], and then compose with a `Checked` one.
#[derive(Clone, Copy, Debug)]
pub struct Checked<M>(M);

impl<M> Checked<M> {
    pub fn new(inner: M) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<X, M: Membership<X>> TryMembership<X> for Checked<M> {
    type Degree = M::Degree;
    type Error = Error;

    fn try_degree(&self, x: X) -> Result<Self::Degree, Error> {
        let degree = self.0.degree(x);

        ZeroOne::new(degree).map(ZeroOne::get).inspect_err(|err| {
            tracing::debug!(%err, "rejected membership degree");
        })
    }
}

#[cfg(test)]
use tracing_test::traced_test;

#[test]
fn test_complement_with_ops() {
    let f = |_: i32| 0.5f64;

    assert_eq!(Complement::new(NotOp::Standard, f).degree(0), 0.5);
    assert!((Complement::new(NotOp::Sugeno { lambda: 1. }, f).degree(0) - 1. / 3.).abs() < 1e-12);
    assert_eq!(Complement::new(NotOp::Yager { w: 1. }, f).op(), NotOp::Yager { w: 1. });
}

#[test]
fn test_union_and_intersection_with_ops() {
    let f = |_: i32| 0.5f64;
    let g = |_: i32| 0.5f64;

    assert_eq!(Union::new(OrOp::ProbOr, f, g).degree(0), 0.75);
    assert_eq!(Union::new(OrOp::BoundedSum, f, g).degree(0), 1.);
    assert_eq!(Intersection::new(AndOp::Prod, f, g).degree(0), 0.25);
    assert_eq!(Intersection::new(AndOp::BoundedProd, f, g).degree(0), 0.);
}

#[test]
fn test_nesting() {
    let f = |x: i32| f64::from(x) / 10.;
    let g = |x: i32| f64::from(10 - x) / 10.;

    // De Morgan: not (f or g) == (not f) and (not g)
    let lhs = Complement::new(NotOp::Standard, Union::new(OrOp::Max, f, g));
    let rhs = Intersection::new(
        AndOp::Min,
        Complement::new(NotOp::Standard, f),
        Complement::new(NotOp::Standard, g),
    );

    for x in 0..=10 {
        assert!((lhs.degree(x) - rhs.degree(x)).abs() < 1e-12);
    }
}

#[test]
fn test_fallible_propagation() {
    #[derive(Debug, PartialEq)]
    struct Undefined(i32);

    let f = |x: i32| if x == 3 { Err(Undefined(x)) } else { Ok(0.2f64) };
    let g = |x: i32| if x == 4 { Err(Undefined(x)) } else { Ok(0.7f64) };

    let u = Union::new(OrOp::Max, f, g);
    let i = Intersection::new(AndOp::Min, f, g);
    let c = Complement::new(NotOp::Standard, f);

    assert_eq!(u.try_degree(0), Ok(0.7));
    assert_eq!(i.try_degree(0), Ok(0.2));
    assert_eq!(c.try_degree(0), Ok(1.0 - 0.2));
    assert_eq!(u.try_degree(3), Err(Undefined(3)));
    assert_eq!(i.try_degree(4), Err(Undefined(4)));
    assert_eq!(c.try_degree(3), Err(Undefined(3)));
}

#[test]
fn test_left_error_wins() {
    let f = |_: i32| Err::<f64, _>("left");
    let g = |_: i32| Err::<f64, _>("right");

    assert_eq!(Union::new(OrOp::Max, f, g).try_degree(0), Err("left"));
    assert_eq!(Intersection::new(AndOp::Min, g, f).try_degree(0), Err("right"));
}

#[test]
fn test_nan_propagates_through_min_and_max() {
    let nan = |_: i32| f64::NAN;
    let half = |_: i32| 0.5f64;

    assert!(Union::new(OrOp::Max, nan, half).degree(0).is_nan());
    assert!(Union::new(OrOp::Max, half, nan).degree(0).is_nan());
    assert!(Intersection::new(AndOp::Min, nan, half).degree(0).is_nan());
    assert!(Intersection::new(AndOp::Min, half, nan).degree(0).is_nan());
}

#[test]
fn test_checked_composes_with_self_checking_fallible() {
    let f = Checked::new(|x: i32| f64::from(x) / 10.);
    let g = |x: i32| ZeroOne::new(f64::from(10 - x) / 10.).map(ZeroOne::get);

    let u = Union::new(OrOp::Max, f, g);

    assert_eq!(u.try_degree(2), Ok(0.8));
    assert_eq!(u.try_degree(11), Err(Error::OutOfRange { degree: 1.1 }));
    assert_eq!(u.try_degree(-1), Err(Error::OutOfRange { degree: -0.1 }));
    assert_eq!(Union::new(OrOp::Max, g, f).try_degree(11), Err(Error::OutOfRange { degree: -0.1 }));
}

#[test]
#[should_panic(expected = "domain exhausted")]
fn test_panics_propagate() {
    let f = |x: i32| if x > 5 { panic!("domain exhausted") } else { 0.1f64 };

    Complement::new(NotOp::Standard, f).degree(6);
}

#[cfg_attr(test, traced_test)]
#[test]
fn test_clamped() {
    let over = Clamped::new(|_: i32| 1.5f64);
    let under = Clamped::new(|_: i32| -0.5f64);
    let nan = Clamped::new(|_: i32| f64::NAN);
    let fine = Clamped::new(|_: i32| 0.3f64);

    assert_eq!(over.degree(0), 1.);
    assert_eq!(under.degree(0), 0.);
    assert_eq!(nan.degree(0), 0.);
    assert_eq!(fine.degree(0), 0.3);
    assert!(logs_contain("clamped membership degree"));
}

#[cfg_attr(test, traced_test)]
#[test]
fn test_checked() {
    let over = Checked::new(|_: i32| 1.5f64);
    let fine = Checked::new(|_: i32| 0.3f64);

    assert_eq!(over.try_degree(0), Err(Error::OutOfRange { degree: 1.5 }));
    assert_eq!(fine.try_degree(0), Ok(0.3));
    assert!(logs_contain("rejected membership degree"));
}
