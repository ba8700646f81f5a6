use serde::{Deserialize, Serialize};

use crate::combinators::{Complement, Intersection, Union};
use crate::error::Result;
use crate::ops::{AndOp, NotOp, OrOp};

/// Which negation, t-norm and t-conorm to apply. Missing fields fall back to
/// the standard (Zadeh) operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operators {
    pub not: NotOp,
    pub and: AndOp,
    pub or: OrOp,
}

impl Operators {
    /// `1 - a`, `min`, `max`
    pub fn zadeh() -> Self {
        Self::default()
    }

    /// Standard negation with the product t-norm and its dual, the probabilistic sum.
    pub fn probabilistic() -> Self {
        Self {
            not: NotOp::Standard,
            and: AndOp::Prod,
            or: OrOp::ProbOr,
        }
    }

    /// Standard negation with the bounded product and bounded sum.
    pub fn lukasiewicz() -> Self {
        Self {
            not: NotOp::Standard,
            and: AndOp::BoundedProd,
            or: OrOp::BoundedSum,
        }
    }

    pub fn with_not(mut self, not: NotOp) -> Self {
        self.not = not;
        self
    }

    pub fn with_and(mut self, and: AndOp) -> Self {
        self.and = and;
        self
    }

    pub fn with_or(mut self, or: OrOp) -> Self {
        self.or = or;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.not.validate()
    }

    pub fn complement<M>(&self, f: M) -> Complement<M> {
        Complement::new(self.not, f)
    }

    pub fn union<A, B>(&self, f: A, g: B) -> Union<A, B> {
        Union::new(self.or, f, g)
    }

    pub fn intersection<A, B>(&self, f: A, g: B) -> Intersection<A, B> {
        Intersection::new(self.and, f, g)
    }
}

#[cfg(test)]
use crate::membership::Membership;

#[test]
fn test_default_is_zadeh() {
    let ops = Operators::default();

    assert_eq!(ops, Operators::zadeh());
    assert_eq!(ops.not, NotOp::Standard);
    assert_eq!(ops.and, AndOp::Min);
    assert_eq!(ops.or, OrOp::Max);
}

#[test]
fn test_apply_configured_ops() {
    let f = |_: i32| 0.5f64;
    let g = |_: i32| 0.5f64;
    let ops = Operators::probabilistic();

    assert_eq!(ops.complement(f).degree(0), 0.5);
    assert_eq!(ops.union(f, g).degree(0), 0.75);
    assert_eq!(ops.intersection(f, g).degree(0), 0.25);

    let ops = Operators::lukasiewicz();

    assert_eq!(ops.union(f, g).degree(0), 1.);
    assert_eq!(ops.intersection(f, g).degree(0), 0.);
}

#[test]
fn test_validate() {
    assert!(Operators::zadeh().validate().is_ok());
    assert!(Operators::zadeh()
        .with_not(NotOp::Sugeno { lambda: -2. })
        .validate()
        .is_err());
}

#[test]
fn test_deserialize() {
    let ops: Operators = serde_json::from_str(r#"{"and": "prod"}"#).unwrap();

    assert_eq!(ops, Operators::zadeh().with_and(AndOp::Prod));

    let ops: Operators = serde_json::from_str(
        r#"{"not": {"yager": {"w": 2.0}}, "and": "bounded_prod", "or": "drastic_sum"}"#,
    )
    .unwrap();

    assert_eq!(
        ops,
        Operators {
            not: NotOp::Yager { w: 2. },
            and: AndOp::BoundedProd,
            or: OrOp::DrasticSum,
        }
    );
    assert!(serde_json::from_str::<Operators>(r#"{"not": {"sugeno": {"lambda": -3.0}}}"#).is_err());
    assert_eq!(serde_json::to_string(&Operators::zadeh()).unwrap(), r#"{"not":"standard","and":"min","or":"max"}"#);
}
