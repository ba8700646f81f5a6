use num::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Negation method for computing the complement of a membership degree.
///
/// Deserializing runs [`NotOp::validate`], so out-of-range parameters are
/// rejected at load time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "NotOpRepr")]
pub enum NotOp {
    /// 1 - a
    #[default]
    Standard,
    /// (1 - a) / (1 + λa), λ > -1
    Sugeno { lambda: f64 },
    /// (1 - a^w)^(1/w), w > 0
    Yager { w: f64 },
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum NotOpRepr {
    Standard,
    Sugeno { lambda: f64 },
    Yager { w: f64 },
}

impl TryFrom<NotOpRepr> for NotOp {
    type Error = Error;

    fn try_from(repr: NotOpRepr) -> Result<Self> {
        match repr {
            NotOpRepr::Standard => Ok(Self::Standard),
            NotOpRepr::Sugeno { lambda } => Self::sugeno(lambda),
            NotOpRepr::Yager { w } => Self::yager(w),
        }
    }
}

impl NotOp {
    pub fn sugeno(lambda: f64) -> Result<Self> {
        let op = Self::Sugeno { lambda };
        op.validate()?;
        Ok(op)
    }

    pub fn yager(w: f64) -> Result<Self> {
        let op = Self::Yager { w };
        op.validate()?;
        Ok(op)
    }

    pub fn validate(&self) -> Result<()> {
        let err = match *self {
            Self::Standard => return Ok(()),
            Self::Sugeno { lambda } if lambda > -1. => return Ok(()),
            Self::Yager { w } if w > 0. => return Ok(()),
            Self::Sugeno { lambda } => Error::InvalidParameter {
                name: "lambda",
                value: lambda,
                reason: "sugeno negation requires lambda > -1",
            },
            Self::Yager { w } => Error::InvalidParameter {
                name: "w",
                value: w,
                reason: "yager negation requires w > 0",
            },
        };

        tracing::debug!(op = ?self, "rejected negation parameter");

        Err(err)
    }

    pub fn call<F: Float>(self, u: F) -> F {
        match self {
            Self::Standard => F::one() - u,
            Self::Sugeno { lambda } => {
                let lambda = F::from(lambda).expect("unreachable");
                (F::one() - u) / (F::one() + lambda * u)
            },
            Self::Yager { w } => {
                let w = F::from(w).expect("unreachable");
                (F::one() - u.powf(w)).powf(w.recip())
            },
        }
    }
}

/// And operator method for intersecting two membership degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            // F::min drops a NaN operand
            Self::Min if u.is_nan() || v.is_nan() => F::nan(),
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if u == F::one() {
                    v
                } else if v == F::one() {
                    u
                } else {
                    F::zero()
                }
            },
        }
    }
}

/// Or operator method for uniting two membership degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max if u.is_nan() || v.is_nan() => F::nan(),
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if u == F::zero() {
                    v
                } else if v == F::zero() {
                    u
                } else {
                    F::one()
                }
            },
        }
    }
}

#[test]
fn test_not_ops() {
    assert_eq!(NotOp::Standard.call(0.25f64), 0.75);
    assert_eq!(NotOp::Standard.call(1.0f32), 0.0);

    // λ = 0 degenerates to the standard negation
    let sugeno = NotOp::sugeno(0.).unwrap();
    assert_eq!(sugeno.call(0.3f64), NotOp::Standard.call(0.3f64));

    let sugeno = NotOp::sugeno(1.).unwrap();
    assert!((sugeno.call(0.5f64) - 1. / 3.).abs() < 1e-12);

    // w = 2 gives the circle sqrt(1 - a^2)
    let yager = NotOp::yager(2.).unwrap();
    assert!((yager.call(0.6f64) - 0.8).abs() < 1e-12);

    for op in [NotOp::Standard, sugeno, yager] {
        assert_eq!(op.call(0.0f64), 1.0);
        assert!(op.call(1.0f64).abs() < 1e-12);
    }
}

#[test]
fn test_not_op_parameters() {
    assert_eq!(
        NotOp::sugeno(-1.),
        Err(Error::InvalidParameter {
            name: "lambda",
            value: -1.,
            reason: "sugeno negation requires lambda > -1",
        })
    );
    assert!(NotOp::yager(0.).is_err());
    assert!(NotOp::yager(f64::NAN).is_err());
    assert!(NotOp::Yager { w: -2. }.validate().is_err());
    assert!(NotOp::Standard.validate().is_ok());
}

#[cfg(test)]
use tracing_test::traced_test;

#[cfg_attr(test, traced_test)]
#[test]
fn test_rejected_parameter_is_logged() {
    assert!(NotOp::sugeno(-5.).is_err());
    assert!(logs_contain("rejected negation parameter"));
}

#[test]
fn test_deserialize_validates() {
    let op: NotOp = serde_json::from_str(r#"{"sugeno": {"lambda": 0.5}}"#).unwrap();

    assert_eq!(op, NotOp::Sugeno { lambda: 0.5 });
    assert_eq!(serde_json::from_str::<NotOp>(r#""standard""#).unwrap(), NotOp::Standard);
    assert!(serde_json::from_str::<NotOp>(r#"{"sugeno": {"lambda": -3.0}}"#).is_err());
    assert!(serde_json::from_str::<NotOp>(r#"{"yager": {"w": 0.0}}"#).is_err());
}

#[test]
fn test_min_max_propagate_nan() {
    assert!(AndOp::Min.call(f64::NAN, 0.5).is_nan());
    assert!(AndOp::Min.call(0.5, f64::NAN).is_nan());
    assert!(OrOp::Max.call(f64::NAN, 0.5).is_nan());
    assert!(OrOp::Max.call(0.5, f64::NAN).is_nan());
}

#[test]
fn test_and_ops() {
    assert_eq!(AndOp::Min.call(0.9f64, 0.1), 0.1);
    assert_eq!(AndOp::Prod.call(0.5f64, 0.5), 0.25);
    assert_eq!(AndOp::BoundedProd.call(0.3f64, 0.4), 0.);
    assert!((AndOp::BoundedProd.call(0.8f64, 0.7) - 0.5).abs() < 1e-12);
    assert_eq!(AndOp::DrasticProd.call(1.0f64, 0.4), 0.4);
    assert_eq!(AndOp::DrasticProd.call(0.4f64, 1.0), 0.4);
    assert_eq!(AndOp::DrasticProd.call(0.9f64, 0.9), 0.);
}

#[test]
fn test_or_ops() {
    assert_eq!(OrOp::Max.call(0.9f64, 0.1), 0.9);
    assert_eq!(OrOp::ProbOr.call(0.5f64, 0.5), 0.75);
    assert_eq!(OrOp::BoundedSum.call(0.8f64, 0.7), 1.);
    assert_eq!(OrOp::BoundedSum.call(0.25f64, 0.5), 0.75);
    assert_eq!(OrOp::DrasticSum.call(0.0f64, 0.4), 0.4);
    assert_eq!(OrOp::DrasticSum.call(0.4f64, 0.0), 0.4);
    assert_eq!(OrOp::DrasticSum.call(0.1f64, 0.1), 1.);
}
