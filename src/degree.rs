use num::Float;

use crate::error::{Error, Result};

/// A value between zero and one
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ZeroOne<F>(F);

impl<F: Float> ZeroOne<F> {
    /// Fails on anything outside [0, 1], including NaN.
    pub fn new(degree: F) -> Result<Self> {
        if degree >= F::zero() && degree <= F::one() {
            Ok(Self(degree))
        } else {
            Err(Error::OutOfRange {
                degree: degree.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Clamps into [0, 1]. NaN becomes zero.
    pub fn saturating(degree: F) -> Self {
        if degree.is_nan() {
            Self(F::zero())
        } else {
            Self(degree.max(F::zero()).min(F::one()))
        }
    }

    pub fn zero() -> Self {
        Self(F::zero())
    }

    pub fn one() -> Self {
        Self(F::one())
    }

    pub fn get(self) -> F {
        self.0
    }
}

impl From<ZeroOne<f32>> for f32 {
    fn from(z: ZeroOne<f32>) -> Self {
        z.0
    }
}

impl From<ZeroOne<f64>> for f64 {
    fn from(z: ZeroOne<f64>) -> Self {
        z.0
    }
}

#[test]
fn test_new_bounds() {
    assert_eq!(ZeroOne::new(0.0f64).map(ZeroOne::get), Ok(0.0));
    assert_eq!(ZeroOne::new(1.0f64).map(ZeroOne::get), Ok(1.0));
    assert_eq!(ZeroOne::new(1.5f64), Err(Error::OutOfRange { degree: 1.5 }));
    assert_eq!(ZeroOne::new(-0.1f32).map(ZeroOne::get), Err(Error::OutOfRange { degree: -0.1f32 as f64 }));
    assert!(ZeroOne::new(f64::NAN).is_err());
}

#[test]
fn test_saturating() {
    assert_eq!(ZeroOne::saturating(2.0f64).get(), 1.0);
    assert_eq!(ZeroOne::saturating(-3.0f64).get(), 0.0);
    assert_eq!(ZeroOne::saturating(0.25f64).get(), 0.25);
    assert_eq!(ZeroOne::saturating(f64::NAN).get(), 0.0);
    assert!(ZeroOne::<f32>::zero() < ZeroOne::one());
}

#[test]
fn test_into_float() {
    let degree: f64 = ZeroOne::new(0.75f64).unwrap().into();
    let single: f32 = ZeroOne::<f32>::one().into();

    assert_eq!(degree, 0.75);
    assert_eq!(single, 1.0);
}
