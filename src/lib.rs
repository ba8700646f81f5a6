//! Pointwise operations on fuzzy-set membership functions.
//!
//! A membership function maps an element to its degree of membership in
//! [0, 1]. The standard operations are:
//!
//! * [`complement`]: `1 - f(x)`
//! * [`union`]: `max(f(x), g(x))`
//! * [`intersection`]: `min(f(x), g(x))`
//!
//! ```
//! use fuzzy_membership::{complement, intersection, union, Membership};
//!
//! let low = |x: i32| f64::from(x) / 10.;
//! let high = |x: i32| f64::from(10 - x) / 10.;
//!
//! assert!((complement(low).degree(2) - 0.8).abs() < 1e-4);
//! assert!((union(low, high).degree(2) - 0.8).abs() < 1e-4);
//! assert!((intersection(low, high).degree(2) - 0.2).abs() < 1e-4);
//! ```
//!
//! Other negations, t-norms and t-conorms are available through the
//! `*_with` functions and [`Operators`].

mod combinators;
mod config;
mod degree;
mod error;
mod membership;
mod ops;

pub use combinators::{Checked, Clamped, Complement, Intersection, Union};
pub use config::Operators;
pub use degree::ZeroOne;
pub use error::{Error, Result};
pub use membership::{
    complement, complement_with, intersection, intersection_with, union, union_with, Membership, TryMembership,
};
pub use ops::{AndOp, NotOp, OrOp};
