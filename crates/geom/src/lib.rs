#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [pathd](https://docs.rs/pathd/) as `pathd::geom`.
//!
//! # Overview.
//!
//! This crate implements the maths needed to describe the segments of an SVG path:
//!
//! - line segments,
//! - quadratic and cubic bézier curves,
//! - elliptic arcs, both in the SVG endpoint parameterization ([`SvgArc`]) and in
//!   the center parameterization ([`Arc`]).
//!
//! # Arcs
//!
//! Most graphics APIs don't have a native elliptic arc primitive, so arcs are
//! approximated with a sequence of at most four cubic bézier curves, each of them
//! spanning at most a quarter of the ellipse.
//!
//! ```
//! use pathd_geom::{point, vector, Angle, ArcFlags, SvgArc};
//!
//! let arc = SvgArc {
//!     from: point(0.0, 0.0),
//!     to: point(10.0, 0.0),
//!     radii: vector(5.0, 5.0),
//!     x_rotation: Angle::degrees(0.0),
//!     flags: ArcFlags { large_arc: false, sweep: true },
//! };
//!
//! let curves = arc.to_cubic_beziers();
//! assert_eq!(curves.len(), 2);
//! assert_eq!(curves[1].to, point(10.0, 0.0));
//! ```

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod cubic_bezier;
mod line;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::arc::{Arc, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use std::fmt::{Debug, Display};
    use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
