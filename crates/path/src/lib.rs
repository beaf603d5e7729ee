#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Parsing and normalization of SVG path data.
//!
//! SVG path data (the content of a `d` attribute) is parsed into a [`Path`]: a sequence
//! of sub-paths made of absolute move-to, line-to, quadratic and cubic bézier
//! commands. Relative coordinates, implicit command repetition and smooth curve
//! shorthands are resolved during parsing, and elliptic arcs are approximated with
//! cubic bézier curves.
//!
//! To drive a custom path representation directly, implement the
//! [`PathBuilder`](builder::PathBuilder) trait and use the [`PathParser`].
//!
//! # Examples
//!
//! ```
//! use pathd::{parse_path, PathCommand};
//! use pathd::math::point;
//!
//! let path = parse_path("m 10 10 l 5 5 h 10 z").unwrap();
//!
//! for subpath in &path {
//!     for cmd in subpath {
//!         println!("{:?}", cmd);
//!     }
//! }
//!
//! assert_eq!(
//!     path.commands().nth(1),
//!     Some(&PathCommand::LineTo { to: point(15.0, 15.0) }),
//! );
//!
//! // Paths print in absolute form.
//! assert_eq!(path.to_string(), "M 10 10 L 15 15 L 25 15 Z");
//! ```
//!

pub use pathd_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
pub mod commands;
mod error;
pub mod parser;
pub mod path;
pub mod scanner;
pub mod serializer;

#[doc(inline)]
pub use crate::commands::PathCommand;
pub use crate::error::{MalformedPath, Reason};
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::parser::{ParserOptions, PathParser};
#[doc(inline)]
pub use crate::path::{Path, PathSegment, Subpath};

use crate::builder::Build;
use crate::scanner::Scanner;

pub mod traits {
    //! `pathd` traits reexported here for convenience.

    pub use crate::builder::Build;
    pub use crate::builder::PathBuilder;
}

pub mod math {
    //! f64 version of the pathd_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// Parses SVG path data into a [`Path`].
///
/// Parsing fails on the first error, no partial path is produced.
pub fn parse_path(src: &str) -> Result<Path, MalformedPath> {
    parse_path_with_options(src, &ParserOptions::DEFAULT)
}

/// Parses SVG path data into a [`Path`] with custom parser options.
pub fn parse_path_with_options(src: &str, options: &ParserOptions) -> Result<Path, MalformedPath> {
    let mut builder = Path::builder();
    PathParser::new().parse(options, &mut Scanner::new(src), &mut builder)?;

    Ok(builder.build())
}

#[test]
fn parse_path_entry_point() {
    let path = parse_path("M0 0 L1 1 2 2 3 3").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.num_commands(), 4);

    let err = parse_path("M0 0 L1").unwrap_err();
    assert_eq!(err.offset, 7);
    assert_eq!(err.to_string(), "Line 0 Column 7: Command 'L' expects 2 arguments, got 1.");
}

#[test]
fn paths_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Path>();
    assert_send_sync::<Subpath>();
    assert_send_sync::<PathCommand>();
    assert_send_sync::<MalformedPath>();
}
