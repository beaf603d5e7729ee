//! Writing paths back to SVG path data.
//!
//! The output is the absolute normal form of the path: upper-case commands only,
//! separated by single spaces, with numbers printed in their shortest form that
//! parses back to the same `f64`. Parsing the output yields the same path.

use crate::builder::{Build, PathBuilder};
use crate::geom::SvgArc;
use crate::math::Point;
use crate::path::Path;

use std::fmt;

/// A path builder that writes SVG path data.
///
/// ```
/// use pathd::math::point;
/// use pathd::serializer::PathSerializer;
/// use pathd::builder::{Build, PathBuilder};
///
/// let mut serializer = PathSerializer::new();
/// serializer.begin(point(0.0, 0.0));
/// serializer.line_to(point(1.5, -2.0));
/// serializer.close();
///
/// assert_eq!(serializer.build(), "M 0 0 L 1.5 -2 Z");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathSerializer {
    path: String,
}

impl PathSerializer {
    pub fn new() -> Self {
        PathSerializer { path: String::new() }
    }

    fn command(&mut self, letter: char) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(letter);
    }

    fn point(&mut self, p: Point) {
        self.number(p.x);
        self.number(p.y);
    }

    fn number(&mut self, value: f64) {
        use std::fmt::Write;

        // Writing to a String can't fail.
        let _ = write!(self.path, " {}", value);
    }

    fn flag(&mut self, value: bool) {
        self.path.push_str(if value { " 1" } else { " 0" });
    }
}

impl PathBuilder for PathSerializer {
    fn begin(&mut self, at: Point) {
        self.command('M');
        self.point(at);
    }

    fn line_to(&mut self, to: Point) {
        self.command('L');
        self.point(to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.command('Q');
        self.point(ctrl);
        self.point(to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.command('C');
        self.point(ctrl1);
        self.point(ctrl2);
        self.point(to);
    }

    fn arc_to(&mut self, arc: &SvgArc<f64>) {
        self.command('A');
        self.number(arc.radii.x);
        self.number(arc.radii.y);
        self.number(arc.x_rotation.to_degrees());
        self.flag(arc.flags.large_arc);
        self.flag(arc.flags.sweep);
        self.point(arc.to);
    }

    fn close(&mut self) {
        self.command('Z');
    }
}

impl Build for PathSerializer {
    type PathType = String;

    fn build(self) -> String {
        self.path
    }
}

/// Writes the absolute normal form of a path.
pub fn write_svg(path: &Path, output: &mut impl fmt::Write) -> fmt::Result {
    output.write_str(&to_svg_string(path))
}

/// Returns the absolute normal form of a path.
pub fn to_svg_string(path: &Path) -> String {
    let mut serializer = PathSerializer::new();
    for cmd in path.commands() {
        serializer.push(cmd);
    }

    serializer.build()
}

#[cfg(test)]
use crate::parser::ParserOptions;

#[test]
fn normal_form() {
    let path = crate::parse_path("m1 1 l.5 .5 h2 V0 q1 1 2 2 t1 1 z").unwrap();

    assert_eq!(
        to_svg_string(&path),
        "M 1 1 L 1.5 1.5 L 3.5 1.5 L 3.5 0 Q 4.5 1 5.5 2 Q 6.5 3 6.5 3 Z"
    );
    assert_eq!(path.to_string(), to_svg_string(&path));
}

#[test]
fn round_trip() {
    let options = ParserOptions {
        expand_arcs: false,
        ..ParserOptions::DEFAULT
    };

    for src in &[
        "M0 0 L1e-7 3.25 C1 2 3 4 5 6 Z L 1 1",
        "M 10 10 a 20 10 0 1 0 -5 7 s 1 2 3 4",
        "M0.1 0.2 0.3 0.4 Z Z M 1 1",
    ] {
        let path = crate::parse_path_with_options(src, &options).unwrap();
        let text = to_svg_string(&path);
        let reparsed = crate::parse_path_with_options(&text, &options).unwrap();

        assert_eq!(path, reparsed, "{}", text);
    }
}
