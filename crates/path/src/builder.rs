//! Path building utilities.
//!
//! The parser doesn't produce a [`Path`] directly, it drives a [`PathBuilder`]. The
//! default implementation ([`Builder`], created by [`Path::builder`]) accumulates the
//! commands into an immutable [`Path`]. The [`PathSerializer`](crate::serializer::PathSerializer)
//! implements the same trait to produce the absolute normal form of the path data.
//!
//! ## Examples
//!
//! ```
//! use pathd::{Path, math::point};
//! use pathd::builder::{Build, PathBuilder};
//!
//! let mut builder = Path::builder();
//!
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//!
//! // Beginning a new sub-path implicitly ends the previous one.
//! builder.begin(point(10.0, 0.0));
//! builder.cubic_bezier_to(point(12.0, 2.0), point(11.0, 2.0), point(5.0, 0.0));
//! builder.close();
//!
//! let path = builder.build();
//! assert_eq!(path.len(), 2);
//! ```

use crate::commands::PathCommand;
use crate::geom::SvgArc;
use crate::math::*;
use crate::path::{Path, Subpath};

use std::mem;

/// The base path building interface.
///
/// Coordinates are absolute. Implementations don't need to validate the sequence of
/// calls: every drawing command is preceded by a `begin` when the builder is driven by
/// the parser.
pub trait PathBuilder {
    /// Starts a new sub-path.
    fn begin(&mut self, at: Point);

    fn line_to(&mut self, to: Point);

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point);

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Adds an elliptic arc without approximating it.
    ///
    /// Only called for arcs that are neither empty nor straight lines and when arc
    /// expansion is disabled, see [`expand_arc`].
    fn arc_to(&mut self, arc: &SvgArc<f64>);

    /// Closes the current sub-path, connecting it back to its first point.
    fn close(&mut self);

    /// Adds a command.
    fn push(&mut self, cmd: &PathCommand) {
        match *cmd {
            PathCommand::MoveTo { to } => self.begin(to),
            PathCommand::LineTo { to } => self.line_to(to),
            PathCommand::QuadTo { ctrl, to } => self.quadratic_bezier_to(ctrl, to),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => self.cubic_bezier_to(ctrl1, ctrl2, to),
            PathCommand::ArcTo(ref arc) => self.arc_to(arc),
            PathCommand::ClosePath => self.close(),
        }
    }
}

/// Builders that produce a value once all commands have been added.
pub trait Build {
    /// The type of object that is created by this builder.
    type PathType;

    /// Builds the path object.
    fn build(self) -> Self::PathType;
}

/// Adds an SVG arc to a builder, approximated with cubic bézier curves.
///
/// Per the SVG specification, arcs with identical endpoints are skipped and arcs with
/// a zero radius are replaced with a line segment.
pub fn expand_arc<Builder: PathBuilder>(arc: &SvgArc<f64>, output: &mut Builder) {
    if arc.is_empty() {
        log::debug!("skipping arc with identical endpoints {:?}", arc.to);
        return;
    }

    if arc.is_straight_line() {
        log::debug!("arc with a zero radius replaced with a line to {:?}", arc.to);
        output.line_to(arc.to);
        return;
    }

    arc.for_each_cubic_bezier(&mut |curve| {
        output.cubic_bezier_to(curve.ctrl1, curve.ctrl2, curve.to);
    });
}

/// Accumulates commands into a [`Path`].
///
/// Commands are grouped into sub-paths, each of them beginning with a `MoveTo`.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    subpaths: Vec<Subpath>,
    commands: Vec<PathCommand>,
    first_position: Point,
    current_position: Point,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The endpoint of the last command.
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    fn begin_if_needed(&mut self) {
        if self.commands.is_empty() {
            self.begin(self.first_position);
        }
    }

    fn end_subpath(&mut self) {
        if self.commands.is_empty() {
            return;
        }

        let commands = mem::replace(&mut self.commands, Vec::new());
        self.subpaths.push(Subpath::new(commands.into_boxed_slice()));
    }

    fn push_edge(&mut self, cmd: PathCommand, to: Point) {
        self.begin_if_needed();
        self.commands.push(cmd);
        self.current_position = to;
    }
}

impl PathBuilder for Builder {
    fn begin(&mut self, at: Point) {
        self.end_subpath();

        self.commands.push(PathCommand::MoveTo { to: at });
        self.first_position = at;
        self.current_position = at;
    }

    fn line_to(&mut self, to: Point) {
        self.push_edge(PathCommand::LineTo { to }, to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.push_edge(PathCommand::QuadTo { ctrl, to }, to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push_edge(PathCommand::CubicTo { ctrl1, ctrl2, to }, to);
    }

    fn arc_to(&mut self, arc: &SvgArc<f64>) {
        self.push_edge(PathCommand::ArcTo(*arc), arc.to);
    }

    fn close(&mut self) {
        if self.commands.is_empty() {
            return;
        }

        self.commands.push(PathCommand::ClosePath);
        self.current_position = self.first_position;
        self.end_subpath();
    }
}

impl Build for Builder {
    type PathType = Path;

    fn build(mut self) -> Path {
        self.end_subpath();

        Path::from_subpaths(self.subpaths.into_boxed_slice())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::ArcFlags;

    #[test]
    fn split_on_move_to() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 0.0));
        builder.begin(point(5.0, 5.0));
        builder.begin(point(10.0, 0.0));
        builder.line_to(point(11.0, 0.0));
        builder.close();

        let path = builder.build();

        assert_eq!(path.len(), 3);
        assert_eq!(path.subpaths()[0].len(), 2);
        assert_eq!(path.subpaths()[1].len(), 1);
        assert!(path.subpaths()[2].is_closed());
        assert!(!path.subpaths()[0].is_closed());
    }

    #[test]
    fn drawing_after_close_restarts_at_the_first_point() {
        let mut builder = Path::builder();
        builder.begin(point(1.0, 1.0));
        builder.line_to(point(2.0, 1.0));
        builder.close();
        assert_eq!(builder.current_position(), point(1.0, 1.0));
        builder.line_to(point(3.0, 3.0));

        let path = builder.build();
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.subpaths()[1].commands(),
            &[
                PathCommand::MoveTo { to: point(1.0, 1.0) },
                PathCommand::LineTo { to: point(3.0, 3.0) },
            ]
        );
    }

    #[test]
    fn redundant_close_is_ignored() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 0.0));
        builder.close();
        builder.close();

        let path = builder.build();
        assert_eq!(path.len(), 1);
        assert_eq!(path.num_commands(), 3);
    }

    #[test]
    fn empty_builder() {
        let path = Path::builder().build();
        assert!(path.is_empty());
        assert_eq!(path.commands().next(), None);
    }

    #[test]
    fn builds_are_identical() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.cubic_bezier_to(point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0));

        assert_eq!(builder.clone().build(), builder.build());
    }

    #[test]
    fn expand_degenerate_arcs() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        let line = SvgArc {
            from: point(0.0, 0.0),
            to: point(10.0, 10.0),
            radii: vector(0.0, 0.0),
            x_rotation: Angle::zero(),
            flags: ArcFlags::default(),
        };
        expand_arc(&line, &mut builder);
        let empty = SvgArc {
            from: point(10.0, 10.0),
            radii: vector(3.0, 3.0),
            ..line
        };
        expand_arc(&empty, &mut builder);

        let path = builder.build();
        assert_eq!(
            path.commands().cloned().collect::<Vec<_>>(),
            vec![
                PathCommand::MoveTo { to: point(0.0, 0.0) },
                PathCommand::LineTo { to: point(10.0, 10.0) },
            ]
        );
    }
}
