//! The default path data structure.
//!

use crate::builder::{Build, Builder, PathBuilder};
use crate::commands::PathCommand;
use crate::error::MalformedPath;
use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment, SvgArc};
use crate::math::*;

use std::fmt;
use std::iter::{Flatten, FromIterator};
use std::slice;
use std::str::FromStr;

/// A sequence of commands beginning with a `MoveTo`.
///
/// A sub-path contains exactly one `MoveTo` (its first command) and at most one
/// `ClosePath`, always as its last command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Subpath {
    commands: Box<[PathCommand]>,
}

impl Subpath {
    pub(crate) fn new(commands: Box<[PathCommand]>) -> Self {
        debug_assert!(match commands.first() {
            Some(PathCommand::MoveTo { .. }) => true,
            _ => false,
        });

        Subpath { commands }
    }

    /// The position of the initial `MoveTo`.
    pub fn start(&self) -> Point {
        match self.commands.first() {
            Some(&PathCommand::MoveTo { to }) => to,
            _ => Point::origin(),
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.commands.last() == Some(&PathCommand::ClosePath)
    }

    /// The current point at the end of the sub-path.
    ///
    /// For closed sub-paths this is the start point.
    pub fn last_point(&self) -> Point {
        if self.is_closed() {
            return self.start();
        }

        self.commands
            .last()
            .and_then(PathCommand::to)
            .unwrap_or_else(|| self.start())
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Iterates over the commands, including the initial `MoveTo`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<PathCommand> {
        self.commands.iter()
    }

    /// Number of commands, including the initial `MoveTo`.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Iterates over the segments drawn by this sub-path.
    ///
    /// Closing a sub-path produces a line segment back to the start point, unless
    /// the sub-path already ends there.
    pub fn segments(&self) -> Segments {
        Segments {
            commands: self.commands.iter(),
            first: self.start(),
            current: self.start(),
        }
    }
}

impl<'l> IntoIterator for &'l Subpath {
    type Item = &'l PathCommand;
    type IntoIter = slice::Iter<'l, PathCommand>;

    fn into_iter(self) -> slice::Iter<'l, PathCommand> {
        self.iter()
    }
}

/// A segment drawn by a sub-path, with its start point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathSegment {
    Line(LineSegment<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
    Arc(SvgArc<f64>),
}

impl PathSegment {
    pub fn from(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.from,
            PathSegment::Quadratic(segment) => segment.from,
            PathSegment::Cubic(segment) => segment.from,
            PathSegment::Arc(arc) => arc.from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.to,
            PathSegment::Quadratic(segment) => segment.to,
            PathSegment::Cubic(segment) => segment.to,
            PathSegment::Arc(arc) => arc.to,
        }
    }

    /// Sample the segment at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        match self {
            PathSegment::Line(segment) => segment.sample(t),
            PathSegment::Quadratic(segment) => segment.sample(t),
            PathSegment::Cubic(segment) => segment.sample(t),
            PathSegment::Arc(arc) => arc.to_arc().sample(t),
        }
    }
}

/// An iterator over the segments of a [`Subpath`].
#[derive(Clone)]
pub struct Segments<'l> {
    commands: slice::Iter<'l, PathCommand>,
    first: Point,
    current: Point,
}

impl<'l> Iterator for Segments<'l> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        loop {
            let from = self.current;
            let segment = match *self.commands.next()? {
                PathCommand::MoveTo { to } => {
                    self.first = to;
                    self.current = to;
                    continue;
                }
                PathCommand::LineTo { to } => PathSegment::Line(LineSegment { from, to }),
                PathCommand::QuadTo { ctrl, to } => {
                    PathSegment::Quadratic(QuadraticBezierSegment { from, ctrl, to })
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    PathSegment::Cubic(CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    })
                }
                PathCommand::ArcTo(arc) => PathSegment::Arc(arc),
                PathCommand::ClosePath => {
                    if from == self.first {
                        continue;
                    }
                    PathSegment::Line(LineSegment {
                        from,
                        to: self.first,
                    })
                }
            };

            self.current = segment.to();

            return Some(segment);
        }
    }
}

/// A simple path data structure.
///
/// Paths are immutable sequences of [`Subpath`]s containing absolute commands. They
/// are created with a [`Builder`], usually by the parser (see [`parse_path`](crate::parse_path)).
///
/// With the default parser options a path never contains `ArcTo` commands, arcs
/// are approximated with cubic bézier curves.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    subpaths: Box<[Subpath]>,
}

/// An iterator over all of the commands of a [`Path`].
pub type Commands<'l> = Flatten<slice::Iter<'l, Subpath>>;

impl Path {
    /// Creates a [`Builder`] to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an Empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            subpaths: Box::new([]),
        }
    }

    pub(crate) fn from_subpaths(subpaths: Box<[Subpath]>) -> Path {
        Path { subpaths }
    }

    /// Iterates over the sub-paths.
    #[inline]
    pub fn iter(&self) -> slice::Iter<Subpath> {
        self.subpaths.iter()
    }

    #[inline]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Iterates over the commands of every sub-path, in order.
    pub fn commands(&self) -> Commands {
        self.subpaths.iter().flatten()
    }

    /// Number of sub-paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Total number of commands.
    pub fn num_commands(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Subpath;
    type IntoIter = slice::Iter<'l, Subpath>;

    fn into_iter(self) -> slice::Iter<'l, Subpath> {
        self.iter()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Path {
        let mut builder = Path::builder();
        for cmd in iter {
            builder.push(&cmd);
        }

        builder.build()
    }
}

/// Writes the absolute normal form of the path data.
impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        crate::serializer::write_svg(self, formatter)
    }
}

impl FromStr for Path {
    type Err = MalformedPath;

    fn from_str(src: &str) -> Result<Path, MalformedPath> {
        crate::parse_path(src)
    }
}

#[test]
fn test_path_accessors() {
    let path: Path = "M0 0 L10 0 L10 10 Z M20 20 L30 30".parse().unwrap();

    assert_eq!(path.len(), 2);
    assert_eq!(path.num_commands(), 6);

    let first = &path.subpaths()[0];
    assert_eq!(first.start(), point(0.0, 0.0));
    assert!(first.is_closed());
    assert_eq!(first.last_point(), point(0.0, 0.0));

    let second = &path.subpaths()[1];
    assert_eq!(second.start(), point(20.0, 20.0));
    assert!(!second.is_closed());
    assert_eq!(second.last_point(), point(30.0, 30.0));

    let mut n = 0;
    for subpath in &path {
        for cmd in subpath {
            assert!(cmd.is_edge() || cmd.letter() == 'M');
            n += 1;
        }
    }
    assert_eq!(n, path.commands().count());
}

#[test]
fn test_segments() {
    let path: Path = "M0 0 L10 0 Q10 10 0 10 Z".parse().unwrap();
    let segments: Vec<PathSegment> = path.subpaths()[0].segments().collect();

    assert_eq!(
        segments,
        vec![
            PathSegment::Line(LineSegment {
                from: point(0.0, 0.0),
                to: point(10.0, 0.0)
            }),
            PathSegment::Quadratic(QuadraticBezierSegment {
                from: point(10.0, 0.0),
                ctrl: point(10.0, 10.0),
                to: point(0.0, 10.0)
            }),
            PathSegment::Line(LineSegment {
                from: point(0.0, 10.0),
                to: point(0.0, 0.0)
            }),
        ]
    );

    for pair in segments.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from());
    }
    assert_eq!(segments[1].sample(0.5), point(7.5, 7.5));

    // No closing segment when the sub-path already ends at its start.
    let path: Path = "M0 0 L10 0 L0 0 Z".parse().unwrap();
    assert_eq!(path.subpaths()[0].segments().count(), 2);
}

#[test]
fn test_from_iter() {
    let cmds = vec![
        PathCommand::MoveTo { to: point(1.0, 1.0) },
        PathCommand::LineTo { to: point(2.0, 1.0) },
        PathCommand::ClosePath,
        PathCommand::MoveTo { to: point(5.0, 5.0) },
    ];

    let path: Path = cmds.iter().cloned().collect();
    assert_eq!(path.len(), 2);
    assert_eq!(path.commands().cloned().collect::<Vec<_>>(), cmds);
}

#[test]
fn test_empty_path() {
    let path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path, Path::default());
    assert_eq!(path.to_string(), "");
}
