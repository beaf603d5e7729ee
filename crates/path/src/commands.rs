//! The normalized drawing commands stored in a [`Path`](crate::Path).

use crate::geom::SvgArc;
use crate::math::Point;

/// A single absolute drawing command.
///
/// Commands don't depend on any state: relative coordinates and smooth curve
/// shorthands are resolved by the parser. The start of a segment is the endpoint of
/// the previous command, except for arcs which carry their own start point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Only present in paths parsed with arc expansion disabled.
    ArcTo(SvgArc<f64>),
    ClosePath,
}

impl PathCommand {
    /// The endpoint of this command, if any.
    pub fn to(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ArcTo(arc) => Some(arc.to),
            PathCommand::ClosePath => None,
        }
    }

    /// Returns true for commands that draw an edge.
    pub fn is_edge(&self) -> bool {
        match self {
            PathCommand::MoveTo { .. } => false,
            _ => true,
        }
    }

    /// The absolute SVG command letter corresponding to this command.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo { .. } => 'M',
            PathCommand::LineTo { .. } => 'L',
            PathCommand::QuadTo { .. } => 'Q',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::ArcTo(..) => 'A',
            PathCommand::ClosePath => 'Z',
        }
    }
}
