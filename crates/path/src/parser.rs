//! Parsing of the SVG path data syntax.
//!
//! The parser reads the source with a [`Scanner`] and drives a [`PathBuilder`] with
//! absolute commands: relative coordinates, implicit command repetition and smooth
//! curve shorthands are resolved here. Arcs are approximated with cubic bézier
//! curves unless [`ParserOptions::expand_arcs`] is disabled.

use crate::builder::{expand_arc, PathBuilder};
use crate::error::{MalformedPath, Reason};
use crate::geom::{ArcFlags, SvgArc};
use crate::math::{point, vector, Angle, Point};
use crate::scanner::{Mark, Scanner};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParserOptions {
    /// Optionally stop parsing when encountering a provided special character.
    ///
    /// The character must not be a separator, a digit or a command letter.
    pub stop_at: Option<char>,
    /// Approximate arcs with cubic bézier curves.
    ///
    /// When false, arcs are forwarded to [`PathBuilder::arc_to`]. Arcs with identical
    /// endpoints or a zero radius are normalized either way.
    pub expand_arcs: bool,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        stop_at: None,
        expand_arcs: true,
    };
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions::DEFAULT
    }
}

/// A context object for parsing SVG path data.
///
/// The parser can be reused for several paths, no state is kept between calls to
/// [`PathParser::parse`].
///
/// # Example
///
/// ```
/// use pathd::{Path, ParserOptions, PathParser};
/// use pathd::builder::Build;
/// use pathd::scanner::Scanner;
///
/// let mut parser = PathParser::new();
/// let mut builder = Path::builder();
///
/// let mut src = Scanner::new("M 0 0 h 10 v 10 h -10 z");
/// parser.parse(&ParserOptions::DEFAULT, &mut src, &mut builder).unwrap();
///
/// let path = builder.build();
/// assert_eq!(path.num_commands(), 5);
/// ```
#[derive(Debug, Default)]
pub struct PathParser {
    current_position: Point,
    first_position: Point,
    prev_cubic_ctrl: Option<Point>,
    prev_quadratic_ctrl: Option<Point>,
    stop_at: Option<char>,
    // The command being parsed and its argument count, for error reporting.
    cmd: char,
    expected: u8,
    got: u8,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the path data and forwards the resulting commands to the builder.
    ///
    /// Parsing stops at the end of the input, at [`ParserOptions::stop_at`] or at
    /// the first error. Commands parsed before an error have already been sent to
    /// the builder, which should be discarded in this case.
    pub fn parse<Builder>(
        &mut self,
        options: &ParserOptions,
        src: &mut Scanner,
        output: &mut Builder,
    ) -> Result<(), MalformedPath>
    where
        Builder: PathBuilder,
    {
        *self = PathParser {
            stop_at: options.stop_at,
            ..PathParser::default()
        };

        let res = self.parse_path(options, src, output);

        if let Err(e) = &res {
            log::debug!("malformed path data at byte {}: {}", e.offset, e);
        }

        res
    }

    fn parse_path(
        &mut self,
        options: &ParserOptions,
        src: &mut Scanner,
        output: &mut impl PathBuilder,
    ) -> Result<(), MalformedPath> {
        // The current position starts at the origin, so a leading `m` is absolute.
        let mut is_first = true;
        // Set after a close: the next drawing command starts a new sub-path at the same point.
        let mut need_start = false;
        let mut implicit_cmd = None;

        src.skip_separators();

        while !src.is_finished() {
            if self.at_stop(src) {
                break;
            }

            let cmd_mark = src.mark();
            let cmd = if src.at_number() {
                match implicit_cmd {
                    Some(cmd) => cmd,
                    None => return Err(src.error(Reason::UnexpectedNumber)),
                }
            } else {
                src.command()?
            };

            if is_first && cmd != 'm' && cmd != 'M' {
                return Err(src.error_at(cmd_mark, Reason::MissingMoveTo { command: cmd }));
            }
            is_first = false;

            let is_close = cmd == 'z' || cmd == 'Z';
            if need_start && is_close {
                // Closing an already closed sub-path has no effect.
                implicit_cmd = None;
                src.skip_separators();
                continue;
            }

            if need_start && cmd != 'm' && cmd != 'M' {
                log::trace!("implicit sub-path at {:?}", self.first_position);
                output.begin(self.first_position);
                need_start = false;
            }

            self.cmd = cmd;
            self.got = 0;
            self.expected = match cmd.to_ascii_uppercase() {
                'H' | 'V' => 1,
                'M' | 'L' | 'T' => 2,
                'Q' | 'S' => 4,
                'C' => 6,
                'A' => 7,
                _ => 0,
            };

            let is_relative = cmd.is_ascii_lowercase();

            match cmd {
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mark = self.argument_mark(src);
                    let mut x = self.parse_number(src)?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = self.check_range(src, mark, point(x, self.current_position.y))?;
                    self.current_position = to;
                    output.line_to(to);
                }
                'v' | 'V' => {
                    let mark = self.argument_mark(src);
                    let mut y = self.parse_number(src)?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = self.check_range(src, mark, point(self.current_position.x, y))?;
                    self.current_position = to;
                    output.line_to(to);
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                't' | 'T' => {
                    let ctrl = self.get_smooth_ctrl(self.prev_quadratic_ctrl);
                    let ctrl = self.check_range(src, cmd_mark, ctrl)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, src)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = self.get_smooth_ctrl(self.prev_cubic_ctrl);
                    let ctrl1 = self.check_range(src, cmd_mark, ctrl1)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'a' | 'A' => {
                    let from = self.current_position;
                    let rx = self.parse_number(src)?;
                    let ry = self.parse_number(src)?;
                    let x_rotation = self.parse_number(src)?;
                    let large_arc = self.parse_flag(src)?;
                    let sweep = self.parse_flag(src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    let svg_arc = SvgArc {
                        from,
                        to,
                        radii: vector(rx.abs(), ry.abs()),
                        x_rotation: Angle::degrees(x_rotation % 360.0),
                        flags: ArcFlags { large_arc, sweep },
                    };

                    if options.expand_arcs || svg_arc.is_empty() || svg_arc.is_straight_line() {
                        expand_arc(&svg_arc, output);
                    } else {
                        output.arc_to(&svg_arc);
                    }
                }
                'm' | 'M' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    self.first_position = to;
                    log::trace!("sub-path at {:?}", to);
                    output.begin(to);
                    need_start = false;
                }
                'z' | 'Z' => {
                    output.close();
                    self.current_position = self.first_position;
                    need_start = true;
                }
                _ => {
                    // The scanner only produces valid command letters.
                    return Err(src.error_at(cmd_mark, Reason::Command { command: cmd }));
                }
            }

            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    self.prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    self.prev_cubic_ctrl = None;
                }
                _ => {
                    self.prev_cubic_ctrl = None;
                    self.prev_quadratic_ctrl = None;
                }
            }

            implicit_cmd = match cmd {
                'm' => Some('l'),
                'M' => Some('L'),
                'z' | 'Z' => None,
                c => Some(c),
            };

            src.skip_separators();
        }

        Ok(())
    }

    fn at_stop(&self, src: &Scanner) -> bool {
        self.stop_at.is_some() && src.current() == self.stop_at
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current_position + (self.current_position - prev_ctrl)
        } else {
            self.current_position
        }
    }

    fn parse_endpoint(&mut self, is_relative: bool, src: &mut Scanner) -> Result<Point, MalformedPath> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(&mut self, is_relative: bool, src: &mut Scanner) -> Result<Point, MalformedPath> {
        let mark = self.argument_mark(src);
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        self.check_range(src, mark, point(x, y))
    }

    fn argument_mark(&self, src: &mut Scanner) -> Mark {
        src.skip_separators();
        src.mark()
    }

    // Literals are finite but resolving relative coordinates or reflecting control
    // points can overflow.
    fn check_range(&self, src: &Scanner, mark: Mark, p: Point) -> Result<Point, MalformedPath> {
        if p.x.is_finite() && p.y.is_finite() {
            return Ok(p);
        }

        Err(src.error_at(mark, Reason::OutOfRange { command: self.cmd }))
    }

    // Fails with a missing argument error at the end of the input, at a command
    // letter or at the stop character.
    fn expect_argument(&self, src: &mut Scanner) -> Result<(), MalformedPath> {
        src.skip_separators();

        if src.is_finished() || src.at_command() || self.at_stop(src) {
            return Err(src.error(Reason::MissingArguments {
                command: self.cmd,
                expected: self.expected,
                got: self.got,
            }));
        }

        match src.current() {
            Some(c) if c.is_ascii_alphabetic() => Err(src.error(Reason::Command { command: c })),
            _ => Ok(()),
        }
    }

    fn parse_number(&mut self, src: &mut Scanner) -> Result<f64, MalformedPath> {
        self.expect_argument(src)?;
        let value = src.number()?;
        self.got += 1;

        Ok(value)
    }

    fn parse_flag(&mut self, src: &mut Scanner) -> Result<bool, MalformedPath> {
        self.expect_argument(src)?;
        let flag = src.flag()?;
        self.got += 1;

        Ok(flag)
    }
}

#[cfg(test)]
use approx::assert_abs_diff_eq;
#[cfg(test)]
use crate::builder::Build;
#[cfg(test)]
use crate::commands::PathCommand;
#[cfg(test)]
use crate::path::Path;

#[cfg(test)]
fn parse_with(src: &str, options: &ParserOptions) -> Result<Path, MalformedPath> {
    let mut builder = Path::builder();
    PathParser::new().parse(options, &mut Scanner::new(src), &mut builder)?;

    Ok(builder.build())
}

#[cfg(test)]
fn parse(src: &str) -> Result<Path, MalformedPath> {
    parse_with(src, &ParserOptions::DEFAULT)
}

#[cfg(test)]
fn commands(src: &str) -> Vec<PathCommand> {
    parse(src).unwrap().commands().cloned().collect()
}

#[cfg(test)]
fn reason(src: &str) -> Reason {
    parse(src).unwrap_err().reason
}

#[test]
fn empty() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse(" \n, ").unwrap().is_empty());
}

#[test]
fn implicit_polyline() {
    use PathCommand::*;

    assert_eq!(
        commands("M0 0 L1 1 2 2 3 3"),
        vec![
            MoveTo { to: point(0.0, 0.0) },
            LineTo { to: point(1.0, 1.0) },
            LineTo { to: point(2.0, 2.0) },
            LineTo { to: point(3.0, 3.0) },
        ]
    );

    // Extra pairs after a move-to are line-tos.
    assert_eq!(commands("M0 0 1 1 2 2"), commands("M0 0 L1 1 L2 2"));
    assert_eq!(commands("m1 1 1 1 1 1"), commands("M1 1 L2 2 L3 3"));
}

#[test]
fn relative_coordinates() {
    use PathCommand::*;

    assert_eq!(
        commands("m10 10 l5 5"),
        vec![
            MoveTo { to: point(10.0, 10.0) },
            LineTo { to: point(15.0, 15.0) },
        ]
    );

    assert_eq!(
        commands("M1 2 h3 v4 H0 V0 q1 1 2 0 c1 0 1 1 0 1"),
        vec![
            MoveTo { to: point(1.0, 2.0) },
            LineTo { to: point(4.0, 2.0) },
            LineTo { to: point(4.0, 6.0) },
            LineTo { to: point(0.0, 6.0) },
            LineTo { to: point(0.0, 0.0) },
            QuadTo {
                ctrl: point(1.0, 1.0),
                to: point(2.0, 0.0)
            },
            CubicTo {
                ctrl1: point(3.0, 0.0),
                ctrl2: point(3.0, 1.0),
                to: point(2.0, 1.0)
            },
        ]
    );
}

#[test]
fn smooth_quadratic() {
    use PathCommand::*;

    // The previous control point (0, 0) reflected through (10, 10).
    assert_eq!(
        commands("M0 0 Q0 0 10 10 T20 0")[2],
        QuadTo {
            ctrl: point(20.0, 20.0),
            to: point(20.0, 0.0)
        }
    );

    // Without a preceding quadratic curve the control point is the current point.
    assert_eq!(
        commands("M0 0 L10 10 T20 0")[2],
        QuadTo {
            ctrl: point(10.0, 10.0),
            to: point(20.0, 0.0)
        }
    );
    assert_eq!(
        commands("M0 0 C1 1 2 2 10 10 T20 0")[2],
        QuadTo {
            ctrl: point(10.0, 10.0),
            to: point(20.0, 0.0)
        }
    );

    // Chained shorthands reflect the implied control points.
    assert_eq!(
        commands("M0 0 Q5 5 10 0 t10 0 t10 0")[3],
        QuadTo {
            ctrl: point(25.0, 5.0),
            to: point(30.0, 0.0)
        }
    );
}

#[test]
fn smooth_cubic() {
    use PathCommand::*;

    assert_eq!(
        commands("M0 0 C0 5 5 10 10 10 S20 5 20 0")[2],
        CubicTo {
            ctrl1: point(15.0, 10.0),
            ctrl2: point(20.0, 5.0),
            to: point(20.0, 0.0)
        }
    );
    assert_eq!(
        commands("M0 0 Q5 5 10 10 s10 -5 10 -10")[2],
        CubicTo {
            ctrl1: point(10.0, 10.0),
            ctrl2: point(20.0, 5.0),
            to: point(20.0, 0.0)
        }
    );
}

#[test]
fn close_path() {
    use PathCommand::*;

    let path = parse("M1 1 L2 1 Z L3 3").unwrap();
    assert_eq!(path.len(), 2);
    assert!(path.subpaths()[0].is_closed());
    assert_eq!(
        path.subpaths()[1].commands(),
        &[MoveTo { to: point(1.0, 1.0) }, LineTo { to: point(3.0, 3.0) }]
    );

    // Relative coordinates after a close are relative to the start of the sub-path.
    assert_eq!(commands("m1 1 l1 0 z l1 1")[4], LineTo { to: point(2.0, 2.0) });

    assert_eq!(commands("M0 0 L1 0 Z Z z"), commands("M0 0 L1 0 Z"));
    assert_eq!(
        commands("M0 0 Z M1 1 Z"),
        vec![MoveTo { to: point(0.0, 0.0) }, ClosePath, MoveTo { to: point(1.0, 1.0) }, ClosePath]
    );

    assert_eq!(reason("M0 0 L1 0 Z 2 2"), Reason::UnexpectedNumber);
}

#[test]
fn compressed_syntax() {
    assert_eq!(commands("M1.5.5L-1-1"), commands("M 1.5 0.5 L -1 -1"));
    assert_eq!(commands("M0,0L10,10,20,20"), commands("M 0 0 L 10 10 L 20 20"));
    assert_eq!(
        commands("M0 0A10 10 0 1110 10"),
        commands("M 0 0 A 10 10 0 1 1 10 10")
    );
    assert_eq!(
        commands("M0 0a10,10,0,0,1,10,10"),
        commands("M 0 0 A 10 10 0 0 1 10 10")
    );
}

#[test]
fn missing_move_to() {
    assert_eq!(reason("L 1 1"), Reason::MissingMoveTo { command: 'L' });
    assert_eq!(reason("z"), Reason::MissingMoveTo { command: 'z' });
    assert_eq!(reason("1 1"), Reason::UnexpectedNumber);
}

#[test]
fn missing_arguments() {
    let err = parse("M0 0 L1").unwrap_err();
    assert_eq!(
        err.reason,
        Reason::MissingArguments {
            command: 'L',
            expected: 2,
            got: 1
        }
    );
    assert_eq!(err.offset, 7);

    assert_eq!(
        reason("M0 0 C1 1 2 2 L3 3"),
        Reason::MissingArguments {
            command: 'C',
            expected: 6,
            got: 4
        }
    );
    assert_eq!(
        reason("M0 0 A 1 1 0 1"),
        Reason::MissingArguments {
            command: 'A',
            expected: 7,
            got: 4
        }
    );
    assert_eq!(
        reason("M"),
        Reason::MissingArguments {
            command: 'M',
            expected: 2,
            got: 0
        }
    );
}

#[test]
fn invalid_input() {
    let err = parse("\n M 0 \n0 1 x 1 1 1").unwrap_err();
    assert_eq!(err.reason, Reason::Command { command: 'x' });
    assert_eq!((err.line, err.column), (2, 4));

    assert_eq!(reason("M 0 0 A 1 1 0 2 0 1 1"), Reason::Flag { src: '2' });
    assert_eq!(reason("M 0 --1"), Reason::Number { src: "-".to_string() });
    assert_eq!(reason("M 0 0 L 1 #"), Reason::Number { src: "#".to_string() });
}

#[test]
fn stop() {
    let options = ParserOptions {
        stop_at: Some('|'),
        ..ParserOptions::DEFAULT
    };

    let mut src = Scanner::new("M 0 0 L 1 1| xxxxxx");
    let mut builder = Path::builder();
    PathParser::new()
        .parse(&options, &mut src, &mut builder)
        .unwrap();
    assert_eq!(src.remainder(), "| xxxxxx");
    assert_eq!(builder.build().num_commands(), 2);

    assert!(parse_with("| xxxxxx", &options).unwrap().is_empty());
    assert!(parse_with("    | xxxxxx", &options).unwrap().is_empty());
    assert_eq!(
        parse_with("M 0 0 L 1 | 2", &options).unwrap_err().reason,
        Reason::MissingArguments {
            command: 'L',
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn degenerate_arcs() {
    use PathCommand::*;

    assert_eq!(
        commands("M0 0 A0 0 0 0 1 10 10"),
        vec![MoveTo { to: point(0.0, 0.0) }, LineTo { to: point(10.0, 10.0) }]
    );
    assert_eq!(commands("M5 5 A3 3 0 0 1 5 5"), vec![MoveTo { to: point(5.0, 5.0) }]);
    assert_eq!(commands("M5 5 a3 3 0 0 1 0 0"), vec![MoveTo { to: point(5.0, 5.0) }]);
}

#[test]
fn expanded_arcs() {
    let cmds = commands("M0 0 A5 5 0 0 1 10 0");
    assert_eq!(cmds.len(), 3);
    assert!(cmds[1..].iter().all(|cmd| match cmd {
        PathCommand::CubicTo { .. } => true,
        _ => false,
    }));
    assert_eq!(cmds[2].to(), Some(point(10.0, 0.0)));

    // Negative radii are made positive.
    assert_eq!(commands("M0 0 A-5 -5 0 0 1 10 0"), cmds);

    // The first curve ends half way, at the bottom of the circle.
    let mid = cmds[1].to().unwrap();
    assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.y, -5.0, epsilon = 1e-9);
}

#[cfg(test)]
fn assert_finite(cmds: &[PathCommand]) {
    for cmd in cmds {
        if let PathCommand::CubicTo { ctrl1, ctrl2, to } = *cmd {
            for p in &[ctrl1, ctrl2, to] {
                assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", cmds);
            }
        }
    }
}

#[test]
fn extreme_arcs() {
    let cmds = commands("M0 0 A1 1 0 0 1 1e-200 0");
    assert_finite(&cmds);
    assert_eq!(cmds.last().and_then(|cmd| cmd.to()), Some(point(1e-200, 0.0)));

    // Tiny radii are scaled up to a half circle.
    let cmds = commands("M0 0 A1e-200 1e-200 0 0 1 10 0");
    assert_finite(&cmds);
    assert_eq!(cmds.len(), 3);
    let mid = cmds[1].to().unwrap();
    assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.y, -5.0, epsilon = 1e-9);

    let cmds = commands("M0 0 A1 1 0 0 1 1e300 0");
    assert_finite(&cmds);
    assert_eq!(cmds.len(), 3);
    let mid = cmds[1].to().unwrap();
    assert_abs_diff_eq!(mid.x / 5e299, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mid.y / 5e299, -1.0, epsilon = 1e-9);

    // No ellipse is representable, the arc is a line.
    assert_eq!(
        commands("M0 0 A1e300 1e300 0 0 1 1e-300 0")[1],
        PathCommand::LineTo { to: point(1e-300, 0.0) }
    );
}

#[test]
fn coordinates_out_of_range() {
    let err = parse("M0 0 L1e308 0 l1e308 0").unwrap_err();
    assert_eq!(err.reason, Reason::OutOfRange { command: 'l' });
    assert_eq!(err.offset, 15);

    assert_eq!(reason("M1e308 0 h1e308"), Reason::OutOfRange { command: 'h' });
    assert_eq!(reason("M0 -1e308 v-1e308"), Reason::OutOfRange { command: 'v' });
    assert_eq!(
        reason("M0 0 Q-1e308 0 1e308 0 T0 0"),
        Reason::OutOfRange { command: 'T' }
    );

    // Large absolute coordinates are fine.
    parse("M0 0 L1e308 0 L-1e308 0").unwrap();
}

#[test]
fn kept_arcs() {
    let options = ParserOptions {
        expand_arcs: false,
        ..ParserOptions::DEFAULT
    };

    let path = parse_with("M0 0 a5 5 390 0 1 10 0 A0 5 0 0 0 20 0", &options).unwrap();
    let cmds: Vec<_> = path.commands().cloned().collect();
    assert_eq!(
        cmds[1],
        PathCommand::ArcTo(SvgArc {
            from: point(0.0, 0.0),
            to: point(10.0, 0.0),
            radii: vector(5.0, 5.0),
            x_rotation: Angle::degrees(30.0),
            flags: ArcFlags {
                large_arc: false,
                sweep: true
            },
        })
    );
    assert_eq!(cmds[2], PathCommand::LineTo { to: point(20.0, 0.0) });
}

#[test]
fn parser_is_reusable() {
    let mut parser = PathParser::new();

    let mut builder = Path::builder();
    let res = parser.parse(
        &ParserOptions::DEFAULT,
        &mut Scanner::new("M 5 5 Q 0 0 1 1 L"),
        &mut builder,
    );
    assert!(res.is_err());

    let mut builder = Path::builder();
    parser
        .parse(&ParserOptions::DEFAULT, &mut Scanner::new("m 1 1 t 1 1"), &mut builder)
        .unwrap();
    assert_eq!(
        builder.build().commands().nth(1),
        Some(&PathCommand::QuadTo {
            ctrl: point(1.0, 1.0),
            to: point(2.0, 2.0)
        })
    );
}

#[test]
fn scientific_notation() {
    parse("M 1e-9 0").unwrap();
    parse("M -1e11 0").unwrap();
    parse("M 1.e-9 1.4e-4z").unwrap();
    parse("M0 1.6e-9L0 1.4e-4").unwrap();
    assert_eq!(commands("M1e1-1e1"), commands("M10 -10"));
}
