use pathd::geom::{ArcFlags, SvgArc};
use pathd::math::{point, vector, Angle, Point};
use pathd::{parse_path, PathCommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::fmt::Write;

/// A few real world paths (icons), mixing most of the syntax.
pub static SAMPLE_PATHS: &[&str] = &[
    "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
    "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
    "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z",
    "M 100 200 C 100 100 250 100 250 200 S 400 300 400 200 Q 450 150 500 200 T 600 200",
    "M80 80 A 45 45, 0, 0, 0, 125 125 L 125 80 Z M230 80 A 45 45, 0, 1, 0, 275 125 L 275 80 Z",
    "M 10,30 a 20,20 0,0,1 40,0 a 20,20 0,0,1 40,0 q 0,30 -40,60 q -40,-30 -40,-60 z",
    "M600,350 l 50,-25 a25,25 -30 0,1 50,-25 l 50,-25 a25,50 -30 0,1 50,-25 l 50,-25 a25,75 -30 0,1 50,-25 l 50,-25 a25,100 -30 0,1 50,-25 l 50,-25",
];

const COMMANDS: &[char] = &[
    'M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a',
    'Z', 'z',
];

fn random_number(rng: &mut StdRng) -> f64 {
    let v: f64 = rng.gen_range(-100.0..100.0);
    (v * 100.0).round() / 100.0
}

/// Generates random (valid) path data with every kind of command.
///
/// Commands are sometimes repeated implicitly and separators vary.
pub fn generate_path_data(seed: u64, num_commands: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = String::new();

    let _ = write!(data, "M{} {}", random_number(&mut rng), random_number(&mut rng));

    for _ in 0..num_commands {
        let cmd = COMMANDS[rng.gen_range(0..COMMANDS.len())];
        data.push(if rng.gen_bool(0.5) { ' ' } else { '\n' });
        data.push(cmd);

        let num_args = match cmd.to_ascii_uppercase() {
            'H' | 'V' => 1,
            'M' | 'L' | 'T' => 2,
            'Q' | 'S' => 4,
            'C' => 6,
            'A' => 7,
            _ => 0,
        };

        if num_args == 0 {
            continue;
        }

        let repetitions = rng.gen_range(1..4);
        for _ in 0..repetitions {
            for i in 0..num_args {
                data.push(if rng.gen_bool(0.3) { ',' } else { ' ' });
                if num_args == 7 && (i == 3 || i == 4) {
                    data.push(if rng.gen_bool(0.5) { '1' } else { '0' });
                } else {
                    let _ = write!(data, "{}", random_number(&mut rng));
                }
            }
        }
    }

    data
}

/// Generates a random arc with endpoints and radii in [-100, 100].
pub fn generate_arc(rng: &mut StdRng) -> SvgArc<f64> {
    let mut radius = || {
        let r: f64 = rng.gen_range(1.0..100.0);
        r
    };
    let radii = vector(radius(), radius());

    SvgArc {
        from: point(random_number(rng), random_number(rng)),
        to: point(random_number(rng), random_number(rng)),
        radii,
        x_rotation: Angle::degrees(rng.gen_range(0.0..360.0)),
        flags: ArcFlags {
            large_arc: rng.gen_bool(0.5),
            sweep: rng.gen_bool(0.5),
        },
    }
}

/// Distance to the ellipse of an arc, in normalized units (1.0 is the radius).
pub fn ellipse_radius_at(p: Point, center: Point, radii: pathd::math::Vector, x_rotation: Angle) -> f64 {
    let d = p - center;
    let (sin, cos) = x_rotation.get().sin_cos();
    let x = d.x * cos + d.y * sin;
    let y = -d.x * sin + d.y * cos;

    ((x / radii.x).powi(2) + (y / radii.y).powi(2)).sqrt()
}

#[cfg(test)]
use approx::assert_abs_diff_eq;
#[cfg(test)]
use pathd::serializer::to_svg_string;

#[test]
fn sample_paths() {
    for src in SAMPLE_PATHS {
        let path = parse_path(src).unwrap();
        assert!(!path.is_empty());

        for subpath in &path {
            let mut iter = subpath.iter();
            assert!(matches!(iter.next(), Some(PathCommand::MoveTo { .. })));
            for (i, cmd) in iter.enumerate() {
                assert!(cmd.is_edge());
                if *cmd == PathCommand::ClosePath {
                    assert_eq!(i + 2, subpath.len());
                }
                assert!(!matches!(cmd, PathCommand::ArcTo(..)));
            }
        }
    }
}

#[test]
fn normal_form_round_trip() {
    for src in SAMPLE_PATHS {
        let path = parse_path(src).unwrap();
        let text = to_svg_string(&path);
        assert_eq!(parse_path(&text).unwrap(), path, "{}", text);

        // The normal form is a fixed point.
        assert_eq!(to_svg_string(&parse_path(&text).unwrap()), text);
    }

    for seed in 0..300 {
        let src = generate_path_data(seed, 20);
        let path = match parse_path(&src) {
            Ok(path) => path,
            Err(e) => panic!("{}\n{}", e, src),
        };
        let text = to_svg_string(&path);
        assert_eq!(parse_path(&text).unwrap(), path, "{}", src);
    }
}

#[test]
fn arc_endpoints() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..1000 {
        let arc = generate_arc(&mut rng);
        if arc.is_empty() {
            continue;
        }

        let center_arc = arc.to_arc();
        assert_abs_diff_eq!(center_arc.from().x, arc.from.x, epsilon = 1e-6);
        assert_abs_diff_eq!(center_arc.from().y, arc.from.y, epsilon = 1e-6);
        assert_abs_diff_eq!(center_arc.to().x, arc.to.x, epsilon = 1e-6);
        assert_abs_diff_eq!(center_arc.to().y, arc.to.y, epsilon = 1e-6);

        let curves = arc.to_cubic_beziers();
        assert!(!curves.is_empty());
        assert!(curves.len() <= 4);
        assert_eq!(curves[0].from, arc.from);
        assert_eq!(curves[curves.len() - 1].to, arc.to);

        for curve in &curves {
            for &t in &[0.25, 0.5, 0.75] {
                let r = ellipse_radius_at(
                    curve.sample(t),
                    center_arc.center,
                    center_arc.radii,
                    center_arc.x_rotation,
                );
                assert_abs_diff_eq!(r, 1.0, epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn parsed_arc_endpoints() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let arc = generate_arc(&mut rng);
        let src = format!(
            "M {} {} A {} {} {} {} {} {} {}",
            arc.from.x,
            arc.from.y,
            arc.radii.x,
            arc.radii.y,
            arc.x_rotation.to_degrees(),
            arc.flags.large_arc as u8,
            arc.flags.sweep as u8,
            arc.to.x,
            arc.to.y,
        );

        let path = parse_path(&src).unwrap();
        let cmds: Vec<PathCommand> = path.commands().cloned().collect();

        if arc.is_empty() {
            assert_eq!(cmds.len(), 1);
            continue;
        }

        assert!(cmds.len() >= 2 && cmds.len() <= 5, "{}", src);
        assert_eq!(cmds.last().and_then(PathCommand::to), Some(arc.to));
        for cmd in &cmds[1..] {
            assert!(matches!(cmd, PathCommand::CubicTo { .. }));
        }

        let segments: Vec<_> = path.subpaths()[0].segments().collect();
        assert_eq!(segments[0].from(), arc.from);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
    }
}

#[test]
fn parse_on_several_threads() {
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            std::thread::spawn(move || {
                let src = generate_path_data(seed, 100);
                parse_path(&src).map(|path| path.num_commands())
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let expected = parse_path(&generate_path_data(seed as u64, 100))
            .unwrap()
            .num_commands();
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}
