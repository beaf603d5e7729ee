//! Elliptic arc related maths and tools.
//!
//! SVG describes arcs with their endpoints ([`SvgArc`]), which is convenient to write
//! but not to compute with. [`SvgArc::to_arc`] converts to the center parameterization
//! ([`Arc`]) following the implementation notes of the SVG specification
//! (<https://www.w3.org/TR/SVG/implnote.html#ArcImplementationNotes>), sections
//! F.6.5 (conversion) and F.6.6 (out-of-range radii).

use crate::scalar::{cast, Float, Scalar};
use crate::{point, vector, Angle, CubicBezierSegment, Point, Vector};
use arrayvec::ArrayVec;

/// An elliptic arc curve segment using the SVG's end-point notation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// An elliptic arc curve segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radii: Vector<S>,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
    pub x_rotation: Angle<S>,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn, as follows:
///
/// - Of the four candidate arc sweeps, two will represent an arc sweep of greater
///   than or equal to 180 degrees (the "large-arc"), and two will represent an arc
///   sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
///   is true, then one of the two larger arc sweeps will be chosen; otherwise, one
///   of the smaller arc sweeps will be chosen.
/// - If `sweep` is true, then the arc will be drawn in a "positive-angle" direction
///   (the angle increases as the arc is drawn). A value of false causes the arc to
///   be drawn in a "negative-angle" direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

/// The maximum number of cubic bézier curves an arc is approximated with.
pub const MAX_CUBIC_SEGMENTS: usize = 4;

impl<S: Scalar> SvgArc<S> {
    /// Per the SVG specification, an arc with identical endpoints is omitted entirely.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Per the SVG specification, an arc with a zero radius is treated as a straight
    /// line segment joining its endpoints.
    ///
    /// This also holds for arcs whose radii are so far from the distance between the
    /// endpoints that no ellipse can be computed in floating point.
    #[inline]
    pub fn is_straight_line(&self) -> bool {
        if self.radii.x == S::ZERO || self.radii.y == S::ZERO {
            return true;
        }

        let d = self.unit_half_chord();
        let len = Float::hypot(d.x, d.y);

        len == S::ZERO || !Float::is_finite(len)
    }

    // Half of the chord in the rotated frame of the ellipse, divided by the radii.
    fn unit_half_chord(&self) -> Vector<S> {
        let xr = self.x_rotation.get() % (S::TWO * S::PI());
        let cos_phi = Float::cos(xr);
        let sin_phi = Float::sin(xr);
        let hd_x = self.from.x / S::TWO - self.to.x / S::TWO;
        let hd_y = self.from.y / S::TWO - self.to.y / S::TWO;

        // F.6.5.1
        let px = cos_phi * hd_x + sin_phi * hd_y;
        let py = -sin_phi * hd_x + cos_phi * hd_y;

        vector(px / S::abs(self.radii.x), py / S::abs(self.radii.y))
    }

    /// Converts to the center parameterization.
    ///
    /// Radii are made positive and scaled up if they are too small for the ellipse
    /// to reach both endpoints. The arc must neither be empty nor a straight line.
    pub fn to_arc(&self) -> Arc<S> {
        debug_assert!(!self.from.x.is_nan());
        debug_assert!(!self.from.y.is_nan());
        debug_assert!(!self.to.x.is_nan());
        debug_assert!(!self.to.y.is_nan());
        debug_assert!(!self.x_rotation.get().is_nan());
        debug_assert!(!self.is_empty());
        debug_assert!(!self.is_straight_line());

        let mut rx = S::abs(self.radii.x);
        let mut ry = S::abs(self.radii.y);

        let xr = self.x_rotation.get() % (S::TWO * S::PI());
        let cos_phi = Float::cos(xr);
        let sin_phi = Float::sin(xr);
        let hs_x = self.from.x / S::TWO + self.to.x / S::TWO;
        let hs_y = self.from.y / S::TWO + self.to.y / S::TWO;

        // Expressed relative to the radii from here on.
        let mut p = self.unit_half_chord();
        let mut len = Float::hypot(p.x, p.y);

        // F.6.6.2, len is the square root of lambda.
        if len > S::ONE {
            log::debug!(
                "arc radii ({}, {}) too small to reach {:?}, scaling by {}",
                rx,
                ry,
                self.to,
                len
            );
            rx = rx * len;
            ry = ry * len;
            p = p / len;
            len = S::ONE;
        }

        // F.6.5.2
        let sign_coe = if self.flags.large_arc == self.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        // After the radii correction the radicand can end up very slightly negative.
        let coe = sign_coe * Float::sqrt(S::max(S::ONE - len * len, S::ZERO));
        let dir = p / len;

        // Center in the rotated frame, relative to the radii.
        let c = vector(coe * dir.y, -coe * dir.x);

        // F.6.5.3
        let transformed_cx = c.x * rx;
        let transformed_cy = c.y * ry;
        let center = point(
            cos_phi * transformed_cx - sin_phi * transformed_cy + hs_x,
            sin_phi * transformed_cx + cos_phi * transformed_cy + hs_y,
        );

        // F.6.5.5 and F.6.5.6
        let u = p - c;
        let v = -p - c;

        let start_angle = Float::atan2(u.y, u.x);
        let mut sweep_angle = Float::atan2(u.x * v.y - u.y * v.x, u.x * v.x + u.y * v.y);

        if !self.flags.sweep && sweep_angle > S::ZERO {
            sweep_angle = sweep_angle - S::TWO * S::PI();
        } else if self.flags.sweep && sweep_angle < S::ZERO {
            sweep_angle = sweep_angle + S::TWO * S::PI();
        }

        Arc {
            center,
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(xr),
        }
    }

    /// Approximates the arc with a sequence of cubic bézier curves.
    ///
    /// The first curve begins exactly at `from` and the last one ends exactly at `to`.
    /// Empty arcs produce no curve. Straight line arcs are not handled here, see
    /// [`SvgArc::is_straight_line`].
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<S>, MAX_CUBIC_SEGMENTS> {
        if self.is_empty() || self.is_straight_line() {
            return ArrayVec::new();
        }

        let mut curves = self.to_arc().cubic_beziers();

        if let Some(first) = curves.first_mut() {
            first.from = self.from;
        }
        if let Some(last) = curves.last_mut() {
            last.to = self.to;
        }

        curves
    }

    /// Invokes a callback for each cubic bézier curve approximating the arc.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        for curve in &self.to_cubic_beziers() {
            cb(curve);
        }
    }
}

impl<S: Scalar> Arc<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        let angle = self.get_angle(t);
        self.center + sample_ellipse(self.radii, self.x_rotation, angle).to_vector()
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: S) -> Angle<S> {
        self.start_angle + Angle::radians(self.sweep_angle.get() * t)
    }

    #[inline]
    pub fn end_angle(&self) -> Angle<S> {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }

    /// Approximates the arc with cubic bézier curves, each spanning at most 90 degrees.
    pub fn cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<S>, MAX_CUBIC_SEGMENTS> {
        let mut curves = ArrayVec::new();
        self.for_each_cubic_bezier(&mut |curve| curves.push(*curve));

        curves
    }

    /// Invokes a callback for each cubic bézier curve approximating the arc.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        let sweep_angle = self.sweep_angle.get();
        let abs_sweep = S::min(S::abs(sweep_angle), S::TWO * S::PI());

        // Don't let rounding errors add a tiny extra curve.
        let n = Float::ceil(abs_sweep / S::FRAC_PI_2() - S::EPSILON);
        let n_steps = cast::<S, usize>(n)
            .unwrap_or(1)
            .max(1)
            .min(MAX_CUBIC_SEGMENTS);
        let step = sweep_angle / S::value(n_steps as f32);

        // Distance of the control points to the endpoints, on the unit circle.
        let k = S::FOUR / S::THREE * Float::tan(step / S::FOUR);

        for i in 0..n_steps {
            let a1 = self.start_angle.get() + step * S::value(i as f32);
            let a2 = self.start_angle.get() + step * S::value((i + 1) as f32);

            let (sin1, cos1) = (Float::sin(a1), Float::cos(a1));
            let (sin2, cos2) = (Float::sin(a2), Float::cos(a2));

            let curve = CubicBezierSegment {
                from: self.map_unit_point(cos1, sin1),
                ctrl1: self.map_unit_point(cos1 - k * sin1, sin1 + k * cos1),
                ctrl2: self.map_unit_point(cos2 + k * sin2, sin2 - k * cos2),
                to: self.map_unit_point(cos2, sin2),
            };

            cb(&curve);
        }
    }

    // Maps a point from the unit circle to the arc's ellipse.
    fn map_unit_point(&self, x: S, y: S) -> Point<S> {
        let (sin, cos) = (
            Float::sin(self.x_rotation.get()),
            Float::cos(self.x_rotation.get()),
        );
        let x = x * self.radii.x;
        let y = y * self.radii.y;

        point(
            self.center.x + x * cos - y * sin,
            self.center.y + x * sin + y * cos,
        )
    }
}

fn sample_ellipse<S: Scalar>(radii: Vector<S>, x_rotation: Angle<S>, angle: Angle<S>) -> Point<S> {
    let (sin_r, cos_r) = (Float::sin(x_rotation.get()), Float::cos(x_rotation.get()));
    let x = radii.x * Float::cos(angle.get());
    let y = radii.y * Float::sin(angle.get());

    point(x * cos_r - y * sin_r, x * sin_r + y * cos_r)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn arc(from: Point<f64>, to: Point<f64>, rx: f64, ry: f64, deg: f64, large_arc: bool, sweep: bool) -> SvgArc<f64> {
        SvgArc {
            from,
            to,
            radii: vector(rx, ry),
            x_rotation: Angle::degrees(deg),
            flags: ArcFlags { large_arc, sweep },
        }
    }

    fn assert_point_eq(a: Point<f64>, b: Point<f64>, epsilon: f64) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
        assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
    }

    #[test]
    fn quarter_circle() {
        let svg_arc = arc(point(1.0, 0.0), point(0.0, 1.0), 1.0, 1.0, 0.0, false, true);
        let a = svg_arc.to_arc();

        assert_point_eq(a.center, point(0.0, 0.0), 1e-12);
        assert_abs_diff_eq!(a.start_angle.get(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.sweep_angle.get(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(a.end_angle().get(), FRAC_PI_2, epsilon = 1e-12);

        let curves = svg_arc.to_cubic_beziers();
        assert_eq!(curves.len(), 1);

        let k = 4.0 / 3.0 * (PI / 8.0).tan();
        assert_eq!(curves[0].from, point(1.0, 0.0));
        assert_eq!(curves[0].to, point(0.0, 1.0));
        assert_point_eq(curves[0].ctrl1, point(1.0, k), 1e-12);
        assert_point_eq(curves[0].ctrl2, point(k, 1.0), 1e-12);
    }

    #[test]
    fn negative_sweep() {
        let svg_arc = arc(point(1.0, 0.0), point(0.0, 1.0), 1.0, 1.0, 0.0, false, false);
        let a = svg_arc.to_arc();

        assert_point_eq(a.center, point(1.0, 1.0), 1e-12);
        assert_abs_diff_eq!(a.sweep_angle.get(), -FRAC_PI_2, epsilon = 1e-12);

        let half = 1.0 - (0.5f64).sqrt();
        assert_point_eq(a.sample(0.5), point(half, half), 1e-12);
    }

    #[test]
    fn large_arc() {
        let svg_arc = arc(point(1.0, 0.0), point(0.0, 1.0), 1.0, 1.0, 0.0, true, true);
        let a = svg_arc.to_arc();

        assert_point_eq(a.center, point(1.0, 1.0), 1e-12);
        assert_abs_diff_eq!(a.sweep_angle.get(), 3.0 * FRAC_PI_2, epsilon = 1e-12);

        let curves = svg_arc.to_cubic_beziers();
        assert_eq!(curves.len(), 3);
        for curve in &curves {
            // The cubic approximation of a quarter circle deviates by less than 3e-4.
            let mid = curve.sample(0.5);
            assert_abs_diff_eq!((mid - a.center).length(), 1.0, epsilon = 3e-4);
        }
    }

    #[test]
    fn radii_scaled_up() {
        let svg_arc = arc(point(0.0, 0.0), point(10.0, 0.0), 1.0, 1.0, 0.0, false, true);
        let a = svg_arc.to_arc();

        assert_abs_diff_eq!(a.radii.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.radii.y, 5.0, epsilon = 1e-12);
        assert_point_eq(a.center, point(5.0, 0.0), 1e-12);
        assert_abs_diff_eq!(a.sweep_angle.get(), PI, epsilon = 1e-12);
        assert_point_eq(a.sample(0.5), point(5.0, -5.0), 1e-12);

        assert_eq!(svg_arc.to_cubic_beziers().len(), 2);
    }

    #[test]
    fn negative_radii_are_made_positive() {
        let a = arc(point(0.0, 0.0), point(10.0, 0.0), -5.0, -5.0, 0.0, false, true);
        let b = arc(point(0.0, 0.0), point(10.0, 0.0), 5.0, 5.0, 0.0, false, true);

        assert_eq!(a.to_cubic_beziers(), b.to_cubic_beziers());
    }

    #[test]
    fn degenerate_arcs() {
        let empty = arc(point(5.0, 5.0), point(5.0, 5.0), 3.0, 3.0, 0.0, false, true);
        assert!(empty.is_empty());
        assert!(empty.to_cubic_beziers().is_empty());

        let line = arc(point(0.0, 0.0), point(10.0, 10.0), 0.0, 3.0, 0.0, false, true);
        assert!(line.is_straight_line());
        assert!(line.to_cubic_beziers().is_empty());
    }

    #[test]
    fn endpoints_and_continuity() {
        let from = point(0.0, 0.0);
        let to = point(3.0, 3.0);
        for &deg in &[0.0, 30.0, 90.0, 400.0, -45.0] {
            for &(large_arc, sweep) in &[(false, false), (false, true), (true, false), (true, true)] {
                let svg_arc = arc(from, to, 4.0, 2.0, deg, large_arc, sweep);
                let a = svg_arc.to_arc();

                assert_point_eq(a.from(), from, 1e-6);
                assert_point_eq(a.to(), to, 1e-6);

                let curves = svg_arc.to_cubic_beziers();
                assert!(!curves.is_empty());
                assert!(curves.len() <= MAX_CUBIC_SEGMENTS);
                assert_eq!(curves[0].from, from);
                assert_eq!(curves[curves.len() - 1].to, to);
                for pair in curves.windows(2) {
                    assert_eq!(pair[0].to, pair[1].from);
                }

                if large_arc {
                    assert!(a.sweep_angle.get().abs() >= PI - 1e-9);
                } else {
                    assert!(a.sweep_angle.get().abs() <= PI + 1e-9);
                }
                assert_eq!(a.sweep_angle.get() > 0.0, sweep);
            }
        }
    }

    #[test]
    fn tiny_chord() {
        let svg_arc = arc(point(0.0, 0.0), point(1e-200, 0.0), 1.0, 1.0, 0.0, false, true);
        assert!(!svg_arc.is_straight_line());

        let a = svg_arc.to_arc();
        assert_point_eq(a.center, point(0.0, 1.0), 1e-12);
        assert_abs_diff_eq!(a.radii.x, 1.0);

        let curves = svg_arc.to_cubic_beziers();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].from, point(0.0, 0.0));
        assert_eq!(curves[0].to, point(1e-200, 0.0));
        for p in &[curves[0].ctrl1, curves[0].ctrl2] {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert_point_eq(*p, point(0.0, 0.0), 1e-12);
        }
    }

    #[test]
    fn tiny_radii_scaled_up() {
        let svg_arc = arc(point(0.0, 0.0), point(10.0, 0.0), 1e-200, 1e-200, 0.0, false, true);
        let a = svg_arc.to_arc();

        assert_abs_diff_eq!(a.radii.x, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.radii.y, 5.0, epsilon = 1e-9);
        assert_point_eq(a.center, point(5.0, 0.0), 1e-9);
        assert_point_eq(a.sample(0.5), point(5.0, -5.0), 1e-9);
    }

    #[test]
    fn huge_chord() {
        let svg_arc = arc(point(0.0, 0.0), point(1e300, 0.0), 1.0, 1.0, 0.0, false, true);
        let a = svg_arc.to_arc();

        assert_abs_diff_eq!(a.radii.x / 5e299, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.center.x / 5e299, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.sweep_angle.get(), PI, epsilon = 1e-12);

        let curves = svg_arc.to_cubic_beziers();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[1].to, point(1e300, 0.0));
        for curve in &curves {
            for p in &[curve.ctrl1, curve.ctrl2, curve.to] {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn unrepresentable_ellipse_is_a_line() {
        // The chord is 0 once divided by the radii.
        let flat = arc(point(0.0, 0.0), point(1e-300, 0.0), 1e300, 1e300, 0.0, false, true);
        assert!(flat.is_straight_line());
        assert!(flat.to_cubic_beziers().is_empty());

        // The chord overflows once divided by the radii.
        let huge = arc(point(0.0, 0.0), point(1e300, 0.0), 1e-300, 1e-300, 0.0, false, true);
        assert!(huge.is_straight_line());
    }

    #[test]
    fn f32_arcs() {
        let svg_arc = SvgArc {
            from: point(0.0f32, 0.0),
            to: point(2.0, 0.0),
            radii: vector(1.0, 1.0),
            x_rotation: Angle::radians(0.0),
            flags: ArcFlags::default(),
        };

        let curves = svg_arc.to_cubic_beziers();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[1].to, point(2.0, 0.0));
    }
}
