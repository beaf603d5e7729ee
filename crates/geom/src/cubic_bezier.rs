//! Cubic bézier curve segments.

use crate::scalar::Scalar;
use crate::Point;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }
}

#[test]
fn sample_cubic() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 4.0),
        ctrl2: point(4.0, 4.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
    assert_eq!(curve.sample(0.5), point(2.0, 3.0));
}
