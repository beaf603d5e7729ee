use crate::scalar::Scalar;
use crate::Point;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }
}

#[test]
fn sample_line() {
    use crate::point;

    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(3.0, 4.0),
    };

    assert_eq!(l.sample(0.0), l.from);
    assert_eq!(l.sample(1.0), l.to);
    assert_eq!(l.sample(0.5), point(1.5, 2.0));
}
