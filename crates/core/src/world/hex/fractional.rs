use crate::{HexError, HexPoint};
use derive_more::Display;

/// A point in hex space whose components are floats rather than integers. It
/// may fall anywhere on the plane `q + r + s = 0`, not just on hex centers.
/// These only exist as intermediate values while interpolating between two
/// hexes; call [FractionalHexPoint::round] to snap back to a whole hex.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHexPoint {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHexPoint {
    /// Construct a new fractional point. The components have to sum to zero,
    /// but we only check that the sum _rounds_ to zero so that accumulated
    /// floating point error doesn't trip the check.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).round() != 0.0 {
            Err(HexError::InvalidFractionalCoordinate { q, r, s })
        } else {
            Ok(Self { q, r, s })
        }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Shift this point by `(amount, amount, -2 * amount)`. The offset sums to
    /// zero, so the result stays on the plane.
    pub(crate) fn nudge(self, amount: f64) -> Self {
        Self {
            q: self.q + amount,
            r: self.r + amount,
            s: self.s - 2.0 * amount,
        }
    }

    /// Linear interpolation between two points. `t = 0` gives `self`, `t = 1`
    /// gives `other`. Both inputs are on the plane, so every weighted average
    /// of them is too.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            q: self.q * (1.0 - t) + other.q * t,
            r: self.r * (1.0 - t) + other.r * t,
            s: self.s * (1.0 - t) + other.s * t,
        }
    }

    /// Snap to the hex that contains this point.
    ///
    /// Rounding each component on its own can land off the plane, so the
    /// component that moved furthest during rounding gets recomputed from the
    /// other two. Ties resolve in a fixed order: `q` only wins if its error
    /// is strictly the biggest, then `r` if it strictly beats `s`, otherwise
    /// `s` absorbs the error. Line tracing relies on this exact order.
    pub fn round(self) -> HexPoint {
        // f64::round rounds half away from zero
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();
        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s absorbs the error, which HexPoint does for us by
        // deriving it from q and r
        HexPoint::new_qr(q as i32, r as i32)
    }
}

impl From<HexPoint> for FractionalHexPoint {
    fn from(point: HexPoint) -> Self {
        Self {
            q: point.q().into(),
            r: point.r().into(),
            s: point.s().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn fp(q: f64, r: f64, s: f64) -> FractionalHexPoint {
        FractionalHexPoint::new(q, r, s).unwrap()
    }

    #[test]
    fn test_new() {
        assert!(FractionalHexPoint::new(0.5, -0.25, -0.25).is_ok());
        // Drift that still rounds to zero is tolerated
        assert!(FractionalHexPoint::new(0.5, 0.1, -0.3).is_ok());
        assert_eq!(
            FractionalHexPoint::new(1.0, 1.0, 0.0),
            Err(HexError::InvalidFractionalCoordinate {
                q: 1.0,
                r: 1.0,
                s: 0.0
            })
        );
    }

    #[test]
    fn test_lerp() {
        let a = fp(0.0, 0.0, 0.0);
        let b = fp(10.0, -4.0, -6.0);

        let mid = a.lerp(b, 0.5);
        assert_approx_eq!(mid.q(), 5.0);
        assert_approx_eq!(mid.r(), -2.0);
        assert_approx_eq!(mid.s(), -3.0);

        let quarter = a.lerp(b, 0.25);
        assert_approx_eq!(quarter.q(), 2.5);
        assert_approx_eq!(quarter.r(), -1.0);
        assert_approx_eq!(quarter.s(), -1.5);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_round_exact() {
        for point in &[
            HexPoint::ORIGIN,
            HexPoint::new_qr(3, -7),
            HexPoint::new_qr(-12, 5),
        ] {
            assert_eq!(FractionalHexPoint::from(*point).round(), *point);
        }
    }

    #[test]
    fn test_round() {
        // r is furthest from an integer, so it gets recomputed
        assert_eq!(
            fp(0.2, 0.45, -0.65).round(),
            HexPoint::new(0, 1, -1).unwrap()
        );
        assert_eq!(
            fp(1.2, -0.45, -0.75).round(),
            HexPoint::new(1, 0, -1).unwrap()
        );
        // q is furthest
        assert_eq!(
            fp(0.45, 0.3, -0.75).round(),
            HexPoint::new(1, 0, -1).unwrap()
        );
    }

    #[test]
    fn test_round_tie_break() {
        // q and r errors tie exactly, so q can't win and r takes it
        assert_eq!(
            fp(0.5, 0.5, -1.0).round(),
            HexPoint::new(1, 0, -1).unwrap()
        );
        // q and r tie and s is no closer, so s absorbs the error
        let third = 1.0 / 3.0;
        assert_eq!(
            fp(third, third, -2.0 * third).round(),
            HexPoint::new(0, 0, 0).unwrap()
        );
    }
}
