//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;
use CoordM::consts::PI;

pub const TWO_PI: Coord = 2.0 * PI;
pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Some utility functions for Coord
// trait used only for implementation
pub trait Geometry where Self: Sized {
    fn wrap_angle(self) -> Self;
    fn wrap_angle_360(self, cw: bool) -> Self;

    fn wrap_angle_360_ccw(self) -> Self;
    fn wrap_angle_360_cw(self) -> Self;

    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
}

impl Geometry for Coord {
    // Wraps into [-pi, pi]
    fn wrap_angle(self) -> Coord { self + TWO_PI * (-self / TWO_PI).round() }
    fn wrap_angle_360(self, cw: bool) -> Coord {
        if cw { self.wrap_angle_360_cw() }
        else { self.wrap_angle_360_ccw() }
    }

    // (-2pi, 0] and [0, 2pi) respectively
    fn wrap_angle_360_ccw(self) -> Coord { self - TWO_PI * (self / TWO_PI).ceil() }
    fn wrap_angle_360_cw(self) -> Coord { self - TWO_PI * (self / TWO_PI).floor() }

    fn roughly_zero(self) -> bool { self > -EPSILON && self < EPSILON }
    fn roughly_zero_squared(self) -> bool { self > -EPSILON2 && self < EPSILON2 }
    fn roughly_equals(self, other: Self) -> bool { (self - other).roughly_zero() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wrap_angle_ranges() {
        let a = -PI / 2.0;
        assert!(a.wrap_angle_360_cw().roughly_equals(3.0 * PI / 2.0));
        assert!(a.wrap_angle_360_ccw().roughly_equals(a));
        assert!((PI / 2.0).wrap_angle_360_ccw().roughly_equals(-3.0 * PI / 2.0));
        assert_eq!((0.0 as Coord).wrap_angle_360_cw(), 0.0);
        assert!((3.0 * PI).wrap_angle().abs().roughly_equals(PI));
    }
}
