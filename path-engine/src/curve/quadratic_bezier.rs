//--------------------------------------------------------------------
// quadratic-bezier.rs
//--------------------------------------------------------------------
// Represents a quadratic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use super::cubic_bezier::CubicBezier;

// The quadratic bezier structure
#[derive(Copy, Clone, PartialEq, Display)]
#[display(fmt = "QuadraticBezier({},{},{})", a, b, c)]
pub struct QuadraticBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2 }

impl QuadraticBezier {
    pub fn at(&self, t: Coord) -> Vec2 { 
        let ct = 1.0 - t;
        ct * ct * self.a + 2.0 * ct * t * self.b + t * t * self.c
    }

    // Degree elevation: the cubic traces exactly the same curve
    pub fn to_cubic(&self) -> CubicBezier {
        let b = self.a + 2.0 / 3.0 * (self.b - self.a);
        let c = self.c + 2.0 / 3.0 * (self.b - self.c);
        CubicBezier { a: self.a, b, c, d: self.c }
    }

    // A quadratic with its control point on one of its ends is a straight segment
    pub fn is_degenerate(&self) -> bool {
        self.b.roughly_equals(self.a) || self.b.roughly_equals(self.c)
    }
}
