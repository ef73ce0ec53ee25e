//--------------------------------------------------------------------
// cubic-bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;

// The cubic bezier structure
#[derive(Copy, Clone, PartialEq, Display)]
#[display(fmt = "CubicBezier({},{},{},{})", a, b, c, d)]
pub struct CubicBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2, pub d: Vec2 }

impl CubicBezier {
    pub fn at(&self, t: Coord) -> Vec2 { 
        let ct = 1.0 - t;
        ct * ct * ct * self.a + 3.0 * ct * ct * t * self.b
            + 3.0 * ct * t * t * self.c + t * t * t * self.d
    }

    // Both control points lying on the ends make it a straight segment
    pub fn is_degenerate(&self) -> bool {
        let on_end = |p: Vec2| p.roughly_equals(self.a) || p.roughly_equals(self.d);
        on_end(self.b) && on_end(self.c)
    }
}
