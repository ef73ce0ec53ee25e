//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Represents a line segment
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::geometry::*;

// The line structure
#[derive(Copy, Clone, PartialEq, Display)]
#[display(fmt = "Line({},{})", a, b)]
pub struct Line { pub a: Vec2, pub b: Vec2 }

impl Line {
    pub fn at(&self, t: Coord) -> Vec2 { (1.0-t) * self.a + t * self.b }
}
