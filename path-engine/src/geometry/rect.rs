//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn from_corners(min: Vec2, max: Vec2) -> Rect {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn min(&self) -> Vec2 { Vec2::new(self.x, self.y) }
    pub fn max(&self) -> Vec2 { Vec2::new(self.x + self.width, self.y + self.height) }
    pub fn center(&self) -> Vec2 { Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0) }

    pub fn contains_point(&self, pt: Vec2) -> bool {
        self.x <= pt.x && self.y <= pt.y && self.x + self.width >= pt.x && self.y + self.height >= pt.y
    }

    // Same as contains_point, but with a tolerance margin
    pub fn roughly_contains_point(&self, pt: Vec2) -> bool {
        self.x - EPSILON <= pt.x && self.y - EPSILON <= pt.y
            && self.x + self.width + EPSILON >= pt.x && self.y + self.height + EPSILON >= pt.y
    }
}
