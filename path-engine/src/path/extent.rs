//------------------------------------------------------------------------------
// extent.rs
//------------------------------------------------------------------------------
// Provides the conservative bounding extent of commands and paths
//------------------------------------------------------------------------------

use super::*;

// The minimum and maximum corners of a bounding extent
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MinMax { pub min: Vec2, pub max: Vec2 }

impl MinMax {
    pub fn from_point(p: Vec2) -> MinMax { MinMax { min: p, max: p } }

    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min_elems(p);
        self.max = self.max.max_elems(p);
    }

    pub fn union(&self, other: MinMax) -> MinMax {
        MinMax { min: self.min.min_elems(other.min), max: self.max.max_elems(other.max) }
    }

    pub fn to_rect(&self) -> Rect { Rect::from_corners(self.min, self.max) }

    pub fn contains_point(&self, p: Vec2) -> bool { self.to_rect().contains_point(p) }
}

impl From<MinMax> for Rect {
    fn from(mm: MinMax) -> Rect { mm.to_rect() }
}

impl PathCommand {
    // Control points count, not curve extrema. For arcs, the points of their
    // cubic subdivision are used so the drawn curve is always inside
    pub fn extent(&self) -> MinMax {
        let mut mm = MinMax::from_point(self.target());
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => {}
            PathCommand::ArcTo(arc) => {
                for s in arc.to_cubic_beziers().iter() {
                    for &p in [s.a, s.b, s.c, s.d].iter() { mm.include(p); }
                }
            }
            PathCommand::QuadraticBezierTo(c, _) => mm.include(*c),
            PathCommand::CubicBezierTo(c1, c2, _) => {
                mm.include(*c1);
                mm.include(*c2);
            }
        }
        mm
    }
}

impl Path {
    pub fn bounding_extent(&self) -> Option<MinMax> {
        let mut iter = self.commands.iter();
        let first = iter.next()?.extent();
        Some(iter.fold(first, |mm, c| mm.union(c.extent())))
    }

    pub fn bounds(&self) -> Option<Rect> { self.bounding_extent().map(|mm| mm.to_rect()) }
}

pub fn bounding_extent(path: &Path) -> Option<(Vec2, Vec2)> {
    path.bounding_extent().map(|mm| (mm.min, mm.max))
}
