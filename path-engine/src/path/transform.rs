//------------------------------------------------------------------------------
// transform.rs
//------------------------------------------------------------------------------
// Provides the pure geometric edits over commands and paths: translation,
// scaling and flipping
//------------------------------------------------------------------------------

use super::*;

impl PathCommand {
    // Every point-valued field goes through f; arcs have their own mapping
    fn map_points(&self, f: impl Fn(Vec2) -> Vec2, arc_map: impl FnOnce(&CircularArc) -> CircularArc) -> PathCommand {
        match self {
            PathCommand::MoveTo(target) => PathCommand::MoveTo(f(*target)),
            PathCommand::LineTo(target) => PathCommand::LineTo(f(*target)),
            PathCommand::ArcTo(arc) => PathCommand::ArcTo(arc_map(arc)),
            PathCommand::QuadraticBezierTo(c, t) => PathCommand::QuadraticBezierTo(f(*c), f(*t)),
            PathCommand::CubicBezierTo(c1, c2, t) => PathCommand::CubicBezierTo(f(*c1), f(*c2), f(*t))
        }
    }

    pub fn translated(&self, delta: Vec2) -> PathCommand {
        self.map_points(|p| p + delta, |arc| arc.translated(delta))
    }

    pub fn scaled(&self, factor: Vec2, origin: Vec2) -> PathCommand {
        self.map_points(|p| origin + (p - origin).mul_elems(factor), |arc| arc.scaled(factor, origin))
    }

    pub fn flipped_horizontally(&self, bounds: Rect) -> PathCommand {
        let axis = bounds.center().x;
        self.map_points(|p| Vec2::new(2.0 * axis - p.x, p.y), |arc| arc.flipped_horizontally(axis))
    }

    pub fn flipped_vertically(&self, bounds: Rect) -> PathCommand {
        let axis = bounds.center().y;
        self.map_points(|p| Vec2::new(p.x, 2.0 * axis - p.y), |arc| arc.flipped_vertically(axis))
    }
}

impl Path {
    pub fn translated(&self, delta: Vec2) -> Path {
        self.map_commands(|c| c.translated(delta))
    }

    // Arcs are only approximately scaled when the factors differ
    pub fn scaled(&self, factor: Vec2, origin: Vec2) -> Path {
        self.map_commands(|c| c.scaled(factor, origin))
    }

    pub fn flipped_horizontally(&self, bounds: Rect) -> Path {
        self.map_commands(|c| c.flipped_horizontally(bounds))
    }

    pub fn flipped_vertically(&self, bounds: Rect) -> Path {
        self.map_commands(|c| c.flipped_vertically(bounds))
    }
}

pub fn translate(path: &Path, dx: Coord, dy: Coord) -> Path { path.translated(Vec2::new(dx, dy)) }
pub fn scale(path: &Path, sx: Coord, sy: Coord, origin: Vec2) -> Path { path.scaled(Vec2::new(sx, sy), origin) }
pub fn flip_horizontal(path: &Path, bounds: Rect) -> Path { path.flipped_horizontally(bounds) }
pub fn flip_vertical(path: &Path, bounds: Rect) -> Path { path.flipped_vertically(bounds) }
