//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Provides the Path data structure, which is a container for PathCommands
// in absolute coordinates plus its closed flag
//------------------------------------------------------------------------------

mod transform;
mod extent;
mod emit;
mod serialize;
mod vertex;
mod shapes;

pub use transform::*;
pub use extent::*;
pub use emit::*;
pub use serialize::*;
pub use vertex::*;

use std::fmt::*;

use crate::approx::AbsDiffEq;
use crate::geometry::*;
use crate::curve::CircularArc;

// The PathCommand enum. A close command never makes it here:
// the path's closed flag holds that information
#[derive(Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    ArcTo(CircularArc),
    QuadraticBezierTo(Vec2, Vec2),
    CubicBezierTo(Vec2, Vec2, Vec2)
}

impl PathCommand {
    // The point where the command leaves the pen
    pub fn target(&self) -> Vec2 {
        match self {
            PathCommand::MoveTo(target) => *target,
            PathCommand::LineTo(target) => *target,
            PathCommand::ArcTo(arc) => arc.target,
            PathCommand::QuadraticBezierTo(_, target) => *target,
            PathCommand::CubicBezierTo(_, _, target) => *target
        }
    }

    pub fn verb(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::ArcTo(_) => 'A',
            PathCommand::QuadraticBezierTo(_, _) => 'Q',
            PathCommand::CubicBezierTo(_, _, _) => 'C'
        }
    }
}

// Implementing the display
impl Display for PathCommand {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PathCommand::MoveTo(target) => write!(f, "MoveTo({})", target),
            PathCommand::LineTo(target) => write!(f, "LineTo({})", target),
            PathCommand::ArcTo(arc) => write!(f, "ArcTo({})", arc),
            PathCommand::QuadraticBezierTo(c, t) => write!(f, "QuadraticBezierTo({}, {})", c, t),
            PathCommand::CubicBezierTo(c1, c2, t) => write!(f, "CubicBezierTo({}, {}, {})", c1, c2, t)
        }
    }
}

impl Debug for PathCommand {
    fn fmt(&self, f: &mut Formatter) -> Result { write!(f, "{}", self) }
}

impl AbsDiffEq for PathCommand {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }
    fn abs_diff_eq(&self, other: &PathCommand, epsilon: Coord) -> bool {
        use PathCommand::*;
        match (self, other) {
            (MoveTo(a), MoveTo(b)) => a.abs_diff_eq(b, epsilon),
            (LineTo(a), LineTo(b)) => a.abs_diff_eq(b, epsilon),
            (ArcTo(a), ArcTo(b)) => a.abs_diff_eq(b, epsilon),
            (QuadraticBezierTo(c, t), QuadraticBezierTo(oc, ot)) =>
                c.abs_diff_eq(oc, epsilon) && t.abs_diff_eq(ot, epsilon),
            (CubicBezierTo(c1, c2, t), CubicBezierTo(oc1, oc2, ot)) =>
                c1.abs_diff_eq(oc1, epsilon) && c2.abs_diff_eq(oc2, epsilon) && t.abs_diff_eq(ot, epsilon),
            _ => false
        }
    }
}

// A single subpath: the first command is always a MoveTo, and all the
// coordinates are absolute. Edits always produce new paths
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub closed: bool
}

impl Path {
    pub fn new(commands: Vec<PathCommand>, closed: bool) -> Path { Path { commands, closed } }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> { self.commands.iter() }

    pub fn first_point(&self) -> Option<Vec2> { self.commands.first().map(|c| c.target()) }
    pub fn last_point(&self) -> Option<Vec2> { self.commands.last().map(|c| c.target()) }

    // Applies a function to every command, keeping the order and the closed flag
    pub(crate) fn map_commands(&self, f: impl Fn(&PathCommand) -> PathCommand) -> Path {
        Path { commands: self.commands.iter().map(f).collect(), closed: self.closed }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter { self.commands.iter() }
}

impl AbsDiffEq for Path {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }
    fn abs_diff_eq(&self, other: &Path, epsilon: Coord) -> bool {
        self.closed == other.closed && self.commands.len() == other.commands.len()
            && self.commands.iter().zip(other.commands.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
