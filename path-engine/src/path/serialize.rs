//------------------------------------------------------------------------------
// serialize.rs
//------------------------------------------------------------------------------
// Renders paths back to canonical path data: absolute coordinates, an
// explicit verb on every command and single spaces between everything
//------------------------------------------------------------------------------

use super::*;

fn flag(b: bool) -> u8 { if b { 1 } else { 0 } }

// Writes the command with its verb, without the leading separator
fn write_command(f: &mut Formatter, cmd: &PathCommand) -> Result {
    match cmd {
        PathCommand::MoveTo(t) => write!(f, "M{} {}", t.x, t.y),
        PathCommand::LineTo(t) => write!(f, "L{} {}", t.x, t.y),
        PathCommand::ArcTo(arc) => write!(f, "A{} {} 0 {} {} {} {}", arc.radius, arc.radius,
            flag(arc.large_arc), flag(arc.clockwise), arc.target.x, arc.target.y),
        PathCommand::QuadraticBezierTo(c, t) => write!(f, "Q{} {} {} {}", c.x, c.y, t.x, t.y),
        PathCommand::CubicBezierTo(c1, c2, t) =>
            write!(f, "C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, t.x, t.y)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write_command(f, cmd)?;
        }

        if self.closed {
            if self.commands.is_empty() { write!(f, "Z") }
            else { write!(f, " Z") }
        } else { Ok(()) }
    }
}

pub fn serialize(path: &Path) -> String { path.to_string() }
