//------------------------------------------------------------------------------
// vertex.rs
//------------------------------------------------------------------------------
// Lists the editable points of a path, tagged with their role
//------------------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum VertexKind { Simple, Quadratic, Cubic, QuadraticControl, CubicControl }

// The index is the one of the command owning the point
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vertex { pub kind: VertexKind, pub position: Vec2, pub index: usize }

impl Path {
    // Arc centers are derived data and not listed
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for (index, cmd) in self.commands.iter().enumerate() {
            let mut push = |kind, position| vertices.push(Vertex { kind, position, index });
            match cmd {
                PathCommand::MoveTo(t) | PathCommand::LineTo(t) => push(VertexKind::Simple, *t),
                PathCommand::ArcTo(arc) => push(VertexKind::Simple, arc.target),
                PathCommand::QuadraticBezierTo(c, t) => {
                    push(VertexKind::QuadraticControl, *c);
                    push(VertexKind::Quadratic, *t);
                }
                PathCommand::CubicBezierTo(c1, c2, t) => {
                    push(VertexKind::CubicControl, *c1);
                    push(VertexKind::CubicControl, *c2);
                    push(VertexKind::Cubic, *t);
                }
            }
        }
        vertices
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vertex_listing() {
        let path = Path::new(vec![
            PathCommand::MoveTo(Vec2::new(0.0, 0.0)),
            PathCommand::QuadraticBezierTo(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0)),
            PathCommand::CubicBezierTo(Vec2::new(3.0, 1.0), Vec2::new(4.0, 1.0), Vec2::new(5.0, 0.0))
        ], false);

        let vertices = path.vertices();
        let kinds: Vec<_> = vertices.iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![VertexKind::Simple, VertexKind::QuadraticControl, VertexKind::Quadratic,
            VertexKind::CubicControl, VertexKind::CubicControl, VertexKind::Cubic]);

        let indices: Vec<_> = vertices.iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![0, 1, 1, 2, 2, 2]);
        assert_eq!(vertices[4].position, Vec2::new(4.0, 1.0));
    }
}
