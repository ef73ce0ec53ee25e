//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the proxy enumeration Curve, which acts as a dispatcher
// between the kinds of curves a path is finally drawn with
//--------------------------------------------------------------------

use crate::derive_more::*;

mod line;
mod quadratic_bezier;
mod cubic_bezier;
mod circular_arc;

pub use line::Line;
pub use quadratic_bezier::QuadraticBezier;
pub use cubic_bezier::CubicBezier;
pub use circular_arc::*;

use crate::geometry::*;

// Only lines and cubics reach a curve sink: quadratics get promoted
// and arcs get subdivided
#[derive(Copy, Clone, Display)]
pub enum Curve {
    Line(Line),
    CubicBezier(CubicBezier)
}

// Use a simplifier macro to implement the "normal" functions
// Macro idea by https://github.com/u32i64
macro_rules! forward_to_curves {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty );*) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Curve::Line(l) => l.$i($($arg,)*),
                    Curve::CubicBezier(c) => c.$i($($arg,)*)
                }
            }
        )*
    }
}

impl Curve {
    // Forward the implementations that have similar signatures
    forward_to_curves! {
        at(t: Coord) -> Vec2
    }

    // Create curves of specific types
    pub fn line(a: Vec2, b: Vec2) -> Curve { Curve::Line(Line { a, b }) }
    pub fn cubic_bezier(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Curve {
        Curve::CubicBezier(CubicBezier { a, b, c, d })
    }

    pub fn is_line(&self) -> bool {
        match self {
            Curve::Line(_) => true,
            _ => false
        }
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
