//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate arrayvec;
extern crate log;

mod geometry;
mod path;
mod curve;

pub use geometry::{Coord, Vec2, Rect, Geometry, EPSILON};
pub use path::*;
pub use curve::*;
