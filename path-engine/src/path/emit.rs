//------------------------------------------------------------------------------
// emit.rs
//------------------------------------------------------------------------------
// Replays a path against an abstract curve-drawing interface, promoting
// quadratics and subdividing arcs on the way
//------------------------------------------------------------------------------

use log::trace;

use super::*;
use crate::curve::{Curve, QuadraticBezier};

// Anything that can draw lines and cubic curves
pub trait CurveSink {
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
}

impl Path {
    pub fn emit(&self, sink: &mut impl CurveSink) {
        let mut current = Vec2::zero();

        for cmd in self.commands.iter() {
            match cmd {
                PathCommand::MoveTo(target) => {
                    sink.move_to(*target);
                    current = *target;
                }
                PathCommand::LineTo(target) => {
                    sink.line_to(*target);
                    current = *target;
                }
                PathCommand::QuadraticBezierTo(ctl, target) => {
                    let cubic = QuadraticBezier { a: current, b: *ctl, c: *target }.to_cubic();
                    sink.curve_to(cubic.b, cubic.c, cubic.d);
                    current = *target;
                }
                PathCommand::CubicBezierTo(ctl1, ctl2, target) => {
                    sink.curve_to(*ctl1, *ctl2, *target);
                    current = *target;
                }
                PathCommand::ArcTo(arc) => {
                    let segments = arc.to_cubic_beziers();
                    trace!("arc {} subdivided in {} segments", arc, segments.len());

                    if segments.is_empty() {
                        sink.line_to(arc.target);
                        current = arc.target;
                    } else {
                        if !segments[0].a.roughly_equals(current) { sink.line_to(segments[0].a); }
                        for s in segments.iter() {
                            sink.curve_to(s.b, s.c, s.d);
                            current = s.d;
                        }
                    }
                }
            }
        }

        if self.closed {
            if let Some(first) = self.first_point() { sink.line_to(first); }
        }
    }
}

pub fn emit(path: &Path, sink: &mut impl CurveSink) { path.emit(sink) }

// A sink that gathers the drawn geometry as curves
#[derive(Clone, Debug, Default)]
pub struct CurveCollector {
    pub curves: Vec<Curve>,
    pen: Vec2
}

impl CurveCollector {
    pub fn new() -> CurveCollector { CurveCollector { curves: Vec::new(), pen: Vec2::zero() } }

    pub fn collect(path: &Path) -> Vec<Curve> {
        let mut collector = CurveCollector::new();
        path.emit(&mut collector);
        collector.curves
    }
}

impl CurveSink for CurveCollector {
    fn move_to(&mut self, p: Vec2) { self.pen = p; }

    fn line_to(&mut self, p: Vec2) {
        self.curves.push(Curve::line(self.pen, p));
        self.pen = p;
    }

    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.curves.push(Curve::cubic_bezier(self.pen, c1, c2, end));
        self.pen = end;
    }
}
