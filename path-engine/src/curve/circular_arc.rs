//--------------------------------------------------------------------
// circular-arc.rs
//--------------------------------------------------------------------
// Represents a circular arc in center parametrization, and
// provides its generation from path parameters and its subdivision
// in cubic Bézier curves
//--------------------------------------------------------------------

use crate::approx::AbsDiffEq;
use crate::arrayvec::ArrayVec;

use crate::geometry::*;
use super::cubic_bezier::CubicBezier;
use CoordM::consts::{PI, FRAC_PI_2};

pub const MAX_ARC_SEGMENTS: usize = 4;
pub const MAX_ARC_SEGMENT_SWEEP: Coord = FRAC_PI_2;

pub type ArcSegments = ArrayVec<[CubicBezier; MAX_ARC_SEGMENTS]>;

// The arc goes from start_angle to end_angle around the center; if clockwise
// is set the angle increases along the way (clockwise on a y-down canvas)
#[derive(Copy, Clone, PartialEq)]
pub struct CircularArc {
    pub center: Vec2,
    pub radius: Coord,
    pub start_angle: Coord,
    pub end_angle: Coord,
    pub clockwise: bool,
    pub large_arc: bool,
    pub target: Vec2
}

impl CircularArc {
    // Endpoint to center conversion, specialized for circles.
    // None is returned for degenerate arcs (no radius or no displacement)
    // and for radii so large that the center cannot be represented
    pub fn from_path_params(cur: Vec2, radius: Coord, large_arc: bool, clockwise: bool, target: Vec2) -> Option<CircularArc> {
        let mut radius = radius.abs();
        if radius.roughly_zero() || cur.roughly_equals(target) { return None; }

        // The half-chord, relative to the chord's midpoint
        let xpr = (cur - target) / 2.0;
        let hl2 = xpr.length_sq();

        // Guarantee that the radius is large enough
        let skr = if hl2 > radius * radius { radius = hl2.sqrt(); 0.0 }
            else { ((radius * radius - hl2) / hl2).sqrt() };

        // Calculate the center, relative and absolute
        let mut cpr = skr * xpr.cw_perpendicular();
        if large_arc == clockwise { cpr = -cpr; }
        let center = cpr + (target + cur) / 2.0;

        let start_angle = (xpr - cpr).angle();
        let end_angle = (-xpr - cpr).angle();

        let finite = [center.x, center.y, radius, start_angle, end_angle].iter().all(|v| v.is_finite());
        if !finite { return None; }

        Some(CircularArc { center, radius, start_angle, end_angle, clockwise, large_arc, target })
    }

    pub fn point_at_angle(&self, angle: Coord) -> Vec2 {
        self.center + self.radius * Vec2::from_angle(angle)
    }

    pub fn start_point(&self) -> Vec2 { self.point_at_angle(self.start_angle) }
    pub fn end_point(&self) -> Vec2 { self.point_at_angle(self.end_angle) }

    // The signed angle swept, positive when clockwise
    pub fn sweep(&self) -> Coord {
        (self.end_angle - self.start_angle).wrap_angle_360(self.clockwise)
    }

    pub fn segment_count(&self) -> usize {
        let sweep = self.sweep().abs();
        if sweep.roughly_zero() { 0 }
        else {
            let count = (sweep / MAX_ARC_SEGMENT_SWEEP - EPSILON).ceil().max(1.0) as usize;
            count.min(MAX_ARC_SEGMENTS)
        }
    }

    // Each segment spans at most a quarter turn, with the usual 4/3 tan(θ/4) handles
    pub fn to_cubic_beziers(&self) -> ArcSegments {
        let mut segments = ArrayVec::new();
        let count = self.segment_count();
        if count == 0 { return segments; }

        let step = self.sweep() / count as Coord;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * self.radius;

        for i in 0..count {
            let t0 = self.start_angle + step * i as Coord;
            let t1 = t0 + step;

            let a = self.point_at_angle(t0);
            let d = self.point_at_angle(t1);
            let b = a + k * Vec2::from_angle(t0).ccw_perpendicular();
            let c = d - k * Vec2::from_angle(t1).ccw_perpendicular();
            segments.push(CubicBezier { a, b, c, d });
        }

        segments
    }

    pub fn translated(&self, delta: Vec2) -> CircularArc {
        CircularArc { center: self.center + delta, target: self.target + delta, ..*self }
    }

    // Circles only stay circles under uniform scales, so non-uniform ones
    // use the mean factor for the radius and remap the angles
    pub fn scaled(&self, factor: Vec2, origin: Vec2) -> CircularArc {
        let scale_point = |p: Vec2| origin + (p - origin).mul_elems(factor);
        let remap_angle = |t: Coord| {
            let nt = (factor.y * t.sin()).atan2(factor.x * t.cos());
            nt + TWO_PI * ((t - nt) / TWO_PI).round()
        };

        let mut arc = CircularArc {
            center: scale_point(self.center),
            radius: self.radius * (factor.x.abs() + factor.y.abs()) / 2.0,
            start_angle: remap_angle(self.start_angle),
            end_angle: remap_angle(self.end_angle),
            clockwise: if factor.x * factor.y < 0.0 { !self.clockwise } else { self.clockwise },
            large_arc: self.large_arc,
            target: scale_point(self.target)
        };

        if factor.x != factor.y { arc.large_arc = arc.sweep().abs() > PI; }
        arc
    }

    // Mirroring reverses the sweep direction
    pub fn flipped_horizontally(&self, axis: Coord) -> CircularArc {
        CircularArc {
            center: Vec2::new(2.0 * axis - self.center.x, self.center.y),
            start_angle: PI - self.start_angle,
            end_angle: PI - self.end_angle,
            clockwise: !self.clockwise,
            target: Vec2::new(2.0 * axis - self.target.x, self.target.y),
            ..*self
        }
    }

    pub fn flipped_vertically(&self, axis: Coord) -> CircularArc {
        CircularArc {
            center: Vec2::new(self.center.x, 2.0 * axis - self.center.y),
            start_angle: -self.start_angle,
            end_angle: -self.end_angle,
            clockwise: !self.clockwise,
            target: Vec2::new(self.target.x, 2.0 * axis - self.target.y),
            ..*self
        }
    }
}

impl std::fmt::Display for CircularArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CircularArc(center = {}, radius = {}, start = {}, end = {}, {}, {}, target = {})",
            self.center, self.radius, self.start_angle.to_degrees(), self.end_angle.to_degrees(),
            if self.large_arc { "large" } else { "small" },
            if self.clockwise { "clockwise" } else { "counterclockwise" }, self.target)
    }
}

impl std::fmt::Debug for CircularArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl AbsDiffEq for CircularArc {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }
    fn abs_diff_eq(&self, other: &CircularArc, epsilon: Coord) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
            && (self.start_angle - other.start_angle).wrap_angle().abs() <= epsilon
            && (self.end_angle - other.end_angle).wrap_angle().abs() <= epsilon
            && self.clockwise == other.clockwise
            && self.large_arc == other.large_arc
            && self.target.abs_diff_eq(&other.target, epsilon)
    }
}
