//--------------------------------------------------------------------
// builder.rs
//--------------------------------------------------------------------
// Turns scanned tokens into absolute path commands, keeping track of
// the current point and of the control point smooth curves reflect
//--------------------------------------------------------------------

use log::{debug, trace};

use path_engine::*;
use crate::error::{MalformedPath, MalformedReason};
use crate::scanner::{ScanToken, Verb};

enum LastCurve { Quadratic, Cubic, Other }

pub struct CommandBuilder {
    commands: Vec<PathCommand>,
    first: Vec2,
    current: Vec2,
    last_control: Vec2,
    last_curve: LastCurve,
    closed: bool
}

impl CommandBuilder {
    pub fn new() -> CommandBuilder {
        CommandBuilder {
            commands: Vec::new(),
            first: Vec2::zero(),
            current: Vec2::zero(),
            last_control: Vec2::zero(),
            last_curve: LastCurve::Other,
            closed: false
        }
    }

    fn push(&mut self, cmd: PathCommand) {
        trace!("built command {}: {}", self.commands.len(), cmd);
        self.current = cmd.target();
        self.commands.push(cmd);
    }

    // Degenerate curves are kept as straight segments
    fn push_quadratic(&mut self, ctl: Vec2, target: Vec2) {
        if (QuadraticBezier { a: self.current, b: ctl, c: target }).is_degenerate() {
            debug!("degenerate quadratic to {} replaced by a line", target);
            self.push(PathCommand::LineTo(target));
        } else {
            self.push(PathCommand::QuadraticBezierTo(ctl, target));
        }
    }

    fn push_cubic(&mut self, ctl1: Vec2, ctl2: Vec2, target: Vec2) {
        if (CubicBezier { a: self.current, b: ctl1, c: ctl2, d: target }).is_degenerate() {
            debug!("degenerate cubic to {} replaced by a line", target);
            self.push(PathCommand::LineTo(target));
        } else {
            self.push(PathCommand::CubicBezierTo(ctl1, ctl2, target));
        }
    }

    fn push_arc(&mut self, rx: Coord, ry: Coord, large_arc: bool, clockwise: bool, target: Vec2) {
        let arc = if rx == 0.0 || ry == 0.0 { None }
            else { CircularArc::from_path_params(self.current, rx.abs() / 2.0 + ry.abs() / 2.0, large_arc, clockwise, target) };

        match arc {
            Some(arc) => self.push(PathCommand::ArcTo(arc)),
            None => {
                debug!("degenerate arc to {} replaced by a line", target);
                self.push(PathCommand::LineTo(target));
            }
        }
    }

    pub fn push_token(&mut self, token: &ScanToken) -> Result<(), MalformedPath> {
        let fail = |reason| MalformedPath::new(reason, token.offset, token.index);

        if self.closed { return Err(fail(MalformedReason::MultipleSubpaths)); }
        if self.commands.is_empty() && token.verb != Verb::MoveTo {
            return Err(fail(MalformedReason::MissingInitialMoveTo));
        }
        if !self.commands.is_empty() && token.verb == Verb::MoveTo {
            return Err(fail(MalformedReason::MultipleSubpaths));
        }

        let args = token.args.as_slice();
        if args.len() != token.verb.arg_count() { return Err(fail(MalformedReason::WrongArgumentCount)); }

        // Relative coordinates are resolved right here
        let base = if token.relative { self.current } else { Vec2::zero() };
        let pt = |i: usize| base + Vec2::new(args[i], args[i+1]);

        let mut last_curve = LastCurve::Other;
        match token.verb {
            Verb::MoveTo => {
                let target = pt(0);
                self.first = target;
                self.push(PathCommand::MoveTo(target));
            }
            Verb::LineTo => self.push(PathCommand::LineTo(pt(0))),
            Verb::HorizontalLineTo => {
                let target = Vec2::new(base.x + args[0], self.current.y);
                self.push(PathCommand::LineTo(target));
            }
            Verb::VerticalLineTo => {
                let target = Vec2::new(self.current.x, base.y + args[0]);
                self.push(PathCommand::LineTo(target));
            }
            Verb::CubicTo => {
                let ctl2 = pt(2);
                self.push_cubic(pt(0), ctl2, pt(4));
                self.last_control = ctl2;
                last_curve = LastCurve::Cubic;
            }
            Verb::SmoothCubicTo => {
                let ctl1 = if let LastCurve::Cubic = self.last_curve { self.current * 2.0 - self.last_control }
                    else { self.current };
                let ctl2 = pt(0);
                self.push_cubic(ctl1, ctl2, pt(2));
                self.last_control = ctl2;
                last_curve = LastCurve::Cubic;
            }
            Verb::QuadraticTo => {
                let ctl = pt(0);
                self.push_quadratic(ctl, pt(2));
                self.last_control = ctl;
                last_curve = LastCurve::Quadratic;
            }
            Verb::SmoothQuadraticTo => {
                let ctl = if let LastCurve::Quadratic = self.last_curve { self.current * 2.0 - self.last_control }
                    else { self.current };
                self.push_quadratic(ctl, pt(0));
                self.last_control = ctl;
                last_curve = LastCurve::Quadratic;
            }
            Verb::ArcTo => self.push_arc(args[0], args[1], args[3] != 0.0, args[4] != 0.0, pt(5)),
            Verb::ClosePath => {
                self.closed = true;
                self.current = self.first;
            }
        }

        self.last_curve = last_curve;
        Ok(())
    }

    pub fn finish(self) -> Result<Path, MalformedPath> {
        if self.commands.is_empty() {
            return Err(MalformedPath::new(MalformedReason::MissingInitialMoveTo, 0, 0));
        }
        Ok(Path::new(self.commands, self.closed))
    }
}

impl Default for CommandBuilder {
    fn default() -> CommandBuilder { CommandBuilder::new() }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scanner::Scanner;
    use approx::assert_abs_diff_eq;

    fn build(text: &str) -> Result<Path, MalformedPath> {
        let mut builder = CommandBuilder::new();
        for token in Scanner::new(text) { builder.push_token(&token?)?; }
        builder.finish()
    }

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_relative_resolution() {
        let path = build("m10 10 l5 0 h5 v-10 c1 1 2 2 3 0").unwrap();
        assert_abs_diff_eq!(path, Path::new(vec![
            PathCommand::MoveTo(v(10.0, 10.0)),
            PathCommand::LineTo(v(15.0, 10.0)),
            PathCommand::LineTo(v(20.0, 10.0)),
            PathCommand::LineTo(v(20.0, 0.0)),
            PathCommand::CubicBezierTo(v(21.0, 1.0), v(22.0, 2.0), v(23.0, 0.0))
        ], false));
    }

    #[test]
    fn test_smooth_cubic_reflects_previous_control() {
        let path = build("M0 0 C0 10 10 10 10 0 S20 -10 20 0").unwrap();
        assert_abs_diff_eq!(path.commands[2], PathCommand::CubicBezierTo(v(10.0, -10.0), v(20.0, -10.0), v(20.0, 0.0)));
    }

    #[test]
    fn test_smooth_cubic_after_quadratic_does_not_reflect() {
        let path = build("M0 0 Q5 10 10 0 S20 -10 20 0").unwrap();
        assert_abs_diff_eq!(path.commands[2], PathCommand::CubicBezierTo(v(10.0, 0.0), v(20.0, -10.0), v(20.0, 0.0)));
    }

    #[test]
    fn test_smooth_quadratic_chain() {
        let path = build("M0 0 Q5 10 10 0 T20 0 T30 0").unwrap();
        assert_abs_diff_eq!(path.commands[2], PathCommand::QuadraticBezierTo(v(15.0, -10.0), v(20.0, 0.0)));
        assert_abs_diff_eq!(path.commands[3], PathCommand::QuadraticBezierTo(v(25.0, 10.0), v(30.0, 0.0)));
    }

    #[test]
    fn test_smooth_quadratic_without_previous_is_a_line() {
        let path = build("M0 0 T10 5").unwrap();
        assert_eq!(path.commands[1], PathCommand::LineTo(v(10.0, 5.0)));
    }

    #[test]
    fn test_arcs() {
        let path = build("M0 0 A5 5 0 0 1 10 0").unwrap();
        match path.commands[1] {
            PathCommand::ArcTo(arc) => {
                assert_abs_diff_eq!(arc.center, v(5.0, 0.0));
                assert_abs_diff_eq!(arc.radius, 5.0);
                assert!(arc.clockwise);
                assert!(!arc.large_arc);
                assert_abs_diff_eq!(arc.target, v(10.0, 0.0));
            }
            other => panic!("expected an arc, got {}", other)
        }

        // The two radii collapse to their mean
        let path = build("M0 0 a4 8 30 1 0 20 0").unwrap();
        match path.commands[1] {
            PathCommand::ArcTo(arc) => {
                assert_abs_diff_eq!(arc.radius, 10.0);
                assert!(!arc.clockwise);
                assert!(arc.large_arc);
            }
            other => panic!("expected an arc, got {}", other)
        }
    }

    #[test]
    fn test_degenerate_arcs_become_lines() {
        let path = build("M0 0 A0 5 0 0 1 10 0 A5 5 0 1 1 10 0").unwrap();
        assert_eq!(path.commands[1], PathCommand::LineTo(v(10.0, 0.0)));
        assert_eq!(path.commands[2], PathCommand::LineTo(v(10.0, 0.0)));
    }

    #[test]
    fn test_huge_arc_radii() {
        // The radii average without overflowing
        let path = build("M0 0 A1e308 1e308 0 0 1 10 0 A1e200 1e200 0 1 0 20 5").unwrap();
        assert_eq!(path.commands[1], PathCommand::LineTo(v(10.0, 0.0)));
        assert_eq!(path.commands[2], PathCommand::LineTo(v(20.0, 5.0)));
        assert_eq!(path.to_string(), "M0 0 L10 0 L20 5");

        let path = build("M0 0 A1e300 1.5e300 0 0 1 10 0").unwrap();
        assert!(path.commands.iter().all(|c| c.target().x.is_finite() && c.target().y.is_finite()));
    }

    #[test]
    fn test_close() {
        let path = build("M1 1 L5 1 L5 5 z").unwrap();
        assert!(path.closed);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_subpath_errors() {
        let err = build("M0 0 L1 1 Z L2 2").unwrap_err();
        assert_eq!(err.reason, MalformedReason::MultipleSubpaths);
        assert_eq!(err.token, 3);

        let err = build("M0 0 L1 1 M5 5").unwrap_err();
        assert_eq!(err.reason, MalformedReason::MultipleSubpaths);
        assert_eq!(err.offset, 10);
    }

    #[test]
    fn test_missing_moveto() {
        assert_eq!(build("L1 1").unwrap_err().reason, MalformedReason::MissingInitialMoveTo);
        assert_eq!(build("").unwrap_err().reason, MalformedReason::MissingInitialMoveTo);
        assert_eq!(build("Z").unwrap_err().reason, MalformedReason::MissingInitialMoveTo);
    }
}
