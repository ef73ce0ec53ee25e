//------------------------------------------------------------------------------
// shapes.rs
//------------------------------------------------------------------------------
// Builds paths for the simple graphics: polylines, rectangles and circles
//------------------------------------------------------------------------------

use super::*;

impl Path {
    pub fn polyline(points: &[Vec2], closed: bool) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        let mut commands = vec![PathCommand::MoveTo(*first)];
        commands.extend(rest.iter().map(|&p| PathCommand::LineTo(p)));
        Some(Path { commands, closed })
    }

    pub fn rectangle(rect: Rect) -> Path {
        let min = rect.min();
        let max = rect.max();
        let commands = vec![
            PathCommand::MoveTo(min),
            PathCommand::LineTo(Vec2::new(max.x, min.y)),
            PathCommand::LineTo(max),
            PathCommand::LineTo(Vec2::new(min.x, max.y))
        ];
        Path { commands, closed: true }
    }

    // Two half circles, clockwise, starting on the rightmost point
    pub fn circle(center: Vec2, radius: Coord) -> Path {
        let right = center + Vec2::new(radius, 0.0);
        let left = center - Vec2::new(radius, 0.0);

        let half = |from, to| match CircularArc::from_path_params(from, radius, false, true, to) {
            Some(arc) => PathCommand::ArcTo(arc),
            None => PathCommand::LineTo(to)
        };

        let commands = vec![PathCommand::MoveTo(right), half(right, left), half(left, right)];
        Path { commands, closed: true }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polyline() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 1.0)];
        let path = Path::polyline(&pts, false).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.commands[2], PathCommand::LineTo(Vec2::new(3.0, 1.0)));
        assert!(Path::polyline(&[], true).is_none());
    }

    #[test]
    fn test_rectangle() {
        let path = Path::rectangle(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(path.closed);
        assert_eq!(path.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_circle() {
        let path = Path::circle(Vec2::new(5.0, 5.0), 2.0);
        assert_eq!(path.len(), 3);

        let rect = path.bounds().unwrap();
        assert!(rect.x <= 3.0 + 1e-9 && rect.y <= 3.0 + 1e-9);
        assert!(rect.x + rect.width >= 7.0 - 1e-9 && rect.y + rect.height >= 7.0 - 1e-9);

        let curves = CurveCollector::collect(&path);
        for c in curves.iter() {
            assert_abs_diff_eq!(((c.at(0.5) - Vec2::new(5.0, 5.0)).length()), 2.0, epsilon = 1e-2);
        }

        // Degenerate circles still produce a path
        let dot = Path::circle(Vec2::new(1.0, 1.0), 0.0);
        assert_eq!(dot.commands[1], PathCommand::LineTo(Vec2::new(1.0, 1.0)));
    }
}
