//--------------------------------------------------------------------
// properties.rs
//--------------------------------------------------------------------
// Checks the properties that tie the loader and the engine together
//--------------------------------------------------------------------

use approx::assert_abs_diff_eq;

use path_data_loader::*;
use path_engine::*;

const SAMPLES: &[&str] = &[
    "M0,0 L10,10 Z",
    "M0,0 10,10 20,20",
    "m5 5 l10 0 h5 v5 H0 V-3 z",
    "M10 80 C40 10 65 10 95 80 S150 150 180 80",
    "M10 80 Q52.5 10 95 80 T180 80 t20 0",
    "M0,0 A5,5 0 1110,0",
    "M80 80 A45 45 0 0 0 125 125 L125 80 Z",
    "M230 80 a45,45 0 1,0 45,45 l0-45z",
    "M-3.5e1,.5 c1.25-2 3 4 5.5.5 s-1-1 2 2 q3 3 4 0 a2 3 0 0 1 4 4",
    "M0 0 C0 0 10 10 10 10 Q5 5 5 5 A0 3 0 0 1 8 8",
    "M0 0 A1e200 1e200 0 0 1 10 0 A1e308 1e308 0 1 0 3 4",
];

fn rects() -> Vec<Rect> {
    vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(-20.0, 5.0, 3.0, 70.0), Rect::new(1.5, -2.5, 0.0, 0.0)]
}

#[test]
fn test_close_example() {
    let path = parse("M0,0 L10,10 Z").unwrap();
    assert!(path.closed);
    assert_eq!(path.commands, vec![PathCommand::MoveTo(Vec2::new(0.0, 0.0)), PathCommand::LineTo(Vec2::new(10.0, 10.0))]);
}

#[test]
fn test_implicit_lineto_example() {
    let path = parse("M0,0 10,10 20,20").unwrap();
    assert!(!path.closed);
    assert_eq!(path.commands, vec![
        PathCommand::MoveTo(Vec2::new(0.0, 0.0)),
        PathCommand::LineTo(Vec2::new(10.0, 10.0)),
        PathCommand::LineTo(Vec2::new(20.0, 20.0))
    ]);
}

#[test]
fn test_packed_flags_example() {
    // The flags take one character each, "00,0" is the endpoint
    let tokens: Vec<_> = Scanner::new("M0,0 A5,5 0 1100,0").collect::<Result<_, _>>().unwrap();
    assert_eq!(tokens[1].args.as_slice(), &[5.0, 5.0, 0.0, 1.0, 1.0, 0.0, 0.0]);

    // Coincident endpoints make the arc degenerate
    let path = parse("M0,0 A5,5 0 1100,0").unwrap();
    assert_eq!(path.commands[1], PathCommand::LineTo(Vec2::new(0.0, 0.0)));

    let path = parse("M0,0 A5,5 0 1110,0").unwrap();
    match path.commands[1] {
        PathCommand::ArcTo(arc) => {
            assert!(arc.large_arc);
            assert!(arc.clockwise);
            assert_eq!(arc.target, Vec2::new(10.0, 0.0));
        }
        other => panic!("expected an arc, got {}", other)
    }
}

#[test]
fn test_horizontal_example() {
    let path = parse("M0,0 H5").unwrap();
    assert_eq!(path.commands[1], PathCommand::LineTo(Vec2::new(5.0, 0.0)));
}

#[test]
fn test_smooth_default_example() {
    let path = parse("M0,0 S5,5 10,0").unwrap();
    assert_eq!(path.commands[1],
        PathCommand::CubicBezierTo(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(10.0, 0.0)));
}

#[test]
fn test_zero_radius_example() {
    let path = parse("M0,0 A0,0 0 0 1 7,3").unwrap();
    assert_eq!(path.commands[1], PathCommand::LineTo(Vec2::new(7.0, 3.0)));
}

#[test]
fn test_round_trip() {
    for text in SAMPLES {
        let path = parse(text).unwrap();
        let canonical = serialize(&path);
        let reparsed = parse(&canonical).unwrap_or_else(|e| panic!("{} did not reparse: {}", canonical, e));
        assert_abs_diff_eq!(reparsed, path);
        assert_eq!(serialize(&reparsed), canonical);
    }
}

#[test]
fn test_canonical_form_is_explicit() {
    let path = parse("m0 0 10 10 20 0z").unwrap();
    assert_eq!(serialize(&path), "M0 0 L10 10 L30 10 Z");
}

#[test]
fn test_flip_involution() {
    for text in SAMPLES {
        let path = parse(text).unwrap();
        for r in rects() {
            assert_abs_diff_eq!(flip_horizontal(&flip_horizontal(&path, r), r), path, epsilon = 1e-9);
            assert_abs_diff_eq!(flip_vertical(&flip_vertical(&path, r), r), path, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_flip_mirrors_drawn_arcs() {
    let path = parse("M0 0 A5 5 0 0 1 10 0").unwrap();
    let bounds = path.bounds().unwrap();
    let axis = bounds.center().y;

    let original = CurveCollector::collect(&path);
    let flipped = CurveCollector::collect(&flip_vertical(&path, bounds));
    assert_eq!(original.len(), flipped.len());

    for (a, b) in original.iter().zip(flipped.iter()) {
        for i in 0..=8 {
            let t = i as Coord / 8.0;
            let p = a.at(t);
            assert_abs_diff_eq!(b.at(t), Vec2::new(p.x, 2.0 * axis - p.y), epsilon = 1e-9);
        }
    }
}

#[test]
fn test_extent_is_a_superset() {
    let check = |path: &Path| {
        let extent = path.bounding_extent().unwrap().to_rect();
        for curve in CurveCollector::collect(path) {
            for i in 0..=32 {
                let p = curve.at(i as Coord / 32.0);
                assert!(extent.roughly_contains_point(p), "{} outside {} for {}", p, extent, serialize(path));
            }
        }
    };

    for text in SAMPLES {
        let path = parse(text).unwrap();
        check(&path);
        check(&path.translated(Vec2::new(-7.0, 3.0)));
        check(&path.scaled(Vec2::new(2.0, 0.5), Vec2::new(1.0, 1.0)));
        check(&path.flipped_horizontally(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }
}

#[test]
fn test_transforms_keep_shape() {
    for text in SAMPLES {
        let path = parse(text).unwrap();
        let moved = translate(&path, 3.0, 4.0);
        assert_eq!(moved.len(), path.len());
        assert_eq!(moved.closed, path.closed);
        assert!(moved.iter().zip(path.iter()).all(|(a, b)| a.verb() == b.verb()));
        assert_abs_diff_eq!(translate(&moved, -3.0, -4.0), path, epsilon = 1e-9);

        let scaled = scale(&path, 2.0, 2.0, Vec2::zero());
        assert_abs_diff_eq!(scale(&scaled, 0.5, 0.5, Vec2::zero()), path, epsilon = 1e-9);
    }
}

#[test]
fn test_errors_are_all_or_nothing() {
    let err = parse("M0 0 L10 10 L20").unwrap_err();
    assert_eq!(err.reason, MalformedReason::WrongArgumentCount);
    assert_eq!(err.token, 2);

    // Literals out of range never yield infinite coordinates
    assert_eq!(parse("M1e400 0 L1 1").unwrap_err().reason, MalformedReason::UnterminatedNumber);

    // A truncated prefix still parses
    assert_eq!(parse("M0 0 L10 10").unwrap().len(), 2);
}
