//--------------------------------------------------------------------
// points.rs
//--------------------------------------------------------------------
// Reads and writes the point lists of polygons and polylines
//--------------------------------------------------------------------

use path_engine::Vec2;
use crate::error::{MalformedPath, MalformedReason};
use crate::scanner::Scanner;

// Float pairs as text: commas are optional, whitespace will do
pub fn parse_points(text: &str) -> Result<Vec<Vec2>, MalformedPath> {
    let mut scanner = Scanner::new(text);
    let mut coords = Vec::new();

    loop {
        scanner.skip_separators();
        if scanner.position() >= text.len() { break; }
        coords.push(scanner.scan_number()?);
    }

    if coords.len() % 2 != 0 {
        return Err(MalformedPath::new(MalformedReason::WrongArgumentCount, text.len(), coords.len() / 2));
    }

    Ok(coords.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect())
}

pub fn points_to_string(points: &[Vec2]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}
