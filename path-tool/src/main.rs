//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Loads a path from a file, applies the operations given in the
// command line and prints the results
//--------------------------------------------------------------------

extern crate path_data_loader;
extern crate path_engine;
extern crate svg;

use std::error::Error;
use std::process;

use log::{debug, info};
use path_engine::{CurveSink, Path, Vec2, Coord};
use svg::node::element::tag;
use svg::parser::Event;

const USAGE: &str = "usage: path-tool <file> [translate DX DY | scale SX SY [OX OY] | flip-h | flip-v | bounds | emit | vertices]...";

type ToolResult<T> = Result<T, Box<dyn Error>>;

// Prints every drawing call in path syntax
struct PrintSink;

impl CurveSink for PrintSink {
    fn move_to(&mut self, p: Vec2) { println!("move_to {} {}", p.x, p.y); }
    fn line_to(&mut self, p: Vec2) { println!("line_to {} {}", p.x, p.y); }
    fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        println!("curve_to {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }
}

// An SVG document contributes the "d" attribute of each of its path elements
fn load_paths(file: &str) -> ToolResult<Vec<Path>> {
    let text = std::fs::read_to_string(file)?;

    if !text.trim_start().starts_with('<') {
        return Ok(vec![path_data_loader::parse(&text)?]);
    }

    let mut content = String::new();
    let mut paths = Vec::new();
    for event in svg::open(file, &mut content)? {
        if let Event::Tag(tag::Path, _, attributes) = event {
            if let Some(data) = attributes.get("d") {
                paths.push(path_data_loader::parse(&data.to_string())?);
            }
        }
    }

    info!("loaded {} paths from {}", paths.len(), file);
    Ok(paths)
}

fn next_number<'a>(args: &mut impl Iterator<Item = &'a String>, op: &str) -> ToolResult<Coord> {
    let arg = args.next().ok_or_else(|| format!("{} is missing an argument", op))?;
    Ok(arg.parse::<Coord>().map_err(|_| format!("{}: invalid number {}", op, arg))?)
}

fn apply_operations(mut path: Path, ops: &[String]) -> ToolResult<Path> {
    let mut args = ops.iter();

    while let Some(op) = args.next() {
        debug!("applying {}", op);
        match op.as_str() {
            "translate" => {
                let dx = next_number(&mut args, op)?;
                let dy = next_number(&mut args, op)?;
                path = path_engine::translate(&path, dx, dy);
            }
            "scale" => {
                let sx = next_number(&mut args, op)?;
                let sy = next_number(&mut args, op)?;
                let rest = args.as_slice();
                let origin = if rest.len() >= 2 && rest[0].parse::<Coord>().is_ok() {
                    Vec2::new(next_number(&mut args, op)?, next_number(&mut args, op)?)
                } else { Vec2::zero() };
                path = path_engine::scale(&path, sx, sy, origin);
            }
            "flip-h" => if let Some(bounds) = path.bounds() {
                path = path_engine::flip_horizontal(&path, bounds);
            },
            "flip-v" => if let Some(bounds) = path.bounds() {
                path = path_engine::flip_vertical(&path, bounds);
            },
            "bounds" => match path_engine::bounding_extent(&path) {
                Some((min, max)) => println!("bounds {} {} {} {}", min.x, min.y, max.x, max.y),
                None => println!("bounds (empty)")
            },
            "emit" => path_engine::emit(&path, &mut PrintSink),
            "vertices" => for vertex in path.vertices() {
                println!("{} {} {} (command {})", vertex.kind, vertex.position.x, vertex.position.y, vertex.index);
            },
            _ => return Err(format!("unknown operation {}\n{}", op, USAGE).into())
        }
    }

    Ok(path)
}

fn run(args: &[String]) -> ToolResult<()> {
    let file = args.first().ok_or(USAGE)?;

    for path in load_paths(file)? {
        let path = apply_operations(path, &args[1..])?;
        println!("{}", path_engine::serialize(&path));
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("path-tool: {}", err);
        process::exit(1);
    }
}
