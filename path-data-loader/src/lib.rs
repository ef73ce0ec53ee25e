//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Provides the path data loader: the scanner, the command builder
// and the entry points around them
//--------------------------------------------------------------------

extern crate arrayvec;
extern crate log;
extern crate path_engine;
extern crate thiserror;

mod error;
mod scanner;
mod builder;
mod points;

pub use error::*;
pub use scanner::*;
pub use builder::*;
pub use points::*;

use log::debug;
use path_engine::Path;

fn build_path(data: &str) -> Result<Path, MalformedPath> {
    let mut builder = CommandBuilder::new();
    for token in Scanner::new(data) {
        builder.push_token(&token?)?;
    }
    builder.finish()
}

/// Parses the `d` attribute of a path. On failure nothing but the error
/// comes out; callers wanting a partial path re-parse a prefix.
pub fn parse(data: &str) -> Result<Path, MalformedPath> {
    let result = build_path(data);
    if let Err(err) = &result { debug!("could not parse path data {:?}: {}", data, err); }
    result
}
