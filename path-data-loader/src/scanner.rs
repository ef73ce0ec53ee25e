//--------------------------------------------------------------------
// scanner.rs
//--------------------------------------------------------------------
// Splits path data into tokens: a verb, its relativity and its
// arguments, repeating the previous verb when only numbers follow
//--------------------------------------------------------------------

use arrayvec::ArrayVec;
use log::trace;

use path_engine::Coord;
use crate::error::{MalformedPath, MalformedReason};

/// Sized for the arc command.
pub const MAX_ARG_COUNT: usize = 7;

pub type ScanArgs = ArrayVec<[Coord; MAX_ARG_COUNT]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicTo,
    SmoothCubicTo,
    QuadraticTo,
    SmoothQuadraticTo,
    ArcTo,
    ClosePath
}

impl Verb {
    /// The verb for a letter, and whether it is the relative form.
    pub fn from_letter(c: char) -> Option<(Verb, bool)> {
        let verb = match c.to_ascii_uppercase() {
            'M' => Verb::MoveTo,
            'L' => Verb::LineTo,
            'H' => Verb::HorizontalLineTo,
            'V' => Verb::VerticalLineTo,
            'C' => Verb::CubicTo,
            'S' => Verb::SmoothCubicTo,
            'Q' => Verb::QuadraticTo,
            'T' => Verb::SmoothQuadraticTo,
            'A' => Verb::ArcTo,
            'Z' => Verb::ClosePath,
            _ => return None
        };
        Some((verb, c.is_ascii_lowercase()))
    }

    pub fn letter(self) -> char {
        match self {
            Verb::MoveTo => 'M',
            Verb::LineTo => 'L',
            Verb::HorizontalLineTo => 'H',
            Verb::VerticalLineTo => 'V',
            Verb::CubicTo => 'C',
            Verb::SmoothCubicTo => 'S',
            Verb::QuadraticTo => 'Q',
            Verb::SmoothQuadraticTo => 'T',
            Verb::ArcTo => 'A',
            Verb::ClosePath => 'Z'
        }
    }

    pub fn arg_count(self) -> usize {
        match self {
            Verb::MoveTo | Verb::LineTo | Verb::SmoothQuadraticTo => 2,
            Verb::HorizontalLineTo | Verb::VerticalLineTo => 1,
            Verb::CubicTo => 6,
            Verb::SmoothCubicTo | Verb::QuadraticTo => 4,
            Verb::ArcTo => 7,
            Verb::ClosePath => 0
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanToken {
    pub verb: Verb,
    pub relative: bool,
    pub args: ScanArgs,
    /// Byte offset of the token in the path data
    pub offset: usize,
    pub index: usize
}

fn is_separator(c: u8) -> bool { c == b',' || c.is_ascii_whitespace() }
fn is_number_start(c: u8) -> bool { c.is_ascii_digit() || c == b'+' || c == b'-' || c == b'.' }

/// A scanner over the `d` attribute of a path. It can only be restarted by
/// building a new one; cloning it keeps the current position.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    last: Option<(Verb, bool)>,
    count: usize,
    failed: bool
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Scanner<'a> {
        Scanner { text, pos: 0, last: None, count: 0, failed: false }
    }

    pub fn position(&self) -> usize { self.pos }

    fn peek(&self) -> Option<u8> { self.text.as_bytes().get(self.pos).copied() }

    fn fail(&self, reason: MalformedReason, offset: usize) -> MalformedPath {
        MalformedPath::new(reason, offset, self.count)
    }

    pub(crate) fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !is_separator(c) { break; }
            self.pos += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() { break; }
            self.pos += 1;
        }
        self.pos - start
    }

    fn skip_sign(&mut self) {
        if let Some(b'+') | Some(b'-') = self.peek() { self.pos += 1; }
    }

    // What a missing argument looks like: the end, a verb, or garbage
    fn missing_argument(&self) -> MalformedPath {
        match self.peek() {
            Some(c) if !c.is_ascii_alphabetic() => self.fail(MalformedReason::UnexpectedCharacter, self.pos),
            _ => self.fail(MalformedReason::WrongArgumentCount, self.pos)
        }
    }

    /// Reads a floating literal: sign, digits, fraction and exponent.
    pub(crate) fn scan_number(&mut self) -> Result<Coord, MalformedPath> {
        self.skip_separators();
        let start = self.pos;
        match self.peek() {
            Some(c) if is_number_start(c) => {}
            _ => return Err(self.missing_argument())
        }

        self.skip_sign();
        let mut digits = self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.skip_digits();
        }
        if digits == 0 { return Err(self.fail(MalformedReason::UnterminatedNumber, start)); }

        if let Some(b'e') | Some(b'E') = self.peek() {
            self.pos += 1;
            self.skip_sign();
            if self.skip_digits() == 0 { return Err(self.fail(MalformedReason::UnterminatedNumber, start)); }
        }

        // Literals out of the f64 range are rejected instead of becoming infinite
        match self.text[start..self.pos].parse::<Coord>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.fail(MalformedReason::UnterminatedNumber, start))
        }
    }

    // Arc flags are exactly one character, whatever follows them
    fn scan_flag(&mut self) -> Result<Coord, MalformedPath> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => { self.pos += 1; Ok(0.0) }
            Some(b'1') => { self.pos += 1; Ok(1.0) }
            Some(c) if is_number_start(c) => Err(self.fail(MalformedReason::UnexpectedCharacter, self.pos)),
            _ => Err(self.missing_argument())
        }
    }

    /// One step of the scanner: a token, the end of the input, or an error.
    pub fn next_token(&mut self) -> Result<Option<ScanToken>, MalformedPath> {
        self.skip_separators();
        let offset = self.pos;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None)
        };

        let (verb, relative) = if let Some(vr) = Verb::from_letter(c as char) {
            self.pos += 1;
            vr
        } else if is_number_start(c) {
            match self.last {
                None => return Err(self.fail(MalformedReason::MissingInitialMoveTo, offset)),
                Some((Verb::ClosePath, _)) => return Err(self.fail(MalformedReason::MultipleSubpaths, offset)),
                // Numbers after a moveto are implicit linetos
                Some((Verb::MoveTo, relative)) => (Verb::LineTo, relative),
                Some(vr) => vr
            }
        } else {
            return Err(self.fail(MalformedReason::UnexpectedCharacter, offset));
        };

        let mut args = ScanArgs::new();
        for i in 0..verb.arg_count() {
            let value = if verb == Verb::ArcTo && (i == 3 || i == 4) { self.scan_flag()? }
                else { self.scan_number()? };
            args.push(value);
        }

        let token = ScanToken { verb, relative, args, offset, index: self.count };
        trace!("scanned token {} {}{:?}", token.index,
            if relative { verb.letter().to_ascii_lowercase() } else { verb.letter() }, token.args.as_slice());

        self.last = Some((verb, relative));
        self.count += 1;
        Ok(Some(token))
    }
}

// Fused after the first error
impl<'a> Iterator for Scanner<'a> {
    type Item = Result<ScanToken, MalformedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed { return None; }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
