//! Tokenization of SVG path data.
//!
//! The path grammar is loose about separators: commas and whitespace are optional
//! wherever the next token can be told apart from the previous one. For example
//! `M1.5.5-2` reads as `M 1.5 0.5 -2`.

use crate::error::{MalformedPath, Reason};

/// A token of the SVG path grammar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Position of the cursor in the source string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mark {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

/// A cursor over path data keeping track of line and column.
///
/// The scanner is an iterator of [`Token`]s. Iteration stops after the first error.
/// The parser doesn't iterate over tokens, it reads them one at a time with
/// [`Scanner::number`], [`Scanner::command`] and [`Scanner::flag`] since arc flags
/// have their own single-character syntax (`A 1 1 0 1110 10` has the flags `1` and
/// `1` followed by the endpoint `10 10`).
#[derive(Clone, Debug)]
pub struct Scanner<'l> {
    src: &'l str,
    bytes: &'l [u8],
    offset: usize,
    line: u32,
    column: u32,
    failed: bool,
}

pub(crate) fn is_command(c: u8) -> bool {
    match c {
        b'M' | b'm' | b'L' | b'l' | b'H' | b'h' | b'V' | b'v' | b'C' | b'c' | b'S' | b's'
        | b'Q' | b'q' | b'T' | b't' | b'A' | b'a' | b'Z' | b'z' => true,
        _ => false,
    }
}

fn is_separator(c: u8) -> bool {
    match c {
        b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b',' => true,
        _ => false,
    }
}

impl<'l> Scanner<'l> {
    pub fn new(src: &'l str) -> Self {
        Scanner {
            src,
            bytes: src.as_bytes(),
            offset: 0,
            line: 0,
            column: 0,
            failed: false,
        }
    }

    /// Current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// The part of the source that hasn't been consumed yet.
    #[inline]
    pub fn remainder(&self) -> &'l str {
        &self.src[self.offset..]
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// The character under the cursor, if any.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    #[inline]
    fn current_byte(&self) -> Option<u8> {
        self.bytes.get(self.offset).cloned()
    }

    /// Returns true if the cursor is on a command letter.
    pub fn at_command(&self) -> bool {
        self.current_byte().map_or(false, is_command)
    }

    /// Returns true if the cursor is on a character that can begin a number.
    pub fn at_number(&self) -> bool {
        match self.current_byte() {
            Some(b'0'..=b'9') | Some(b'+') | Some(b'-') | Some(b'.') => true,
            _ => false,
        }
    }

    pub fn skip_separators(&mut self) {
        while self.current_byte().map_or(false, is_separator) {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        match self.current_byte() {
            Some(b'\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => {
                self.column += 1;
            }
            None => {
                return;
            }
        }
        self.offset += 1;
    }

    fn advance_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(b'0'..=b'9') = self.current_byte() {
            self.advance_one();
            count += 1;
        }

        count
    }

    pub fn error(&self, reason: Reason) -> MalformedPath {
        self.error_at(self.mark(), reason)
    }

    pub fn error_at(&self, mark: Mark, reason: Reason) -> MalformedPath {
        MalformedPath {
            reason,
            offset: mark.offset,
            line: mark.line,
            column: mark.column,
        }
    }

    /// Reads a command letter.
    pub fn command(&mut self) -> Result<char, MalformedPath> {
        match self.current_byte() {
            Some(c) if is_command(c) => {
                self.advance_one();
                Ok(c as char)
            }
            Some(c) if c.is_ascii_alphabetic() => Err(self.error(Reason::Command {
                command: c as char,
            })),
            Some(_) => Err(self.error(Reason::Character {
                src: self.current().unwrap_or(' '),
            })),
            None => Err(self.error(Reason::Character { src: ' ' })),
        }
    }

    /// Reads a number.
    ///
    /// A number ends as soon as the next character can't continue it, without requiring
    /// a separator. An exponent marker must be followed by at least one digit.
    pub fn number(&mut self) -> Result<f64, MalformedPath> {
        let start = self.mark();

        if let Some(b'+') | Some(b'-') = self.current_byte() {
            self.advance_one();
        }

        let mut digits = self.advance_digits();

        if self.current_byte() == Some(b'.') {
            self.advance_one();
            digits += self.advance_digits();
        }

        if digits == 0 {
            return Err(self.number_error(start));
        }

        if let Some(b'e') | Some(b'E') = self.current_byte() {
            self.advance_one();
            if let Some(b'+') | Some(b'-') = self.current_byte() {
                self.advance_one();
            }
            if self.advance_digits() == 0 {
                return Err(self.number_error(start));
            }
        }

        let text = &self.src[start.offset..self.offset];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.error_at(
                start,
                Reason::Number {
                    src: text.to_string(),
                },
            )),
        }
    }

    // Reports the consumed text, or the offending character if nothing was consumed.
    fn number_error(&self, start: Mark) -> MalformedPath {
        let mut src = self.src[start.offset..self.offset].to_string();
        if src.is_empty() {
            if let Some(c) = self.current() {
                src.push(c);
            }
        }

        self.error_at(start, Reason::Number { src })
    }

    /// Reads an arc flag, which is always a single `0` or `1` character.
    pub fn flag(&mut self) -> Result<bool, MalformedPath> {
        match self.current_byte() {
            Some(b'0') => {
                self.advance_one();
                Ok(false)
            }
            Some(b'1') => {
                self.advance_one();
                Ok(true)
            }
            _ => Err(self.error(Reason::Flag {
                src: self.current().unwrap_or(' '),
            })),
        }
    }
}

impl<'l> Iterator for Scanner<'l> {
    type Item = Result<Token, MalformedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.skip_separators();
        if self.is_finished() {
            return None;
        }

        let token = if self.at_number() {
            self.number().map(Token::Number)
        } else {
            self.command().map(Token::Command)
        };

        self.failed = token.is_err();

        Some(token)
    }
}

#[cfg(test)]
fn tokens(src: &str) -> Result<Vec<Token>, MalformedPath> {
    Scanner::new(src).collect()
}

#[test]
fn simple_tokens() {
    use Token::*;

    assert_eq!(tokens(""), Ok(vec![]));
    assert_eq!(tokens(" ,\n\t"), Ok(vec![]));
    assert_eq!(
        tokens("M 0,0 L10 -2.5z"),
        Ok(vec![
            Command('M'),
            Number(0.0),
            Number(0.0),
            Command('L'),
            Number(10.0),
            Number(-2.5),
            Command('z'),
        ])
    );
}

#[test]
fn compressed_numbers() {
    use Token::*;

    // Equivalent to "M 1.5 0.5 0.5".
    assert_eq!(
        tokens("M1.5.5.5"),
        Ok(vec![Command('M'), Number(1.5), Number(0.5), Number(0.5)])
    );
    assert_eq!(
        tokens("1-2+3"),
        Ok(vec![Number(1.0), Number(-2.0), Number(3.0)])
    );
    assert_eq!(
        tokens("1e-2-1E3 .5e+1"),
        Ok(vec![Number(0.01), Number(-1000.0), Number(5.0)])
    );
    assert_eq!(tokens("1.e2"), Ok(vec![Number(100.0)]));
    assert_eq!(tokens("10L"), Ok(vec![Number(10.0), Command('L')]));
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match tokens(src) {
        Err(MalformedPath {
            reason: Reason::Number { .. },
            ..
        }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("0 --1"));
    assert!(bad_number("0 1ee2"));
    assert!(bad_number("0 1e--1"));
    assert!(bad_number("0 1e"));
    assert!(bad_number("0 1e+"));
    assert!(bad_number("."));
    assert!(bad_number("-"));
    assert!(bad_number("1e999"));
}

#[test]
fn bad_characters() {
    assert_eq!(
        tokens("M 0 0 x"),
        Err(MalformedPath {
            reason: Reason::Command { command: 'x' },
            offset: 6,
            line: 0,
            column: 6,
        })
    );
    assert_eq!(
        tokens("M 0\n 0 #"),
        Err(MalformedPath {
            reason: Reason::Character { src: '#' },
            offset: 7,
            line: 1,
            column: 3,
        })
    );
    assert_eq!(
        tokens("M 0 é").map_err(|e| e.reason),
        Err(Reason::Character { src: 'é' })
    );
}

#[test]
fn stops_after_error() {
    let mut scanner = Scanner::new("1 # 2");
    assert_eq!(scanner.next(), Some(Ok(Token::Number(1.0))));
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert_eq!(scanner.next(), None);
}

#[test]
fn flags() {
    let mut scanner = Scanner::new("10x");
    assert_eq!(scanner.flag(), Ok(true));
    assert_eq!(scanner.flag(), Ok(false));
    assert_eq!(
        scanner.flag().map_err(|e| e.reason),
        Err(Reason::Flag { src: 'x' })
    );
}
