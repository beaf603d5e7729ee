use thiserror::Error;

/// The reason why some path data could not be parsed.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Reason {
    #[error("Expected number, got {src:?}.")]
    Number { src: String },
    #[error("Expected flag (0/1), got {src:?}.")]
    Flag { src: char },
    #[error("Unexpected character {src:?}.")]
    Character { src: char },
    #[error("Invalid command {command:?}.")]
    Command { command: char },
    #[error("Expected move-to command, got {command:?}.")]
    MissingMoveTo { command: char },
    #[error("Command {command:?} expects {expected} arguments, got {got}.")]
    MissingArguments { command: char, expected: u8, got: u8 },
    #[error("Expected command, got a number.")]
    UnexpectedNumber,
    #[error("Command {command:?} leads to a coordinate out of range.")]
    OutOfRange { command: char },
}

/// Error produced when parsing malformed path data.
///
/// Parsing stops at the first error, no partial path is produced. Positions refer to
/// the beginning of the offending token (or to where a missing argument was expected).
/// Lines and columns start at zero.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("Line {line} Column {column}: {reason}")]
pub struct MalformedPath {
    pub reason: Reason,
    /// Byte offset in the source string.
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

#[test]
fn error_message() {
    let err = MalformedPath {
        reason: Reason::MissingArguments {
            command: 'L',
            expected: 2,
            got: 1,
        },
        offset: 7,
        line: 0,
        column: 7,
    };

    assert_eq!(
        err.to_string(),
        "Line 0 Column 7: Command 'L' expects 2 arguments, got 1."
    );
}
