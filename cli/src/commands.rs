use pathd::{MalformedPath, ParserOptions};
use std::io;
use thiserror::Error;

pub struct NormalizeCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ParserOptions,
}

pub struct ShowCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ParserOptions,
    pub count: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] MalformedPath),
}
