pub mod encoder;
pub mod error;
pub mod parser;
pub mod symbols;
pub mod util;

use arch::inst::Inst;

use crate::error::Error;
use crate::parser::Parser;

/// Assemble Hack source text into binary words, one 16-character
/// `0`/`1` string per instruction.
pub fn assemble(source: &str) -> Result<Vec<String>, Error> {
    Ok(encoder::encode(&parse(source)?)?)
}

/// Parse Hack source text into a fully resolved instruction list.
pub fn parse(source: &str) -> Result<Vec<Inst>, Error> {
    let mut parser = Parser::new();
    parser.load_source(source);
    Ok(parser.parse()?)
}
