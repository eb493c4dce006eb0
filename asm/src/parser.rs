use arch::inst::{Inst, Operand};

use crate::error::{ErrorKind, ParseError};
use crate::symbols::Symbols;

/// Characters that terminate any token: end of input is handled by the
/// cursor, the rest are whitespace and the comment marker.
fn is_ignored(c: u8) -> bool {
    matches!(c, b' ' | b'\n' | b'\t' | b'\r' | b'/')
}

fn is_symbol_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'$' | b':')
}

/// Single-pass scanner over the source text. Builds the symbol table
/// while collecting instructions, then resolves every symbol operand in
/// one finalization pass.
#[derive(Debug, Default)]
pub struct Parser {
    src: String,
    pos: usize,
    line: usize,
    line_start: usize,
    count: u16,
    symbols: Symbols,
    insts: Vec<Inst>,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    /// Store raw source text. May be called again to reuse the parser.
    pub fn load_source(&mut self, text: &str) {
        self.src = text.to_string();
    }

    /// Symbol table of the last completed parse.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Scan the loaded source into a fully resolved instruction list.
    ///
    /// All scan state is reset first, so calling this repeatedly on the
    /// same source yields identical results. Any grammar violation
    /// aborts the whole parse; no partial list is ever returned.
    pub fn parse(&mut self) -> Result<Vec<Inst>, ParseError> {
        self.reset();

        loop {
            self.skip_ignored();
            match self.peek() {
                None => break,
                Some(b'(') => self.label_def()?,
                Some(b'@') => self.a_instruction()?,
                Some(_) => self.c_instruction()?,
            }
        }

        self.symbols.finalize().map_err(|kind| self.error(kind))?;
        for inst in &mut self.insts {
            if let Inst::A(Operand::Symbol(name, value)) = inst {
                *value = self.symbols.get(name);
            }
        }

        Ok(self.insts.clone())
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.line_start = 0;
        self.count = 0;
        self.symbols = Symbols::new();
        self.insts.clear();
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
            self.line_start = self.pos + 1;
        }
        self.pos += 1;
    }

    fn col(&self) -> usize {
        self.pos - self.line_start
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.col(), kind)
    }

    fn error_at(&self, col: usize, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.line, col, &self.src)
    }

    /// Skip whitespace and comments. A `/` starts a comment that runs
    /// through the end of the line.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\t' | b'\r' | b'\n' => self.bump(),
                b'/' => {
                    while let Some(c) = self.peek() {
                        let newline = c == b'\n';
                        self.bump();
                        if newline {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    /// Maximal run of symbol characters, ended by the stop character if
    /// one is given, otherwise by any ignorable character.
    fn symbol(&mut self, stop: Option<u8>) -> Result<String, ParseError> {
        if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.error(ErrorKind::DigitSymbol));
        }

        let mut name = String::new();
        while let Some(c) = self.peek() {
            let ended = match stop {
                Some(stop) => c == stop,
                None => is_ignored(c),
            };
            if ended {
                break;
            }
            if !is_symbol_char(c) {
                return Err(self.error(ErrorKind::SymbolChar(c as char)));
            }
            name.push(c as char);
            self.bump();
        }

        if name.is_empty() {
            return Err(self.error(ErrorKind::ExpectedSymbol));
        }
        Ok(name)
    }

    /// Maximal run of digits; the terminating character is left
    /// unconsumed. The value must fit the 15-bit address range.
    fn constant(&mut self) -> Result<u16, ParseError> {
        let col = self.col();
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if is_ignored(c) {
                break;
            }
            if !c.is_ascii_digit() {
                return Err(self.error(ErrorKind::ConstantChar(c as char)));
            }
            digits.push(c as char);
            self.bump();
        }

        match digits.parse::<u32>() {
            Ok(value) if value <= 0x7FFF => Ok(value as u16),
            _ => Err(self.error_at(col, ErrorKind::ConstantRange(digits))),
        }
    }

    /// `(` SYMBOL `)` — binds the symbol to the current instruction
    /// index. Emits nothing and does not advance the counter.
    fn label_def(&mut self) -> Result<(), ParseError> {
        self.bump();
        let name = self.symbol(Some(b')'))?;
        if self.peek() != Some(b')') {
            return Err(self.error(ErrorKind::UnclosedLabel));
        }
        self.bump();
        self.symbols.define_label(&name, self.count);
        Ok(())
    }

    /// `@` followed by a decimal constant or a symbol.
    fn a_instruction(&mut self) -> Result<(), ParseError> {
        self.bump();
        let operand = if self.peek().is_some_and(|c| c.is_ascii_digit()) {
            Operand::Constant(self.constant()?)
        } else {
            let name = self.symbol(None)?;
            self.symbols.reference(&name);
            Operand::Symbol(name, None)
        };
        self.insts.push(Inst::A(operand));
        self.count += 1;
        Ok(())
    }

    /// `dest=comp;jump` with optional dest and jump. The raw token runs
    /// to the next ignorable character and is split on at most one `=`
    /// and at most one `;`; leftover separators land inside a slot and
    /// fail its mnemonic lookup.
    fn c_instruction(&mut self) -> Result<(), ParseError> {
        let col = self.col();
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if is_ignored(c) {
                break;
            }
            token.push(c as char);
            self.bump();
        }

        let (dest, rest) = match token.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, token.as_str()),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };

        if dest.is_none() && jump.is_none() {
            return Err(self.error_at(col, ErrorKind::MissingEffect(token.clone())));
        }

        let dest = match dest {
            Some(d) => Some(
                d.parse()
                    .map_err(|_| self.error_at(col, ErrorKind::InvalidDest(d.to_string())))?,
            ),
            None => None,
        };
        let comp = comp
            .parse()
            .map_err(|_| self.error_at(col, ErrorKind::InvalidComp(comp.to_string())))?;
        let jump = match jump {
            Some(j) => Some(
                j.parse()
                    .map_err(|_| self.error_at(col, ErrorKind::InvalidJump(j.to_string())))?,
            ),
            None => None,
        };

        self.insts.push(Inst::C { dest, comp, jump });
        self.count += 1;
        Ok(())
    }
}
