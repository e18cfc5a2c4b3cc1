//! Recursive-descent formula parser
//!
//! The grammar has one token of lookahead:
//!
//! ```text
//! formula := ATOM | NOT formula | LBRACKET formula OP formula RBRACKET
//! OP      := AND | OR | IMPLIES
//! ```
//!
//! A [`TokenCursor`] walks an immutable token slice; nothing is drained or copied.

use super::{Formula, ParseError, SyntaxError};
use crate::lexer::{self, TokenLine};
use crate::logging::targets;
use crate::token::Token;
use std::str::FromStr;

/// A read position in the tokens of one line
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    source: &'a str,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// A cursor at the start of `tokens`, reporting errors against `source`
    pub fn new(tokens: &'a [Token], source: &'a str) -> Self {
        TokenCursor {
            tokens,
            source,
            index: 0,
        }
    }

    /// A cursor at the start of a tokenized line
    pub fn from_line(line: &'a TokenLine) -> Self {
        TokenCursor::new(&line.tokens, &line.source)
    }

    /// Index of the next token
    pub fn position(&self) -> usize {
        self.index
    }

    /// The next token, without consuming it
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// Returns `true` once every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Consume the next token
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingSymbol`] if the line has no tokens left.
    pub fn advance(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.peek().ok_or_else(|| self.missing_symbol())?;
        self.index += 1;
        Ok(token)
    }

    /// Consume the next token if it equals `expected`
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// An error naming `token`, found at `position`
    pub fn unexpected(&self, token: &Token, position: usize) -> ParseError {
        ParseError::UnexpectedSymbol {
            symbol: token.to_string(),
            position,
            line: self.source.to_string(),
        }
    }

    fn missing_symbol(&self) -> ParseError {
        ParseError::MissingSymbol {
            position: self.index,
            line: self.source.to_string(),
        }
    }
}

/// Parse the formula starting at the cursor
///
/// Returns `Ok(None)` without consuming anything when the next token is `,`, `)` or `∴`: those
/// mark the boundaries of a premise list.
///
/// # Errors
///
/// [`ParseError::MissingSymbol`] at the end of the line, [`ParseError::UnexpectedSymbol`] for a
/// token that cannot start a formula or a binary formula missing its closing bracket.
pub fn parse_formula(cursor: &mut TokenCursor<'_>) -> Result<Option<Formula>, ParseError> {
    if let Some(Token::Comma | Token::RBracket | Token::Therefore) = cursor.peek() {
        return Ok(None);
    }

    let position = cursor.position();
    match cursor.advance()? {
        Token::Atom(name) => Ok(Some(Formula::Atom(name.clone()))),
        Token::Not => Ok(Some(Formula::negation(require_formula(cursor)?))),
        Token::LBracket => parse_binary(cursor).map(Some),
        other => Err(cursor.unexpected(other, position)),
    }
}

/// Parse a formula that must be present at the cursor
pub fn require_formula(cursor: &mut TokenCursor<'_>) -> Result<Formula, ParseError> {
    match parse_formula(cursor)? {
        Some(formula) => Ok(formula),
        None => {
            let position = cursor.position();
            let token = cursor.advance()?;
            Err(cursor.unexpected(token, position))
        }
    }
}

/// Parse the inside of a bracketed binary formula, the opening bracket already consumed
///
/// Any operator other than `∧` and `∨` reads as `→`; adjacency checking in the lexer only lets
/// binary operators through at that spot.
fn parse_binary(cursor: &mut TokenCursor<'_>) -> Result<Formula, ParseError> {
    let left = require_formula(cursor)?;
    let operator = cursor.advance()?;
    let right = require_formula(cursor)?;

    let position = cursor.position();
    let closing = cursor.advance()?;
    if *closing != Token::RBracket {
        return Err(cursor.unexpected(closing, position));
    }

    Ok(match operator {
        Token::And => Formula::conjunction(left, right),
        Token::Or => Formula::disjunction(left, right),
        _ => Formula::conditional(left, right),
    })
}

impl Formula {
    /// Parse a single formula written in the surface syntax
    ///
    /// Token adjacency is checked as for a program line; the rules about how a line may start
    /// do not apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use aris_logic::Formula;
    ///
    /// # fn main() -> Result<(), aris_logic::formula::SyntaxError> {
    /// let formula = Formula::parse("((P & ~Q) -> R)")?;
    /// assert_eq!(formula.to_string(), "((P ∧ ¬Q) → R)");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Unbracketed binary formulas are not part of the grammar:
    ///
    /// ```
    /// use aris_logic::Formula;
    ///
    /// assert!(Formula::parse("P & Q").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let tokens = lexer::scan_line(input)?;
        lexer::check_adjacency(input, &tokens)?;

        let mut cursor = TokenCursor::new(&tokens, input);
        let formula = require_formula(&mut cursor)?;
        if let Some(extra) = cursor.peek() {
            return Err(cursor.unexpected(extra, cursor.position()).into());
        }
        log::trace!(target: targets::PARSER, "Parsed formula {}", formula);
        Ok(formula)
    }
}

impl FromStr for Formula {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}
