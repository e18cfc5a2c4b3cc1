//! Lexical units of the language and the adjacency rules between them
//!
//! Every [`Token`] has a [`TokenKind`], and every kind owns a fixed set of kinds that may
//! immediately follow it on a line. The lexer checks each consecutive pair of tokens against
//! that table before a line ever reaches the interpreter, so the parser can rely on the
//! local shape of a line.
//!
//! # Examples
//!
//! ```
//! use aris_logic::token::{Token, TokenKind};
//!
//! let atom = Token::atom("P");
//! assert_eq!(atom.kind(), TokenKind::Atom);
//! assert!(atom.can_follow(&Token::Assign));
//! assert!(!atom.can_follow(&Token::atom("Q")));
//! ```

use std::fmt;
use std::sync::Arc;

/// A single lexical unit
///
/// Names, identifiers and string literals carry their text; every other kind is a bare symbol.
/// Equality compares the kind together with the payload, so two atoms with the same name are
/// equal wherever they were read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An atomic proposition, an uppercase-led name such as `P` or `Q1'`
    Atom(Arc<str>),
    /// A lowercase-led name of an argument, such as `arg1`
    Identifier(Arc<str>),
    /// A string literal, without its quotes
    Str(Arc<str>),
    /// The `true` literal
    True,
    /// The `false` literal
    False,
    /// `∧` or `&`
    And,
    /// `∨` or `|`
    Or,
    /// `¬`, `~` or `!`
    Not,
    /// `→`, `⊃` or `->`
    Implies,
    /// `(`
    LBracket,
    /// `)`
    RBracket,
    /// `,`
    Comma,
    /// `:=`
    Assign,
    /// `argument`
    Argument,
    /// `assert`
    Assert,
    /// `print`
    Print,
    /// `therefore` or `∴`
    Therefore,
    /// `validate`
    Validate,
    /// `valuate`
    Valuate,
}

/// The kind of a [`Token`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Atom,
    Identifier,
    Str,
    True,
    False,
    And,
    Or,
    Not,
    Implies,
    LBracket,
    RBracket,
    Comma,
    Assign,
    Argument,
    Assert,
    Print,
    Therefore,
    Validate,
    Valuate,
}

/// Kinds that may open a formula
const FORMULA_START: &[TokenKind] = &[TokenKind::Atom, TokenKind::LBracket, TokenKind::Not];

/// Single characters that map directly onto a token
pub static SINGLE_CHARACTER_TOKENS: [(char, Token); 13] = [
    ('(', Token::LBracket),
    (')', Token::RBracket),
    ('∧', Token::And),
    ('&', Token::And),
    (',', Token::Comma),
    ('→', Token::Implies),
    ('⊃', Token::Implies),
    ('¬', Token::Not),
    ('~', Token::Not),
    ('!', Token::Not),
    ('∨', Token::Or),
    ('|', Token::Or),
    ('∴', Token::Therefore),
];

/// Two-character sequences that map onto a token, keyed by their first character
pub static TWO_CHARACTER_TOKENS: [(char, char, Token); 2] =
    [(':', '=', Token::Assign), ('-', '>', Token::Implies)];

/// Keywords in matching order
pub static KEYWORDS: [(&str, Token); 8] = [
    ("argument", Token::Argument),
    ("assert", Token::Assert),
    ("false", Token::False),
    ("print", Token::Print),
    ("therefore", Token::Therefore),
    ("true", Token::True),
    ("validate", Token::Validate),
    ("valuate", Token::Valuate),
];

/// Keywords that may occur at most once on a line
pub const UNIQUE_KEYWORDS: [&str; 4] = ["argument", "print", "therefore", "valuate"];

impl Token {
    /// Create an atomic proposition token
    pub fn atom(name: &str) -> Self {
        Token::Atom(Arc::from(name))
    }

    /// Create an identifier token
    pub fn identifier(name: &str) -> Self {
        Token::Identifier(Arc::from(name))
    }

    /// Create a string literal token
    pub fn string(text: &str) -> Self {
        Token::Str(Arc::from(text))
    }

    /// The kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Atom(_) => TokenKind::Atom,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Str(_) => TokenKind::Str,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Not => TokenKind::Not,
            Token::Implies => TokenKind::Implies,
            Token::LBracket => TokenKind::LBracket,
            Token::RBracket => TokenKind::RBracket,
            Token::Comma => TokenKind::Comma,
            Token::Assign => TokenKind::Assign,
            Token::Argument => TokenKind::Argument,
            Token::Assert => TokenKind::Assert,
            Token::Print => TokenKind::Print,
            Token::Therefore => TokenKind::Therefore,
            Token::Validate => TokenKind::Validate,
            Token::Valuate => TokenKind::Valuate,
        }
    }

    /// Returns `true` if `next` may immediately follow this token on a line
    pub fn can_follow(&self, next: &Token) -> bool {
        self.kind().can_follow(next.kind())
    }

    /// The text carried by names, identifiers and string literals
    pub fn payload(&self) -> Option<&Arc<str>> {
        match self {
            Token::Atom(text) | Token::Identifier(text) | Token::Str(text) => Some(text),
            _ => None,
        }
    }
}

impl TokenKind {
    /// The kinds allowed to immediately follow this kind
    pub fn successors(self) -> &'static [TokenKind] {
        use TokenKind::*;
        match self {
            And | Or | Not | Implies | Comma | LBracket | Therefore => FORMULA_START,
            Assign => &[Atom, False, LBracket, Not, True],
            Atom => &[And, Assign, Comma, Implies, LBracket, Or, RBracket, Therefore],
            Identifier => &[Assign],
            RBracket => &[And, Implies, Comma, Or, RBracket, Therefore],
            Print => &[Str],
            Argument | Assert | Validate | Valuate => &[Identifier],
            True | False | Str => &[],
        }
    }

    /// Returns `true` if `next` is in this kind's successor set
    pub fn can_follow(self, next: TokenKind) -> bool {
        self.successors().contains(&next)
    }

    /// Returns `true` if a line may start with this kind
    ///
    /// An atom may only lead an assignment; that part of the rule depends on the next token
    /// and is checked by the lexer.
    pub fn can_lead_line(self) -> bool {
        matches!(
            self,
            TokenKind::Atom
                | TokenKind::Argument
                | TokenKind::Assert
                | TokenKind::Print
                | TokenKind::Validate
                | TokenKind::Valuate
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Atom(text) | Token::Identifier(text) | Token::Str(text) => f.write_str(text),
            Token::True => f.write_str("true"),
            Token::False => f.write_str("false"),
            Token::And => f.write_str("∧"),
            Token::Or => f.write_str("∨"),
            Token::Not => f.write_str("¬"),
            Token::Implies => f.write_str("→"),
            Token::LBracket => f.write_str("("),
            Token::RBracket => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Assign => f.write_str(":="),
            Token::Argument => f.write_str("argument"),
            Token::Assert => f.write_str("assert"),
            Token::Print => f.write_str("print"),
            Token::Therefore => f.write_str("∴"),
            Token::Validate => f.write_str("validate"),
            Token::Valuate => f.write_str("valuate"),
        }
    }
}

/// Look up the token for a single character
pub fn single_character_token(c: char) -> Option<&'static Token> {
    SINGLE_CHARACTER_TOKENS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, token)| token)
}

/// Returns `true` if `c` starts one of the two-character tokens
pub fn starts_two_character_token(c: char) -> bool {
    TWO_CHARACTER_TOKENS.iter().any(|(first, _, _)| *first == c)
}

/// Look up the token for a two-character sequence
pub fn two_character_token(first: char, second: char) -> Option<&'static Token> {
    TWO_CHARACTER_TOKENS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, token)| token)
}
