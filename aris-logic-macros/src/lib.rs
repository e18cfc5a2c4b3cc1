use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for well-formed formulas
enum Wff {
    Variable(Ident),
    Atom(syn::LitStr),
    Not(Box<Wff>),
    And(Box<Wff>, Box<Wff>),
    Or(Box<Wff>, Box<Wff>),
    Implies(Box<Wff>, Box<Wff>),
}

impl Wff {
    /// Generate code for this formula
    ///
    /// Sub-formulas are passed by reference to the builder methods, which clone what they keep.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Wff::Variable(ident) => {
                quote! {
                    ::core::clone::Clone::clone(&(#ident))
                }
            }
            Wff::Atom(lit) => {
                quote! {
                    Formula::atom(#lit)
                }
            }
            Wff::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    (&(#inner_tokens)).not()
                }
            }
            Wff::And(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).and(&(#right_tokens))
                }
            }
            Wff::Or(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).or(&(#right_tokens))
                }
            }
            Wff::Implies(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).implies(&(#right_tokens))
                }
            }
        }
    }
}

/// Parser for formulas with operator precedence
struct WffParser {
    wff: Wff,
}

impl Parse for WffParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let wff = parse_implies(input)?;
        Ok(WffParser { wff })
    }
}

/// Parse conditionals (lowest precedence, right-associative)
fn parse_implies(input: ParseStream) -> Result<Wff> {
    let left = parse_or(input)?;

    if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        let right = parse_implies(input)?;
        return Ok(Wff::Implies(Box::new(left), Box::new(right)));
    }

    Ok(left)
}

/// Parse disjunctions
fn parse_or(input: ParseStream) -> Result<Wff> {
    let mut left = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let right = parse_and(input)?;
        left = Wff::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse conjunctions
fn parse_and(input: ParseStream) -> Result<Wff> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let right = parse_unary(input)?;
        left = Wff::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse negations (highest precedence) and atoms
fn parse_unary(input: ParseStream) -> Result<Wff> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Wff::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Wff::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse atoms: string literals, `Formula` identifiers and parenthesized formulas
fn parse_atom(input: ParseStream) -> Result<Wff> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_implies(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        if !is_atom_name(&lit.value()) {
            return Err(syn::Error::new(
                lit.span(),
                "atomic propositions start with an uppercase letter followed by uppercase letters, digits, `_` or `'`",
            ));
        }
        Ok(Wff::Atom(lit))
    } else {
        let ident: Ident = input.parse()?;
        Ok(Wff::Variable(ident))
    }
}

fn is_atom_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '\''),
        _ => false,
    }
}

/// The `wff!` procedural macro for well-formed formulas
///
/// Builds a `Formula` with the usual connective precedence. `Formula` must be in scope.
///
/// # Supported Syntax
///
/// - `"P"` - String literal, an atomic proposition (`Formula::atom("P")`)
/// - `p` - Any `Formula` identifier in scope (cloned, never moved)
/// - `!p` or `~p` - Negation
/// - `p & q` - Conjunction
/// - `p | q` - Disjunction
/// - `p -> q` - Conditional
/// - `(p | q) & r` - Parentheses for grouping
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )`
/// 2. `!` / `~`
/// 3. `&`
/// 4. `|`
/// 5. `->` (right-associative: `a -> b -> c` is `a -> (b -> c)`)
///
/// # Examples
///
/// ```ignore
/// use aris_logic::{wff, Formula};
///
/// let modus_ponens = wff!("P" & ("P" -> "Q") -> "Q");
/// assert_eq!(modus_ponens.to_string(), "((P ∧ (P → Q)) → Q)");
///
/// let p = Formula::atom("P");
/// let excluded_middle = wff!(p | !p);
/// ```
#[proc_macro]
pub fn wff(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as WffParser);
    let tokens = parser.wff.to_tokens();
    TokenStream::from(tokens)
}
