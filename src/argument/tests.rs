//! Tests for the argument module

use super::*;

fn atom(name: &str) -> Formula {
    Formula::atom(name)
}

fn argument(source: &str) -> Argument {
    Argument::parse(source).unwrap()
}

fn values(pairs: &[(&str, bool)]) -> Assignment {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

// ========== Validity ==========

#[test]
fn test_validity() {
    let cases = [
        ("¬P, ¬Q, ¬R ∴ S", false),
        ("(P ∧ ¬Q), (R ∧ ¬S) ∴ (Q ∨ S)", false),
        ("(P ∧ ¬Q) ∴ ¬(Q ∧ R)", true),
        ("(P ∨ Q) ∴ P", false),
        ("P, ¬(P ∧ ¬Q) ∴ Q", true),
        ("(P → Q), (Q → R) ∴ (P → R)", true),
        ("((P ∧ Q) ∨ R) ∴ ¬(¬P ∨ ¬R)", false),
        ("((P ∧ Q) ∧ R) ∴ (Q ∧ (R ∧ P))", true),
        ("¬(P ∧ ¬Q), ¬(Q ∧ R) ∴ ¬(R ∧ ¬P)", false),
        ("(¬P ∨ R), (P ∨ Q), ¬(Q ∧ ¬S) ∴ (R ∨ S)", true),
        (
            "((P → Q) → (R → ¬S)), (¬R → (Q ∧ P1)), (¬P → P1) ∴ (S → P1)",
            false,
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(argument(source).is_valid(), Ok(expected), "{}", source);
    }
}

#[test]
fn test_validity_built_from_formulas() {
    let p = atom("P");
    let q = atom("Q");
    let arg = Argument::with_parts(vec![p.clone(), !(&p & &!&q)], Some(q));
    assert_eq!(arg.is_valid(), Ok(true));
}

#[test]
fn test_counter_example() {
    let arg = argument("(P ∨ Q) ∴ P");
    let row = arg.counter_example().unwrap().unwrap();
    assert!(!row["P"]);
    assert!(row["Q"]);

    assert_eq!(argument("P ∴ P").counter_example(), Ok(None));
}

#[test]
fn test_validity_without_premises() {
    assert_eq!(argument("∴ (P ∨ ¬P)").is_valid(), Ok(true));
    assert_eq!(argument("∴ P").is_valid(), Ok(false));
}

#[test]
fn test_validity_needs_a_conclusion() {
    assert_eq!(
        argument("P, Q").is_valid(),
        Err(UsageError::MissingConclusion)
    );
}

// ========== Tautology ==========

#[test]
fn test_tautology() {
    let cases = [
        ("P", false),
        ("(P ∧ P)", false),
        ("(P ∧ ¬P)", false),
        ("(P ∨ P)", false),
        ("(P ∨ ¬P)", true),
        ("((P ∧ (Q ∨ R)) ∨ (¬P ∧ (¬Q ∧ ¬R)))", false),
        ("(¬(¬(P ∧ Q) ∧ ¬(P ∧ R)) ∨ ¬(P ∧ (Q ∨ R)))", true),
    ];

    for (source, expected) in cases {
        assert_eq!(argument(source).is_tautology(), Ok(expected), "{}", source);
    }
}

#[test]
fn test_tautology_needs_a_single_formula() {
    assert_eq!(
        argument("P, Q").is_tautology(),
        Err(UsageError::NotASingleFormula {
            premises: 2,
            has_conclusion: false,
        })
    );
    assert_eq!(
        argument("P ∴ Q").is_tautology(),
        Err(UsageError::NotASingleFormula {
            premises: 1,
            has_conclusion: true,
        })
    );
    assert!(Argument::new().is_tautology().is_err());
}

// ========== Valuation ==========

#[test]
fn test_valuate() {
    let arg = argument("(P ∧ Q) ∴ R");
    let all_true = values(&[("P", true), ("Q", true), ("R", true)]);
    assert_eq!(arg.valuate(&all_true), Ok(true));

    let false_conclusion = values(&[("P", true), ("Q", true), ("R", false)]);
    assert_eq!(arg.valuate(&false_conclusion), Ok(false));
}

#[test]
fn test_valuate_stops_at_first_false_premise() {
    let arg = argument("P, Q ∴ R");
    // Q is never reached once P is false
    assert_eq!(
        arg.valuate(&values(&[("P", false), ("R", true)])),
        Ok(false)
    );
}

#[test]
fn test_valuate_always_reaches_the_conclusion() {
    let arg = argument("P ∴ R");
    let err = arg.valuate(&values(&[("P", false)])).unwrap_err();
    assert_eq!(err.symbol.as_ref(), "R");
}

#[test]
fn test_valuate_without_conclusion() {
    let arg = argument("P, Q");
    assert_eq!(arg.valuate(&values(&[("P", true), ("Q", true)])), Ok(true));
    assert_eq!(arg.valuate(&values(&[("P", true), ("Q", false)])), Ok(false));
}

// ========== Parsing and display ==========

#[test]
fn test_parse_body() {
    let arg = argument("P, ¬(P ∧ ¬Q) ∴ Q");
    assert_eq!(arg.premises().len(), 2);
    assert_eq!(arg.premises()[1], !(atom("P") & !atom("Q")));
    assert_eq!(arg.conclusion(), Some(&atom("Q")));
}

#[test]
fn test_stray_closing_bracket_is_skipped() {
    let arg = argument("P) ∴ Q");
    assert_eq!(arg.premises(), &[atom("P")]);
    assert_eq!(arg.conclusion(), Some(&atom("Q")));
}

#[test]
fn test_separator_after_conclusion_is_rejected() {
    let err = Argument::parse("P ∴ Q, R").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError::UnexpectedSymbol {
            symbol: ",".to_string(),
            position: 3,
            line: "P ∴ Q, R".to_string(),
        })
    );
}

#[test]
fn test_therefore_without_formula_is_rejected() {
    assert!(matches!(
        Argument::parse("P ∴"),
        Err(SyntaxError::Parse(ParseError::MissingSymbol { .. }))
    ));
}

#[test]
fn test_display() {
    assert_eq!(
        argument("P, ¬(P ∧ ¬Q) ∴ Q").to_string(),
        "P, ¬(P ∧ ¬Q) ∴ Q"
    );
    assert_eq!(argument("(P ∨ ¬P)").to_string(), "(P ∨ ¬P)");
    assert_eq!(argument("∴ Q").to_string(), "∴ Q");
    assert_eq!(Argument::new().to_string(), "");
}

#[test]
fn test_collect_variables() {
    let names: Vec<String> = argument("(S ∨ P), ¬Q ∴ R")
        .collect_variables()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, vec!["P", "Q", "R", "S"]);
}
