//! Tests for building, parsing and evaluating formulas through the public API

use aris_logic::argument::TruthTable;
use aris_logic::{wff, Argument, Assignment, Formula};
use std::sync::Arc;

/// Every row of the truth table over the formula's own variables
fn rows_of(formula: &Formula) -> Vec<Assignment> {
    TruthTable::new(formula.collect_variables().into_iter().collect()).collect()
}

fn assignment(values: &[(&str, bool)]) -> Assignment {
    values
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

// The wff! macro

#[test]
fn test_macro_matches_builders() {
    let p = Formula::atom("P");
    let q = Formula::atom("Q");
    let r = Formula::atom("R");

    assert_eq!(wff!("P"), p);
    assert_eq!(wff!(!p), p.not());
    assert_eq!(wff!(~p), p.not());
    assert_eq!(wff!(p & q), p.and(&q));
    assert_eq!(wff!(p | q), p.or(&q));
    assert_eq!(wff!(p -> q), p.implies(&q));
    assert_eq!(wff!(p & q | r), p.and(&q).or(&r));
    assert_eq!(wff!(p & (q | r)), p.and(&q.or(&r)));

    // identifiers are cloned, so they stay usable
    assert_eq!(p.to_string(), "P");
}

#[test]
fn test_macro_precedence() {
    let formula = wff!("P" & ("P" -> "Q") -> "Q");
    assert_eq!(formula.to_string(), "((P ∧ (P → Q)) → Q)");

    let chained = wff!("P" -> "Q" -> "R");
    assert_eq!(chained.to_string(), "(P → (Q → R))");

    let negated = wff!(!"P" | "Q" & !!"R");
    assert_eq!(negated.to_string(), "(¬P ∨ (Q ∧ ¬¬R))");
}

#[test]
fn test_macro_agrees_with_parser() {
    let parsed: Formula = "((P ∧ ¬Q) → (R ∨ P))".parse().unwrap();
    assert_eq!(parsed, wff!("P" & !"Q" -> "R" | "P"));
}

#[test]
fn test_operators_agree_with_builders() {
    let p = Formula::atom("P");
    let q = Formula::atom("Q");

    assert_eq!(&p & &q, p.and(&q));
    assert_eq!(&p | &q, p.or(&q));
    assert_eq!(!&p, p.not());
    assert_eq!(p.clone() & !q.clone(), wff!(p & !q));
}

// Valuation

#[test]
fn test_valuation_matches_boolean_semantics() {
    let formula = wff!(("P" -> "Q") & ("Q" | !"R"));
    let rows = rows_of(&formula);
    assert_eq!(rows.len(), 8);

    for row in &rows {
        let (p, q, r) = (row["P"], row["Q"], row["R"]);
        let expected = (!p || q) && (q || !r);
        assert_eq!(formula.valuate(row).unwrap(), expected, "row {:?}", row);
    }
}

#[test]
fn test_de_morgan() {
    let left = wff!(!("P" & "Q"));
    let right = wff!(!"P" | !"Q");
    for row in rows_of(&left) {
        assert_eq!(left.valuate(&row).unwrap(), right.valuate(&row).unwrap());
    }
}

#[test]
fn test_missing_symbol() {
    let formula = wff!("P" & "Q");
    let err = formula
        .valuate(&assignment(&[("P", true)]))
        .unwrap_err();
    assert_eq!(err.symbol.as_ref(), "Q");

    // the right side of a false conjunction is never reached
    assert!(!formula.valuate(&assignment(&[("P", false)])).unwrap());
}

// Variables and conditions

#[test]
fn test_collect_variables() {
    let formula = wff!(("Q" -> "P1") & !("R'" | "Q"));
    let names: Vec<String> = formula
        .collect_variables()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, ["P1", "Q", "R'"]);
}

#[test]
fn test_conditions_describe_the_formula() {
    let formula = wff!("P" -> "Q");
    assert_eq!(formula.truthness_conditions().len(), 3);
    assert_eq!(formula.falsehood_conditions().len(), 1);
    assert_eq!(
        formula.falsehood_conditions()[0].to_string(),
        "(P=true, Q=false)"
    );
}

// Arguments built in code

#[test]
fn test_argument_from_macro_formulas() {
    let mut argument = Argument::new();
    argument.add_premise(wff!("P" | "Q"));
    argument.add_premise(wff!(!"P"));
    argument.set_conclusion(wff!("Q"));

    assert_eq!(argument.to_string(), "(P ∨ Q), ¬P ∴ Q");
    assert!(argument.is_valid().unwrap());
    assert_eq!(argument.counter_example().unwrap(), None);
}

#[test]
fn test_counter_example_refutes_the_argument() {
    let argument = Argument::with_parts(vec![wff!("P" -> "Q"), wff!("Q")], Some(wff!("P")));
    let row = argument.counter_example().unwrap().unwrap();

    assert!(argument.premises().iter().all(|p| p.valuate(&row).unwrap()));
    assert!(!argument.conclusion().unwrap().valuate(&row).unwrap());
    assert!(!argument.is_valid().unwrap());
}

#[test]
fn test_tautologies() {
    let tautologies = [
        wff!("P" | !"P"),
        wff!("P" -> "P"),
        wff!(("P" -> "Q") | ("Q" -> "P")),
        wff!(("P" & ("P" -> "Q")) -> "Q"),
    ];
    for formula in tautologies {
        let argument = Argument::with_parts(vec![formula.clone()], None);
        assert!(argument.is_tautology().unwrap(), "{} is a tautology", formula);
    }

    let contingent = Argument::with_parts(vec![wff!("P" -> "Q")], None);
    assert!(!contingent.is_tautology().unwrap());
}
