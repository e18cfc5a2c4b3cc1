//! Truthness and falsehood conditions
//!
//! A [`Condition`] describes one family of assignments under which a formula takes a given
//! value. Conditions are never evaluated; they are walked to harvest the atomic propositions a
//! formula depends on.

use super::Formula;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// One alternative under which a formula holds a given value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// An atomic proposition, optionally forced to a value
    Atomic {
        /// Name of the atomic proposition
        name: Arc<str>,
        /// Value the proposition must take, if any
        value: Option<bool>,
    },
    /// Both sides of a binary connective, left first
    Binary(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// An atomic condition forcing `name` to `value`
    pub fn forced(name: &Arc<str>, value: bool) -> Self {
        Condition::Atomic {
            name: Arc::clone(name),
            value: Some(value),
        }
    }

    /// An atomic condition that places no requirement on the value of `name`
    pub fn free(name: &str) -> Self {
        Condition::Atomic {
            name: Arc::from(name),
            value: None,
        }
    }

    /// A binary condition over `left` and `right`
    pub fn binary(left: Condition, right: Condition) -> Self {
        Condition::Binary(Box::new(left), Box::new(right))
    }

    /// Names of the atomic conditions at the leaves, left to right
    pub fn atoms(&self) -> Vec<Arc<str>> {
        let mut names = Vec::new();
        self.push_atoms(&mut names);
        names
    }

    fn push_atoms(&self, names: &mut Vec<Arc<str>>) {
        match self {
            Condition::Atomic { name, .. } => names.push(Arc::clone(name)),
            Condition::Binary(left, right) => {
                left.push_atoms(names);
                right.push_atoms(names);
            }
        }
    }

    pub(super) fn collect_atoms(&self, names: &mut BTreeSet<Arc<str>>) {
        match self {
            Condition::Atomic { name, .. } => {
                names.insert(Arc::clone(name));
            }
            Condition::Binary(left, right) => {
                left.collect_atoms(names);
                right.collect_atoms(names);
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Atomic {
                name,
                value: Some(value),
            } => write!(f, "{}={}", name, value),
            Condition::Atomic { name, value: None } => write!(f, "{}", name),
            Condition::Binary(left, right) => write!(f, "({}, {})", left, right),
        }
    }
}

impl Formula {
    /// The alternatives under which this formula is true
    ///
    /// # Examples
    ///
    /// ```
    /// use aris_logic::Formula;
    ///
    /// let p = Formula::atom("P");
    /// let q = Formula::atom("Q");
    /// let rendered: Vec<String> = p
    ///     .or(&q)
    ///     .truthness_conditions()
    ///     .iter()
    ///     .map(|c| c.to_string())
    ///     .collect();
    /// assert_eq!(rendered, ["(P=true, Q=false)", "(P=false, Q=true)", "(P=true, Q=true)"]);
    /// ```
    pub fn truthness_conditions(&self) -> Vec<Condition> {
        self.conditions(true)
    }

    /// The alternatives under which this formula is false
    pub fn falsehood_conditions(&self) -> Vec<Condition> {
        self.conditions(false)
    }

    fn conditions(&self, value: bool) -> Vec<Condition> {
        match self {
            Formula::Atom(name) => vec![Condition::forced(name, value)],
            Formula::Negation(inner) => inner.conditions(!value),
            Formula::Conjunction(left, right) => {
                let sides = Sides::of(left, right);
                if value {
                    vec![sides.pair(true, true)]
                } else {
                    vec![
                        sides.pair(false, false),
                        sides.pair(false, true),
                        sides.pair(true, false),
                    ]
                }
            }
            Formula::Disjunction(left, right) => {
                let sides = Sides::of(left, right);
                if value {
                    vec![
                        sides.pair(true, false),
                        sides.pair(false, true),
                        sides.pair(true, true),
                    ]
                } else {
                    vec![sides.pair(false, false)]
                }
            }
            Formula::Conditional(left, right) => {
                let sides = Sides::of(left, right);
                if value {
                    vec![
                        sides.pair(false, false),
                        sides.pair(false, true),
                        sides.pair(true, true),
                    ]
                } else {
                    vec![sides.pair(true, false)]
                }
            }
        }
    }

    /// The first alternative of `conditions(value)`
    ///
    /// Binary conditions only ever combine the leading alternative of each side, so this is all
    /// a parent needs from its children.
    fn leading_condition(&self, value: bool) -> Condition {
        match self {
            Formula::Atom(name) => Condition::forced(name, value),
            Formula::Negation(inner) => inner.leading_condition(!value),
            Formula::Conjunction(left, right) => {
                // true: (T, T); false: (F, F)
                Sides::of(left, right).pair(value, value)
            }
            Formula::Disjunction(left, right) => {
                // true: (T, F); false: (F, F)
                Sides::of(left, right).pair(value, false)
            }
            Formula::Conditional(left, right) => {
                // true: (F, F); false: (T, F)
                Sides::of(left, right).pair(!value, false)
            }
        }
    }
}

/// The two children of a binary connective
struct Sides<'a> {
    left: &'a Formula,
    right: &'a Formula,
}

impl<'a> Sides<'a> {
    fn of(left: &'a Arc<Formula>, right: &'a Arc<Formula>) -> Self {
        Sides {
            left: left.as_ref(),
            right: right.as_ref(),
        }
    }

    fn pair(&self, left: bool, right: bool) -> Condition {
        Condition::binary(
            self.left.leading_condition(left),
            self.right.leading_condition(right),
        )
    }
}
