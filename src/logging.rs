//! Log targets used throughout the library
//!
//! The library logs through the [log] facade and never installs a logger of its own.

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenization](crate::lexer)
    pub const LEXER: &str = "lexer";

    /// Logs related to [formula parsing](crate::formula::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to truth-table enumeration
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [statement dispatch](crate::interpreter)
    pub const INTERPRETER: &str = "interpreter";
}
