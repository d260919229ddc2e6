//! Composable query expressions over remote sets.
//!
//! # Query-string grammar
//!
//! ```text
//! expr        := fn "(" operand ("," operand)* ")" | fn "()"
//! fn          := "union" | "intersection" | "difference" | "merge"
//!              | "join" | "match" | "each"
//! operand     := expr | ref-string | literal-text
//! events-wrap := "events(" expr ")"
//! each-events := "each(" "events(" firstOperand ")" "," restOperands ")"
//! ```
//!
//! Literal operands are emitted verbatim: delimiter characters (`(`, `)`,
//! `,`) inside a literal are not escaped, matching the remote service's
//! wire format. Callers supply already-safe literal text.

mod dsl;
mod expr;

pub use dsl::{difference, each, intersection, join, match_, merge, query, union};
pub use expr::{Operand, QuerySet, SetFunction};
