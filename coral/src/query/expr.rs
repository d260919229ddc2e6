//! Expression nodes and their canonical query-string serialization.

use std::sync::OnceLock;

use serde_json::Value;

use crate::event::Event;
use crate::set::Set;
use crate::{Error, Result};

/// Functions a composed set can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFunction {
    Union,
    Intersection,
    Difference,
    Merge,
    Join,
    Match,
    Each,
}

impl SetFunction {
    /// Wire name of the function.
    pub fn name(self) -> &'static str {
        match self {
            SetFunction::Union => "union",
            SetFunction::Intersection => "intersection",
            SetFunction::Difference => "difference",
            SetFunction::Merge => "merge",
            SetFunction::Join => "join",
            SetFunction::Match => "match",
            SetFunction::Each => "each",
        }
    }
}

impl std::fmt::Display for SetFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of a composed expression's ordered argument list.
///
/// A closed variant resolved by explicit match; there is no runtime
/// capability probing.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A nested set: resolves to its expression string, or to its ref for a
    /// plain set.
    Set(Set),
    /// A pre-resolved ref path, used verbatim.
    Ref(String),
    /// An opaque literal (match terms, primitives), rendered as raw text.
    Literal(Value),
}

impl Operand {
    /// An explicit literal operand, e.g. a match term.
    pub fn literal(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }

    /// Resolve this operand to the serialized form used inside an expression.
    ///
    /// Priority: a composed set's expression string, then a ref string, then
    /// the literal's raw text.
    pub fn resolve(&self) -> Result<String> {
        match self {
            Operand::Set(Set::Plain(r)) => Ok(r.clone()),
            Operand::Set(Set::Query(q)) | Operand::Set(Set::Each(q)) => {
                q.expr().map(str::to_owned)
            }
            Operand::Ref(r) => Ok(r.clone()),
            Operand::Literal(value) => literal_text(value),
        }
    }
}

/// Raw text of a literal operand.
///
/// Strings pass through unquoted and unescaped; delimiter characters in the
/// text are the caller's responsibility (wire compatibility). Null, arrays,
/// and objects have no textual operand form.
fn literal_text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::MalformedOperand(other.to_string())),
    }
}

impl From<Set> for Operand {
    fn from(set: Set) -> Self {
        Operand::Set(set)
    }
}

impl From<&Set> for Operand {
    fn from(set: &Set) -> Self {
        Operand::Set(set.clone())
    }
}

impl From<&str> for Operand {
    fn from(r: &str) -> Self {
        Operand::Ref(r.to_string())
    }
}

impl From<String> for Operand {
    fn from(r: String) -> Self {
        Operand::Ref(r)
    }
}

impl From<&Event> for Operand {
    fn from(event: &Event) -> Self {
        Operand::Ref(event.ref_str())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Literal(value)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Literal(Value::from(n))
    }
}

impl From<u64> for Operand {
    fn from(n: u64) -> Self {
        Operand::Literal(Value::from(n))
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Literal(Value::from(n))
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Literal(Value::from(b))
    }
}

/// A composed query: a function applied to an ordered operand list.
///
/// Immutable once constructed. The serialized operand strings and the full
/// expression string are computed on first use and cached in write-once
/// cells; racing first readers may each render the pure result, but only
/// one value is published and no transport call is involved.
#[derive(Debug, Clone)]
pub struct QuerySet {
    function: SetFunction,
    operands: Vec<Operand>,
    operand_strings: OnceLock<Vec<String>>,
    expr: OnceLock<String>,
}

impl QuerySet {
    pub(crate) fn new(function: SetFunction, operands: Vec<Operand>) -> Self {
        Self {
            function,
            operands,
            operand_strings: OnceLock::new(),
            expr: OnceLock::new(),
        }
    }

    /// The function this expression applies.
    pub fn function(&self) -> SetFunction {
        self.function
    }

    /// The ordered operands.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Serialized operand strings, resolved once and cached.
    pub(crate) fn operand_strings(&self) -> Result<&[String]> {
        if let Some(strings) = self.operand_strings.get() {
            return Ok(strings);
        }
        let resolved = self
            .operands
            .iter()
            .map(Operand::resolve)
            .collect::<Result<Vec<_>>>()?;
        Ok(self.operand_strings.get_or_init(|| resolved))
    }

    /// Canonical query-string form `fn(op1,op2,...)`, cached on first use.
    ///
    /// Zero operands serialize as `fn()`.
    pub fn expr(&self) -> Result<&str> {
        if let Some(expr) = self.expr.get() {
            return Ok(expr);
        }
        let rendered = format!("{}({})", self.function.name(), self.operand_strings()?.join(","));
        Ok(self.expr.get_or_init(|| rendered))
    }

    /// Event-history form of a generic expression: the whole expression
    /// wrapped once in `events(...)`.
    pub(crate) fn events_expr(&self) -> Result<String> {
        Ok(format!("events({})", self.expr()?))
    }

    /// Event-history form of an `each` expression.
    ///
    /// Only the mapped-over set has an event history, so the first operand
    /// alone is wrapped: `each(events(first),rest...)`, never
    /// `events(each(...))`. The comma after `events(first)` is part of the
    /// wire format even when no further operands follow.
    pub(crate) fn each_events_expr(&self) -> Result<String> {
        let strings = self.operand_strings()?;
        let (first, rest) = match strings.split_first() {
            Some((first, rest)) => (first.as_str(), rest),
            None => ("", &[] as &[String]),
        };
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
        Ok(format!("each(events({}),{})", first, rest.join(",")))
    }
}
