//! DSL entry points for composing set expressions.

use crate::query::expr::{Operand, QuerySet, SetFunction};
use crate::set::Set;

fn compose<I>(function: SetFunction, operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let operands = operands.into_iter().map(Into::into).collect();
    match function {
        SetFunction::Each => Set::Each(QuerySet::new(function, operands)),
        _ => Set::Query(QuerySet::new(function, operands)),
    }
}

/// The union of the operand sets.
pub fn union<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Union, operands)
}

/// The intersection of the operand sets.
pub fn intersection<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Intersection, operands)
}

/// Members of the first operand set absent from the remaining ones.
pub fn difference<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Difference, operands)
}

/// The merge of the operand sets.
pub fn merge<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Merge, operands)
}

/// Join the operand sets.
pub fn join<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Join, operands)
}

/// Sets matching the given index terms.
///
/// Named with a trailing underscore because `match` is reserved in Rust.
pub fn match_<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Match, operands)
}

/// Map a function over the members of the first operand set.
///
/// `each` sets serialize their event history specially; see
/// [`Set::events`](crate::Set::events).
pub fn each<I>(operands: I) -> Set
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    compose(SetFunction::Each, operands)
}

/// Evaluate a query-definition block.
///
/// With the DSL glob-imported, this scopes a query definition without
/// further qualification; it carries no semantics beyond the call itself.
///
/// ```
/// use coral::query::*;
///
/// let hot_posts = query(|| intersection([
///     match_(["indexes/tag", "hot"]),
///     match_(["indexes/kind", "post"]),
/// ]));
/// ```
pub fn query<R>(define: impl FnOnce() -> R) -> R {
    define()
}
