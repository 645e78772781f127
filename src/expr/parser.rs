//! Expression parsing
//!
//! All three CLI flags share one textual form, `field<op>value`, split by
//! a single low-level tokenizer. On top of it sit three typed specs with
//! their own validation:
//! - `FilterExpr`: the right-hand side is a comparison value
//! - `SortSpec`: the right-hand side is a sort direction
//! - `AggregateSpec`: the right-hand side is an aggregator kind
//!
//! For sort and aggregate expressions the operator token only separates
//! field from mode; it carries no meaning.

use super::errors::{ExprError, ExprResult};
use super::scalar::Scalar;

/// Operator candidates in match order. Compound tokens come before their
/// single-character substrings so `!=` never splits as `!` + `=` and
/// `>=`/`<=` are never misread as `>`/`<`.
const OPERATORS: [&str; 6] = ["!=", ">=", "<=", "=", ">", "<"];

/// Splits `field<op>value` text into its three parts.
///
/// Candidates are tried in `OPERATORS` order; the first candidate present
/// anywhere in the text wins and the split happens at its first
/// occurrence. Both sides are trimmed.
pub fn split_expression(text: &str) -> ExprResult<(&str, &str, &str)> {
    for op in OPERATORS {
        if let Some(idx) = text.find(op) {
            let field = text[..idx].trim();
            let value = text[idx + op.len()..].trim();
            return Ok((field, op, value));
        }
    }
    Err(ExprError::NoOperator(text.to_string()))
}

/// Comparison operation for filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CompareOp {
    /// Maps an operator token to its variant
    pub fn from_token(token: &str) -> ExprResult<Self> {
        match token {
            "=" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            ">" => Ok(CompareOp::Gt),
            "<" => Ok(CompareOp::Lt),
            ">=" => Ok(CompareOp::Ge),
            "<=" => Ok(CompareOp::Le),
            other => Err(ExprError::UnsupportedOperator(other.to_string())),
        }
    }

    /// Returns the operator token
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }
}

/// A parsed filter predicate: field, operator, coerced value
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    /// Field name
    pub field: String,
    /// Comparison operation
    pub op: CompareOp,
    /// Expected value, coerced from the right-hand text
    pub value: Scalar,
}

impl FilterExpr {
    /// Parses a filter expression such as `price>500` or `brand=apple`
    pub fn parse(text: &str) -> ExprResult<Self> {
        let (field, op, raw) = split_expression(text)?;
        Ok(Self {
            field: field.to_string(),
            op: CompareOp::from_token(op)?,
            value: Scalar::coerce(raw),
        })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A parsed sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parses a sort expression such as `price=asc` or `rating=desc`
    pub fn parse(text: &str) -> ExprResult<Self> {
        let (field, _, raw) = split_expression(text)?;
        let direction = match raw {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(ExprError::InvalidSortDirection(other.to_string())),
        };
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Aggregation statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    Min,
    Max,
    Avg,
    Median,
}

impl AggregateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Min => "min",
            AggregateKind::Max => "max",
            AggregateKind::Avg => "avg",
            AggregateKind::Median => "median",
        }
    }
}

/// A parsed aggregate specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    /// Field to aggregate
    pub field: String,
    /// Statistic to compute
    pub kind: AggregateKind,
}

impl AggregateSpec {
    /// Parses an aggregate expression such as `price=avg`
    pub fn parse(text: &str) -> ExprResult<Self> {
        let (field, _, raw) = split_expression(text)?;
        let kind = match raw {
            "min" => AggregateKind::Min,
            "max" => AggregateKind::Max,
            "avg" => AggregateKind::Avg,
            "median" => AggregateKind::Median,
            other => return Err(ExprError::UnknownAggregator(other.to_string())),
        };
        Ok(Self {
            field: field.to_string(),
            kind,
        })
    }
}
