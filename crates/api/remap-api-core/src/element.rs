//! Flexible point elements as they appear on the wire.

use serde::{Deserialize, Serialize};

/// One slot of a wire point: a number, a string (flag or runtime token), or a
/// nested runtime expression such as `[0, 1, 0, "opAdd"]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointElement {
    Number(f64),
    Text(String),
    Nested(Vec<PointElement>),
}

/// A point in its flexible wire form: `[v0, .., vN, time, flag?, flag?, flag?]`.
pub type RawPoint = Vec<PointElement>;

impl PointElement {
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, PointElement::Number(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PointElement::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PointElement::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for nested expressions whose last term is an operator tag.
    pub fn is_runtime_expression(&self) -> bool {
        match self {
            PointElement::Nested(items) => match items.last() {
                Some(PointElement::Text(_)) => true,
                Some(last @ PointElement::Nested(_)) => last.is_runtime_expression(),
                _ => items.iter().any(PointElement::is_runtime_expression),
            },
            _ => false,
        }
    }
}

impl From<f64> for PointElement {
    fn from(n: f64) -> Self {
        PointElement::Number(n)
    }
}

impl From<&str> for PointElement {
    fn from(s: &str) -> Self {
        PointElement::Text(s.to_string())
    }
}

impl From<String> for PointElement {
    fn from(s: String) -> Self {
        PointElement::Text(s)
    }
}

/// Build a raw point from plain numbers.
pub fn raw_from_numbers(numbers: &[f64]) -> RawPoint {
    numbers.iter().copied().map(PointElement::Number).collect()
}
