use std::fmt;
use std::str::FromStr;

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use serde::{Deserialize, Serialize};

/// Decimal amount sent by a client, as a string or a number literal.
///
/// Numbers are read from their shortest textual form, so `19.99` stays
/// `19.99` instead of becoming the exact expansion of the nearest `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DecimalRepr", into = "String")]
pub struct Decimal(BigDecimal);

impl Decimal {
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.0.to_string()
    }
}

impl FromStr for Decimal {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TryFrom<DecimalRepr> for Decimal {
    type Error = String;

    fn try_from(repr: DecimalRepr) -> Result<Self, Self::Error> {
        let text = match repr {
            DecimalRepr::Text(text) => text,
            DecimalRepr::Integer(n) => n.to_string(),
            DecimalRepr::Float(n) => n.to_string(),
        };
        Decimal::from_str(&text).map_err(|e| format!("invalid decimal `{}`: {}", text, e))
    }
}

#[Scalar(name = "Decimal")]
impl ScalarType for Decimal {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(text) => Ok(Decimal::from_str(text)?),
            Value::Number(number) => Ok(Decimal::from_str(&number.to_string())?),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}
