//! Numeric values produced by [`NumberManager`](crate::NumberManager).
//!
//! A rule file may write `3` or `3.5` in the same list, so a number keeps track
//! of whether it was written as an integer or as a floating-point value.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A numeric value that is either an integer or a finite float.
///
/// # Examples
///
/// ```rust
/// use lst_format::Number;
///
/// let integer: Number = "-3".parse().unwrap();
/// let float: Number = "4.1".parse().unwrap();
///
/// assert_eq!(integer, Number::Integer(-3));
/// assert_eq!(float, Number::Float(4.1));
/// assert!("three".parse::<Number>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Returned when a token is not a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNumberError {
    token: String,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a finite number", self.token)
    }
}

impl std::error::Error for ParseNumberError {}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Integer parse first, float parse second. Infinite and NaN results are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Integer(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(ParseNumberError {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Keep a ".0" so the text parses back as a float
            Number::Float(fl) if fl.fract() == 0.0 => write!(f, "{:.1}", fl),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Integer(i) => serializer.serialize_i64(*i),
            Number::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl<'de> Visitor<'de> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Number, E>
            where
                E: de::Error,
            {
                Ok(Number::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Number, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Number::Integer)
                    .map_err(|_| E::custom(format!("integer {} out of range", value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Number, E>
            where
                E: de::Error,
            {
                if value.is_finite() {
                    Ok(Number::Float(value))
                } else {
                    Err(E::custom("non-finite number"))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Number, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_before_float() {
        assert_eq!("1".parse::<Number>().unwrap(), Number::Integer(1));
        assert_eq!("+7".parse::<Number>().unwrap(), Number::Integer(7));
        assert_eq!("1.4".parse::<Number>().unwrap(), Number::Float(1.4));
        assert_eq!("1e3".parse::<Number>().unwrap(), Number::Float(1000.0));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for token in ["", "SomeString", " 4", "NaN", "inf", "1e400", "4,5"] {
            assert!(token.parse::<Number>().is_err(), "accepted {:?}", token);
        }
    }

    #[test]
    fn test_integer_overflow_reads_as_float() {
        assert_eq!(
            "9223372036854775807".parse::<Number>().unwrap(),
            Number::Integer(i64::MAX)
        );
        let beyond: Number = "9223372036854775808".parse().unwrap();
        assert_eq!(beyond, Number::Float(9_223_372_036_854_775_808.0));
        let text = beyond.to_string();
        assert!(text.ends_with(".0"), "{}", text);
        assert_eq!(text.parse::<Number>().unwrap(), beyond);
    }

    #[test]
    fn test_display_keeps_float_marker() {
        assert_eq!(Number::Integer(-3).to_string(), "-3");
        assert_eq!(Number::Float(4.1).to_string(), "4.1");
        assert_eq!(Number::Float(4.0).to_string(), "4.0");
        assert_eq!("4.0".parse::<Number>().unwrap(), Number::Float(4.0));
    }

    #[test]
    fn test_serde_json() {
        let values = vec![Number::Integer(-3), Number::Float(4.1)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, "[-3,4.1]");
        let back: Vec<Number> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
