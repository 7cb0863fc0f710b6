// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Filter expressions for O2IMS list operations.
//!
//! A filter renders to the compact text form accepted by the `filter` query
//! parameter, e.g. `(eq,name,test-template);(nin,field3,'a(b)c',normal)`.

use std::fmt;
use std::str::FromStr;

/// Comparison operators understood by the O2IMS filter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Contains,
    Equals,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    LessThan,
    LessThanOrEqual,
    DoesNotContain,
    DoesNotEqual,
    NotIn,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::Contains,
        Operator::Equals,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::In,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::DoesNotContain,
        Operator::DoesNotEqual,
        Operator::NotIn,
    ];

    /// The tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Contains => "cont",
            Operator::Equals => "eq",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqual => "gte",
            Operator::In => "in",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqual => "lte",
            Operator::DoesNotContain => "ncont",
            Operator::DoesNotEqual => "neq",
            Operator::NotIn => "nin",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown filter operator '{}'", s))
    }
}

/// Anything that can be turned into the value list of a predicate.
///
/// Implemented for single strings as well as arrays and vectors, so both
/// `Filter::equals("name", "t1")` and `Filter::not_in("f", ["a", "b"])` work.
pub trait FilterValues {
    fn into_filter_values(self) -> Vec<String>;
}

impl FilterValues for &str {
    fn into_filter_values(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl FilterValues for String {
    fn into_filter_values(self) -> Vec<String> {
        vec![self]
    }
}

impl<S: Into<String>, const N: usize> FilterValues for [S; N] {
    fn into_filter_values(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>> FilterValues for Vec<S> {
    fn into_filter_values(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

/// A filter tree: either a single predicate or an ordered conjunction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Predicate {
        operator: Operator,
        field: String,
        values: Vec<String>,
    },
    And(Vec<Filter>),
}

impl Filter {
    pub fn predicate(
        operator: Operator,
        field: impl Into<String>,
        values: impl FilterValues,
    ) -> Self {
        Filter::Predicate {
            operator,
            field: field.into(),
            values: values.into_filter_values(),
        }
    }

    pub fn contains(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::Contains, field, values)
    }

    pub fn equals(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::Equals, field, values)
    }

    pub fn greater_than(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::GreaterThan, field, values)
    }

    pub fn greater_than_or_equal(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::GreaterThanOrEqual, field, values)
    }

    /// `in` is a keyword, hence the prefix
    pub fn is_in(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::In, field, values)
    }

    pub fn less_than(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::LessThan, field, values)
    }

    pub fn less_than_or_equal(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::LessThanOrEqual, field, values)
    }

    pub fn does_not_contain(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::DoesNotContain, field, values)
    }

    pub fn does_not_equal(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::DoesNotEqual, field, values)
    }

    pub fn not_in(field: impl Into<String>, values: impl FilterValues) -> Self {
        Self::predicate(Operator::NotIn, field, values)
    }

    /// Combine filters; all of them must match
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }
}

/// Values containing any of these are wrapped in single quotes
const QUOTE_TRIGGERS: [char; 4] = [',', '(', ')', ' '];

fn write_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if value.contains(QUOTE_TRIGGERS) {
        write!(f, "'{}'", value)
    } else {
        f.write_str(value)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Predicate {
                operator,
                field,
                values,
            } => {
                write!(f, "({},{}", operator, field)?;
                for value in values {
                    f.write_str(",")?;
                    write_value(f, value)?;
                }
                f.write_str(")")
            }
            Filter::And(filters) => {
                for (i, filter) in filters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{}", filter)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_predicate() {
        let filter = Filter::equals("name", "test-template");
        assert_eq!(filter.to_string(), "(eq,name,test-template)");
    }

    #[test]
    fn test_conjunction_with_quoting() {
        let filter = Filter::and([
            Filter::equals("field1", "value with spaces"),
            Filter::contains("field2", "value,with,commas"),
            Filter::not_in("field3", ["value(with)parentheses", "normal_value"]),
        ]);

        assert_eq!(
            filter.to_string(),
            concat!(
                "(eq,field1,'value with spaces');",
                "(cont,field2,'value,with,commas');",
                "(nin,field3,'value(with)parentheses',normal_value)"
            )
        );
    }

    #[test]
    fn test_operator_tags() {
        let tags: Vec<&str> = Operator::ALL.iter().map(Operator::as_str).collect();
        assert_eq!(
            tags,
            vec!["cont", "eq", "gt", "gte", "in", "lt", "lte", "ncont", "neq", "nin"]
        );
    }

    #[test]
    fn test_every_constructor_uses_its_operator() {
        let cases = [
            (Filter::contains("f", "v"), "(cont,f,v)"),
            (Filter::equals("f", "v"), "(eq,f,v)"),
            (Filter::greater_than("f", "1"), "(gt,f,1)"),
            (Filter::greater_than_or_equal("f", "1"), "(gte,f,1)"),
            (Filter::is_in("f", ["a", "b"]), "(in,f,a,b)"),
            (Filter::less_than("f", "1"), "(lt,f,1)"),
            (Filter::less_than_or_equal("f", "1"), "(lte,f,1)"),
            (Filter::does_not_contain("f", "v"), "(ncont,f,v)"),
            (Filter::does_not_equal("f", "v"), "(neq,f,v)"),
            (Filter::not_in("f", vec!["a".to_string()]), "(nin,f,a)"),
        ];

        for (filter, expected) in cases {
            assert_eq!(filter.to_string(), expected);
        }
    }

    #[test]
    fn test_operator_from_str() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
        assert!("like".parse::<Operator>().is_err());
    }

    #[test]
    fn test_quoting_only_when_needed() {
        for value in ["plain", "dash-ed", "under_score", "dot.ted", "quote'd"] {
            let rendered = Filter::equals("f", value).to_string();
            assert_eq!(rendered, format!("(eq,f,{})", value));
        }
        for value in ["a b", "a,b", "a(b", "a)b"] {
            let rendered = Filter::equals("f", value).to_string();
            assert_eq!(rendered, format!("(eq,f,'{}')", value));
        }
    }

    #[test]
    fn test_no_escaping_inside_quotes() {
        let filter = Filter::equals("f", "it's here");
        assert_eq!(filter.to_string(), "(eq,f,'it's here')");
    }

    #[test]
    fn test_nested_conjunction_flattens() {
        let a = Filter::equals("a", "1");
        let b = Filter::equals("b", "2");
        let c = Filter::equals("c", "3");

        let nested = Filter::and([a.clone(), Filter::and([b.clone(), c.clone()])]);
        let flat = Filter::and([a, b, c]);

        assert_eq!(nested.to_string(), flat.to_string());
        assert_eq!(nested.to_string(), "(eq,a,1);(eq,b,2);(eq,c,3)");
    }

    #[test]
    fn test_conjunction_has_no_trailing_separator() {
        assert_eq!(Filter::and([Filter::equals("a", "1")]).to_string(), "(eq,a,1)");
        assert_eq!(Filter::and(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let filter = Filter::and([
            Filter::is_in("zone", ["east", "west", "north south"]),
            Filter::greater_than("count", "3"),
        ]);
        let first = filter.to_string();
        for _ in 0..10 {
            assert_eq!(filter.clone().to_string(), first);
        }
    }
}
