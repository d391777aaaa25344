use crate::shared::error::ReportError;
use crate::shared::Result;
use serde_json::Value;
use std::iter::Peekable;
use std::str::Chars;

/// One step of a query path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member, from `.key` or `['key']`
    Key(String),
    /// Array element, from `[n]`
    Index(usize),
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// QueryPath - a parsed path expression selecting one node of a JSON document
///
/// Supported syntax is a small subset of JSONPath: the root `$` followed by
/// any number of `.key`, `['key']`, `["key"]` or `[n]` steps. Wildcards,
/// filters and recursive descent are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    expression: String,
    segments: Vec<Segment>,
}

impl QueryPath {
    /// Parses a query path expression such as `$.current.dependencies`
    ///
    /// # Errors
    /// Returns `ReportError::InvalidQueryPath` for expressions that do not
    /// start with `$`, contain empty keys, or have malformed brackets
    pub fn parse(expression: &str) -> Result<Self> {
        let expression = expression.trim();
        let invalid = |reason: String| ReportError::InvalidQueryPath {
            path: expression.to_string(),
            reason,
        };

        let mut chars = expression.chars().peekable();
        if chars.next() != Some('$') {
            return Err(invalid("query paths must start with '$'".to_string()).into());
        }

        let mut segments = Vec::new();
        while let Some(c) = chars.next() {
            let segment = match c {
                '.' => parse_dotted_key(&mut chars),
                '[' => parse_bracket(&mut chars),
                other => Err(format!("unexpected character '{}'", other)),
            }
            .map_err(invalid)?;
            segments.push(segment);
        }

        Ok(Self {
            expression: expression.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolves the path against a parsed document
    ///
    /// # Errors
    /// Returns `ReportError::QueryPathNotFound` naming the first segment that
    /// does not match the document
    pub fn resolve<'a>(&self, document: &'a Value) -> Result<&'a Value> {
        let mut node = document;
        for segment in &self.segments {
            let next = match segment {
                Segment::Key(key) => node.as_object().and_then(|obj| obj.get(key)),
                Segment::Index(index) => node.as_array().and_then(|arr| arr.get(*index)),
            };
            node = next.ok_or_else(|| ReportError::QueryPathNotFound {
                path: self.expression.clone(),
                segment: segment.to_string(),
            })?;
        }
        Ok(node)
    }
}

impl std::str::FromStr for QueryPath {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for QueryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

fn parse_dotted_key(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<Segment, String> {
    let mut key = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' || c == '[' {
            break;
        }
        key.push(c);
        chars.next();
    }
    if key.is_empty() {
        return Err("empty key after '.'".to_string());
    }
    Ok(Segment::Key(key))
}

fn parse_bracket(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<Segment, String> {
    let segment = match chars.peek() {
        Some(&quote) if quote == '\'' || quote == '"' => {
            chars.next();
            let mut key = String::new();
            loop {
                match chars.next() {
                    Some(c) if c == quote => break,
                    Some(c) => key.push(c),
                    None => return Err("unterminated quoted key".to_string()),
                }
            }
            if key.is_empty() {
                return Err("empty quoted key".to_string());
            }
            Segment::Key(key)
        }
        _ => {
            let mut digits = String::new();
            while let Some(&c) = chars.peek() {
                if c == ']' {
                    break;
                }
                digits.push(c);
                chars.next();
            }
            let index = digits
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not an array index", digits))?;
            Segment::Index(index)
        }
    };

    match chars.next() {
        Some(']') => Ok(segment),
        _ => Err("missing closing ']'".to_string()),
    }
}
