//! Defensive lookups into untyped JSON

use std::fmt;

use serde_json::Value;

/// One step of a [`JsonPath`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member
    Key(String),
    /// Array element
    Index(usize),
}

/// A path into a JSON document, e.g. `Records[0].Sns.Subject`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Create an empty path (resolves to the root value)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object member
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Append an array element
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Parse dotted notation with bracketed indices.
    ///
    /// Returns `None` for empty keys, unterminated brackets or
    /// non-numeric indices.
    pub fn parse(s: &str) -> Option<Self> {
        let mut path = Self::new();
        if s.is_empty() {
            return Some(path);
        }

        for part in s.split('.') {
            let (name, mut rest) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };

            if name.is_empty() {
                // A bare "[0]" is only valid as the very first segment
                if !(path.segments.is_empty() && !rest.is_empty()) {
                    return None;
                }
            } else {
                path = path.key(name);
            }

            while !rest.is_empty() {
                let inner = rest.strip_prefix('[')?;
                let close = inner.find(']')?;
                let index = inner[..close].parse::<usize>().ok()?;
                path = path.index(index);
                rest = &inner[close + 1..];
            }
        }

        Some(path)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Resolve `path` against `value`.
///
/// Missing members, out-of-range indices and segments applied to the
/// wrong kind of value all resolve to `None`.
pub fn lookup<'a>(value: &'a Value, path: &JsonPath) -> Option<&'a Value> {
    path.segments
        .iter()
        .try_fold(value, |current, segment| match segment {
            PathSegment::Key(key) => current.as_object()?.get(key),
            PathSegment::Index(index) => current.as_array()?.get(*index),
        })
}
