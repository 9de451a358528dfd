pub mod attr;
pub mod text;

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Deserializer};

pub use attr::Attr;
pub use text::Text;

#[derive(Debug, PartialEq)]
pub enum Value {
    /// Nothing matched
    Empty,
    /// One value
    Single(String),
    /// Every match, in document order
    Multiple(Vec<String>),
}

impl Value {
    /// Collapses the result into a single non-blank string.
    pub fn into_single(self) -> Option<String> {
        match self {
            Value::Single(v) => Some(v),
            Value::Multiple(vs) => vs.into_iter().next(),
            Value::Empty => None,
        }
        .filter(|v| !v.trim().is_empty())
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Value::Single(v) => vec![v],
            Value::Multiple(vs) => vs,
            Value::Empty => Vec::new(),
        }
    }
}

#[typetag::deserialize(tag = "type")]
pub trait Extractor: Send + Sync {
    fn extract(&self, element: ElementRef) -> Value;

    fn extract_all(&self, element: ElementRef) -> Value;
}

fn deserialize_nullable_selector<'de, D>(deserializer: D) -> Result<Option<Selector>, D::Error>
where
    D: Deserializer<'de>,
{
    let option_str: Option<String> = Option::deserialize(deserializer)?;

    match option_str {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Selector::parse(&s)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("Invalid selector '{}': {}", s, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_single_value_is_absent() {
        assert_eq!(Value::Single("  ".to_owned()).into_single(), None);
        assert_eq!(Value::Empty.into_single(), None);
        assert_eq!(
            Value::Multiple(vec!["a".to_owned(), "b".to_owned()]).into_single(),
            Some("a".to_owned())
        );
    }

    #[test]
    fn into_vec_keeps_order() {
        let value = Value::Multiple(vec!["1".to_owned(), "2".to_owned(), "3".to_owned()]);
        assert_eq!(value.into_vec(), vec!["1", "2", "3"]);
        assert!(Value::Empty.into_vec().is_empty());
    }
}
