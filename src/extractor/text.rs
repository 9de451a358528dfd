use scraper::{ElementRef, Selector};
use serde::Deserialize;

use super::{Extractor, Value, deserialize_nullable_selector};

#[derive(Debug, Deserialize)]
pub struct Text {
    #[serde(default, deserialize_with = "deserialize_nullable_selector")]
    pub selector: Option<Selector>,
    /// Only take the element's first child node, and only if it is text.
    #[serde(default)]
    pub first_node: bool,
}

impl Text {
    fn text_of(&self, elem: ElementRef) -> Option<String> {
        if self.first_node {
            elem.children()
                .next()
                .and_then(|node| node.value().as_text())
                .map(|text| String::from(&**text))
        } else {
            Some(elem.text().collect::<String>())
        }
    }
}

#[typetag::deserialize]
impl Extractor for Text {
    fn extract(&self, element: ElementRef) -> Value {
        let elem = if let Some(selector) = &self.selector {
            element.select(selector).next()
        } else {
            Some(element)
        };

        match elem.and_then(|e| self.text_of(e)) {
            Some(text) if !text.is_empty() => Value::Single(text),
            _ => Value::Empty,
        }
    }

    fn extract_all(&self, element: ElementRef) -> Value {
        let mut results = Vec::new();

        if let Some(selector) = &self.selector {
            for elem in element.select(selector) {
                results.extend(self.text_of(elem));
            }
        } else {
            results.extend(self.text_of(element));
        }

        if results.is_empty() {
            Value::Empty
        } else {
            Value::Multiple(results)
        }
    }
}
