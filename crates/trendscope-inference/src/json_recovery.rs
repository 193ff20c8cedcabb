//! Recovery of JSON payloads from model output.
//!
//! Models wrap JSON in Markdown fences, emit one object per line without the
//! enclosing array, or wrap an array in an object. Parsing runs in explicit
//! stages; `None` means every stage failed.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

fn fence_pattern() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").ok())
        .as_ref()
}

/// Trim `text` and remove a surrounding Markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    fence_pattern()
        .and_then(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(2))
        .map(|inner| inner.as_str().trim())
        .filter(|inner| !inner.is_empty())
        .unwrap_or(trimmed)
}

/// Parse `text` as-is.
pub fn parse_strict<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

/// Keep the lines that start with `{`, join them with commas and parse the
/// result as an array. Text without any such line is an error, not an empty
/// array.
pub fn salvage_object_lines<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let objects: Vec<&str> = text
        .lines()
        .filter(|line| line.trim_start().starts_with('{'))
        .collect();
    if objects.is_empty() {
        return Err(serde::de::Error::custom("no object lines to salvage"));
    }
    serde_json::from_str(&format!("[{}]", objects.join(",")))
}

/// Parse JSON out of model output: fence strip, strict parse, then line
/// salvage.
pub fn parse_json_from_text<T: DeserializeOwned>(text: &str) -> Option<T> {
    let candidate = strip_code_fence(text);
    let strict_err = match parse_strict(candidate) {
        Ok(value) => return Some(value),
        Err(e) => e,
    };
    warn!(error = %strict_err, response_len = text.len(), "Failed to parse JSON response");

    match salvage_object_lines(candidate) {
        Ok(value) => {
            debug!("Recovered JSON from object lines");
            Some(value)
        }
        Err(e) => {
            warn!(error = %e, "Failed to parse JSON with line salvage");
            None
        }
    }
}

/// Accept an object wrapping a single array (`{"ideas": [...]}`) and parse
/// the first array value that fits `T`.
pub fn unwrap_single_array<T: DeserializeOwned>(text: &str) -> Option<T> {
    let obj: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(strip_code_fence(text)).ok()?;
    obj.into_iter()
        .filter(|(_, value)| value.is_array())
        .find_map(|(_, value)| serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use trendscope_core::ContentIdea;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        a: u32,
    }

    #[test]
    fn test_strip_json_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence_with_whitespace() {
        let text = "  ```\n[1, 2]\n```  ";
        assert_eq!(strip_code_fence(text), "[1, 2]");
    }

    #[test]
    fn test_strip_without_fence_only_trims() {
        assert_eq!(strip_code_fence("  {\"a\": 1} \n"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_plain_object() {
        let item: Option<Item> = parse_json_from_text("{\"a\": 7}");
        assert_eq!(item, Some(Item { a: 7 }));
    }

    #[test]
    fn test_parse_fenced_array() {
        let text = "```json\n[{\"a\": 1}, {\"a\": 2}]\n```";
        let items: Option<Vec<Item>> = parse_json_from_text(text);
        assert_eq!(items.map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_salvage_bare_object_lines() {
        let text = "Here are your ideas:\n{\"a\": 1}\n{\"a\": 2}\nEnjoy!";
        let items: Option<Vec<Item>> = parse_json_from_text(text);
        assert_eq!(items, Some(vec![Item { a: 1 }, Item { a: 2 }]));
    }

    #[test]
    fn test_not_json_returns_none() {
        let parsed: Option<Vec<ContentIdea>> = parse_json_from_text("not json at all");
        assert!(parsed.is_none());

        let parsed: Option<Item> = parse_json_from_text("not json at all");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_empty_text_returns_none() {
        let parsed: Option<Vec<Item>> = parse_json_from_text("");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_explicit_empty_array_parses() {
        let parsed: Option<Vec<Item>> = parse_json_from_text("[]");
        assert_eq!(parsed, Some(vec![]));
    }

    #[test]
    fn test_unwrap_single_array() {
        let text = r#"{"ideas": [{"hook": "h", "format": "f"}]}"#;
        let ideas: Option<Vec<ContentIdea>> = unwrap_single_array(text);
        assert_eq!(ideas, Some(vec![ContentIdea::new("h", "f")]));
    }

    #[test]
    fn test_unwrap_single_array_rejects_non_objects() {
        let ideas: Option<Vec<ContentIdea>> = unwrap_single_array("[1, 2]");
        assert!(ideas.is_none());
    }
}
