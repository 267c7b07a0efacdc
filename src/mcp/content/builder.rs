//! Builder pattern for constructing tool responses.

use serde::Serialize;
use serde_json::Value;

use super::types::{ContentItem, ToolResult};

/// Builder for constructing ToolResult with fluent API.
#[derive(Debug, Default)]
pub struct ContentBuilder {
    items: Vec<ContentItem>,
    structured: Option<Value>,
    is_error: bool,
}

impl ContentBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text message.
    pub fn text(mut self, message: impl Into<String>) -> Self {
        self.items.push(ContentItem::text(message));
        self
    }

    /// Attach a structured payload, also rendered as pretty JSON text.
    pub fn json(mut self, payload: Value) -> Self {
        let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string());
        self.items.push(ContentItem::text(text));
        self.structured = Some(payload);
        self
    }

    /// Mark this result as an error.
    pub fn error(mut self) -> Self {
        self.is_error = true;
        self
    }

    /// Build the final ToolResult.
    pub fn build(self) -> ToolResult {
        ToolResult {
            content: self.items,
            structured_content: self.structured,
            is_error: self.is_error,
        }
    }
}

/// Serialize a response struct into a successful tool result.
pub fn success_payload<T: Serialize>(payload: &T) -> ToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => ContentBuilder::new().json(value).build(),
        Err(err) => ContentBuilder::new()
            .text(format!("응답을 만드는 중 오류가 발생했습니다: {err}"))
            .error()
            .build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_text() {
        let result = ContentBuilder::new().text("안내 메시지").build();

        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].content_type, "text");
    }

    #[test]
    fn test_builder_json_and_note() {
        let result = ContentBuilder::new()
            .json(json!({ "domain": "주거·월세" }))
            .text("카드 2개를 찾았습니다")
            .build();

        assert!(!result.is_error);
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.structured_content.unwrap()["domain"], "주거·월세");
    }

    #[test]
    fn test_builder_error() {
        let result = ContentBuilder::new().text("실패").error().build();
        assert!(result.is_error);
    }

    #[test]
    fn test_success_payload_serializes_struct() {
        #[derive(Serialize)]
        struct Payload {
            triggered: bool,
        }

        let result = success_payload(&Payload { triggered: true });
        assert!(!result.is_error);
        assert_eq!(result.structured_content.unwrap()["triggered"], true);
    }
}
