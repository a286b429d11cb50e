use serde::{Deserialize, Serialize};

/// A single record from the `affectionmessages` collection.
///
/// Only `_id` is required. Everything else is optional in the store and is
/// carried through untouched; the greeting flow reads `message_text`,
/// `display_order` and `sender_name`. Date fields are kept as raw JSON since
/// stores encode them either as strings or as `{"$date": ...}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectionMessage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<serde_json::Value>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<serde_json::Value>,
}

impl AffectionMessage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_date: None,
            updated_date: None,
            message_text: None,
            display_order: None,
            sender_name: None,
            recipient_name: None,
            message_image: None,
            date_created: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.message_text = Some(text.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.display_order = Some(order);
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender_name = Some(sender.into());
        self
    }

    /// Sort key; a missing order sorts as 0
    pub fn sort_key(&self) -> i64 {
        self.display_order.unwrap_or(0)
    }

    /// Text shown inside the quote marks (empty when absent)
    pub fn text(&self) -> &str {
        self.message_text.as_deref().unwrap_or("")
    }

    /// Attribution line, only when a sender is present and non-empty
    pub fn attribution(&self) -> Option<&str> {
        self.sender_name.as_deref().filter(|s| !s.is_empty())
    }
}
