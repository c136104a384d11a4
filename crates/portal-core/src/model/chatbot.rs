use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scripted FAQ entry for the chatbot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    /// Unique identifier (UUID v7)
    pub id: String,

    pub question: String,

    pub answer: String,

    /// Broad topic label, e.g. "finance", "tasks"
    pub category: String,

    /// Portal module this entry belongs to, if any
    pub module: Option<String>,

    /// Match keywords checked bidirectionally against the query
    pub keywords: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FaqEntry {
    pub fn new(id: String, question: String, answer: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            answer,
            category,
            module: None,
            keywords: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One question/reply exchange saved to chat history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Member who asked
    pub member_id: String,

    pub message: String,

    pub reply: String,

    /// Groups exchanges belonging to one conversation
    pub session_id: Option<String>,

    /// FAQ entry that produced the reply, if the matcher hit
    pub matched_faq_id: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl ChatRecord {
    pub fn new(id: String, member_id: String, message: String, reply: String) -> Self {
        Self {
            id,
            member_id,
            message,
            reply,
            session_id: None,
            matched_faq_id: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_faq_entry() {
        let faq = FaqEntry::new(
            "faq-1".to_string(),
            "How do I create an invoice?".to_string(),
            "Open Finance and press New Invoice.".to_string(),
            "finance".to_string(),
        );
        assert!(faq.keywords.is_empty());
        assert!(faq.module.is_none());
    }

    #[test]
    fn test_new_chat_record_has_no_match() {
        let record = ChatRecord::new(
            "chat-1".to_string(),
            "member-1".to_string(),
            "hello".to_string(),
            "Hi there!".to_string(),
        );
        assert!(record.matched_faq_id.is_none());
        assert!(record.session_id.is_none());
    }
}
