use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use super::store::Store;
use crate::errors::{PortalError, Result};
use crate::model::{ChatRecord, FaqEntry};

/// Fields for creating an FAQ entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Create a new FAQ entry for the chatbot
///
/// Keywords are stored lowercased since matching is case-insensitive.
///
/// # Returns
/// The ID of the new entry
///
/// # Errors
/// * `InvalidInput`-class errors if question or answer is blank
pub fn create_faq(store: &mut Store, draft: FaqDraft) -> Result<String> {
    if draft.question.trim().is_empty() {
        return Err(PortalError::InvalidTitle {
            reason: "FAQ question cannot be empty".to_string(),
        });
    }
    if draft.answer.trim().is_empty() {
        return Err(PortalError::InvalidTitle {
            reason: "FAQ answer cannot be empty".to_string(),
        });
    }

    let faq_id = Uuid::now_v7().to_string();
    let mut faq = FaqEntry::new(faq_id.clone(), draft.question, draft.answer, draft.category);
    faq.module = draft.module;
    faq.keywords = draft.keywords.iter().map(|k| k.to_lowercase()).collect();

    store.insert_faq(faq);
    Ok(faq_id)
}

/// Update an FAQ entry's answer or keywords
///
/// # Errors
/// * `FaqNotFound` - If the entry doesn't exist
pub fn update_faq_answer(store: &mut Store, id: &str, answer: String) -> Result<()> {
    if answer.trim().is_empty() {
        return Err(PortalError::InvalidTitle {
            reason: "FAQ answer cannot be empty".to_string(),
        });
    }
    let faq = store
        .faqs
        .get_mut(id)
        .ok_or_else(|| PortalError::FaqNotFound {
            faq_id: id.to_string(),
        })?;
    faq.answer = answer;
    faq.updated_at = Utc::now();
    Ok(())
}

/// Delete an FAQ entry
///
/// # Errors
/// * `FaqNotFound` - If the entry doesn't exist
pub fn delete_faq(store: &mut Store, id: &str) -> Result<()> {
    store.remove_faq(id)?;
    Ok(())
}

/// Save one question/reply exchange to chat history
///
/// # Returns
/// The ID of the new record
///
/// # Errors
/// * `MemberNotFound` - If the asking member doesn't exist
pub fn record_exchange(
    store: &mut Store,
    member_id: &str,
    message: String,
    reply: String,
    session_id: Option<String>,
    matched_faq_id: Option<String>,
) -> Result<String> {
    store.get_member(member_id)?;

    let record_id = Uuid::now_v7().to_string();
    let mut record = ChatRecord::new(record_id.clone(), member_id.to_string(), message, reply);
    record.session_id = session_id;
    record.matched_faq_id = matched_faq_id;

    store.insert_chat_record(record);
    Ok(record_id)
}

/// A member's chat history, optionally narrowed to one session
pub fn session_history<'a>(
    store: &'a Store,
    member_id: &str,
    session_id: Option<&str>,
) -> Vec<&'a ChatRecord> {
    store
        .chat_history_for(member_id)
        .into_iter()
        .filter(|r| session_id.is_none() || r.session_id.as_deref() == session_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Role};

    fn faq_draft() -> FaqDraft {
        FaqDraft {
            question: "How do I create an invoice?".to_string(),
            answer: "Open Finance and press New Invoice.".to_string(),
            category: "finance".to_string(),
            module: Some("finance".to_string()),
            keywords: vec!["Invoice".to_string(), "BILLING".to_string()],
        }
    }

    #[test]
    fn test_create_faq_lowercases_keywords() {
        let mut store = Store::new();
        let id = create_faq(&mut store, faq_draft()).unwrap();

        let faq = store.get_faq(&id).unwrap();
        assert_eq!(faq.keywords, vec!["invoice", "billing"]);
    }

    #[test]
    fn test_create_faq_rejects_blank_answer() {
        let mut store = Store::new();
        let mut bad = faq_draft();
        bad.answer = "  ".to_string();
        assert!(create_faq(&mut store, bad).is_err());
    }

    #[test]
    fn test_update_faq_answer() {
        let mut store = Store::new();
        let id = create_faq(&mut store, faq_draft()).unwrap();

        update_faq_answer(&mut store, &id, "Use the Finance module.".to_string()).unwrap();
        assert_eq!(store.get_faq(&id).unwrap().answer, "Use the Finance module.");
    }

    #[test]
    fn test_record_exchange_requires_member() {
        let mut store = Store::new();
        assert!(matches!(
            record_exchange(&mut store, "ghost", "hi".into(), "Hi!".into(), None, None),
            Err(PortalError::MemberNotFound { .. })
        ));

        store.insert_member(Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        ));
        record_exchange(&mut store, "member-1", "hi".into(), "Hi!".into(), None, None).unwrap();
        assert_eq!(store.chat_history_for("member-1").len(), 1);
    }

    #[test]
    fn test_session_history_filters_by_session() {
        let mut store = Store::new();
        store.insert_member(Member::new(
            "member-1".to_string(),
            "Asha Rao".to_string(),
            "asha@example.com".to_string(),
            Role::Member,
        ));

        let s1 = Some("session-1".to_string());
        record_exchange(&mut store, "member-1", "hi".into(), "Hi!".into(), s1.clone(), None)
            .unwrap();
        record_exchange(&mut store, "member-1", "kpi?".into(), "See Teams.".into(), None, None)
            .unwrap();

        assert_eq!(session_history(&store, "member-1", None).len(), 2);
        assert_eq!(session_history(&store, "member-1", Some("session-1")).len(), 1);
        assert!(session_history(&store, "member-1", Some("session-9")).is_empty());
    }
}
