//! Scripted FAQ matcher
//!
//! No NLP here: the chatbot lowercases the question and walks the FAQ list
//! looking for substring overlap, falling back to a fixed topic table and
//! finally a generic rephrase prompt.

use serde::Serialize;

use crate::model::FaqEntry;
use crate::ops::Store;

/// Fixed fallback replies keyed by topic keywords, checked in order after
/// the FAQ list misses
const FALLBACK_TOPICS: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey", "namaste"],
        "Hello! Ask me about invoices, tasks, clients, campaigns or your KPIs.",
    ),
    (
        &["invoice", "payment", "bill"],
        "Invoices live in the Finance module. You can generate, filter and mark them paid there.",
    ),
    (
        &["task", "todo", "assign"],
        "Tasks are under Management. Filter by status or assignee, or ask your lead to assign one.",
    ),
    (
        &["client", "customer"],
        "Client records are in the Clients module. Use search to find one by name, email or company.",
    ),
    (
        &["research", "paper", "study"],
        "Research work is tracked as projects and tasks under the Research department.",
    ),
    (
        &["marketing", "campaign", "festival"],
        "Campaigns and the festival calendar are in the Marketing module.",
    ),
    (
        &["salary", "payslip", "pay"],
        "Salary records are visible to admins in the Teams module.",
    ),
    (
        &["kpi", "performance", "stats"],
        "Your KPIs are on the Dashboard: task completion, project load and revenue contribution.",
    ),
];

const GENERIC_REPLY: &str =
    "I didn't catch that. Could you rephrase, or ask about invoices, tasks, clients or campaigns?";

/// A chatbot reply plus the FAQ entry that produced it, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotReply {
    pub reply: String,
    pub matched_faq_id: Option<String>,
}

/// Find the first FAQ entry matching the query
///
/// A hit is a case-insensitive substring overlap with the entry's question
/// or answer, or a bidirectional substring overlap with any keyword. The
/// FAQ list is walked in stable creation order; the first hit wins.
pub fn find_best_match<'a>(store: &'a Store, query: &str) -> Option<&'a FaqEntry> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return None;
    }

    store.list_faqs().into_iter().find(|faq| {
        faq.question.to_lowercase().contains(&query_lower)
            || faq.answer.to_lowercase().contains(&query_lower)
            || faq
                .keywords
                .iter()
                .any(|k| query_lower.contains(k.as_str()) || k.contains(&query_lower))
    })
}

/// The fallback reply for a query that matched no FAQ entry
fn fallback_reply(query_lower: &str) -> &'static str {
    for (keywords, reply) in FALLBACK_TOPICS {
        if keywords.iter().any(|k| query_lower.contains(k)) {
            return reply;
        }
    }
    GENERIC_REPLY
}

/// Answer a chatbot query
///
/// FAQ match first; topic fallback second; generic rephrase prompt last.
pub fn answer_query(store: &Store, query: &str) -> BotReply {
    if let Some(faq) = find_best_match(store, query) {
        return BotReply {
            reply: faq.answer.clone(),
            matched_faq_id: Some(faq.id.clone()),
        };
    }

    BotReply {
        reply: fallback_reply(&query.trim().to_lowercase()).to_string(),
        matched_faq_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::chatbot_ops::{create_faq, FaqDraft};

    fn store_with_faqs() -> Store {
        let mut store = Store::new();
        create_faq(
            &mut store,
            FaqDraft {
                question: "How do I create an invoice?".to_string(),
                answer: "Open Finance and press New Invoice.".to_string(),
                category: "finance".to_string(),
                module: Some("finance".to_string()),
                keywords: vec!["invoice".to_string(), "billing".to_string()],
            },
        )
        .unwrap();
        create_faq(
            &mut store,
            FaqDraft {
                question: "How do I assign a task?".to_string(),
                answer: "Open Management and pick an assignee on the task.".to_string(),
                category: "tasks".to_string(),
                module: Some("management".to_string()),
                keywords: vec!["assign".to_string(), "task".to_string()],
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn test_match_on_question_substring() {
        let store = store_with_faqs();
        let faq = find_best_match(&store, "create an invoice").unwrap();
        assert_eq!(faq.category, "finance");
    }

    #[test]
    fn test_match_on_keyword_bidirectional() {
        let store = store_with_faqs();
        // Query contains the keyword
        assert!(find_best_match(&store, "where is my billing history").is_some());
        // Keyword contains the query
        assert!(find_best_match(&store, "bill").is_some());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let store = store_with_faqs();
        let reply = answer_query(&store, "HOW DO I ASSIGN A TASK?");
        assert!(reply.matched_faq_id.is_some());
        assert!(reply.reply.contains("Management"));
    }

    #[test]
    fn test_first_match_wins() {
        let store = store_with_faqs();
        // "task" appears in both a keyword of the second FAQ only; "invoice"
        // hits the first FAQ, which was created first
        let reply = answer_query(&store, "invoice");
        assert!(reply.reply.contains("Finance"));
    }

    #[test]
    fn test_fallback_topics() {
        let store = Store::new();
        assert!(answer_query(&store, "hello there").reply.starts_with("Hello"));
        assert!(answer_query(&store, "what about my salary")
            .reply
            .contains("Teams"));
        assert!(answer_query(&store, "show kpi please").reply.contains("Dashboard"));
    }

    #[test]
    fn test_generic_reply_when_nothing_matches() {
        let store = Store::new();
        let reply = answer_query(&store, "zzz qqq");
        assert!(reply.matched_faq_id.is_none());
        assert_eq!(reply.reply, GENERIC_REPLY);
    }

    #[test]
    fn test_empty_query_gets_generic_reply() {
        let store = store_with_faqs();
        let reply = answer_query(&store, "   ");
        assert!(reply.matched_faq_id.is_none());
    }
}
