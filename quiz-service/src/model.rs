use std::collections::{BTreeSet, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::Error;

/// A recognized caller. Existence of the record is the only fact the
/// handlers consult; `credits` is carried from the table but unused.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub credits: u32,
}

/// A stored question. `question` doubles as the object key of the asset
/// served to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub viewers: BTreeSet<String>,
}

impl UserRecord {
    pub fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, Error> {
        Ok(UserRecord {
            id: string_attr(item, "id")?,
            email: string_attr(item, "email")?,
            credits: item
                .get("credits")
                .and_then(|v| v.as_n().ok())
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
        })
    }
}

impl QuizRecord {
    pub fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self, Error> {
        // Records created before any submission have no viewers attribute.
        let viewers = match item.get("viewers") {
            Some(AttributeValue::Ss(emails)) => emails.iter().cloned().collect(),
            _ => BTreeSet::new(),
        };

        Ok(QuizRecord {
            id: string_attr(item, "id")?,
            question: string_attr(item, "question")?,
            answer: string_attr(item, "answer")?,
            viewers,
        })
    }

    pub fn seen_by(&self, email: &str) -> bool {
        self.viewers.contains(email)
    }

    /// Exact match, case-sensitive, no trimming.
    pub fn accepts(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, Error> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| Error::MalformedRecord(format!("missing string attribute `{name}`")))
}

/// Among the eligible records, the lexicographically smallest id wins, so
/// repeated scans select the same quiz regardless of scan order.
pub fn select_quiz(candidates: Vec<QuizRecord>) -> Option<QuizRecord> {
    candidates.into_iter().min_by(|a, b| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_item(id: &str, viewers: Option<Vec<&str>>) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::from([
            (
                "id".to_string(),
                AttributeValue::S(id.to_string()),
            ),
            (
                "question".to_string(),
                AttributeValue::S("foo.html".to_string()),
            ),
            ("answer".to_string(), AttributeValue::S("42".to_string())),
        ]);
        if let Some(viewers) = viewers {
            item.insert(
                "viewers".to_string(),
                AttributeValue::Ss(viewers.into_iter().map(String::from).collect()),
            );
        }
        item
    }

    #[test]
    fn quiz_record_deserializes_from_item() {
        let record = QuizRecord::from_item(&quiz_item("q1", Some(vec!["a@x.com"]))).unwrap();
        assert_eq!(record.id, "q1");
        assert_eq!(record.question, "foo.html");
        assert_eq!(record.answer, "42");
        assert!(record.seen_by("a@x.com"));
        assert!(!record.seen_by("b@x.com"));
    }

    #[test]
    fn missing_viewers_attribute_means_unseen() {
        let record = QuizRecord::from_item(&quiz_item("q1", None)).unwrap();
        assert!(record.viewers.is_empty());
        assert!(!record.seen_by("a@x.com"));
    }

    #[test]
    fn missing_string_attribute_is_an_error() {
        let mut item = quiz_item("q1", None);
        item.remove("answer");
        let err = QuizRecord::from_item(&item).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord(_)));
    }

    #[test]
    fn user_record_defaults_credits_to_zero() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("u1".to_string())),
            (
                "email".to_string(),
                AttributeValue::S("a@x.com".to_string()),
            ),
        ]);
        let user = UserRecord::from_item(&item).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.credits, 0);
    }

    #[test]
    fn user_record_reads_numeric_credits() {
        let item = HashMap::from([
            ("id".to_string(), AttributeValue::S("u1".to_string())),
            (
                "email".to_string(),
                AttributeValue::S("a@x.com".to_string()),
            ),
            ("credits".to_string(), AttributeValue::N("17".to_string())),
        ]);
        let user = UserRecord::from_item(&item).unwrap();
        assert_eq!(user.credits, 17);
    }

    #[test]
    fn answer_check_is_exact_and_case_sensitive() {
        let record = QuizRecord::from_item(&quiz_item("q1", None)).unwrap();
        assert!(record.accepts("42"));
        assert!(!record.accepts("41"));
        assert!(!record.accepts(" 42"));
        assert!(!record.accepts("42 "));

        let mut item = quiz_item("q2", None);
        item.insert(
            "answer".to_string(),
            AttributeValue::S("ANALYTICS".to_string()),
        );
        let record = QuizRecord::from_item(&item).unwrap();
        assert!(record.accepts("ANALYTICS"));
        assert!(!record.accepts("analytics"));
    }

    #[test]
    fn selection_is_deterministic_smallest_id() {
        let candidates = vec![
            QuizRecord::from_item(&quiz_item("q3", None)).unwrap(),
            QuizRecord::from_item(&quiz_item("q1", None)).unwrap(),
            QuizRecord::from_item(&quiz_item("q2", None)).unwrap(),
        ];
        let selected = select_quiz(candidates).unwrap();
        assert_eq!(selected.id, "q1");
    }

    #[test]
    fn selection_of_nothing_is_none() {
        assert!(select_quiz(vec![]).is_none());
    }
}
