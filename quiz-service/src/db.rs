use aws_sdk_dynamodb::types::AttributeValue;
use tracing::warn;

use crate::error::Error;
use crate::model::{QuizRecord, UserRecord};

/// Point lookup on the user table by its composite `{id, email}` key.
pub async fn find_user(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    id: &str,
    email: &str,
) -> Result<Option<UserRecord>, Error> {
    let output = client
        .get_item()
        .table_name(table)
        .key("id", AttributeValue::S(id.to_string()))
        .key("email", AttributeValue::S(email.to_string()))
        .send()
        .await
        .map_err(|e| Error::Store(format!("{e:?}")))?;

    match output.item() {
        Some(item) => Ok(Some(UserRecord::from_item(item)?)),
        None => Ok(None),
    }
}

/// Scans the quiz table for records the caller has not been shown yet.
/// Undeserializable rows are logged and skipped.
pub async fn unseen_quizzes(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    email: &str,
) -> Result<Vec<QuizRecord>, Error> {
    let items = client
        .scan()
        .table_name(table)
        .filter_expression("NOT contains(viewers, :viewer)")
        .expression_attribute_values(":viewer", AttributeValue::S(email.to_string()))
        .into_paginator()
        .items()
        .send()
        .collect::<Result<Vec<_>, _>>()
        .await
        .map_err(|e| Error::Store(format!("{e:?}")))?;

    let quizzes = items
        .iter()
        .filter_map(|item| match QuizRecord::from_item(item) {
            Ok(quiz) => Some(quiz),
            Err(e) => {
                warn!(error = %e, "skipping undeserializable quiz record");
                None
            }
        })
        .collect();

    Ok(quizzes)
}

/// Adds the caller to the record's viewers set. `ADD` on a string set is
/// atomic and idempotent, so concurrent submissions cannot lose each
/// other's updates and a repeated submission leaves the set unchanged.
pub async fn record_viewer(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    quiz_id: &str,
    email: &str,
) -> Result<(), Error> {
    client
        .update_item()
        .table_name(table)
        .key("id", AttributeValue::S(quiz_id.to_string()))
        .update_expression("ADD viewers :viewer")
        .expression_attribute_values(":viewer", AttributeValue::Ss(vec![email.to_string()]))
        .send()
        .await
        .map_err(|e| Error::Store(format!("{e:?}")))?;

    Ok(())
}
