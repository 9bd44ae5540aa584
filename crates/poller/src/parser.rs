use review_common::error::PollError;
use review_common::types::{HomeworkRecord, HomeworkStatus};

/// Turn a homework record into the notification text for its current verdict.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, PollError> {
    let Some(homework_name) = record.homework_name.as_deref() else {
        return Err(PollError::MissingField {
            field: "homework_name",
            record: record.raw.clone(),
        });
    };

    let status = record
        .status
        .as_deref()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| PollError::UnknownStatus {
            status: record.status.clone().unwrap_or_else(|| "<none>".to_string()),
            homework_name: homework_name.to_string(),
        })?;

    Ok(format!(
        "Changed review status of work \"{homework_name}\". {}",
        status.verdict()
    ))
}
