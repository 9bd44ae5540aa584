//! Shape checks for raw homework API responses.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. the body is a JSON object,
//! 2. `homeworks` is present and truthy,
//! 3. `current_date` is present and truthy (so `0` counts as missing),
//! 4. `homeworks` is a list,
//! 5. `current_date` is an integer.

use serde_json::Value;

use review_common::error::{MalformedKind, PollError};
use review_common::types::{ApiResponse, HomeworkRecord, is_truthy};

pub fn validate(response: &Value) -> Result<ApiResponse, PollError> {
    let Some(body) = response.as_object() else {
        return Err(PollError::malformed(MalformedKind::NotAMapping));
    };

    let homeworks = body.get("homeworks").filter(|v| is_truthy(v));
    let Some(homeworks) = homeworks else {
        return Err(PollError::malformed(MalformedKind::MissingOrEmptyHomeworks));
    };

    let current_date = body.get("current_date").filter(|v| is_truthy(v));
    let Some(current_date) = current_date else {
        return Err(PollError::malformed(MalformedKind::MissingCurrentDate));
    };

    let Some(homeworks) = homeworks.as_array() else {
        return Err(PollError::malformed(MalformedKind::MissingOrEmptyHomeworks));
    };

    let Some(current_date) = as_timestamp(current_date) else {
        return Err(PollError::malformed(MalformedKind::InvalidCurrentDate));
    };

    Ok(ApiResponse {
        homeworks: homeworks.iter().map(HomeworkRecord::from).collect(),
        current_date,
    })
}

/// Integer timestamps, also accepted as numeric strings.
fn as_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
