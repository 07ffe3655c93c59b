//! Reading caller-owned record files.
//!
//! Records arrive as JSON arrays in the shape the web layer stores them. A path
//! of `-` reads standard input.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;
use zenith_core::{ErrorCode, InvalidDateError, parse_calendar_day};

use crate::output::{OutputMode, fail};

/// A record file that could not be read or parsed.
#[derive(Debug)]
pub struct InputError {
    pub code: ErrorCode,
    pub message: String,
}

/// Read a JSON array of `T` from `path`, or from stdin when `path` is `-`.
pub fn read_records<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>, InputError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| InputError {
                code: ErrorCode::InputReadFailed,
                message: format!("failed to read {what} from stdin: {err}"),
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|err| InputError {
            code: ErrorCode::InputReadFailed,
            message: format!("failed to read {what} from {}: {err}", path.display()),
        })?
    };

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|err| InputError {
        code: ErrorCode::InputParseFailed,
        message: format!("failed to parse {what} from {}: {err}", path.display()),
    })?;

    debug!(path = %path.display(), count = records.len(), "loaded {what}");
    Ok(records)
}

/// [`read_records`], with failures rendered to stderr under their error code.
pub fn load_records<T: DeserializeOwned>(
    path: &Path,
    what: &str,
    output: OutputMode,
) -> anyhow::Result<Vec<T>> {
    read_records(path, what).map_err(|err| fail(output, err.code, err.message))
}

/// Like [`load_records`], but a missing path means "no records".
pub fn load_optional_records<T: DeserializeOwned>(
    path: Option<&Path>,
    what: &str,
    output: OutputMode,
) -> anyhow::Result<Vec<T>> {
    path.map_or_else(|| Ok(Vec::new()), |p| load_records(p, what, output))
}

/// The caller's current calendar day: `today` if given, else the local clock.
pub fn today_or_local(today: Option<&str>) -> Result<NaiveDate, InvalidDateError> {
    today.map_or_else(|| Ok(chrono::Local::now().date_naive()), parse_calendar_day)
}

/// [`today_or_local`] for a `--today` flag, rendering a bad value to stderr.
pub fn resolve_today(today: Option<&str>, output: OutputMode) -> anyhow::Result<NaiveDate> {
    today_or_local(today).map_err(|err| fail(output, err.error_code(), format!("--today: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_core::Task;

    #[test]
    fn loads_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, r#"[{"id":"1","text":"a","completed":true}]"#).unwrap();

        let tasks: Vec<Task> = read_records(&path, "tasks").unwrap();
        assert_eq!(tasks, [Task::new("1", "a", true)]);
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records::<Task>(&dir.path().join("nope.json"), "tasks").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputReadFailed);
        assert!(err.message.contains("failed to read tasks"));
    }

    #[test]
    fn wrong_shape_is_a_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, r#"{"id":"1"}"#).unwrap();

        let err = read_records::<Task>(&path, "tasks").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputParseFailed);
        assert!(err.message.contains("failed to parse tasks"));
    }

    #[test]
    fn absent_optional_path_is_empty() {
        let tasks: Vec<Task> = load_optional_records(None, "tasks", OutputMode::Text).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn explicit_today_is_parsed() {
        let today = today_or_local(Some("2025-01-01T08:00")).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let err = today_or_local(Some("someday")).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidDate);
    }
}
