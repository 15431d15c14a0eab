use std::path::Path;

use crate::event::AlertEvent;
use crate::forwarder::ForwarderError;

/// Read an event from a JSON file, or the empty event when no path is given
pub fn load_event(path: Option<&Path>) -> Result<AlertEvent, ForwarderError> {
    let Some(path) = path else {
        return Ok(AlertEvent::empty());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ForwarderError::EventLoad(format!("{}: {}", path.display(), e)))?;
    let raw: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| ForwarderError::EventLoad(format!("{}: {}", path.display(), e)))?;

    Ok(AlertEvent::new(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_gives_empty_event() {
        let event = load_event(None).unwrap();
        assert_eq!(event, AlertEvent::empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Records":[{{"Sns":{{"Subject":"from file"}}}}]}}"#).unwrap();

        let event = load_event(Some(file.path())).unwrap();
        assert_eq!(event.subject(), Some("from file"));
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_event(Some(file.path())).unwrap_err();
        assert!(matches!(err, ForwarderError::EventLoad(_)));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_event(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ForwarderError::EventLoad(_)));
    }
}
