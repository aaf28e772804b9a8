// ---------------------------------------------------------------------------
// BindingError: failures at the channel boundary
// ---------------------------------------------------------------------------

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors surfaced by value and trigger channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The channel was read before the host answered the subscribe signal.
    NotReady { event: String },
    /// The binding was disposed and no longer accepts subscribers.
    Disposed { path: String },
    /// A payload could not be decoded into the channel's value type.
    Decode { path: String, message: String },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::NotReady { event } => {
                write!(f, "'{event}' was not called before the value was read")
            }
            BindingError::Disposed { path } => {
                write!(f, "cannot subscribe to disposed binding '{path}'")
            }
            BindingError::Decode { path, message } => {
                write!(f, "failed to decode payload for '{path}': {message}")
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Decode a transport payload into `T`, naming the channel in the error.
pub(crate) fn decode_payload<T: DeserializeOwned>(
    path: &str,
    payload: Option<&Value>,
) -> Result<T, BindingError> {
    let payload = payload.ok_or_else(|| BindingError::Decode {
        path: path.to_string(),
        message: "missing payload".to_string(),
    })?;
    T::deserialize(payload).map_err(|e| BindingError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_display_names_update_signal() {
        let err = BindingError::NotReady {
            event: "CityStats.panelVisible.update".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("CityStats.panelVisible.update"), "got: {msg}");
    }

    #[test]
    fn test_decode_payload_missing() {
        let err = decode_payload::<bool>("CityStats.panelVisible", None).unwrap_err();
        assert!(matches!(err, BindingError::Decode { .. }));
    }

    #[test]
    fn test_decode_payload_wrong_type() {
        let payload = serde_json::json!("not a bool");
        let err = decode_payload::<bool>("CityStats.panelVisible", Some(&payload)).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("CityStats.panelVisible"), "got: {msg}");
    }

    #[test]
    fn test_decode_payload_ok() {
        let payload = serde_json::json!(true);
        assert_eq!(decode_payload::<bool>("x", Some(&payload)), Ok(true));
    }
}
