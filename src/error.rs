/// Error types for the listing editor
use thiserror::Error;

/// Failures talking to the hosted table or storage bucket
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Everything the editor can report back to the user
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("{selected} files selected, at most {max} allowed")]
    TooManyFiles { selected: usize, max: usize },

    #[error("failed to upload {file_name}: {source}")]
    Upload {
        file_name: String,
        #[source]
        source: PersistenceError,
    },

    #[error("failed to insert listing: {0}")]
    Insert(#[source] PersistenceError),

    #[error("a submission is already in progress")]
    Busy,

    #[error("failed to read {file_name}: {reason}")]
    FileRead { file_name: String, reason: String },
}

impl EditorError {
    /// Text shown in the transient notification
    pub fn user_message(&self) -> String {
        match self {
            EditorError::Validation { missing } => format!(
                "Please fill in all required fields ({})",
                missing.join(", ")
            ),
            EditorError::TooManyFiles { max, .. } => {
                format!("You can upload at most {} screenshots", max)
            }
            EditorError::Upload { .. } | EditorError::Insert(_) => {
                format!("Failed to save domain listing: {}", self)
            }
            EditorError::Busy => "Please wait for the current save to finish".to_string(),
            EditorError::FileRead { .. } => format!("Could not read file: {}", self),
        }
    }
}

/// Invalid editor configuration handed over from the host page
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(&'static str),

    #[error("invalid supabase url: {0}")]
    InvalidUrl(String),

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = EditorError::Validation {
            missing: vec!["Domain", "Price"],
        };

        assert_eq!(
            err.user_message(),
            "Please fill in all required fields (Domain, Price)"
        );
    }

    #[test]
    fn test_upload_message_includes_reason() {
        let err = EditorError::Upload {
            file_name: "shot.png".to_string(),
            source: PersistenceError::Status {
                status: 413,
                body: "too large".to_string(),
            },
        };

        let message = err.user_message();
        assert!(message.starts_with("Failed to save domain listing"));
        assert!(message.contains("shot.png"));
        assert!(message.contains("413"));
    }

    #[test]
    fn test_too_many_files_message() {
        let err = EditorError::TooManyFiles { selected: 3, max: 2 };
        assert_eq!(err.user_message(), "You can upload at most 2 screenshots");
    }
}
