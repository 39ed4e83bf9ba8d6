use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
    Name,
    Url,
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{field} is required")]
    MissingField { field: RequiredField },
    #[error("a link named '{name}' already exists")]
    DuplicateName { name: String },
    #[error("'{url}' is not a valid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("'{url}' is not a valid icon URL")]
    InvalidIconUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("no link with id '{id}'")]
    NotFound { id: String },
    #[error("stored data under '{key}' is not valid JSON")]
    StorageCorrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl LinkError {
    /// Whether the user can fix this by changing what they typed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LinkError::MissingField { .. }
                | LinkError::DuplicateName { .. }
                | LinkError::InvalidUrl { .. }
                | LinkError::InvalidIconUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = LinkError::MissingField {
            field: RequiredField::Url,
        };
        assert_eq!(err.to_string(), "url is required");
        assert!(err.is_validation());

        let err = LinkError::DuplicateName {
            name: "My Show".into(),
        };
        assert_eq!(err.to_string(), "a link named 'My Show' already exists");
    }

    #[test]
    fn storage_failures_are_not_validation() {
        let err = LinkError::from(anyhow::anyhow!("disk full"));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "disk full");
        assert!(!LinkError::NotFound { id: "x".into() }.is_validation());
    }
}
