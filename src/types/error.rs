use thiserror::Error;

/// Failure modes of a bump call. The library never terminates the process;
/// the CLI maps each category to a distinct exit status.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("failed to open file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("file {path} does not contain a JSON object")]
    NotAnObject { path: String },

    #[error("invalid options: {0}")]
    Config(String),

    #[error("entry '{entry}' not found in {path}")]
    MissingEntry { entry: String, path: String },

    #[error("entry '{entry}' in {path} is not a string")]
    EntryNotString { entry: String, path: String },
}

impl BumpError {
    /// Exit status used when the CLI terminates on this error.
    pub fn exit_status(&self) -> i32 {
        match self {
            BumpError::Read { .. } | BumpError::Write { .. } => 1,
            BumpError::Parse { .. } | BumpError::NotAnObject { .. } => 2,
            BumpError::Config(_) => 3,
            BumpError::MissingEntry { .. } | BumpError::EntryNotString { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_statuses_stay_distinct_per_category() {
        let read = BumpError::Read {
            path: "a.json".into(),
            source: std::io::Error::other("nope"),
        };
        let not_object = BumpError::NotAnObject {
            path: "a.json".into(),
        };
        let config = BumpError::Config("bad".into());
        let missing = BumpError::MissingEntry {
            entry: "version".into(),
            path: "a.json".into(),
        };

        assert_eq!(read.exit_status(), 1);
        assert_eq!(not_object.exit_status(), 2);
        assert_eq!(config.exit_status(), 3);
        assert_eq!(missing.exit_status(), 4);
    }

    #[test]
    fn messages_name_the_file_and_entry() {
        let missing = BumpError::MissingEntry {
            entry: "appVersion".into(),
            path: "pkg.json".into(),
        };
        let rendered = missing.to_string();
        assert!(rendered.contains("appVersion"));
        assert!(rendered.contains("pkg.json"));
    }
}
