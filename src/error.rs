use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Everything else (unreadable files, unlistable
/// subdirectories, failed text sampling) is recovered locally and never
/// reaches this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: root directory not found", path.display())]
    RootNotFound { path: PathBuf },

    #[error("{}: not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: failed to read config", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid config: {message}", path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("failed to write {}", path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_not_found_names_the_path() {
        let err = Error::RootNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        assert_eq!(err.to_string(), "/no/such/dir: root directory not found");
    }

    #[test]
    fn config_invalid_includes_message() {
        let err = Error::ConfigInvalid {
            path: PathBuf::from("treepress.json"),
            message: "`extensions` must be an array of strings".into(),
        };
        assert!(err.to_string().contains("invalid config"));
        assert!(err.to_string().contains("extensions"));
    }
}
