use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while running a match between two agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{player} selected column {column} but open columns are {open:?}")]
    IllegalColumn {
        player: &'static str,
        column: usize,
        open: Vec<usize>,
    },

    #[error("{player} returned no column on a live board")]
    NoColumnChosen { player: &'static str },

    #[error("game ended without an outcome")]
    MissingOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be > 0"
        );
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalColumn {
            player: Player::Red.name(),
            column: 9,
            open: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Red selected column 9 but open columns are [0, 1, 2]"
        );

        let err = MatchError::NoColumnChosen {
            player: Player::Yellow.name(),
        };
        assert_eq!(err.to_string(), "Yellow returned no column on a live board");
    }
}
