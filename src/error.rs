//! Crate-level error type.

use std::io;
use std::path::PathBuf;

use crate::align::AlignmentError;
use crate::color::ColorError;
use crate::palette::PaletteError;
use crate::theme::ThemeError;
use crate::widget::{ConfigError, StateError};

/// Any error the toolkit can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("failed to read app config {}: {source}", .path.display())]
    ConfigIo { path: PathBuf, source: io::Error },
    #[error("invalid app config: {0}")]
    ConfigToml(#[from] toml::de::Error),
}

/// Shorthand for `Result<T, buttonup::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_errors_convert_transparently() {
        let err: Error = ConfigError::NegativeDimension { field: "width", value: -1 }.into();
        assert_eq!(err.to_string(), "width must be >= 0, not -1");
        assert!(matches!(err, Error::Config(_)));

        let err: Error = PaletteError::DuplicateKeyword("<r>".into()).into();
        assert_eq!(err.to_string(), "keyword '<r>' is already in use");
    }

    #[test]
    fn question_mark_lifts_widget_errors() {
        fn parse(name: &str) -> Result<crate::widget::InteractionState> {
            Ok(name.parse()?)
        }
        assert!(parse("pressed").is_ok());
        assert!(matches!(parse("held"), Err(Error::State(_))));
    }
}
