//! Crate-level error type

use thiserror::Error;

use crate::certificate::CertificateError;
use crate::clipboard::ClipboardError;
use crate::config::ConfigError;
use crate::illustration::RegistryError;
use crate::palette::PaletteError;
use crate::tokens::TokenError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Illustration(#[from] RegistryError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: Error = TokenError::UnknownFormat("yaml".into()).into();
        assert!(err.to_string().starts_with("Unknown output format 'yaml'"));
        let err: Error = RegistryError::NotFound { key: "nope".into() }.into();
        assert_eq!(err.to_string(), "unknown illustration: nope");
    }
}
