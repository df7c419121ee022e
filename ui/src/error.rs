use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Site config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Locale error: {0}")]
    Locale(#[from] i18n_embed::I18nEmbedError),

    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
