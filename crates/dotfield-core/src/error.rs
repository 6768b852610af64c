use thiserror::Error;

/// Rejections produced when a settings-panel value is applied to [`crate::FieldConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("setting `{key}` must be finite, got {value}")]
    NonFinite { key: String, value: f64 },
}
