//! Error types for model selection and customization.

use thiserror::Error;

/// Errors raised while selecting a model from the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested name is not registered.
    #[error("unknown model '{0}'")]
    UnknownModel(String),

    /// The selected model rejected its extra parameters.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised by a model while applying extra parameters.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An extra-parameter token could not be parsed into its target type.
    #[error("model '{model}': invalid extra parameter: {reason}")]
    InvalidExtraParameter {
        /// Registry name of the rejecting model
        model: &'static str,
        /// What failed to parse
        reason: String,
    },
}
