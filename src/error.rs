pub type LauncherResult<T> = Result<T, LauncherError>;

#[derive(thiserror::Error, Debug)]
pub enum LauncherError {
    /// An image, text or off-screen target could not be materialized.
    #[error("asset unavailable: {key}: {reason}")]
    AssetUnavailable { key: String, reason: String },

    #[error("initialization failure: {0}")]
    Initialization(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("invalid system table: {0}")]
    Systems(String),
}

impl LauncherError {
    pub fn asset(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::AssetUnavailable {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn initialization(msg: impl ToString) -> Self {
        Self::Initialization(msg.to_string())
    }

    pub fn render(msg: impl ToString) -> Self {
        Self::Render(msg.to_string())
    }

    pub fn systems(msg: impl Into<String>) -> Self {
        Self::Systems(msg.into())
    }

    #[cfg(test)]
    pub fn is_asset_unavailable(&self) -> bool {
        matches!(self, Self::AssetUnavailable { .. })
    }
}
