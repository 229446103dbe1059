use thiserror::Error;

/// Failures raised while reading embedded presentation resources.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("resource not found: {0}")]
    Missing(String),

    #[error("unable to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed look and feel: {0}")]
    LookAndFeel(#[from] serde_json::Error),
}

/// Result of a best-effort setup step.
///
/// Presentation setup never fails outright: it either produced what was asked
/// for or fell back to a default and says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ready(T),
    Degraded(String),
}

impl<T> Outcome<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Degraded(_) => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Ready(_) => None,
            Outcome::Degraded(reason) => Some(reason),
        }
    }
}

impl<T> From<AssetError> for Outcome<T> {
    fn from(err: AssetError) -> Self {
        Outcome::Degraded(err.to_string())
    }
}
