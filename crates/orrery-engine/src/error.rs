/// Errors raised by the scene engine.
///
/// Everything the engine consumes is program-internal, so these are
/// programming errors surfaced immediately rather than clamped away.
#[derive(Debug)]
pub enum SceneError {
    /// Catalog lookup by name found nothing.
    NotFound { name: String },

    /// A generator or kinematics parameter is out of its domain
    /// (negative radius, zero sample count, inverted range, NaN).
    InvalidArgument { what: &'static str, value: f64 },

    /// Catalog data violates a structural invariant.
    InvalidCatalog { message: String },

    /// Catalog JSON could not be parsed or the frame could not be serialized.
    Json(serde_json::Error),
}

impl SceneError {
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        Self::InvalidArgument { what, value }
    }

    pub(crate) fn catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "No celestial body named '{}'", name),
            Self::InvalidArgument { what, value } => {
                write!(f, "Invalid argument: {} = {}", what, value)
            }
            Self::InvalidCatalog { message } => write!(f, "Invalid catalog: {}", message),
            Self::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reject negative or non-finite values.
pub(crate) fn ensure_non_negative(what: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(what, value))
    }
}

/// Reject non-finite bounds and `min > max`. Negative bounds are allowed.
pub(crate) fn ensure_range(what: &'static str, min: f64, max: f64) -> Result<(), SceneError> {
    if !min.is_finite() {
        return Err(SceneError::invalid(what, min));
    }
    if !max.is_finite() || min > max {
        return Err(SceneError::invalid(what, max));
    }
    Ok(())
}

/// Reject zero sample counts.
pub(crate) fn ensure_count(what: &'static str, count: usize) -> Result<(), SceneError> {
    if count == 0 {
        Err(SceneError::invalid(what, 0.0))
    } else {
        Ok(())
    }
}
