#[derive(Debug, Clone, PartialEq)]
pub enum SatError {
    /// The instance (or its text encoding) breaks a structural rule.
    InvalidInstance {
        line: Option<usize>,
        reason: String,
    },
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    InvalidSolution {
        reason: String,
    },
}

impl SatError {
    pub fn invalid_instance(reason: impl Into<String>) -> Self {
        SatError::InvalidInstance {
            line: None,
            reason: reason.into(),
        }
    }

    pub fn invalid_instance_at(line: usize, reason: impl Into<String>) -> Self {
        SatError::InvalidInstance {
            line: Some(line),
            reason: reason.into(),
        }
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        SatError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SatError::InvalidInstance {
                line: Some(line),
                reason,
            } => write!(f, "Invalid instance at line {}: {}", line, reason),
            SatError::InvalidInstance { line: None, reason } => {
                write!(f, "Invalid instance: {}", reason)
            }
            SatError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            SatError::InvalidSolution { reason } => write!(f, "Invalid solution: {}", reason),
        }
    }
}

impl std::error::Error for SatError {}
