use crate::core::KvError;

/// Uniform outcome of a submitted command.
///
/// Every operation resolves to either a success carrying a (possibly empty)
/// payload or a failure carrying a human-readable message. The host decides
/// how each is displayed; the engine never prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success { payload: String },
    Failure { message: String },
}

impl CommandOutcome {
    pub fn success(payload: impl Into<String>) -> Self {
        CommandOutcome::Success {
            payload: payload.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        CommandOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Payload of a success; `None` for failures.
    pub fn payload(&self) -> Option<&str> {
        match self {
            CommandOutcome::Success { payload } => Some(payload.as_str()),
            CommandOutcome::Failure { .. } => None,
        }
    }

    /// Message of a failure; `None` for successes.
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandOutcome::Success { .. } => None,
            CommandOutcome::Failure { message } => Some(message.as_str()),
        }
    }
}

impl From<KvError> for CommandOutcome {
    fn from(err: KvError) -> Self {
        CommandOutcome::failure(err.to_string())
    }
}
