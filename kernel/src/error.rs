use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    /// Request payload failed shape validation. Carries the ordered,
    /// client-facing violation messages.
    Validation(Vec<String>),
    /// The addressed row does not exist. Carries the client-facing message.
    NotFound(String),
    /// A uniqueness constraint rejected the write.
    Conflict,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(messages) => {
                write!(f, "Payload rejected with {} violation(s)", messages.len())
            }
            KernelError::NotFound(message) => write!(f, "{message}"),
            KernelError::Conflict => write!(f, "Uniqueness constraint violated"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
