use std::fmt;

/// Failures surfaced by the task and reminder layer.
///
/// Task and manager operations never fail on their own input; errors come
/// from writing output, reading config, or picking an unknown reminder
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidInput(String),
    InvalidData(String),
    Io(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) | Self::InvalidData(message) | Self::Io(message) => {
                message
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_joins_code_and_message() {
        let err = AppError::invalid_input("unknown reminder channel 'fax'");
        assert_eq!(
            err.to_string(),
            "invalid_input - unknown reminder channel 'fax'"
        );
    }

    #[test]
    fn io_errors_convert_to_io_code() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = AppError::from(io);
        assert_eq!(err.code(), "io_error");
        assert_eq!(err.message(), "pipe closed");
    }
}
