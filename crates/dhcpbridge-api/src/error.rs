use thiserror::Error;

/// Result code the native server reports when a reservation already exists
/// for the requested address. Creation-time classification hinges on it.
pub const ERR_RESERVED_IP_EXISTS: u32 = 20_022;

/// Top-level error type for the `dhcpbridge-api` crate.
///
/// Covers both failure modes a native call can produce: the server
/// answered with a management result code, or the connection broke before
/// a result code existed. `dhcpbridge-core` translates the codes it can
/// disambiguate and surfaces the rest unmodified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The native server rejected the call with a management result code.
    #[error("native server call failed (code {code}): {message}")]
    Server { code: u32, message: String },

    /// The connection failed before the server produced a result code.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Convenience constructor for a server-reported failure.
    pub fn server(code: u32, message: impl Into<String>) -> Self {
        Self::Server {
            code,
            message: message.into(),
        }
    }

    /// The native result code, when the server produced one.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Server { code, .. } => Some(*code),
            Self::Transport(_) => None,
        }
    }

    /// `true` when the server reported a duplicate reservation.
    pub fn is_duplicate_reservation(&self) -> bool {
        self.code() == Some(ERR_RESERVED_IP_EXISTS)
    }
}
