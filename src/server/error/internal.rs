use thiserror::Error;

/// Internal failures that are not caused by the request.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// The HTTP listener could not be bound or stopped with an I/O error.
    #[error("HTTP server failure: {0}")]
    Server(#[from] std::io::Error),
}
