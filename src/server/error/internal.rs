use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user role is not one of the known roles.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{role}' stored for user {email}")]
    UnknownRole {
        /// Email of the user record
        email: String,
        /// The stored role value
        role: String,
    },

    /// Failure to sign an identity token.
    #[error("Failed to sign identity token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// The server could not bind its listening socket.
    #[error("Failed to bind port {0}: {1}")]
    Bind(u16, #[source] std::io::Error),

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
