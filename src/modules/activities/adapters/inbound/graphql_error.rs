use std::fmt::Display;

use async_graphql::{Error, ErrorExtensions};

use crate::modules::activities::application::errors::ApplicationError;

/// Log a backend failure and hand the client a generic `INTERNAL` error instead.
pub fn internal_error(error: impl Display) -> Error {
    tracing::error!(%error, "activity registry failure");
    Error::new("Internal server error")
        .extend_with(|_, extensions| extensions.set("code", "INTERNAL"))
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        let code = match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::Conflict(_) => "CONFLICT",
            ApplicationError::Registry(error) => return internal_error(error),
        };
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", code))
    }
}
