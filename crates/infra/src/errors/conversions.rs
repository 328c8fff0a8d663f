//! Conversions from external transport errors into domain errors.

use reqwest::Error as HttpError;
use reqwest::StatusCode;
use socportal_domain::SocPortalError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SocPortalError);

impl From<InfraError> for SocPortalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SocPortalError> for InfraError {
    fn from(value: SocPortalError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return InfraError(SocPortalError::Network("HTTP request timed out".into()));
        }

        if value.is_connect() {
            return InfraError(SocPortalError::Network("HTTP connection failure".into()));
        }

        if value.is_decode() {
            return InfraError(SocPortalError::Api(format!(
                "failed to decode portal response: {value}"
            )));
        }

        match value.status() {
            Some(status) => InfraError(status_error(status)),
            None => InfraError(SocPortalError::Network(value.to_string())),
        }
    }
}

/// Map an HTTP status to the domain error the caller should see.
pub fn status_error(status: StatusCode) -> SocPortalError {
    let message = format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown status")
    );

    match status.as_u16() {
        401 | 403 => SocPortalError::Auth(message),
        404 => SocPortalError::NotFound(message),
        429 => SocPortalError::Network(message),
        400..=499 => SocPortalError::InvalidInput(message),
        _ => SocPortalError::Network(message),
    }
}
