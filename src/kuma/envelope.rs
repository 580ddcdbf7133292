//! Uniform success/error outcome of every KUMA API call

use std::fmt;

use crate::error::{KumaError, Result};

/// Outcome status of a single API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// Result envelope of an API call
///
/// `Ok` carries no details; `Error` always carries a human-readable
/// diagnostic, either the transport error text or
/// `"Status code: <code>. Details: <body>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Ok,
    Error(String),
}

impl Envelope {
    /// Envelope for an HTTP status code and the response body text
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            200 | 204 => Envelope::Ok,
            code => Envelope::Error(format!("Status code: {}. Details: {}", code, body)),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Envelope::Ok => Status::Ok,
            Envelope::Error(_) => Status::Error,
        }
    }

    /// Diagnostic message, empty on success
    pub fn details(&self) -> &str {
        match self {
            Envelope::Ok => "",
            Envelope::Error(details) => details,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Ok)
    }
}

/// Envelope plus payload returned by every client operation
///
/// The payload is only trustworthy when the envelope is `Ok`. For paginated
/// calls an `Error` envelope comes with the records of the pages fetched
/// before the failing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub envelope: Envelope,
    pub payload: T,
}

impl<T> Outcome<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            envelope: Envelope::Ok,
            payload,
        }
    }

    pub fn new(envelope: Envelope, payload: T) -> Self {
        Self { envelope, payload }
    }

    pub fn is_ok(&self) -> bool {
        self.envelope.is_ok()
    }

    /// Transform the payload, keeping the envelope
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            envelope: self.envelope,
            payload: f(self.payload),
        }
    }

    /// Convert into a `Result`, dropping the payload of a failed call
    pub fn into_result(self) -> Result<T> {
        match self.envelope {
            Envelope::Ok => Ok(self.payload),
            Envelope::Error(details) => Err(KumaError::Request(details)),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Failed call with an empty payload
    pub fn error(details: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::Error(details.into()),
            payload: T::default(),
        }
    }
}
