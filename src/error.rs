//! Error type surfaced by the writer.

use std::io;

use thiserror::Error;

/// Errors returned by [`Writer::write_once`](crate::Writer::write_once).
///
/// Every failure is returned synchronously to the caller; nothing is logged,
/// retried, or swallowed internally, and there is no fallback transport.
/// Retrying, dropping, or escalating is the caller's decision.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The configured transport is neither `tcp` nor `udp`. No socket is
    /// opened.
    #[error("unsupported transport {0:?}: expected \"tcp\" or \"udp\"")]
    UnsupportedTransport(String),
    /// The embedded root certificate failed to parse. This indicates a
    /// packaging defect, not a runtime input error; no connection is
    /// attempted.
    #[error("failed to parse the embedded root certificate")]
    CertificateParse(#[source] native_tls::Error),
    /// The connection could not be established (resolution, dial, or TLS
    /// handshake failure).
    #[error("failed to connect to {address}")]
    Dial {
        address: String,
        #[source]
        source: io::Error,
    },
    /// The connection was established but the write failed.
    #[error("write to {address} failed")]
    Write {
        address: String,
        #[source]
        source: io::Error,
    },
}

impl From<WriteError> for io::Error {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::UnsupportedTransport(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            _ => io::Error::other(err),
        }
    }
}
