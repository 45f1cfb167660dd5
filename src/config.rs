//! Configuration consumed by [`Writer`](crate::Writer).
//!
//! Values are plain data with public fields plus `with_*` builders for the
//! common overrides. Nothing is validated at construction time: an
//! unrecognised transport only surfaces once a write is attempted.

use std::{convert::Infallible, str::FromStr};

use serde::Deserialize;

use crate::error::WriteError;

/// Sentinel label substituted when [`WriterConfig::server`] is empty.
pub const DEFAULT_SERVER: &str = "logs";
/// Domain every Papertrail log destination lives under.
pub const PAPERTRAIL_DOMAIN: &str = "papertrailapp.com";

/// Transports recognised by the writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// TLS over TCP, authenticated against the embedded root certificate.
    Tcp,
    /// Plain UDP datagrams. A successful send only reflects local
    /// buffering, never remote receipt.
    Udp,
}

/// Transport selection as it arrives from configuration.
///
/// Typed callers pass a [`Transport`] directly. Values read from untyped
/// sources (strings, deserialised configuration) keep their raw spelling and
/// are only checked on first use, when the writer resolves the spec into a
/// concrete transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportSpec {
    /// One of the recognised transports.
    Known(Transport),
    /// Anything else; rejected at write time, before any socket is opened.
    Unrecognised(String),
}

impl TransportSpec {
    fn parse(raw: &str) -> Self {
        match raw {
            "tcp" => TransportSpec::Known(Transport::Tcp),
            "udp" => TransportSpec::Known(Transport::Udp),
            other => TransportSpec::Unrecognised(other.to_owned()),
        }
    }

    /// Resolve to a concrete transport, rejecting unrecognised values.
    pub fn resolve(&self) -> Result<Transport, WriteError> {
        match self {
            TransportSpec::Known(transport) => Ok(*transport),
            TransportSpec::Unrecognised(raw) => {
                Err(WriteError::UnsupportedTransport(raw.clone()))
            }
        }
    }
}

impl From<Transport> for TransportSpec {
    fn from(transport: Transport) -> Self {
        TransportSpec::Known(transport)
    }
}

impl FromStr for TransportSpec {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Infallible> {
        Ok(Self::parse(raw))
    }
}

impl<'de> Deserialize<'de> for TransportSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// TLS behaviour toggles.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TlsOptions {
    /// Skip certificate and hostname validation when true (intended for
    /// tests against self-signed endpoints).
    pub insecure_skip_verify: bool,
}

/// Configuration for [`Writer`](crate::Writer).
#[derive(Clone, Debug, Deserialize)]
pub struct WriterConfig {
    /// Destination port, as shown in the Papertrail destination settings.
    pub port: u16,
    /// Transport used to reach the destination.
    pub transport: TransportSpec,
    /// Label prepended to the Papertrail domain; empty selects
    /// [`DEFAULT_SERVER`].
    #[serde(default)]
    pub server: String,
    /// Replacement for the composed host, so tests can point the writer at a
    /// local listener. The port still comes from `port`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// TLS behaviour toggles.
    #[serde(default)]
    pub tls: TlsOptions,
}

impl WriterConfig {
    /// Create a configuration targeting `port` over `transport`.
    pub fn new(port: u16, transport: impl Into<TransportSpec>) -> Self {
        Self {
            port,
            transport: transport.into(),
            server: String::new(),
            endpoint: None,
            tls: TlsOptions::default(),
        }
    }

    /// Set the server label used to compose the destination host.
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Point the writer at an explicit host instead of the composed one.
    pub fn with_endpoint(mut self, host: impl Into<String>) -> Self {
        self.endpoint = Some(host.into());
        self
    }

    /// Toggle certificate validation (intended for tests).
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.tls.insecure_skip_verify = skip;
        self
    }

    /// Destination host, substituting the default label when `server` is
    /// empty.
    pub fn host(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }
        let label = if self.server.is_empty() {
            DEFAULT_SERVER
        } else {
            self.server.as_str()
        };
        format!("{label}.{PAPERTRAIL_DOMAIN}")
    }

    /// Destination address in `host:port` form, bracketing IPv6 literals so
    /// the host stays resolvable.
    pub(crate) fn address(&self) -> String {
        let host = self.host();
        if host.contains(':') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }
}
