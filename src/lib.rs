//! Send logs to Papertrail (<https://papertrailapp.com/>).
//!
//! [`Writer`] dials `{server}.papertrailapp.com:{port}` afresh for every
//! call, writes the payload once, and closes the connection before
//! returning. There is no batching, buffering, retry, or framing: callers
//! compose payloads themselves, typically one syslog-formatted line per
//! call, and decide what to do when a write fails.
//!
//! `Writer` implements [`std::io::Write`], so it can sit underneath any
//! line-oriented logging facade:
//!
//! ```no_run
//! use std::io::Write;
//!
//! use papertrail::{Transport, Writer, WriterConfig};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut writer = Writer::new(WriterConfig::new(12345, Transport::Tcp));
//! let written = writer.write(b"<22>Jan  1 00:00:00 host app: hello\n")?;
//! println!("number of bytes written: {written}");
//! # Ok(())
//! # }
//! ```
//!
//! The TCP transport wraps the stream in TLS and authenticates the server
//! against a root certificate embedded in the crate, so no system trust
//! store is consulted. The UDP transport is fire-and-forget: a successful
//! send only means the datagram left the local socket.

mod config;
mod error;
mod transport;
mod trust;
mod writer;


pub use config::{DEFAULT_SERVER, PAPERTRAIL_DOMAIN, TlsOptions, Transport, TransportSpec, WriterConfig};
pub use error::WriteError;
pub use writer::Writer;
