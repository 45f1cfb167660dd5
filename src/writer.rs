//! Public writer type exported by the crate.

use std::io;

use crate::{config::WriterConfig, error::WriteError, transport};

/// Ships byte payloads to Papertrail, one connection per call.
///
/// Every call dials the configured destination afresh, writes the payload
/// once, and closes the connection before returning. Connections are never
/// reused, so concurrent calls are independent of each other; the only
/// shared state is the embedded read-only trust anchor, which needs no
/// synchronisation.
///
/// The writer adds no framing. Callers compose payloads, typically one
/// syslog-formatted line per call, before invoking it.
#[derive(Clone, Debug)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a writer for the given configuration.
    ///
    /// The configuration is not validated here; an unrecognised transport is
    /// reported by the first write.
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// The configuration this writer was built with.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Dial the destination, write `payload` once, and close the connection.
    ///
    /// Returns the byte count reported by the underlying transport. The
    /// connection is released on every exit path, including write failures,
    /// and no stage is retried: a single failure aborts the call.
    pub fn write_once(&self, payload: &[u8]) -> Result<usize, WriteError> {
        let transport = self.config.transport.resolve()?;
        let mut connection = transport::connect(transport, &self.config)?;
        connection
            .write(payload)
            .map_err(|source| WriteError::Write {
                address: self.config.address(),
                source,
            })
        // `connection` drops here, closing the socket.
    }
}

impl io::Write for Writer {
    fn write(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.write_once(payload).map_err(io::Error::from)
    }

    /// No-op: nothing is buffered between calls.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
