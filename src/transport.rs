//! Socket establishment and the single write each call performs.

use std::{
    io::{self, Write},
    net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream, ToSocketAddrs, UdpSocket},
};

use log::debug;
use native_tls::{TlsConnector, TlsStream};

use crate::{
    config::{Transport, WriterConfig},
    error::WriteError,
    trust,
};

/// A freshly established connection, closed when dropped.
pub(crate) enum Connection {
    /// TLS-wrapped TCP stream.
    Tls(Box<TlsStream<TcpStream>>),
    /// Connected UDP socket.
    Udp(UdpSocket),
}

impl Connection {
    /// Perform exactly one write and report the transport's byte count
    /// as-is.
    ///
    /// Short writes are not retried, and a UDP send succeeding says nothing
    /// about remote receipt.
    pub(crate) fn write(&mut self, payload: &[u8]) -> io::Result<usize> {
        match self {
            Connection::Tls(stream) => stream.write(payload),
            Connection::Udp(socket) => socket.send(payload),
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // Best-effort close_notify so the peer observes a clean TLS EOF.
        if let Connection::Tls(stream) = self {
            let _ = stream.shutdown();
        }
    }
}

/// Bind an ephemeral socket in the resolved peer's address family and
/// connect it, trying each resolved address in turn.
fn connect_udp(address: &str) -> io::Result<UdpSocket> {
    let mut last_err = None;
    for peer in address.to_socket_addrs()? {
        let local: SocketAddr = match peer {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        match UdpSocket::bind(local).and_then(|socket| socket.connect(peer).map(|()| socket)) {
            Ok(socket) => return Ok(socket),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("no addresses resolved for {address}"),
        )
    }))
}

/// Establish exactly one connection for the resolved transport.
pub(crate) fn connect(
    transport: Transport,
    config: &WriterConfig,
) -> Result<Connection, WriteError> {
    let address = config.address();
    match transport {
        Transport::Udp => {
            let socket = connect_udp(&address).map_err(|source| WriteError::Dial {
                address: address.clone(),
                source,
            })?;
            debug!("connected udp socket to {address}");
            Ok(Connection::Udp(socket))
        }
        Transport::Tcp => {
            let root = trust::trusted_root().map_err(WriteError::CertificateParse)?;
            let mut builder = TlsConnector::builder();
            builder.add_root_certificate(root);
            builder.disable_built_in_roots(true);
            if config.tls.insecure_skip_verify {
                builder.danger_accept_invalid_certs(true);
                builder.danger_accept_invalid_hostnames(true);
            }
            let connector = builder.build().map_err(|err| WriteError::Dial {
                address: address.clone(),
                source: io::Error::other(err),
            })?;
            let stream = TcpStream::connect(address.as_str()).map_err(|source| {
                WriteError::Dial {
                    address: address.clone(),
                    source,
                }
            })?;
            let stream = connector
                .connect(&config.host(), stream)
                .map_err(|err| WriteError::Dial {
                    address: address.clone(),
                    source: io::Error::other(err),
                })?;
            debug!("established tls connection to {address}");
            Ok(Connection::Tls(Box::new(stream)))
        }
    }
}
