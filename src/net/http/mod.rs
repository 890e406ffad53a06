pub(crate) mod connection;
pub(crate) mod headers;
pub(crate) mod server;

use myrtio_ring_composer::{Fault, NetworkFault};

pub(crate) use connection::HttpConnection;
pub(crate) use headers::{HttpMethod, ResponseHeaders};
pub(crate) use server::{HttpHandler, HttpServer};

#[derive(Debug)]
pub enum Error {
    /// Peer reset or closed the connection
    Closed,
    /// Request head is not valid HTTP
    Parse,
    /// Response headers do not fit the buffer
    FormatHeaders,
}

impl Error {
    /// Supervisor view of the error, if it is a network fault
    pub(crate) fn as_fault(&self) -> Option<Fault> {
        match self {
            Error::Closed => Some(Fault::Network(NetworkFault::Transient)),
            Error::Parse | Error::FormatHeaders => None,
        }
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

impl From<embassy_net::tcp::Error> for Error {
    fn from(err: embassy_net::tcp::Error) -> Self {
        match err {
            embassy_net::tcp::Error::ConnectionReset => Error::Closed,
        }
    }
}

pub(crate) type HttpResult = Result<(), Error>;
