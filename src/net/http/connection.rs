use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::{String, Vec};

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        ResponseHeaders,
        TargetWriter as _,
        TextEncoding,
        parse_request_line,
        read_head,
    },
};

const HEAD_BUFFER_SIZE: usize = 512;
const TARGET_MAX_LEN: usize = 128;
const STREAM_CHUNK_SIZE: usize = 1024;

/// HTTP connection context
pub(crate) struct HttpConnection<'a> {
    pub method: HttpMethod,
    /// Request target: path and query string
    pub target: String<TARGET_MAX_LEN>,

    socket: TcpSocket<'a>,
    header_buf: Vec<u8, HEAD_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Read the request head from an accepted socket.
    ///
    /// The socket is aborted when no valid request line arrives.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        match read_request(&mut socket).await {
            Ok((method, target)) => Ok(Self {
                method,
                target,
                socket,
                header_buf: Vec::new(),
            }),
            Err(e) => {
                abort_socket(&mut socket).await;
                Err(e)
            }
        }
    }

    /// Get request method and target
    pub(crate) fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.target.as_str())
    }

    /// Write the headers to the connection
    pub(crate) async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut self.header_buf)?;
        self.socket.write_all(self.header_buf.as_slice()).await?;
        self.socket.flush().await?;
        Ok(())
    }

    /// Write the body to the connection
    pub(crate) async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.socket.write_all(chunk).await?;
        }
        self.socket.flush().await?;
        Ok(())
    }

    /// Write an HTML document with a success status
    pub(crate) async fn write_html(&mut self, html: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(html.len());
        self.write_headers(&ResponseHeaders::success().with_content(content))
            .await?;
        self.write_body(html.as_bytes()).await
    }

    /// Write a short plain text response with the given headers
    pub(crate) async fn write_text(
        &mut self,
        headers: ResponseHeaders,
        text: &str,
    ) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextPlain)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(text.len());
        self.write_headers(&headers.with_content(content)).await?;
        self.write_body(text.as_bytes()).await
    }

    /// Close the write half and wait until the peer has seen the FIN
    pub(crate) async fn close(mut self) -> HttpResult {
        self.socket.close();
        self.socket.flush().await?;
        Ok(())
    }

    /// Reset the connection after a failed exchange
    pub(crate) async fn abort(mut self) {
        abort_socket(&mut self.socket).await;
    }
}

async fn read_request(
    socket: &mut TcpSocket<'_>,
) -> Result<(HttpMethod, String<TARGET_MAX_LEN>), Error> {
    let mut buf = [0u8; HEAD_BUFFER_SIZE];
    let len = read_head(&mut buf, socket).await?;
    if len == 0 {
        return Err(Error::Closed);
    }

    let head = core::str::from_utf8(&buf[..len]).map_err(|_| Error::Parse)?;
    let (method, raw_target) = parse_request_line(head).ok_or(Error::Parse)?;

    let mut target = String::new();
    target.push_str(raw_target).map_err(|()| Error::Parse)?;
    Ok((method, target))
}

async fn abort_socket(socket: &mut TcpSocket<'_>) {
    socket.abort();
    // Waits until the RST is out; the peer may already be gone
    let _ = socket.flush().await;
}
