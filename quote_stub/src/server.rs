use crate::model::mode::Mode;
use crate::model::quote::Quote;
use log::{debug, error, info, warn};
use quote_common::Result;
use quote_common::protocol::{RESPONSE_BUF_LEN, parse_request_line};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::thread;

/// TCP quote server stub that answers one request line per connection.
///
/// Each accepted connection is handled on its own thread, so a slow or silent
/// client never holds up the others. Malformed requests are logged and only the
/// offending connection is closed.
pub struct StubServer {
    /// The underlying TCP listening socket.
    listener: TcpListener,
    mode: Mode,
}

impl StubServer {
    /// Bind a new stub to `addr` (e.g., `0.0.0.0:4440`, or port `0` for an ephemeral port).
    pub fn bind<A: ToSocketAddrs>(addr: A, mode: Mode) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener, mode })
    }

    /// Address the stub is listening on.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Reply behaviour of this stub.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Blocking accept loop; spawns a handler thread per connection.
    pub fn serve(self) -> Result<()> {
        info!(
            "Stub quote server ({} mode) listening on {}",
            self.mode(),
            self.listener.local_addr()?
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let mode = self.mode();
                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, mode) {
                            error!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => error!("TCP connection error: {}", e),
            }
        }
        Ok(())
    }

    /// Run the accept loop on a background thread and return the bound address.
    pub fn spawn(self) -> Result<SocketAddr> {
        let addr = self.local_addr()?;
        thread::spawn(move || {
            if let Err(e) = self.serve() {
                error!("Stub server loop failed: {}", e);
            }
        });
        Ok(addr)
    }
}

fn handle_connection(mut stream: TcpStream, mode: Mode) -> Result<()> {
    let peer = stream.peer_addr()?;
    let mut buf = [0u8; RESPONSE_BUF_LEN];
    let size = stream.read(&mut buf)?;
    let line = String::from_utf8_lossy(&buf[..size]);
    debug!("Request from {}: {:?}", peer, line);

    let (symbol, user) = match parse_request_line(&line) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Dropping malformed request from {}: {}", peer, e);
            return Ok(());
        }
    };

    match mode {
        Mode::Quote => stream.write_all(Quote::generate(symbol, &user).to_line().as_bytes())?,
        Mode::Echo => stream.write_all(format!("{},{}\n", symbol, user).as_bytes())?,
        Mode::Silent => {
            // Hold the connection until the client gives up.
            while stream.read(&mut buf)? > 0 {}
        }
    }
    Ok(())
}
