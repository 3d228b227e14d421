//! The unit of work dispatched on every tick.
//!
//! A `RequestTask` opens a fresh TCP connection, writes one request line, reads
//! one response and prints it. Every failure is returned to the caller, which
//! treats it as fatal for the whole run. The connection is owned by the task
//! and closed when it goes out of scope, on success and error paths alike.
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use quote_common::protocol::{RESPONSE_BUF_LEN, clean_response, request_line};
use quote_common::{QuoteError, Result, Stage, Symbol};

use crate::config::Config;
use crate::stats::Stats;

/// A single connect/send/read cycle against the quote server.
pub struct RequestTask {
    endpoint: SocketAddr,
    config: Arc<Config>,
    stats: Arc<Stats>,
}

impl RequestTask {
    /// Create a task for `endpoint` that reports into `stats`.
    pub fn new(endpoint: SocketAddr, config: Arc<Config>, stats: Arc<Stats>) -> Self {
        Self {
            endpoint,
            config,
            stats,
        }
    }

    /// Fetch one quote, print it to stdout and count it.
    pub fn run(&self) -> Result<()> {
        let quote = self.fetch()?;
        println!("{}", quote);
        self.stats.record_quote();
        Ok(())
    }

    /// Send a random request and return the cleaned response.
    ///
    /// Counts the request once the write succeeds; the quote itself is counted by [`Self::run`].
    pub fn fetch(&self) -> Result<String> {
        let symbol = Symbol::random(&mut rand::rng());
        let request = request_line(&symbol, &self.config.user);

        let mut stream = TcpStream::connect_timeout(&self.endpoint, self.config.io_deadline)
            .map_err(|e| QuoteError::from_stage(Stage::Connect, self.endpoint, e))?;
        let deadline = Instant::now() + self.config.io_deadline;

        stream
            .set_write_timeout(Some(self.remaining(deadline, Stage::Send)?))
            .and_then(|_| stream.write_all(request.as_bytes()))
            .map_err(|e| QuoteError::from_stage(Stage::Send, self.endpoint, e))?;
        self.stats.record_request();
        debug!("Sent {:?} to {}", request.trim_end(), self.endpoint);

        let mut buf = [0u8; RESPONSE_BUF_LEN];
        let size = stream
            .set_read_timeout(Some(self.remaining(deadline, Stage::Read)?))
            .and_then(|_| stream.read(&mut buf))
            .map_err(|e| QuoteError::from_stage(Stage::Read, self.endpoint, e))?;
        if size == 0 {
            return Err(QuoteError::Read {
                addr: self.endpoint,
                source: io::Error::from(io::ErrorKind::UnexpectedEof),
            });
        }

        Ok(clean_response(&buf[..size]))
    }

    /// Time left until `deadline`; an elapsed deadline fails `stage`.
    fn remaining(&self, deadline: Instant, stage: Stage) -> Result<Duration> {
        deadline
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
            .ok_or(QuoteError::DeadlineExceeded {
                stage,
                addr: self.endpoint,
            })
    }
}
