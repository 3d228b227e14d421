//! Rate-paced request dispatcher.
//!
//! The `Dispatcher` owns the run loop of a load test. It multiplexes three
//! channels with crossbeam `select!`:
//!
//! - a `tick` channel firing every `delay`. Each tick spawns one new
//!   `RequestTask` on its own thread without waiting for earlier ones, so the
//!   number of requests in flight is unbounded under a slow server. The
//!   channel buffers a single tick, so ticks that fall due while the loop is
//!   stalled are dropped rather than queued. Every tick the loop does receive
//!   spawns a task.
//! - an `after` channel firing once at `length`, the expiry that ends the run.
//! - an unbounded outcome channel every task reports its result on. An error
//!   from any task ends the run immediately and is returned to the caller.
//!
//! The loop has two states, running and terminated, and a single transition on
//! expiry or on the first task error. By default the counters are read right
//! after expiry, while late tasks may still be counting. With `drain` enabled
//! the dispatcher first waits for every dispatched task to report, which closes
//! that race at the cost of a run that can outlast `length` by up to one I/O
//! deadline.
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, RecvError, Sender, after, select, tick, unbounded};
use log::{debug, info};
use quote_common::{QuoteError, Result};

use crate::config::Config;
use crate::request::RequestTask;
use crate::stats::{Stats, StatsSnapshot};

type Outcome = Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Terminated,
}

/// Drives one load test run against a resolved endpoint.
pub struct Dispatcher {
    config: Arc<Config>,
    endpoint: SocketAddr,
    stats: Arc<Stats>,
    outcome_tx: Sender<Outcome>,
    outcome_rx: Receiver<Outcome>,
    dispatched: u64,
    in_flight: u64,
}

impl Dispatcher {
    /// Create a dispatcher for `endpoint` with fresh counters.
    pub fn new(config: Config, endpoint: SocketAddr) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            config: Arc::new(config),
            endpoint,
            stats: Arc::new(Stats::new()),
            outcome_tx,
            outcome_rx,
            dispatched: 0,
            in_flight: 0,
        }
    }

    /// Counters shared with the request tasks; readable while the run is in progress.
    pub fn stats(&self) -> Arc<Stats> {
        Arc::clone(&self.stats)
    }

    /// Run until the configured length elapses, then read the counters.
    ///
    /// Returns the first error reported by any request task.
    pub fn run(mut self) -> Result<StatsSnapshot> {
        info!(
            "Requesting quotes from {} every {:?} for {:?}",
            self.endpoint, self.config.delay, self.config.length
        );
        let ticks = tick(self.config.delay);
        let expiry = after(self.config.length);
        let outcomes = self.outcome_rx.clone();

        let mut state = RunState::Running;
        while state == RunState::Running {
            select! {
                recv(ticks) -> _ => self.dispatch()?,
                recv(outcomes) -> msg => self.settle(msg)?,
                recv(expiry) -> _ => state = RunState::Terminated,
            }
        }
        drop(ticks);
        info!(
            "Run expired after {} dispatched requests, {} still in flight",
            self.dispatched, self.in_flight
        );

        if self.config.drain {
            self.drain()?;
        }
        Ok(self.stats.snapshot(self.config.length))
    }

    /// Spawn one request task; never waits for it.
    fn dispatch(&mut self) -> Result<()> {
        let task = RequestTask::new(
            self.endpoint,
            Arc::clone(&self.config),
            Arc::clone(&self.stats),
        );
        let outcome_tx = self.outcome_tx.clone();

        thread::Builder::new()
            .name(format!("request-{}", self.dispatched))
            .spawn(move || {
                // The run loop may already be gone; nothing left to report to.
                let _ = outcome_tx.send(task.run());
            })?;

        self.dispatched += 1;
        self.in_flight += 1;
        debug!("Dispatched request #{}, {} in flight", self.dispatched, self.in_flight);
        Ok(())
    }

    /// Account for one finished task; a task error ends the run.
    fn settle(&mut self, msg: std::result::Result<Outcome, RecvError>) -> Result<()> {
        let outcome = msg.map_err(|e| QuoteError::ChannelRecv(e.to_string()))?;
        self.in_flight = self.in_flight.saturating_sub(1);
        outcome
    }

    /// Wait for every dispatched task to report.
    fn drain(&mut self) -> Result<()> {
        if self.in_flight > 0 {
            info!("Draining {} in-flight requests before reporting", self.in_flight);
        }
        while self.in_flight > 0 {
            let msg = self.outcome_rx.recv();
            self.settle(msg)?;
        }
        Ok(())
    }
}
