//! Quote reply model and line encoding.
//!
//! A `Quote` is the payload sent back for one request. It contains a synthetic
//! price, the requested symbol and user, a millisecond UTC timestamp and a random
//! key, encoded as a comma-separated line the way the classic quote server does.

use chrono::Utc;
use quote_common::Symbol;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of the random key attached to every quote.
pub const CRYPTOKEY_LEN: usize = 44;

/// Synthetic quote for a single symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Quoted price.
    pub price: f64,
    /// Symbol the quote was requested for.
    pub symbol: Symbol,
    /// User the quote was requested by.
    pub user: String,
    /// UTC timestamp in milliseconds since Unix epoch.
    pub timestamp: u64,
    /// Opaque random key.
    pub cryptokey: String,
}

impl Quote {
    /// Generate a fresh quote for `symbol` requested by `user`.
    ///
    /// The price is sampled uniformly from `[1.00, 1000.00)` and rounded to cents.
    pub fn generate(symbol: Symbol, user: &str) -> Quote {
        let mut rng = rand::rng();
        let price: f64 = rng.random_range(1.0..1000.0);
        let cryptokey: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(CRYPTOKEY_LEN)
            .map(char::from)
            .collect();

        Quote {
            price: (price * 100.0).round() / 100.0,
            symbol,
            user: user.to_string(),
            timestamp: Utc::now().timestamp_millis() as u64,
            cryptokey,
        }
    }

    /// Encode the quote as a newline-terminated reply line.
    pub fn to_line(&self) -> String {
        format!(
            "{:.2},{},{},{},{}\n",
            self.price, self.symbol, self.user, self.timestamp, self.cryptokey
        )
    }
}
