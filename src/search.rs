//! Stale-response suppression for food searches and debounce for barcode
//! scans.
//!
//! Searches race: the user types "a" then "ab", and the first response may
//! land last. [`SearchSession`] tags every issued search with a
//! monotonically increasing ticket and only accepts the response carrying
//! the latest one. Barcode scanners fire repeatedly while a code is in
//! frame; [`ScanGate`] accepts the first trigger and ignores the rest until
//! the lookup completes or a cooldown elapses.

use std::time::{Duration, Instant};

use crate::models::Food;

/// Identifies one issued search; only the latest ticket's response is
/// accepted.
pub type SearchTicket = u64;

/// Tracks the latest issued food search and the results currently shown.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: SearchTicket,
    results: Vec<Food>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new search, superseding any still in flight.
    pub fn begin(&mut self) -> SearchTicket {
        self.latest += 1;
        self.latest
    }

    /// Whether a response for this ticket would still be applied.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket == self.latest
    }

    /// Applies results if the ticket is still the latest; stale responses
    /// are discarded and leave the visible results untouched.
    pub fn accept(&mut self, ticket: SearchTicket, results: Vec<Food>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale search response (ticket {})", ticket);
            return false;
        }
        self.results = results;
        true
    }

    /// The results of the newest accepted response.
    pub fn results(&self) -> &[Food] {
        &self.results
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

/// Debounces repeated scan triggers from a single physical barcode scan.
///
/// After a scan is accepted, further triggers are ignored until the
/// in-flight lookup completes or the cooldown elapses, whichever comes
/// first.
#[derive(Debug)]
pub struct ScanGate {
    cooldown: Duration,
    in_flight: bool,
    accepted_at: Option<Instant>,
}

impl ScanGate {
    /// Default cooldown between accepted scans.
    pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            in_flight: false,
            accepted_at: None,
        }
    }

    /// Tries to accept a scan trigger. Returns false while a previous scan
    /// is still being looked up and its cooldown has not elapsed.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            if let Some(accepted) = self.accepted_at {
                if accepted.elapsed() < self.cooldown {
                    return false;
                }
            }
        }
        self.in_flight = true;
        self.accepted_at = Some(Instant::now());
        true
    }

    /// Marks the in-flight lookup finished, reopening the gate.
    pub fn complete(&mut self) {
        self.in_flight = false;
        self.accepted_at = None;
    }
}

impl Default for ScanGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COOLDOWN)
    }
}
