use std::future::Future;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle for one request issued by a view.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    token: CancellationToken,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

struct Latest {
    seq: u64,
    token: CancellationToken,
}

/// Keeps at most one authoritative request per view.
///
/// Starting a request supersedes and cancels the previous one, so a slow
/// response for an old id can never overwrite the result for a newer id.
pub struct LatestRequestGuard {
    latest: Mutex<Latest>,
}

impl LatestRequestGuard {
    pub fn new() -> Self {
        Self {
            latest: Mutex::new(Latest {
                seq: 0,
                token: CancellationToken::new(),
            }),
        }
    }

    pub fn begin(&self) -> RequestTicket {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.token.cancel();
        latest.seq += 1;
        latest.token = CancellationToken::new();
        RequestTicket {
            seq: latest.seq,
            token: latest.token.clone(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.seq == ticket.seq && !ticket.token.is_cancelled()
    }

    /// Drives `fut` for `ticket`. `None` means the result was discarded:
    /// the ticket was superseded or cancelled before the result arrived.
    pub async fn run<F>(&self, ticket: &RequestTicket, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        let output = tokio::select! {
            biased;
            _ = ticket.token.cancelled() => {
                debug!(seq = ticket.seq, "Request cancelled before completion");
                return None;
            }
            output = fut => output,
        };

        if self.is_current(ticket) {
            Some(output)
        } else {
            debug!(seq = ticket.seq, "Discarding stale response");
            None
        }
    }

    /// The view went away: cancel whatever is in flight.
    pub fn cancel_all(&self) {
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.token.cancel();
    }
}

impl Default for LatestRequestGuard {
    fn default() -> Self {
        Self::new()
    }
}
