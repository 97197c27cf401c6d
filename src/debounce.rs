//! Trailing-edge debouncing with one pending task per input channel.
//!
//! `schedule` hands out a [`Ticket`]; whoever runs timers sleeps for
//! `ticket.delay` and presents the ticket back through [`Debouncer::fire`].
//! A newer schedule on the same channel cancels the older ticket, so only
//! the last event of a burst takes effect.

use crate::cancellation::CancellationToken;
use crate::settings::Scope;
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    FontFamily(Scope),
    FontWeight(Scope),
    Persist,
    ExportFeedback,
    ImportFeedback,
    RejectedFontFlash,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub channel: Channel,
    pub delay: Duration,
    token: CancellationToken,
}

impl Ticket {
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }
}

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: HashMap<Channel, CancellationToken>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `channel`, superseding whatever was pending on it.
    pub fn schedule(&mut self, channel: Channel, delay: Duration) -> Ticket {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.insert(channel, token.clone()) {
            previous.cancel();
            trace!(?channel, "Superseded pending debounce");
        }
        Ticket {
            channel,
            delay,
            token,
        }
    }

    /// Consume an elapsed ticket. Returns `true` when it is still the latest
    /// one for its channel and should take effect.
    pub fn fire(&mut self, ticket: &Ticket) -> bool {
        if !ticket.is_live() {
            return false;
        }
        ticket.token.cancel();
        self.pending.remove(&ticket.channel);
        true
    }

    pub fn cancel(&mut self, channel: Channel) {
        if let Some(token) = self.pending.remove(&channel) {
            token.cancel();
        }
    }

    pub fn is_pending(&self, channel: Channel) -> bool {
        self.pending.contains_key(&channel)
    }
}
