//! Command fan-out to connected real-time listeners

use tokio::sync::broadcast;

use crate::domain::Command;

/// Listeners that fall this far behind start dropping the oldest
/// commands; delivery is best-effort.
const CHANNEL_CAPACITY: usize = 64;

/// Explicit listener registry for real-time command fan-out.
///
/// Wraps a [`tokio::sync::broadcast`] channel: every live receiver gets a
/// copy of each broadcast command, listeners subscribing after a broadcast
/// never see it retroactively, and disconnected listeners are dropped from
/// the registry by the channel itself. Clones share the same registry.
#[derive(Debug, Clone)]
pub struct CommandBroadcaster {
    tx: broadcast::Sender<Command>,
}

impl CommandBroadcaster {
    /// Create a registry with no listeners
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Register a new listener. The receiver only observes commands
    /// broadcast after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Command> {
        self.tx.subscribe()
    }

    /// Fan a command out to every connected listener, best-effort.
    ///
    /// Returns the number of listeners the command was queued for; zero
    /// listeners is not an error.
    pub fn broadcast(&self, command: &Command) -> usize {
        self.tx.send(command.clone()).unwrap_or(0)
    }

    /// Number of currently connected listeners
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CommandBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
