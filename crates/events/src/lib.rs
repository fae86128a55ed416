//! Domain events emitted from business operations.

use chrono::{DateTime, Utc};

/// A fact recorded by an aggregate.
///
/// Events are immutable, append-only and carry their own schema version so
/// a stored history can be replayed after the payload shape changes.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable dotted name, e.g. `"accounts.account.deposited"`.
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// Business time of the fact.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Name and schema version together, e.g. `"accounts.account.locked@v1"`.
    fn qualified_type(&self) -> String {
        format!("{}@v{}", self.event_type(), self.version())
    }
}
