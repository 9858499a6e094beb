use thiserror::Error;

/// Errors that can arise while pricing or executing a repair.
///
/// Every rejection is terminal for its invocation; nothing is retried.
/// Each variant maps to a single user-visible notice via
/// [`MendError::message_key`].
#[derive(Debug, Error)]
pub enum MendError {
    /// Fatal at startup: no usable pricing/messages configuration.
    #[error("configuration could not be loaded: {0}")]
    ConfigurationMissing(String),

    /// Fatal at startup: no payment backend registered.
    #[error("no economy backend is registered")]
    EconomyUnavailable,

    /// The requester carries no player identity (console caller).
    #[error("only players can request a repair")]
    NotPlayer,

    /// The requester's hand is empty.
    #[error("nothing is held")]
    EmptyHand,

    /// The held item has no damageable state.
    #[error("the held item cannot be mended")]
    InvalidItem,

    /// The held item is already at full durability.
    #[error("the held item is not damaged")]
    AlreadyFull,

    /// Wear is below the configured minimum; carries both values for display.
    #[error("wear rate {wear_rate}% is below the minimum of {min_wear_rate}%")]
    BelowThreshold { wear_rate: f64, min_wear_rate: u32 },

    /// The account balance does not cover the quoted cost.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The withdrawal succeeded but the repair did not apply. The account
    /// and the item are now inconsistent and need manual intervention.
    #[error("repair did not complete after withdrawal: {0}")]
    Reconciliation(String),

    /// An economy or inventory backend failed before any mutation.
    #[error("provider error: {0}")]
    Provider(String),
}

impl MendError {
    /// Message catalog key for the user-visible notice.
    pub fn message_key(&self) -> &'static str {
        match self {
            MendError::ConfigurationMissing(_) => "configuration-missing",
            MendError::EconomyUnavailable => "economy-is-not-enabled",
            MendError::NotPlayer => "player-only",
            MendError::EmptyHand => "cannot-mend-air",
            MendError::InvalidItem => "cannot-mend-the-item",
            MendError::AlreadyFull => "item-is-not-damaged",
            MendError::BelowThreshold { .. } => "too-low-wear-rate",
            MendError::InsufficientFunds => "not-enough-money",
            MendError::Reconciliation(_) => "reconciliation-error",
            MendError::Provider(_) => "internal-error",
        }
    }
}
