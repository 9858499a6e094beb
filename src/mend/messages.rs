//! User-facing notices: template resolution and `%token%` substitution.

use std::collections::HashMap;

use super::errors::MendError;
use super::quote::Quote;

/// Fallback templates compiled into the binary. A configured `[messages]`
/// entry always wins; an unknown key resolves to itself.
const BUILTIN_MESSAGES: &[(&str, &str)] = &[
    ("configuration-missing", "The repair service is not configured."),
    ("economy-is-not-enabled", "The economy backend is not enabled."),
    ("player-only", "Only players can use this command."),
    ("cannot-mend-air", "You are not holding anything to mend."),
    ("cannot-mend-the-item", "This item cannot be mended."),
    ("item-is-not-damaged", "This item is not damaged."),
    (
        "too-low-wear-rate",
        "Wear rate %wear-rate%% is below the minimum of %min-wear-rate%%.",
    ),
    (
        "notify-cost",
        "Mending this item costs %cost%. Repeat the command with 'confirm' to pay.",
    ),
    ("not-enough-money", "You cannot afford this repair."),
    ("repaired", "Your item was fully repaired for %cost%."),
    (
        "reconciliation-error",
        "Your payment went through but the repair failed. Contact an administrator.",
    ),
    ("internal-error", "The repair service hit an internal error."),
];

/// Message templates keyed by notice id, with built-in fallbacks.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_config(messages: &HashMap<String, String>) -> Self {
        Self {
            templates: messages.clone(),
        }
    }

    /// Resolve a key: configured template, else built-in, else the key itself.
    pub fn resolve(&self, key: &str) -> String {
        if let Some(template) = self.templates.get(key) {
            return template.clone();
        }
        BUILTIN_MESSAGES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| template.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Notice shown on the quote path.
    pub fn quote_notice(&self, quote: &Quote) -> String {
        render(
            &self.resolve("notify-cost"),
            &[("cost", format_cost(quote.cost))],
        )
    }

    /// Notice shown after a successful transaction.
    pub fn repaired_notice(&self, cost: f64) -> String {
        render(&self.resolve("repaired"), &[("cost", format_cost(cost))])
    }

    /// Notice for any rejection.
    pub fn error_notice(&self, err: &MendError) -> String {
        let template = self.resolve(err.message_key());
        match err {
            MendError::BelowThreshold {
                wear_rate,
                min_wear_rate,
            } => render(
                &template,
                &[
                    ("wear-rate", format_wear_rate(*wear_rate)),
                    ("min-wear-rate", min_wear_rate.to_string()),
                ],
            ),
            _ => template,
        }
    }
}

/// Substitute `%token%` placeholders.
pub fn render(template: &str, substitutions: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (token, value) in substitutions {
        out = out.replace(&format!("%{}%", token), value);
    }
    out
}

/// Costs display with two decimals, matching the quote rounding.
pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

/// Wear rates display with the single decimal they are computed at.
pub fn format_wear_rate(wear_rate: f64) -> String {
    format!("{:.1}", wear_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mend::types::ItemCategory;

    #[test]
    fn resolve_prefers_configured_template() {
        let mut configured = HashMap::new();
        configured.insert("not-enough-money".to_string(), "Too poor!".to_string());
        let catalog = MessageCatalog::from_config(&configured);
        assert_eq!(catalog.resolve("not-enough-money"), "Too poor!");
        // Untouched keys still come from the built-ins.
        assert_eq!(
            catalog.resolve("item-is-not-damaged"),
            "This item is not damaged."
        );
    }

    #[test]
    fn unknown_keys_resolve_to_themselves() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.resolve("no-such-key"), "no-such-key");
    }

    #[test]
    fn render_substitutes_every_token() {
        let out = render(
            "pay %cost% at %wear-rate%%",
            &[
                ("cost", "6500.00".to_string()),
                ("wear-rate", "50.0".to_string()),
            ],
        );
        assert_eq!(out, "pay 6500.00 at 50.0%");
    }

    #[test]
    fn quote_notice_formats_cost_with_two_decimals() {
        let catalog = MessageCatalog::default();
        let quote = Quote {
            wear_rate: 50.0,
            cost: 6500.0,
            category: ItemCategory::Sword,
        };
        assert!(catalog.quote_notice(&quote).contains("6500.00"));
    }

    #[test]
    fn below_threshold_notice_carries_both_values() {
        let catalog = MessageCatalog::default();
        let notice = catalog.error_notice(&MendError::BelowThreshold {
            wear_rate: 5.0,
            min_wear_rate: 10,
        });
        assert_eq!(
            notice,
            "Wear rate 5.0% is below the minimum of 10%."
        );
    }
}
