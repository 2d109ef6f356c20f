//! Store configuration.

use serde::{Deserialize, Serialize};

/// What the add path does with a quantity that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// Refuse the add and keep the dialog open.
    #[default]
    Reject,
    /// Add the item with a quantity of 1.
    DefaultToOne,
}

/// Settings for a [`ListStore`](crate::ListStore).
///
/// Deserializable so an embedding app can keep it in its own settings file;
/// missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub add_quantity: QuantityPolicy,
}

impl StoreConfig {
    pub fn with_add_quantity(mut self, policy: QuantityPolicy) -> Self {
        self.add_quantity = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_bad_quantities() {
        assert_eq!(StoreConfig::default().add_quantity, QuantityPolicy::Reject);
    }

    #[test]
    fn deserializes_from_partial_json() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig =
            serde_json::from_str(r#"{ "add_quantity": "default_to_one" }"#).unwrap();
        assert_eq!(config.add_quantity, QuantityPolicy::DefaultToOne);
    }
}
