/// Configuration for the history system.
use serde::{Deserialize, Serialize};

/// Maximum number of snapshots kept on the timeline when the host
/// does not configure a capacity.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// Configuration for a [`HistoryManager`](crate::HistoryManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Max snapshots on the timeline. Must be at least 1;
    /// `HistoryManager::new` rejects a zero capacity.
    pub max_steps: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl HistoryConfig {
    /// Creates a config with the given timeline capacity.
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_steps, 50);
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: HistoryConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);

        let config: HistoryConfig = serde_json::from_str(r#"{"max_steps": 10}"#).expect("deserialize");
        assert_eq!(config.max_steps, 10);
    }
}
