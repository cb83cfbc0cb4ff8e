//! Configuration types for the workforce core.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level policy configuration.
///
/// Covers the tunables the workflows read: the simulated-gateway
/// narration and its pacing, and seeding defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Leave balance granted to newly seeded employees, in days.
    #[serde(default = "default_leave_balance")]
    pub default_leave_balance: u32,
    /// Simulated-gateway settings for the disbursement transaction.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Settings for the simulated settlement gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Narration lines appended to the transaction log during CONNECTING.
    #[serde(default = "default_connect_script")]
    pub connect_script: Vec<String>,
    /// Pause between narration lines, in milliseconds.
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,
    /// Pause after SUCCESS before the transaction is discarded, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// PROCESSING deadline, in milliseconds; exceeding it transitions the
    /// transaction to ERROR.
    #[serde(default = "default_process_timeout_ms")]
    pub process_timeout_ms: u64,
}

impl GatewayConfig {
    /// Pause between narration lines.
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    /// Pause after SUCCESS before the transaction is discarded.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// PROCESSING deadline.
    pub fn process_timeout(&self) -> Duration {
        Duration::from_millis(self.process_timeout_ms)
    }

    /// A zero-delay configuration for tests.
    pub fn instant() -> Self {
        Self {
            connect_script: default_connect_script(),
            connect_delay_ms: 0,
            settle_delay_ms: 0,
            process_timeout_ms: default_process_timeout_ms(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            connect_script: default_connect_script(),
            connect_delay_ms: default_connect_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            process_timeout_ms: default_process_timeout_ms(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_leave_balance: default_leave_balance(),
            gateway: GatewayConfig::default(),
        }
    }
}

fn default_leave_balance() -> u32 {
    20
}

fn default_connect_script() -> Vec<String> {
    vec![
        "Initializing secure connection...".to_string(),
        "Connecting to corporate banking gateway...".to_string(),
        "Handshake successful. Verifying merchant credentials...".to_string(),
    ]
}

fn default_connect_delay_ms() -> u64 {
    1000
}

fn default_settle_delay_ms() -> u64 {
    2500
}

fn default_process_timeout_ms() -> u64 {
    30_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_a_narration_script() {
        let config = PolicyConfig::default();
        assert_eq!(config.default_leave_balance, 20);
        assert_eq!(config.gateway.connect_script.len(), 3);
        assert_eq!(config.gateway.process_timeout_ms, 30_000);
    }

    #[test]
    fn test_instant_gateway_has_no_delays() {
        let gateway = GatewayConfig::instant();
        assert_eq!(gateway.connect_delay(), Duration::ZERO);
        assert_eq!(gateway.settle_delay(), Duration::ZERO);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: PolicyConfig =
            serde_yaml::from_str("default_leave_balance: 12\n").unwrap();
        assert_eq!(config.default_leave_balance, 12);
        assert_eq!(config.gateway, GatewayConfig::default());
    }
}
