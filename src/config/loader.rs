//! Configuration loading functionality.
//!
//! Loads the policy configuration from a YAML file. Missing keys fall
//! back to crate defaults, so a minimal file is enough.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

use super::types::PolicyConfig;

/// Loads the policy configuration from the specified YAML file.
///
/// # Example
///
/// ```no_run
/// use workforce_core::config::load_policy;
///
/// let policy = load_policy("./config/policy.yaml")?;
/// println!("leave balance: {}", policy.default_leave_balance);
/// # Ok::<(), workforce_core::error::CoreError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> CoreResult<PolicyConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|_| CoreError::NotFound {
        entity: "Configuration file".to_string(),
        id: path.display().to_string(),
    })?;
    serde_yaml::from_str(&contents).map_err(|e| {
        CoreError::validation(format!(
            "failed to parse configuration file '{}': {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_policy("/definitely/missing.yaml").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn test_shipped_policy_file_parses() {
        let policy = load_policy("./config/policy.yaml").unwrap();
        assert!(policy.default_leave_balance > 0);
        assert!(!policy.gateway.connect_script.is_empty());
    }
}
