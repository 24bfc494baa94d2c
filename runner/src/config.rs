use std::env;

pub const MODEL_ADDR_VAR: &str = "DRS2FOL_MODEL_ADDR";
pub const LOG_VAR: &str = "DRS2FOL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Process configuration, read once at startup.
///
/// `RUST_LOG` still wins over `DRS2FOL_LOG` when both are set; see `init_tracing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `host:port` of the sentence → DRS model server.
    pub model_addr: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            model_addr: non_empty(MODEL_ADDR_VAR),
            log_filter: non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Command-line override for the backend address.
    pub fn with_model_addr(mut self, addr: Option<String>) -> Self {
        if addr.is_some() {
            self.model_addr = addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[]);
        assert_eq!(c.model_addr, None);
        assert_eq!(c.log_filter, "warn");
    }

    #[test]
    fn reads_both_variables() {
        let c = config(&[(MODEL_ADDR_VAR, "127.0.0.1:7000"), (LOG_VAR, "debug")]);
        assert_eq!(c.model_addr.as_deref(), Some("127.0.0.1:7000"));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let c = config(&[(MODEL_ADDR_VAR, "  "), (LOG_VAR, "")]);
        assert_eq!(c.model_addr, None);
        assert_eq!(c.log_filter, "warn");
    }

    #[test]
    fn command_line_address_overrides_environment() {
        let c = config(&[(MODEL_ADDR_VAR, "a:1")]).with_model_addr(Some("b:2".to_string()));
        assert_eq!(c.model_addr.as_deref(), Some("b:2"));
        let c = config(&[(MODEL_ADDR_VAR, "a:1")]).with_model_addr(None);
        assert_eq!(c.model_addr.as_deref(), Some("a:1"));
    }
}
