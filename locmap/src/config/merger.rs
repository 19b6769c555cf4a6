//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use locmap::config::{Config, ConfigMerger};
///
/// let low = Config { web_root: Some("low".to_string()), ..Default::default() };
/// let high = Config { web_root: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.web_root.as_deref(), Some("high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.web_root.is_some() {
            target.web_root.clone_from(&source.web_root);
        }
        if source.platform.is_some() {
            target.platform = source.platform;
        }
        if source.browser_path.is_some() {
            target.browser_path.clone_from(&source.browser_path);
        }
    }
}
