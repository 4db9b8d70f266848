//! Build configuration for the tile type catalog.

use serde::{Deserialize, Serialize};

use crate::parity::ParityRule;

/// Configuration for building a [`Catalog`](crate::catalog::Catalog).
///
/// # Presets
///
/// - `default()`: checkerboard parity, malformed payloads degrade to static tiles
/// - `lenient()`: same as `default()`, spelled out for call sites that want to be explicit
/// - `strict()`: checkerboard parity, malformed payloads abort the build
///
/// # Examples
///
/// ```
/// use fryline_types::config::BuildConfig;
/// use fryline_types::parity::ParityRule;
///
/// let config = BuildConfig::default();
/// assert!(!config.strict);
///
/// let config = BuildConfig::strict().with_parity_rule(ParityRule::Rows);
/// assert!(config.strict);
/// assert_eq!(config.parity_rule, ParityRule::Rows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
	/// Rule used to classify instance positions
	pub parity_rule: ParityRule,
	/// Escalate malformed animation payloads to a build failure
	pub strict: bool,
}

impl BuildConfig {
	/// Create a configuration.
	pub fn new(parity_rule: ParityRule, strict: bool) -> Self {
		Self {
			parity_rule,
			strict,
		}
	}

	/// Malformed payloads are recorded and degraded.
	pub fn lenient() -> Self {
		Self {
			parity_rule: ParityRule::Checkerboard,
			strict: false,
		}
	}

	/// Malformed payloads abort the build.
	pub fn strict() -> Self {
		Self {
			parity_rule: ParityRule::Checkerboard,
			strict: true,
		}
	}

	/// Replaces the parity rule.
	#[must_use]
	pub fn with_parity_rule(mut self, parity_rule: ParityRule) -> Self {
		self.parity_rule = parity_rule;
		self
	}
}
