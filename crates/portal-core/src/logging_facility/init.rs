//! Tracing subscriber setup
//!
//! One `init` call at startup picks the output shape for the whole process.
//! `RUST_LOG` overrides the profile's default filter when set.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output profile for the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, debug level for portal crates
    Development,
    /// JSON lines for log shipping, info level for portal crates
    Production,
    /// No output; tests install a capture layer instead
    Test,
}

impl Profile {
    /// Filter directive applied when `RUST_LOG` is unset
    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "portal=debug,info",
            Profile::Production => "portal=info,warn",
            Profile::Test => "off",
        }
    }
}

static INIT: Once = Once::new();

/// Install the global subscriber for the given profile
///
/// Later calls are no-ops, so the CLI and tests can both call this without
/// coordinating.
pub fn init(profile: Profile) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
