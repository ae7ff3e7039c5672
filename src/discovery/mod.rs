//! Application root discovery.
//!
//! A root is any directory that directly contains every configured marker
//! file. Candidates come from an ordered list of [`DiscoveryRule`]s; the
//! first accepted candidate wins. When no rule matches, the user is asked
//! once for the path.
//!
//! # Example
//!
//! ```
//! use plugdeps::discovery::{DiscoveryContext, DiscoveryRule, RootResolver};
//!
//! let resolver = RootResolver::new(
//!     vec!["main.py".into(), "folder_paths.py".into()],
//!     DiscoveryRule::default_policy(),
//! );
//! let ctx = DiscoveryContext::new("/nonexistent/tool", "/");
//! assert!(resolver.detect(&ctx).is_none());
//! ```

pub mod resolver;
pub mod rules;

pub use resolver::{RootResolver, ROOT_PROMPT_KEY};
pub use rules::{DiscoveryContext, DiscoveryRule};
