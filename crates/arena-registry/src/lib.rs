//! Model identity registry for the arena trading monitor.
//!
//! Maps whatever model identifier the upstream sends (canonical ids,
//! punctuation variants, free-text aliases, substrings) to one canonical
//! record so that every view shows the same label and color for a model.
//!
//! The registry is an immutable value built once at startup, either from
//! the compiled-in table or from a `[registry]` config section layered on
//! top of it, and then borrowed by every consumer.
//!
//! ```
//! use arena_registry::ModelRegistry;
//!
//! let registry = ModelRegistry::builtin();
//! let meta = registry.model_meta("Claude Sonnet");
//! assert_eq!(meta.id, "Claude Sonnet");
//! assert_eq!(meta.display_name, "Claude Sonnet 4.5");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod identity;
pub mod normalize;
pub mod registry;
pub mod resolver;

pub use color::{BrandColor, DEFAULT_COLOR};
pub use config::{HeuristicEntry, ModelEntry, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use identity::ResolvedIdentity;
pub use normalize::{fold_punctuation, normalize_id};
pub use registry::{ModelRecord, ModelRegistry};
pub use resolver::{MatchStrategy, Resolution};
