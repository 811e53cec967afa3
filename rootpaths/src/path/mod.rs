//! Path normalization, discovery and validation.
//!
//! This module contains the leaf components of path resolution:
//!
//! - [`normalize`]: pure string canonicalization (separator unification and
//!   trailing-slash removal)
//! - [`discover`]: probing a project root for conventionally named
//!   directories
//! - [`validate`]: checking that resolved paths exist
//!
//! # Examples
//!
//! ```
//! use rootpaths::path::normalize::normalize;
//! use rootpaths::path::{PathValidator, ResolvedPaths};
//!
//! let mut paths = ResolvedPaths::new();
//! paths.insert("root", normalize("C:\\projects\\app\\"));
//! assert_eq!(paths.get("root"), Some("C:/projects/app"));
//!
//! // Only strict validation can fail
//! assert!(PathValidator::new().validate(&paths, false).is_ok());
//! ```

pub mod discover;
pub mod normalize;
mod types;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use discover::{DiscoveryRule, PathDiscoverer, DISCOVERY_RULES};
pub use normalize::PathNormalizer;
pub use types::{Category, ResolvedPaths, UnknownCategory};
pub use validate::PathValidator;
