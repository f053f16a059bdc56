//! Template lookup and materialization
//!
//! This module provides:
//! - Template directory resolution (`template-<id>` under a template root)
//! - Target directory preparation (create, or empty while keeping `.git`)
//! - Recursive copying with top-level rename rules
//! - Manifest (package.json) name rewriting

pub mod copier;
pub mod manifest;
pub mod resolver;

pub use copier::{
    copy_template, empty_dir, is_empty_dir, prepare_target, RenameRule, DEFAULT_RENAME_RULES,
};
pub use manifest::{rename_manifest, MANIFEST_FILE};
pub use resolver::{TemplateResolver, TemplateRootSource};
