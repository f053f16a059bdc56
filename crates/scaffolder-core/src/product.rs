//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a scaffolding binary implements to configure
//! identity, template location and post-setup instructions.

use crate::catalog::{Framework, FRAMEWORKS};
use crate::runtime::PackageManager;
use crate::templates::copier::{RenameRule, DEFAULT_RENAME_RULES};
use std::path::{Path, PathBuf};

/// Configuration trait for scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Where template directories are found
/// - The framework catalog and rename rules
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Target directory used when the user gives none
    fn default_target_dir(&self) -> &'static str {
        "template-project"
    }

    /// Environment variable name for overriding the template root
    fn template_dir_env(&self) -> &'static str;

    /// Template root shipped with the product source tree
    fn bundled_template_dir(&self) -> PathBuf;

    /// Frameworks offered in the selection prompts
    fn catalog(&self) -> &'static [Framework] {
        FRAMEWORKS
    }

    /// Top-level files renamed while copying a template
    fn rename_rules(&self) -> &'static [RenameRule] {
        DEFAULT_RENAME_RULES
    }

    /// Generate the "next steps" commands after project creation
    fn next_steps(&self, cwd: &Path, root: &Path, package_manager: &PackageManager) -> Vec<String> {
        let mut steps = Vec::new();

        if root != cwd {
            let relative = root.strip_prefix(cwd).unwrap_or(root);
            steps.push(format!("cd {}", relative.display()));
        }

        steps.extend(package_manager.dev_commands());
        steps
    }
}
