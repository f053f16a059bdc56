//! Template directory location and lookup

use crate::catalog::{template_dir_name, template_ids, Framework};
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

/// Directory name holding templates next to an installed binary
const INSTALLED_TEMPLATE_DIR: &str = "templates";

/// Where a template root was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRootSource {
    Flag,
    Env,
    Installed,
    Bundled,
}

/// Maps template identifiers to `template-<id>` directories under a root
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    root: PathBuf,
    source: TemplateRootSource,
}

impl TemplateResolver {
    /// Create a resolver for an explicit template root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source: TemplateRootSource::Flag,
        }
    }

    /// Locate the template root for a product
    ///
    /// Order: explicit override, the product's env var, `templates/` next to the
    /// running executable, then the bundled source-tree directory.
    pub fn from_config<C: ProductConfig>(config: &C, override_dir: Option<PathBuf>) -> Self {
        if let Some(root) = override_dir {
            return Self::new(root);
        }

        if let Some(root) = std::env::var_os(config.template_dir_env()).filter(|v| !v.is_empty()) {
            return Self {
                root: PathBuf::from(root),
                source: TemplateRootSource::Env,
            };
        }

        let installed = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(INSTALLED_TEMPLATE_DIR)))
            .filter(|dir| dir.is_dir());
        if let Some(root) = installed {
            return Self {
                root,
                source: TemplateRootSource::Installed,
            };
        }

        Self {
            root: config.bundled_template_dir(),
            source: TemplateRootSource::Bundled,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> TemplateRootSource {
        self.source
    }

    /// Resolve a template identifier to its directory
    pub fn resolve(&self, id: &str) -> Result<PathBuf> {
        let dir = self.root.join(template_dir_name(id));
        if !dir.is_dir() {
            return Err(ScaffoldError::TemplateNotFound {
                id: id.to_string(),
                dir,
            });
        }
        Ok(dir)
    }

    /// Catalog identifiers with no directory under the root
    pub fn missing(&self, catalog: &[Framework]) -> Vec<&'static str> {
        template_ids(catalog)
            .into_iter()
            .filter(|id| self.resolve(id).is_err())
            .collect()
    }
}
