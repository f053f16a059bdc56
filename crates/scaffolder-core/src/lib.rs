//! Scaffolder Core - Shared library for interactive project scaffolding
//!
//! This library asks which project to create, then materializes a
//! `template-<id>` directory into the target folder, renaming select files and
//! rewriting the generated manifest's `name`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name rules, the framework catalog, template
//!   resolution and copying, package manager detection
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `PromptFlow`
//!   state machine driven through the `Prompter` trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{templates, Outcome, PromptFlow, FRAMEWORKS};
//!
//! let flow = PromptFlow::new(cwd, FRAMEWORKS, "template-project")
//!     .with_target_dir(Some("demo"))
//!     .with_template(Some("vue3-ts"));
//!
//! if let Outcome::Completed(selection) = flow.run(&mut my_prompter)? {
//!     let dir = templates::TemplateResolver::new("templates").resolve(&selection.template)?;
//!     templates::prepare_target(&selection.root, selection.overwrite).await?;
//!     templates::copy_template(&dir, &selection.root, templates::DEFAULT_RENAME_RULES,
//!         selection.manifest_name()).await?;
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod flow;
pub mod names;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Framework, Variant, FRAMEWORKS};
pub use error::{Result, ScaffoldError};
pub use flow::{Outcome, PromptFlow, Prompter, Selection, Step};
pub use product::ProductConfig;
pub use runtime::PackageManager;
pub use templates::{copy_template, prepare_target, TemplateResolver};

#[cfg(feature = "tui")]
pub use tui::run;
