//! Charm-style CLI prompts using cliclack

use crate::catalog::{Framework, Variant};
use crate::flow::{Outcome, PromptFlow, Prompter, Selection, INVALID_PACKAGE_NAME};
use crate::names::is_valid_package_name;
use crate::product::ProductConfig;
use crate::runtime::PackageManager;
use crate::templates::{copier, TemplateResolver, TemplateRootSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create (`.` for the current directory)
    pub directory: Option<String>,

    /// Template identifier to use
    pub template: Option<String>,

    /// Local directory to use for templates instead of the installed ones
    pub template_dir: Option<PathBuf>,
}

/// [`Prompter`] backed by cliclack; Esc and Ctrl+C surface as `Interrupted`
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn project_name(&mut self, default: &str) -> io::Result<String> {
        cliclack::input("Project name:")
            .placeholder(default)
            .default_input(default)
            .interact()
    }

    fn confirm_overwrite(&mut self, message: &str) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(false).interact()
    }

    fn package_name(&mut self, suggested: &str) -> io::Result<String> {
        cliclack::input("Package name:")
            .placeholder(suggested)
            .default_input(suggested)
            .validate(|input: &String| {
                if is_valid_package_name(input) {
                    Ok(())
                } else {
                    Err(INVALID_PACKAGE_NAME)
                }
            })
            .interact()
    }

    fn select_framework(
        &mut self,
        message: &str,
        frameworks: &'static [Framework],
    ) -> io::Result<&'static Framework> {
        // Items are keyed by index into the static catalog
        let mut select = cliclack::select(message.to_string());
        for (idx, framework) in frameworks.iter().enumerate() {
            select = select.item(idx, framework.label(), "");
        }

        let selected_idx: usize = select.initial_value(0).interact()?;
        Ok(&frameworks[selected_idx])
    }

    fn select_variant(
        &mut self,
        message: &str,
        framework: &'static Framework,
    ) -> io::Result<&'static Variant> {
        let mut select = cliclack::select(message.to_string());
        for (idx, variant) in framework.variants.iter().enumerate() {
            select = select.item(idx, variant.label(), variant.name);
        }

        let selected_idx: usize = select.interact()?;
        Ok(&framework.variants[selected_idx])
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    // Step 1: Ask the questions
    let flow = PromptFlow::new(&cwd, config.catalog(), config.default_target_dir())
        .with_target_dir(args.directory.as_deref())
        .with_template(args.template.as_deref());

    let selection = match flow.run(&mut ClackPrompter)? {
        Outcome::Completed(selection) => selection,
        Outcome::Cancelled => {
            cliclack::outro_cancel("✖ Operation cancelled")?;
            return Ok(());
        }
    };

    // Step 2: Locate the template before touching the target
    let resolver = setup_resolver(config, args.template_dir)?;
    let template_dir = resolver.resolve(&selection.template)?;

    // Step 3: Create project
    create_project(config, &selection, &template_dir).await?;

    // Step 4: Show next steps
    print_next_steps(config, &cwd, &selection.root)?;

    Ok(())
}

fn setup_resolver<C: ProductConfig>(
    config: &C,
    template_dir: Option<PathBuf>,
) -> Result<TemplateResolver> {
    let resolver = TemplateResolver::from_config(config, template_dir);

    match resolver.source() {
        TemplateRootSource::Flag => {
            cliclack::log::info(format!(
                "Using local templates from {}",
                resolver.root().display()
            ))?;
        }
        TemplateRootSource::Env => {
            cliclack::log::info(format!(
                "Using templates from {} ({})",
                resolver.root().display(),
                config.template_dir_env()
            ))?;
        }
        TemplateRootSource::Installed | TemplateRootSource::Bundled => {}
    }

    Ok(resolver)
}

async fn create_project<C: ProductConfig>(
    config: &C,
    selection: &Selection,
    template_dir: &Path,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Scaffolding project in {}...",
        selection.root.display()
    ));

    let result: crate::error::Result<Vec<PathBuf>> = async {
        copier::prepare_target(&selection.root, selection.overwrite).await?;
        copier::copy_template(
            template_dir,
            &selection.root,
            config.rename_rules(),
            selection.manifest_name(),
        )
        .await
    }
    .await;

    match result {
        Ok(copied_files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                copied_files.len(),
                selection.root.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to scaffold project");
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, cwd: &Path, root: &Path) -> Result<()> {
    let package_manager = PackageManager::detect();
    cliclack::log::info(format!("Package manager: {}", package_manager))?;

    let steps = config.next_steps(cwd, root, &package_manager);

    println!();
    println!("  Done. Now run:");
    println!();

    for step in &steps {
        println!("    {}", step.bright_green());
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
