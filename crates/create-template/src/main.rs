//! create-template - Project scaffolding for Vue applications and libraries

use anyhow::Result;
use clap::Parser;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::ProductConfig;
use std::path::PathBuf;

/// Template product configuration
#[derive(Clone)]
pub struct TemplateConfig;

impl ProductConfig for TemplateConfig {
    fn name(&self) -> &'static str {
        "create-template"
    }

    fn display_name(&self) -> &'static str {
        "Create Project Template"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-template")]
#[command(about = "Scaffold a new project from a Vue application or library template")]
#[command(version)]
pub struct Args {
    /// Project directory to create (`.` for the current directory)
    pub directory: Option<String>,

    /// Template to use (e.g. vue3, vue3-ts, vue2.7, library, library-ts)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Local directory to use for templates instead of the installed ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            template: args.template,
            template_dir: args.template_dir,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C inside a prompt is handled by cliclack; this covers the copy phase
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = TemplateConfig;

    let result = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
