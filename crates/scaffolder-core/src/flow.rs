//! Ordered prompt flow that resolves what to scaffold and where
//!
//! Each [`Step`] has an activation predicate over the answers gathered so far
//! (and the command-line arguments). Steps run in [`Step::ORDER`]; inactive steps
//! are skipped. The terminal side is abstracted behind [`Prompter`] so the same
//! flow drives cliclack prompts and scripted answers.

use crate::catalog::{is_template, Framework, Variant};
use crate::error::{io_error, Result, ScaffoldError};
use crate::names::{format_target_dir, is_valid_package_name, to_valid_package_name};
use crate::templates::copier::is_empty_dir;
use std::io;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Source of answers for the flow
///
/// Returning an error of kind [`io::ErrorKind::Interrupted`] cancels the flow.
/// Any other error is fatal.
pub trait Prompter {
    /// Ask for the project directory name
    fn project_name(&mut self, default: &str) -> io::Result<String>;

    /// Ask whether an existing non-empty directory may be emptied
    fn confirm_overwrite(&mut self, message: &str) -> io::Result<bool>;

    /// Ask for a package name; answers failing validation are asked again
    fn package_name(&mut self, suggested: &str) -> io::Result<String>;

    /// Pick one framework from the catalog
    fn select_framework(
        &mut self,
        message: &str,
        frameworks: &'static [Framework],
    ) -> io::Result<&'static Framework>;

    /// Pick one variant of a framework
    fn select_variant(
        &mut self,
        message: &str,
        framework: &'static Framework,
    ) -> io::Result<&'static Variant>;
}

/// Questions in the flow, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ProjectName,
    OverwriteConfirm,
    /// Not a prompt: stops the flow when overwriting was declined
    OverwriteGuard,
    PackageName,
    FrameworkSelect,
    VariantSelect,
}

impl Step {
    pub const ORDER: [Step; 6] = [
        Step::ProjectName,
        Step::OverwriteConfirm,
        Step::OverwriteGuard,
        Step::PackageName,
        Step::FrameworkSelect,
        Step::VariantSelect,
    ];
}

pub const INVALID_PACKAGE_NAME: &str = "Invalid package.json name";
const SELECT_FRAMEWORK: &str = "Select a framework:";
const SELECT_VARIANT: &str = "Select a variant:";

/// Answers accumulated while the flow runs
#[derive(Debug)]
struct Answers {
    target_dir: String,
    overwrite: Option<bool>,
    package_name: Option<String>,
    framework: Option<&'static Framework>,
    variant: Option<&'static Variant>,
}

/// Everything needed to materialize a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Normalized target directory as entered (`.` for the working directory)
    pub target_dir: String,
    /// Absolute path of the target directory
    pub root: PathBuf,
    /// Target directory name, or the working directory's name for `.`
    pub project_name: String,
    /// Whether the existing target contents are to be removed first
    pub overwrite: bool,
    /// Only collected when the project name is not a valid package name
    pub package_name: Option<String>,
    pub framework: Option<&'static Framework>,
    pub variant: Option<&'static Variant>,
    /// Catalog identifier of the template to copy
    pub template: String,
}

impl Selection {
    /// Name written into the generated manifest
    pub fn manifest_name(&self) -> &str {
        self.package_name.as_deref().unwrap_or(&self.project_name)
    }
}

/// Result of running the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Selection),
    Cancelled,
}

/// The prompt flow for one invocation
#[derive(Debug, Clone)]
pub struct PromptFlow {
    cwd: PathBuf,
    catalog: &'static [Framework],
    default_target_dir: String,
    arg_target_dir: Option<String>,
    arg_template: Option<String>,
}

impl PromptFlow {
    pub fn new(
        cwd: impl Into<PathBuf>,
        catalog: &'static [Framework],
        default_target_dir: impl Into<String>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            catalog,
            default_target_dir: default_target_dir.into(),
            arg_target_dir: None,
            arg_template: None,
        }
    }

    /// Directory given on the command line; skips the project name question
    pub fn with_target_dir(mut self, dir: Option<&str>) -> Self {
        self.arg_target_dir = format_target_dir(dir).filter(|d| !d.is_empty());
        self
    }

    /// Template given on the command line; skips selection when it is in the catalog
    pub fn with_template(mut self, template: Option<&str>) -> Self {
        self.arg_template = template.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    /// Run every active step and resolve the selection
    pub fn run<P: Prompter>(&self, prompter: &mut P) -> Result<Outcome> {
        let mut answers = Answers {
            target_dir: self
                .arg_target_dir
                .clone()
                .unwrap_or_else(|| self.default_target_dir.clone()),
            overwrite: None,
            package_name: None,
            framework: None,
            variant: None,
        };

        for step in Step::ORDER {
            if !self.is_active(step, &answers)? {
                continue;
            }
            if self.ask(step, &mut answers, prompter)?.is_break() {
                return Ok(Outcome::Cancelled);
            }
        }

        self.resolve(answers).map(Outcome::Completed)
    }

    fn is_active(&self, step: Step, answers: &Answers) -> Result<bool> {
        let active = match step {
            Step::ProjectName => self.arg_target_dir.is_none(),
            Step::OverwriteConfirm => {
                let root = self.root(&answers.target_dir);
                let exists = root.try_exists().map_err(io_error("inspect", &root))?;
                exists && !is_empty_dir(&root)?
            }
            Step::OverwriteGuard => answers.overwrite == Some(false),
            Step::PackageName => {
                !is_valid_package_name(&self.project_name(&answers.target_dir))
            }
            Step::FrameworkSelect => self.rejected_template().is_some() || self.arg_template.is_none(),
            Step::VariantSelect => answers.framework.is_some_and(Framework::has_variants),
        };
        Ok(active)
    }

    fn ask<P: Prompter>(
        &self,
        step: Step,
        answers: &mut Answers,
        prompter: &mut P,
    ) -> Result<ControlFlow<()>> {
        match step {
            Step::ProjectName => {
                let Some(input) = answered(prompter.project_name(&self.default_target_dir))? else {
                    return Ok(ControlFlow::Break(()));
                };
                answers.target_dir = format_target_dir(Some(&input))
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| self.default_target_dir.clone());
            }
            Step::OverwriteConfirm => {
                let message = overwrite_message(&answers.target_dir);
                let Some(overwrite) = answered(prompter.confirm_overwrite(&message))? else {
                    return Ok(ControlFlow::Break(()));
                };
                answers.overwrite = Some(overwrite);
            }
            Step::OverwriteGuard => return Ok(ControlFlow::Break(())),
            Step::PackageName => {
                let suggested = to_valid_package_name(&self.project_name(&answers.target_dir));
                loop {
                    let Some(name) = answered(prompter.package_name(&suggested))? else {
                        return Ok(ControlFlow::Break(()));
                    };
                    if is_valid_package_name(&name) {
                        answers.package_name = Some(name);
                        break;
                    }
                }
            }
            Step::FrameworkSelect => {
                let message = match self.rejected_template() {
                    Some(template) => format!(
                        "\"{}\" isn't a valid template. Please choose from below: ",
                        template
                    ),
                    None => SELECT_FRAMEWORK.to_string(),
                };
                let Some(framework) = answered(prompter.select_framework(&message, self.catalog))?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                answers.framework = Some(framework);
            }
            Step::VariantSelect => {
                let Some(framework) = answers.framework else {
                    return Ok(ControlFlow::Continue(()));
                };
                let Some(variant) = answered(prompter.select_variant(SELECT_VARIANT, framework))?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                answers.variant = Some(variant);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn resolve(&self, answers: Answers) -> Result<Selection> {
        let template = answers
            .variant
            .map(|v| v.name.to_string())
            .or_else(|| answers.framework.map(|f| f.name.to_string()))
            .or_else(|| self.arg_template.clone())
            .unwrap_or_default();
        if !is_template(self.catalog, &template) {
            return Err(ScaffoldError::UnknownTemplate(template));
        }

        Ok(Selection {
            root: self.root(&answers.target_dir),
            project_name: self.project_name(&answers.target_dir),
            overwrite: answers.overwrite.unwrap_or(false),
            target_dir: answers.target_dir,
            package_name: answers.package_name,
            framework: answers.framework,
            variant: answers.variant,
            template,
        })
    }

    /// The template argument, when it was given but is not in the catalog
    fn rejected_template(&self) -> Option<&str> {
        self.arg_template
            .as_deref()
            .filter(|t| !is_template(self.catalog, t))
    }

    fn root(&self, target_dir: &str) -> PathBuf {
        if target_dir == "." {
            self.cwd.clone()
        } else {
            self.cwd.join(target_dir)
        }
    }

    fn project_name(&self, target_dir: &str) -> String {
        if target_dir == "." {
            dir_name(&self.cwd)
        } else {
            target_dir.to_string()
        }
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn overwrite_message(target_dir: &str) -> String {
    let subject = if target_dir == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{}\"", target_dir)
    };
    format!("{} is not empty. Remove existing files and continue?", subject)
}

/// Interrupted prompts become `None`; other prompt failures are fatal
fn answered<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(ScaffoldError::Prompt(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FRAMEWORKS;
    use colored::Color;
    use std::collections::VecDeque;
    use std::fs;

    enum Reply {
        Text(&'static str),
        Confirm(bool),
        Pick(&'static str),
        Interrupt,
        Fail,
    }

    #[derive(Default)]
    struct Scripted {
        replies: VecDeque<Reply>,
        asked: Vec<(&'static str, String)>,
    }

    impl Scripted {
        fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &'static str, message: &str) -> io::Result<Reply> {
            self.asked.push((prompt, message.to_string()));
            match self.replies.pop_front() {
                Some(Reply::Interrupt) => Err(io::Error::new(io::ErrorKind::Interrupted, "esc")),
                Some(Reply::Fail) => Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
                Some(reply) => Ok(reply),
                None => panic!("unexpected prompt: {}", prompt),
            }
        }

        fn prompts(&self) -> Vec<&'static str> {
            self.asked.iter().map(|(prompt, _)| *prompt).collect()
        }

        fn message(&self, prompt: &str) -> &str {
            self.asked
                .iter()
                .find(|(p, _)| *p == prompt)
                .map(|(_, m)| m.as_str())
                .expect("prompt was asked")
        }
    }

    impl Prompter for Scripted {
        fn project_name(&mut self, default: &str) -> io::Result<String> {
            match self.next("project_name", default)? {
                Reply::Text(text) => Ok(text.to_string()),
                _ => panic!("project_name expects text"),
            }
        }

        fn confirm_overwrite(&mut self, message: &str) -> io::Result<bool> {
            match self.next("overwrite", message)? {
                Reply::Confirm(yes) => Ok(yes),
                _ => panic!("overwrite expects a confirmation"),
            }
        }

        fn package_name(&mut self, suggested: &str) -> io::Result<String> {
            match self.next("package_name", suggested)? {
                Reply::Text(text) => Ok(text.to_string()),
                _ => panic!("package_name expects text"),
            }
        }

        fn select_framework(
            &mut self,
            message: &str,
            frameworks: &'static [Framework],
        ) -> io::Result<&'static Framework> {
            match self.next("framework", message)? {
                Reply::Pick(name) => Ok(frameworks.iter().find(|f| f.name == name).unwrap()),
                _ => panic!("framework expects a pick"),
            }
        }

        fn select_variant(
            &mut self,
            message: &str,
            framework: &'static Framework,
        ) -> io::Result<&'static Variant> {
            match self.next("variant", message)? {
                Reply::Pick(name) => Ok(framework.variants.iter().find(|v| v.name == name).unwrap()),
                _ => panic!("variant expects a pick"),
            }
        }
    }

    fn flow(cwd: &Path) -> PromptFlow {
        PromptFlow::new(cwd, FRAMEWORKS, "template-project")
    }

    fn completed(outcome: Outcome) -> Selection {
        match outcome {
            Outcome::Completed(selection) => selection,
            Outcome::Cancelled => panic!("flow was cancelled"),
        }
    }

    #[test]
    fn test_valid_template_argument_skips_selection() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::default();

        let outcome = flow(cwd.path())
            .with_target_dir(Some("demo"))
            .with_template(Some("vue3-ts"))
            .run(&mut prompter)
            .unwrap();
        let selection = completed(outcome);

        assert!(prompter.prompts().is_empty());
        assert_eq!(selection.template, "vue3-ts");
        assert_eq!(selection.root, cwd.path().join("demo"));
        assert_eq!(selection.manifest_name(), "demo");
        assert!(!selection.overwrite);
    }

    #[test]
    fn test_empty_target_skips_overwrite() {
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir(cwd.path().join("demo")).unwrap();
        let mut prompter = Scripted::new([Reply::Pick("vue"), Reply::Pick("vue3")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("demo"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(prompter.prompts(), vec!["framework", "variant"]);
        assert_eq!(prompter.message("framework"), "Select a framework:");
        assert_eq!(selection.template, "vue3");
    }

    #[test]
    fn test_git_only_target_skips_overwrite() {
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir_all(cwd.path().join("demo/.git")).unwrap();
        let mut prompter = Scripted::default();

        flow(cwd.path())
            .with_target_dir(Some("demo"))
            .with_template(Some("library"))
            .run(&mut prompter)
            .unwrap();

        assert!(prompter.prompts().is_empty());
    }

    #[test]
    fn test_non_empty_target_asks_to_overwrite() {
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir(cwd.path().join("demo")).unwrap();
        fs::write(cwd.path().join("demo/README.md"), "old").unwrap();
        let mut prompter = Scripted::new([Reply::Confirm(true)]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("demo"))
                .with_template(Some("vue3"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(
            prompter.message("overwrite"),
            "Target directory \"demo\" is not empty. Remove existing files and continue?"
        );
        assert!(selection.overwrite);
    }

    #[test]
    fn test_declined_overwrite_cancels() {
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir(cwd.path().join("demo")).unwrap();
        fs::write(cwd.path().join("demo/README.md"), "old").unwrap();
        let mut prompter = Scripted::new([Reply::Confirm(false)]);

        let outcome = flow(cwd.path())
            .with_target_dir(Some("demo"))
            .run(&mut prompter)
            .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(prompter.prompts(), vec!["overwrite"]);
        assert!(cwd.path().join("demo/README.md").exists());
    }

    #[test]
    fn test_current_directory_target() {
        let base = tempfile::tempdir().unwrap();
        let cwd = base.path().join("My Project");
        fs::create_dir(&cwd).unwrap();
        fs::write(cwd.join("notes.txt"), "x").unwrap();
        let mut prompter = Scripted::new([Reply::Confirm(true), Reply::Text("my-project")]);

        let selection = completed(
            flow(&cwd)
                .with_target_dir(Some("."))
                .with_template(Some("vue2.7"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(prompter.prompts(), vec!["overwrite", "package_name"]);
        assert!(prompter.message("overwrite").starts_with("Current directory is not empty"));
        assert_eq!(prompter.message("package_name"), "my-project");
        assert_eq!(selection.root, cwd);
        assert_eq!(selection.project_name, "My Project");
        assert_eq!(selection.manifest_name(), "my-project");
    }

    #[test]
    fn test_project_name_prompt_normalizes_input() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Text("  my-app//  ")]);

        let selection = completed(
            flow(cwd.path())
                .with_template(Some("vue3"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(prompter.message("project_name"), "template-project");
        assert_eq!(selection.target_dir, "my-app");
    }

    #[test]
    fn test_blank_project_name_falls_back_to_default() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Text("  / ")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("   "))
                .with_template(Some("vue3"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(selection.target_dir, "template-project");
    }

    #[test]
    fn test_invalid_package_name_is_asked_again() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter =
            Scripted::new([Reply::Text("Still Bad"), Reply::Text("good-name")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("Bad Name"))
                .with_template(Some("library-ts"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(prompter.prompts(), vec!["package_name", "package_name"]);
        assert_eq!(prompter.message("package_name"), "bad-name");
        assert_eq!(selection.package_name.as_deref(), Some("good-name"));
        assert_eq!(selection.target_dir, "Bad Name");
    }

    #[test]
    fn test_rejected_template_argument_is_named() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Pick("library"), Reply::Pick("library-ts")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("demo"))
                .with_template(Some("bogus"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert!(prompter.message("framework").contains("\"bogus\""));
        assert_eq!(selection.template, "library-ts");
    }

    #[test]
    fn test_template_argument_is_matched_verbatim() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Pick("vue"), Reply::Pick("vue3")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("demo"))
                .with_template(Some(" vue3"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert!(prompter.message("framework").starts_with("\" vue3\" isn't a valid template"));
        assert_eq!(selection.template, "vue3");
    }

    #[test]
    fn test_framework_name_is_not_a_template_argument() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Pick("vue"), Reply::Pick("vue3-ts")]);

        let selection = completed(
            flow(cwd.path())
                .with_target_dir(Some("demo"))
                .with_template(Some("vue"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert!(prompter.message("framework").starts_with("\"vue\" isn't a valid template"));
        assert_eq!(selection.template, "vue3-ts");
    }

    #[test]
    fn test_framework_without_variants_skips_variant_step() {
        static SOLO: &[Framework] = &[Framework {
            name: "vanilla",
            display: None,
            color: Color::White,
            variants: &[],
        }];
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Pick("vanilla")]);

        let selection = completed(
            PromptFlow::new(cwd.path(), SOLO, "template-project")
                .with_target_dir(Some("demo"))
                .run(&mut prompter)
                .unwrap(),
        );

        assert_eq!(prompter.prompts(), vec!["framework"]);
        assert_eq!(selection.template, "vanilla");
        assert_eq!(selection.variant, None);
    }

    #[test]
    fn test_interrupt_cancels_flow() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Pick("vue"), Reply::Interrupt]);

        let outcome = flow(cwd.path())
            .with_target_dir(Some("demo"))
            .run(&mut prompter)
            .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(!cwd.path().join("demo").exists());
    }

    #[test]
    fn test_prompt_failure_is_an_error() {
        let cwd = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new([Reply::Fail]);

        let err = flow(cwd.path()).run(&mut prompter).unwrap_err();
        assert!(matches!(err, ScaffoldError::Prompt(_)));
    }
}
