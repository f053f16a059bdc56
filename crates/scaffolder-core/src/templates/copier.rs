//! Template materialization: target preparation, copying and manifest patching

use crate::error::{io_error, Result};
use crate::templates::manifest::{rename_manifest, MANIFEST_FILE};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Entry kept when a target directory is emptied or checked for emptiness
const GIT_DIR: &str = ".git";

/// Maps a file name as stored in a template to its name in the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    pub from: &'static str,
    pub to: &'static str,
}

/// Files that cannot ship under their real name inside a template
pub const DEFAULT_RENAME_RULES: &[RenameRule] = &[RenameRule {
    from: "_gitignore",
    to: ".gitignore",
}];

fn renamed<'a>(name: &'a OsStr, rules: &[RenameRule]) -> &'a OsStr {
    rules
        .iter()
        .find(|rule| name == rule.from)
        .map_or(name, |rule| OsStr::new(rule.to))
}

/// A directory counts as empty when it holds nothing, or only `.git`
pub fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error("read directory", dir))? {
        let entry = entry.map_err(io_error("read directory", dir))?;
        names.push(entry.file_name());
        if names.len() > 1 {
            return Ok(false);
        }
    }
    Ok(names.first().map_or(true, |name| name == GIT_DIR))
}

/// Delete every entry of `dir` except `.git`; a missing directory is left alone
pub async fn empty_dir(dir: &Path) -> Result<()> {
    if !fs::try_exists(dir).await.map_err(io_error("inspect", dir))? {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .await
        .map_err(io_error("read directory", dir))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(io_error("read directory", dir))?
    {
        if entry.file_name() == GIT_DIR {
            continue;
        }

        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(io_error("inspect", &path))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .await
                .map_err(io_error("remove directory", &path))?;
        } else {
            fs::remove_file(&path)
                .await
                .map_err(io_error("remove file", &path))?;
        }
    }

    Ok(())
}

/// Empty the target when overwriting, otherwise make sure it exists
pub async fn prepare_target(root: &Path, overwrite: bool) -> Result<()> {
    if overwrite {
        empty_dir(root).await
    } else {
        fs::create_dir_all(root)
            .await
            .map_err(io_error("create directory", root))
    }
}

/// Copy a template into `root` and write its manifest under `package_name`
///
/// Rename rules apply to top-level entries only. Returns the written files,
/// relative to `root`. There is no rollback: the first failure is returned and
/// files already written stay in place.
pub async fn copy_template(
    template_dir: &Path,
    root: &Path,
    rename_rules: &[RenameRule],
    package_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut top_level: Vec<OsString> = Vec::new();
    let mut entries = fs::read_dir(template_dir)
        .await
        .map_err(io_error("read directory", template_dir))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(io_error("read directory", template_dir))?
    {
        top_level.push(entry.file_name());
    }
    top_level.sort();

    let mut copied_files = Vec::new();

    for name in top_level.iter().filter(|name| *name != MANIFEST_FILE) {
        let name = name.as_os_str();
        let target_name = renamed(name, rename_rules);
        copy_entry(
            &template_dir.join(name),
            root,
            Path::new(target_name),
            &mut copied_files,
        )
        .await?;
    }

    let manifest_path = template_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&manifest_path)
        .await
        .map_err(io_error("read", &manifest_path))?;
    let patched = rename_manifest(&content, package_name, &manifest_path)?;

    let target_name = renamed(OsStr::new(MANIFEST_FILE), rename_rules);
    let target_path = root.join(target_name);
    fs::write(&target_path, patched)
        .await
        .map_err(io_error("write", &target_path))?;
    copied_files.push(PathBuf::from(target_name));

    Ok(copied_files)
}

/// Recursively copy `src` to `root/relative`, following symlinks
async fn copy_entry(
    src: &Path,
    root: &Path,
    relative: &Path,
    copied_files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            io_error("read", &path)(e.into())
        })?;

        let suffix = entry.path().strip_prefix(src).unwrap_or(Path::new(""));
        // A top-level file walks as itself; joining an empty suffix would add a trailing `/`
        let rel_path = if suffix.as_os_str().is_empty() {
            relative.to_path_buf()
        } else {
            relative.join(suffix)
        };
        let target_path = root.join(&rel_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(io_error("create directory", &target_path))?;
        } else {
            fs::copy(entry.path(), &target_path)
                .await
                .map_err(io_error("copy to", &target_path))?;
            copied_files.push(rel_path);
        }
    }

    Ok(())
}
