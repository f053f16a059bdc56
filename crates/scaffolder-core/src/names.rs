//! Target directory normalization and package name rules

use regex_lite::Regex;
use std::sync::LazyLock;

static VALID_PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9*~-][a-z0-9*._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$")
        .expect("package name pattern is valid")
});
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9~-]+").expect("disallowed pattern is valid"));

/// Trim surrounding whitespace and any trailing run of `/`
pub fn format_target_dir(raw: Option<&str>) -> Option<String> {
    raw.map(|dir| dir.trim().trim_end_matches('/').to_string())
}

/// Check a name against the package registry grammar (optionally `@scope/` prefixed)
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_PACKAGE_NAME.is_match(name)
}

/// Best-effort coercion of an arbitrary project name into a valid package name
///
/// Idempotent: feeding the output back in returns it unchanged.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(&hyphenated[..]);
    DISALLOWED_RUN.replace_all(stripped, "-").into_owned()
}
