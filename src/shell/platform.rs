//! Platform detection.

/// Environment variables whose presence means we are running under CI.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used in `main()` to force non-interactive mode, so a missing commit
/// message fails fast instead of waiting on a prompt nobody will answer.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}
