/// Third-party relay that receives the contact form POST.
pub const FORM_RELAY_URL: &str = "https://formspree.io/f/xeorerdy";

const DEFAULT_REPO_NAME: &str = "SmartFlow.website";

#[cfg(debug_assertions)]
pub fn is_dev() -> bool {
    true // Development build, self-checks enabled
}

#[cfg(not(debug_assertions))]
pub fn is_dev() -> bool {
    false
}

/// Public path the site is served under, resolved from the build environment.
///
/// `REPO_NAME` and `GITHUB_PAGES` are read when the crate is compiled, the
/// same way the bundler picks its `base` option.
pub fn public_base() -> String {
    base_path(
        option_env!("REPO_NAME"),
        option_env!("GITHUB_PAGES") == Some("true"),
    )
}

pub fn base_path(repo: Option<&str>, is_pages: bool) -> String {
    let repo = repo.unwrap_or(DEFAULT_REPO_NAME);
    if !is_pages || repo.ends_with(".github.io") {
        return "/".to_string();
    }
    format!("/{}/", repo)
}

/// Router basename; `None` when served from the root.
pub fn router_basename() -> Option<String> {
    let base = public_base();
    if base == "/" {
        None
    } else {
        Some(base.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_build_serves_from_root() {
        assert_eq!(base_path(None, false), "/");
        assert_eq!(base_path(Some("whatever"), false), "/");
    }

    #[test]
    fn pages_build_uses_repo_name() {
        assert_eq!(base_path(None, true), "/SmartFlow.website/");
        assert_eq!(base_path(Some("site"), true), "/site/");
    }

    #[test]
    fn user_page_is_served_from_root() {
        assert_eq!(base_path(Some("smartflow.github.io"), true), "/");
    }
}
