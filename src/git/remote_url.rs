use crate::config::{DEFAULT_HOST_ALIAS, DEFAULT_NAMESPACE, HTTPS_PREFIX, SSH_PREFIX};

/// Host alias and account namespace used to expand a short repository name
/// into `git@<host_alias>:<namespace>/<name>.git`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTemplate {
    host_alias: String,
    namespace: String,
}

impl Default for RemoteTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_ALIAS, DEFAULT_NAMESPACE)
    }
}

impl RemoteTemplate {
    pub fn new(host_alias: &str, namespace: &str) -> Self {
        Self {
            host_alias: host_alias.to_string(),
            namespace: namespace.to_string(),
        }
    }

    pub fn host_alias(&self) -> &str {
        &self.host_alias
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Turn a repository argument into a remote URL.
    ///
    /// Full SSH or HTTPS locators are returned unchanged, anything else is
    /// substituted verbatim into the template.
    pub fn resolve(&self, repository: &str) -> String {
        if is_full_url(repository) {
            return repository.to_string();
        }
        format!(
            "{}{}:{}/{}.git",
            SSH_PREFIX, self.host_alias, self.namespace, repository
        )
    }
}

pub fn is_full_url(repository: &str) -> bool {
    repository.starts_with(SSH_PREFIX) || repository.starts_with(HTTPS_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_urls_pass_through() {
        let template = RemoteTemplate::default();
        for url in [
            "git@example.com:org/name.git",
            "git@github.com:someone/project",
            "https://github.com/someone/project.git",
            "https://gitlab.example.org/a/b/c",
        ] {
            assert_eq!(template.resolve(url), url);
        }
    }

    #[test]
    fn test_short_name_uses_template() {
        let template = RemoteTemplate::default();
        assert_eq!(
            template.resolve("myrepo"),
            "git@github-personal:fady17/myrepo.git"
        );
    }

    #[test]
    fn test_short_name_is_substituted_verbatim() {
        let template = RemoteTemplate::new("work", "acme");
        // Nothing is trimmed or escaped
        assert_eq!(template.resolve("my repo"), "git@work:acme/my repo.git");
        assert_eq!(template.resolve("api.git"), "git@work:acme/api.git.git");
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let template = RemoteTemplate::new("work", "acme");
        assert!(!is_full_url("HTTPS://example.com/x.git"));
        assert!(!is_full_url("http://example.com/x.git"));
        assert!(template.resolve("http://example.com/x.git").starts_with("git@work:"));
    }
}
