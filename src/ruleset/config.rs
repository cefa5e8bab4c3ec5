//! Engine configuration types.

/// Banner configuration for the generated list header.
///
/// The engine never embeds authorship strings; callers pass them in.
#[derive(Debug, Clone)]
pub struct ListMeta {
    /// List name (`# NAME:` line)
    pub name: String,
    /// Author (`# AUTHOR:` line)
    pub author: String,
    /// Repository URL (`# REPO:` line)
    pub repo: String,
}

impl ListMeta {
    /// Create a new ListMeta.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            repo: repo.into(),
        }
    }
}

/// Normalization behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Remove rules already covered by a broader `DOMAIN-SUFFIX` rule.
    pub dedup: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { dedup: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_meta_new() {
        let meta = ListMeta::new("Emby", "KuGouGo", "https://github.com/KuGouGo/Rules");
        assert_eq!(meta.name, "Emby");
        assert_eq!(meta.author, "KuGouGo");
        assert_eq!(meta.repo, "https://github.com/KuGouGo/Rules");
    }

    #[test]
    fn test_default_options_filter() {
        assert!(NormalizeOptions::default().dedup);
    }
}
