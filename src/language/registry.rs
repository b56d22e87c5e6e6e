use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in extension table. Extensions carry their leading dot.
const BUILTIN_LANGUAGES: &[(&str, &[&str])] = &[
    ("typescript", &[".ts", ".tsx", ".mts", ".cts"]),
    ("javascript", &[".js", ".jsx", ".mjs", ".cjs"]),
    ("rust", &[".rs"]),
    ("go", &[".go"]),
    ("python", &[".py", ".pyi"]),
    ("java", &[".java"]),
    ("kotlin", &[".kt", ".kts"]),
    ("c", &[".c", ".h"]),
    ("cpp", &[".cpp", ".cc", ".cxx", ".hpp", ".hxx"]),
    ("csharp", &[".cs"]),
    ("ruby", &[".rb"]),
    ("php", &[".php"]),
    ("swift", &[".swift"]),
    ("shell", &[".sh", ".bash", ".zsh"]),
    ("css", &[".css", ".scss", ".less"]),
    ("html", &[".html", ".htm"]),
    ("vue", &[".vue"]),
    ("json", &[".json"]),
    ("yaml", &[".yml", ".yaml"]),
    ("toml", &[".toml"]),
    ("markdown", &[".md", ".markdown"]),
    ("sql", &[".sql"]),
    ("lua", &[".lua"]),
];

static GLOBAL: LazyLock<ExtensionRegistry> = LazyLock::new(|| {
    let registry = ExtensionRegistry::builtin();
    tracing::debug!(entries = registry.len(), "extension registry populated");
    registry
});

/// Maps file extensions (`.ts`) to canonical language names (`typescript`).
///
/// Lookups are exact and case-sensitive: `.TS` only resolves if registered.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    extension_map: HashMap<String, String>,
}

impl ExtensionRegistry {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            extension_map: HashMap::new(),
        }
    }

    /// Registry populated from the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, extensions) in BUILTIN_LANGUAGES {
            registry.register(name, extensions);
        }
        registry
    }

    /// Process-wide registry, populated on first use and shared read-only after.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Later registrations win for an extension that is already mapped.
    pub(crate) fn register(&mut self, name: &str, extensions: &[&str]) {
        for ext in extensions {
            self.extension_map
                .insert((*ext).to_string(), name.to_string());
        }
    }

    /// Language name for `extension`, or `""` when it is not registered.
    ///
    /// An empty registry resolves through the built-in table.
    #[must_use]
    pub fn resolve(&self, extension: &str) -> &str {
        if self.is_empty() {
            return GLOBAL.resolve(extension);
        }
        self.extension_map.get(extension).map_or_else(
            || {
                tracing::trace!(extension, "no language registered");
                ""
            },
            String::as_str,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extension_map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extension_map.is_empty()
    }

    /// All `(extension, language)` pairs, sorted by extension.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .extension_map
            .iter()
            .map(|(ext, name)| (ext.as_str(), name.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve `extension` against the process-wide registry.
#[must_use]
pub fn resolve(extension: &str) -> &'static str {
    ExtensionRegistry::global().resolve(extension)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
