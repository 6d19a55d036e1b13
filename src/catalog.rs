//! Discovery of the template files offered for instantiation.
//!
//! Only regular files directly inside the template directory are listed, and
//! only when they look like text: either a well-known extension-less project
//! file (`Makefile`, `LICENSE`, ...) or a file whose extension is on the text
//! allow-list. Matching on the extension ignores case.

use std::{fs, path::Path};

use crate::errors::{Result, TempletError};

/// Extensions (lowercase, without the dot) treated as text templates.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "js", "html", "css", "yml", "yaml", "json", "xml", "sh", "bash", "zsh",
    "fish", "toml", "ini", "cfg", "conf", "env", "gitignore", "dockerignore", "rst", "tex", "csv",
    "sql", "vim", "lua", "rb", "go", "rs", "java", "c", "cpp", "h", "hpp", "php", "swift", "kt",
    "r", "jl", "ts", "tsx", "jsx", "vue", "svelte", "scss", "sass", "less", "asm", "s", "pl", "pm",
    "tcl", "dart", "gradle", "sbt", "clj", "cljs", "edn", "ex", "exs", "elm", "fs", "fsx", "fsi",
    "ml", "mli", "nim", "nims", "hx", "hxml", "pas", "pp", "inc", "zig", "v", "vsh",
];

/// Exact file names accepted even though they carry no usable extension.
pub const NO_EXTENSION_FILES: &[&str] = &[
    "Dockerfile",
    ".gitignore",
    "Makefile",
    "Rakefile",
    "Gemfile",
    "Pipfile",
    "Procfile",
    "Vagrantfile",
    "Brewfile",
    "Guardfile",
    "Capfile",
    "Thorfile",
    "Berksfile",
    "Appraisals",
    "Fastfile",
    "Appfile",
    "Deliverfile",
    "Matchfile",
    "Scanfile",
    "Gymfile",
    "LICENSE",
    "README",
    "CHANGELOG",
    "AUTHORS",
    "CONTRIBUTORS",
    "COPYING",
    "INSTALL",
    "NEWS",
    "THANKS",
    "HISTORY",
    "NOTICE",
    "MANIFEST",
];

/// Returns true when `name` is an eligible template file name.
pub fn is_supported_file(name: &str) -> bool {
    if NO_EXTENSION_FILES.contains(&name) {
        return true;
    }
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Ordered, immutable list of template names read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from arbitrary names, keeping them sorted.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Scans `dir` (non-recursively) and returns the eligible templates sorted by
/// name.
pub fn list_templates(dir: &Path) -> Result<Catalog> {
    let discovery = |source| TempletError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery)? {
        let entry = entry.map_err(discovery)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        // Follows symlinks so a link to a regular file still counts.
        let is_file = fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if is_file && is_supported_file(&name) {
            names.push(name);
        }
    }

    let catalog = Catalog::from_names(names);
    tracing::debug!(count = catalog.len(), dir = %dir.display(), "template catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_known_names_and_text_extensions() {
        assert!(is_supported_file("Makefile"));
        assert!(is_supported_file("LICENSE"));
        assert!(is_supported_file(".gitignore"));
        assert!(is_supported_file("notes.md"));
        assert!(is_supported_file("NOTES.MD"));
        assert!(is_supported_file("analysis.R"));
        assert!(is_supported_file("archive.tar.sh"));
    }

    #[test]
    fn rejects_binary_and_unknown_names() {
        assert!(!is_supported_file("photo.png"));
        assert!(!is_supported_file("makefile"));
        assert!(!is_supported_file("notes"));
        assert!(!is_supported_file("bundle.tar.gz"));
        assert!(!is_supported_file(".env"));
    }

    #[test]
    fn lists_only_eligible_regular_files_sorted() {
        let dir = tempdir().unwrap();
        for name in ["zeta.txt", "Makefile", "alpha.md", "image.png", "README"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.md")).unwrap();
        fs::write(dir.path().join("nested.md").join("inner.txt"), "x").unwrap();

        let catalog = list_templates(dir.path()).unwrap();
        assert_eq!(
            catalog.names(),
            &["Makefile", "README", "alpha.md", "zeta.txt"]
        );
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let dir = tempdir().unwrap();
        for name in ["b.json", "a.yml", "c.toml"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let first = list_templates(dir.path()).unwrap();
        let second = list_templates(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn matches_reference_filter_on_synthetic_directory() {
        let dir = tempdir().unwrap();
        let candidates = [
            "Dockerfile", "Main.RS", "data.csv", "draft", "song.mp3", "x.Vue", "Procfile",
            "notes.", "query.sql", "core.o",
        ];
        for name in candidates {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let mut expected: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|name| is_supported_file(name))
            .collect();
        expected.sort();

        let catalog = list_templates(dir.path()).unwrap();
        assert_eq!(catalog.names(), expected.as_slice());
        assert!(catalog.names().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn empty_directory_yields_empty_catalog() {
        let dir = tempdir().unwrap();
        let catalog = list_templates(dir.path()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn missing_directory_is_a_discovery_error() {
        let dir = tempdir().unwrap();
        let err = list_templates(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, TempletError::Discovery { .. }));
    }
}
