//! Nix manifest entry rendering.
//!
//! Two fixed output shapes: the current form when the installed version
//! already matches the latest published one, and the update form which
//! additionally records the version being replaced. Rendering is pure;
//! callers write the result to their output stream immediately.

/// One package's provenance and integrity data, produced per extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Human-readable extension name, emitted as a comment.
    pub display_name: String,
    /// Lowercased publisher.
    pub publisher: String,
    /// Lowercased extension name.
    pub name: String,
    /// Latest published version, as resolved from the gallery feed.
    pub latest: String,
    /// Locally installed version; empty when the lister reported none.
    pub installed: String,
    /// Padded base64 SHA-256 digest of the downloaded artifact.
    pub sha256: String,
}

impl ManifestEntry {
    /// Whether the installed version already matches the latest one.
    ///
    /// Plain string equality; the gallery feed's notion of "latest" is
    /// trusted without a version-ordering comparison.
    pub fn is_current(&self) -> bool {
        self.installed == self.latest
    }
}

/// Render an entry in whichever form matches its version state.
pub fn render(entry: &ManifestEntry) -> String {
    if entry.is_current() {
        render_current(entry)
    } else {
        render_update(entry)
    }
}

/// Render the current form: the installed version is already the latest.
pub fn render_current(entry: &ManifestEntry) -> String {
    format!(
        "{{\n  # {}\n  publisher = \"{}\";\n  name = \"{}\";\n  version = \"{}\";\n  sha256 = \"{}\";\n}}\n",
        entry.display_name, entry.publisher, entry.name, entry.latest, entry.sha256
    )
}

/// Render the update form, recording the installed version being replaced.
pub fn render_update(entry: &ManifestEntry) -> String {
    format!(
        "{{\n  # {}\n  publisher = \"{}\";\n  name = \"{}\";\n  version = \"{}\"; # From \"{}\"\n  sha256 = \"{}\";\n}}\n",
        entry.display_name, entry.publisher, entry.name, entry.latest, entry.installed, entry.sha256
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(installed: &str, latest: &str) -> ManifestEntry {
        ManifestEntry {
            display_name: "Rust Analyzer".to_string(),
            publisher: "rust-lang".to_string(),
            name: "rust-analyzer".to_string(),
            latest: latest.to_string(),
            installed: installed.to_string(),
            sha256: "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=".to_string(),
        }
    }

    #[test]
    fn current_form_omits_the_installed_version() {
        let rendered = render(&entry("0.4.2054", "0.4.2054"));
        assert_eq!(
            rendered,
            "{\n  # Rust Analyzer\n  publisher = \"rust-lang\";\n  name = \"rust-analyzer\";\n  version = \"0.4.2054\";\n  sha256 = \"47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=\";\n}\n"
        );
        assert!(!rendered.contains("From"));
    }

    #[test]
    fn update_form_records_both_versions() {
        let rendered = render(&entry("0.4.2000", "0.4.2054"));
        assert_eq!(
            rendered,
            "{\n  # Rust Analyzer\n  publisher = \"rust-lang\";\n  name = \"rust-analyzer\";\n  version = \"0.4.2054\"; # From \"0.4.2000\"\n  sha256 = \"47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=\";\n}\n"
        );
    }

    #[test]
    fn empty_installed_version_renders_the_update_form() {
        let rendered = render(&entry("", "1.0.0"));
        assert!(rendered.contains("version = \"1.0.0\"; # From \"\""));
    }
}
