//! Installed-extension records parsed from lister output.

/// A locally installed extension, parsed from one `publisher.name@version`
/// line of lister output. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRef {
    /// Lowercased `publisher.name` identifier, used in URLs.
    pub id: String,
    /// Lowercased publisher segment of the identifier.
    pub publisher: String,
    /// Lowercased name segment of the identifier.
    pub name: String,
    /// Installed version, kept exactly as reported by the lister.
    pub version: String,
}

impl ExtensionRef {
    /// Parse a single lister line.
    ///
    /// Splits on `@` for the version and on the first `.` for
    /// publisher/name. Malformed lines are tolerated: a missing `@` leaves
    /// the version empty, a missing `.` leaves the name empty. Identifier
    /// fields are lowercased; the version is not.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (id, version) = line.split_once('@').unwrap_or((line, ""));
        let (publisher, name) = id.split_once('.').unwrap_or((id, ""));

        Self {
            id: id.to_lowercase(),
            publisher: publisher.to_lowercase(),
            name: name.to_lowercase(),
            version: version.to_string(),
        }
    }
}

/// Sort extensions by name for deterministic output ordering.
///
/// Names are already lowercased at parse time, so this is a plain stable
/// sort. Pure ordering step with no effect on correctness.
pub fn sort_by_name(extensions: &mut [ExtensionRef]) {
    extensions.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_line_and_normalizes_case() {
        let ext = ExtensionRef::parse("Rust-Lang.Rust-Analyzer@0.4.2054");
        assert_eq!(ext.id, "rust-lang.rust-analyzer");
        assert_eq!(ext.publisher, "rust-lang");
        assert_eq!(ext.name, "rust-analyzer");
        assert_eq!(ext.version, "0.4.2054");
    }

    #[test]
    fn version_casing_is_preserved() {
        let ext = ExtensionRef::parse("pub.name@1.0.0-RC1");
        assert_eq!(ext.version, "1.0.0-RC1");
    }

    #[test]
    fn missing_version_separator_yields_empty_version() {
        let ext = ExtensionRef::parse("ms-python.python");
        assert_eq!(ext.id, "ms-python.python");
        assert_eq!(ext.publisher, "ms-python");
        assert_eq!(ext.name, "python");
        assert_eq!(ext.version, "");
    }

    #[test]
    fn missing_dot_yields_empty_name() {
        let ext = ExtensionRef::parse("loner@1.0.0");
        assert_eq!(ext.id, "loner");
        assert_eq!(ext.publisher, "loner");
        assert_eq!(ext.name, "");
        assert_eq!(ext.version, "1.0.0");
    }

    #[test]
    fn splits_on_first_dot_only() {
        let ext = ExtensionRef::parse("a.b.c@2");
        assert_eq!(ext.publisher, "a");
        assert_eq!(ext.name, "b.c");
    }

    #[test]
    fn sort_is_by_name_and_idempotent() {
        let mut exts = vec![
            ExtensionRef::parse("zed.alpha@1"),
            ExtensionRef::parse("abc.zulu@2"),
            ExtensionRef::parse("mid.mike@3"),
        ];
        sort_by_name(&mut exts);
        let names: Vec<&str> = exts.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "mike", "zulu"]);

        let once = exts.clone();
        sort_by_name(&mut exts);
        assert_eq!(exts, once);
    }
}
