use crate::error::{ReleaseError, Result};
use semver::Version;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

/// A `package.json` document.
///
/// Kept as an untyped JSON value so fields this tool does not know about
/// survive a rewrite in their original order.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    data: Value,
}

impl PackageManifest {
    /// Path of the manifest inside `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    /// Load `package.json` from a package directory
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        let raw = fs::read_to_string(&path)
            .map_err(|e| ReleaseError::manifest(&path, format!("cannot read: {}", e)))?;
        let data: Value = serde_json::from_str(&raw)
            .map_err(|e| ReleaseError::manifest(&path, format!("invalid JSON: {}", e)))?;

        if !data.is_object() {
            return Err(ReleaseError::manifest(&path, "expected a JSON object"));
        }

        Ok(PackageManifest { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The package name; required for every registry operation
    pub fn name(&self) -> Result<&str> {
        self.data
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ReleaseError::manifest(&self.path, "missing \"name\""))
    }

    pub fn version(&self) -> Option<&str> {
        self.data.get("version").and_then(Value::as_str)
    }

    /// The custom `scripts.publish` command, if the package declares one
    pub fn publish_script(&self) -> Option<&str> {
        self.data
            .get("scripts")
            .and_then(|scripts| scripts.get("publish"))
            .and_then(Value::as_str)
            .filter(|script| !script.trim().is_empty())
    }

    pub fn set_version(&mut self, version: &Version) {
        if let Some(object) = self.data.as_object_mut() {
            object.insert("version".to_string(), Value::String(version.to_string()));
        }
    }

    /// Write the manifest back with two-space indentation and a trailing newline
    pub fn save(&self) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(&self.data)?;
        rendered.push('\n');
        fs::write(&self.path, rendered)
            .map_err(|e| ReleaseError::manifest(&self.path, format!("cannot write: {}", e)))
    }
}

/// Set the version field of the manifest in `dir`
pub fn write_version(dir: &Path, version: &Version) -> Result<()> {
    let mut manifest = PackageManifest::load(dir)?;
    manifest.set_version(version);
    manifest.save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_load_fields() {
        let dir = package(
            r#"{"name":"widget","version":"0.0.0-development","scripts":{"publish":"node publish.js"}}"#,
        );
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name().unwrap(), "widget");
        assert_eq!(manifest.version(), Some("0.0.0-development"));
        assert_eq!(manifest.publish_script(), Some("node publish.js"));
    }

    #[test]
    fn test_missing_name() {
        let dir = package(r#"{"version":"1.0.0"}"#);
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert!(manifest.name().unwrap_err().to_string().contains("missing \"name\""));
    }

    #[test]
    fn test_no_publish_script() {
        let dir = package(r#"{"name":"widget","scripts":{"test":"jest"}}"#);
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.publish_script(), None);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = PackageManifest::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = package("{ not json");
        assert!(PackageManifest::load(dir.path()).is_err());
        let array = package("[1, 2]");
        assert!(PackageManifest::load(array.path()).is_err());
    }

    #[test]
    fn test_write_version_preserves_other_fields_and_order() {
        let dir = package(r#"{"name":"widget","version":"1.0.0","main":"index.js","files":["dist"]}"#);
        write_version(dir.path(), &Version::new(1, 1, 0)).unwrap();

        let written = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"widget\",\n  \"version\": \"1.1.0\",\n  \"main\": \"index.js\",\n  \"files\": [\n    \"dist\"\n  ]\n}\n"
        );
    }

    #[test]
    fn test_write_version_adds_missing_field() {
        let dir = package(r#"{"name":"widget"}"#);
        write_version(dir.path(), &Version::new(2, 0, 0)).unwrap();
        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.version(), Some("2.0.0"));
    }
}
