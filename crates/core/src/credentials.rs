//! API-key resolution through an ordered chain of credential sources.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// A source that may be able to supply an API key.
pub trait CredentialProvider {
    /// A human-readable name of the source, used in error messages.
    fn name(&self) -> String;

    /// Returns the credential if this source can supply one.
    fn try_get(&self) -> Option<String>;
}

/// A key handed in explicitly, e.g. from a command-line argument or an
/// interactive prompt. Declines when no value was given.
pub struct ExplicitKey(Option<String>);

impl ExplicitKey {
    /// Wraps an optional explicit key.
    #[inline]
    pub fn new(key: Option<String>) -> Self {
        Self(key)
    }
}

impl CredentialProvider for ExplicitKey {
    fn name(&self) -> String {
        "explicit value".to_owned()
    }

    fn try_get(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.trim().is_empty())
    }
}

/// A key read from a process environment variable.
pub struct EnvKey {
    var: String,
}

impl EnvKey {
    /// Creates a source reading the given environment variable.
    #[inline]
    pub fn new<S: Into<String>>(var: S) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvKey {
    fn name(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn try_get(&self) -> Option<String> {
        env::var(&self.var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Deserialize)]
struct Secrets {
    api_key: Option<String>,
}

/// A key read from a JSON secrets file with an `api_key` field.
///
/// A missing or unreadable file simply declines; it is not an error.
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    /// Creates a source reading the given secrets file.
    #[inline]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the conventional secrets path under the user's home
    /// directory, when one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("diary-friend")
                .join("secrets.json"),
        )
    }
}

impl CredentialProvider for SecretsFile {
    fn name(&self) -> String {
        format!("secrets file {}", self.path.display())
    }

    fn try_get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let secrets: Secrets = match serde_json::from_str(&raw) {
            Ok(secrets) => secrets,
            Err(err) => {
                warn!("ignoring malformed secrets file: {err}");
                return None;
            }
        };
        secrets.api_key.filter(|key| !key.trim().is_empty())
    }
}

/// Tries each provider in order and returns the first key supplied.
///
/// When every source declines, the error names all of them so the user
/// knows where a key would have been accepted.
pub fn resolve_api_key(
    providers: &[Box<dyn CredentialProvider>],
) -> Result<String, ConfigError> {
    for provider in providers {
        if let Some(key) = provider.try_get() {
            debug!("using API key from {}", provider.name());
            return Ok(key);
        }
    }
    Err(ConfigError::MissingCredential {
        searched: providers.iter().map(|p| p.name()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    struct Declining;

    impl CredentialProvider for Declining {
        fn name(&self) -> String {
            "always declines".to_owned()
        }

        fn try_get(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_chain_order() {
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(Declining),
            Box::new(ExplicitKey::new(Some("sk-first".to_owned()))),
            Box::new(ExplicitKey::new(Some("sk-second".to_owned()))),
        ];
        assert_eq!(resolve_api_key(&providers).unwrap(), "sk-first");
    }

    #[test]
    fn test_all_declined() {
        let providers: Vec<Box<dyn CredentialProvider>> = vec![
            Box::new(Declining),
            Box::new(ExplicitKey::new(None)),
            Box::new(ExplicitKey::new(Some("   ".to_owned()))),
        ];
        let err = resolve_api_key(&providers).unwrap_err();
        let ConfigError::MissingCredential { searched } = err;
        assert_eq!(searched.len(), 3);
        assert_eq!(searched[0], "always declines");
    }

    #[test]
    fn test_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "api_key": "sk-from-file" }}"#).unwrap();

        let source = SecretsFile::new(&path);
        assert_eq!(source.try_get(), Some("sk-from-file".to_owned()));
    }

    #[test]
    fn test_secrets_file_missing_or_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = SecretsFile::new(dir.path().join("nope.json"));
        assert_eq!(missing.try_get(), None);

        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(SecretsFile::new(&path).try_get(), None);
    }
}
