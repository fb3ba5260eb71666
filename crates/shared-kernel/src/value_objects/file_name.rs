// crates/shared-kernel/src/value_objects/file_name.rs
use std::{borrow::Borrow, fmt, ops::Deref, path::Path};

use serde::{Deserialize, Serialize};

/// 呼び出し側が与えた識別子そのもの。検証も正規化もしない。
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for FileName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&Path> for FileName {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl Deref for FileName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FileName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
