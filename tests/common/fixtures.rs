// tests/common/fixtures.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const MAIN_RS: &str = "// entry point\nfn main() {\n    /* inline */\n    println!(\"hi\");\n}\n";
pub const UTIL_PY: &str =
    "#!/usr/bin/env python3\n\"\"\"\nDocstring.\n\"\"\"\n\ndef f():\n    return 1  # trailing\n";

/// 一時ディレクトリ上のサンプルプロジェクト
pub struct Workspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create tempdir") }
    }

    /// src/main.rs (code 3, comment 2) と lib/util.py (code 3, comment 3, blank 1)
    pub fn sample() -> Self {
        let ws = Self::new();
        ws.write_file("src/main.rs", MAIN_RS);
        ws.write_file("lib/util.py", UTIL_PY);
        ws.write_file("data.unknownext", "ignored\n");
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }
}
