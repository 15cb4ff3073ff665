//! Test helpers for seeding space data on disk.

use camino::{Utf8Path, Utf8PathBuf};
use dutyshare_core::test_support::sample_snapshot;
use tempfile::TempDir;

/// Temporary directory holding a snapshot of the sample flat.
pub(super) struct SpaceFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SpaceFiles {
    pub(super) fn new() -> Self {
        let files = Self::empty();
        files.write_snapshot();
        files
    }

    pub(super) fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write_snapshot(&self) {
        let payload = serde_json::to_vec_pretty(&sample_snapshot()).expect("encode snapshot");
        write_utf8(&self.snapshot(), &payload);
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn snapshot(&self) -> Utf8PathBuf {
        self.root.join("space.json")
    }

    pub(super) fn preferences(&self) -> Utf8PathBuf {
        self.root.join("prefs/ana.json")
    }

    #[cfg(feature = "store-sqlite")]
    pub(super) fn database(&self) -> Utf8PathBuf {
        let path = self.root.join("space.db");
        if !path.exists() {
            let snapshot = sample_snapshot();
            dutyshare_core::test_support::write_space_database(
                path.as_std_path(),
                &snapshot.tasks,
                &snapshot.members,
            )
            .expect("write space database");
        }
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent.as_std_path()).expect("create parent");
    }
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}
