//! Example discovery
//!
//! A single, non-recursive directory listing filtered by file-name suffix.
//! Entries come back in whatever order the platform's listing returns them;
//! nothing here sorts.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};

/// A source example handed to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for InputFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Lazy view over one directory listing.
///
/// The iterator is single-pass. Directory contents may change between scans,
/// so a second pass needs a fresh [`discover`] call.
#[derive(Debug)]
pub struct ExampleFiles {
    dir: PathBuf,
    suffix: String,
    entries: fs::ReadDir,
}

impl Iterator for ExampleFiles {
    type Item = HarnessResult<InputFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(HarnessError::Discovery {
                        dir: self.dir.clone(),
                        source,
                    }));
                }
            };

            let name = entry.file_name();
            if !matches_suffix(&name, &self.suffix) {
                tracing::trace!(name = %name.to_string_lossy(), "skipping entry without suffix");
                continue;
            }

            if !is_regular_file(&entry) {
                tracing::warn!(
                    "'{}' is not a regular file but matches '{}'; passing it on anyway",
                    name.to_string_lossy(),
                    self.suffix
                );
            }

            return Some(Ok(InputFile::new(normalize_path(&self.dir.join(name)))));
        }
    }
}

/// Open `dir` and return the entries whose file name ends with `suffix`.
///
/// ## Errors
///
/// Returns [`HarnessError::Discovery`] if the directory cannot be listed.
/// Entries that fail to read are yielded as errors by the iterator.
pub fn discover(dir: &Path, suffix: &str) -> HarnessResult<ExampleFiles> {
    let entries = fs::read_dir(dir).map_err(|source| HarnessError::Discovery {
        dir: dir.to_path_buf(),
        source,
    })?;

    Ok(ExampleFiles {
        dir: dir.to_path_buf(),
        suffix: suffix.to_string(),
        entries,
    })
}

/// Whether the entry itself is a regular file. Symlinks are not followed, and
/// an entry whose type cannot be read counts as irregular.
fn is_regular_file(entry: &fs::DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_file())
}

/// Whether a directory entry name is a candidate example.
pub fn matches_suffix(name: &OsStr, suffix: &str) -> bool {
    name.to_string_lossy().ends_with(suffix)
}

/// Lexically normalize a path: drop `.` components and fold `a/..` pairs.
///
/// Does not touch the filesystem, so symlinks are not resolved. A `..` at the
/// root stays at the root; leading `..` on a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_discover_filters_by_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["a.pris", "b.pris", "notes.txt", "c.pris.bak", "pris"] {
            touch(tmp.path(), name);
        }

        let found: BTreeSet<PathBuf> = discover(tmp.path(), ".pris")
            .unwrap()
            .map(|f| f.unwrap().path().to_path_buf())
            .collect();

        let expected: BTreeSet<PathBuf> = ["a.pris", "b.pris"]
            .iter()
            .map(|n| normalize_path(&tmp.path().join(n)))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_discover_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(discover(tmp.path(), ".pris").unwrap().count(), 0);
    }

    #[test]
    fn test_discover_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = discover(&missing, ".pris").unwrap_err();
        match err {
            HarnessError::Discovery { dir, .. } => assert_eq!(dir, missing),
            other => panic!("expected discovery error, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_normalizes_joined_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("examples");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "slides.pris");

        let dotted = tmp.path().join("examples").join("..").join("examples").join(".");
        let files: Vec<_> = discover(&dotted, ".pris").unwrap().map(Result::unwrap).collect();
        assert_eq!(files, vec![InputFile::new(normalize_path(&sub.join("slides.pris")))]);
        assert!(!files[0].to_string().contains(".."));
    }

    #[test]
    fn test_matches_suffix() {
        assert!(matches_suffix(OsStr::new("title.pris"), ".pris"));
        assert!(!matches_suffix(OsStr::new("title.pris~"), ".pris"));
        assert!(!matches_suffix(OsStr::new("title.PRIS"), ".pris"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize_path(Path::new("tests/../examples/x.pris")), PathBuf::from("examples/x.pris"));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("")), PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_path_stops_at_root() {
        assert_eq!(normalize_path(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    fn regularity(dir: &Path) -> BTreeSet<(String, bool)> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (e.file_name().to_string_lossy().into_owned(), is_regular_file(&e))
            })
            .collect()
    }

    #[test]
    fn test_directory_is_not_regular() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "plain.pris");
        fs::create_dir(tmp.path().join("sub.pris")).unwrap();

        let expected: BTreeSet<_> = [("plain.pris".to_string(), true), ("sub.pris".to_string(), false)].into();
        assert_eq!(regularity(tmp.path()), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_not_regular() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "target.pris");
        std::os::unix::fs::symlink(tmp.path().join("target.pris"), tmp.path().join("link.pris")).unwrap();

        let expected: BTreeSet<_> = [("link.pris".to_string(), false), ("target.pris".to_string(), true)].into();
        assert_eq!(regularity(tmp.path()), expected);
    }

    #[test]
    fn test_directory_with_suffix_is_discovered() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub.pris")).unwrap();
        fs::create_dir(tmp.path().join("assets")).unwrap();

        let files: Vec<_> = discover(tmp.path(), ".pris").unwrap().map(Result::unwrap).collect();
        assert_eq!(files, vec![InputFile::new(normalize_path(&tmp.path().join("sub.pris")))]);
    }
}
