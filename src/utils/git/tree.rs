//! Building a git tree and index from the files on disk.

use std::fs;
use std::path::Path;

use gix::bstr::{BString, ByteSlice};
use gix::glob::wildmatch;
use gix::index::entry::{Flags, Mode, Stat};
use gix::index::fs::Metadata;
use gix::index::State;
use gix::objs::{tree, Tree};

use super::git_error;
use crate::utils::error::TilError;

// Bits of gix's ignore pattern mode
const NO_SUB_DIR: u32 = 1 << 0;
const MUST_BE_DIR: u32 = 1 << 2;
const NEGATIVE: u32 = 1 << 3;
const ABSOLUTE: u32 = 1 << 4;

/// Patterns from the repository's top-level `.gitignore`
struct IgnoreRules {
    patterns: Vec<(BString, u32)>,
}

impl IgnoreRules {
    fn load(root: &Path) -> Result<Self, TilError> {
        let path = root.join(".gitignore");
        if !path.is_file() {
            return Ok(Self::parse(&[]));
        }

        let bytes = fs::read(&path).map_err(|source| TilError::Read { path, source })?;
        Ok(Self::parse(&bytes))
    }

    fn parse(bytes: &[u8]) -> Self {
        let patterns = gix::ignore::parse(bytes)
            .map(|(pattern, _, _)| (pattern.text, pattern.mode.bits()))
            .collect();
        Self { patterns }
    }

    /// Last matching pattern wins; `!` patterns re-include
    fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        let basename = rel_path.rsplit_once('/').map_or(rel_path, |(_, name)| name);

        self.patterns.iter().fold(false, |ignored, (text, mode)| {
            if mode & MUST_BE_DIR != 0 && !is_dir {
                return ignored;
            }

            let candidate = if mode & (NO_SUB_DIR | ABSOLUTE) == NO_SUB_DIR {
                basename
            } else {
                rel_path
            };

            if wildmatch(text.as_bstr(), candidate.into(), wildmatch::Mode::NO_MATCH_SLASH_LITERAL) {
                mode & NEGATIVE == 0
            } else {
                ignored
            }
        })
    }
}

/// Writes blobs and trees for a working directory, filling an index as it goes
pub struct TreeBuilder<'r> {
    repo: &'r gix::Repository,
    root: &'r Path,
    ignore: IgnoreRules,
}

impl<'r> TreeBuilder<'r> {
    pub fn new(repo: &'r gix::Repository, root: &'r Path) -> Result<Self, TilError> {
        Ok(Self {
            repo,
            root,
            ignore: IgnoreRules::load(root)?,
        })
    }

    /// Build the tree for the whole working directory
    pub fn build(&self, index: &mut State) -> Result<Tree, TilError> {
        self.build_dir(self.root, index)
    }

    fn build_dir(&self, dir: &Path, index: &mut State) -> Result<Tree, TilError> {
        let read_error = |source| TilError::Read { path: dir.to_path_buf(), source };
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| TilError::Git(format!("non UTF-8 file name in {}", dir.display())))?
                .to_string();
            let rel_path = self.relative(&path)?;
            let is_dir = path.is_dir();

            if filename == ".git" || self.ignore.is_ignored(&rel_path, is_dir) {
                continue;
            }

            if is_dir {
                let sub_tree = self.build_dir(&path, index)?;
                // git does not track empty directories
                if sub_tree.entries.is_empty() {
                    continue;
                }
                let oid = self.repo.write_object(&sub_tree).map_err(git_error)?.detach();
                entries.push(tree::Entry {
                    mode: tree::EntryKind::Tree.into(),
                    oid,
                    filename: filename.into(),
                });
            } else if path.is_file() {
                let contents = fs::read(&path).map_err(|source| TilError::Read { path: path.clone(), source })?;
                let oid = self.repo.write_blob(contents).map_err(git_error)?.detach();

                let metadata = Metadata::from_path_no_follow(&path)
                    .map_err(|source| TilError::Read { path: path.clone(), source })?;
                let stat = Stat::from_fs(&metadata).map_err(git_error)?;
                index.dangerously_push_entry(stat, oid, Flags::empty(), Mode::FILE, rel_path.as_bytes().as_bstr());

                entries.push(tree::Entry {
                    mode: tree::EntryKind::Blob.into(),
                    oid,
                    filename: filename.into(),
                });
            }
        }

        sort_tree_entries(&mut entries);
        Ok(Tree { entries })
    }

    /// Repository-relative path with `/` separators
    fn relative(&self, path: &Path) -> Result<String, TilError> {
        let rel = path.strip_prefix(self.root).map_err(git_error)?;
        Ok(rel.to_string_lossy().replace('\\', "/"))
    }
}

/// Git orders tree entries by name, comparing directories as if they ended in `/`
fn sort_tree_entries(entries: &mut [tree::Entry]) {
    let tree_mode: tree::EntryMode = tree::EntryKind::Tree.into();
    entries.sort_by_cached_key(|entry| {
        let mut key = entry.filename.to_vec();
        if entry.mode == tree_mode {
            key.push(b'/');
        }
        key
    });
}
