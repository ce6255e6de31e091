//! Saving and publishing the target directory.
//!
//! Commits are written with `gix`; pushing runs the `git` executable.

mod tree;

use std::fmt::Display;
use std::path::Path;
use std::process::Command;

use chrono::Local;
use gix::bstr::BStr;
use log::debug;

use crate::utils::error::TilError;
use tree::TreeBuilder;

/// Stage the whole working tree and commit it as `name <email>`, returning the new commit id
pub fn save(repo_root: &Path, message: &str, name: &str, email: &str) -> Result<String, TilError> {
    if message.trim().is_empty() {
        return Err(TilError::Git("commit message cannot be empty".to_string()));
    }

    let repo = gix::open(repo_root).map_err(git_error)?;
    let root = repo
        .path()
        .parent()
        .ok_or_else(|| TilError::Git(format!("{} has no working tree", repo_root.display())))?;

    // Rebuild the index from disk, the equivalent of `git add .`
    let mut index = gix::index::State::new(repo.object_hash());
    let tree = TreeBuilder::new(&repo, root)?.build(&mut index)?;
    index.sort_entries();

    let mut index_file = gix::index::File::from_state(index, repo.index_path());
    index_file
        .write(gix::index::write::Options::default())
        .map_err(git_error)?;

    let tree_id = repo.write_object(&tree).map_err(git_error)?;
    let parents: Vec<gix::ObjectId> = repo.head_id().ok().map(|id| id.detach()).into_iter().collect();

    let time = signature_time();
    let signature = gix::actor::SignatureRef {
        name: BStr::new(name),
        email: BStr::new(email),
        time: &time,
    };

    let commit_id = repo
        .commit_as(signature, signature, "HEAD", message, tree_id, parents)
        .map_err(git_error)?;

    debug!("git commit {} in {}", commit_id, root.display());
    Ok(commit_id.to_string())
}

/// Push the current branch to its configured remote
pub fn push(repo_root: &Path) -> Result<(), TilError> {
    debug!("git push (in {})", repo_root.display());

    let output = Command::new("git")
        .arg("push")
        .current_dir(repo_root)
        .output()
        .map_err(|e| TilError::Git(format!("could not run git push: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TilError::Git(format!(
            "git push failed in {}: {}",
            repo_root.display(),
            stderr.trim()
        )));
    }

    Ok(())
}

/// Current local time in git's raw `<seconds> <+hhmm>` form
fn signature_time() -> String {
    let now = Local::now();
    format!("{} {}", now.timestamp(), now.format("%z"))
}

fn git_error(err: impl Display) -> TilError {
    TilError::Git(err.to_string())
}
