//! Repository abstraction and coordination
//!
//! The `Repository` type is the facade every command goes through. It wires
//! the lower-level components together (object database, commit store,
//! refs, staging index, workspace) and owns the output writer that
//! user-facing reports are printed to.
//!
//! One `Repository` value is constructed per command and injected into each
//! component; there is no module-level mutable state.

use crate::areas::commit_store::CommitStore;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::error::RepoError;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Repository metadata directory name
pub const REPO_DIR: &str = ".minigit";

/// Object database directory name
const OBJECTS_DIR: &str = "objects";

/// Commit store directory name
const COMMITS_DIR: &str = "commits";

/// Index file name
const INDEX_FILE: &str = "index";

/// Repository handle
///
/// Coordinates all repository operations; this is the entry point the
/// command layer works against.
pub struct Repository {
    /// Repository root path
    path: Box<Path>,
    /// Output writer for user-facing reports (stdout in production)
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Staging index
    index: RefCell<Index>,
    /// Blob object store
    database: Database,
    /// Commit record store
    commits: CommitStore,
    /// Working tree
    workspace: Workspace,
    /// Branch refs and HEAD
    refs: Refs,
}

impl Repository {
    /// Build a repository handle without requiring an existing layout
    ///
    /// Used by `init`; every other command goes through [`Repository::load`].
    pub fn new(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let repo_path = path.join(REPO_DIR);

        let index = Index::new(repo_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(repo_path.join(OBJECTS_DIR).into_boxed_path());
        let commits = CommitStore::new(repo_path.join(COMMITS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repo_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            commits,
            workspace,
            refs,
        })
    }

    /// Load an existing repository, rehydrating the staging index
    ///
    /// # Errors
    ///
    /// `NotARepository` when the metadata directory is absent.
    pub fn load(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let repository = Self::new(path, writer)?;

        if !repository.repo_path().exists() {
            return Err(RepoError::NotARepository.into());
        }

        repository.index.borrow_mut().rehydrate()?;
        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo_path(&self) -> PathBuf {
        self.path.join(REPO_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commits(&self) -> &CommitStore {
        &self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Load the commit HEAD points to, if there is one
    pub fn head_commit(&self) -> anyhow::Result<Option<Commit>> {
        match self.refs.read_head_fingerprint()? {
            Some(fingerprint) => Ok(Some(self.commits.load(&fingerprint)?)),
            None => Ok(None),
        }
    }
}
