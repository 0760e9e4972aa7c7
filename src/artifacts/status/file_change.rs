use colored::Colorize;

const LABEL_WIDTH: usize = 4;

/// Staged change: the index compared against the HEAD snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexChangeType {
    Added,
    Modified,
    Deleted,
}

impl std::fmt::Display for IndexChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IndexChangeType::Added => "new file:   ".green(),
            IndexChangeType::Modified => "modified:   ".green(),
            IndexChangeType::Deleted => "deleted:    ".green(),
        };
        write!(f, "{:>width$}{}", "", label, width = LABEL_WIDTH)
    }
}

/// Unstaged change: the working tree compared against the index or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl std::fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WorkspaceChangeType::Modified => "modified:   ".red(),
            WorkspaceChangeType::Deleted => "deleted:    ".red(),
        };
        write!(f, "{:>width$}{}", "", label, width = LABEL_WIDTH)
    }
}
