//! # File content record.
//!
//! [`FileContent`] mirrors the JSON shape the application receives from the
//! server's file endpoint: the file text plus the parallel `start`/`end` line
//! lists of its known buggy spans and the commit messages that fixed them.
//!
//! Plain data shape only: nothing here constructs, validates, or interprets
//! the record, and no invariant between the fields is enforced.

use serde::{Deserialize, Serialize};

/// File content with its highlightable spans, as served by the backend.
///
/// Field names match the wire format (snake_case), so no renames are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Full text of the file.
    pub content: String,
    /// Start line of each known span.
    pub start: Vec<u32>,
    /// End line of each known span.
    pub end: Vec<u32>,
    /// Commit message associated with each span.
    pub commit_message: Vec<String>,
}
