//! Failure classification of client output

use crate::models::{Classification, CommandResult};

/// Marker the client prefixes unrecoverable errors with
const FATAL_MARKER: &str = "fatal";

/// Marker emitted by `commit` when the index holds no changes
const NOTHING_TO_COMMIT_MARKER: &str = "nothing to commit";

/// Classifies the outcome of a single client invocation.
///
/// A zero exit code always wins. Otherwise the combined output is matched
/// case-insensitively, the fatal marker taking precedence over the
/// "nothing to commit" marker. Anything else is a recoverable warning.
pub fn classify(result: &CommandResult) -> Classification {
    if result.success() {
        return Classification::Success;
    }

    let text = result.combined_output().to_lowercase();
    if text.contains(FATAL_MARKER) {
        Classification::Fatal
    } else if text.contains(NOTHING_TO_COMMIT_MARKER) {
        Classification::NothingToCommit
    } else {
        Classification::RecoverableWarning
    }
}
