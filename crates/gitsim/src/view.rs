use gitsim_core::Repository;

/// File-explorer style rendering of the tracked-files read model: one line
/// per tracked path with its status tag.
pub(crate) fn explorer(repo: &Repository) -> Vec<String> {
    let mut lines = vec![String::from("-- files --")];
    for (path, status) in repo.tracked_files() {
        lines.push(format!("{path}  [{status}]"));
    }
    lines
}
