use gitsim_core::Repository;

pub(crate) fn push(repo: &mut Repository, message: &str) -> Vec<String> {
    repo.stash_push(message);
    vec![format!("Saved working directory state '{message}'")]
}

pub(crate) fn list(repo: &Repository) -> Vec<String> {
    if !repo.has_stashes() {
        return vec![String::from("No stashes.")];
    }

    repo.stashes()
        .enumerate()
        .map(|(i, entry)| format!("stash@{{{i}}}: {}", entry.message))
        .collect()
}

pub(crate) fn pop(repo: &mut Repository) -> Vec<String> {
    match repo.stash_pop() {
        Some(entry) => vec![format!("Applied and dropped stash ({})", entry.message)],
        None => vec![String::from("No stash entries.")],
    }
}
