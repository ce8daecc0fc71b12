use gitsim_core::Repository;

pub(crate) fn run(repo: &mut Repository, message: &str) -> Vec<String> {
    if repo.staged_files().count() == 0 {
        return vec![String::from("nothing to commit, working tree clean")];
    }

    let commit = repo.commit(message);
    vec![format!(
        "[{} {}] {}",
        repo.branch(),
        commit.id,
        commit.message
    )]
}
