use gitsim_core::Repository;

pub(crate) fn run(repo: &mut Repository, branch: &str) -> Vec<String> {
    if repo.branch() == branch {
        return vec![format!("Already on '{branch}'")];
    }

    repo.switch_branch(branch);
    vec![format!("Switched to branch '{branch}'")]
}

#[cfg(test)]
mod tests {
    use gitsim_core::Repository;

    use crate::interpret;

    #[test]
    fn switch_rebinds_the_branch_pointer() {
        let mut repo = Repository::seeded();

        let lines = interpret(&mut repo, "git switch feature/quiz");

        assert_eq!(lines, vec!["Switched to branch 'feature/quiz'"]);
        assert_eq!(repo.branch(), "feature/quiz");
    }

    #[test]
    fn switch_to_current_branch_is_a_no_op() {
        let mut repo = Repository::seeded();

        let lines = interpret(&mut repo, "git switch main");

        assert_eq!(lines, vec!["Already on 'main'"]);
        assert_eq!(repo.branch(), "main");
    }

    #[test]
    fn switch_leaves_history_and_changes_alone() {
        let mut repo = Repository::seeded();
        let commits_before = repo.commits().to_vec();

        interpret(&mut repo, "git switch feature/quiz");

        assert_eq!(repo.commits(), commits_before.as_slice());
        assert!(repo.is_working_change("README.md"));
        assert!(repo.is_working_change("src/app.js"));
    }
}
