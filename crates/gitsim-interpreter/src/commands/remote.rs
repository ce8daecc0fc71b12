use gitsim_core::{PullOutcome, Repository};

pub(crate) fn push(repo: &mut Repository) -> Vec<String> {
    if repo.ahead_count() == 0 {
        return vec![String::from("Everything up-to-date")];
    }

    let count = repo.push();
    vec![format!(
        "Pushed {count} commit(s) to origin/{}",
        repo.branch()
    )]
}

pub(crate) fn pull(repo: &mut Repository) -> Vec<String> {
    match repo.pull() {
        PullOutcome::UpToDate => vec![String::from("Already up to date.")],
        PullOutcome::Merged { .. } => vec![String::from("Pulled latest changes")],
    }
}

#[cfg(test)]
mod tests {
    use gitsim_core::Repository;

    use crate::interpret;

    #[test]
    fn push_reports_count_and_branch() {
        let mut repo = Repository::seeded();
        interpret(&mut repo, "git add README.md");
        interpret(&mut repo, r#"git commit -m "update readme""#);

        let lines = interpret(&mut repo, "git push");

        assert_eq!(lines, vec!["Pushed 1 commit(s) to origin/main"]);
        assert_eq!(repo.ahead_count(), 0);
        assert_eq!(repo.remote_commits().len(), 4);
    }

    #[test]
    fn push_twice_is_idempotent() {
        let mut repo = Repository::seeded();
        interpret(&mut repo, "git add README.md");
        interpret(&mut repo, r#"git commit -m "update readme""#);
        interpret(&mut repo, "git push");

        let remote_before = repo.remote_commits().to_vec();
        let lines = interpret(&mut repo, "git push");

        assert_eq!(lines, vec!["Everything up-to-date"]);
        assert_eq!(repo.remote_commits(), remote_before.as_slice());
    }

    #[test]
    fn pull_reports_up_to_date() {
        let mut repo = Repository::seeded();

        let lines = interpret(&mut repo, "git pull");

        assert_eq!(lines, vec!["Already up to date."]);
    }
}
