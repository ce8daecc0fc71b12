use gitsim_core::Repository;

pub(crate) fn run(repo: &Repository) -> Vec<String> {
    let branch = repo.branch();
    let mut lines = vec![format!("On branch {branch}")];

    let ahead = repo.ahead_count();
    if ahead > 0 {
        lines.push(format!(
            "Your branch is ahead of 'origin/{branch}' by {ahead} commit(s)"
        ));
    } else {
        lines.push(format!("Your branch is up to date with 'origin/{branch}'"));
    }

    lines.push(String::from("Staged files:"));
    push_listing(&mut lines, repo.staged_files(), "(none)");

    lines.push(String::from("Modified (unstaged):"));
    push_listing(&mut lines, repo.working_changes(), "(clean)");

    lines
}

fn push_listing<'a>(
    lines: &mut Vec<String>,
    entries: impl Iterator<Item = &'a str>,
    placeholder: &str,
) {
    let mut empty = true;
    for entry in entries {
        lines.push(format!("  {entry}"));
        empty = false;
    }
    if empty {
        lines.push(format!("  {placeholder}"));
    }
}

#[cfg(test)]
mod tests {
    use gitsim_core::Repository;

    use crate::interpret;

    #[test]
    fn status_lists_both_change_sets() {
        let mut repo = Repository::seeded();
        interpret(&mut repo, "git add README.md");

        let lines = interpret(&mut repo, "git status");

        assert_eq!(lines[0], "On branch main");
        assert_eq!(lines[1], "Your branch is up to date with 'origin/main'");
        assert!(lines.contains(&String::from("Staged files:")));
        assert!(lines.contains(&String::from("  README.md")));
        assert!(lines.contains(&String::from("Modified (unstaged):")));
        assert!(lines.contains(&String::from("  src/app.js")));
    }

    #[test]
    fn status_uses_placeholders_when_sets_are_empty() {
        let mut repo = Repository::new();

        let lines = interpret(&mut repo, "git status");

        assert!(lines.contains(&String::from("  (none)")));
        assert!(lines.contains(&String::from("  (clean)")));
    }

    #[test]
    fn status_reports_ahead_count() {
        let mut repo = Repository::seeded();
        interpret(&mut repo, "git add .");
        interpret(&mut repo, r#"git commit -m "wip""#);

        let lines = interpret(&mut repo, "git status");

        assert_eq!(
            lines[1],
            "Your branch is ahead of 'origin/main' by 1 commit(s)"
        );
    }
}
