use gitsim_core::Repository;

pub(crate) fn run(repo: &Repository) -> Vec<String> {
    if repo.commits().is_empty() {
        return vec![String::from("No commits yet.")];
    }

    let mut lines = Vec::new();
    for commit in repo.commits().iter().rev() {
        let tag = if commit.pushed { "pushed" } else { "local" };
        lines.push(format!("commit {} ({tag})", commit.id));
        lines.push(format!(
            "Author: {} <{}>",
            commit.author_name, commit.author_email
        ));
        lines.push(format!("    {}", commit.message));
        lines.push(String::new());
    }
    lines
}
