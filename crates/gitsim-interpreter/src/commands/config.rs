use gitsim_core::Repository;

pub(crate) fn run(repo: &mut Repository, name: Option<&str>, email: Option<&str>) -> Vec<String> {
    repo.set_identity(name, email);

    let mut lines = Vec::new();
    if let Some(name) = name {
        lines.push(format!("Set user.name='{name}'"));
    }
    if let Some(email) = email {
        lines.push(format!("Set user.email='{email}'"));
    }
    lines
}
