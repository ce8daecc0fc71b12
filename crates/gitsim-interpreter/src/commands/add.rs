use gitsim_core::Repository;
use gitsim_parse::AddTarget;

pub(crate) fn run(repo: &mut Repository, target: &AddTarget) -> Vec<String> {
    match target {
        AddTarget::All => repo
            .stage_all()
            .iter()
            .map(|path| format!("staged {path}"))
            .collect(),
        AddTarget::Path(path) => {
            if !repo.is_working_change(path) {
                return vec![format!(
                    "warning: pathspec '{path}' did not match any modified files"
                )];
            }
            repo.stage_file(path);
            vec![format!("staged {path}")]
        }
    }
}
