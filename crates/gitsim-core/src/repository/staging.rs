use super::Repository;

impl Repository {
    /// Moves `path` from the working set into the staging set.
    ///
    /// Callers check membership first; staging a path without a working
    /// change is a no-op.
    pub fn stage_file(&mut self, path: &str) {
        if self.working.shift_remove(path) {
            self.staged.insert(String::from(path));
        }
    }

    /// Moves every working change into the staging set. Returns the staged
    /// paths in their original order.
    pub fn stage_all(&mut self) -> Vec<String> {
        let moved: Vec<String> = self.working.drain(..).collect();
        for path in &moved {
            self.staged.insert(path.clone());
        }
        moved
    }
}
