/// Counters a search accumulates as it runs, reported by the CLI binaries
/// alongside the solution path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStatistics {
    pub expanded_nodes: u32,
    pub evaluated_nodes: u32,
    pub generated_nodes: u32,
    pub reopened_nodes: u32,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, count: usize) {
        self.generated_nodes += count as u32;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }
}
