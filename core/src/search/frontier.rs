use std::cmp::Ordering;

/// Priority-queue entry shared by the informed searches.
///
/// `priority` is `g + h` for A* and `h` alone for Greedy. `sequence` is a
/// monotonic insertion counter: among equal priorities, the earlier insertion
/// wins, which keeps heap pops deterministic.
pub struct FrontierEntry {
    pub priority: f64,
    pub sequence: u64,
    pub stop: String,
    pub path: Vec<String>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is a max-heap by default);
        // NaN priorities compare as Equal and fall through to the sequence.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
