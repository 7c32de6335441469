/// Resource limits for a single solver run.
///
/// The search space is exponential in box count and there is no other
/// stopping condition for unsolvable or very large puzzles, so callers that
/// can't block forever should set a budget. Exhausting it is reported as a
/// distinct outcome, not as "no solution".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Abort the search once this many states have been created.
    pub max_created: Option<u64>,
}

impl Limits {
    pub fn max_created(max: u64) -> Self {
        Limits {
            max_created: Some(max),
        }
    }
}
