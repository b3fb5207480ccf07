// Reference scoring parameters for barcode adapter scoring.
pub const DNA_INSERTION_PENALTY: i32 = -7;
pub const DNA_DELETION_PENALTY: i32 = -7;
pub const DNA_MATCH_REWARD: i32 = 4;
pub const DNA_MISMATCH_PENALTY: i32 = -13;
pub const DNA_BRANCH_PENALTY: i32 = -4;

/// The five signed costs driving the fill, fixed for the lifetime of a
/// scoring session.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    pub insertion_penalty: i32,
    pub deletion_penalty: i32,
    pub match_reward: i32,
    pub mismatch_penalty: i32,
    /// Gap cost used instead of `deletion_penalty` when the template base
    /// at the current query column repeats the template base being
    /// consumed.
    pub branch_penalty: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            insertion_penalty: DNA_INSERTION_PENALTY,
            deletion_penalty: DNA_DELETION_PENALTY,
            match_reward: DNA_MATCH_REWARD,
            mismatch_penalty: DNA_MISMATCH_PENALTY,
            branch_penalty: DNA_BRANCH_PENALTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_reference_costs() {
        let params = ScoreParams::default();
        assert_eq!(params.insertion_penalty, -7);
        assert_eq!(params.deletion_penalty, -7);
        assert_eq!(params.match_reward, 4);
        assert_eq!(params.mismatch_penalty, -13);
        assert_eq!(params.branch_penalty, -4);
    }
}
