use crate::{AlignerConfig, AlignerError};

/// Bounded 2-D score buffer, row = template position, column = query
/// position. Row 0 and column 0 are the empty-prefix boundary and stay
/// zero; the aligner resets the whole buffer before every fill.
///
/// A grid is owned by exactly one scoring context at a time. Sharing one
/// grid across concurrent scoring calls is a correctness bug, which the
/// `&mut` receiver on the fill path rules out; parallel scoring gives each
/// worker its own grid.
#[derive(Debug, Clone)]
pub struct Grid {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Allocates a zeroed `rows x cols` buffer. Fails with
    /// [`AlignerError::AllocationError`] if the storage cannot be obtained.
    pub fn new(rows: usize, cols: usize) -> Result<Self, AlignerError> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(AlignerError::AllocationError { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| AlignerError::AllocationError { rows, cols })?;
        data.resize(cells, 0);
        Ok(Self { data, rows, cols })
    }

    /// Allocates a grid sized for the configured sequence bounds, one row
    /// and column wider than the bounds for the empty-prefix boundary.
    pub fn with_config(config: &AlignerConfig) -> Result<Self, AlignerError> {
        Self::new(config.max_template_len() + 1, config.max_query_len() + 1)
    }

    /// Zeroes every cell in place without reallocating.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
