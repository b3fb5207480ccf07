/// Default bound on template and query length; the reference scorer used a
/// fixed 128x128 grid, i.e. 127 usable positions per axis.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 127;

/// Explicit grid bounds, passed into [`Grid::with_config`] instead of
/// living as an ambient constant.
///
/// [`Grid::with_config`]: crate::Grid::with_config
#[derive(Debug, Clone, Copy)]
pub struct AlignerConfig {
    max_template_len: usize,
    max_query_len: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            max_template_len: DEFAULT_MAX_SEQUENCE_LEN,
            max_query_len: DEFAULT_MAX_SEQUENCE_LEN,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_template_len(mut self, len: usize) -> Self {
        self.max_template_len = len;
        self
    }

    pub fn with_max_query_len(mut self, len: usize) -> Self {
        self.max_query_len = len;
        self
    }

    pub fn max_template_len(&self) -> usize {
        self.max_template_len
    }

    pub fn max_query_len(&self) -> usize {
        self.max_query_len
    }
}
