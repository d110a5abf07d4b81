/// Default bound on container nesting, deep enough for any sane config.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum container nesting depth before parsing fails with
    /// [`Error::DepthExceeded`](crate::Error::DepthExceeded).
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
