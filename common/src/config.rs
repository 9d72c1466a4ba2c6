#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner line printed on startup.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides banner and headers, `2` also hides the summary tree.
    pub quiet: u8,
}
