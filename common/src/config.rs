#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops the banner, headers and the metrics
    /// block, `2` additionally drops the per-host tree.
    pub quiet: u8,
    /// Masks IP addresses in terminal output.
    ///
    /// Does not affect `--json` output or computed metrics.
    pub redact: bool,
}

impl Config {
    /// Banner, section headers and the metrics block.
    pub fn shows_sections(&self) -> bool {
        self.quiet == 0
    }

    pub fn shows_host_tree(&self) -> bool {
        self.quiet < 2
    }
}
