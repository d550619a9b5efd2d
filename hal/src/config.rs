use core::fmt;

/// Failure reported by a configuration applicator.
///
/// Opaque to the board package: it is propagated, never interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use = "configuration errors must be handled"]
pub struct ConfigError {
    /// Which applicator failed ("clock", "pins", ...).
    pub source: &'static str,
    /// Applicator-specific status code.
    pub code: u32,
}

impl ConfigError {
    pub const fn new(source: &'static str, code: u32) -> Self {
        Self { source, code }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration failed (0x{:08x})", self.source, self.code)
    }
}

impl core::error::Error for ConfigError {}
