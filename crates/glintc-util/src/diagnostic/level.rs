//! Severity levels and color policy for diagnostic output.

use std::fmt;

/// Severity of a diagnostic.
///
/// Ordered from least to most severe: `Help < Note < Warning < Error`.
///
/// # Examples
///
/// ```
/// use glintc_util::diagnostic::Level;
///
/// assert!(Level::Error > Level::Warning);
/// assert!(Level::Warning > Level::Note);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Help,
    Note,
    Warning,
    Error,
}

impl Level {
    /// Short lowercase name used in diagnostic headers (`error`, `warning`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use glintc_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// ANSI color code conventionally associated with this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use glintc_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.color_code(), 31);
    /// ```
    pub const fn color_code(&self) -> u8 {
        match self {
            Level::Error => 31,   // red
            Level::Warning => 33, // yellow
            Level::Note => 36,    // cyan
            Level::Help => 32,    // green
        }
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a label underline should be rendered under a source snippet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// The primary span the diagnostic is about, rendered with `^`.
    Primary,
    /// A secondary, supporting span, rendered with `-`.
    Secondary,
}

impl LabelStyle {
    /// The underline character used for this style.
    pub const fn indicator(&self) -> char {
        match self {
            LabelStyle::Primary => '^',
            LabelStyle::Secondary => '-',
        }
    }
}

/// When to emit ANSI color escapes.
///
/// # Examples
///
/// ```
/// use glintc_util::diagnostic::ColorConfig;
///
/// assert!(ColorConfig::Always.use_color(false));
/// assert!(!ColorConfig::Never.use_color(true));
/// assert!(ColorConfig::Auto.use_color(true));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorConfig {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorConfig {
    /// Decide whether to color output, given whether the destination is a tty.
    pub const fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Always => true,
            ColorConfig::Never => false,
            ColorConfig::Auto => is_tty,
        }
    }
}
