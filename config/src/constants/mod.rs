//! Centralized configuration values shared across the converter crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

/// ECMAScript edition whose grammar the converter understands.
///
/// # Examples
/// ```
/// use config::constants::ECMA_VERSION;
/// assert_eq!(ECMA_VERSION, 2025);
/// ```
pub const ECMA_VERSION: u32 = 2025;

/// Separators accepted between a grammar qualifier and the plain rule name.
///
/// A CST producer may spell a rule either as `BinaryExpression` or as a
/// fully-qualified `Es2025Parser.BinaryExpression` / `es2025::BinaryExpression`.
/// Longer separators come first so `::` is never split on a single `:`.
///
/// # Examples
/// ```
/// use config::constants::RULE_QUALIFIER_SEPARATORS;
/// assert!(RULE_QUALIFIER_SEPARATORS.contains(&"::"));
/// ```
pub const RULE_QUALIFIER_SEPARATORS: [&str; 2] = ["::", "."];

/// Whether decoration tokens are attached to AST nodes by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ATTACH_TOKENS;
/// assert!(DEFAULT_ATTACH_TOKENS);
/// ```
pub const DEFAULT_ATTACH_TOKENS: bool = true;

/// Whether `( expr )` produces a `ParenthesizedExpression` node by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PRESERVE_PARENS;
/// assert!(DEFAULT_PRESERVE_PARENS);
/// ```
pub const DEFAULT_PRESERVE_PARENS: bool = true;

/// Whether arrow parameters that cannot form a binding pattern degrade
/// gracefully instead of failing the conversion.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LENIENT_ARROW_PARAMS;
/// assert!(DEFAULT_LENIENT_ARROW_PARAMS);
/// ```
pub const DEFAULT_LENIENT_ARROW_PARAMS: bool = true;

/// Maximum number of characters of source text quoted in error messages.
///
/// # Examples
/// ```
/// use config::constants::MAX_ERROR_SNIPPET_CHARS;
/// assert!(MAX_ERROR_SNIPPET_CHARS >= 8);
/// ```
pub const MAX_ERROR_SNIPPET_CHARS: usize = 32;

/// Source type assumed for a bare `Program` root that contains no
/// import/export declarations.
///
/// # Examples
/// ```
/// use config::constants::SourceKind;
/// assert_eq!(SourceKind::default(), SourceKind::Script);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Classic script goal symbol.
    #[default]
    Script,
    /// ES module goal symbol.
    Module,
}

/// Immutable snapshot of converter settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ConverterConfig;
/// let config = ConverterConfig::default();
/// assert!(config.preserve_parens);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Attach keyword/punctuator decoration tokens to AST nodes.
    pub attach_tokens: bool,
    /// Keep `( expr )` as a `ParenthesizedExpression` node.
    pub preserve_parens: bool,
    /// Degrade unresolvable arrow parameters instead of failing.
    pub lenient_arrow_params: bool,
    /// Source type for roots that do not declare one.
    pub default_source_type: SourceKind,
    /// Characters of source text quoted in error messages.
    pub max_snippet_chars: usize,
}

impl ConverterConfig {
    /// Builds a configuration, rejecting values that would make error
    /// reporting useless.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConverterConfig, SourceKind};
    /// let cfg = ConverterConfig::new(false, true, true, SourceKind::Module, 16).expect("valid config");
    /// assert_eq!(cfg.default_source_type, SourceKind::Module);
    /// assert!(ConverterConfig::new(true, true, true, SourceKind::Script, 0).is_err());
    /// ```
    pub fn new(
        attach_tokens: bool,
        preserve_parens: bool,
        lenient_arrow_params: bool,
        default_source_type: SourceKind,
        max_snippet_chars: usize,
    ) -> Result<Self, ConfigError> {
        if max_snippet_chars == 0 {
            return Err(ConfigError::InvalidSnippetLength(max_snippet_chars));
        }
        Ok(Self {
            attach_tokens,
            preserve_parens,
            lenient_arrow_params,
            default_source_type,
            max_snippet_chars,
        })
    }

    /// Returns a copy with decoration tokens switched on or off.
    pub fn with_tokens(mut self, attach_tokens: bool) -> Self {
        self.attach_tokens = attach_tokens;
        self
    }

    /// Returns a copy with parenthesized-expression preservation switched.
    pub fn with_parens(mut self, preserve_parens: bool) -> Self {
        self.preserve_parens = preserve_parens;
        self
    }

    /// Returns a copy with arrow-parameter leniency switched.
    pub fn with_lenient_arrow_params(mut self, lenient: bool) -> Self {
        self.lenient_arrow_params = lenient;
        self
    }

    /// Returns a copy with a different default source type.
    pub fn with_source_type(mut self, source_type: SourceKind) -> Self {
        self.default_source_type = source_type;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            attach_tokens: DEFAULT_ATTACH_TOKENS,
            preserve_parens: DEFAULT_PRESERVE_PARENS,
            lenient_arrow_params: DEFAULT_LENIENT_ARROW_PARAMS,
            default_source_type: SourceKind::Script,
            max_snippet_chars: MAX_ERROR_SNIPPET_CHARS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when error snippets would be truncated to nothing.
    #[error("max_snippet_chars must be >= 1: {0}")]
    InvalidSnippetLength(usize),
}
