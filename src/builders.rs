use epsilon_nfa::{Compiler, Config};

use crate::{Error, Regex};

/// A configurable builder for a [`Regex`].
///
/// # Example
///
/// ```
/// use epsilon_regex::{Error, RegexBuilder};
///
/// let err = RegexBuilder::new("abcd").size_limit(3).build().unwrap_err();
/// assert_eq!(err, Error::TooComplex { size: 4, limit: 3 });
/// ```
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    config: Config,
}

impl RegexBuilder {
    /// Creates a builder for `pattern` with the default configuration.
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder { pattern: pattern.to_string(), config: Config::new() }
    }

    /// Compiles the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is malformed or larger than the
    /// size limit.
    pub fn build(&self) -> Result<Regex, Error> {
        let compiler = Compiler::new().configure(self.config);
        Regex::compile(&self.pattern, &compiler)
    }

    /// Sets the maximum number of symbols in the pattern.
    ///
    /// An escape sequence such as `\*` counts as a single symbol. The default
    /// is large enough that it only guards against runaway input.
    pub fn size_limit(&mut self, limit: usize) -> &mut RegexBuilder {
        self.config = self.config.size_limit(limit);
        self
    }
}
