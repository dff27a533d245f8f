use std::sync::Arc;

use epsilon_nfa::{Cache, Compiler, Matcher, Nfa};

use crate::{builders::RegexBuilder, Error};

/// A compiled regular expression for full-string matching.
///
/// Cloning a `Regex` shares the compiled automaton instead of copying it.
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    nfa: Arc<Nfa>,
}

impl Regex {
    /// Compiles a regular expression with the default configuration.
    ///
    /// Use [`RegexBuilder`] to change the configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use epsilon_regex::{Error, Regex};
    ///
    /// assert!(Regex::new("(a|b)*").is_ok());
    /// assert_eq!(
    ///     Regex::new(r"\d").unwrap_err(),
    ///     Error::InvalidEscape { ch: 'd', pos: 1 },
    /// );
    /// ```
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        RegexBuilder::new(pattern).build()
    }

    pub(crate) fn compile(
        pattern: &str,
        compiler: &Compiler,
    ) -> Result<Regex, Error> {
        let nfa = compiler.compile(pattern)?;
        Ok(Regex { pattern: Arc::from(pattern), nfa: Arc::new(nfa) })
    }

    /// Returns true if the whole of `text` matches.
    ///
    /// # Example
    ///
    /// ```
    /// use epsilon_regex::Regex;
    ///
    /// let re = Regex::new("a.c").unwrap();
    /// assert!(re.is_match("abc"));
    /// // Matches must span the entire text.
    /// assert!(!re.is_match("xabc"));
    /// ```
    pub fn is_match(&self, text: &str) -> bool {
        Matcher::new(&self.nfa).is_match(text)
    }

    /// Like [`Regex::is_match`], but reuses the scratch space in `cache`.
    ///
    /// # Example
    ///
    /// ```
    /// use epsilon_regex::Regex;
    ///
    /// let re = Regex::new("(ab)*").unwrap();
    /// let mut cache = re.create_cache();
    /// for text in ["", "ab", "abab"] {
    ///     assert!(re.is_match_with(&mut cache, text));
    /// }
    /// ```
    pub fn is_match_with(&self, cache: &mut Cache, text: &str) -> bool {
        Matcher::new(&self.nfa).is_match_with(cache, text)
    }

    /// Creates scratch space suitable for [`Regex::is_match_with`].
    pub fn create_cache(&self) -> Cache {
        Cache::new(&self.nfa)
    }

    /// Returns the pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled automaton.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl std::fmt::Display for Regex {
    /// Shows the original pattern.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Debug for Regex {
    /// Shows the original pattern.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    fn from_str(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}
