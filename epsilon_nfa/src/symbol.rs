use crate::{CompileError, CompileResult};

/// One matching unit of a parsed pattern.
///
/// Every variant except [`Symbol::Literal`] stands for an unescaped
/// metacharacter. An escaped metacharacter such as `\*` becomes a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Matches exactly this character.
    Literal(char),
    /// `.`, matches any single character.
    Any,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `|`
    Alternate,
    /// `*`
    Star,
}

impl Symbol {
    /// Classifies a single unescaped pattern character.
    pub fn from_char(ch: char) -> Symbol {
        match ch {
            '.' => Symbol::Any,
            '(' => Symbol::Open,
            ')' => Symbol::Close,
            '|' => Symbol::Alternate,
            '*' => Symbol::Star,
            c => Symbol::Literal(c),
        }
    }

    /// Returns true for the five metacharacters `( ) | * .`.
    pub fn is_meta_char(ch: char) -> bool {
        matches!(ch, '(' | ')' | '|' | '*' | '.')
    }

    /// True if this symbol is an unescaped metacharacter.
    pub fn is_meta(&self) -> bool {
        !matches!(self, Symbol::Literal(_))
    }

    /// The character this symbol was written as in the pattern, after
    /// escapes are resolved.
    pub fn value(&self) -> char {
        match *self {
            Symbol::Literal(c) => c,
            Symbol::Any => '.',
            Symbol::Open => '(',
            Symbol::Close => ')',
            Symbol::Alternate => '|',
            Symbol::Star => '*',
        }
    }

    /// Returns true if this symbol consumes `ch`.
    ///
    /// Structural symbols never consume input.
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        match *self {
            Symbol::Any => true,
            Symbol::Literal(c) => c == ch,
            _ => false,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Symbol::Literal(c) if Symbol::is_meta_char(c) => write!(f, "\\{}", c),
            s => write!(f, "{}", s.value()),
        }
    }
}

/// Parses `pattern` into its symbol sequence.
///
/// A backslash followed by one of `( ) | * .` yields a literal for that
/// character. Any other escaped character is an error, and so is a backslash
/// at the end of the pattern. Errors are reported for the first offending
/// position from the left.
pub fn parse(pattern: &str) -> CompileResult<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars().enumerate();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            symbols.push(Symbol::from_char(ch));
            continue;
        }
        match chars.next() {
            Some((_, escaped)) if Symbol::is_meta_char(escaped) => {
                symbols.push(Symbol::Literal(escaped));
            }
            Some((pos, escaped)) => {
                return Err(CompileError::InvalidEscape { ch: escaped, pos });
            }
            None => return Err(CompileError::UnterminatedEscape { pos }),
        }
    }

    Ok(symbols)
}
