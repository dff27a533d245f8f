/*!
This crate provides a small regular expression engine that decides whether
a pattern matches the *whole* of a string.

The supported syntax is deliberately tiny:

```text
x       the literal character x
.       any single character
(xy)    a group
(x|y)   alternation, only valid inside a group; any number of alternatives
x*      zero or more of the preceding character or group
\(      a literal metacharacter; only ( ) | * . may be escaped
```

Patterns are compiled to an NFA made of epsilon transitions and simulated
by tracking every reachable state at once. Matching a text of `n`
characters against a pattern of `m` symbols takes `O(m * n)` time in the
worst case, with no backtracking.

# Example

```rust
use epsilon_regex::Regex;

let re = Regex::new("(ab|c)*d").unwrap();
assert!(re.is_match("ababcd"));
assert!(!re.is_match("abd!"));
```

For a one-off check, [`is_match`] compiles and runs in one call:

```rust
assert_eq!(epsilon_regex::is_match("a*", "aaa"), Ok(true));
assert!(epsilon_regex::is_match("a|b", "a").is_err());
```

# Sharing

A [`Regex`] is immutable once built. Cloning it is cheap, and it can be
shared between threads. Each search needs scratch space; [`Regex::is_match`]
allocates it on every call, while [`Regex::is_match_with`] takes a
[`Cache`] owned by the caller so it can be reused.

# Crate features

* **logging** - Emits compilation and simulation details through the `log`
  crate.
*/

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use epsilon_nfa::{Cache, CompileError as Error, Unbalanced};

pub use crate::builders::RegexBuilder;
pub use crate::regex::Regex;

mod builders;
mod regex;

/// Reports whether `text` is entirely matched by `pattern`.
///
/// This compiles `pattern` every time it is called. Use [`Regex`] to
/// compile once and match many times.
///
/// # Errors
///
/// Returns an [`Error`] if `pattern` is malformed.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, Error> {
    Ok(Regex::new(pattern)?.is_match(text))
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
