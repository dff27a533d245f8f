use epsilon_regex::{is_match, Error, Regex};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

const META: [char; 5] = ['(', ')', '|', '*', '.'];

/// Text over a three letter alphabet, so that patterns built from `a`, `b`
/// and `c` have a fair chance of matching.
#[derive(Clone, Debug)]
struct Abc(String);

impl Arbitrary for Abc {
    fn arbitrary(g: &mut Gen) -> Abc {
        let len = usize::arbitrary(g) % (g.size() + 1);
        Abc((0..len).map(|_| *g.choose(&['a', 'b', 'c']).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Abc>> {
        Box::new(self.0.shrink().map(Abc))
    }
}

fn without_meta(s: &str) -> String {
    s.chars().filter(|c| !META.contains(c) && *c != '\\').collect()
}

quickcheck! {
    fn literal_pattern_matches_only_itself(pattern: String, text: String) -> bool {
        let pattern = without_meta(&pattern);
        is_match(&pattern, &pattern) == Ok(true)
            && is_match(&pattern, &text) == Ok(text == pattern)
            && is_match(&pattern, &format!("{}x", pattern)) == Ok(false)
    }

    fn dot_matches_one_char(text: String) -> bool {
        is_match(".", &text) == Ok(text.chars().count() == 1)
    }

    fn star_matches_runs(text: Abc) -> bool {
        is_match("a*", &text.0) == Ok(text.0.chars().all(|c| c == 'a'))
    }

    fn alternation_matches_either(text: Abc) -> bool {
        is_match("(a|b)", &text.0) == Ok(text.0 == "a" || text.0 == "b")
    }

    fn starred_alternation_matches_alphabet(text: Abc) -> bool {
        let expected = text.0.chars().all(|c| c == 'a' || c == 'b');
        is_match("(a|b)*", &text.0) == Ok(expected)
    }

    fn exactly_one_c(text: Abc) -> bool {
        let expected = text.0.matches('c').count() == 1;
        is_match("(a|b)*c(a|b)*", &text.0) == Ok(expected)
    }

    fn ends_with_a(text: Abc) -> bool {
        is_match(".*a", &text.0) == Ok(text.0.ends_with('a'))
    }

    fn escaped_meta_is_literal(text: String) -> bool {
        META.iter().all(|&m| {
            let pattern = format!("\\{}", m);
            is_match(&pattern, &m.to_string()) == Ok(true)
                && is_match(&pattern, &text) == Ok(text == m.to_string())
        })
    }

    fn other_escapes_are_rejected(ch: char) -> TestResult {
        if META.contains(&ch) {
            return TestResult::discard();
        }
        let pattern = format!("a\\{}", ch);
        TestResult::from_bool(
            Regex::new(&pattern).unwrap_err()
                == Error::InvalidEscape { ch, pos: 2 },
        )
    }

    fn repeated_runs_agree(text: Abc) -> bool {
        let re = Regex::new("((a|b)*c|a)*b*").unwrap();
        let mut cache = re.create_cache();
        let first = re.is_match_with(&mut cache, &text.0);
        let second = re.is_match_with(&mut cache, &text.0);
        let fresh = re.is_match(&text.0);
        first == second && second == fresh
    }
}
