use epsilon_regex::Regex;

/// Runs `text` through `pattern` and checks that the closures visited no
/// more than `(n + 1) * (m + 1)` states.
fn assert_bounded(pattern: &str, text: &str, expected: bool) {
    crate::init_logging();

    let re = Regex::new(pattern).unwrap();
    let mut cache = re.create_cache();
    assert_eq!(re.is_match_with(&mut cache, text), expected, "{}", pattern);

    let n = text.chars().count();
    let bound = (n + 1) * re.nfa().state_count();
    assert!(
        cache.visits() <= bound,
        "pattern {:?} visited {} states, bound is {}",
        pattern,
        cache.visits(),
        bound
    );
}

#[test]
fn nested_stars() {
    let text = "a".repeat(2_000);
    assert_bounded("((((((a*)*)*)*)*)*)*", &text, true);
    assert_bounded("((((((a*)*)*)*)*)*)*b", &text, false);
}

#[test]
fn ambiguous_alternation() {
    // A backtracking engine takes exponential time on these.
    let text = "a".repeat(1_000);
    assert_bounded("(a|aa)*", &text, true);
    assert_bounded("(a|a)*b", &text, false);
    assert_bounded("(a*)*(a*)*(a*)*c", &text, false);
}

#[test]
fn stacked_wildcards() {
    let text = "xy".repeat(1_000);
    assert_bounded(".*.*.*.*.*y", &text, true);
    assert_bounded("(.*x)*(.*y)*", &text, true);
}

#[test]
fn visits_grow_linearly_with_text() {
    let re = Regex::new("((a|b)*(a|b)*)*").unwrap();
    let mut cache = re.create_cache();

    assert!(re.is_match_with(&mut cache, &"ab".repeat(100)));
    let short = cache.visits();
    assert!(re.is_match_with(&mut cache, &"ab".repeat(1_000)));
    let long = cache.visits();

    // Ten times the text never costs more than ten times the work, plus
    // one initial closure.
    assert!(long <= 10 * short + re.nfa().state_count(), "{} vs {}", long, short);
}

#[test]
fn early_mismatch_is_cheap() {
    let re = Regex::new("(a|b)*").unwrap();
    let mut cache = re.create_cache();
    let text = format!("c{}", "a".repeat(10_000));
    assert!(!re.is_match_with(&mut cache, &text));
    // Only the initial closure ran.
    assert!(cache.visits() <= re.nfa().state_count());
}
