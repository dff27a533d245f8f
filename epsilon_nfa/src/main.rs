use epsilon_nfa::{Compiler, Matcher, Nfa};

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.split_first() {
        Some((pattern, texts)) => run(pattern, texts),
        None => demo(),
    }
}

/// Compiles `pattern`, prints its NFA and the verdict for each text.
fn run(pattern: &str, texts: &[String]) {
    let nfa = Compiler::new().compile(pattern).unwrap_or_else(|e| {
        eprintln!("error: failed to compile pattern: {}", e);
        process::exit(1);
    });
    print_nfa(pattern, &nfa);

    let matcher = Matcher::new(&nfa);
    for text in texts {
        let verdict = if matcher.is_match(text) { "match" } else { "no match" };
        println!("{:?}: {}", text, verdict);
    }
}

fn demo() {
    println!("Epsilon NFA Compiler - NFA Structure Demo");
    println!("=========================================");

    let test_patterns = [
        "ab",
        "a*",
        ".",
        "(a|b)",
        "(a|b)*",
        "(a|b|c)",
        "x(yz)*",
        "((a|b)*c|d)*e",
        r"\(\*\)",
        // Rejected patterns.
        "a|b",
        "(a",
        "a)",
        r"\x",
        r"a\",
    ];

    for pattern in test_patterns {
        match Compiler::new().compile(pattern) {
            Ok(nfa) => print_nfa(pattern, &nfa),
            Err(e) => {
                println!("\n=== Pattern: '{}' ===", pattern);
                println!("Failed to compile: {}", e);
            }
        }
    }
}

fn print_nfa(pattern: &str, nfa: &Nfa) {
    println!("\n=== Pattern: '{}' ===", pattern);
    println!("Start state: {}", nfa.start());
    println!("Accepting state: {}", nfa.accept());
    println!("Epsilon edges: {}", nfa.graph().edge_count());
    println!("States:");
    print!("{}", nfa);
}
