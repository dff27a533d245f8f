use crate::nfa::{Nfa, StateId};
use crate::sparse_set::SparseSet;

/// Mutable scratch space for a [`Matcher`].
///
/// A cache can be reused across searches, and across different NFAs, to
/// avoid reallocating. It must not be shared by two searches running at the
/// same time, which the `&mut` borrow in [`Matcher::is_match_with`]
/// enforces.
#[derive(Clone, Debug)]
pub struct Cache {
    /// States reachable before consuming the next character.
    reachable: SparseSet,
    /// States reached by consuming the current character. Drained by each
    /// epsilon closure.
    matched: SparseSet,
    /// Explicit stack for the depth-first epsilon closure.
    stack: Vec<StateId>,
    /// Number of states visited by closures during the last search.
    visits: usize,
}

impl Cache {
    pub fn new(nfa: &Nfa) -> Cache {
        Cache {
            reachable: SparseSet::new(nfa.state_count()),
            matched: SparseSet::new(nfa.state_count()),
            stack: vec![],
            visits: 0,
        }
    }

    /// Number of states visited while computing epsilon closures during the
    /// most recent search.
    ///
    /// Each closure visits a state at most once, so a search over `n`
    /// characters visits at most `(n + 1) * state_count` states.
    pub fn visits(&self) -> usize {
        self.visits
    }

    fn reset(&mut self, nfa: &Nfa) {
        if self.reachable.capacity() != nfa.state_count() {
            self.reachable.resize(nfa.state_count());
            self.matched.resize(nfa.state_count());
        } else {
            self.reachable.clear();
            self.matched.clear();
        }
        self.stack.clear();
        self.visits = 0;
    }
}

/// Runs a compiled [`Nfa`] against input text.
///
/// All states the automaton could be in are tracked together, one input
/// character at a time, so no choice is ever backtracked over.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    pub fn nfa(&self) -> &'a Nfa {
        self.nfa
    }

    /// Check if the entire input matches.
    pub fn is_match(&self, text: &str) -> bool {
        let mut cache = Cache::new(self.nfa);
        self.is_match_with(&mut cache, text)
    }

    /// Like [`Matcher::is_match`], but uses the scratch space in `cache`.
    pub fn is_match_with(&self, cache: &mut Cache, text: &str) -> bool {
        self.is_match_chars(cache, text.chars())
    }

    /// Checks whether the whole sequence `chars` matches.
    ///
    /// Stops reading `chars` as soon as no state survives a character.
    pub fn is_match_chars<I>(&self, cache: &mut Cache, chars: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        cache.reset(self.nfa);
        cache.matched.insert(self.nfa.start());
        self.epsilon_closure(cache);

        for ch in chars {
            if !self.step(cache, ch) {
                log!(log::trace!("no state consumes {:?}, giving up", ch));
                return false;
            }
            self.epsilon_closure(cache);
        }

        cache.reachable.contains(self.nfa.accept())
    }

    /// Collects into `matched` the successor of every reachable state that
    /// consumes `ch`. Returns false if there are none.
    fn step(&self, cache: &mut Cache, ch: char) -> bool {
        debug_assert!(cache.matched.is_empty());
        for state in cache.reachable.iter() {
            if let Some(next) = self.nfa.next_state(state, ch) {
                cache.matched.insert(next);
            }
        }
        log!(log::trace!(
            "consumed {:?}: {} reachable -> {} matched",
            ch,
            cache.reachable.len(),
            cache.matched.len()
        ));
        !cache.matched.is_empty()
    }

    /// Replaces `reachable` with every state reachable from the states in
    /// `matched` through epsilon transitions, draining `matched`.
    ///
    /// `reachable` doubles as the visited marker, which is what keeps the
    /// loops created by `*` from being followed forever.
    fn epsilon_closure(&self, cache: &mut Cache) {
        cache.reachable.clear();
        while let Some(seed) = cache.matched.pop() {
            if !cache.reachable.insert(seed) {
                continue;
            }
            cache.stack.push(seed);
            while let Some(state) = cache.stack.pop() {
                cache.visits += 1;
                for &next in self.nfa.epsilons(state) {
                    if cache.reachable.insert(next) {
                        cache.stack.push(next);
                    }
                }
            }
        }
    }
}
