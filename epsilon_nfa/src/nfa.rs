use crate::digraph::Digraph;
use crate::symbol::Symbol;

/// A state ID in the NFA.
///
/// State `i < m` sits just before symbol `i` of an `m`-symbol pattern, and
/// state `m` is the accepting state.
pub type StateId = usize;

/// A compiled pattern.
///
/// The graph carries only epsilon transitions. Consuming transitions are
/// implied by the symbols: from state `i`, a character matching symbol `i`
/// leads to state `i + 1` (see [`Nfa::next_state`]).
///
/// An `Nfa` is never modified after compilation, so a single value can be
/// shared by any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// The pattern's symbols. Always one fewer than the graph's vertices.
    symbols: Box<[Symbol]>,
    /// Epsilon transitions between states.
    graph: Digraph,
}

impl Nfa {
    pub(crate) fn new(symbols: Box<[Symbol]>, graph: Digraph) -> Self {
        debug_assert_eq!(symbols.len() + 1, graph.vertex_count());
        Self { symbols, graph }
    }

    /// The symbol sequence the NFA was compiled from.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The epsilon transitions.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Number of symbols in the pattern. This is also the accepting state.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True for the empty pattern, which only matches the empty string.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of states, which is always `len() + 1`.
    pub fn state_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn start(&self) -> StateId {
        0
    }

    pub fn accept(&self) -> StateId {
        self.symbols.len()
    }

    /// Returns the state reached by consuming `ch` in `state`, if any.
    ///
    /// This is the only consuming transition out of a state. The accepting
    /// state and structural symbols never consume.
    #[inline]
    pub fn next_state(&self, state: StateId, ch: char) -> Option<StateId> {
        match self.symbols.get(state) {
            Some(symbol) if symbol.matches(ch) => Some(state + 1),
            _ => None,
        }
    }

    /// Epsilon successors of `state`.
    #[inline]
    pub fn epsilons(&self, state: StateId) -> &[StateId] {
        self.graph.adjacent(state)
    }
}

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in 0..self.state_count() {
            match self.symbols.get(state) {
                Some(symbol) => write!(f, "{:>4}: {:<4}", state, symbol.to_string())?,
                None => write!(f, "{:>4}: MATCH", state)?,
            }
            let epsilons = self.epsilons(state);
            if !epsilons.is_empty() {
                write!(f, " ε -> {:?}", epsilons)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal_ab() -> Nfa {
        let symbols = vec![Symbol::Literal('a'), Symbol::Any].into_boxed_slice();
        Nfa::new(symbols, Digraph::new(3))
    }

    #[test]
    fn test_start_and_accept() {
        let nfa = literal_ab();
        assert_eq!(nfa.start(), 0);
        assert_eq!(nfa.accept(), 2);
        assert_eq!(nfa.len(), 2);
        assert_eq!(nfa.state_count(), 3);
        assert!(!nfa.is_empty());
    }

    #[test]
    fn test_next_state() {
        let nfa = literal_ab();
        assert_eq!(nfa.next_state(0, 'a'), Some(1));
        assert_eq!(nfa.next_state(0, 'b'), None);
        assert_eq!(nfa.next_state(1, 'z'), Some(2));
        // The accepting state has no symbol and consumes nothing.
        assert_eq!(nfa.next_state(2, 'a'), None);
    }

    #[test]
    fn test_display() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1);
        let nfa = Nfa::new(vec![Symbol::Open, Symbol::Close].into_boxed_slice(), graph);
        let shown = nfa.to_string();
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ε -> [1]"));
        assert!(lines[2].ends_with("MATCH"));
    }
}
