use crate::{
    digraph::Digraph,
    nfa::{Nfa, StateId},
    symbol::{self, Symbol},
    CompileError, CompileResult, Unbalanced,
};

/// The default maximum number of symbols in a pattern.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// Options for the [`Compiler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    size_limit: Option<usize>,
}

impl Config {
    /// Return a new default compiler configuration.
    pub fn new() -> Config {
        Config::default()
    }

    /// Sets the maximum number of symbols a pattern may have.
    ///
    /// Compiled patterns use memory proportional to their symbol count, and
    /// every search does work proportional to it for each input character.
    pub fn size_limit(mut self, limit: usize) -> Config {
        self.size_limit = Some(limit);
        self
    }

    pub fn get_size_limit(&self) -> usize {
        self.size_limit.unwrap_or(DEFAULT_SIZE_LIMIT)
    }
}

/// Compiles patterns into an [`Nfa`].
///
/// The construction makes a single pass over the symbols. Each structural
/// symbol gets an epsilon edge to the next state so the simulator can step
/// over it, groups and alternations are resolved when their `)` is seen,
/// and a `*` loops back to the start of the unit it repeats.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Parses and compiles `pattern`.
    pub fn compile(&self, pattern: &str) -> CompileResult<Nfa> {
        let symbols = symbol::parse(pattern)?;
        self.compile_symbols(symbols)
    }

    /// Compiles an already parsed symbol sequence.
    pub fn compile_symbols(&self, symbols: Vec<Symbol>) -> CompileResult<Nfa> {
        let limit = self.config.get_size_limit();
        if symbols.len() > limit {
            return Err(CompileError::TooComplex { size: symbols.len(), limit });
        }

        let mut graph = Digraph::new(symbols.len() + 1);
        link(&symbols, &mut graph)?;

        log!(log::debug!(
            "compiled {} symbols into {} states with {} epsilon edges",
            symbols.len(),
            graph.vertex_count(),
            graph.edge_count()
        ));

        Ok(Nfa::new(symbols.into_boxed_slice(), graph))
    }
}

/// Adds the epsilon edges for `symbols` to `graph`.
fn link(symbols: &[Symbol], graph: &mut Digraph) -> CompileResult<()> {
    // Indices of every `(` that is still open, and of every `|` seen since
    // the innermost of them.
    let mut brackets: Vec<StateId> = Vec::new();

    for (i, &symbol) in symbols.iter().enumerate() {
        // First state of the unit a following `*` would repeat.
        let mut unit = i;

        match symbol {
            Symbol::Open => {
                epsilon(graph, i, i + 1);
                brackets.push(i);
            }
            Symbol::Alternate => brackets.push(i),
            Symbol::Close => {
                epsilon(graph, i, i + 1);
                unit = close_group(symbols, graph, &mut brackets, i)?;
            }
            Symbol::Star => epsilon(graph, i, i + 1),
            Symbol::Literal(_) | Symbol::Any => {}
        }

        if symbols.get(i + 1) == Some(&Symbol::Star) {
            epsilon(graph, unit, i + 1);
            epsilon(graph, i + 1, unit);
        }
    }

    match brackets.first() {
        None => Ok(()),
        Some(&pos) if symbols[pos] == Symbol::Open => Err(
            CompileError::UnbalancedPattern(Unbalanced::UnclosedGroup { pos }),
        ),
        Some(&pos) => Err(CompileError::UnbalancedPattern(
            Unbalanced::AlternationOutsideGroup { pos },
        )),
    }
}

/// Resolves the group closed by the `)` at `close`, returning the index of
/// its `(`.
///
/// Every `|` directly inside the group gets two edges: one from the `(` to
/// the start of the alternative that follows it, and one from the `|` to the
/// `)`, which ends the alternative that precedes it.
fn close_group(
    symbols: &[Symbol],
    graph: &mut Digraph,
    brackets: &mut Vec<StateId>,
    close: StateId,
) -> CompileResult<StateId> {
    let Some(at) = brackets.iter().rposition(|&b| symbols[b] == Symbol::Open)
    else {
        let reason = match brackets.last() {
            Some(&pos) => Unbalanced::AlternationOutsideGroup { pos },
            None => Unbalanced::UnopenedGroup { pos: close },
        };
        return Err(CompileError::UnbalancedPattern(reason));
    };

    let open = brackets[at];
    for alternation in brackets.drain(at + 1..) {
        epsilon(graph, open, alternation + 1);
        epsilon(graph, alternation, close);
    }
    brackets.pop();

    Ok(open)
}

#[inline]
fn epsilon(graph: &mut Digraph, from: StateId, to: StateId) {
    log!(log::trace!("epsilon {} -> {}", from, to));
    graph.add_edge(from, to);
}
