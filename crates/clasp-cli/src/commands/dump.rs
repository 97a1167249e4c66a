//! Show the compiled automaton as text or JSON.

use clasp_compiler::{Automaton, PatternSet};
use clasp_core::{Colors, PatternId, PositionId, SymbolId};
use serde::Serialize;

use super::run_common::{PatternInput, prepare_patterns};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
}

pub struct DumpArgs {
    pub input: PatternInput,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let set = prepare_patterns(&args.input, args.color).build();

    match args.format {
        DumpFormat::Text => print!("{}", set.dump(Colors::new(args.color))),
        DumpFormat::Json => match serde_json::to_string_pretty(&JsonDump::new(&set)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize automaton: {}", e);
                std::process::exit(1);
            }
        },
    }
}

#[derive(Serialize)]
struct JsonDump<'a> {
    patterns: Vec<JsonPattern<'a>>,
    /// Symbol labels indexed by `SymbolId`.
    symbols: Vec<String>,
    automaton: &'a Automaton,
}

#[derive(Serialize)]
struct JsonPattern<'a> {
    id: PatternId,
    name: &'a str,
    source: &'a str,
    terminal: Option<PositionId>,
    max_depth: usize,
}

impl<'a> JsonDump<'a> {
    fn new(set: &'a PatternSet) -> Self {
        let automaton = set.automaton();
        let patterns = set
            .patterns()
            .map(|(id, name, compiled)| JsonPattern {
                id,
                name,
                source: &compiled.source,
                terminal: automaton.terminal_of(id),
                max_depth: compiled.max_depth,
            })
            .collect();

        let tree = set.tree();
        let symbols = (0..tree.symbol_count())
            .map(|i| tree.symbol_label(SymbolId::next_of(i)))
            .collect();

        Self {
            patterns,
            symbols,
            automaton,
        }
    }
}
