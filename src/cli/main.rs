use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Parser, ValueEnum};

use stoat_sat::{
    config::{Config, Engine},
    context::Context,
    reports::Report,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineChoice {
    RandomDpll,
    TwoClauseDpll,
    OptimizedDpll,
    Cdcl,
}

impl From<EngineChoice> for Engine {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::RandomDpll => Engine::RandomDpll,
            EngineChoice::TwoClauseDpll => Engine::TwoClauseDpll,
            EngineChoice::OptimizedDpll => Engine::OptimizedDpll,
            EngineChoice::Cdcl => Engine::Cdcl,
        }
    }
}

/// Determine the satisfiability of a CNF formula.
#[derive(Parser)]
#[command(name = "stoat_cli")]
struct Args {
    /// Path to a DIMACS CNF file.
    cnf: PathBuf,

    /// The engine to solve with.
    #[arg(long, value_enum, default_value = "cdcl")]
    engine: EngineChoice,

    /// Seed for the decision stream.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the iteration budget.
    #[arg(long)]
    no_timeout: bool,

    /// Print a satisfying valuation, when one is found.
    #[arg(long)]
    model: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = Config::default();
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let mut the_context = Context::from_config(config);

    println!("c Reading DIMACS file from {:?}", args.cnf);
    let file = match File::open(&args.cnf) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    if let Err(issue) = the_context.read_dimacs(BufReader::new(file)) {
        println!("c Failed to parse CNF file: {issue:?}");
        std::process::exit(1);
    }

    let engine = Engine::from(args.engine);
    println!(
        "c Solving {} clauses over {} atoms with {engine}",
        the_context.formula.clause_count(),
        the_context.formula.atom_count(),
    );

    let outcome = the_context.solve_with(engine, !args.no_timeout);

    println!("s {}", outcome.report);

    if args.model {
        if let Report::Satisfiable(valuation) = &outcome.report {
            println!(
                "v {}",
                valuation.as_display_string(the_context.formula.atoms())
            );
        }
    }

    println!(
        "c {} iterations in {}ms",
        outcome.iterations,
        outcome.time.as_millis()
    );
}
