// External Modules
extern crate exitcode;
extern crate simple_error;

// Standard Imports
use clap::Parser;
use simple_error::SimpleError;

use cminus_semantics::analysis::Analyzer;
use cminus_semantics::ast::demo;

/// Command line interface for running the two semantic analysis passes
/// over one of the crate's built-in example programs.
#[derive(Parser)]
struct SemanticsCLIOptions {
    /// Name of the built-in example program to analyze. See `--list`.
    example: Option<String>,

    /// List the available example names and exit.
    #[clap(long, action)]
    list: bool,

    /// Print the symbol table built by pass 1.
    #[clap(long, action)]
    trace: bool,
}

fn run(cli_args: SemanticsCLIOptions) -> Result<bool, SimpleError> {
    if cli_args.list {
        for name in demo::NAMES {
            println!("{name}");
        }
        return Ok(true);
    }

    let name = match &cli_args.example {
        Some(name) => name,
        None => return Err(SimpleError::new("no example given; run with --list to see the choices")),
    };

    let ast = demo::by_name(name)
        .ok_or_else(|| SimpleError::new(format!("unknown example {name:?}; run with --list to see the choices")))?;

    let mut analyzer = Analyzer::new();
    analyzer.set_trace_analyze(cli_args.trace);
    analyzer.build_symtab(&ast);
    analyzer.type_check(&ast);

    for diagnostic in analyzer.diagnostics() {
        println!("{diagnostic}");
    }
    if !analyzer.has_error() {
        println!("analysis succeeded, no errors");
    }

    Ok(!analyzer.has_error())
}

fn main() {
    let cli_args = SemanticsCLIOptions::parse();
    match run(cli_args) {
        Ok(true) => std::process::exit(exitcode::OK),
        Ok(false) => std::process::exit(exitcode::DATAERR),
        Err(why) => {
            eprintln!("error: {why}");
            std::process::exit(exitcode::USAGE);
        }
    }
}
