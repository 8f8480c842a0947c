use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tinyc::{
    ast::Program,
    config::cli::DOT_EXTENSION,
    errors::TinyResult,
    frontend::{lexer::scan, parser, Token},
    printer::{AstPrinter, NodeCounter},
    read,
    render::{render, DotGraph},
};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Front end for the TINY teaching language",
    long_about = "Front end for the TINY teaching language.\n\
                 Scans and parses a TINY program, reporting the first lexical or\n\
                 syntax error, and optionally dumps the tokens or the syntax tree.\n\
                 \n\
                 Example usage:\n\
                 tinyc program.tiny                  # Check the program\n\
                 tinyc program.tiny --tokens         # List tokens as 'lexeme : kind'\n\
                 tinyc program.tiny --show-ast       # Print the syntax tree\n\
                 tinyc program.tiny --dot            # Write program.dot for Graphviz\n\
                 tinyc program.tiny --dot tree.dot   # Choose the DOT file name\n\
                 tinyc program.tiny --timing         # Show phase timing"
)]
struct Cli {
    // The path to the TINY source file
    path: PathBuf,

    // Print the token listing
    #[arg(long)]
    tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Write the syntax tree as a Graphviz DOT file
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    dot: Option<PathBuf>,

    // Log recognized productions
    #[arg(short, long)]
    verbose: bool,

    // Log every emitted token as well
    #[arg(long)]
    trace: bool,

    // Show phase timing
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct FrontendStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_logging(args: &Cli) {
    let level = if args.trace {
        Level::TRACE
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dot_output_path(input_path: &Path, dot: &Path) -> PathBuf {
    if dot.as_os_str().is_empty() {
        let basename = input_path.file_stem().unwrap_or_default();
        let mut path = PathBuf::from(basename);
        path.set_extension(DOT_EXTENSION);
        path
    } else {
        dot.to_path_buf()
    }
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut FrontendStats) -> TinyResult<Vec<(Token, usize)>> {
    let lexer_start = Instant::now();
    let tokens = scan(source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    info!(tokens = stats.token_count, "lexical analysis completed");
    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(tokens: &[(Token, usize)], stats: &mut FrontendStats) -> TinyResult<Program> {
    let parser_start = Instant::now();
    let program = parser::Parser::new(tokens).parse()?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = NodeCounter::count(&program)?;
    info!(nodes = stats.ast_size, "parsing completed");
    Ok(program)
}

fn run(args: &Cli) -> TinyResult<FrontendStats> {
    let start_time = Instant::now();
    let mut stats = FrontendStats::default();
    let source = read(&args.path)?;

    let tokens = lexical_analysis(&source, &mut stats)?;
    if args.tokens {
        for (token, _) in &tokens {
            println!("{}", token);
        }
    }

    let program = parsing_phase(&tokens, &mut stats)?;
    if args.show_ast {
        print!("{}", AstPrinter::new().print(&program)?);
    }

    if let Some(dot) = &args.dot {
        let output_path = dot_output_path(&args.path, dot);
        let mut graph = DotGraph::new();
        render(&program, &mut graph);
        fs::write(&output_path, graph.finish()?)?;
        debug!(path = %output_path.display(), "syntax tree written");
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok(stats)
}

// Print detailed front end statistics
fn print_stats(stats: &FrontendStats) {
    println!("\n Front End Statistics:");
    println!("  Lexical Analysis  {:>8.3}s", stats.lexer_time);
    println!("  Parsing           {:>8.3}s", stats.parser_time);
    println!("  Total             {:>8.3}s", stats.total_time);
    println!("  Tokens            {:>8}", stats.token_count);
    println!("  AST Nodes         {:>8}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();
    init_logging(&args);

    match run(&args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            info!("program accepted");
        }
        Err(e) => fatal(&format!("{:?} stage failed: {}", e.stage(), e)),
    }
}
