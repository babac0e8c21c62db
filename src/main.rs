use clap::Parser;
use slrparse::{expr, Action, Lexer, ParseError, ParseObserver, ParseStack, RuleSet, Token};

/// Runs the SLR expression recognizer over one line of input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The expression to recognize.
    #[arg(default_value = "id + (id * id)")]
    source: String,

    /// Print the rule table and driving table before parsing.
    #[arg(long)]
    tables: bool,
}

/// Prints every pulled token and every step the parser takes.
struct PrintObserver;

impl<'g> ParseObserver<'g> for PrintObserver {
    fn token(&mut self, token: &Token) {
        println!("token: {}", token);
    }

    fn step(&mut self, stack: &ParseStack<'g>, action: Action) {
        println!("{:<40} {}", stack.to_string(), action);
    }
}

fn run(args: &Args) -> Result<(), ParseError> {
    let parser = expr::parser()?;

    if args.tables {
        for rule in RuleSet::new(&expr::GRAMMAR).iter() {
            println!("{}", rule);
        }
        println!("{}", expr::table()?);
    }

    println!("source: {}", args.source);

    let accepted = parser.parse(&mut Lexer::new(&args.source), &mut PrintObserver)?;

    println!(
        "accepted in {} steps ({} shifts, {} reductions)",
        accepted.stats.steps(),
        accepted.stats.shifts,
        accepted.stats.reductions,
    );

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
