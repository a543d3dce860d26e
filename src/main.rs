use std::fmt::Display;
use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use range_aggregation_tree::{Combiner, Gcd, Max, Min, RangeAggregationTree, Sum, WideSum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rangeagg", about = "Range aggregation queries over a segment tree")]
struct Cli {
    /// Log construction and updates (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the sum, max and min walkthroughs, dumping the tree after each step.
    Demo,
    /// Build a tree and apply commands read from stdin, one per line.
    ///
    /// Commands: `query L R`, `update P V`, `delete P`, `total`, `dump`.
    Run {
        /// Combine operation; `gcd` requires non-negative values.
        /// `sum` accumulates in 128 bits and cannot overflow.
        #[arg(long, value_enum, default_value_t = OpKind::Sum)]
        op: OpKind,
        /// Comma-separated input sequence, e.g. `1,6,4,7,2,8`.
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<i64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OpKind {
    Sum,
    Min,
    Max,
    Gcd,
}

#[derive(Debug, PartialEq, Eq)]
enum Command<E> {
    Query(usize, usize),
    Update(usize, E),
    Delete(usize),
    Total,
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Run { op, values } => {
            let input = io::stdin().lock();
            match op {
                OpKind::Sum => run_commands(build(&values, WideSum::new())?, input)?,
                OpKind::Min => run_commands(build(&values, Min::new())?, input)?,
                OpKind::Max => run_commands(build(&values, Max::new())?, input)?,
                OpKind::Gcd => run_commands(build(&unsigned(&values)?, Gcd::new())?, input)?,
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build<E, C>(values: &[E], combiner: C) -> Result<RangeAggregationTree<C>>
where
    C: Combiner<Element = E>,
{
    RangeAggregationTree::with_combiner(values, combiner).context("failed to build tree")
}

fn unsigned(values: &[i64]) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            u64::try_from(value)
                .with_context(|| format!("gcd needs non-negative values, got {value} at index {idx}"))
        })
        .collect()
}

fn run_demo() -> Result<()> {
    let sums = build(&[1, 6, 4, 7, 2, 8], Sum::<i64>::new())?;
    walkthrough("sum", sums, (3, 5), (0, 10), 0)?;

    let maxima = build(&[6, 3, 6, 87, 2, 5], Max::<i64>::new())?;
    walkthrough("max", maxima, (2, 4), (3, 5), 3)?;

    let minima = build(&[4, 5, 4, 3, 6, 67], Min::<i64>::new())?;
    walkthrough("min", minima, (0, 1), (5, 1), 5)?;

    Ok(())
}

fn walkthrough<C>(
    name: &str,
    mut tree: RangeAggregationTree<C>,
    (l, r): (usize, usize),
    (pos, value): (usize, i64),
    delete: usize,
) -> Result<()>
where
    C: Combiner<Element = i64>,
    C::Aggregate: Display,
{
    println!("== {name} tree built:");
    print!("{tree}");

    println!("\nquery [{l}, {r}]:");
    println!("{}", tree.query(l, r)?);

    println!("\nupdate position [{pos}] to {value}:");
    tree.update(pos, value)?;
    print!("{tree}");

    println!("\ndelete position [{delete}]:");
    tree.delete(delete)?;
    print!("{tree}");
    println!();

    Ok(())
}

fn run_commands<C, R>(mut tree: RangeAggregationTree<C>, input: R) -> Result<()>
where
    C: Combiner,
    C::Element: FromStr,
    <C::Element as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    C::Aggregate: Display,
    R: BufRead,
{
    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_command(&line)
            .with_context(|| format!("invalid command on line {}", line_no + 1))?;

        match command {
            Command::Query(l, r) => println!("{}", tree.query(l, r)?),
            Command::Update(pos, value) => tree.update(pos, value)?,
            Command::Delete(pos) => tree.delete(pos)?,
            Command::Total => println!("{}", tree.total()),
            Command::Dump => print!("{tree}"),
        }
    }

    Ok(())
}

fn parse_command<E>(line: &str) -> Result<Command<E>>
where
    E: FromStr,
    E::Err: std::error::Error + Send + Sync + 'static,
{
    let fields: Vec<&str> = line.split_whitespace().collect();
    let command = match fields.as_slice() {
        ["query", l, r] => Command::Query(parse_index(l)?, parse_index(r)?),
        ["update", pos, value] => Command::Update(
            parse_index(pos)?,
            value
                .parse()
                .with_context(|| format!("invalid value '{value}'"))?,
        ),
        ["delete", pos] => Command::Delete(parse_index(pos)?),
        ["total"] => Command::Total,
        ["dump"] => Command::Dump,
        _ => bail!("unrecognized command '{}'", line.trim()),
    };
    Ok(command)
}

fn parse_index(field: &str) -> Result<usize> {
    field
        .parse()
        .with_context(|| format!("invalid index '{field}'"))
}
