// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lattice_flows::config::{AppConfig, SearchConfig};
use lattice_flows::graph::{g6, stable};
use lattice_flows::matrix;
use lattice_flows::render::{draw_graph, DrawingSurface, SvgSurface};
use lattice_flows::search::trials::run_trials;
use lattice_flows::search::{Decomposition, DistanceRule};
use lattice_flows::{CircuitLibrary, DecompositionSearch, EisenFlow, RotationSet};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Greedy decomposition of Eisenstein flows, and graph6 utilities"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Greedily decompose one flow into rotated circuits
    Decompose(DecomposeArgs),

    /// Decompose random flows until the greedy search fails
    Trials(TrialArgs),

    /// Draw graph6 strings as SVG files
    Draw(DrawArgs),

    /// Copy the connected graphs on stdin to stdout
    Connected {
        /// Print how many graphs were read and kept to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Write the complement of every graph on stdin to stdout
    Complement,

    /// Report graphs on stdin whose b-sequences are not log-concave
    LogConcavity,

    /// Count binary matrices with fixed column support, by rank over GF(2)
    BinMatrices {
        /// Rows (at most 30)
        rows: usize,
        /// Columns
        columns: usize,
        /// Ones in each column
        support: usize,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Most moves before the search times out
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Distance rule: any-improves or monotone
    #[arg(long)]
    rule: Option<DistanceRule>,
}

impl SearchArgs {
    fn apply(&self, config: &mut SearchConfig) {
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(rule) = self.rule {
            config.distance_rule = rule;
        }
    }
}

#[derive(Args)]
struct DecomposeArgs {
    /// Flow on the six-element ground set, e.g. "[1, 1, 0, 1, 0, 0]"
    flow: String,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct TrialArgs {
    /// Number of random flows
    #[arg(long)]
    count: Option<usize>,

    /// Rotated circuits summed into each random flow
    #[arg(long)]
    complexity: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct DrawArgs {
    /// graph6 strings to draw
    graphs: Vec<String>,

    /// File with one graph6 string per line
    #[arg(long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Directory for the SVG files
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Decompose(args) => {
            args.search.apply(&mut config.search);
            decompose(&args.flow, &config.search)
        }
        Command::Trials(args) => {
            args.search.apply(&mut config.search);
            if let Some(count) = args.count {
                config.trials.count = count;
            }
            if let Some(complexity) = args.complexity {
                config.trials.complexity = complexity;
            }
            if args.seed.is_some() {
                config.trials.seed = args.seed;
            }
            trials(&config)
        }
        Command::Draw(args) => draw(&args, &config),
        Command::Connected { stats } => {
            let max_vertices = config.graph.max_vertices;
            let (input, output) = (io::stdin().lock(), io::stdout().lock());
            let summary = g6::filter_connected(input, output, max_vertices)
                .context("filtering connected graphs")?;
            if stats {
                eprintln!(">Found {} connected graphs out of {}.", summary.written, summary.read);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Complement => {
            let max_vertices = config.graph.max_vertices;
            let (input, output) = (io::stdin().lock(), io::stdout().lock());
            let summary = g6::complement_lines(input, output, max_vertices)
                .context("complementing graphs")?;
            eprintln!(">{} graph complements generated", summary.written);
            Ok(ExitCode::SUCCESS)
        }
        Command::LogConcavity => {
            let summary = stable::check_lines(io::stdin().lock(), io::stdout().lock())
                .context("checking log-concavity")?;
            eprintln!(
                ">{} graphs checked, {} violations, {} skipped",
                summary.graphs, summary.violations, summary.skipped
            );
            Ok(if summary.violations == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::BinMatrices { rows, columns, support } => {
            println!("m = {}, n = {}, s = {}", rows, columns, support);
            let counts = matrix::count_by_rank(rows, columns, support)?;
            for (rank, count) in counts.iter().enumerate() {
                println!("{}: {}", rank, count);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn standard_search(config: &SearchConfig) -> DecompositionSearch {
    DecompositionSearch::from_config(CircuitLibrary::standard(), RotationSet::zeta6(), config)
}

/// Print each move with the flow left after it, then the outcome.
fn print_decomposition(
    search: &DecompositionSearch,
    flow: &EisenFlow,
    result: &Decomposition,
) -> Result<()> {
    println!("flow {}", flow);
    let mut current = flow.clone();
    for mv in &result.moves {
        current = current.checked_sub(&search.candidate(mv)?)?;
        println!("{}", mv);
        println!("now {}", current);
    }
    match result.failure() {
        None => println!("success after {} moves", result.iterations()),
        Some(failure) => println!("{}", failure),
    }
    Ok(())
}

fn decompose(flow: &str, config: &SearchConfig) -> Result<ExitCode> {
    let flow: EisenFlow = flow.parse().context("parsing flow")?;
    let search = standard_search(config);
    let result = search.run(&flow)?;
    print_decomposition(&search, &flow, &result)?;
    Ok(if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn trials(config: &AppConfig) -> Result<ExitCode> {
    let search = standard_search(&config.search);
    let mut rng = match config.trials.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = run_trials(&search, &config.trials, &mut rng)?;
    println!("{}", report.statistics);
    match report.first_failure {
        None => Ok(ExitCode::SUCCESS),
        Some(failed) => {
            println!("trial {} failed", failed.trial);
            print_decomposition(&search, &failed.flow, &failed.decomposition)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn draw(args: &DrawArgs, config: &AppConfig) -> Result<ExitCode> {
    let mut graphs = args.graphs.clone();
    if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("reading {}", path.display()))?;
            let line = line.trim_end();
            if !line.is_empty() {
                graphs.push(line.to_string());
            }
        }
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let render = &config.render;
    let mut surface = SvgSurface::new(render.width, render.height, args.out_dir.join("graph.svg"));
    for (i, text) in graphs.iter().enumerate() {
        let graph = g6::decode(text).with_context(|| format!("decoding {:?}", text))?;
        surface.set_target(args.out_dir.join(format!("graph_{:05}.svg", i)));
        draw_graph(&mut surface, &graph, text, render)?;
        println!("{}", surface.target().display());
    }
    surface.close()?;
    Ok(ExitCode::SUCCESS)
}
