use anyhow::Result;
use clap::{Parser, Subcommand};
use sat::sample::ReplayToken;
use sat::{VecCfg, Vector};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod op;
mod output;

#[derive(Parser)]
#[command(name = "sat-cli")]
#[command(about = "Apply and inspect 2D vector operations", version = sat::VERSION)]
struct Cmd {
    /// Also write the JSON result to this path
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply a chain of in-place ops to (x, y), left to right
    Eval {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// e.g. `rotate:1.57`, `scale:2,5`, `project:1,1` (repeatable)
        #[arg(long = "op", allow_hyphen_values = true)]
        ops: Vec<String>,
        /// Fail on a zero-length project/reflect axis instead of producing NaN
        #[arg(long)]
        checked: bool,
    },
    /// Dot product of two vectors given as `x,y`
    Dot {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Reproducible random vectors (unit directions, or points in --box)
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// `x0,y0,x1,y1`
        #[arg(long = "box", allow_hyphen_values = true)]
        bounds: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Eval { x, y, ops, checked } => {
            tracing::info!(x, y, n_ops = ops.len(), checked, "eval");
            let report = commands::eval(Vector::new(x, y), &ops, checked, VecCfg::default())?;
            output::emit(&report, out)
        }
        Action::Dot { a, b } => {
            tracing::info!(a, b, "dot");
            let report = commands::dot(op::parse_pair(&a)?, op::parse_pair(&b)?);
            output::emit(&report, out)
        }
        Action::Sample {
            seed,
            index,
            count,
            bounds,
        } => {
            tracing::info!(seed, index, count, bounds = ?bounds, "sample");
            let bounds = bounds.as_deref().map(commands::parse_box).transpose()?;
            let report = commands::sample(ReplayToken::new(seed, index), count, bounds)?;
            output::emit(&report, out)
        }
    }
}
