//! Command line surface of the `dbperf` binary.

use crate::{
    env::Env,
    tasks::{plot::Plot, scenarios::Scenario, viewer::Viewer},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(name = "dbperf", about = "Plot database latency comparisons")]
pub struct Cli {
    // The name of the task to execute. Plots every scenario if omitted
    #[clap(subcommand)]
    pub task: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available scenarios
    List {},
    /// Plot one or more scenarios
    Plot {
        /// Scenarios to plot
        #[arg(required = true)]
        scenario: Vec<Scenario>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Plot every scenario
    PlotAll {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct OutputArgs {
    /// Directory to write the SVG files to (default: $DBPERF_PLOTS_DIR or
    /// ./plots)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Open each generated plot with the system viewer ($DBPERF_VIEWER)
    #[arg(long)]
    pub open: bool,
}

impl Cli {
    /// The task to run. A bare invocation plots every scenario.
    pub fn into_command(self) -> Command {
        self.task.unwrap_or(Command::PlotAll {
            output: OutputArgs::default(),
        })
    }
}

/// Render `scenarios` one after the other, returning the generated files.
pub fn plot_scenarios(scenarios: &[Scenario], output: &OutputArgs) -> Result<Vec<PathBuf>> {
    let out_dir = Env::plots_root(output.out_dir.as_deref())?;

    let mut plot_paths = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let plot_path = Plot::plot_scenario(scenario, &out_dir)?;
        if output.open {
            Viewer::open(&plot_path)?;
        }
        plot_paths.push(plot_path);
    }

    Ok(plot_paths)
}

pub fn list_scenarios(out: &mut impl Write) -> io::Result<()> {
    for scenario in Scenario::iter_variants() {
        writeln!(
            out,
            "{scenario}: {} (winner: {})",
            scenario.x_desc(),
            scenario.winner().legend_name()
        )?;
    }
    Ok(())
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List {} => {
            list_scenarios(&mut io::stdout().lock())?;
        }
        Command::Plot { scenario, output } => {
            plot_scenarios(&scenario, &output)?;
        }
        Command::PlotAll { output } => {
            let all: Vec<Scenario> = Scenario::iter_variants().copied().collect();
            plot_scenarios(&all, &output)?;
        }
    }

    Ok(())
}

/// Process exit code for the result of `run`.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
