use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use nonogram::{Puzzle, Report, Solver, SolverConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod nonogram;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Solves color nonograms derived from XPM or JSON images")]
struct Cli {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    #[arg(short = 't', long, help("Don't display the title"))]
    hide_title: bool,
    #[arg(short = 'p', long, help("Don't display the preliminary solution"))]
    hide_preliminary: bool,
    #[arg(short = 'f', long, help("Don't display the final solution(s)"))]
    hide_final: bool,
    #[arg(short = 'i', long, help("Don't display the number of iterations"))]
    hide_iterations: bool,
    #[arg(short = 'c', long, help("Don't display the number of solutions"))]
    hide_count: bool,
    #[arg(short = 'n', long, default_value_t = SolverConfig::default().max_solutions, help("Stop after this many solutions"))]
    max_solutions: usize,
    #[arg(short = 'l', long, help("Don't filter lines with more candidates than this"))]
    fit_limit: Option<usize>,
    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    iterations: usize,
    preliminary: Vec<String>,
    solutions: Vec<Vec<String>>,
    count: usize,
    capped: bool,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig { max_solutions: self.max_solutions, fit_limit: self.fit_limit }
    }

    fn print_text(&self, mut solver: Solver) {
        let iterations = solver.saturate();
        if !self.hide_preliminary {
            println!("{}", solver.possibilities());
        }
        if !self.hide_iterations {
            println!("{iterations} iterations");
        }
        let outcome = solver.search(|fld| {
            if !self.hide_final {
                println!("{fld}");
            }
        });
        if !self.hide_count {
            if outcome.capped {
                println!("{} solutions (stopped at the limit)", outcome.solutions);
            } else {
                println!("{} solutions", outcome.solutions);
            }
        }
    }

    fn print_json(&self, file: &str, solver: Solver) -> anyhow::Result<()> {
        let mut solutions: Vec<Vec<String>> = Vec::new();
        let Report { iterations, preliminary, solutions: count, capped } = solver.solve(|fld| {
            if !self.hide_final {
                solutions.push(fld.rows().iter().map(|row| row.iter().map(|c| c.0).collect()).collect());
            }
        });
        let report = JsonReport { file, iterations, preliminary: preliminary.to_lines(), solutions, count, capped };
        println!("{}", serde_json::to_string(&report)?);
        Ok(())
    }

    fn run_file(&self, path: &Path) -> anyhow::Result<()> {
        let file = path.display().to_string();
        if !self.hide_title && matches!(self.format, OutputFormat::Text) {
            println!("{file}");
        }
        let start = Instant::now();
        let puzzle = Puzzle::load(path).with_context(|| format!("cannot read {file}"))?;
        let solver = Solver::new(&puzzle, self.config()).with_context(|| format!("cannot solve {file}"))?;
        match self.format {
            OutputFormat::Text => self.print_text(solver),
            OutputFormat::Json => self.print_json(&file, solver)?,
        }
        log::info!("{file}: elapsed {:?}", start.elapsed());
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut failed = 0;
    for path in cli.files.iter() {
        if let Err(err) = cli.run_file(path) {
            log::error!("{err:#}");
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} puzzles failed", cli.files.len());
    }
    Ok(())
}
