use clap::{Parser, Subcommand};
use lrc_app::{AppResult, Study, load_scenario, render_study, save_scenario, validate_scenario};
use lrc_project::Scenario;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lrc-cli")]
#[command(about = "lrcscope CLI - series LRC circuit studies", long_about = None)]
struct Cli {
    /// Scenario file (YAML or JSON); built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for the figures; overrides the scenario's output.dir
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step response for under, critically and overdamped resistances
    Step,
    /// Impedance magnitude against frequency
    Sweep,
    /// AM modulation and envelope demodulation
    Am,
    /// Resonance curve at one capacitance
    Resonance {
        /// Capacitance in farad, snapped to the slider grid
        #[arg(long)]
        capacitance: Option<f64>,
    },
    /// Every study in order
    All,
    /// Validate a scenario file
    Validate {
        /// Path to the scenario file
        path: PathBuf,
    },
    /// Write the default scenario as a starting point
    Init {
        /// Destination path
        path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Cli {
        config,
        out_dir,
        command,
    } = Cli::parse();
    let config = config.as_deref();

    match command {
        Commands::Step => cmd_run(config, out_dir, &[Study::Step], None),
        Commands::Sweep => cmd_run(config, out_dir, &[Study::Sweep], None),
        Commands::Am => cmd_run(config, out_dir, &[Study::Am], None),
        Commands::Resonance { capacitance } => {
            cmd_run(config, out_dir, &[Study::Resonance], capacitance)
        }
        Commands::All => cmd_run(config, out_dir, &Study::ALL, None),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Init { path } => cmd_init(&path),
    }
}

fn cmd_run(
    config: Option<&Path>,
    out_dir: Option<PathBuf>,
    studies: &[Study],
    capacitance: Option<f64>,
) -> AppResult<()> {
    let mut scenario = load_scenario(config)?;
    if let Some(c) = capacitance {
        scenario.resonance.capacitance_init_f = c;
        validate_scenario(&scenario)?;
    }
    let out_dir = out_dir.unwrap_or_else(|| scenario.output.dir.clone());
    tracing::info!(
        scenario = %scenario.name,
        out_dir = %out_dir.display(),
        studies = studies.len(),
        "running studies"
    );
    for &study in studies {
        cmd_study(study, &scenario, &out_dir)?;
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", path.display());
    let scenario = load_scenario(Some(path))?;
    validate_scenario(&scenario)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_init(path: &Path) -> AppResult<()> {
    save_scenario(path, &Scenario::default())?;
    println!("✓ Wrote default scenario to {}", path.display());
    Ok(())
}

fn cmd_study(study: Study, scenario: &Scenario, out_dir: &Path) -> AppResult<()> {
    match study {
        Study::Step => {
            let step = &scenario.step;
            let f_n = lrc_sim::damping::natural_frequency_hz(step.inductance_h, step.capacitance_f);
            println!("Natural frequency: {:.3} Hz", f_n);
        }
        Study::Sweep => {
            let sweep = &scenario.sweep;
            let f_res = lrc_ac::resonant_frequency(sweep.inductance_h, sweep.capacitance_f)?;
            println!("Resonant frequency: {:.3} Hz", f_res);
        }
        Study::Am | Study::Resonance => {}
    }

    let paths = render_study(study, scenario, out_dir)?;
    for path in paths {
        println!("✓ Saved {}", path.display());
    }
    Ok(())
}
