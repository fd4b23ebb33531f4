//! pocketcalc: sequential four-function integer calculator
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc eval "12 + 30 ="            # 42
//! pocketcalc eval 7/0=                   # Erreur
//! pocketcalc --state calc.json eval 5+   # keep the engine between runs
//! pocketcalc --state calc.json eval 3=   # 8
//! pocketcalc repl                        # one key sequence per line
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use pocket_calculator::prelude::CalculatorDriver;
use pocket_calculator_cli::{
    logging, repl, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, EvalArgs,
    OutputFormat, Reporter, Session, StateAction, StateStore, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    let use_color = config.color.should_color();
    console::set_colors_enabled(use_color);
    logging::init(&config);
    let reporter = Reporter::new(use_color, config.verbosity.is_quiet());

    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args, &reporter),
        Commands::Repl => run_repl(&config, &reporter),
        Commands::State(args) => run_state(&config, args.action, &reporter),
        Commands::Config => run_config(&config, &reporter),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_width(cli.width)
        .with_state_path(cli.state.clone())
        .with_results_path(cli.results.clone())
}

fn run_eval(config: &CliConfig, args: &EvalArgs, reporter: &Reporter) -> CliResult<()> {
    let mut session = Session::open(config)?;
    session.feed(&args.key_sequence())?;
    session.save()?;

    match args.format() {
        OutputFormat::Text => reporter.display(session.visible_display(), session.is_error())?,
        OutputFormat::Json => {
            let json = session.calculator().snapshot().to_json_pretty()?;
            reporter.json(&json)?;
        }
    }
    Ok(())
}

fn run_repl(config: &CliConfig, reporter: &Reporter) -> CliResult<()> {
    let mut session = Session::open(config)?;
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        reporter.info("keys: 0-9 + - * / % = n C AC; quit to exit");
    }

    let outcome = repl::run(&mut session, stdin.lock(), reporter, interactive);
    session.save()?;
    outcome
}

fn run_state(config: &CliConfig, action: StateAction, reporter: &Reporter) -> CliResult<()> {
    let path = config.state_path.as_ref().ok_or_else(|| {
        CliError::invalid_argument("no state file given; pass --state or set POCKETCALC_STATE")
    })?;
    let store = StateStore::new(path);

    match action {
        StateAction::Show => match store.load_snapshot()? {
            Some(snapshot) => reporter.json(&snapshot.to_json_pretty()?)?,
            None => reporter.info(&format!("no saved state at {}", path.display())),
        },
        StateAction::Reset => {
            if store.clear()? {
                reporter.info(&format!("removed {}", path.display()));
            } else {
                reporter.info(&format!("no saved state at {}", path.display()));
            }
        }
    }
    Ok(())
}

fn run_config(config: &CliConfig, reporter: &Reporter) -> CliResult<()> {
    reporter.json(&serde_json::to_string_pretty(config)?)?;
    Ok(())
}
