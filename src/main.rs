mod cli;

use cli::{Args, Command};
use std::io::{self, IsTerminal};
use std::process;
use supply_trace::adapters::inbound::ShellSession;
use supply_trace::adapters::outbound::console::{
    ActivitySpinner, ConsoleConfirmation, StdoutPresenter, TracingDiagnosticReporter,
};
use supply_trace::adapters::outbound::network::HttpTraceabilityClient;
use supply_trace::application::components::ActionOutcome;
use supply_trace::application::dashboard::Dashboard;
use supply_trace::application::dto::RenderFormat;
use supply_trace::application::factories::RendererFactory;
use supply_trace::application::view::messages;
use supply_trace::config::{self, ConsoleSettings};
use supply_trace::ports::outbound::OutputPresenter;
use supply_trace::shared::error::{ExitCode, TraceConsoleError};
use supply_trace::shared::Result;
use tracing_subscriber::EnvFilter;

type ConsoleDashboard =
    Dashboard<HttpTraceabilityClient, TracingDiagnosticReporter, ConsoleConfirmation>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("supply_trace={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(&args)?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let api = HttpTraceabilityClient::new(&settings.api_base)?;
    let diagnostics = TracingDiagnosticReporter::new();
    let confirmation = ConsoleConfirmation::new(args.assume_yes());

    let dashboard = Dashboard::new(
        settings.api_base.clone(),
        api,
        diagnostics,
        confirmation,
        settings.admin_controls,
    );

    let interactive = io::stderr().is_terminal();
    let colored = !args.no_color
        && settings.format == RenderFormat::Text
        && io::stdout().is_terminal();
    let spinner_enabled = interactive && settings.format == RenderFormat::Text;
    let renderer = RendererFactory::create(settings.format, colored);
    let presenter = StdoutPresenter::new();

    // Page-load hook
    let health = {
        let _spinner = ActivitySpinner::start("Checking health…", spinner_enabled);
        dashboard.on_load().await
    };

    let code = match &args.command {
        Command::Health => {
            if health.is_ok() {
                ExitCode::Success
            } else {
                ExitCode::ActionFailed
            }
        }
        Command::Shell => {
            let session = ShellSession::new(&dashboard, renderer.as_ref(), &presenter);
            session.run(stdin_lines()).await?;
            return Ok(ExitCode::Success);
        }
        command => run_action(&dashboard, command, spinner_enabled).await?,
    };

    presenter.present(&renderer.render(&dashboard.snapshot())?)?;
    Ok(code)
}

/// Runs one non-interactive command and maps its outcome to an exit code
async fn run_action(
    dashboard: &ConsoleDashboard,
    command: &Command,
    spinner_enabled: bool,
) -> Result<ExitCode> {
    let spin = |label: &str| ActivitySpinner::start(label, spinner_enabled);

    let outcome = match command {
        Command::Suppliers => {
            let _spinner = spin(messages::suppliers::BUSY_LABEL);
            dashboard.suppliers().load().await
        }
        Command::Trace { serial } => {
            let _spinner = spin(messages::trace::LOADING);
            dashboard.trace().trace(serial).await
        }
        Command::Random { pick } => {
            let admin = dashboard.admin()?;
            let outcome = {
                let _spinner = spin(messages::admin::RANDOM_BUSY_LABEL);
                admin.load_random_serials().await
            };
            if let Some(n) = pick {
                if outcome == ActionOutcome::Rendered && admin.pick_serial(*n as usize - 1).is_none()
                {
                    tracing::warn!("No sampled serial at position {}", n);
                }
            }
            outcome
        }
        Command::Seed => {
            let admin = dashboard.admin()?;
            let _spinner = spin(messages::admin::SEED_BUSY_LABEL);
            admin.seed_database().await
        }
        Command::Clear { .. } => {
            // No spinner here: the confirmation prompt shares the terminal
            dashboard.admin()?.clear_database().await
        }
        Command::Health | Command::Shell => return Ok(ExitCode::Success),
    };

    Ok(outcome.exit_code())
}

fn load_settings(args: &Args) -> Result<ConsoleSettings> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().map_err(|e| TraceConsoleError::ConfigReadError {
                path: ".".into(),
                details: e.to_string(),
            })?;
            config::discover_config(&cwd)?
        }
    };

    config::resolve_settings(&args.overrides(), config_file.as_ref())
}

/// Reads stdin one line at a time without holding its lock between lines,
/// so the confirmation prompt can read from it too.
fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    })
}
