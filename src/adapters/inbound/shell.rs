use crate::application::components::ActionOutcome;
use crate::application::dashboard::Dashboard;
use crate::ports::outbound::{
    ConfirmationPrompt, DiagnosticReporter, OutputPresenter, TraceabilityApi, ViewRenderer,
};
use crate::shared::Result;
use std::io;

const HELP: &str = "\
Commands:
  health          probe backend health
  suppliers       load the supplier quality report
  trace [SERIAL]  trace SERIAL, or submit the current input
  type TEXT       type TEXT into the trace input
  random          sample random serials (admin)
  pick N          copy the N-th sampled serial into the trace input (admin)
  seed            load demo data (admin)
  clear           wipe the database after confirmation (admin)
  show            render the dashboard again
  help            show this help
  quit            leave the shell";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Nothing,
    Health,
    Suppliers,
    /// Trace the given serial, or submit whatever the input holds
    Trace(Option<String>),
    /// Replace the trace input's text
    Type(String),
    Random,
    /// One-based position in the sampled list
    Pick(usize),
    Seed,
    Clear,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => ShellCommand::Nothing,
            "health" => ShellCommand::Health,
            "suppliers" | "load" => ShellCommand::Suppliers,
            "trace" => ShellCommand::Trace((!rest.is_empty()).then(|| rest.to_string())),
            "type" => ShellCommand::Type(rest.to_string()),
            "random" | "sample" => ShellCommand::Random,
            "pick" => {
                let n = rest
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| "pick expects a number starting at 1".to_string())?;
                ShellCommand::Pick(n)
            }
            "seed" => ShellCommand::Seed,
            "clear" => ShellCommand::Clear,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(format!(
                    "Unknown command: {}. Type `help` for the list.",
                    other
                ))
            }
        };

        if !rest.is_empty()
            && !matches!(
                command,
                ShellCommand::Trace(_) | ShellCommand::Type(_) | ShellCommand::Pick(_)
            )
        {
            return Err(format!("`{}` takes no arguments", word));
        }
        Ok(command)
    }
}

/// ShellSession - drives one dashboard from line-oriented input
///
/// Stands in for the page's event loop: every line is one user action and
/// the dashboard is rendered after each.
pub struct ShellSession<'a, A, D, C> {
    dashboard: &'a Dashboard<A, D, C>,
    renderer: &'a dyn ViewRenderer,
    presenter: &'a dyn OutputPresenter,
}

impl<'a, A, D, C> ShellSession<'a, A, D, C>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
    C: ConfirmationPrompt,
{
    pub fn new(
        dashboard: &'a Dashboard<A, D, C>,
        renderer: &'a dyn ViewRenderer,
        presenter: &'a dyn OutputPresenter,
    ) -> Self {
        Self {
            dashboard,
            renderer,
            presenter,
        }
    }

    /// Runs until `quit` or end of input
    pub async fn run<I>(&self, mut lines: I) -> Result<()>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        self.presenter.present(HELP)?;
        self.render()?;

        loop {
            eprint!("supply-trace> ");
            let Some(line) = lines.next() else {
                break;
            };

            match ShellCommand::parse(&line?) {
                Ok(ShellCommand::Quit) => break,
                Ok(ShellCommand::Nothing) => continue,
                Ok(ShellCommand::Help) => self.presenter.present(HELP)?,
                Ok(command) => {
                    self.execute(command).await?;
                    self.render()?;
                }
                Err(message) => self.presenter.present(&message)?,
            }
        }
        Ok(())
    }

    /// Executes one command against the dashboard
    pub async fn execute(&self, command: ShellCommand) -> Result<Option<ActionOutcome>> {
        let dashboard = self.dashboard;
        let outcome = match command {
            ShellCommand::Health => {
                dashboard.health().probe().await;
                None
            }
            ShellCommand::Suppliers => Some(dashboard.suppliers().load().await),
            ShellCommand::Trace(Some(serial)) => Some(dashboard.trace().trace(&serial).await),
            ShellCommand::Trace(None) => Some(dashboard.trace().submit().await),
            ShellCommand::Type(text) => {
                dashboard.trace().input().set_value(&text);
                None
            }
            ShellCommand::Random | ShellCommand::Pick(_) | ShellCommand::Seed | ShellCommand::Clear => {
                let admin = match dashboard.admin() {
                    Ok(admin) => admin,
                    Err(err) => {
                        self.presenter.present(&err.to_string())?;
                        return Ok(None);
                    }
                };
                match command {
                    ShellCommand::Random => Some(admin.load_random_serials().await),
                    ShellCommand::Seed => Some(admin.seed_database().await),
                    ShellCommand::Clear => Some(admin.clear_database().await),
                    ShellCommand::Pick(n) => {
                        if admin.pick_serial(n - 1).is_none() {
                            self.presenter
                                .present(&format!("No sampled serial at position {}", n))?;
                        }
                        None
                    }
                    _ => None,
                }
            }
            ShellCommand::Nothing | ShellCommand::Show | ShellCommand::Help | ShellCommand::Quit => {
                None
            }
        };
        Ok(outcome)
    }

    fn render(&self) -> Result<()> {
        let output = self.renderer.render(&self.dashboard.snapshot())?;
        self.presenter.present(&output)
    }
}
