//! Tutorial CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tutorial::cli::{Cli, CommandDispatcher};
use tutorial::config::Settings;
use tutorial::shell::{is_ci, ProcessRunner};
use tutorial::ui::create_ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tutorial=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tutorial=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Tutorial starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !is_ci();

    let settings = match Settings::load(&cli.settings_overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            let mut ui = create_ui(is_interactive, cli.output_mode().unwrap_or_default());
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(e.exit_code());
        }
    };

    let mut ui = create_ui(is_interactive, settings.output);

    // Determine project root
    let project_root = match cli.project.clone() {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.error(&format!("Error: cannot read current directory: {}", e));
                return ExitCode::from(1);
            }
        },
    };

    let runner = ProcessRunner::new();
    let dispatcher = CommandDispatcher::new(project_root, settings, &runner);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(details) = e.details() {
                tracing::debug!("Full output:\n{}", details);
                if ui.output_mode().shows_command_output() {
                    ui.show_output(&format!("{}\n", details));
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}
