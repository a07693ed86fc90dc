//! Keypad calculator binary
//!
//! Run with: cargo run -p keypad-calculator -- [eval KEYS...]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event;
use keypad_calculator::cli::{run_eval, Cli, Commands};
use keypad_calculator::logging::init_tracing;
use keypad_calculator::tui::{render, terminal as session, CalculatorApp, InputHandler};
use keypad_calculator::CalcResult;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let config = cli.config();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_tracing(&config, true)?;
            run_tui()
        }
        Commands::Eval(args) => {
            init_tracing(&config, false)?;
            println!("{}", run_eval(&args)?);
            Ok(())
        }
    }
}

fn run_tui() -> CalcResult<()> {
    let mut stdout = io::stdout();
    session::enter(&mut stdout)?;

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = session::restore(&mut io::stdout());
            return Err(e.into());
        }
    };
    info!("keypad opened");

    let result = run_app(&mut terminal);

    // Restore even when the loop failed; the loop error wins
    let restored = session::restore(terminal.backend_mut());
    info!("keypad closed");

    result.and(restored.map_err(Into::into))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CalcResult<()> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    loop {
        let area = terminal.draw(|f| render(&app, f))?.area;

        let action = handler.handle_event(&event::read()?);
        debug!(?action, "input");
        app.handle(action, area);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
