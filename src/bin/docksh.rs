// src/bin/docksh.rs

use anyhow::Result;
use clap::Parser;
use docksh::{
    cli::{Cli, render},
    constants::DATA_DIR,
    core::{locale::Locale, parser::CommandParser},
    models::ExecutionResult,
    system::executor::{ShellError, ShellExecutor},
    system::stdin::StdinRouter,
};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // A user interruption exits silently with the conventional code,
        // like any shell would.
        if let Some(shell_err) = e.downcast_ref::<ShellError>() {
            if matches!(shell_err, ShellError::Interrupted) {
                std::process::exit(shell_err.exit_code());
            }
            render::print_error(&shell_err.to_string());
            std::process::exit(shell_err.exit_code());
        }
        render::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {cli:?}");

    let data_dir = resolve_data_dir(cli.mappings);
    log::debug!("Using mapping data directory '{}'", data_dir.display());
    let mut executor = ShellExecutor::new(data_dir, Locale::new(&cli.lang), cli.dry_run)?;

    // One reader owns stdin for the whole process; the interactive loop
    // and streaming sessions take turns consuming its lines.
    let stdin_router = StdinRouter::spawn();
    executor.attach_stdin_router(Arc::clone(&stdin_router));

    if cli.command.is_empty() {
        run_shell(&executor, &stdin_router)
    } else {
        run_once(&executor, &cli.command.join(" "))
    }
}

/// One-shot mode: run the command, print its result, and exit with one of
/// the documented codes.
fn run_once(executor: &ShellExecutor, input: &str) -> Result<()> {
    let result = executor.execute(input)?;
    render::print_result(&result);
    let code = process_exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Direct invocation reports 0 on success and 1 on any failure; the
/// child's own exit code stays inside the printed `ExecutionResult`.
/// Interruption (130) is handled separately as an error in `main`.
fn process_exit_code(result: &ExecutionResult) -> i32 {
    if result.is_success() { 0 } else { 1 }
}

/// Interactive mode: a plain line loop. A rejected or failed command is
/// reported and the loop continues; only EOF or an explicit `exit`/`quit`
/// ends the shell.
fn run_shell(executor: &ShellExecutor, stdin: &StdinRouter) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        render::print_banner();
    }

    loop {
        if interactive {
            print!("{}", render::prompt());
            std::io::stdout().flush()?;
        }

        let Some(line) = stdin.next_line_blocking() else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        match executor.execute(input) {
            Ok(result) => render::print_result(&result),
            Err(ShellError::Interrupted) => {
                // The streaming session absorbed the interrupt; the shell
                // itself keeps running.
                println!("Command interrupted by user");
            }
            Err(e) => {
                render::print_error(&e.to_string());
                if let ShellError::MappingNotFound { command } = &e {
                    render::print_suggestions(&CommandParser::new().suggest(command));
                }
            }
        }
    }
    Ok(())
}

/// Locates the mapping data directory: an explicit flag wins, then a
/// `data/` directory next to the executable, then one in the current
/// directory, then the per-user config directory. A directory that does
/// not exist yet is fine; the engine falls back to built-in defaults.
fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        let candidate = parent.join(DATA_DIR);
        if candidate.exists() {
            return candidate;
        }
    }
    let local = PathBuf::from(DATA_DIR);
    if local.exists() {
        return local;
    }
    dirs::config_dir().map_or(local, |dir| dir.join("docksh").join(DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_invocation_folds_failures_to_one() {
        let ok = ExecutionResult {
            exit_code: 0,
            ..Default::default()
        };
        let timed_out = ExecutionResult {
            exit_code: 124,
            ..Default::default()
        };
        let child_error = ExecutionResult {
            exit_code: 3,
            ..Default::default()
        };
        assert_eq!(process_exit_code(&ok), 0);
        assert_eq!(process_exit_code(&timed_out), 1);
        assert_eq!(process_exit_code(&child_error), 1);
    }
}
