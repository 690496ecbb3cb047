//! `child`: embed a GPU-rendered window into another process's window.
//!
//! Usage: `child <PARENT_PID>` (see `--help`).

#![cfg_attr(windows, windows_subsystem = "windows")]

use std::process::ExitCode;

use embedded_child::platform::{self, NativeHost};
use embedded_child::{ChildArgs, ChildError, WinitGraphics};

fn main() -> ExitCode {
    if let Err(e) = platform::attach_console() {
        return fail(e);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    embedded_child::init();

    let args = match ChildArgs::parse_env() {
        Ok(args) => args,
        Err(e) => return fail(e),
    };
    println!("{}", args.parent_pid());

    let host = NativeHost::new();
    match embedded_child::run(&host, &args, WinitGraphics::new) {
        Ok(summary) => {
            log::info!(
                "Exiting after {} frames, final color {:?}",
                summary.frames_presented,
                summary.final_color.channels()
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

/// Log, show the blocking dialog and map to the fatal exit code.
fn fail(error: ChildError) -> ExitCode {
    log::error!("{}", error);
    platform::show_error_dialog(&error.to_string());
    ExitCode::from(error.exit_code())
}
