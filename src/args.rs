//! Command line arguments.
//!
//! Uses clap for parsing with:
//! - Help text (`--help`)
//! - Lenient parent pid parsing (decimal prefix, trailing text ignored)
//! - Support for launchers that pass the pid as the whole command line

use std::ffi::OsString;
use std::time::Duration;

use crate::error::{ChildError, ChildResult};

/// Program name inserted in front of a bare `<PARENT_PID>` command line.
pub const PROGRAM_NAME: &str = "child";

/// Window class the parent registers by default.
pub const DEFAULT_PARENT_CLASS: &str = "Parent";

/// Default yield between frames, in microseconds.
pub const DEFAULT_FRAME_DELAY_US: u64 = 500;

/// Parsed command line of the child process.
///
/// # Examples
///
/// ```bash
/// # Embed into the window owned by process 4242
/// ./child 4242
///
/// # Look for a differently named window class and stop after 100 frames
/// ./child 4242 --parent-class HostFrame --max-frames 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildArgs {
    parent_pid: u32,
    parent_class: String,
    max_frames: Option<u64>,
    frame_delay_us: u64,
    vsync: bool,
}

impl ChildArgs {
    /// Create args for a known parent pid with every option at its default.
    pub fn new(parent_pid: u32) -> Self {
        Self {
            parent_pid,
            parent_class: DEFAULT_PARENT_CLASS.to_string(),
            max_frames: None,
            frame_delay_us: DEFAULT_FRAME_DELAY_US,
            vsync: true,
        }
    }

    /// Set the window class used to discover the parent.
    pub fn with_parent_class(mut self, class: impl Into<String>) -> Self {
        self.parent_class = class.into();
        self
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Set the per-frame yield.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay_us = delay.as_micros().min(u64::MAX as u128) as u64;
        self
    }

    /// Enable or disable vertical sync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Process id that must own the parent window.
    pub fn parent_pid(&self) -> u32 {
        self.parent_pid
    }

    /// Window class used to discover the parent.
    pub fn parent_class(&self) -> &str {
        &self.parent_class
    }

    /// Get the maximum number of frames to present before auto-exit.
    ///
    /// Default: `None` (run until quit)
    pub fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }

    /// Yield between frames.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_micros(self.frame_delay_us)
    }

    /// Get whether VSync is enabled.
    ///
    /// Default: true
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    /// Parse the current process's command line.
    ///
    /// `--help` and `--version` print and exit the process with code 0.
    pub fn parse_env() -> ChildResult<Self> {
        use clap::Parser;
        use clap::error::ErrorKind;

        let argv = normalize_args(std::env::args_os());
        match native::ClapArgs::try_parse_from(argv) {
            Ok(args) => args.try_into(),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(ChildError::CommandLine(e.to_string())),
        }
    }

    /// Parse an explicit argument list.
    ///
    /// The list goes through [`normalize_args`] first, so it may or may not
    /// start with a program name.
    pub fn try_parse_from<I, T>(args: I) -> ChildResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        use clap::Parser;

        let argv = normalize_args(args.into_iter().map(Into::into));
        native::ClapArgs::try_parse_from(argv)
            .map_err(|e| ChildError::CommandLine(e.to_string()))?
            .try_into()
    }
}

mod native {
    use super::*;
    use clap::Parser;

    /// Embedded child window arguments.
    #[derive(Parser, Debug)]
    #[command(
        name = "child",
        about = "Render into a window embedded in another process's top-level window",
        long_about = "Locates the top-level window of class --parent-class owned by \
            PARENT_PID, creates a borderless GPU-rendered window of the same size and \
            re-parents it under that window.\n\n\
            Press space inside the window to swap the red and green channels of the \
            background color.",
        version
    )]
    pub(super) struct ClapArgs {
        /// Decimal id of the process that owns the parent window.
        #[arg(allow_negative_numbers = true)]
        pub parent_pid: Option<String>,

        /// Extra positional arguments are accepted and ignored.
        #[arg(hide = true)]
        pub extra: Vec<String>,

        /// Window class name of the parent window.
        #[arg(long, default_value = DEFAULT_PARENT_CLASS)]
        pub parent_class: String,

        /// Exit after presenting N frames (useful for testing).
        #[arg(long)]
        pub max_frames: Option<u64>,

        /// Pause between frames in microseconds.
        #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_US)]
        pub frame_delay_us: u64,

        /// Disable vertical sync (may cause tearing).
        #[arg(long)]
        pub no_vsync: bool,
    }

    impl TryFrom<ClapArgs> for ChildArgs {
        type Error = ChildError;

        fn try_from(args: ClapArgs) -> ChildResult<Self> {
            let raw = args.parent_pid.ok_or(ChildError::MissingParentPid)?;
            let parent_pid = parse_parent_pid(&raw)?;

            if !args.extra.is_empty() {
                log::debug!("Ignoring extra arguments: {:?}", args.extra);
            }

            Ok(Self {
                parent_pid,
                parent_class: args.parent_class,
                max_frames: args.max_frames,
                frame_delay_us: args.frame_delay_us,
                vsync: !args.no_vsync,
            })
        }
    }
}

/// Parse a parent pid the way `wcstol(s, nullptr, 10)` reads it.
///
/// Leading whitespace and a `+` sign are skipped, then the longest run of
/// decimal digits is taken. Anything after the digits is ignored. Zero, no
/// digits, a negative sign or overflow are all rejected.
pub fn parse_parent_pid(raw: &str) -> ChildResult<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    match unsigned[..digits].parse::<u32>() {
        Ok(pid) if pid != 0 => Ok(pid),
        _ => Err(ChildError::InvalidParentPid(raw.to_string())),
    }
}

/// Insert [`PROGRAM_NAME`] when the command line starts with the pid itself.
///
/// A launcher that passes only the pid as the command line makes it the first
/// raw argument, where clap expects the program name. Only a first argument
/// that is entirely a signed or unsigned decimal number counts; anything else,
/// such as `7zip\child.exe`, is a program path.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv: Vec<OsString> = args.into_iter().collect();
    let starts_with_pid = argv
        .first()
        .is_some_and(|first| is_pid_token(&first.to_string_lossy()));
    if argv.is_empty() || starts_with_pid {
        argv.insert(0, OsString::from(PROGRAM_NAME));
    }
    argv
}

fn is_pid_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
