//! Output mode and terminal capabilities for one command run.

use std::io::IsTerminal;

/// How a command prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable documents on stdout
    Json,
    /// `key=value` lines and tab-separated rows
    #[default]
    Plain,
    /// Tables, badges and bars
    Pretty,
}

impl OutputMode {
    /// `--json` beats `--format`. Without either, a real terminal gets
    /// tables and anything else gets plain lines.
    fn choose(json_flag: bool, format_flag: Option<&str>, term: &Terminal) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format_flag.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            Some("plain") => Self::Plain,
            Some("table" | "pretty") => Self::Pretty,
            _ if term.stdout_tty && !term.dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }

    pub fn is_pretty(self) -> bool {
        self == Self::Pretty
    }
}

/// What the process's streams and environment allow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set, whatever its value
    pub no_color_env: bool,
    /// Positive `COLUMNS`, if any
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|cols| cols.parse::<usize>().ok())
                .filter(|width| *width > 0),
        }
    }

    /// Whether ANSI escapes may go to a stream with the given TTY status.
    pub fn paints(&self, stream_tty: bool, no_color_flag: bool) -> bool {
        stream_tty && !no_color_flag && !self.no_color_env && !self.dumb
    }
}

/// Rendering decisions shared by every command's output.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Width for dividers and bars; comfy-table sizes itself
    pub width: usize,
    pub mode: OutputMode,
    /// Symbol printed before amounts in pretty mode
    pub currency: String,
    /// Stdin and stdout are both terminals
    pub interactive: bool,
}

impl UiContext {
    /// Detect the terminal and apply the global and per-command flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::for_terminal(
            &Terminal::detect(),
            json_flag,
            format_flag,
            no_color_flag,
            ascii_flag,
        )
    }

    pub fn for_terminal(
        term: &Terminal,
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self {
            color: term.paints(term.stdout_tty, no_color_flag),
            unicode: !ascii_flag,
            width: term.columns.unwrap_or(80),
            mode: OutputMode::choose(json_flag, format_flag, term),
            currency: String::new(),
            interactive: term.stdin_tty && term.stdout_tty,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Confirmation prompts need a person on both ends.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}
