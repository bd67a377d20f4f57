//! How output should look for this invocation.

use std::io::IsTerminal;

/// Output shape chosen for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// Bare values and `key=value` lines for pipes and scripts
    Plain,
    /// Badges, headers and tables for a person at a terminal
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}

/// What the process knows about its terminal.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub stdout_is_tty: bool,
    pub dumb: bool,
    pub no_color_env: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    /// Inspect stdout and the `TERM`, `NO_COLOR` and `COLUMNS` variables.
    pub fn probe() -> Self {
        Self {
            stdout_is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(stdout_columns),
        }
    }
}

/// Rendering settings shared by every `ui::render` helper.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Settings for this process, given the global `--no-color`/`--ascii`
    /// flags and the command's `--json` flag.
    pub fn detect(json: bool, no_color: bool, ascii: bool) -> Self {
        Self::for_terminal(&Terminal::probe(), json, no_color, ascii)
    }

    /// `--json` always wins. Pretty output needs a real, non-dumb terminal.
    pub fn for_terminal(term: &Terminal, json: bool, no_color: bool, ascii: bool) -> Self {
        let capable = term.stdout_is_tty && !term.dumb;
        let mode = if json {
            OutputMode::Json
        } else if capable {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };

        Self {
            color: capable && !no_color && !term.no_color_env,
            unicode: !ascii,
            width: term.columns.unwrap_or(80),
            mode,
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .parse::<usize>()
        .ok()
        .filter(|cols| *cols > 0)
}

#[cfg(unix)]
fn stdout_columns() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ writes a winsize into the pointer and nothing else
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: rc == 0 means the kernel filled `size`
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn stdout_columns() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_is_tty: true,
            ..Terminal::default()
        }
    }

    #[test]
    fn test_json_flag_wins_everywhere() {
        assert_eq!(UiContext::for_terminal(&tty(), true, false, false).mode, OutputMode::Json);
        let piped = Terminal::default();
        assert_eq!(UiContext::for_terminal(&piped, true, false, false).mode, OutputMode::Json);
    }

    #[test]
    fn test_tty_is_pretty_and_colored() {
        let ui = UiContext::for_terminal(&tty(), false, false, false);
        assert_eq!(ui.mode, OutputMode::Pretty);
        assert!(ui.color);
    }

    #[test]
    fn test_pipe_is_plain_without_color() {
        let ui = UiContext::for_terminal(&Terminal::default(), false, false, false);
        assert_eq!(ui.mode, OutputMode::Plain);
        assert!(!ui.color);
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        let term = Terminal {
            dumb: true,
            ..tty()
        };
        let ui = UiContext::for_terminal(&term, false, false, false);
        assert_eq!(ui.mode, OutputMode::Plain);
        assert!(!ui.color);
    }

    #[test]
    fn test_color_opt_outs() {
        assert!(!UiContext::for_terminal(&tty(), false, true, false).color);
        let term = Terminal {
            no_color_env: true,
            ..tty()
        };
        assert!(!UiContext::for_terminal(&term, false, false, false).color);
    }

    #[test]
    fn test_ascii_and_width() {
        let term = Terminal {
            columns: Some(132),
            ..tty()
        };
        let ui = UiContext::for_terminal(&term, false, false, true);
        assert!(!ui.unicode);
        assert_eq!(ui.width, 132);
        assert_eq!(UiContext::for_terminal(&tty(), false, false, false).width, 80);
    }
}
