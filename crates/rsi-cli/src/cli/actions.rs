//! GitHub Actions host: inputs from `INPUT_*` variables, report lines as
//! workflow commands on stdout.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use rsi_core::{InputSource, Reporter};

const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Environment variable the runner sets for input `name`.
pub fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escapes message data for `::error::` and similar workflow commands.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub struct ActionsHost<W = io::Stdout> {
    vars: HashMap<String, String>,
    out: Mutex<W>,
    failed: AtomicBool,
}

impl ActionsHost<io::Stdout> {
    /// Snapshot of the process environment, reporting to stdout.
    pub fn from_env() -> Self {
        Self::new(std::env::vars().collect(), io::stdout())
    }
}

impl<W: Write> ActionsHost<W> {
    pub fn new(vars: HashMap<String, String>, out: W) -> Self {
        Self {
            vars,
            out: Mutex::new(out),
            failed: AtomicBool::new(false),
        }
    }

    pub fn event_path(&self) -> Option<PathBuf> {
        self.vars
            .get(EVENT_PATH_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_failed() {
            1
        } else {
            0
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("could not write report line: {}", e);
        }
    }
}

impl<W> InputSource for ActionsHost<W> {
    /// Trimmed like the runner's own `getInput`; blank means unset.
    fn input(&self, name: &str) -> Option<String> {
        self.vars
            .get(&input_var(name))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl<W: Write + Send> Reporter for ActionsHost<W> {
    fn info(&self, line: &str) {
        self.write_line(line);
    }

    fn error(&self, line: &str) {
        self.write_line(&format!("::error::{}", escape_data(line)));
    }

    fn set_failed(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        self.error(message);
    }
}
