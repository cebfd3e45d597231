use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use regex::{Regex, RegexBuilder};

/// Color only for an interactive stdout, and never when `NO_COLOR` is set.
pub fn stdout_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Styling switch shared by every view; with color off each method returns
/// the text unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled { text.bold().to_string() } else { text.to_string() }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled { text.dimmed().to_string() } else { text.to_string() }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.enabled { text.cyan().to_string() } else { text.to_string() }
    }

    pub fn good(&self, text: &str) -> String {
        if self.enabled { text.green().to_string() } else { text.to_string() }
    }

    pub fn warn(&self, text: &str) -> String {
        if self.enabled { text.yellow().to_string() } else { text.to_string() }
    }

    pub fn bad(&self, text: &str) -> String {
        if self.enabled { text.red().to_string() } else { text.to_string() }
    }

    /// Color keyed by canonical status code
    pub fn status(&self, code: &str, label: &str) -> String {
        match code {
            "active" | "confirmed" | "completed" => self.good(label),
            "draft" | "pending" | "scheduled" => self.warn(label),
            "canceled" | "no_show" => self.bad(label),
            _ => self.dim(label),
        }
    }

    /// Mark every case-insensitive occurrence of `term` in `text`.
    pub fn highlight(&self, text: &str, term: Option<&str>) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match term {
            Some(term) => highlight_matches(text, term, |m| m.black().on_yellow().to_string()),
            None => text.to_string(),
        }
    }
}

/// Replace each case-insensitive match of the literal `term` with `mark(m)`.
/// Regex metacharacters in `term` are matched literally.
pub fn highlight_matches(text: &str, term: &str, mark: impl Fn(&str) -> String) -> String {
    let term = term.trim();
    if term.is_empty() {
        return text.to_string();
    }
    let pattern: Regex = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return text.to_string(),
    };
    pattern
        .replace_all(text, |caps: &regex::Captures| mark(&caps[0]))
        .into_owned()
}
