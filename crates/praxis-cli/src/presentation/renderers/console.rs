use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }

    /// Text output exactly as `render` would print it.
    pub fn to_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let palette = Palette::new(self.options.enable_color);
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            out.push_str(&format!("{} {}\n\n", badge.icon(), palette.bold(&badge.label)));
        }

        out.push_str(&result.content.create_view(self.options).to_string());

        if !result.suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", palette.warn(&palette.bold("💡 Tips:"))));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    out.push_str(&format!(": {}", palette.accent(cmd)));
                }
                out.push('\n');
            }
        }
        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", self.to_text(&result));
        Ok(())
    }
}
