use std::fmt;

use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{
    DisplayOptions, MutationAction, MutationResultViewModel, ValidationErrorsViewModel,
};

// --------------------------------------------------------
// Mutation Result View
// --------------------------------------------------------

pub struct MutationResultView<'a> {
    data: &'a MutationResultViewModel,
    palette: Palette,
}

impl<'a> MutationResultView<'a> {
    pub fn new(data: &'a MutationResultViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }
}

impl<'a> fmt::Display for MutationResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let id = data.id.as_deref().unwrap_or("?");

        if data.cancelled {
            writeln!(f, "Nothing was changed; {} {} is untouched.", data.resource, id)?;
        } else {
            match data.action {
                MutationAction::Delete => writeln!(f, "Removed {} {}.", data.resource, id)?,
                MutationAction::Toggle | MutationAction::Create => {
                    let title = data.title.as_deref().unwrap_or(id);
                    let status = data.status.as_deref().unwrap_or("unknown");
                    writeln!(
                        f,
                        "{} #{} {} is now {}.",
                        data.resource,
                        id,
                        self.palette.bold(title),
                        self.palette.status(status, status)
                    )?;
                }
            }
        }

        for note in &data.notifications {
            let line = match note.level.as_str() {
                "error" => self.palette.bad(&note.message),
                _ => self.palette.good(&note.message),
            };
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Validation Errors View
// --------------------------------------------------------

pub struct ValidationErrorsView<'a> {
    data: &'a ValidationErrorsViewModel,
    palette: Palette,
}

impl<'a> ValidationErrorsView<'a> {
    pub fn new(data: &'a ValidationErrorsViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }
}

impl<'a> fmt::Display for ValidationErrorsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for error in &self.data.errors {
            writeln!(f, "  {} {}", self.palette.bad(&format!("{}:", error.field)), error.message)?;
        }
        Ok(())
    }
}
