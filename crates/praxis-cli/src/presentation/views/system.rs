use std::fmt;

use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{ConfigViewModel, DisplayOptions, SeedResultViewModel};

pub struct SeedResultView<'a> {
    data: &'a SeedResultViewModel,
}

impl<'a> SeedResultView<'a> {
    pub fn new(data: &'a SeedResultViewModel, _options: DisplayOptions) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SeedResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.reset {
            writeln!(f, "Cleared existing data.")?;
        }
        for count in &self.data.created {
            writeln!(f, "  {:<14} {}", count.resource, count.count)?;
        }
        writeln!(f, "Database: {}", self.data.database)
    }
}

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    palette: Palette,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let config_note = if data.config_exists { "" } else { " (not written, defaults)" };

        writeln!(f, "{}", self.palette.bold("Paths"))?;
        writeln!(f, "  data dir:  {}", data.data_dir)?;
        writeln!(f, "  config:    {}{}", data.config_file, self.palette.dim(config_note))?;
        writeln!(f, "  database:  {}", data.database)?;
        writeln!(f, "  storage:   {}", data.storage)?;
        writeln!(f)?;
        writeln!(f, "{}", self.palette.bold("Settings"))?;
        writeln!(f, "  page_size:        {}", data.page_size)?;
        writeln!(f, "  sort_page_policy: {}", data.sort_page_policy)?;
        writeln!(f, "  layout:           {}", data.layout)?;
        writeln!(f, "  default_sort:     {}", data.default_sort)
    }
}
