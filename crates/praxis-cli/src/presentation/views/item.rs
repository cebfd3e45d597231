use std::fmt;

use crate::presentation::formatters::{Palette, format_date};
use crate::presentation::view_models::{DisplayOptions, ItemDetailViewModel};

pub struct ItemDetailView<'a> {
    data: &'a ItemDetailViewModel,
    palette: Palette,
}

impl<'a> ItemDetailView<'a> {
    pub fn new(data: &'a ItemDetailViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }

    fn field(&self, f: &mut fmt::Formatter, label: &str, value: &str) -> fmt::Result {
        writeln!(f, "  {:<12} {}", self.palette.dim(&format!("{}:", label)), value)
    }
}

impl<'a> fmt::Display for ItemDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let item = &self.data.item;
        let star = if item.is_favorite { " ★" } else { "" };

        writeln!(f, "{}{}", self.palette.bold(&item.title), star)?;
        if !item.subtitle.is_empty() {
            writeln!(f, "{}", item.subtitle)?;
        }
        writeln!(f)?;

        self.field(f, "ID", &item.id)?;
        self.field(f, "Resource", &self.data.resource)?;
        self.field(f, "Category", &item.category)?;
        self.field(f, "Status", &self.palette.status(&item.status, &item.status_label))?;
        self.field(f, "Price", &format!("${}", item.price))?;
        self.field(f, "Duration", &item.duration)?;
        if let Some(location) = &self.data.location {
            self.field(f, "Location", location)?;
        }
        if let Some(created_at) = &item.created_at {
            self.field(f, "Created", &format_date(created_at))?;
        }
        if let Some(published) = &self.data.first_published_at {
            self.field(f, "Published", &format_date(published))?;
        }
        if let Some(image_url) = &item.image_url {
            self.field(f, "Image", image_url)?;
        }
        Ok(())
    }
}
