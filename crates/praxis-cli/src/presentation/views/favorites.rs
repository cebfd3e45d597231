use std::fmt;

use crate::presentation::formatters::{Palette, truncate};
use crate::presentation::view_models::{
    DisplayOptions, FavoriteToggleViewModel, FavoritesListViewModel, MergeSummary,
};

fn write_merge(f: &mut fmt::Formatter, merge: &Option<MergeSummary>) -> fmt::Result {
    if let Some(merge) = merge
        && merge.total > 0
    {
        writeln!(
            f,
            "Synced {} of {} saved favorites to your account.",
            merge.pushed, merge.total
        )?;
    }
    Ok(())
}

pub struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
    palette: Palette,
}

impl<'a> FavoriteToggleView<'a> {
    pub fn new(data: &'a FavoriteToggleViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }
}

impl<'a> fmt::Display for FavoriteToggleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_merge(f, &self.data.merge)?;
        let place = match &self.data.actor {
            Some(actor) => format!("for {}", actor),
            None => "on this device".to_string(),
        };
        if self.data.is_favorite {
            writeln!(f, "★ {} saved {}.", self.palette.bold(&self.data.id), place)
        } else {
            writeln!(f, "☆ {} removed {}.", self.palette.bold(&self.data.id), place)
        }
    }
}

pub struct FavoritesListView<'a> {
    data: &'a FavoritesListViewModel,
    palette: Palette,
}

impl<'a> FavoritesListView<'a> {
    pub fn new(data: &'a FavoritesListViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            palette: Palette::new(options.enable_color),
        }
    }
}

impl<'a> fmt::Display for FavoritesListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_merge(f, &self.data.merge)?;

        if self.data.items.is_empty() && self.data.missing.is_empty() {
            return writeln!(f, "No favorites yet.");
        }

        for item in &self.data.items {
            writeln!(
                f,
                "★ {:<6} {}  {}  ${}",
                item.id,
                self.palette.bold(&truncate(&item.title, 40)),
                self.palette.dim(&item.category),
                item.price
            )?;
        }
        if !self.data.missing.is_empty() {
            writeln!(
                f,
                "{}",
                self.palette
                    .dim(&format!("No longer available: {}", self.data.missing.join(", ")))
            )?;
        }
        Ok(())
    }
}
