use std::fmt;

use praxis_engine::PageSlot;

use crate::presentation::formatters::{Palette, pad_right, truncate};
use crate::presentation::view_models::{
    CollectionPageViewModel, CollectionStateViewModel, DisplayOptions, ItemCardViewModel,
    PaginationViewModel, ViewMode,
};

const SUBTITLE_WIDTH: usize = 60;
const TITLE_COLUMN: usize = 32;
const CATEGORY_COLUMN: usize = 14;
const STATUS_COLUMN: usize = 10;

// --------------------------------------------------------
// Collection Page View
// --------------------------------------------------------

pub struct CollectionPageView<'a> {
    data: &'a CollectionPageViewModel,
    options: DisplayOptions,
    palette: Palette,
}

impl<'a> CollectionPageView<'a> {
    pub fn new(data: &'a CollectionPageViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            options,
            palette: Palette::new(options.enable_color),
        }
    }

    fn search(&self) -> Option<&str> {
        self.data.filters.search.as_deref()
    }

    fn render_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = &self.data.filters;
        let mut parts = Vec::new();
        if let Some(category) = &filters.category {
            parts.push(format!("category={}", category));
        }
        if let Some(search) = &filters.search {
            parts.push(format!("search=\"{}\"", search));
        }
        if let Some(status) = &filters.status {
            parts.push(format!("status={}", status));
        }
        if let Some(practitioner) = &filters.practitioner {
            parts.push(format!("practitioner={}", practitioner));
        }
        parts.push(format!("sort={}", filters.sort));
        writeln!(f, "{}", self.palette.dim(&parts.join("  ")))
    }

    fn render_card(&self, f: &mut fmt::Formatter, item: &ItemCardViewModel) -> fmt::Result {
        let star = if item.is_favorite { " ★" } else { "" };
        writeln!(
            f,
            "┌ {} {}{}",
            self.palette.dim(&format!("#{}", item.id)),
            self.palette.bold(&self.palette.highlight(&item.title, self.search())),
            star
        )?;
        writeln!(
            f,
            "│ {} · {}",
            self.palette.highlight(&item.category, self.search()),
            self.palette.status(&item.status, &item.status_label)
        )?;
        writeln!(f, "│ ${} · {}", item.price, item.duration)?;
        writeln!(
            f,
            "└ {}",
            self.palette
                .highlight(&truncate(&item.subtitle, SUBTITLE_WIDTH), self.search())
        )
    }

    fn render_row(&self, f: &mut fmt::Formatter, item: &ItemCardViewModel) -> fmt::Result {
        let star = if item.is_favorite { "★" } else { " " };
        // Pad before styling; escape codes would break the column widths
        let title = pad_right(&truncate(&item.title, TITLE_COLUMN), TITLE_COLUMN);
        let category = pad_right(&truncate(&item.category, CATEGORY_COLUMN), CATEGORY_COLUMN);
        let status = pad_right(&item.status_label, STATUS_COLUMN);
        writeln!(
            f,
            "{} {:<6} {} {} {} {:>9}  {}",
            star,
            item.id,
            self.palette.highlight(&title, self.search()),
            self.palette.highlight(&category, self.search()),
            self.palette.status(&item.status, &status),
            format!("${}", item.price),
            item.duration
        )
    }

    fn render_pagination(&self, f: &mut fmt::Formatter, pagination: &PaginationViewModel) -> fmt::Result {
        if !pagination.visible {
            return Ok(());
        }

        let mut parts = Vec::new();
        parts.push(if pagination.has_prev {
            "« Prev".to_string()
        } else {
            self.palette.dim("« Prev")
        });
        for slot in &pagination.slots {
            parts.push(match slot {
                PageSlot::Page(n) if *n == pagination.current => self.palette.bold(&format!("[{}]", n)),
                PageSlot::Page(n) => n.to_string(),
                PageSlot::Ellipsis => "…".to_string(),
            });
        }
        parts.push(if pagination.has_next {
            "Next »".to_string()
        } else {
            self.palette.dim("Next »")
        });

        writeln!(f)?;
        writeln!(f, "{}", parts.join(" "))
    }
}

impl<'a> fmt::Display for CollectionPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.view {
            CollectionStateViewModel::Idle => {
                writeln!(f, "Waiting for a signed-in practitioner (pass --actor).")
            }
            CollectionStateViewModel::Loading { skeletons } => {
                for _ in 0..*skeletons {
                    writeln!(f, "{}", self.palette.dim("░░░░░░░░░░░░░░░░░░░░"))?;
                }
                Ok(())
            }
            CollectionStateViewModel::Failed { message, .. } => {
                writeln!(f, "Could not load {}: {}", self.data.resource, message)
            }
            CollectionStateViewModel::Empty { message, .. } => {
                self.render_filters(f)?;
                writeln!(f)?;
                writeln!(f, "{}", message)
            }
            CollectionStateViewModel::Ready { items, pagination } => {
                writeln!(
                    f,
                    "{}",
                    self.palette.bold(&format!(
                        "{} · page {} of {} · {} items",
                        self.data.resource,
                        pagination.current,
                        pagination.total_pages.max(1),
                        pagination.total_count
                    ))
                )?;
                self.render_filters(f)?;
                writeln!(f)?;

                if items.is_empty() {
                    writeln!(f, "Page {} is past the end of the results.", pagination.current)?;
                }

                match self.options.mode {
                    ViewMode::Grid => {
                        for (i, item) in items.iter().enumerate() {
                            if i > 0 {
                                writeln!(f)?;
                            }
                            self.render_card(f, item)?;
                        }
                    }
                    ViewMode::List => {
                        if !items.is_empty() {
                            writeln!(
                                f,
                                "  {:<6} {} {} {} {:>9}  DURATION",
                                "ID",
                                pad_right("TITLE", TITLE_COLUMN),
                                pad_right("CATEGORY", CATEGORY_COLUMN),
                                pad_right("STATUS", STATUS_COLUMN),
                                "PRICE"
                            )?;
                            writeln!(f, "{}", "-".repeat(96))?;
                        }
                        for item in items {
                            self.render_row(f, item)?;
                        }
                    }
                }

                self.render_pagination(f, pagination)
            }
        }
    }
}
