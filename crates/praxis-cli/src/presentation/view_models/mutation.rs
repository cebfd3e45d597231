use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationAction {
    Delete,
    Toggle,
    Create,
}

#[derive(Debug, Serialize)]
pub struct MutationResultViewModel {
    pub action: MutationAction,
    pub resource: String,
    pub id: Option<String>,
    /// Status after a toggle or create
    pub status: Option<String>,
    pub title: Option<String>,
    pub cancelled: bool,
    pub notifications: Vec<NotificationViewModel>,
}

#[derive(Debug, Serialize)]
pub struct NotificationViewModel {
    pub level: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorsViewModel {
    pub resource: String,
    pub errors: Vec<FieldErrorViewModel>,
}

#[derive(Debug, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub message: String,
}

impl CreateView for MutationResultViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::mutation::MutationResultView;
        Box::new(MutationResultView::new(self, options))
    }
}

impl CreateView for ValidationErrorsViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::mutation::ValidationErrorsView;
        Box::new(ValidationErrorsView::new(self, options))
    }
}
