use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

#[derive(Debug, Serialize)]
pub struct SeedResultViewModel {
    pub reset: bool,
    pub created: Vec<SeedCount>,
    pub database: String,
}

#[derive(Debug, Serialize)]
pub struct SeedCount {
    pub resource: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_file: String,
    pub config_exists: bool,
    pub database: String,
    pub storage: String,
    pub page_size: u32,
    pub sort_page_policy: String,
    pub layout: String,
    pub default_sort: String,
}

impl CreateView for SeedResultViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::SeedResultView;
        Box::new(SeedResultView::new(self, options))
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self, options))
    }
}
