use praxis_runtime::{Config, DataPaths, Layout};
use praxis_engine::SortPagePolicy;
use praxis_types::Resource;

use super::collection::noun;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, SeedCount, SeedResultViewModel, StatusBadge,
};

pub fn present_seed(
    reset: bool,
    created: Vec<(Resource, usize)>,
    paths: &DataPaths,
) -> CommandResultViewModel<SeedResultViewModel> {
    let total: usize = created.iter().map(|(_, count)| count).sum();

    CommandResultViewModel::new(SeedResultViewModel {
        reset,
        created: created
            .into_iter()
            .map(|(resource, count)| SeedCount {
                resource: resource.as_str().to_string(),
                count,
            })
            .collect(),
        database: paths.database().display().to_string(),
    })
    .with_badge(StatusBadge::success(format!("Seeded {} items", total)))
    .with_suggestion(Guidance::new("Browse the catalog").with_command(cmd::LIST_SERVICES))
    .with_suggestion(Guidance::new("Start over from an empty store").with_command(cmd::SEED_RESET))
}

pub fn present_config(paths: &DataPaths, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let config_file = paths.config();
    let config_exists = config_file.exists();

    let mut result = CommandResultViewModel::new(ConfigViewModel {
        data_dir: paths.root().display().to_string(),
        config_file: config_file.display().to_string(),
        config_exists,
        database: paths.database().display().to_string(),
        storage: paths.storage().display().to_string(),
        page_size: config.page_size,
        sort_page_policy: match config.sort_page_policy {
            SortPagePolicy::KeepPage => "keep_page".to_string(),
            SortPagePolicy::ResetPage => "reset_page".to_string(),
        },
        layout: match config.layout {
            Layout::Grid => "grid".to_string(),
            Layout::List => "list".to_string(),
        },
        default_sort: config.default_sort.as_str().to_string(),
    });

    if !paths.database().exists() {
        result = result.with_suggestion(
            Guidance::new(format!("No {} stored yet; load demo data", noun(Resource::Services, 2)))
                .with_command(cmd::SEED),
        );
    }
    result
}
