pub mod cmd {
    pub const SEED: &str = "praxis seed";
    pub const SEED_RESET: &str = "praxis seed --reset";
    pub const LIST_SERVICES: &str = "praxis list services";
    pub const FAVORITES: &str = "praxis favorites";
}

pub mod fmt {
    use praxis_types::Resource;

    /// Resource as typed on the command line (`stream-posts`, not `stream_posts`)
    pub fn resource(resource: Resource) -> String {
        resource.as_str().replace('_', "-")
    }

    pub fn list(resource: Resource) -> String {
        format!("praxis list {}", self::resource(resource))
    }

    pub fn show(resource: Resource, id: &str) -> String {
        format!("praxis show {} {}", self::resource(resource), id)
    }

    pub fn toggle(resource: Resource, id: &str) -> String {
        format!("praxis toggle {} {}", self::resource(resource), id)
    }

    pub fn delete_yes(resource: Resource, id: &str) -> String {
        format!("praxis delete {} {} --yes", self::resource(resource), id)
    }

    pub fn favorites_for(actor: &str) -> String {
        format!("praxis favorites --actor {}", actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_types::Resource;

    #[test]
    fn test_resource_names_match_cli_values() {
        assert_eq!(fmt::resource(Resource::StreamPosts), "stream-posts");
        assert_eq!(fmt::show(Resource::Services, "3"), "praxis show services 3");
    }
}
