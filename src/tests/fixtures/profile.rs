use crate::shared::config::environment::EnvironmentProfile;

pub fn complete_profile() -> EnvironmentProfile {
    EnvironmentProfile::from_pairs([
        ("DB_HOST", "db.internal"),
        ("DB_USERNAME", "nuber"),
        ("DB_PASSWORD", "s3cret"),
    ])
}
