use crate::policy::{CheckMode, RepositoryPolicy};
use lagguard_types::{FeedDocument, PackageRecord, RepositoryFeed};

pub fn pkg(name: &str, time_file: i64, time_build: i64) -> PackageRecord {
    PackageRecord {
        name: name.to_string(),
        version: "1.0-1".to_string(),
        arch: None,
        time_file,
        time_build,
    }
}

pub fn policy(days: i64, mode: CheckMode) -> RepositoryPolicy {
    RepositoryPolicy::new(days, mode).expect("test policy should be valid")
}

pub fn repo(id: &str, packages: Vec<PackageRecord>) -> RepositoryFeed {
    RepositoryFeed {
        id: id.to_string(),
        enabled: true,
        packages,
    }
}

pub fn feed(repos: Vec<RepositoryFeed>) -> FeedDocument {
    FeedDocument {
        schema: None,
        repos,
    }
}
