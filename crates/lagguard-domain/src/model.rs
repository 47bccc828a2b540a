use lagguard_types::PackageRecord;

/// Read-only view of the two timestamps the filter consults.
///
/// Hosts implement this for their own package objects; the filter never owns or mutates them.
pub trait Timestamped {
    /// Artifact/file timestamp, Unix epoch seconds.
    fn file_time(&self) -> i64;

    /// Build timestamp, Unix epoch seconds.
    fn build_time(&self) -> i64;
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn file_time(&self) -> i64 {
        (**self).file_time()
    }

    fn build_time(&self) -> i64 {
        (**self).build_time()
    }
}

impl Timestamped for PackageRecord {
    fn file_time(&self) -> i64 {
        self.time_file
    }

    fn build_time(&self) -> i64 {
        self.time_build
    }
}
