//! Common traits for GoLinks resources

/// Common trait for resources addressed by gid or name
pub trait GolinksResource {
    /// Server-assigned identifier
    fn gid(&self) -> i64;

    /// Human-readable name
    fn name(&self) -> &str;
}
