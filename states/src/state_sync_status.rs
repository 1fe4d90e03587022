#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered but never observed by a compute run.
    #[default]
    Init,
    /// Changed since the last compute run.
    Dirty,
    Clean,
}
