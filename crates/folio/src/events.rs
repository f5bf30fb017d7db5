#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The loading placeholder has been up long enough.
    ContentReady,
    ContentReload,
}
