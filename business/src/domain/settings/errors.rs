#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings.session_closed")]
    SessionClosed,
    #[error("settings.lock_poisoned")]
    LockPoisoned,
    #[error("settings.label_empty")]
    LabelEmpty,
}
