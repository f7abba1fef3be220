use menu_toggle::ToggleError;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("{0}")]
    Plain(String),
    #[error("{0}")]
    Toggle(#[from] ToggleError),
}
