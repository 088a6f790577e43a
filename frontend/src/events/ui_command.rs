/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    ToggleMic,
    ToggleCamera,
}
