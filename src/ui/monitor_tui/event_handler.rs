use crossterm::event::KeyCode;

/// Events that can occur in the monitor TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Switch network values between bits and bytes
    ToggleBytes,
    /// Switch network columns between Rx/Tx and Rx+Tx
    ToggleSum,
    /// Switch between rates and cumulative counters
    ToggleCumulative,
    /// No action
    None,
}

impl MonitorEvent {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => MonitorEvent::ToggleHelp,
            KeyCode::Char('b') => MonitorEvent::ToggleBytes,
            KeyCode::Char('t') => MonitorEvent::ToggleSum,
            KeyCode::Char('u') => MonitorEvent::ToggleCumulative,
            _ => MonitorEvent::None,
        }
    }
}
