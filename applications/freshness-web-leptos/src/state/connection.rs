/// Connection indicator shown in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No reading has been received yet
    #[default]
    Connecting,
    Connected,
    /// Backend reachable but the device is powered off
    Standby,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "○ Connecting...",
            Self::Connected => "● Connected",
            Self::Standby => "● Standby",
            Self::Disconnected => "○ Disconnected",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Connecting => "connection-status text-muted",
            Self::Connected => "connection-status connected fw-bold",
            Self::Standby => "connection-status standby fw-bold",
            Self::Disconnected => "connection-status disconnected text-muted",
        }
    }
}
