/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element was activated (mouse click, Enter on a focused button)
    Click { target: String },
    /// Text input value changed
    Change { target: String, text: String },
    /// Text input submitted (Enter pressed)
    Submit { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
            text: text.into(),
        }
    }

    /// The id of the element the event is aimed at.
    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Change { target, .. } | Self::Submit { target } => {
                target
            }
        }
    }
}
