use crate::types::Label;

/// One row of a labeled message dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMessage {
    pub label: Label,
    pub message: String,
}

impl LabeledMessage {
    pub fn new(label: &str, message: &str) -> Self {
        Self {
            label: label.to_string(),
            message: message.to_string(),
        }
    }
}
