use crate::protocol::vda_2_0_0::vda5050_2_0_0_error::ErrorMessage;

/// Reported errors in receipt order. Grows for the life of the session;
/// WARNING and FATAL entries are kept alike.
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Vec<ErrorMessage>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: ErrorMessage) {
        self.entries.push(error);
    }

    pub fn latest(&self) -> Option<&ErrorMessage> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[ErrorMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
