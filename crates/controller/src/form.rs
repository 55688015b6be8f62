/// Submit-button feedback for the contact form.
///
/// Known inaccuracy, kept on purpose: the restore is a fixed timer, not a
/// completion signal. The external form backend handles the actual delivery
/// and its response is never observed, so after `form_restore_ms` the button
/// goes back to the idle label whether or not the submission landed. Each
/// submission schedules its own independent restore.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitFeedback {
    busy_label: String,
    idle_label: String,
    submissions: u64,
}

impl SubmitFeedback {
    pub fn new(busy_label: impl Into<String>, idle_label: impl Into<String>) -> Self {
        Self {
            busy_label: busy_label.into(),
            idle_label: idle_label.into(),
            submissions: 0,
        }
    }

    /// Marks a submission and returns the label to show while busy.
    pub fn begin(&mut self) -> &str {
        self.submissions += 1;
        &self.busy_label
    }

    /// Label to restore once the fixed delay expires.
    pub fn restore(&self) -> &str {
        &self.idle_label
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_then_restore_labels() {
        let mut feedback = SubmitFeedback::new("SENDING...", "SEND MESSAGE");
        assert_eq!(feedback.begin(), "SENDING...");
        assert_eq!(feedback.restore(), "SEND MESSAGE");
    }

    #[test]
    fn rapid_submissions_are_counted_independently() {
        let mut feedback = SubmitFeedback::new("SENDING...", "SEND MESSAGE");
        feedback.begin();
        feedback.begin();
        feedback.begin();
        assert_eq!(feedback.submissions(), 3);
        // Every pending timer restores to the same idle label, so the extra
        // restores are harmless no-ops.
        assert_eq!(feedback.restore(), "SEND MESSAGE");
    }
}
