/// One failed recipient of a bulk send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFailure {
    pub phone: String,
    pub reason: String,
}

/// Tally of a sequential bulk send.
/// A single failure never aborts the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSendSummary {
    pub success_count: usize,
    pub failure_count: usize,
    pub failures: Vec<SendFailure>,
}

impl BulkSendSummary {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, phone: &str, reason: impl Into<String>) {
        self.failure_count += 1;
        self.failures.push(SendFailure {
            phone: phone.to_string(),
            reason: reason.into(),
        });
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }

    /// First `limit` failures, for display
    pub fn preview(&self, limit: usize) -> &[SendFailure] {
        &self.failures[..self.failures.len().min(limit)]
    }

    /// Toast line, e.g. "Sent 8 of 10 messages (2 failed)"
    pub fn headline(&self) -> String {
        if self.all_succeeded() {
            format!("Sent {} message(s)", self.success_count)
        } else {
            format!(
                "Sent {} of {} messages ({} failed)",
                self.success_count,
                self.total(),
                self.failure_count
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_is_counted_not_aborted() {
        let mut summary = BulkSendSummary::default();
        for i in 0..10 {
            if i == 3 || i == 7 {
                summary.record_failure(&format!("98765432{:02}", i), "Invalid number");
            } else {
                summary.record_success();
            }
        }
        assert_eq!(summary.success_count, 8);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.headline(), "Sent 8 of 10 messages (2 failed)");
        assert_eq!(summary.preview(1).len(), 1);
        assert_eq!(summary.preview(5).len(), 2);
    }

    #[test]
    fn test_all_succeeded_headline() {
        let mut summary = BulkSendSummary::default();
        summary.record_success();
        assert!(summary.all_succeeded());
        assert_eq!(summary.headline(), "Sent 1 message(s)");
    }
}
