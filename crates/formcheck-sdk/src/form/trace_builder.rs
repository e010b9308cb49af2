//! Pass trace construction

use crate::result::{FieldTrace, PassTrace, TraceStatus};

/// Collects per-field trace entries; a no-op when tracing is disabled
pub(super) struct TraceBuilder {
    fields: Option<Vec<FieldTrace>>,
}

impl TraceBuilder {
    pub(super) fn new(enabled: bool) -> Self {
        Self {
            fields: enabled.then(Vec::new),
        }
    }

    pub(super) fn skipped(&mut self, field_id: &str, condition: &str) {
        self.push(
            field_id,
            TraceStatus::Skipped {
                condition: condition.to_string(),
            },
        );
    }

    pub(super) fn passed(&mut self, field_id: &str, assertions_run: usize) {
        self.push(field_id, TraceStatus::Passed { assertions_run });
    }

    pub(super) fn failed(&mut self, field_id: &str, assertion: &str, assertions_run: usize) {
        self.push(
            field_id,
            TraceStatus::Failed {
                assertion: assertion.to_string(),
                assertions_run,
            },
        );
    }

    fn push(&mut self, field_id: &str, status: TraceStatus) {
        if let Some(fields) = &mut self.fields {
            fields.push(FieldTrace {
                field_id: field_id.to_string(),
                status,
            });
        }
    }

    pub(super) fn finish(self) -> Option<PassTrace> {
        self.fields.map(|fields| PassTrace { fields })
    }
}
