use common::form::{EmployeeDraft, ValidationErrors};

use crate::components::helpers::compute_md5;

/// Form state: the draft being typed, the messages from the last rejected
/// submit, and the fingerprint of the draft as it was opened.
pub struct EmployeeForm {
    pub draft: EmployeeDraft,
    pub errors: ValidationErrors,
    pub saving: bool,
    /// MD5 of the opening draft's fingerprint, compared on cancel.
    pub original_md5: String,
}

impl EmployeeForm {
    pub fn new(draft: EmployeeDraft) -> Self {
        let original_md5 = compute_md5(&draft.fingerprint());
        Self {
            draft,
            errors: ValidationErrors::default(),
            saving: false,
            original_md5,
        }
    }

    pub fn is_dirty(&self) -> bool {
        compute_md5(&self.draft.fingerprint()) != self.original_md5
    }
}
