//! Submit state shared by every form (login, signup, add user, password).
//!
//! DESIGN
//! ======
//! A form owns one `FormState` signal. `begin` is the in-flight guard: it
//! refuses while a request is outstanding, which is what keeps the submit
//! button disabled and prevents duplicate submissions.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validation::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline message shown under a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "form-notice form-notice--success",
            NoticeKind::Error => "form-notice form-notice--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub busy: bool,
    pub notice: Option<Notice>,
    pub field_errors: FieldErrors,
}

impl FormState {
    /// Mark a request in flight. Returns `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.notice = None;
        self.field_errors = FieldErrors::default();
        true
    }

    /// Client-side validation failed; nothing was sent.
    pub fn reject_fields(&mut self, errors: FieldErrors) {
        self.notice = None;
        self.field_errors = errors;
    }

    pub fn succeed(&mut self, text: impl Into<String>) {
        self.busy = false;
        self.notice = Some(Notice { kind: NoticeKind::Success, text: text.into() });
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.busy = false;
        self.notice = Some(Notice { kind: NoticeKind::Error, text: text.into() });
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.get(field).map(str::to_owned)
    }
}
