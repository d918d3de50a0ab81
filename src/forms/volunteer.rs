use serde::Serialize;

use super::error::FormError;

/// Input fields of the volunteer form, in focus order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Full name (required).
    #[default]
    Name,
    /// Email (required).
    Email,
    /// Phone number (required).
    Phone,
    /// State of residence.
    State,
    /// Free-text motivation.
    Message,
}

impl FormField {
    /// Every field in focus order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::State,
        Self::Message,
    ];

    /// Stable English label, used in logs and error text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::State => "state",
            Self::Message => "message",
        }
    }

    /// Translation key for the on-screen placeholder.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Name => "support.volunteer.name",
            Self::Email => "support.volunteer.email",
            Self::Phone => "support.volunteer.phone",
            Self::State => "support.volunteer.state",
            Self::Message => "support.volunteer.message",
        }
    }

    /// Whether the field must be non-empty.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone)
    }

    /// Next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::State,
            Self::State => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Previous field, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::State => Self::Phone,
            Self::Message => Self::State,
        }
    }
}

/// Body of `POST /api/volunteer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolunteerApplication {
    /// Applicant name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// State of residence; may be empty.
    pub state: String,
    /// Motivation; may be empty.
    pub message: String,
}

/// Editable volunteer form with a focused field.
#[derive(Debug, Clone, Default)]
pub struct VolunteerForm {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Phone input.
    pub phone: String,
    /// State input.
    pub state: String,
    /// Message input.
    pub message: String,
    /// Field receiving keystrokes.
    pub focus: FormField,
}

impl VolunteerForm {
    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::State => &self.state,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::State => &mut self.state,
            FormField::Message => &mut self.message,
        }
    }

    /// Append `ch` to the focused field.
    pub fn push_char(&mut self, ch: char) {
        let focus = self.focus;
        self.value_mut(focus).push(ch);
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    /// Move focus forward.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Empty every field and refocus the first one.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// What: Check required fields and build the request body.
    ///
    /// Output:
    /// - The application with values exactly as typed.
    ///
    /// # Errors
    /// - `FormError::MissingFields` listing each empty required field.
    pub fn validate(&self) -> Result<VolunteerApplication, FormError> {
        let missing: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(VolunteerApplication {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            state: self.state.clone(),
            message: self.message.clone(),
        })
    }
}
