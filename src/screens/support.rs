//! Support tab: donation mock, fund distribution, volunteer form and today's quote.

use crate::api::ApiError;
use crate::content::{Quote, SubmitAck};
use crate::forms::{Donation, FormError, VolunteerApplication, VolunteerForm, parse_donation};
use crate::loader::{Resource, Submission};

/// Share of donations going to one purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Translation key of the purpose.
    pub key: &'static str,
    /// Percentage of funds.
    pub percent: u16,
    /// Bar color as `#RRGGBB`.
    pub color: &'static str,
}

/// Where donations go; shares sum to 100.
pub const DISTRIBUTION: [Allocation; 3] = [
    Allocation {
        key: "support.distribution.community",
        percent: 60,
        color: "#FF9933",
    },
    Allocation {
        key: "support.distribution.admin",
        percent: 25,
        color: "#138808",
    },
    Allocation {
        key: "support.distribution.research",
        percent: 15,
        color: "#4A90E2",
    },
];

/// A volunteer application ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolunteerJob {
    /// Request body.
    pub application: VolunteerApplication,
    /// Idempotency token for the request.
    pub token: String,
}

/// Support tab state.
#[derive(Debug, Default)]
pub struct SupportScreen {
    /// Today's thought.
    pub quote: Resource<Quote>,
    /// Text typed into the donation box.
    pub donation_input: String,
    /// Volunteer form contents.
    pub volunteer: VolunteerForm,
    /// Guard against double submission of the form.
    submit: Submission,
}

impl SupportScreen {
    /// What: Validate the donation box.
    ///
    /// Output:
    /// - The accepted donation; the input is cleared. Nothing is sent anywhere.
    ///
    /// # Errors
    /// - The validation failure; the input is left as typed.
    pub fn donate(&mut self) -> Result<Donation, FormError> {
        let donation = parse_donation(&self.donation_input)?;
        tracing::info!(amount = donation.amount, "mock donation accepted");
        self.donation_input.clear();
        Ok(donation)
    }

    /// What: Validate the volunteer form and claim the submit guard.
    ///
    /// Output:
    /// - `Ok(Some(job))` to post; `Ok(None)` while a previous submit is outstanding.
    ///
    /// # Errors
    /// - Missing required fields; no request must be made.
    pub fn begin_volunteer(&mut self) -> Result<Option<VolunteerJob>, FormError> {
        let application = self.volunteer.validate()?;
        Ok(self.submit.begin().map(|token| VolunteerJob { application, token }))
    }

    /// Whether a volunteer submit is outstanding.
    #[must_use]
    pub const fn volunteer_in_flight(&self) -> bool {
        self.submit.is_busy()
    }

    /// What: Apply the volunteer response.
    ///
    /// Output:
    /// - `true` on declared success, in which case the form is cleared.
    pub fn finish_volunteer(&mut self, result: Result<SubmitAck, ApiError>) -> bool {
        self.submit.finish();
        match result {
            Ok(ack) if ack.success => {
                tracing::info!(id = ?ack.id, "volunteer application accepted");
                self.volunteer.clear();
                true
            }
            Ok(ack) => {
                tracing::warn!(message = ?ack.message, "volunteer application rejected");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "volunteer submit failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormField;

    fn filled() -> SupportScreen {
        let mut s = SupportScreen::default();
        s.volunteer.name = "Asha".into();
        s.volunteer.email = "asha@example.in".into();
        s.volunteer.phone = "98765".into();
        s
    }

    #[test]
    fn distribution_sums_to_hundred() {
        assert_eq!(DISTRIBUTION.iter().map(|a| a.percent).sum::<u16>(), 100);
    }

    #[test]
    fn donation_clears_only_on_success() {
        let mut s = SupportScreen::default();
        s.donation_input = "0".into();
        assert!(s.donate().is_err());
        assert_eq!(s.donation_input, "0");
        s.donation_input = "500".into();
        assert_eq!(s.donate().map(|d| d.display), Ok("500".to_string()));
        assert!(s.donation_input.is_empty());
    }

    #[test]
    fn incomplete_form_never_claims_the_guard() {
        let mut s = SupportScreen::default();
        s.volunteer.name = "Asha".into();
        assert!(matches!(
            s.begin_volunteer(),
            Err(FormError::MissingFields(f)) if f == vec![FormField::Email, FormField::Phone]
        ));
        assert!(!s.volunteer_in_flight());
    }

    #[test]
    fn one_request_per_submit_and_success_clears() {
        let mut s = filled();
        let job = s.begin_volunteer().expect("valid").expect("job");
        assert_eq!(job.application.name, "Asha");
        assert!(matches!(s.begin_volunteer(), Ok(None)));
        assert!(s.finish_volunteer(Ok(SubmitAck {
            success: true,
            ..SubmitAck::default()
        })));
        assert!(s.volunteer.name.is_empty());
    }

    #[test]
    fn declared_failure_keeps_form() {
        let mut s = filled();
        s.begin_volunteer().expect("valid").expect("job");
        assert!(!s.finish_volunteer(Ok(SubmitAck::default())));
        assert_eq!(s.volunteer.name, "Asha");
        assert!(!s.volunteer_in_flight());
    }
}
