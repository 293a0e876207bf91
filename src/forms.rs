//! Form state and submission for the site's five forms.
//!
//! Every submission ends in a [`FormOutcome`] and a toast: missing input
//! never reaches the network, success resets the form, and any failure
//! leaves the fields as they were so the user can retry.

use tracing::{debug, warn};

use crate::api::{
    ApiClient, ApiError, ContactRequest, EventRecord, MemberRegistration, MemberType,
    NewsletterRequest, PollVote, RsvpRequest,
};
use crate::site::EventsView;
use crate::site::content::{AREAS_OF_INTEREST, POLL, PollQuestion};
use crate::state::ToastQueue;

#[derive(Debug)]
pub enum FormOutcome {
    Sent,
    /// A required field was empty; nothing was sent.
    Incomplete(&'static str),
    /// The form was already submitted; nothing was sent.
    Duplicate,
    Failed(ApiError),
}

impl FormOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, FormOutcome::Sent)
    }
}

/// Toast copy for one form.
struct Messages<'a> {
    success_title: &'a str,
    success_description: &'a str,
    failure_description: &'a str,
}

fn required(value: &str, field: &'static str) -> Result<String, &'static str> {
    let v = value.trim();
    if v.is_empty() { Err(field) } else { Ok(v.to_string()) }
}

fn incomplete(toasts: &ToastQueue, field: &'static str) -> FormOutcome {
    debug!(field, "form incomplete");
    toasts.error("Missing Fields", "Please fill in all required fields.");
    FormOutcome::Incomplete(field)
}

fn report(toasts: &ToastQueue, copy: &Messages<'_>, result: Result<(), ApiError>) -> FormOutcome {
    match result {
        Ok(()) => {
            toasts.success(copy.success_title, copy.success_description);
            FormOutcome::Sent
        }
        Err(e) => {
            warn!(error = %e, "submission failed");
            toasts.error("Error", copy.failure_description);
            FormOutcome::Failed(e)
        }
    }
}

// ── Newsletter ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn request(&self) -> Result<NewsletterRequest, &'static str> {
        Ok(NewsletterRequest {
            email: required(&self.email, "email")?,
        })
    }

    pub async fn submit(&mut self, client: &ApiClient, toasts: &ToastQueue) -> FormOutcome {
        let req = match self.request() {
            Ok(req) => req,
            Err(field) => return incomplete(toasts, field),
        };

        let copy = Messages {
            success_title: "Subscribed!",
            success_description: "You've been added to our newsletter.",
            failure_description: "Failed to subscribe. Please try again.",
        };
        let outcome = report(toasts, &copy, client.subscribe_newsletter(&req).await);
        if outcome.is_sent() {
            self.email.clear();
        }
        outcome
    }
}

// ── Contact ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    submitted: bool,
}

impl ContactForm {
    pub fn request(&self) -> Result<ContactRequest, &'static str> {
        Ok(ContactRequest {
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
            subject: required(&self.subject, "subject")?,
            message: required(&self.message, "message")?,
        })
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Leave the confirmation and start a blank message.
    pub fn send_another(&mut self) {
        *self = Self::default();
    }

    pub async fn submit(&mut self, client: &ApiClient, toasts: &ToastQueue) -> FormOutcome {
        let req = match self.request() {
            Ok(req) => req,
            Err(field) => return incomplete(toasts, field),
        };

        let copy = Messages {
            success_title: "Message Sent!",
            success_description: "We'll get back to you as soon as possible.",
            failure_description: "Failed to send message. Please try again.",
        };
        let outcome = report(toasts, &copy, client.send_contact(&req).await);
        if outcome.is_sent() {
            *self = Self {
                submitted: true,
                ..Self::default()
            };
        }
        outcome
    }
}

// ── RSVP ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct RsvpForm {
    event: Option<(String, String)>,
    pub name: String,
    pub email: String,
    pub phone: String,
    submitted: bool,
}

impl RsvpForm {
    /// Start a fresh RSVP for `event`, clearing any previous input.
    pub fn open(event: &EventRecord) -> Self {
        Self {
            event: Some((event.id.clone(), event.title.clone())),
            ..Self::default()
        }
    }

    pub fn event_title(&self) -> Option<&str> {
        self.event.as_ref().map(|(_, title)| title.as_str())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn request(&self) -> Result<RsvpRequest, &'static str> {
        let (event_id, _) = self.event.as_ref().ok_or("event")?;
        Ok(RsvpRequest {
            event_id: event_id.clone(),
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
            phone: self.phone.trim().to_string(),
        })
    }

    /// Submit and, on success, invalidate the listing so counts refresh.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
        toasts: &ToastQueue,
        events: &mut EventsView,
    ) -> FormOutcome {
        let req = match self.request() {
            Ok(req) => req,
            Err(field) => return incomplete(toasts, field),
        };

        let confirmation = format!(
            "You're registered for {}",
            self.event_title().unwrap_or("this event")
        );
        let copy = Messages {
            success_title: "RSVP Confirmed!",
            success_description: &confirmation,
            failure_description: "Failed to submit RSVP. Please try again.",
        };
        let outcome = report(toasts, &copy, client.rsvp(&req).await);
        if outcome.is_sent() {
            self.submitted = true;
            events.invalidate();
        }
        outcome
    }
}

// ── Registration ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStep {
    #[default]
    Details,
    Interest,
    Done,
}

impl RegistrationStep {
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::Details => 1,
            RegistrationStep::Interest => 2,
            RegistrationStep::Done => 3,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    step: RegistrationStep,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area_of_interest: String,
    pub member_type: MemberType,
}

impl RegistrationForm {
    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    /// Move from details to interest; needs name and email.
    pub fn next(&mut self) -> Result<RegistrationStep, &'static str> {
        if self.step == RegistrationStep::Details {
            required(&self.name, "name")?;
            required(&self.email, "email")?;
            self.step = RegistrationStep::Interest;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> RegistrationStep {
        if self.step == RegistrationStep::Interest {
            self.step = RegistrationStep::Details;
        }
        self.step
    }

    /// Start over for another member.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn request(&self) -> Result<MemberRegistration, &'static str> {
        let area = self.area_of_interest.trim();
        if !area.is_empty() && !AREAS_OF_INTEREST.iter().any(|(v, _)| *v == area) {
            return Err("areaOfInterest");
        }
        Ok(MemberRegistration {
            name: required(&self.name, "name")?,
            email: required(&self.email, "email")?,
            phone: self.phone.trim().to_string(),
            area_of_interest: area.to_string(),
            member_type: self.member_type,
        })
    }

    pub async fn submit(&mut self, client: &ApiClient, toasts: &ToastQueue) -> FormOutcome {
        if self.step == RegistrationStep::Done {
            return FormOutcome::Duplicate;
        }
        let req = match self.request() {
            Ok(req) => req,
            Err(field) => return incomplete(toasts, field),
        };

        let copy = Messages {
            success_title: "Registration Successful!",
            success_description: "Welcome to United People's Party!",
            failure_description: "Failed to submit registration. Please try again.",
        };
        let outcome = report(toasts, &copy, client.register_member(&req).await);
        if outcome.is_sent() {
            self.step = RegistrationStep::Done;
        }
        outcome
    }
}

// ── Poll ────────────────────────────────────────────────────────────────────

pub struct PollForm {
    poll: &'static PollQuestion,
    selection: Option<&'static str>,
    submitted: bool,
}

impl Default for PollForm {
    fn default() -> Self {
        Self::new(&POLL)
    }
}

impl PollForm {
    pub fn new(poll: &'static PollQuestion) -> Self {
        Self {
            poll,
            selection: None,
            submitted: false,
        }
    }

    pub fn poll(&self) -> &'static PollQuestion {
        self.poll
    }

    /// Select one of the poll's options; anything else is rejected.
    pub fn select(&mut self, option: &str) -> bool {
        match self
            .poll
            .options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(option.trim()))
        {
            Some(o) => {
                self.selection = Some(*o);
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> Option<&'static str> {
        self.selection
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn request(&self) -> Result<PollVote, &'static str> {
        let option = self.selection.ok_or("option")?;
        Ok(PollVote {
            poll_id: self.poll.id.to_string(),
            option: option.to_string(),
        })
    }

    pub async fn submit(&mut self, client: &ApiClient, toasts: &ToastQueue) -> FormOutcome {
        if self.submitted {
            return FormOutcome::Duplicate;
        }
        let req = match self.request() {
            Ok(req) => req,
            Err(field) => return incomplete(toasts, field),
        };

        let copy = Messages {
            success_title: "Vote Recorded!",
            success_description: "Thank you for participating in our poll.",
            failure_description: "Failed to submit vote. Please try again.",
        };
        let outcome = report(toasts, &copy, client.vote(&req).await);
        if outcome.is_sent() {
            self.submitted = true;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastVariant;

    fn client() -> ApiClient {
        // Never contacted: every test here fails validation first
        ApiClient::new("http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn blank_contact_field_never_hits_the_network() {
        let toasts = ToastQueue::default();
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            subject: "general".into(),
            message: "   ".into(),
            ..Default::default()
        };

        let outcome = form.submit(&client(), &toasts).await;
        assert!(matches!(outcome, FormOutcome::Incomplete("message")));
        let toast = toasts.latest().unwrap();
        assert_eq!(toast.title, "Missing Fields");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(form.name, "Ada");
    }

    #[tokio::test]
    async fn rsvp_without_event_is_incomplete() {
        let toasts = ToastQueue::default();
        let mut events = EventsView::new();
        let mut form = RsvpForm {
            name: "Ada".into(),
            email: "ada@example.org".into(),
            ..Default::default()
        };
        let outcome = form.submit(&client(), &toasts, &mut events).await;
        assert!(matches!(outcome, FormOutcome::Incomplete("event")));
    }

    #[tokio::test]
    async fn poll_requires_a_selection() {
        let toasts = ToastQueue::default();
        let mut poll = PollForm::default();
        assert!(matches!(
            poll.submit(&client(), &toasts).await,
            FormOutcome::Incomplete("option")
        ));
    }

    #[test]
    fn poll_only_accepts_listed_options() {
        let mut poll = PollForm::default();
        assert!(!poll.select("Space Program"));
        assert!(poll.select("healthcare access"));
        let vote = poll.request().unwrap();
        assert_eq!(vote.poll_id, "priority-poll");
        assert_eq!(vote.option, "Healthcare Access");
    }

    #[test]
    fn registration_steps_gate_on_details() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.step().number(), 1);
        assert_eq!(form.next(), Err("name"));

        form.name = "Ada".into();
        form.email = "ada@example.org".into();
        assert_eq!(form.next(), Ok(RegistrationStep::Interest));
        assert_eq!(form.back(), RegistrationStep::Details);
        assert_eq!(form.next(), Ok(RegistrationStep::Interest));

        form.area_of_interest = "astrology".into();
        assert_eq!(form.request().unwrap_err(), "areaOfInterest");
        form.area_of_interest = "youth".into();
        let req = form.request().unwrap();
        assert_eq!(req.member_type, MemberType::Member);

        form.restart();
        assert_eq!(form.step(), RegistrationStep::Details);
        assert!(form.name.is_empty());
    }

    #[test]
    fn rsvp_open_resets_input() {
        let event = EventRecord {
            id: "12".into(),
            title: "Town Hall Meeting".into(),
            description: String::new(),
            date: "2024-12-15".into(),
            time: String::new(),
            location: String::new(),
            event_type: "town-hall".into(),
            rsvp_count: 3,
        };
        let form = RsvpForm::open(&event);
        assert_eq!(form.event_title(), Some("Town Hall Meeting"));
        assert!(form.name.is_empty());
        assert_eq!(form.request().unwrap_err(), "name");
    }
}
