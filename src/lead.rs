use thiserror::Error;

use crate::phone::phone_digits;

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_DIGITS: usize = 11;

pub const ACCEPTED_MESSAGE: &str =
    "Рақмет! Өтінім қабылданды. / Спасибо! Заявка принята, мы скоро перезвоним.";

/// Why a trial-lesson request was not accepted. The message is shown to the
/// visitor as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("Атыңызды жазыңыз. / Пожалуйста, укажите имя.")]
    NameTooShort,
    #[error("Телефон нөмірін толық жазыңыз. / Пожалуйста, укажите номер телефона полностью.")]
    PhoneIncomplete,
}

/// What the status region under a form currently says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Rejected(LeadError),
    Accepted,
}

impl FormStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Rejected(err) => Some(err.to_string()),
            FormStatus::Accepted => Some(ACCEPTED_MESSAGE.to_string()),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Idle => "form-status",
            FormStatus::Rejected(_) => "form-status is-error",
            FormStatus::Accepted => "form-status is-success",
        }
    }
}

pub fn validate_lead(name: &str, phone: &str) -> Result<(), LeadError> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(LeadError::NameTooShort);
    }
    if phone_digits(phone) < MIN_PHONE_DIGITS {
        return Err(LeadError::PhoneIncomplete);
    }
    Ok(())
}

/// Field values and status after the visitor presses submit. Nothing is
/// sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub status: FormStatus,
    pub name: String,
    pub phone: String,
}

impl Submission {
    /// Whether the status should be cleared after a delay.
    pub fn clears_later(&self) -> bool {
        self.status == FormStatus::Accepted
    }
}

/// A rejected submit keeps what was typed; an accepted one empties the form.
pub fn submit(name: &str, phone: &str) -> Submission {
    match validate_lead(name, phone) {
        Err(err) => Submission {
            status: FormStatus::Rejected(err),
            name: name.to_string(),
            phone: phone.to_string(),
        },
        Ok(()) => Submission {
            status: FormStatus::Accepted,
            name: String::new(),
            phone: String::new(),
        },
    }
}

/// Holds at most one deferred status clear. Arming a new one, or disarming,
/// drops the previous handle; for `gloo_timers::callback::Timeout` that
/// cancels it.
pub struct PendingClear<T>(Option<T>);

impl<T> Default for PendingClear<T> {
    fn default() -> Self {
        PendingClear(None)
    }
}

impl<T> PendingClear<T> {
    pub fn arm(&mut self, handle: T) {
        self.0 = Some(handle);
    }

    pub fn disarm(&mut self) {
        self.0 = None;
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn one_letter_name_is_rejected() {
        let err = validate_lead("A", "+7 701 234 56 78").unwrap_err();
        assert_eq!(err, LeadError::NameTooShort);
        assert!(err.to_string().contains("укажите имя"));
    }

    #[test]
    fn whitespace_does_not_count_towards_name() {
        assert_eq!(validate_lead("  A  ", "87012345678"), Err(LeadError::NameTooShort));
    }

    #[test]
    fn cyrillic_name_counts_characters_not_bytes() {
        assert!(validate_lead("Ая", "+7 701 234 56 78").is_ok());
        assert_eq!(validate_lead("Ә", "+7 701 234 56 78"), Err(LeadError::NameTooShort));
    }

    #[test]
    fn short_phone_is_rejected() {
        let err = validate_lead("Ivan", "+7 701 234").unwrap_err();
        assert_eq!(err, LeadError::PhoneIncomplete);
    }

    #[test]
    fn status_messages() {
        assert_eq!(FormStatus::Idle.message(), None);
        assert_eq!(FormStatus::Accepted.message().as_deref(), Some(ACCEPTED_MESSAGE));
        let rejected = FormStatus::Rejected(LeadError::PhoneIncomplete);
        assert!(rejected.message().unwrap().contains("телефона"));
        assert_eq!(rejected.class(), "form-status is-error");
    }

    #[test]
    fn complete_lead_is_accepted() {
        assert_eq!(validate_lead(" Ivan ", "+7 701 234 56 78"), Ok(()));
    }

    #[test]
    fn accepted_submit_resets_every_field() {
        let next = submit("Ivan", "+7 701 234 56 78");
        assert_eq!(next.status, FormStatus::Accepted);
        assert_eq!(next.name, "");
        assert_eq!(next.phone, "");
        assert!(next.clears_later());
    }

    #[test]
    fn rejected_submit_keeps_entered_values() {
        let next = submit("A", "+7 (701) 234-56-78");
        assert_eq!(next.status, FormStatus::Rejected(LeadError::NameTooShort));
        assert!(next.status.message().unwrap().contains("укажите имя"));
        assert_eq!(next.name, "A");
        assert_eq!(next.phone, "+7 (701) 234-56-78");
        assert!(!next.clears_later());
    }

    struct CountsDrops(Rc<Cell<u32>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn newer_submit_cancels_pending_clear() {
        let dropped = Rc::new(Cell::new(0));
        let mut pending = PendingClear::default();

        pending.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        pending.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 1);
        assert!(pending.is_armed());

        pending.disarm();
        assert_eq!(dropped.get(), 2);
        assert!(!pending.is_armed());
    }
}
