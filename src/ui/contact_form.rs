// SPDX-License-Identifier: MPL-2.0
//! Contact form with client-side validation and a simulated send.
//!
//! All three fields are required; the email must match a permissive
//! shape check (something@something.something). Submission does not reach
//! any network: it flips the form into a sending state, and the parent
//! schedules a timer after which the form clears and a success toast shows.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column};
use iced::{Element, Length};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// How long the simulated submission takes before reporting success.
pub const SEND_DELAY: Duration = Duration::from_millis(2000);

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    BodyChanged(String),
    SubmitPressed,
}

/// What the parent has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Validation failed; show a danger toast with this message key.
    Invalid(&'static str),
    /// Validation passed; start the send timer.
    StartSend,
}

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    /// Optional; never validated.
    phone: String,
    body: String,
    sending: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Effect::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Effect::None
            }
            Message::BodyChanged(value) => {
                self.body = value;
                Effect::None
            }
            Message::SubmitPressed => {
                if self.sending {
                    return Effect::None;
                }
                match self.validate() {
                    Ok(()) => {
                        self.sending = true;
                        Effect::StartSend
                    }
                    Err(key) => Effect::Invalid(key),
                }
            }
        }
    }

    /// Completes the simulated send: clears all fields and re-enables submit.
    pub fn finish_send(&mut self) {
        self.sending = false;
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.body.clear();
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.body.trim().is_empty()
        {
            return Err("notification-form-missing-fields");
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err("notification-form-invalid-email");
        }
        Ok(())
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let name_field = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input(Message::NameChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let email_field = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let phone_field = text_input(&i18n.tr("contact-phone-placeholder"), &self.phone)
            .on_input(Message::PhoneChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let body_field = text_input(&i18n.tr("contact-message-placeholder"), &self.body)
            .on_input(Message::BodyChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let label = if self.sending {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-send")
        };

        let mut submit = button(text(label).size(typography::BODY))
            .padding([spacing::XS, spacing::LG]);
        submit = if self.sending {
            submit.style(styles::button::disabled())
        } else {
            submit
                .on_press(Message::SubmitPressed)
                .style(styles::button::primary)
        };

        Column::new()
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .spacing(spacing::MD)
            .push(name_field)
            .push(email_field)
            .push(phone_field)
            .push(body_field)
            .push(submit)
            .into()
    }
}
