use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_scroll_to_top;

/// Value format produced by a `datetime-local` input.
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    #[default]
    Female,
    Male,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::PreferNotToSay];

    pub fn value(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Slovakia,
    Czech,
    Poland,
    Germany,
    Austria,
    Other,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Slovakia,
        Country::Czech,
        Country::Poland,
        Country::Germany,
        Country::Austria,
        Country::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Country::Slovakia => "slovakia",
            Country::Czech => "czech",
            Country::Poland => "poland",
            Country::Germany => "germany",
            Country::Austria => "austria",
            Country::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Country::Slovakia => "Slovakia",
            Country::Czech => "Czech Republic",
            Country::Poland => "Poland",
            Country::Germany => "Germany",
            Country::Austria => "Austria",
            Country::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in the {0} field")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please choose a country from the list")]
    UnknownCountry,
    #[error("Please enter a valid mobile number")]
    InvalidMobile,
    #[error("Please pick a date and time for the call")]
    InvalidSchedule,
    #[error("The chosen date and time is already in the past")]
    ScheduleInPast,
}

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsultationForm {
    pub name: String,
    pub email: String,
    pub country: String,
    pub mobile: String,
    pub schedule_date_time: String,
    pub comment: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub country: Country,
    pub mobile: String,
    pub schedule_date_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub gender: Gender,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

fn is_mobile(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && digits >= 6
}

impl ConsultationForm {
    /// Checks the form against `now` (local wall-clock time) and returns the
    /// request that would be sent.
    pub fn validate(&self, now: NaiveDateTime) -> Result<ConsultationRequest, FormError> {
        let name = required(&self.name, "full name")?;

        let email = required(&self.email, "email")?;
        if !is_email(email) {
            return Err(FormError::InvalidEmail);
        }

        let country = required(&self.country, "country")?;
        let country = Country::from_value(country).ok_or(FormError::UnknownCountry)?;

        let mobile = required(&self.mobile, "mobile number")?;
        if !is_mobile(mobile) {
            return Err(FormError::InvalidMobile);
        }

        let schedule = required(&self.schedule_date_time, "schedule date & time")?;
        let schedule = NaiveDateTime::parse_from_str(schedule, SCHEDULE_FORMAT)
            .map_err(|_| FormError::InvalidSchedule)?;
        if schedule < now {
            return Err(FormError::ScheduleInPast);
        }

        let comment = self.comment.trim();

        Ok(ConsultationRequest {
            name: name.to_string(),
            email: email.to_string(),
            country,
            mobile: mobile.to_string(),
            schedule_date_time: schedule,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            gender: self.gender,
        })
    }
}

#[function_component(Consultation)]
pub fn consultation() -> Html {
    use_scroll_to_top();
    let form = use_state(ConsultationForm::default);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let update = |apply: fn(&mut ConsultationForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_country = {
        let set = update(|f, v| f.country = v);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_mobile = {
        let set = update(|f, v| f.mobile = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_schedule = {
        let set = update(|f, v| f.schedule_date_time = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_comment = {
        let set = update(|f, v| f.comment = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set(area.value());
        })
    };

    let gender_radio = |gender: Gender| {
        let form_handle = form.clone();
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form_handle).clone();
            next.gender = gender;
            form_handle.set(next);
        });
        html! {
            <label class="radio">
                <input
                    type="radio"
                    name="gender"
                    value={gender.value()}
                    checked={form.gender == gender}
                    {onchange}
                />
                <span>{gender.label()}</span>
            </label>
        }
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate(Local::now().naive_local()) {
                Ok(request) => {
                    match serde_json::to_string(&request) {
                        Ok(json) => log::info!("Consultation request: {}", json),
                        Err(e) => log::warn!("Could not serialise consultation request: {}", e),
                    }
                    error.set(None);
                    success.set(Some(format!(
                        "Thank you, {}! We will call you on {}.",
                        request.name,
                        request.schedule_date_time.format("%d.%m.%Y at %H:%M")
                    )));
                    form.set(ConsultationForm::default());
                }
                Err(e) => {
                    log::debug!("Consultation form rejected: {:?}", e);
                    success.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="consultation-page">
            <div class="consultation-grid">
                <div class="consultation-main">
                    <h1>{"We will help you choose the perfect treatment stay."}</h1>
                    <p class="lead">
                        {"Leave your contact details along with any questions, and our team will guide you personally in planning your Ayurvedic retreat."}
                    </p>

                    <div class="block">
                        <h2>{"Working Hours"}</h2>
                        <p>{"We're here to welcome you and assist with all your inquiries during the following hours:"}</p>
                        <p>{"Monday - Friday: 08:30 - 17:00 (UTC+5:30)"}</p>
                        <p>{"Saturday - Sunday: 09:00 - 12:00 (UTC+5:30)"}</p>
                    </div>

                    <div class="block">
                        <h2>{"Personal Data"}</h2>
                        <div class="radios">
                            { for Gender::ALL.into_iter().map(gender_radio) }
                        </div>
                    </div>

                    <form {onsubmit} novalidate=true>
                        <label>
                            {"Full Name"}<span class="req">{"*"}</span>
                            <input type="text" placeholder="Enter full name" value={form.name.clone()} oninput={on_name} />
                        </label>
                        <label>
                            {"Email"}<span class="req">{"*"}</span>
                            <input type="email" placeholder="Enter email" value={form.email.clone()} oninput={on_email} />
                        </label>
                        <label>
                            {"Country"}<span class="req">{"*"}</span>
                            <select onchange={on_country}>
                                <option value="" selected={form.country.is_empty()}>{"Select"}</option>
                                { for Country::ALL.into_iter().map(|country| html! {
                                    <option value={country.value()} selected={form.country == country.value()}>
                                        {country.label()}
                                    </option>
                                }) }
                            </select>
                        </label>
                        <label>
                            {"Mobile Number"}<span class="req">{"*"}</span>
                            <input type="tel" placeholder="Enter mobile number" value={form.mobile.clone()} oninput={on_mobile} />
                        </label>
                        <label>
                            {"Schedule Date & Time"}<span class="req">{"*"}</span>
                            <input type="datetime-local" value={form.schedule_date_time.clone()} oninput={on_schedule} />
                        </label>
                        <label>
                            {"Comment"}
                            <textarea rows="5" placeholder="Enter comment..." value={form.comment.clone()} oninput={on_comment} />
                        </label>

                        {
                            if let Some(error) = (*error).as_ref() {
                                html! { <div class="message error">{error.clone()}</div> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(success) = (*success).as_ref() {
                                html! { <div class="message success">{success.clone()}</div> }
                            } else {
                                html! {}
                            }
                        }

                        <button type="submit" class="submit">{"SUBMIT"}</button>
                    </form>
                </div>

                <div class="consultation-side">
                    <img src="/assets/consultation.jpg" alt="Ayurvedic Doctor" />
                    <div class="side-card">
                        <p>
                            <span class="accent strong">{"15 minutes "}</span>
                            <span class="serif">{"consultation with Ayurvedic doctor "}</span>
                            <span class="accent strong">{"for Free"}</span>
                        </p>
                        <p class="small">{"Call for appointment"}</p>
                        <div class="side-contact">
                            <p class="small">{"+123 595 9966 / +123 595 9966"}</p>
                            <a class="whatsapp" href="https://wa.me/1235959966" target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                                {"WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .consultation-page {
                    min-height: 100vh;
                    background: white;
                    color: #181818;
                    font-family: Poppins, sans-serif;
                }
                .consultation-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .consultation-main h1 {
                    font-family: Sentient, serif;
                    font-size: 2.25rem;
                    margin: 0 0 1rem;
                }
                .consultation-main .lead {
                    font-size: 1.125rem;
                    color: #374151;
                    margin-bottom: 2rem;
                }
                .consultation-main .block {
                    margin-bottom: 2rem;
                    color: #374151;
                }
                .consultation-main h2 {
                    font-size: 1.25rem;
                    color: #181818;
                }
                .radios {
                    display: flex;
                    gap: 1.5rem;
                }
                .radio {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }
                .consultation-main form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .consultation-main form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-weight: 500;
                    color: #374151;
                }
                .consultation-main input:not([type="radio"]),
                .consultation-main select,
                .consultation-main textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-family: inherit;
                    font-size: 1rem;
                    background: white;
                }
                .consultation-main textarea {
                    resize: none;
                }
                .req {
                    color: #ef4444;
                }
                .message {
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                }
                .message.error {
                    background: #fef2f2;
                    color: #b91c1c;
                }
                .message.success {
                    background: #f0fdf4;
                    color: #15803d;
                }
                .submit {
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #5E17EB;
                    color: white;
                    font-family: inherit;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .submit:hover {
                    background: #4B12BD;
                }
                .consultation-side {
                    position: relative;
                }
                .consultation-side img {
                    width: 100%;
                    border-radius: 0.5rem;
                    object-fit: contain;
                }
                .side-card {
                    position: absolute;
                    top: 2rem;
                    right: -2rem;
                    max-width: 400px;
                    padding: 1.5rem;
                    background: #F5F1E8;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .side-card .accent {
                    color: #5E17EB;
                }
                .side-card .strong {
                    font-weight: 600;
                    font-size: 1.125rem;
                }
                .side-card .serif {
                    font-family: serif;
                }
                .side-card .small {
                    font-size: 0.875rem;
                }
                .side-contact {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .whatsapp {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: #5E17EB;
                    color: white;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .whatsapp:hover {
                    background: #4B12BD;
                }
                @media (max-width: 1023px) {
                    .consultation-grid {
                        grid-template-columns: 1fr;
                    }
                    .side-card {
                        position: static;
                        max-width: none;
                        margin-top: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn filled() -> ConsultationForm {
        ConsultationForm {
            name: "Jana Novakova".to_string(),
            email: "jana@example.sk".to_string(),
            country: "slovakia".to_string(),
            mobile: "+421 900 123 456".to_string(),
            schedule_date_time: "2026-10-20T09:30".to_string(),
            comment: String::new(),
            gender: Gender::default(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let request = filled().validate(now()).unwrap();
        assert_eq!(request.country, Country::Slovakia);
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.comment, None);
        assert_eq!(
            request.schedule_date_time,
            NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(now()), Err(FormError::Missing("full name")));

        let mut form = filled();
        form.country.clear();
        assert_eq!(form.validate(now()), Err(FormError::Missing("country")));

        let mut form = filled();
        form.schedule_date_time.clear();
        assert_eq!(
            form.validate(now()),
            Err(FormError::Missing("schedule date & time"))
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["jana", "@example.sk", "jana@", "jana@example", "ja na@example.sk", "jana@.sk"] {
            let mut form = filled();
            form.email = email.to_string();
            assert_eq!(form.validate(now()), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn rejects_unknown_country_and_bad_mobile() {
        let mut form = filled();
        form.country = "atlantis".to_string();
        assert_eq!(form.validate(now()), Err(FormError::UnknownCountry));

        let mut form = filled();
        form.mobile = "call me".to_string();
        assert_eq!(form.validate(now()), Err(FormError::InvalidMobile));
    }

    #[test]
    fn rejects_bad_or_past_schedule() {
        let mut form = filled();
        form.schedule_date_time = "20.10.2026 09:30".to_string();
        assert_eq!(form.validate(now()), Err(FormError::InvalidSchedule));

        let mut form = filled();
        form.schedule_date_time = "2026-10-17T11:59".to_string();
        assert_eq!(form.validate(now()), Err(FormError::ScheduleInPast));
    }

    #[test]
    fn request_serialises_with_kebab_case_gender() {
        let mut form = filled();
        form.gender = Gender::PreferNotToSay;
        form.comment = "  Back pain  ".to_string();
        let json = serde_json::to_string(&form.validate(now()).unwrap()).unwrap();
        assert!(json.contains(r#""gender":"prefer-not-to-say""#));
        assert!(json.contains(r#""country":"slovakia""#));
        assert!(json.contains(r#""comment":"Back pain""#));
        assert!(json.contains(r#""scheduleDateTime":"2026-10-20T09:30:00""#));
    }
}
