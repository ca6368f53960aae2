//! Dashboard HTML rendering

use std::collections::HashMap;

use crate::models::{
    Contract, CustomerProfile, Gender, InternetAddon, InternetService, PaymentMethod, PhoneLines,
    PredictionResult, YesNo,
};

/// What to show under the form
#[derive(Debug, Clone)]
pub enum Outcome {
    Prediction(PredictionResult),
    Error(String),
}

pub struct PageView<'a> {
    pub profile: &'a CustomerProfile,
    pub source: &'a str,
    pub threshold: Result<f64, String>,
    /// Raw fields of a rejected submission, echoed back over `profile`
    pub submitted: Option<&'a HashMap<String, String>>,
    pub outcome: Option<Outcome>,
}

/// Form values shown before the first submission
pub fn default_profile() -> CustomerProfile {
    CustomerProfile {
        gender: Gender::Male,
        senior_citizen: 0,
        partner: YesNo::Yes,
        dependents: YesNo::Yes,
        tenure: 2,
        phone_service: YesNo::Yes,
        multiple_lines: PhoneLines::Yes,
        internet_service: InternetService::Dsl,
        online_security: InternetAddon::Yes,
        online_backup: InternetAddon::Yes,
        device_protection: InternetAddon::Yes,
        tech_support: InternetAddon::Yes,
        streaming_tv: InternetAddon::Yes,
        streaming_movies: InternetAddon::Yes,
        contract: Contract::MonthToMonth,
        paperless_billing: YesNo::Yes,
        payment_method: PaymentMethod::ElectronicCheck,
        monthly_charges: 85.0,
        total_charges: 190.0,
    }
}

pub fn render(view: &PageView) -> String {
    let p = view.profile;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Customer Churn Predictor</title>\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: Arial, sans-serif; max-width: 760px; margin: 40px auto; }\n");
    html.push_str(".columns { display: flex; gap: 32px; }\n");
    html.push_str(".columns > div { flex: 1; }\n");
    html.push_str("label { display: block; margin-top: 10px; font-size: 14px; }\n");
    html.push_str("select, input { width: 100%; padding: 4px; }\n");
    html.push_str("button { margin-top: 20px; padding: 8px 24px; }\n");
    html.push_str(".caption { color: #666; }\n");
    html.push_str(".metric { font-size: 32px; font-weight: bold; }\n");
    html.push_str(".error { color: #b00020; border: 1px solid #b00020; padding: 12px; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>Customer Churn Predictor</h1>\n");
    match &view.threshold {
        Ok(threshold) => html.push_str(&format!(
            "<p class='caption'>Using {} &middot; decision threshold = <b>{:.2}</b></p>\n",
            escape(view.source),
            threshold
        )),
        Err(e) => html.push_str(&format!(
            "<p class='caption'>Using {} &middot; decision threshold unavailable: {}</p>\n",
            escape(view.source),
            escape(e)
        )),
    }

    html.push_str("<form method='post' action='/'>\n");
    html.push_str("<h2>Customer profile</h2>\n");
    html.push_str("<div class='columns'>\n<div>\n");

    select(&mut html, view.submitted, "gender", "Gender", &Gender::labels(), p.gender.as_str());
    let senior = p.senior_citizen.to_string();
    select(&mut html, view.submitted, "SeniorCitizen", "SeniorCitizen", &["0", "1"], &senior);
    select(&mut html, view.submitted, "Partner", "Partner", &YesNo::labels(), p.partner.as_str());
    select(&mut html, view.submitted, "Dependents", "Dependents", &YesNo::labels(), p.dependents.as_str());
    select(&mut html, view.submitted, "PhoneService", "PhoneService", &YesNo::labels(), p.phone_service.as_str());
    select(&mut html, view.submitted, "MultipleLines", "MultipleLines", &PhoneLines::labels(), p.multiple_lines.as_str());
    select(&mut html, view.submitted, "InternetService", "InternetService", &InternetService::labels(), p.internet_service.as_str());
    select(&mut html, view.submitted, "OnlineSecurity", "OnlineSecurity", &InternetAddon::labels(), p.online_security.as_str());
    select(&mut html, view.submitted, "OnlineBackup", "OnlineBackup", &InternetAddon::labels(), p.online_backup.as_str());

    html.push_str("</div>\n<div>\n");

    select(&mut html, view.submitted, "DeviceProtection", "DeviceProtection", &InternetAddon::labels(), p.device_protection.as_str());
    select(&mut html, view.submitted, "TechSupport", "TechSupport", &InternetAddon::labels(), p.tech_support.as_str());
    select(&mut html, view.submitted, "StreamingTV", "StreamingTV", &InternetAddon::labels(), p.streaming_tv.as_str());
    select(&mut html, view.submitted, "StreamingMovies", "StreamingMovies", &InternetAddon::labels(), p.streaming_movies.as_str());
    select(&mut html, view.submitted, "Contract", "Contract", &Contract::labels(), p.contract.as_str());
    select(&mut html, view.submitted, "PaperlessBilling", "PaperlessBilling", &YesNo::labels(), p.paperless_billing.as_str());
    select(&mut html, view.submitted, "PaymentMethod", "PaymentMethod", &PaymentMethod::labels(), p.payment_method.as_str());
    number(&mut html, view.submitted, "tenure", "tenure (months)", &p.tenure.to_string(), "1");
    number(&mut html, view.submitted, "MonthlyCharges", "MonthlyCharges", &p.monthly_charges.to_string(), "0.01");
    number(&mut html, view.submitted, "TotalCharges", "TotalCharges", &p.total_charges.to_string(), "0.01");

    html.push_str("</div>\n</div>\n");
    html.push_str("<button type='submit'>Predict</button>\n");
    html.push_str("</form>\n");

    match &view.outcome {
        Some(Outcome::Prediction(result)) => {
            html.push_str("<h3>Result</h3>\n");
            html.push_str("<p>Churn probability</p>\n");
            html.push_str(&format!(
                "<p class='metric'>{:.2}%</p>\n",
                result.prob_churn * 100.0
            ));
            let verdict = if result.is_churn() {
                "&#9888;&#65039; Likely to churn"
            } else {
                "&#9989; Unlikely to churn"
            };
            html.push_str(&format!("<p><b>Prediction:</b> {}</p>\n", verdict));
        }
        Some(Outcome::Error(message)) => {
            html.push_str(&format!("<p class='error'>{}</p>\n", escape(message)));
        }
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

type Submitted<'a> = Option<&'a HashMap<String, String>>;

fn submitted_or<'a>(submitted: Submitted<'a>, name: &str, value: &'a str) -> &'a str {
    submitted
        .and_then(|fields| fields.get(name))
        .map(String::as_str)
        .unwrap_or(value)
}

fn select(
    html: &mut String,
    submitted: Submitted,
    name: &str,
    label: &str,
    options: &[&str],
    selected: &str,
) {
    let selected = submitted_or(submitted, name, selected);
    html.push_str(&format!("<label for='{0}'>{1}</label>\n<select id='{0}' name='{0}'>\n", name, label));
    if !options.iter().any(|option| *option == selected) {
        html.push_str(&format!("<option value='{0}' selected>{0}</option>\n", escape(selected)));
    }
    for option in options {
        let marker = if *option == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value='{0}'{1}>{0}</option>\n",
            escape(option),
            marker
        ));
    }
    html.push_str("</select>\n");
}

fn number(html: &mut String, submitted: Submitted, name: &str, label: &str, value: &str, step: &str) {
    let value = submitted_or(submitted, name, value);
    html.push_str(&format!(
        "<label for='{0}'>{1}</label>\n<input type='number' id='{0}' name='{0}' min='0' step='{2}' value='{3}'>\n",
        name,
        label,
        step,
        escape(value)
    ));
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
