//! Customer profile model
//!
//! The 19 raw attributes the trained pipeline expects, with the exact
//! column names it was fitted on.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Declares a closed set of string values as a serde enum.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Accepted values, in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical!(Gender {
    Male => "Male",
    Female => "Female",
});

categorical!(
    /// Plain yes/no flag (Partner, Dependents, PhoneService, PaperlessBilling)
    YesNo {
        Yes => "Yes",
        No => "No",
    }
);

categorical!(PhoneLines {
    Yes => "Yes",
    No => "No",
    NoPhoneService => "No phone service",
});

categorical!(InternetService {
    Dsl => "DSL",
    FiberOptic => "Fiber optic",
    No => "No",
});

categorical!(
    /// Internet add-on subscription (security, backup, streaming, ...)
    InternetAddon {
        Yes => "Yes",
        No => "No",
        NoInternetService => "No internet service",
    }
);

categorical!(Contract {
    MonthToMonth => "Month-to-month",
    OneYear => "One year",
    TwoYear => "Two year",
});

categorical!(PaymentMethod {
    ElectronicCheck => "Electronic check",
    MailedCheck => "Mailed check",
    BankTransfer => "Bank transfer (automatic)",
    CreditCard => "Credit card (automatic)",
});

/// One customer, as posted to `/predict` or read by the batch CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CustomerProfile {
    pub gender: Gender,

    #[serde(rename = "SeniorCitizen")]
    #[validate(range(max = 1, message = "SeniorCitizen must be 0 or 1"))]
    pub senior_citizen: u8,

    #[serde(rename = "Partner")]
    pub partner: YesNo,

    #[serde(rename = "Dependents")]
    pub dependents: YesNo,

    #[validate(range(min = 0, message = "tenure must be >= 0"))]
    pub tenure: i64,

    #[serde(rename = "PhoneService")]
    pub phone_service: YesNo,

    #[serde(rename = "MultipleLines")]
    pub multiple_lines: PhoneLines,

    #[serde(rename = "InternetService")]
    pub internet_service: InternetService,

    #[serde(rename = "OnlineSecurity")]
    pub online_security: InternetAddon,

    #[serde(rename = "OnlineBackup")]
    pub online_backup: InternetAddon,

    #[serde(rename = "DeviceProtection")]
    pub device_protection: InternetAddon,

    #[serde(rename = "TechSupport")]
    pub tech_support: InternetAddon,

    #[serde(rename = "StreamingTV")]
    pub streaming_tv: InternetAddon,

    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: InternetAddon,

    #[serde(rename = "Contract")]
    pub contract: Contract,

    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: YesNo,

    #[serde(rename = "PaymentMethod")]
    pub payment_method: PaymentMethod,

    #[serde(rename = "MonthlyCharges")]
    #[validate(range(min = 0.0, message = "MonthlyCharges must be >= 0"))]
    pub monthly_charges: f64,

    #[serde(rename = "TotalCharges")]
    #[validate(range(min = 0.0, message = "TotalCharges must be >= 0"))]
    pub total_charges: f64,
}

impl CustomerProfile {
    /// Parse a JSON body. Only objects with named fields are accepted;
    /// serde would otherwise take a positional array as well.
    pub fn from_json(value: serde_json::Value) -> Result<Self, String> {
        if value.is_object() {
            return serde_json::from_value(value).map_err(|e| e.to_string());
        }

        let kind = match value {
            serde_json::Value::Object(_) => "an object",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Null => "null",
        };

        Err(format!("Customer profile must be a JSON object, found {}", kind))
    }

    /// Run the field rules. Returns a single human-readable message on failure.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| describe(&e))?;

        // range(min) lets NaN through
        for (column, value) in [
            ("MonthlyCharges", self.monthly_charges),
            ("TotalCharges", self.total_charges),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", column));
            }
        }

        Ok(())
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect();

    messages.sort();
    messages.join("; ")
}
