//! Single-row feature record
//!
//! Column names and raw values exactly as the pipeline was fitted on them.
//! No encoding or scaling happens here; that belongs to the pipeline.

use std::borrow::Cow;

use crate::models::CustomerProfile;

/// Column order of the training frame
pub const COLUMNS: [&str; 19] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl FeatureValue {
    /// Numeric view. Text has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }

    /// Category label, as a one-hot encoder would compare it.
    pub fn as_category(&self) -> Cow<'static, str> {
        match self {
            FeatureValue::Text(s) => Cow::Borrowed(*s),
            FeatureValue::Int(v) => Cow::Owned(v.to_string()),
            FeatureValue::Float(v) => Cow::Owned(v.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    values: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRecord {
    pub fn from_profile(p: &CustomerProfile) -> Self {
        use FeatureValue::{Float, Int, Text};

        let values = vec![
            ("gender", Text(p.gender.as_str())),
            ("SeniorCitizen", Int(i64::from(p.senior_citizen))),
            ("Partner", Text(p.partner.as_str())),
            ("Dependents", Text(p.dependents.as_str())),
            ("tenure", Int(p.tenure)),
            ("PhoneService", Text(p.phone_service.as_str())),
            ("MultipleLines", Text(p.multiple_lines.as_str())),
            ("InternetService", Text(p.internet_service.as_str())),
            ("OnlineSecurity", Text(p.online_security.as_str())),
            ("OnlineBackup", Text(p.online_backup.as_str())),
            ("DeviceProtection", Text(p.device_protection.as_str())),
            ("TechSupport", Text(p.tech_support.as_str())),
            ("StreamingTV", Text(p.streaming_tv.as_str())),
            ("StreamingMovies", Text(p.streaming_movies.as_str())),
            ("Contract", Text(p.contract.as_str())),
            ("PaperlessBilling", Text(p.paperless_billing.as_str())),
            ("PaymentMethod", Text(p.payment_method.as_str())),
            ("MonthlyCharges", Float(p.monthly_charges)),
            ("TotalCharges", Float(p.total_charges)),
        ];

        Self { values }
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl From<&CustomerProfile> for FeatureRecord {
    fn from(profile: &CustomerProfile) -> Self {
        Self::from_profile(profile)
    }
}

pub fn is_known_column(column: &str) -> bool {
    COLUMNS.contains(&column)
}
