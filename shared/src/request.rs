use crate::fields::Field;
use crate::validation::{ValidatedFields, ValidationError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Body of `POST /predict`. Serializes to exactly the eight backend keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: f64,
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: f64,
    #[serde(rename = "Insulin")]
    pub insulin: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    pub age: f64,
}

impl PredictionRequest {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Pregnancies => self.pregnancies,
            Field::Glucose => self.glucose,
            Field::BloodPressure => self.blood_pressure,
            Field::SkinThickness => self.skin_thickness,
            Field::Insulin => self.insulin,
            Field::Bmi => self.bmi,
            Field::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            Field::Age => self.age,
        }
    }

    fn slot(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::Pregnancies => &mut self.pregnancies,
            Field::Glucose => &mut self.glucose,
            Field::BloodPressure => &mut self.blood_pressure,
            Field::SkinThickness => &mut self.skin_thickness,
            Field::Insulin => &mut self.insulin,
            Field::Bmi => &mut self.bmi,
            Field::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
            Field::Age => &mut self.age,
        }
    }

    /// Builds a request from already range-checked values.
    /// Fails with one `Missing` error per absent field.
    pub fn from_values<I>(values: I) -> Result<Self, Vec<ValidationError>>
    where
        I: IntoIterator<Item = (Field, f64)>,
    {
        let mut request = PredictionRequest {
            pregnancies: 0.0,
            glucose: 0.0,
            blood_pressure: 0.0,
            skin_thickness: 0.0,
            insulin: 0.0,
            bmi: 0.0,
            diabetes_pedigree_function: 0.0,
            age: 0.0,
        };
        let mut seen = Vec::with_capacity(8);

        for (field, value) in values {
            *request.slot(field) = value;
            seen.push(field);
        }

        let missing: Vec<_> = Field::iter()
            .filter(|f| !seen.contains(f))
            .map(ValidationError::missing)
            .collect();

        if missing.is_empty() { Ok(request) } else { Err(missing) }
    }
}

impl TryFrom<ValidatedFields> for PredictionRequest {
    type Error = Vec<ValidationError>;

    fn try_from(validated: ValidatedFields) -> Result<Self, Self::Error> {
        PredictionRequest::from_values(validated.iter())
    }
}

/// Binary risk classification returned by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PredictionResult {
    #[display(fmt = "High Diabetes Risk")]
    HighRisk,
    #[display(fmt = "Low Diabetes Risk")]
    LowRisk,
}

impl PredictionResult {
    /// Only a body of exactly `"1"` is high risk. No trimming, no numeric parsing.
    pub fn from_response_text(body: &str) -> Self {
        if body == "1" {
            PredictionResult::HighRisk
        } else {
            PredictionResult::LowRisk
        }
    }

    /// Wire form of the classification, as the model service emits it.
    pub fn as_response_text(self) -> &'static str {
        match self {
            PredictionResult::HighRisk => "1",
            PredictionResult::LowRisk => "0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldInput, ValidationErrorKind, validate};

    fn sample() -> PredictionRequest {
        PredictionRequest {
            pregnancies: 2.0,
            glucose: 130.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 28.5,
            diabetes_pedigree_function: 0.5,
            age: 33.0,
        }
    }

    #[test]
    fn serializes_with_the_backend_keys_only() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for field in Field::iter() {
            assert_eq!(object[field.api_key()].as_f64(), Some(sample().get(field)));
        }
    }

    #[test]
    fn builds_from_validated_fields() {
        let raws = ["2", "130", "70", "20", "80", "28.5", "0.5", "33"];
        let inputs: Vec<_> = Field::iter().zip(raws).map(|(f, r)| FieldInput::declared(f, r)).collect();

        let validated = validate(&inputs).unwrap();
        assert_eq!(PredictionRequest::try_from(validated), Ok(sample()));
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = PredictionRequest::from_values([(Field::Glucose, 120.0)]).unwrap_err();

        assert_eq!(errors.len(), 7);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::Missing));
        assert!(errors.iter().all(|e| e.field != Field::Glucose));
    }

    #[test]
    fn only_exact_one_is_high_risk() {
        assert_eq!(PredictionResult::from_response_text("1"), PredictionResult::HighRisk);
        for body in ["0", "1.0", " 1", "1\n", "", "true", "yes"] {
            assert_eq!(PredictionResult::from_response_text(body), PredictionResult::LowRisk, "{:?}", body);
        }
    }
}
