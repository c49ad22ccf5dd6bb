use strum_macros::{AsRefStr, EnumCount, EnumIter};

/// Inclusive range a field value has to fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan() && value >= self.min && value <= self.max
    }
}

/// The eight health metrics the prediction endpoint expects, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, AsRefStr)]
pub enum Field {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    #[strum(serialize = "BMI")]
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Field {
    /// Key used in the JSON body sent to the prediction endpoint.
    pub fn api_key(self) -> &'static str {
        match self {
            Field::Pregnancies => "Pregnancies",
            Field::Glucose => "Glucose",
            Field::BloodPressure => "BloodPressure",
            Field::SkinThickness => "SkinThickness",
            Field::Insulin => "Insulin",
            Field::Bmi => "BMI",
            Field::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Field::Age => "Age",
        }
    }

    /// `name` attribute of the matching form input.
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Pregnancies => "pregnancies",
            Field::Glucose => "glucose",
            Field::BloodPressure => "bloodPressure",
            Field::SkinThickness => "skinThickness",
            Field::Insulin => "insulin",
            Field::Bmi => "bmi",
            Field::DiabetesPedigreeFunction => "diabetesPedigree",
            Field::Age => "age",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        match name {
            "pregnancies" => Some(Field::Pregnancies),
            "glucose" => Some(Field::Glucose),
            "bloodPressure" => Some(Field::BloodPressure),
            "skinThickness" => Some(Field::SkinThickness),
            "insulin" => Some(Field::Insulin),
            "bmi" => Some(Field::Bmi),
            "diabetesPedigree" => Some(Field::DiabetesPedigreeFunction),
            "age" => Some(Field::Age),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Pregnancies => "Pregnancies",
            Field::Glucose => "Glucose Level",
            Field::BloodPressure => "Blood Pressure",
            Field::SkinThickness => "Skin Thickness",
            Field::Insulin => "Insulin Level",
            Field::Bmi => "BMI",
            Field::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
            Field::Age => "Age",
        }
    }

    pub fn bounds(self) -> FieldBounds {
        match self {
            Field::Pregnancies => FieldBounds::new(0.0, 20.0),
            Field::Glucose => FieldBounds::new(0.0, 300.0),
            Field::BloodPressure => FieldBounds::new(0.0, 200.0),
            Field::SkinThickness => FieldBounds::new(0.0, 100.0),
            Field::Insulin => FieldBounds::new(0.0, 900.0),
            Field::Bmi => FieldBounds::new(0.0, 70.0),
            Field::DiabetesPedigreeFunction => FieldBounds::new(0.0, 3.0),
            Field::Age => FieldBounds::new(1.0, 120.0),
        }
    }

    /// Step attribute for the numeric input.
    pub fn step(self) -> &'static str {
        match self {
            Field::Bmi => "0.1",
            Field::DiabetesPedigreeFunction => "0.001",
            _ => "1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn form_names_map_back_to_the_same_field() {
        for field in Field::iter() {
            assert_eq!(Field::from_form_name(field.form_name()), Some(field));
        }
        assert_eq!(Field::from_form_name("Glucose"), None);
    }

    #[test]
    fn api_keys_are_unique_and_match_display_names() {
        let keys: std::collections::HashSet<_> = Field::iter().map(Field::api_key).collect();
        assert_eq!(keys.len(), Field::COUNT);
        for field in Field::iter() {
            assert_eq!(field.as_ref(), field.api_key());
        }
    }

    #[test]
    fn bounds_are_inclusive_and_reject_nan() {
        let glucose = Field::Glucose.bounds();
        assert!(glucose.contains(0.0));
        assert!(glucose.contains(300.0));
        assert!(!glucose.contains(300.5));
        assert!(!glucose.contains(f64::NAN));
    }
}
