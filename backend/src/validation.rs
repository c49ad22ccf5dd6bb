use serde_json::{Map, Value};
use shared::{Field, PredictionRequest};
use strum::IntoEnumIterator;

/// True for bodies that carry no data at all: `null`, `false`, `0`, `""`, `[]`, `{}`.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Re-checks a posted payload field by field, collecting one message per problem.
/// Anything but an object has none of the required keys.
pub fn validate_payload(payload: &Value) -> Result<PredictionRequest, Vec<String>> {
    let empty = Map::new();
    let payload = payload.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(8);

    for field in Field::iter() {
        let key = field.api_key();
        let Some(value) = payload.get(key) else {
            errors.push(format!("Missing required field: {}", key));
            continue;
        };

        let Some(number) = value.as_f64() else {
            errors.push(format!("{} must be a number", key));
            continue;
        };

        let bounds = field.bounds();
        if !bounds.contains(number) {
            errors.push(format!("{} must be between {} and {}", key, bounds.min, bounds.max));
            continue;
        }

        values.push((field, number));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    PredictionRequest::from_values(values)
        .map_err(|missing| missing.iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "Pregnancies": 2,
            "Glucose": 130,
            "BloodPressure": 70,
            "SkinThickness": 20,
            "Insulin": 80,
            "BMI": 28.5,
            "DiabetesPedigreeFunction": 0.5,
            "Age": 33
        })
    }

    #[test]
    fn accepts_integers_and_floats() {
        let request = validate_payload(&valid()).unwrap();
        assert_eq!(request.glucose, 130.0);
        assert_eq!(request.bmi, 28.5);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut value = valid();
        value["Comment"] = json!("hello");
        assert!(validate_payload(&value).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("Age");
        value["Glucose"] = json!("high");
        value["BMI"] = json!(80);

        let errors = validate_payload(&value).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Glucose must be a number".to_string(),
                "BMI must be between 0 and 70".to_string(),
                "Missing required field: Age".to_string(),
            ]
        );
    }

    #[test]
    fn non_object_payload_misses_every_field() {
        let errors = validate_payload(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors[0], "Missing required field: Pregnancies");
        assert_eq!(errors[7], "Missing required field: Age");
    }

    #[test]
    fn falsy_bodies_are_empty() {
        for body in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_empty_payload(&body), "{}", body);
        }
        for body in [json!([1, 2]), json!(7), json!("x"), json!(true), valid()] {
            assert!(!is_empty_payload(&body), "{}", body);
        }
    }
}
