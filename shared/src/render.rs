use crate::client::RequestError;
use crate::form::SubmissionState;
use crate::request::PredictionResult;

const HIGH_RISK_ADVICE: &str = "The model indicates a higher likelihood of diabetes. \
    Please consult with a healthcare professional for proper evaluation.";
const LOW_RISK_ADVICE: &str = "The model indicates a lower likelihood of diabetes. \
    Continue maintaining a healthy lifestyle.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    HighRisk,
    LowRisk,
    Error,
}

impl ResultTone {
    pub fn css_class(self) -> &'static str {
        match self {
            ResultTone::HighRisk => "high-risk",
            ResultTone::LowRisk => "low-risk",
            ResultTone::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResultTone::HighRisk => "fa-solid fa-triangle-exclamation",
            ResultTone::LowRisk => "fa-solid fa-circle-check",
            ResultTone::Error => "fa-solid fa-circle-xmark",
        }
    }
}

/// Everything the result card needs, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub tone: ResultTone,
    pub title: &'static str,
    pub message: String,
}

pub fn render(outcome: &Result<PredictionResult, RequestError>) -> ResultView {
    match outcome {
        Ok(PredictionResult::HighRisk) => ResultView {
            tone: ResultTone::HighRisk,
            title: "High Diabetes Risk",
            message: HIGH_RISK_ADVICE.to_string(),
        },
        Ok(PredictionResult::LowRisk) => ResultView {
            tone: ResultTone::LowRisk,
            title: "Low Diabetes Risk",
            message: LOW_RISK_ADVICE.to_string(),
        },
        Err(error) => ResultView {
            tone: ResultTone::Error,
            title: "Prediction Error",
            message: format!("Unable to process your request: {}", error),
        },
    }
}

/// Result card for the current state; nothing while idle or submitting.
pub fn render_state(state: &SubmissionState) -> Option<ResultView> {
    match state {
        SubmissionState::Idle | SubmissionState::Submitting => None,
        SubmissionState::Succeeded(result) => Some(render(&Ok(*result))),
        SubmissionState::Failed(error) => Some(render(&Err(error.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisories_are_fixed_per_branch() {
        let high = render(&Ok(PredictionResult::HighRisk));
        assert_eq!(high.tone.css_class(), "high-risk");
        assert!(high.message.contains("consult with a healthcare professional"));

        let low = render(&Ok(PredictionResult::LowRisk));
        assert_eq!(low.title, "Low Diabetes Risk");
        assert!(low.message.contains("healthy lifestyle"));
    }

    #[test]
    fn errors_are_shown_verbatim_after_the_prefix() {
        let view = render(&Err(RequestError::HttpStatus(503)));
        assert_eq!(view.tone, ResultTone::Error);
        assert_eq!(view.message, "Unable to process your request: HTTP error! status: 503");
    }

    #[test]
    fn nothing_is_rendered_before_an_outcome() {
        assert_eq!(render_state(&SubmissionState::Idle), None);
        assert_eq!(render_state(&SubmissionState::Submitting), None);
        assert!(render_state(&SubmissionState::Failed(RequestError::Network("x".into()))).is_some());
    }
}
