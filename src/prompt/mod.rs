//! Prompt construction.
//!
//! - **Template**: `{variable}` substitution engine
//! - **PromptTemplate**: the fixed copywriter prompt and its three slots
//!   (`content`, `features`, `budget`)
//! - **PromptRequest / RenderedPrompt**: the request-scoped input and output
//!
//! Slot values are inserted verbatim. Content is not sanitized, so the
//! customer-facing text can steer the model; callers must treat the output as
//! untrusted copy.

mod template;

pub use template::{TemplateError, render_template};

use crate::catalog::{BudgetBracket, Feature};
use std::collections::HashMap;
use std::fmt;

/// The luxury car copywriter prompt.
pub const LUXURY_CAR_TEMPLATE: &str = "
You are a luxury car sales copywriter with 20 years of experience. You are analyzing a customer's preferences to write a personalized car description that only this customer will receive;
CAR MODEL input text: {content};
CUSTOMER preferred features: {features};
CUSTOMER budget: {budget};
TASK: Write a car description that is tailored to this customer's preferred features and budget. Use language that appeals to the luxury car buyer;
FORMAT: Present the result in the following order: (CAR DESCRIPTION), (BENEFITS), (IDEAL USE CASE);
CAR DESCRIPTION: describe the car model in 5 sentences;
BENEFITS: describe in 3 sentences why this car model is perfect considering the customer's preferred features and budget;
IDEAL USE CASE: write a story in 5 sentences, about how this car fits into the customer's lifestyle, considering their budget and preferred features;
";

/// Separator between feature labels in the `features` slot.
const FEATURE_SEPARATOR: &str = ",";

/// Inputs for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Neutral description of the car model.
    pub content: String,
    /// Preferred features in selection order. May be empty.
    pub features: Vec<Feature>,
    /// Budget bracket, if one was selected.
    pub budget: Option<BudgetBracket>,
}

impl PromptRequest {
    /// Feature labels joined with `,`, no surrounding separator.
    pub fn joined_features(&self) -> String {
        self.features
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(FEATURE_SEPARATOR)
    }

    /// Budget label, or the empty string when none was selected.
    pub fn budget_label(&self) -> &'static str {
        self.budget.map(BudgetBracket::label).unwrap_or("")
    }
}

/// A fully substituted prompt, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable prompt template with `content`, `features` and `budget` slots.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    /// The copywriter template used for every generation.
    pub const fn luxury_car() -> Self {
        Self {
            text: LUXURY_CAR_TEMPLATE,
        }
    }

    /// Substitute the request into the template.
    pub fn render(&self, request: &PromptRequest) -> Result<RenderedPrompt, TemplateError> {
        let features = request.joined_features();
        let variables: HashMap<&str, &str> = HashMap::from([
            ("content", request.content.as_str()),
            ("features", features.as_str()),
            ("budget", request.budget_label()),
        ]);

        render_template(self.text, &variables).map(RenderedPrompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        content: &str,
        features: &[Feature],
        budget: Option<BudgetBracket>,
    ) -> PromptRequest {
        PromptRequest {
            content: content.to_string(),
            features: features.to_vec(),
            budget,
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = PromptTemplate::luxury_car();
        let req = request(
            "A grand tourer.",
            &[Feature::Comfort, Feature::Design],
            Some(BudgetBracket::Over200k),
        );

        let first = template.render(&req).unwrap();
        let second = template.render(&req).unwrap();
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn test_features_joined_in_selection_order() {
        let prompt = PromptTemplate::luxury_car()
            .render(&request(
                "X",
                &[Feature::Speed, Feature::Comfort],
                Some(BudgetBracket::Under100k),
            ))
            .unwrap();

        assert!(prompt.as_str().contains("Speed,Comfort"));
        assert!(prompt.as_str().contains("CUSTOMER preferred features: Speed,Comfort;"));
        assert!(!prompt.as_str().contains("Comfort,Speed"));
    }

    #[test]
    fn test_duplicate_features_are_kept() {
        let req = request("X", &[Feature::Speed, Feature::Speed], None);
        assert_eq!(req.joined_features(), "Speed,Speed");
    }

    #[test]
    fn test_full_render_matches_expected_text() {
        let prompt = PromptTemplate::luxury_car()
            .render(&request(
                "A sleek red coupe.",
                &[Feature::Speed, Feature::Design],
                Some(BudgetBracket::From100kTo200k),
            ))
            .unwrap();

        let expected = concat!(
            "\n",
            "You are a luxury car sales copywriter with 20 years of experience. ",
            "You are analyzing a customer's preferences to write a personalized car description ",
            "that only this customer will receive;\n",
            "CAR MODEL input text: A sleek red coupe.;\n",
            "CUSTOMER preferred features: Speed,Design;\n",
            "CUSTOMER budget: 100k-200k €;\n",
            "TASK: Write a car description that is tailored to this customer's preferred features ",
            "and budget. Use language that appeals to the luxury car buyer;\n",
            "FORMAT: Present the result in the following order: ",
            "(CAR DESCRIPTION), (BENEFITS), (IDEAL USE CASE);\n",
            "CAR DESCRIPTION: describe the car model in 5 sentences;\n",
            "BENEFITS: describe in 3 sentences why this car model is perfect considering ",
            "the customer's preferred features and budget;\n",
            "IDEAL USE CASE: write a story in 5 sentences, about how this car fits into ",
            "the customer's lifestyle, considering their budget and preferred features;\n",
        );
        assert_eq!(prompt.as_str(), expected);
    }

    #[test]
    fn test_content_inserted_without_trimming_or_escaping() {
        let content = "  {budget} \"quoted\"\nsecond line  ";
        let prompt = PromptTemplate::luxury_car()
            .render(&request(content, &[], Some(BudgetBracket::Under100k)))
            .unwrap();

        assert!(
            prompt
                .as_str()
                .contains("CAR MODEL input text:   {budget} \"quoted\"\nsecond line  ;")
        );
    }

    #[test]
    fn test_empty_selections_render_empty_slots() {
        let prompt = PromptTemplate::luxury_car()
            .render(&request("", &[], None))
            .unwrap();

        assert!(prompt.as_str().contains("CAR MODEL input text: ;"));
        assert!(prompt.as_str().contains("CUSTOMER preferred features: ;"));
        assert!(prompt.as_str().contains("CUSTOMER budget: ;"));
    }

    #[test]
    fn test_template_keeps_output_format_instruction() {
        let prompt = PromptTemplate::luxury_car()
            .render(&request("X", &[], None))
            .unwrap();

        assert!(prompt.as_str().contains(
            "FORMAT: Present the result in the following order: (CAR DESCRIPTION), (BENEFITS), (IDEAL USE CASE);"
        ));
        assert_eq!(prompt.as_str(), prompt.to_string());
    }
}
