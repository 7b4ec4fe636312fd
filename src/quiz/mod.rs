pub mod format;
pub mod generator;
pub mod random;

pub use generator::QuestionGenerator;
pub use random::{RangeSource, RngSource};

/// A generated quiz item. Serialized with the field names the quiz apps read.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub sector: String,
    pub text: String,
    pub answer_index: usize,
    pub multiple_choice: Vec<String>,
}

impl Question {
    pub fn new(
        sector: String,
        text: String,
        answer_index: usize,
        multiple_choice: Vec<String>,
    ) -> Self {
        Self {
            sector,
            text,
            answer_index,
            multiple_choice,
        }
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.multiple_choice
            .get(self.answer_index)
            .map(|choice| choice.as_str())
    }
}
