use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
    pub id: String,
    #[serde(default)]
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl QuizQuestion {
    pub fn new(id: &str, prompt: &str, options: Vec<QuizOption>) -> Self {
        QuizQuestion {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option_ids(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.correct)
            .map(|o| o.id.as_str())
    }
}

impl QuizOption {
    pub fn new(id: &str, text: &str, correct: bool) -> Self {
        QuizOption {
            id: id.to_string(),
            text: text.to_string(),
            correct,
        }
    }
}
