use supply_trace::prelude::*;

/// ConfirmationPrompt that always gives the same answer and records the questions
#[derive(Clone)]
pub struct ScriptedConfirmation {
    answer: bool,
    pub questions: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl ScriptedConfirmation {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Default::default(),
        }
    }

    pub fn asked(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl ConfirmationPrompt for ScriptedConfirmation {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
    }
}
