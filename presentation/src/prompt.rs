//! Interactive reader form
//!
//! Fields not given on the command line are asked for one by one. Answers
//! are passed through untouched; validation happens in the use case.

use breath_application::PredictionForm;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub const AGE_PROMPT: &str = "Your age (1-120): ";
pub const GENDER_PROMPT: &str = "Gender [0 Female, 1 Male, 2 Other]: ";
pub const PARENT_PROMPT: &str = "Are you a parent? [0 No, 1 Yes]: ";

/// Line-editor backed form prompt
pub struct FormPrompt {
    editor: DefaultEditor,
}

impl FormPrompt {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Ask for every field that is still missing
    pub fn complete(
        &mut self,
        age: Option<String>,
        gender: Option<String>,
        parent: Option<String>,
    ) -> Result<PredictionForm, ReadlineError> {
        let editor = &mut self.editor;
        complete_with(age, gender, parent, |label| editor.readline(label))
    }
}

/// True when nothing needs to be asked
pub fn is_complete(age: &Option<String>, gender: &Option<String>, parent: &Option<String>) -> bool {
    age.is_some() && gender.is_some() && parent.is_some()
}

/// Fill missing fields through `ask`, in form order
pub fn complete_with<E>(
    age: Option<String>,
    gender: Option<String>,
    parent: Option<String>,
    mut ask: impl FnMut(&str) -> Result<String, E>,
) -> Result<PredictionForm, E> {
    let mut field = |value: Option<String>, label: &str| match value {
        Some(v) => Ok(v),
        None => ask(label).map(|answer| answer.trim().to_string()),
    };

    let age = field(age, AGE_PROMPT)?;
    let gender = field(gender, GENDER_PROMPT)?;
    let parent = field(parent, PARENT_PROMPT)?;

    Ok(PredictionForm::new(age, gender, parent))
}
