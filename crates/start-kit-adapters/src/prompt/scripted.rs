//! A prompter that replays pre-recorded answers.

use std::cell::RefCell;
use std::collections::VecDeque;

use start_kit_core::application::ports::{PromptError, Prompter};

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Take the prompt's default, whatever kind of question it is.
    Default,
    Choice(usize),
    Confirm(bool),
}

/// Replays [`Answer`]s in order and records every question asked.
///
/// Text answers go through the prompt's validator like a real terminal
/// would: a rejected answer is recorded and the next one is used. Running
/// out of answers, or a kind mismatch, is a [`PromptError`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    rejected: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Prompts shown so far, including repeats.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// `(answer, message)` for each text answer the validator refused.
    pub fn rejected(&self) -> Vec<(String, String)> {
        self.rejected.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer, PromptError> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::new(format!("no scripted answer for \"{prompt}\"")))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError> {
        loop {
            let value = match self.next(prompt)? {
                Answer::Text(text) => match default {
                    Some(default) if text.is_empty() => default.to_string(),
                    _ => text,
                },
                Answer::Default => default
                    .ok_or_else(|| PromptError::new(format!("\"{prompt}\" has no default")))?
                    .to_string(),
                other => return Err(mismatch(prompt, &other)),
            };

            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => self.rejected.borrow_mut().push((value, message)),
            }
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        let index = match self.next(prompt)? {
            Answer::Choice(index) => index,
            Answer::Default => default,
            other => return Err(mismatch(prompt, &other)),
        };
        if index >= items.len() {
            return Err(PromptError::new(format!(
                "choice {index} out of range for \"{prompt}\""
            )));
        }
        Ok(index)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Default => Ok(default),
            other => Err(mismatch(prompt, &other)),
        }
    }
}

fn mismatch(prompt: &str, answer: &Answer) -> PromptError {
    PromptError::new(format!("unexpected answer {answer:?} for \"{prompt}\""))
}
