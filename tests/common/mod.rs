// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::VecDeque;

use acctmgr::application::{AppError, LineReader};

/// Test input: answers prompts from a queue and records every prompt it saw.
pub struct ScriptedInput {
    answers: VecDeque<String>,
    close_when_empty: bool,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    /// Answers in order, then empty lines forever.
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            close_when_empty: false,
            prompts: Vec::new(),
        }
    }

    /// No answers queued; asking returns an empty line.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Answers in order, then reports the input as closed.
    pub fn closing(answers: &[&str]) -> Self {
        Self {
            close_when_empty: true,
            ..Self::new(answers)
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineReader for ScriptedInput {
    async fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.close_when_empty => Err(AppError::InputClosed {
                prompt: prompt.to_string(),
            }),
            None => Ok(String::new()),
        }
    }
}

/// Lines of the main menu, in render order.
pub fn menu_lines() -> Vec<String> {
    [
        "--------------------------------",
        "Account Management System",
        "1. View Balance",
        "2. Credit Account",
        "3. Debit Account",
        "4. Exit",
        "--------------------------------",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect()
}
