//! Line-based login prompts shown before the UI takes over the terminal.

use std::io::{self, BufRead, Write};

use chatterm_backend::AuthorizationState;
use chatterm_common::ChattermError;

/// An answer to forward to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    PhoneNumber(String),
    Code(String),
    Password(String),
}

pub struct Authorizer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Authorizer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask the question `state` calls for, re-prompting until the answer
    /// is well formed. `None` for states that need no answer.
    pub fn ask(&mut self, state: &AuthorizationState) -> Result<Option<Answer>, ChattermError> {
        let answer = match state {
            AuthorizationState::WaitPhoneNumber => Answer::PhoneNumber(self.prompt(
                "Phone number (international format, e.g. +15551234567): ",
                is_phone_number,
            )?),
            AuthorizationState::WaitCode => {
                Answer::Code(self.prompt("Login code: ", is_code)?)
            }
            AuthorizationState::WaitPassword { password_hint } => {
                let question = if password_hint.is_empty() {
                    "Password: ".to_string()
                } else {
                    format!("Password (hint: {password_hint}): ")
                };
                Answer::Password(self.prompt(&question, |s| !s.is_empty())?)
            }
            _ => return Ok(None),
        };
        Ok(Some(answer))
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    fn prompt(
        &mut self,
        question: &str,
        valid: impl Fn(&str) -> bool,
    ) -> Result<String, ChattermError> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChattermError::Authorization(
                    "input closed during login".into(),
                ));
            }
            let answer = line.trim();
            if valid(answer) {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "Invalid input, try again.")?;
        }
    }
}

fn is_phone_number(s: &str) -> bool {
    match s.strip_prefix('+') {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn is_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(
        state: AuthorizationState,
        input: &str,
    ) -> (Result<Option<Answer>, ChattermError>, String) {
        let mut output = Vec::new();
        let result = Authorizer::new(input.as_bytes(), &mut output).ask(&state);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn phone_number_reprompts_until_valid() {
        let (answer, output) = ask(
            AuthorizationState::WaitPhoneNumber,
            "5551234\n+\n+15551234\n",
        );
        assert_eq!(answer.unwrap(), Some(Answer::PhoneNumber("+15551234".into())));
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn code_must_be_digits() {
        let (answer, _) = ask(AuthorizationState::WaitCode, "12a\n 12345 \n");
        assert_eq!(answer.unwrap(), Some(Answer::Code("12345".into())));
    }

    #[test]
    fn password_shows_hint() {
        let state = AuthorizationState::WaitPassword {
            password_hint: "pet".into(),
        };
        let (answer, output) = ask(state, "\nhunter2\n");
        assert_eq!(answer.unwrap(), Some(Answer::Password("hunter2".into())));
        assert!(output.contains("hint: pet"));
    }

    #[test]
    fn other_states_ask_nothing() {
        let (answer, output) = ask(AuthorizationState::Ready, "");
        assert_eq!(answer.unwrap(), None);
        assert!(output.is_empty());
    }

    #[test]
    fn closed_input_is_an_error() {
        let (answer, output) = ask(AuthorizationState::WaitCode, "12a\n");
        let err = answer.unwrap_err();
        assert!(matches!(err, ChattermError::Authorization(_)));
        assert_eq!(err.to_string(), "authorization error: input closed during login");
        assert!(output.contains("Invalid input"));
    }
}
