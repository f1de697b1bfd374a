//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{Result, TutorialError};

use super::{parse_bool, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix for environment variables that answer prompts without a terminal.
const PROMPT_ENV_PREFIX: &str = "TUTORIAL_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `TUTORIAL_PROMPT_<KEY>` environment variables,
/// then from the prompt's default. A prompt with neither is an error, so a
/// headless run never blocks waiting for input.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("ℹ {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned();

        match (answer, &prompt.prompt_type) {
            (Some(value), PromptType::Confirm) => Ok(PromptResult::Bool(parse_bool(&value))),
            (Some(value), PromptType::Input) => Ok(PromptResult::String(value)),
            (None, _) => Err(TutorialError::validation(format!(
                "Cannot ask '{}' in non-interactive mode (set {} or pass it as an option)",
                prompt.question, env_key
            ))),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decorations() {
            println!("\n{}\n{}", title, "=".repeat(50));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_decorations() {
            println!("  {}", hint);
        }
    }

    fn show_output(&mut self, output: &str) {
        if self.mode.shows_status() && !output.is_empty() {
            print!("{}", output);
            let _ = std::io::stdout().flush();
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::confirm("commit_first", "Commit them first?", true);

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("commit_message", "Enter commit message");

        let err = ui.prompt(&prompt).unwrap_err();
        assert!(matches!(err, TutorialError::Validation { .. }));
        assert!(err.to_string().contains("TUTORIAL_PROMPT_COMMIT_MESSAGE"));
    }

    #[test]
    fn prompt_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "TUTORIAL_PROMPT_COMMIT_MESSAGE".to_string(),
            "from env".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::input("commit_message", "Enter commit message");

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "from env");
    }

    #[test]
    fn confirm_override_is_parsed() {
        let mut overrides = HashMap::new();
        overrides.insert("TUTORIAL_PROMPT_COMMIT_FIRST".to_string(), "no".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::confirm("commit_first", "Commit them first?", true);

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
