//! Line-based prompts for filling in missing commit fields.

use std::io::{self, BufRead, IsTerminal, Write};

use forge_config::Configuration;
use forge_grammar::{
    expand_newline_escapes, validate_description, validate_jira, validate_message, Category,
    CommitInput, ForgeError, ForgeResult, Prompter, RawCommitInput, NO_JIRA,
};

/// Prompter reading answers line by line.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    require_terminal: bool,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process terminal.
    pub fn stdio() -> Self {
        Self {
            require_terminal: true,
            ..Self::new(io::stdin().lock(), io::stdout())
        }
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Prompter over arbitrary streams; does not require a terminal.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            require_terminal: false,
        }
    }

    fn read_answer(&mut self, question: &str) -> ForgeResult<String> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ForgeError::Cancelled("input closed".to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `validate` accepts the transformed answer.
    fn ask_until_valid(
        &mut self,
        question: &str,
        validate: impl Fn(Option<&str>) -> Option<String>,
        transform: impl Fn(&str) -> Option<String>,
    ) -> ForgeResult<Option<String>> {
        loop {
            let answer = self.read_answer(question)?;
            let transformed = transform(&answer);
            match validate(transformed.as_deref()) {
                None => return Ok(transformed),
                Some(problem) => writeln!(self.output, "{}", problem)?,
            }
        }
    }

    fn select_category(&mut self) -> ForgeResult<String> {
        writeln!(
            self.output,
            "Select category (number or keyword, Enter for {}):",
            Category::ALL[0]
        )?;
        for (index, category) in Category::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} {} - {}",
                index + 1,
                category.icon(),
                category.keyword(),
                category.description()
            )?;
        }

        loop {
            let answer = self.read_answer("Category:")?;
            if let Some(category) = pick_category(&answer) {
                writeln!(
                    self.output,
                    "Category: {} {} - {}",
                    category.icon(),
                    category,
                    category.description()
                )?;
                return Ok(category.keyword().to_string());
            }
            writeln!(
                self.output,
                "Invalid category \"{}\". Allowed: {}.",
                answer.trim(),
                Category::allowed_keywords()
            )?;
        }
    }
}

/// Resolve a menu answer: empty picks the first entry, digits index the
/// menu from 1, anything else is matched as a keyword.
fn pick_category(answer: &str) -> Option<Category> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(Category::ALL[0]);
    }

    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| Category::ALL.get(i).copied());
    }

    Category::from_keyword(&answer.to_lowercase())
}

fn is_blank(value: Option<&String>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt_missing(
        &mut self,
        partial: &CommitInput,
        config: &Configuration,
    ) -> ForgeResult<RawCommitInput> {
        if self.require_terminal && !(io::stdin().is_terminal() && io::stdout().is_terminal()) {
            return Err(ForgeError::NotInteractive);
        }

        let mut answers = RawCommitInput::from(partial.clone());

        if is_blank(answers.category.as_ref()) {
            answers.category = Some(self.select_category()?);
        }

        if config.jira.enabled && is_blank(answers.jira.as_ref()) {
            let question = if config.jira.allow_no_jira && !config.jira.required {
                "Enter JIRA ID (e.g., TB-123) or press Enter for NO-JIRA:"
            } else {
                "Enter JIRA ID (e.g., TB-123):"
            };
            let allow_no_jira = config.jira.allow_no_jira;
            answers.jira = self.ask_until_valid(
                question,
                |value| validate_jira(value, config),
                |value| {
                    let cleaned = value.trim().to_uppercase();
                    if cleaned.is_empty() && allow_no_jira {
                        return Some(NO_JIRA.to_string());
                    }
                    Some(cleaned)
                },
            )?;
        }

        if is_blank(answers.message.as_ref()) {
            let question = format!("Enter short message (<= {} chars):", config.subject.max_length);
            answers.message = self.ask_until_valid(
                &question,
                |value| validate_message(value, config),
                |value| Some(value.trim().to_string()),
            )?;
        }

        if answers.description.is_none() {
            let question = if config.description.required {
                "Enter description (required, use \\n for new lines):"
            } else {
                "Enter description (optional, use \\n for new lines):"
            };
            answers.description = self.ask_until_valid(
                question,
                |value| validate_description(value, config),
                |value| {
                    let cleaned = expand_newline_escapes(value).trim().to_string();
                    Some(cleaned).filter(|c| !c.is_empty())
                },
            )?;
        }

        Ok(answers)
    }
}
