//! Interaction surface used by the interactive runner.
//!
//! The runner only depends on this trait; the dialoguer implementation
//! below renders the real prompts, and tests drive the runner with a
//! scripted mock instead.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::cli::CliError;
use crate::wizard::OptionItem;

/// One entry of a step menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

pub trait Interaction {
    /// Presents a menu; `None` means the user backed out.
    fn choose(&mut self, title: &str, items: &[MenuItem]) -> Result<Option<String>, CliError>;

    /// Free-form text entry; `None` means the user backed out.
    fn input_text(&mut self, label: &str, current: &str) -> Result<Option<String>, CliError>;

    /// Single-select over an option table; returns the chosen value token.
    fn select(
        &mut self,
        label: &str,
        options: &[OptionItem],
        current: Option<&str>,
    ) -> Result<Option<String>, CliError>;

    /// Multi-select over an option table; returns the full selected set.
    fn multi_select(
        &mut self,
        label: &str,
        options: &[OptionItem],
        selected: &[String],
    ) -> Result<Option<Vec<String>>, CliError>;

    /// Yes/no toggle.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError>;
}

/// Dialoguer-backed implementation used by the real CLI.
pub struct PromptInteraction {
    theme: ColorfulTheme,
}

impl PromptInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for PromptInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for PromptInteraction {
    fn choose(&mut self, title: &str, items: &[MenuItem]) -> Result<Option<String>, CliError> {
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        let picked = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|index| items[index].key.clone()))
    }

    fn input_text(&mut self, label: &str, current: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn select(
        &mut self,
        label: &str,
        options: &[OptionItem],
        current: Option<&str>,
    ) -> Result<Option<String>, CliError> {
        let labels: Vec<&str> = options.iter().map(|option| option.label).collect();
        let default = current
            .and_then(|value| options.iter().position(|option| option.value == value))
            .unwrap_or(0);
        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(&labels)
            .default(default)
            .interact_opt()?;
        Ok(picked.map(|index| options[index].value.to_string()))
    }

    fn multi_select(
        &mut self,
        label: &str,
        options: &[OptionItem],
        selected: &[String],
    ) -> Result<Option<Vec<String>>, CliError> {
        let labels: Vec<&str> = options.iter().map(|option| option.label).collect();
        let checked: Vec<bool> = options
            .iter()
            .map(|option| selected.iter().any(|s| s == option.label))
            .collect();
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(label)
            .items(&labels)
            .defaults(&checked)
            .interact_opt()?;
        Ok(picked.map(|indexes| {
            indexes
                .into_iter()
                .map(|index| options[index].label.to_string())
                .collect()
        }))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
