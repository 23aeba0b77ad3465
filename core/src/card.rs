//! Presentational mapping from one `Model` to a card.

use std::fmt;

use crate::types::Model;

/// Display fragment for a single model.
///
/// Fields hold finished display text; `key` is the model `id` and identifies
/// the card within a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: Option<i64>,
    pub name: String,
    pub parameters: String,
    pub context: String,
    pub size: String,
}

impl Card {
    /// The four lines in display order.
    pub fn lines(&self) -> [&str; 4] {
        [&self.name, &self.parameters, &self.context, &self.size]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.parameters)?;
        writeln!(f, "  {}", self.context)?;
        write!(f, "  {}", self.size)
    }
}

/// Render a model. Absent fields show as empty text; this never fails.
pub fn render(model: &Model) -> Card {
    Card {
        key: model.id,
        name: model.name.clone().unwrap_or_default(),
        parameters: format!("Parameters: {}B", show(model.parameters)),
        context: format!("Context: {}", show(model.max_context)),
        size: format!("Size: {} bytes", show(model.file_size)),
    }
}

fn show<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
