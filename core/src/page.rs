//! Page state machine and the view it renders.
//!
//! # Design
//! `PageState` starts in `Loading` and settles exactly once. Rendering is a
//! pure function of the state, so the host only has to drive the transition.

use std::fmt;

use crate::card::{self, Card};
use crate::error::ApiError;
use crate::types::Model;

pub const TITLE: &str = "GGLIB Model Manager";
pub const LOADING_MESSAGE: &str = "Loading models...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load models";
pub const EMPTY_MESSAGE: &str = "No models found. Add some models using the CLI first!";

/// Where the page is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Model>),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    /// Apply the fetch result. Only `Loading` moves; a settled page stays put.
    pub fn resolve(self, result: Result<Vec<Model>, ApiError>) -> PageState {
        match self {
            PageState::Loading => match result {
                Ok(models) => PageState::Loaded(models),
                Err(_) => PageState::Error(LOAD_FAILED_MESSAGE.to_string()),
            },
            settled => settled,
        }
    }

    pub fn render(&self) -> View {
        let elements = match self {
            PageState::Loading => vec![Element::text(Style::Plain, LOADING_MESSAGE)],
            PageState::Error(message) => vec![Element::text(Style::Attention, message)],
            PageState::Loaded(models) if models.is_empty() => vec![
                Element::text(Style::Heading, TITLE),
                Element::text(Style::Plain, EMPTY_MESSAGE),
            ],
            PageState::Loaded(models) => std::iter::once(Element::text(Style::Heading, TITLE))
                .chain(models.iter().map(|m| Element::Card(card::render(m))))
                .collect(),
        };
        View { elements }
    }
}

/// How a text element should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    /// Draws attention, used for errors.
    Attention,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text { style: Style, text: String },
    Card(Card),
}

impl Element {
    fn text(style: Style, text: &str) -> Self {
        Element::Text {
            style,
            text: text.to_string(),
        }
    }
}

/// Rendered page: a flat list of elements in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub elements: Vec<Element>,
}

impl View {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.elements.iter().filter_map(|e| match e {
            Element::Card(card) => Some(card),
            Element::Text { .. } => None,
        })
    }

    /// Text elements with the given style.
    pub fn texts(&self, style: Style) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(move |e| match e {
            Element::Text { style: s, text } if *s == style => Some(text.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match element {
                Element::Text { style: Style::Plain, text } => writeln!(f, "{text}")?,
                Element::Text { style: Style::Heading, text } => {
                    writeln!(f, "{text}")?;
                    writeln!(f, "{}", "=".repeat(text.chars().count()))?;
                }
                Element::Text { style: Style::Attention, text } => writeln!(f, "error: {text}")?,
                Element::Card(card) => writeln!(f, "{card}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: i64, name: &str) -> Model {
        Model {
            id: Some(id),
            name: Some(name.to_string()),
            ..Model::default()
        }
    }

    #[test]
    fn starts_loading() {
        let state = PageState::default();
        assert!(state.is_loading());
        let view = state.render();
        assert_eq!(view.texts(Style::Plain).collect::<Vec<_>>(), vec![LOADING_MESSAGE]);
        assert_eq!(view.cards().count(), 0);
    }

    #[test]
    fn success_loads_models() {
        let state = PageState::Loading.resolve(Ok(vec![model(1, "a"), model(2, "b")]));
        let view = state.render();
        let keys: Vec<_> = view.cards().map(|c| c.key).collect();
        assert_eq!(keys, vec![Some(1), Some(2)]);
        assert_eq!(view.texts(Style::Heading).collect::<Vec<_>>(), vec![TITLE]);
    }

    #[test]
    fn failure_collapses_to_fixed_message() {
        let status = PageState::Loading.resolve(Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        let shape = PageState::Loading.resolve(Err(ApiError::MissingField("models")));
        assert_eq!(status, PageState::Error(LOAD_FAILED_MESSAGE.to_string()));
        assert_eq!(status, shape);

        let view = status.render();
        assert_eq!(view.texts(Style::Attention).collect::<Vec<_>>(), vec![LOAD_FAILED_MESSAGE]);
        assert_eq!(view.cards().count(), 0);
    }

    #[test]
    fn empty_list_shows_hint() {
        let view = PageState::Loading.resolve(Ok(Vec::new())).render();
        assert_eq!(view.texts(Style::Plain).collect::<Vec<_>>(), vec![EMPTY_MESSAGE]);
        assert_eq!(view.texts(Style::Attention).count(), 0);
        assert_eq!(view.cards().count(), 0);
    }

    #[test]
    fn settled_state_ignores_later_results() {
        let loaded = PageState::Loading.resolve(Ok(vec![model(1, "a")]));
        let again = loaded.clone().resolve(Err(ApiError::Transport("late".to_string())));
        assert_eq!(again, loaded);

        let failed = PageState::Loading.resolve(Err(ApiError::Transport("down".to_string())));
        let again = failed.clone().resolve(Ok(vec![model(2, "b")]));
        assert_eq!(again, failed);
    }

    #[test]
    fn display_marks_errors() {
        let text = PageState::Error(LOAD_FAILED_MESSAGE.to_string()).render().to_string();
        assert_eq!(text, "error: Failed to load models\n");
    }

    #[test]
    fn display_underlines_heading() {
        let text = PageState::Loaded(Vec::new()).render().to_string();
        assert!(text.starts_with("GGLIB Model Manager\n===================\n"));
        assert!(text.ends_with(&format!("{EMPTY_MESSAGE}\n")));
    }
}
