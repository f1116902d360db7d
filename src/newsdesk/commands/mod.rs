//! Command layer: one module per operation, pure logic, no terminal I/O.
//! Each command returns a [`CmdResult`] carrying articles, leveled messages
//! for the presentation layer, and (for the timed phases) an elapsed
//! duration.

use std::time::Duration;

use crate::model::Article;

pub mod load;
pub mod peek;
pub mod search;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl CmdMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Articles the command produced, in store order.
    pub articles: Vec<Article>,
    pub messages: Vec<CmdMessage>,
    /// Wall-clock duration of the timed phase, when the command measures one.
    pub elapsed: Option<Duration>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = articles;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}
