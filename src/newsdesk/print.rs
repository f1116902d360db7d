use colored::Colorize;
use newsdesk::api::{CmdMessage, MessageLevel};
use newsdesk::model::Article;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.text.dimmed()),
            MessageLevel::Success => println!("{}", message.text.green()),
            MessageLevel::Warning => println!("{}", message.text.yellow()),
        }
    }
}

/// Numbered listing with the title column sized so the date lines up on the
/// right, in the style of the list views.
pub(crate) fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles loaded.");
        return;
    }

    for (i, article) in articles.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let label = if article.category.is_empty() {
            article.title.clone()
        } else {
            format!("{} [{}]", article.title, article.category)
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + DATE_WIDTH + 2);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            label_display,
            " ".repeat(padding),
            format!("{:>DATE_WIDTH$}", article.date).dimmed()
        );
    }
}

/// Search hits the way the archive listing spells them: `- Title (date)`.
pub(crate) fn print_search_results(articles: &[Article]) {
    for article in articles {
        println!("- {} ({})", article.title.bold(), article.date);
    }
}

pub(crate) fn print_elapsed(label: &str, elapsed: Duration) {
    println!("{}", format!("{label} took {elapsed:.3?}").dimmed());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
