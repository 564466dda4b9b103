//! # Rendering
//!
//! Everything here returns a `String` so layout can be tested without a
//! terminal. The public functions pick colour from `console`'s terminal
//! detection; the `_with` variants take it explicitly.

use super::styles::SHELF_THEME;
use colored::Colorize;
use console::Style;
use shelf::api::{CmdMessage, LibraryStats, MessageLevel};
use shelf::config::MAX_CHART_WIDTH;
use shelf::model::Book;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const STAR: &str = "★";
const BAR: &str = "█";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn paint(style: &Style, text: &str, color: bool) -> String {
    if color {
        style.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn stars(rating: u8) -> String {
    STAR.repeat(usize::from(rating))
}

/// One card per book: index and title on the first line, details below.
pub fn render_book_list(books: &[Book]) -> String {
    render_book_list_with(books, console::colors_enabled())
}

pub fn render_book_list_with(books: &[Book], color: bool) -> String {
    let theme = &*SHELF_THEME;
    let index_width = books.len().to_string().len();
    let mut out = String::new();

    for (i, book) in books.iter().enumerate() {
        let index = format!("{:>width$}. ", i + 1, width = index_width);
        let indent = " ".repeat(index.width());
        let available = LINE_WIDTH.saturating_sub(index.width());

        let title = truncate_to_width(&book.title, available);
        out.push_str(&paint(&theme.index, &index, color));
        out.push_str(&paint(&theme.title, &title, color));
        out.push('\n');

        let genre = book.genre.as_str();
        let rating = stars(book.rating.value());
        let fixed = " · ".width() * 2 + genre.width() + rating.width();
        let author = truncate_to_width(&book.author, available.saturating_sub(fixed));

        out.push_str(&indent);
        out.push_str(&paint(&theme.author, &author, color));
        out.push_str(" · ");
        out.push_str(&paint(&theme.genre, genre, color));
        out.push_str(" · ");
        out.push_str(&paint(&theme.stars, &rating, color));
        out.push('\n');
    }

    out
}

pub fn render_titles(titles: &[String]) -> String {
    let mut out = String::new();
    for title in titles {
        out.push_str(title);
        out.push('\n');
    }
    out
}

pub fn render_settings(settings: &[(String, String)]) -> String {
    settings
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// Horizontal bar charts for the genre and rating distributions.
pub fn render_stats(stats: &LibraryStats, chart_width: usize) -> String {
    render_stats_with(stats, chart_width, console::colors_enabled())
}

pub fn render_stats_with(stats: &LibraryStats, chart_width: usize, color: bool) -> String {
    let theme = &*SHELF_THEME;
    let chart_width = chart_width.clamp(1, MAX_CHART_WIDTH);
    let mut out = String::new();

    out.push_str(&paint(&theme.heading, "Books by Genre", color));
    out.push('\n');
    let genre_rows: Vec<(String, usize)> = stats
        .by_genre
        .iter()
        .map(|(genre, count)| (genre.to_string(), *count))
        .collect();
    out.push_str(&render_bars(&genre_rows, chart_width, color));

    out.push('\n');
    out.push_str(&paint(&theme.heading, "Books by Rating", color));
    out.push('\n');
    let rating_rows: Vec<(String, usize)> = stats
        .by_rating
        .iter()
        .map(|(rating, count)| (stars(*rating), *count))
        .collect();
    out.push_str(&render_bars(&rating_rows, chart_width, color));

    out.push('\n');
    out.push_str(&format!("Total: {}\n", stats.total));
    out
}

fn render_bars(rows: &[(String, usize)], chart_width: usize, color: bool) -> String {
    let theme = &*SHELF_THEME;
    let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let len = bar_length(*count, max, chart_width);
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        out.push_str(&format!(
            "  {}{} {} {}\n",
            label,
            padding,
            paint(&theme.bar, &BAR.repeat(len), color),
            paint(&theme.count, &count.to_string(), color)
        ));
    }
    out
}

/// Scales `count` against `max`, rounding up so any non-zero count is visible.
fn bar_length(count: usize, max: usize, chart_width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    let scaled = (count as u128 * chart_width as u128).div_ceil(max as u128);
    usize::try_from(scaled)
        .unwrap_or(chart_width)
        .clamp(1, chart_width.max(1))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
