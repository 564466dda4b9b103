use console::Style;
use once_cell::sync::Lazy;

pub struct ShelfTheme {
    pub index: Style,
    pub title: Style,
    pub author: Style,
    pub genre: Style,
    pub stars: Style,
    pub heading: Style,
    pub bar: Style,
    pub count: Style,
}

pub static SHELF_THEME: Lazy<ShelfTheme> = Lazy::new(|| ShelfTheme {
    index: Style::new().dim(),
    title: Style::new().bold(),
    author: Style::new().italic(),
    genre: Style::new().cyan(),
    stars: Style::new().yellow(),
    heading: Style::new().bold().underlined(),
    bar: Style::new().color256(69),
    count: Style::new().dim(),
});
