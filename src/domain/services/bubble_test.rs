use unicode_width::UnicodeWidthStr;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::services::Themes;

fn create_lines(author: Author, alignment: BubbleAlignment, width: usize, text: &str) -> String {
    let message = Message::new(author, text);
    let theme = Themes::get("sky").unwrap();
    let lines = Bubble::new(&message, alignment, width).as_lines(&theme);

    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| {
                    return span.content.to_string();
                })
                .collect::<Vec<String>>()
                .join("");
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_creates_assistant_text() {
    let lines_str = create_lines(Author::Assistant, BubbleAlignment::Left, 30, "Hi there!");
    let lines = lines_str.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines[0], format!("╭WeatherBot──╮{}", " ".repeat(16)));
    assert_eq!(lines[1].trim_end(), "│ Hi there!  │");
    assert_eq!(lines[2].trim_end(), "╰────────────╯");
}

#[test]
fn it_creates_user_text_aligned_right() {
    let lines_str = create_lines(Author::User, BubbleAlignment::Right, 30, "Hi there!");
    let lines = lines_str.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines[0], format!("{}╭You────────╮", " ".repeat(17)));
    assert_eq!(lines[1].trim_start(), "│ Hi there! │");
    assert_eq!(lines[2].trim_start(), "╰───────────╯");
}

#[test]
fn it_wraps_long_text() {
    let lines_str = create_lines(
        Author::Assistant,
        BubbleAlignment::Left,
        40,
        "Hi there! This is a really long line that pushes the boundaries of the chat window.",
    );

    insta::assert_snapshot!(lines_str.split('\n').map(|line| return line.trim_end()).collect::<Vec<&str>>().join("\n"), @r###"
    ╭WeatherBot────────────────╮
    │ Hi there! This is a      │
    │ really long line that    │
    │ pushes the boundaries of │
    │ the chat window.         │
    ╰──────────────────────────╯
    "###);
}

#[test]
fn it_never_underflows_in_narrow_windows() {
    let lines_str = create_lines(Author::User, BubbleAlignment::Right, 4, "A fairly long message");
    assert!(lines_str.contains("│ message │"));
}

#[test]
fn it_aligns_borders_around_wide_characters() {
    let lines_str = create_lines(
        Author::Assistant,
        BubbleAlignment::Left,
        40,
        "Sunny all day ☀️ enjoy it 😊",
    );

    for line in lines_str.split('\n') {
        assert_eq!(line.width(), 40, "misaligned line: {line}");
    }
}
