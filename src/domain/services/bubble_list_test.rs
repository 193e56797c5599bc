use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::services::Themes;

fn messages() -> Vec<Message> {
    return vec![
        Message::new(Author::Assistant, "Hi there!"),
        Message::new(Author::User, "Is it cold outside?"),
    ];
}

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::new(Themes::get("sky").unwrap());

    assert_eq!(bubble_list.cache.len(), 0);
    assert_eq!(bubble_list.len(), 0);
}

#[test]
fn it_caches_lines() {
    let mut bubble_list = BubbleList::new(Themes::get("sky").unwrap());
    bubble_list.set_messages(&messages(), 50);

    assert_eq!(bubble_list.cache.len(), 2);
    assert_eq!(bubble_list.len(), 6);
    assert_eq!(bubble_list.lines().len(), 6);
}

#[test]
fn it_clears_the_cache_when_the_transcript_is_reset() {
    let mut bubble_list = BubbleList::new(Themes::get("sky").unwrap());
    bubble_list.set_messages(&messages(), 50);
    bubble_list.set_messages(&messages()[..1], 50);

    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
    assert_eq!(bubble_list.lines().len(), 3);
}

#[test]
fn it_rebuilds_when_the_width_changes() {
    let mut bubble_list = BubbleList::new(Themes::get("sky").unwrap());
    bubble_list.set_messages(&messages(), 50);
    bubble_list.set_messages(&messages(), 20);

    // "Is it cold outside?" wraps onto two lines at this width.
    assert_eq!(bubble_list.len(), 7);
}
