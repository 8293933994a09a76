use uiselect::events::{EventResult, Key, WidgetEvents};
use uiselect::mount::Mount;
use uiselect::select::{Choice, Select};

fn fruit() -> Vec<&'static str> {
    vec!["Apple", "Banana", "Cherry", "Date"]
}

fn mount(tagging: bool) -> Mount<&'static str> {
    Mount::new(
        Select::builder(fruit())
            .id("fruit")
            .tagging(tagging)
            .build()
            .unwrap(),
    )
}

fn active_rows(mount: &Mount<&'static str>) -> Vec<String> {
    mount
        .find_by_class("ui-select-choices-row")
        .into_iter()
        .filter(|row| row.has_class("active"))
        .map(|row| row.text_content())
        .collect()
}

#[test]
fn test_keys_open_closed_select() {
    for key in [Key::Enter, Key::Down, Key::Char(' ')] {
        let mut m = mount(false);
        assert_eq!(m.key(key), EventResult::Consumed);
        assert!(m.is_open());
    }

    let mut m = mount(false);
    assert_eq!(m.key(Key::Up), EventResult::Ignored);
    assert!(!m.is_open());
}

#[test]
fn test_arrows_move_active_row() {
    let mut m = mount(false);
    m.key(Key::Down);
    assert_eq!(active_rows(&m), vec!["Apple"]);

    m.key(Key::Down);
    m.key(Key::Down);
    assert_eq!(active_rows(&m), vec!["Cherry"]);

    m.key(Key::Up);
    assert_eq!(active_rows(&m), vec!["Banana"]);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut m = mount(false);
    m.key(Key::Enter);
    m.key(Key::Up);
    assert_eq!(m.select().state().active_index(), 0);

    for _ in 0..10 {
        m.key(Key::Down);
    }
    assert_eq!(m.select().state().active_index(), 3);
}

#[test]
fn test_enter_selects_active_row() {
    let mut m = mount(false);
    m.key(Key::Enter);
    m.key(Key::Down);
    m.key(Key::Enter);

    assert!(!m.is_open());
    assert_eq!(m.match_label(), "Banana");
}

#[test]
fn test_enter_works_on_filtered_list() {
    let mut m = mount(false);
    m.key(Key::Enter);
    m.input("an");
    assert_eq!(m.select().filtered_items(), vec!["Banana"]);

    m.key(Key::Enter);

    assert_eq!(m.select().state().selected(), Some(&Choice::Item("Banana")));
}

#[test]
fn test_reopening_starts_on_selection() {
    let mut m = mount(false);
    m.click_text("Cherry");

    m.key(Key::Enter);

    assert_eq!(active_rows(&m), vec!["Cherry"]);
}

#[test]
fn test_escape_closes_without_selecting() {
    let mut m = mount(false);
    m.key(Key::Enter);
    m.input("ch");

    m.key(Key::Escape);

    assert!(!m.is_open());
    assert_eq!(m.select().state().selected(), None);
    assert_eq!(m.select().state().search(), "");
}

#[test]
fn test_tab_selects_and_closes() {
    let mut m = mount(false);
    m.key(Key::Down);
    m.key(Key::Down);

    m.key(Key::Tab);

    assert!(!m.is_open());
    assert_eq!(m.match_label(), "Banana");
}

#[test]
fn test_enter_tags_unmatched_search() {
    let mut m = mount(true);
    m.key(Key::Enter);
    m.input("  Elderberry ");
    assert!(m.select().filtered_items().is_empty());

    m.key(Key::Enter);

    assert_eq!(m.select().state().selected(), Some(&Choice::tag("Elderberry")));
    assert_eq!(m.match_label(), "Elderberry");
}

#[test]
fn test_enter_without_tagging_keeps_open() {
    let mut m = mount(false);
    m.key(Key::Enter);
    m.input("Elderberry");

    m.key(Key::Enter);

    assert!(m.is_open());
    assert_eq!(m.select().state().selected(), None);
}

#[test]
fn test_characters_do_not_edit_search() {
    let mut m = mount(false);
    m.key(Key::Enter);

    assert_eq!(m.key(Key::Char('a')), EventResult::Ignored);
    assert_eq!(m.select().state().search(), "");
}

#[test]
fn test_disabled_ignores_keys_and_input() {
    let mut select = Select::builder(fruit()).disabled(true).build().unwrap();

    assert_eq!(select.on_key(Key::Enter), EventResult::Ignored);
    assert_eq!(select.on_search_input("app"), EventResult::Ignored);
    assert_eq!(select.on_activate_clicked(), EventResult::Ignored);
    assert!(!select.state().is_open());
    assert_eq!(select.state().search(), "");
}

#[test]
fn test_blur_closes() {
    let mut m = mount(false);
    assert_eq!(m.blur(), EventResult::Ignored);

    m.key(Key::Enter);
    assert_eq!(m.blur(), EventResult::Consumed);
    assert!(!m.is_open());
}

#[test]
fn test_row_click_past_list_is_ignored() {
    let mut select = Select::builder(fruit()).build().unwrap();
    select.set_search("date");

    assert_eq!(select.on_row_clicked(1), EventResult::Ignored);
    assert_eq!(select.on_row_clicked(0), EventResult::Consumed);
    assert_eq!(select.state().selected(), Some(&Choice::Item("Date")));
}
