use std::sync::{Arc, Mutex};

use uiselect::events::WidgetEventKind;
use uiselect::markup::Element;
use uiselect::mount::Mount;
use uiselect::select::{
    Choice, Select, SelectBuilder, SelectConfig, SelectItem, TemplateContext, highlight,
};
use uiselect::{SelectError, State};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    email: &'static str,
    age: u32,
}

impl SelectItem for Person {
    fn select_label(&self) -> String {
        self.name.to_string()
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.age)
    }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "Adam",
            email: "adam@email.com",
            age: 10,
        },
        Person {
            name: "Amalie",
            email: "amalie@email.com",
            age: 12,
        },
        Person {
            name: "Wladimir",
            email: "wladimir@email.com",
            age: 30,
        },
        Person {
            name: "Samantha",
            email: "samantha@email.com",
            age: 31,
        },
        Person {
            name: "Estefanía",
            email: "estefanía@email.com",
            age: 16,
        },
        Person {
            name: "Natasha",
            email: "natasha@email.com",
            age: 54,
        },
        Person {
            name: "Nicole",
            email: "nicole@email.com",
            age: 43,
        },
        Person {
            name: "Adrian",
            email: "adrian@email.com",
            age: 21,
        },
    ]
}

// ============================================================================
// DSL
// ============================================================================

#[derive(Default)]
struct Attrs {
    disabled: Option<bool>,
    required: Option<bool>,
    tagging: Option<bool>,
}

fn person_builder(model: State<Option<Choice<Person>>>) -> SelectBuilder<Person> {
    Select::builder(people())
        .id("people")
        .placeholder("Pick one...")
        .model(model)
        .match_template(|p: &Person, _cx: &TemplateContext<'_>| Element::text(p.name))
        .choice_template(|p: &Person, cx: &TemplateContext<'_>| {
            Element::div()
                .child(Element::div().child(highlight(p.name, cx.search)))
                .child(Element::div().child(highlight(p.email, cx.search)))
        })
}

fn create_select_with(model: State<Option<Choice<Person>>>, attrs: Attrs) -> Mount<Person> {
    let mut builder = person_builder(model);
    if let Some(disabled) = attrs.disabled {
        builder = builder.disabled(disabled);
    }
    if let Some(required) = attrs.required {
        builder = builder.required(required);
    }
    if let Some(tagging) = attrs.tagging {
        builder = builder.tagging(tagging);
    }
    Mount::new(builder.build().unwrap())
}

fn create_select(attrs: Attrs) -> Mount<Person> {
    create_select_with(State::default(), attrs)
}

fn click_match(mount: &mut Mount<Person>) {
    let id = format!("{}-match", mount.select().id());
    mount.click(&id);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_compiles_child_views() {
    let mount = create_select(Attrs::default());

    assert_eq!(mount.find_by_class("ui-select-search").len(), 1);
    assert_eq!(mount.find_by_class("ui-select-match").len(), 1);
    assert_eq!(mount.find_by_class("ui-select-choices-content").len(), 1);
    assert_eq!(mount.find_by_class("ui-select-choices").len(), 1);
    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 8);
}

#[test]
fn test_renders_initial_state() {
    let model = State::new(Some(Choice::Item(people()[0].clone())));
    let mount = create_select_with(model, Attrs::default());

    assert_eq!(mount.match_label(), "Adam");
    assert!(!mount.placeholder_visible());
}

#[test]
fn test_placeholder_when_nothing_selected() {
    let mount = create_select(Attrs::default());

    assert_eq!(mount.match_label(), "");
    assert!(mount.placeholder_visible());
    let placeholder = &mount.find_by_class("ui-select-placeholder")[0];
    assert_eq!(placeholder.text_content(), "Pick one...");
}

#[test]
fn test_closed_views_are_hidden() {
    let mount = create_select(Attrs::default());

    assert!(mount.find_by_class("ui-select-search")[0].hidden);
    assert!(mount.find_by_class("ui-select-choices")[0].hidden);
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_displays_choices_when_activated() {
    let mut mount = create_select(Attrs::default());
    assert!(!mount.is_open());

    click_match(&mut mount);

    assert!(mount.is_open());
    assert!(!mount.find_by_class("ui-select-choices")[0].hidden);
}

#[test]
fn test_activation_toggles() {
    let mut mount = create_select(Attrs::default());

    click_match(&mut mount);
    assert!(mount.is_open());
    click_match(&mut mount);
    assert!(!mount.is_open());
}

#[test]
fn test_disabled_by_attribute() {
    let mut el1 = create_select(Attrs {
        disabled: Some(true),
        ..Default::default()
    });
    assert!(el1.select().state().is_disabled());
    click_match(&mut el1);
    assert!(!el1.is_open());

    let mut el2 = create_select(Attrs {
        disabled: Some(false),
        ..Default::default()
    });
    assert!(!el2.select().state().is_disabled());
    click_match(&mut el2);
    assert!(el2.is_open());

    let mut el3 = create_select(Attrs::default());
    assert!(!el3.select().state().is_disabled());
    click_match(&mut el3);
    assert!(el3.is_open());
}

#[test]
fn test_disabling_open_select_closes_it() {
    let mut mount = create_select(Attrs::default());
    click_match(&mut mount);
    assert!(mount.is_open());

    mount.update(|s| s.set_disabled(true));

    assert!(!mount.is_open());
    assert!(mount.root().has_class("disabled"));
    click_match(&mut mount);
    assert!(!mount.is_open());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selects_an_item() {
    let mut mount = create_select(Attrs::default());

    mount.click_text("Samantha");

    assert_eq!(mount.match_label(), "Samantha");
}

#[test]
fn test_click_text_selects_matching_row_with_shared_ids() {
    let select = Select::builder(people())
        .choice_template(|p: &Person, _cx: &TemplateContext<'_>| {
            Element::div().child(Element::text(p.name).id("person-name"))
        })
        .build()
        .unwrap();
    let mut mount = Mount::new(select);

    mount.click_text("Samantha");

    assert_eq!(
        mount.select().state().selected(),
        Some(&Choice::Item(people()[3].clone()))
    );
    assert_eq!(mount.match_label(), "Samantha");
}

#[test]
fn test_selects_an_item_through_controller() {
    let mut mount = create_select(Attrs::default());

    mount.update(|s| s.select(Choice::Item(people()[1].clone())));

    assert_eq!(mount.match_label(), "Amalie");
}

#[test]
fn test_does_not_select_missing_item() {
    let mut mount = create_select(Attrs::default());

    mount.click_text("I don't exist");

    assert_eq!(mount.match_label(), "");
    assert!(mount.placeholder_visible());
    assert_eq!(mount.select().state().selected(), None);
}

#[test]
fn test_closes_choices_when_item_selected() {
    let mut mount = create_select(Attrs::default());

    click_match(&mut mount);
    assert!(mount.is_open());

    mount.click_text("Samantha");
    assert!(!mount.is_open());
}

#[test]
fn test_ignores_item_outside_filtered_set() {
    let mut mount = create_select(Attrs::default());
    click_match(&mut mount);
    mount.input("ada");
    assert_eq!(mount.select().filtered_items(), vec![people()[0].clone()]);

    let committed = mount.update(|s| s.select(Choice::Item(people()[3].clone())));

    assert!(!committed);
    assert!(mount.is_open());
    assert_eq!(mount.match_label(), "");
}

#[test]
fn test_keeps_previous_label_on_ignored_selection() {
    let mut mount = create_select(Attrs::default());
    mount.click_text("Nicole");

    mount.update(|s| s.select(Choice::tag("Zoe")));

    assert_eq!(mount.match_label(), "Nicole");
}

#[test]
fn test_allows_tagging_by_attribute() {
    let mut mount = create_select(Attrs {
        tagging: Some(true),
        ..Default::default()
    });
    click_match(&mut mount);

    mount.update(|s| s.select(Choice::tag("I don't exist")));

    assert_eq!(
        mount.select().state().selected(),
        Some(&Choice::tag("I don't exist"))
    );
    assert!(!mount.is_open());
    assert_eq!(mount.match_label(), "I don't exist");
}

#[test]
fn test_does_not_display_placeholder_for_falsy_item() {
    let mut mount = Mount::new(
        Select::builder(vec!["false".to_string()])
            .build()
            .unwrap(),
    );
    assert_eq!(mount.select().state().selected(), None);

    mount.click_text("false");

    assert_eq!(
        mount.select().state().selected(),
        Some(&Choice::Item("false".to_string()))
    );
    assert_eq!(mount.match_label(), "false");
    assert!(!mount.placeholder_visible());
}

#[test]
fn test_empty_string_item_is_still_a_selection() {
    let mut mount = Mount::new(Select::builder(vec![String::new()]).build().unwrap());

    mount.update(|s| s.select(Choice::Item(String::new())));

    assert_eq!(mount.match_label(), "");
    assert!(!mount.placeholder_visible());
}

#[test]
fn test_required_marks_empty_select_invalid() {
    let mut mount = create_select(Attrs {
        required: Some(true),
        ..Default::default()
    });
    assert!(mount.root().has_class("invalid"));

    mount.click_text("Adrian");

    assert!(!mount.root().has_class("invalid"));
    assert!(mount.select().state().is_valid());
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_narrows_rows_and_highlights() {
    let mut mount = create_select(Attrs::default());
    click_match(&mut mount);

    mount.input("Sam");

    let rows = mount.find_by_class("ui-select-choices-row");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].text_content().starts_with("Samantha"));
    let marks = mount.find_by_class("ui-select-highlight");
    assert_eq!(marks.len(), 2);
    assert!(marks.iter().all(|m| m.text_content().eq_ignore_ascii_case("sam")));

    let search = &mount.find_by_class("ui-select-search")[0];
    assert_eq!(search.value(), Some("Sam"));
}

#[test]
fn test_search_matches_any_field() {
    let mut mount = create_select(Attrs::default());
    click_match(&mut mount);

    mount.input("54");

    assert_eq!(mount.select().filtered_items(), vec![people()[5].clone()]);
}

#[test]
fn test_open_clears_search_typed_while_closed() {
    let mut mount = create_select(Attrs::default());
    mount.input("nic");
    assert_eq!(mount.select().filtered_items().len(), 1);

    click_match(&mut mount);

    assert!(mount.is_open());
    assert_eq!(mount.select().state().search(), "");
    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 8);
}

#[test]
fn test_close_resets_search() {
    let mut mount = create_select(Attrs::default());
    click_match(&mut mount);
    mount.input("nic");
    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 1);

    mount.blur();

    assert!(!mount.is_open());
    assert_eq!(mount.select().state().search(), "");
    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 8);
}

#[test]
fn test_items_can_change_after_mount() {
    let mut mount = create_select(Attrs::default());

    mount.update(|s| s.set_items(people().into_iter().take(3).collect()));

    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 3);
    mount.click_text("Samantha");
    assert_eq!(mount.match_label(), "");
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_selection_is_written_to_model() {
    let model = State::default();
    let mut mount = create_select_with(model.clone(), Attrs::default());
    assert!(!model.is_dirty());

    mount.click_text("Samantha");

    assert!(model.is_dirty());
    assert_eq!(model.get(), Some(Choice::Item(people()[3].clone())));

    model.clear_dirty();
    mount.update(|s| s.clear());
    assert!(model.is_dirty());
    assert_eq!(model.get(), None);
    assert!(mount.placeholder_visible());
}

#[test]
fn test_host_pushes_model_value() {
    let model = State::default();
    let mut mount = create_select_with(model.clone(), Attrs::default());

    model.set(Some(Choice::Item(people()[5].clone())));
    mount.update(|s| s.sync_from_model());

    assert_eq!(mount.match_label(), "Natasha");
    assert!(!model.is_dirty());
}

#[test]
fn test_listeners_and_events() {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let changes = Arc::new(Mutex::new(0));

    let sink = Arc::clone(&selected);
    let counter = Arc::clone(&changes);
    let select = person_builder(State::default())
        .on_select(move |choice| {
            if let Choice::Item(p) = choice {
                sink.lock().unwrap().push(p.name);
            }
        })
        .on_change(move |_| *counter.lock().unwrap() += 1)
        .build()
        .unwrap();
    let mut mount = Mount::new(select);

    click_match(&mut mount);
    mount.click_text("Wladimir");
    click_match(&mut mount);
    mount.click_text("Wladimir");

    assert_eq!(*selected.lock().unwrap(), vec!["Wladimir", "Wladimir"]);
    assert_eq!(*changes.lock().unwrap(), 1);

    let kinds: Vec<WidgetEventKind> = mount
        .update(|s| s.drain_events())
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            WidgetEventKind::Open,
            WidgetEventKind::Close,
            WidgetEventKind::Change,
            WidgetEventKind::Select,
            WidgetEventKind::Open,
            WidgetEventKind::Close,
            WidgetEventKind::Select,
        ]
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_build_from_json_config() {
    let config = SelectConfig::from_json(
        r#"{ "id": "who", "placeholder": "Someone", "tagging": true, "filter": "fuzzy" }"#,
    )
    .unwrap();
    let mut mount = Mount::new(Select::builder(people()).config(config).build().unwrap());

    assert!(mount.find("who-match").is_some());
    assert!(mount.select().state().tagging_enabled());

    mount.click("who-match");
    mount.input("natash");
    assert_eq!(mount.select().filtered_items(), vec![people()[5].clone()]);
}

#[test]
fn test_missing_template_is_an_error() {
    let err = SelectBuilder::<Person>::new(people()).build().unwrap_err();
    assert!(matches!(err, SelectError::MissingTemplate("match")));
}

#[test]
fn test_missing_filter_is_an_error() {
    let err = SelectBuilder::<u32>::new(vec![1, 2, 3])
        .match_template(|n: &u32, _cx: &TemplateContext<'_>| Element::text(n.to_string()))
        .choice_template(|n: &u32, _cx: &TemplateContext<'_>| Element::text(n.to_string()))
        .build()
        .unwrap_err();
    assert!(matches!(err, SelectError::MissingFilter));
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_scenario_pick_samantha() {
    let mut mount = create_select(Attrs::default());
    assert_eq!(mount.find_by_class("ui-select-choices-row").len(), 8);
    assert!(mount.placeholder_visible());

    click_match(&mut mount);
    assert!(mount.is_open());

    mount.click_text("Samantha");
    assert!(!mount.is_open());
    assert_eq!(mount.match_label(), "Samantha");
}

#[test]
fn test_scenario_tag_when_tagging() {
    let mut mount = create_select(Attrs {
        tagging: Some(true),
        ..Default::default()
    });

    click_match(&mut mount);
    mount.update(|s| s.select(Choice::tag("I don't exist")));

    assert_eq!(
        mount.select().model().get(),
        Some(Choice::tag("I don't exist"))
    );
    assert!(!mount.is_open());
}
