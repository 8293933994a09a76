//! The sample candidates offered by the demo.

use uiselect::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: &'static str,
    pub email: &'static str,
    pub age: u32,
}

impl SelectItem for Person {
    fn select_label(&self) -> String {
        self.name.to_string()
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.age)
    }
}

pub fn people() -> Vec<Person> {
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

/// A person picker: name in the match view, name and email in each row.
pub fn person_select(config: SelectConfig) -> Result<Select<Person>, SelectError> {
    Select::builder(people())
        .config(config)
        .match_template(|p: &Person, _cx: &TemplateContext<'_>| Element::text(p.name))
        .choice_template(|p: &Person, cx: &TemplateContext<'_>| {
            Element::div()
                .child(Element::div().class("name").child(highlight(p.name, cx.search)))
                .child(
                    Element::div()
                        .class("email")
                        .child(highlight(p.email, cx.search)),
                )
        })
        .on_select(|choice| log::info!("selected {:?}", choice))
        .build()
}
