//! Labelled form inputs that show the validation error for their field.

use dioxus::prelude::*;

fn input_class(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    }
}

#[component]
fn FieldError(#[props(!optional)] error: Option<String>) -> Element {
    rsx!(if let Some(error) = error {
        div {
            class: "text-error text-sm",
            "{error}"
        }
    })
}

#[component]
pub fn TextField(
    label: String,
    name: String,
    value: String,
    #[props(!optional)] error: Option<String>,
) -> Element {
    rsx!(div {
        class: "form-control",
        label {
            class: "label",
            r#for: "{name}",
            span { class: "label-text", "{label}" }
        }
        input {
            r#type: "text",
            class: input_class(&error),
            id: "{name}",
            name: "{name}",
            value: "{value}",
        }
        FieldError { error: error.clone() }
    })
}

/// Single choice among `options`, with an empty placeholder option first.
#[component]
pub fn SelectField(
    label: String,
    name: String,
    options: Vec<String>,
    selected: String,
    #[props(!optional)] error: Option<String>,
) -> Element {
    rsx!(div {
        class: "form-control",
        label {
            class: "label",
            r#for: "{name}",
            span { class: "label-text", "{label}" }
        }
        select {
            class: "select select-bordered w-full",
            id: "{name}",
            name: "{name}",
            option { value: "", "" }
            for choice in options {
                option {
                    selected: choice == selected,
                    value: "{choice}",
                    "{choice}"
                }
            }
        }
        FieldError { error }
    })
}

/// Multiple choice submitted as one `name=value` pair per selected option.
#[component]
pub fn MultiSelectField(
    label: String,
    name: String,
    options: Vec<String>,
    selected: Vec<String>,
    #[props(!optional)] error: Option<String>,
) -> Element {
    rsx!(div {
        class: "form-control",
        label {
            class: "label",
            r#for: "{name}",
            span { class: "label-text", "{label}" }
        }
        select {
            class: "select select-bordered w-full",
            id: "{name}",
            name: "{name}",
            multiple: true,
            size: "8",
            for choice in options {
                option {
                    selected: selected.contains(&choice),
                    value: "{choice}",
                    "{choice}"
                }
            }
        }
        FieldError { error }
    })
}

#[component]
pub fn CheckboxField(label: String, name: String, checked: bool) -> Element {
    rsx!(div {
        class: "form-control",
        label {
            class: "label cursor-pointer justify-start gap-2",
            input {
                r#type: "checkbox",
                class: "checkbox",
                name: "{name}",
                value: "y",
                checked: checked,
            }
            span { class: "label-text", "{label}" }
        }
    })
}
