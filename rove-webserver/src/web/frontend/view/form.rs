use std::collections::HashMap;

use maud::{html, Markup};
use rocket::form::Context;

/// Values and validation errors of a submitted (or prefilled) form.
#[derive(Debug, Default)]
pub struct FormData {
    values: HashMap<&'static str, String>,
    errors: HashMap<&'static str, Vec<String>>,
}

impl FormData {
    pub fn from_context(context: &Context<'_>, fields: &[&'static str]) -> Self {
        let mut data = Self::default();
        for &name in fields {
            if let Some(value) = context.field_value(name) {
                data.values.insert(name, value.to_string());
            }
            let errors: Vec<_> = context
                .field_errors(name)
                .map(ToString::to_string)
                .collect();
            if !errors.is_empty() {
                data.errors.insert(name, errors);
            }
        }
        data
    }

    pub fn with_value(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn with_error(mut self, name: &'static str, error: impl Into<String>) -> Self {
        self.errors.entry(name).or_default().push(error.into());
        self
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn field_errors(data: &FormData, name: &str) -> Markup {
    html! {
        @for err in data.errors(name) {
            span class="error" { (err) }
        }
    }
}

pub fn text_field(data: &FormData, name: &str, label: &str, max_len: usize) -> Markup {
    html! {
        label {
            (label)
            br;
            input type="text" name=(name) value=(data.value(name)) maxlength=(max_len);
        }
        (field_errors(data, name))
        br;
    }
}

/// Passwords are never echoed back.
pub fn password_field(data: &FormData, name: &str, label: &str) -> Markup {
    html! {
        label {
            (label)
            br;
            input type="password" name=(name);
        }
        (field_errors(data, name))
        br;
    }
}

pub fn text_area(data: &FormData, name: &str, label: &str, max_len: usize) -> Markup {
    html! {
        label {
            (label)
            br;
            textarea name=(name) maxlength=(max_len) rows="4" { (data.value(name)) }
        }
        (field_errors(data, name))
        br;
    }
}

pub fn number_field(data: &FormData, name: &str, label: &str, min: u32, max: Option<u32>) -> Markup {
    html! {
        label {
            (label)
            br;
            input type="number" name=(name) value=(data.value(name)) min=(min) max=[max];
        }
        (field_errors(data, name))
        br;
    }
}

pub fn image_field(data: &FormData, name: &str, label: &str) -> Markup {
    html! {
        label {
            (label)
            br;
            input type="file" name=(name) accept=".jpg,.jpeg,.png";
        }
        (field_errors(data, name))
        br;
    }
}
