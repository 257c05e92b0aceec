use crate::presentation::http::forms::FormErrors;
use crate::presentation::views::{attr, esc};

pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub kind: &'a str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn text(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self {
            name,
            label,
            kind: "text",
            value,
        }
    }

    pub fn password(name: &'a str, label: &'a str) -> Self {
        Self {
            name,
            label,
            kind: "password",
            value: "",
        }
    }

    pub fn kind(mut self, kind: &'a str) -> Self {
        self.kind = kind;
        self
    }
}

pub fn input(field: &Field<'_>, errors: &FormErrors) -> String {
    let control = if field.kind == "textarea" {
        format!(
            "<textarea name=\"{name}\" id=\"{name}\" class=\"form-control\" placeholder=\"{label}\">{value}</textarea>",
            name = attr(field.name),
            label = attr(field.label),
            value = esc(field.value),
        )
    } else {
        format!(
            "<input type=\"{kind}\" name=\"{name}\" id=\"{name}\" class=\"form-control\" placeholder=\"{label}\" value=\"{value}\">",
            kind = attr(field.kind),
            name = attr(field.name),
            label = attr(field.label),
            value = attr(field.value),
        )
    };
    let errs: String = errors
        .get(field.name)
        .iter()
        .map(|e| format!("<span class=\"text-danger\">{}</span>\n", esc(e)))
        .collect();
    format!("<div class=\"form-group\">\n{control}\n{errs}</div>\n")
}
