//! The "add todo" form and its validation rules.

use thiserror::Error;

use crate::model::NewTodo;

/// Values that collide with seeded test data and are rejected in every text field.
const RESERVED: [&str; 2] = ["abc123", "123abc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Owner,
    Status,
    Category,
    Body,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Owner => "Owner name",
            Field::Status => "Status",
            Field::Category => "Category",
            Field::Body => "Description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Status must read `true` or `false`.
    Pattern,
    /// The value is one of the reserved test values.
    Existing,
}

/// One failed rule on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", describe(.field, .rule))]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl FieldError {
    /// The message shown under the field.
    pub fn message(&self) -> String {
        describe(&self.field, &self.rule)
    }
}

fn describe(field: &Field, rule: &Rule) -> String {
    let label = field.label();
    match *rule {
        Rule::Required => format!("{label} is required"),
        Rule::MinLength(n) => format!("{label} must be at least {n} characters long"),
        Rule::MaxLength(n) => format!("{label} cannot be more than {n} characters long"),
        Rule::Pattern => "A todo must be complete or incomplete".to_string(),
        Rule::Existing => format!("{label} is already taken"),
    }
}

/// Every failed rule of a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid todo: {}", join_messages(.0))]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn has(&self, field: Field, rule: Rule) -> bool {
        self.0.iter().any(|e| e.field == field && e.rule == rule)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw text the user typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub owner: String,
    /// `"true"` or `"false"`.
    pub status: String,
    pub category: String,
    pub body: String,
}

impl TodoForm {
    /// Errors for a single field; empty when the field is valid.
    pub fn field_errors(&self, field: Field) -> Vec<FieldError> {
        let rules: Vec<Rule> = match field {
            Field::Owner => text_rules(&self.owner, 2, 50),
            Field::Category => text_rules(&self.category, 5, 50),
            Field::Body => text_rules(&self.body, 2, 500),
            Field::Status => {
                if self.status.is_empty() {
                    vec![Rule::Required]
                } else if parse_status(&self.status).is_none() {
                    vec![Rule::Pattern]
                } else {
                    Vec::new()
                }
            }
        };
        rules
            .into_iter()
            .map(|rule| FieldError { field, rule })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        [Field::Owner, Field::Status, Field::Category, Field::Body]
            .into_iter()
            .all(|f| self.field_errors(f).is_empty())
    }

    /// Check every rule and build the creation payload.
    pub fn validate(&self) -> Result<NewTodo, FormErrors> {
        let errors: Vec<FieldError> = [Field::Owner, Field::Status, Field::Category, Field::Body]
            .into_iter()
            .flat_map(|f| self.field_errors(f))
            .collect();

        match parse_status(&self.status) {
            Some(status) if errors.is_empty() => Ok(NewTodo {
                owner: self.owner.clone(),
                status,
                category: self.category.clone(),
                body: self.body.clone(),
            }),
            _ => Err(FormErrors(errors)),
        }
    }
}

fn parse_status(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

// Length rules only apply once something has been typed.
fn text_rules(value: &str, min: usize, max: usize) -> Vec<Rule> {
    if value.is_empty() {
        return vec![Rule::Required];
    }
    let mut rules = Vec::new();
    // Counted in chars, not UTF-16 units.
    let len = value.chars().count();
    if len < min {
        rules.push(Rule::MinLength(min));
    }
    if len > max {
        rules.push(Rule::MaxLength(max));
    }
    let lowered = value.to_lowercase();
    if RESERVED.contains(&lowered.as_str()) {
        rules.push(Rule::Existing);
    }
    rules
}
