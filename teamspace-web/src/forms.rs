//! Declarative form validation shared by the auth screens.
//!
//! Screens register a rule list per field; the reducer validates a single
//! field on blur, every field on submit, and re-checks dependent fields
//! (password confirmation) whenever the field they depend on changes. A
//! field's first failing rule, in declared order, is the one displayed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use regex::Regex;
use yew::prelude::Reducible;

/// Form name of the primary password field, referenced by the
/// confirmation check.
pub const PASSWORD_FIELD: &str = "password";

/// Phone numbers must be hyphen-grouped digits; an empty value passes.
pub const PHONE_PATTERN: &str = r"^(\d{2,3}-\d{3,4}-\d{4})?$";

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

const PASSWORD_SPECIALS: &str = "@$!%*#?&";
const PASSWORD_MIN_LEN: usize = 8;

thread_local! {
    static COMPILED_PATTERNS: RefCell<HashMap<&'static str, Regex>> =
        RefCell::new(HashMap::new());
}

fn matches_pattern(pattern: &'static str, value: &str) -> bool {
    COMPILED_PATTERNS.with(|cache| {
        let mut cache = cache.borrow_mut();
        let regex = cache
            .entry(pattern)
            .or_insert_with(|| Regex::new(pattern).expect("static validation pattern compiles"));
        regex.is_match(value)
    })
}

/// Password complexity: at least eight characters drawn from letters,
/// digits and the fixed special set, with at least one of each class.
#[must_use]
pub fn password_complexity(value: &str) -> bool {
    value.len() >= PASSWORD_MIN_LEN
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c))
}

/// Confirmation check shared by the signup and password-reset screens: an
/// empty confirmation is left to its required rule, a non-empty one must
/// equal the current primary password value.
#[must_use]
pub fn confirm_matches_password(value: &str, form: &FormState) -> bool {
    value.is_empty() || value == form.value(PASSWORD_FIELD)
}

/// Predicate evaluated against a field value and its sibling fields.
pub type SiblingValidator = fn(&str, &FormState) -> bool;

#[derive(Debug, Clone, PartialEq)]
enum Constraint {
    Required,
    Email,
    Pattern(&'static str),
    Satisfies(SiblingValidator),
}

/// One declarative constraint plus the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    constraint: Constraint,
    message: String,
}

impl ValidationRule {
    /// Value must be non-blank.
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            constraint: Constraint::Required,
            message: message.into(),
        }
    }

    /// A non-empty value must look like an email address. Emptiness is
    /// left to a separate required rule.
    pub fn email(message: impl Into<String>) -> Self {
        Self {
            constraint: Constraint::Email,
            message: message.into(),
        }
    }

    /// Value must match the pattern verbatim, the empty string included.
    pub fn pattern(pattern: &'static str, message: impl Into<String>) -> Self {
        Self {
            constraint: Constraint::Pattern(pattern),
            message: message.into(),
        }
    }

    /// Value must satisfy the predicate, which also sees the sibling
    /// field values.
    pub fn satisfies(check: SiblingValidator, message: impl Into<String>) -> Self {
        Self {
            constraint: Constraint::Satisfies(check),
            message: message.into(),
        }
    }

    fn passes(&self, value: &str, form: &FormState) -> bool {
        match self.constraint {
            Constraint::Required => !value.trim().is_empty(),
            Constraint::Email => value.is_empty() || matches_pattern(EMAIL_PATTERN, value),
            Constraint::Pattern(pattern) => matches_pattern(pattern, value),
            Constraint::Satisfies(check) => check(value, form),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FieldSpec {
    name: String,
    rules: Vec<ValidationRule>,
    dependencies: Vec<String>,
}

/// Values, errors and registered rules of one form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    fields: Vec<FieldSpec>,
}

/// Transitions dispatched by the field components and the submit
/// handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Attach (or replace) a field's rule list and dependency names.
    Register {
        /// Field name.
        field: String,
        /// Ordered rule list; the first failure wins.
        rules: Vec<ValidationRule>,
        /// Names of fields whose edits re-trigger this field's rules.
        dependencies: Vec<String>,
    },
    /// A keystroke changed a field value.
    Input {
        /// Field name.
        field: String,
        /// New raw value.
        value: String,
    },
    /// Focus left a field.
    Blur {
        /// Field name.
        field: String,
    },
    /// Validate every registered field (submit time).
    ValidateAll,
    /// Clear values, errors and touch marks, keeping registrations.
    Reset,
}

impl FormState {
    /// Current raw value of a field (empty when never edited).
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Current validation error of a field.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the user has interacted with the field.
    #[must_use]
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Whether any field currently carries an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// A copy with every registered field marked touched and validated.
    ///
    /// Submit handlers call this to decide synchronously whether the
    /// mutation may fire, then dispatch [`FormAction::ValidateAll`] so
    /// the same result is displayed.
    #[must_use]
    pub fn validated(&self) -> Self {
        let mut next = self.clone();
        let names: Vec<String> = next.fields.iter().map(|spec| spec.name.clone()).collect();
        for name in names {
            next.touched.insert(name.clone());
            next.revalidate(&name);
        }
        next
    }

    fn failure_for(&self, field: &str) -> Option<String> {
        let spec = self.fields.iter().find(|spec| spec.name == field)?;
        let value = self.value(field).to_string();
        spec.rules
            .iter()
            .find(|rule| !rule.passes(&value, self))
            .map(|rule| rule.message.clone())
    }

    fn revalidate(&mut self, field: &str) {
        match self.failure_for(field) {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    fn dependents_of(&self, field: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|spec| {
                spec.dependencies.iter().any(|dep| dep == field) && self.touched.contains(&spec.name)
            })
            .map(|spec| spec.name.clone())
            .collect()
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Register {
                field,
                rules,
                dependencies,
            } => {
                if let Some(spec) = next.fields.iter_mut().find(|spec| spec.name == field) {
                    spec.rules = rules;
                    spec.dependencies = dependencies;
                } else {
                    next.fields.push(FieldSpec {
                        name: field,
                        rules,
                        dependencies,
                    });
                }
            }
            FormAction::Input { field, value } => {
                next.values.insert(field.clone(), value);
                if next.touched.contains(&field) {
                    next.revalidate(&field);
                }
                for dependent in next.dependents_of(&field) {
                    next.revalidate(&dependent);
                }
            }
            FormAction::Blur { field } => {
                next.touched.insert(field.clone());
                next.revalidate(&field);
            }
            FormAction::ValidateAll => {
                next = next.validated();
            }
            FormAction::Reset => {
                next.values.clear();
                next.errors.clear();
                next.touched.clear();
            }
        }
        Rc::new(next)
    }
}
