//! Draft validation
//!
//! Every submit attempt re-runs all three field checks so the user sees
//! the full set of problems at once. A draft that fails validation must
//! never reach the network.

use thiserror::Error;

use crate::record::RecordDraft;

pub const NAME_ERROR: &str = "please enter a name";
pub const AGE_ERROR: &str = "please enter a valid age";
pub const COLOUR_ERROR: &str = "please enter a colour";

/// Field-scoped validation failures for one submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.name, .age, .colour))]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub age: Option<&'static str>,
    pub colour: Option<&'static str>,
}

fn summarize(
    name: &Option<&'static str>,
    age: &Option<&'static str>,
    colour: &Option<&'static str>,
) -> String {
    [("name", *name), ("age", *age), ("colour", *colour)]
        .into_iter()
        .filter_map(|(field, message)| message.map(|m| format!("{field}: {m}")))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// All failing fields with their messages, in display order
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        if let Some(message) = self.name {
            out.push(("name", message));
        }
        if let Some(message) = self.age {
            out.push(("age", message));
        }
        if let Some(message) = self.colour {
            out.push(("colour", message));
        }
        out
    }

    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.colour.is_none()
    }
}

/// Validate a draft before create/update submission
///
/// Checks all fields rather than stopping at the first failure:
/// - `name` must be non-empty
/// - `age` must be positive
/// - `colour` must be non-empty
pub fn validate(draft: &RecordDraft) -> Result<(), ValidationErrors> {
    let errors = ValidationErrors {
        name: draft.name.trim().is_empty().then_some(NAME_ERROR),
        age: (draft.age == 0).then_some(AGE_ERROR),
        colour: draft.colour.trim().is_empty().then_some(COLOUR_ERROR),
    };

    if errors.is_clear() { Ok(()) } else { Err(errors) }
}
