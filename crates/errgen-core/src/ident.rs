//! Identifier allocation
//!
//! Every declared field gets `base + position` as its id, whether or not it
//! produces code. Retiring a field with `obsoleted` (instead of deleting it)
//! therefore leaves every other identifier where it was, and operators can
//! keep grepping logs for the same `[ERR-n]` tag.

use crate::annotation::{DecodedField, Parameter, decode};
use crate::error::{GenerateError, GenerateResult};
use crate::locate::FieldSpec;
use std::fmt;
use tracing::{debug, warn};

/// Externally visible identifier, `<prefix><id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub prefix: String,
    pub id: u32,
}

impl Identifier {
    pub fn new(prefix: impl Into<String>, id: u32) -> Self {
        Self {
            prefix: prefix.into(),
            id,
        }
    }

    /// Bracketed form that starts every generated message, e.g. `[ERR-1]`.
    ///
    /// Tags are prefix-free: `[ERR-1]` never prefixes `[ERR-10]`.
    pub fn tag(&self) -> String {
        format!("[{self}]")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.id)
    }
}

/// Running id counter, passed by value through the field fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    pub const fn new(base: u32) -> Self {
        Self { next: base }
    }

    /// Hand out the current id and the counter for the following field.
    ///
    /// Returns `None` when the following id would not fit in a `u32`.
    pub fn take(self) -> (u32, Option<IdCounter>) {
        (self.next, self.next.checked_add(1).map(IdCounter::new))
    }
}

/// One emittable error definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Originating field name.
    pub field: String,
    pub identifier: Identifier,
    /// `<tag> <template>` with placeholders unexpanded.
    pub core_template: String,
    pub parameters: Vec<Parameter>,
}

impl MessageRecord {
    fn new(field: &str, identifier: Identifier, decoded: DecodedField) -> Self {
        let core_template = format!("{} {}", identifier.tag(), decoded.message_template);
        Self {
            field: field.to_string(),
            identifier,
            core_template,
            parameters: decoded.parameters,
        }
    }

    /// The declared message, without the leading tag.
    pub fn message_template(&self) -> &str {
        let tag = self.identifier.tag();
        self.core_template
            .strip_prefix(tag.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .unwrap_or(&self.core_template)
    }
}

/// Decode every field and allocate identifiers in declaration order.
///
/// Obsoleted and templateless fields consume an id but yield no record.
/// The first fatal decode error aborts the whole allocation.
pub fn allocate(
    fields: &[FieldSpec],
    prefix: &str,
    base: u32,
) -> GenerateResult<Vec<MessageRecord>> {
    let (records, _) = fields.iter().try_fold(
        (Vec::new(), Some(IdCounter::new(base))),
        |(mut records, counter), field| {
            let counter = counter.ok_or_else(|| GenerateError::IdOverflow {
                field: field.name.clone(),
            })?;
            let (id, next) = counter.take();
            let decoded = decode(field)?;

            if decoded.obsoleted {
                debug!(field = %field.name, id, "skipping obsoleted field");
            } else if decoded.message_template.is_empty() {
                warn!(field = %field.name, id, "`errmsg` annotation is missing, skipping field");
            } else {
                let identifier = Identifier::new(prefix, id);
                debug!(field = %field.name, identifier = %identifier, "allocated identifier");
                records.push(MessageRecord::new(&field.name, identifier, decoded));
            }

            Ok::<_, GenerateError>((records, next))
        },
    )?;

    Ok(records)
}
