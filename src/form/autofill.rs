//! The form fill engine.
//!
//! Writes a resolved address into a discovered form through a [`FormSink`],
//! the seam between fill logic and whatever actually mutates the page. Fill
//! order, event notifications and highlighting all happen here; the sink
//! only executes primitive operations.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::time::Duration;

use strum::IntoEnumIterator;

use crate::config::HIGHLIGHT_DURATION;
use crate::form::discovery::{DiscoveredForm, FieldTarget};
use crate::form::fields::LogicalField;
use crate::geocode::ResolvedAddress;

/// DOM-style notifications emitted after a field value is written.
///
/// Checkout pages re-validate on these, so both are emitted for every
/// structured field write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNotification {
    /// The value changed as if typed.
    Input,
    /// The field lost focus with a new value.
    Change,
}

/// Primitive form mutations, implemented by whatever owns the real page.
///
/// The fill engine drives this trait; implementations decide what "set a
/// value" means for their environment (a live DOM, a headless snapshot, a
/// test recorder).
pub trait FormSink {
    /// Writes `value` into the element addressed by `target`.
    fn set_value(&mut self, target: &FieldTarget, value: &str);

    /// Emits a change notification for the element addressed by `target`.
    fn notify(&mut self, target: &FieldTarget, notification: FieldNotification);

    /// Applies a transient visual highlight to the element for `duration`.
    fn highlight(&mut self, target: &FieldTarget, duration: Duration);
}

/// What a fill pass accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// Number of writes performed, full-address field included.
    pub filled_count: usize,
    /// Structured fields that had a non-empty value to offer, whether or not
    /// the form had somewhere to put it.
    pub attempted_fields: BTreeSet<LogicalField>,
}

/// Writes `address` into `form` through `sink`.
///
/// Every structured field with a non-empty value and a located target is
/// written, notified (input then change) and highlighted. The country field
/// prefers the ISO code over the display name so `<select>` elements keyed by
/// code match. When the form has no structured address-line fields at all,
/// the formatted single-line address is written to the full-address field
/// instead, with only an input notification, matching how free-text fields
/// behave on the hosted checkouts this was built against.
///
/// Filling is idempotent: a second pass with the same address rewrites the
/// same values.
pub fn fill(form: &DiscoveredForm, address: &ResolvedAddress, sink: &mut dyn FormSink) -> FillReport {
    let mut filled_count = 0;
    let mut attempted_fields = BTreeSet::new();

    for field in LogicalField::iter() {
        let value = field_value(field, address);
        if value.is_empty() {
            continue;
        }
        attempted_fields.insert(field);

        if let Some(target) = form.field(field) {
            write_field(sink, target, value);
            filled_count += 1;
            log::debug!("filled {} => {}", field, value);
        }
    }

    let no_address_lines = form.field(LogicalField::Address1).is_none()
        && form.field(LogicalField::Address2).is_none();
    if no_address_lines && !address.formatted.is_empty() {
        if let Some(target) = form.full_address() {
            sink.set_value(target, &address.formatted);
            sink.notify(target, FieldNotification::Input);
            filled_count += 1;
            log::debug!("filled full address field {}", target.identifier);
        }
    }

    log::info!(
        "filled {} field(s), {} attempted",
        filled_count,
        attempted_fields.len()
    );
    FillReport {
        filled_count,
        attempted_fields,
    }
}

fn write_field(sink: &mut dyn FormSink, target: &FieldTarget, value: &str) {
    sink.set_value(target, value);
    sink.notify(target, FieldNotification::Input);
    sink.notify(target, FieldNotification::Change);
    sink.highlight(target, HIGHLIGHT_DURATION);
}

fn field_value<'a>(field: LogicalField, address: &'a ResolvedAddress) -> &'a str {
    let components = &address.components;
    match field {
        LogicalField::Address1 => &components.address1,
        LogicalField::Address2 => &components.address2,
        LogicalField::City => &components.city,
        LogicalField::State => &components.state,
        LogicalField::Zip => &components.zip,
        LogicalField::Country => {
            // Country selects are keyed by ISO code when the provider knows it
            if components.country_code.is_empty() {
                &components.country
            } else {
                &components.country_code
            }
        }
    }
}

/// Everything a fill pass did to a sink, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A value write.
    Value {
        /// Identifier of the written element.
        identifier: String,
        /// The value that was written.
        value: String,
    },
    /// A change notification.
    Notified {
        /// Identifier of the notified element.
        identifier: String,
        /// Which notification was emitted.
        notification: FieldNotification,
    },
    /// A transient highlight.
    Highlighted {
        /// Identifier of the highlighted element.
        identifier: String,
        /// How long the highlight lasts.
        duration: Duration,
    },
}

/// An in-memory [`FormSink`] holding field values as plain state.
///
/// Backs headless runs and tests; records every operation in order so
/// callers can assert on exactly what a fill pass did.
#[derive(Debug, Default)]
pub struct InMemoryForm {
    values: BTreeMap<String, String>,
    events: Vec<SinkEvent>,
}

impl InMemoryForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the element addressed by `identifier`.
    pub fn value(&self, identifier: &str) -> Option<&str> {
        self.values.get(identifier).map(String::as_str)
    }

    /// Every operation performed on this sink, in order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// True when a change notification was emitted for `identifier`.
    pub fn change_notified(&self, identifier: &str) -> bool {
        self.events.iter().any(|event| {
            matches!(
                event,
                SinkEvent::Notified { identifier: id, notification: FieldNotification::Change }
                    if id == identifier
            )
        })
    }
}

impl FormSink for InMemoryForm {
    fn set_value(&mut self, target: &FieldTarget, value: &str) {
        self.values
            .insert(target.identifier.clone(), value.to_string());
        self.events.push(SinkEvent::Value {
            identifier: target.identifier.clone(),
            value: value.to_string(),
        });
    }

    fn notify(&mut self, target: &FieldTarget, notification: FieldNotification) {
        self.events.push(SinkEvent::Notified {
            identifier: target.identifier.clone(),
            notification,
        });
    }

    fn highlight(&mut self, target: &FieldTarget, duration: Duration) {
        self.events.push(SinkEvent::Highlighted {
            identifier: target.identifier.clone(),
            duration,
        });
    }
}
