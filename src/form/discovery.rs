//! Shipping form discovery.
//!
//! Parses a checkout page and locates the shipping address form, the
//! fillable fields inside it, and the page language. Parsing happens once
//! per page; the result is a plain-data snapshot that can cross await
//! points, since parsed HTML documents cannot.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use strum::IntoEnumIterator;

use crate::form::fields::{LogicalField, FORM_SELECTORS, FULL_ADDRESS_SELECTORS};

static HTML_ROOT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("html").unwrap_or_else(|e| {
        log::error!("Failed to parse html root selector: {}", e);
        // Return a safe default selector that matches nothing
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
});

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). This prevents panics while allowing discovery to continue
/// with the remaining candidates.
fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

/// How a field element was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Matched on its `name` attribute.
    Name,
    /// Matched on its element id.
    Id,
}

/// A locatable form element, addressed the way it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTarget {
    /// The name or id value that located the element.
    pub identifier: String,
    /// Whether `identifier` is a name attribute or an element id.
    pub matched_by: MatchKind,
}

/// Snapshot of a discovered shipping form.
///
/// Owns no parser state; safe to hold across await points and hand to the
/// fill engine.
#[derive(Debug, Clone)]
pub struct DiscoveredForm {
    fields: BTreeMap<LogicalField, FieldTarget>,
    full_address: Option<FieldTarget>,
    page_language: Option<String>,
}

impl DiscoveredForm {
    /// The target located for `field`, when one was found.
    pub fn field(&self, field: LogicalField) -> Option<&FieldTarget> {
        self.fields.get(&field)
    }

    /// The free-text full-address target, when one was found.
    pub fn full_address(&self) -> Option<&FieldTarget> {
        self.full_address.as_ref()
    }

    /// Primary language subtag declared by the page, lowercased.
    pub fn page_language(&self) -> Option<&str> {
        self.page_language.as_deref()
    }

    /// Number of structured fields located.
    pub fn located_count(&self) -> usize {
        self.fields.len()
    }

    /// True when neither structured fields nor a full-address field were found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.full_address.is_none()
    }
}

/// Locates the shipping address form and its fields in a checkout page.
///
/// Returns `None` when no form container matches any of the known selectors;
/// the widget does not mount in that case. A matched container with zero
/// locatable fields still counts as discovered.
pub fn discover(html: &str) -> Option<DiscoveredForm> {
    let document = Html::parse_document(html);
    let form = find_form(&document)?;

    let mut fields = BTreeMap::new();
    for field in LogicalField::iter() {
        if let Some(target) = find_field(form, field) {
            log::debug!(
                "located {} field via {}: {}",
                field,
                match target.matched_by {
                    MatchKind::Name => "name",
                    MatchKind::Id => "id",
                },
                target.identifier
            );
            fields.insert(field, target);
        }
    }

    let full_address = find_full_address(form);
    let page_language = extract_page_language(&document);

    Some(DiscoveredForm {
        fields,
        full_address,
        page_language,
    })
}

fn find_form(document: &Html) -> Option<ElementRef<'_>> {
    for selector_str in FORM_SELECTORS {
        let selector = parse_selector_with_fallback(selector_str, "form discovery");
        if let Some(form) = document.select(&selector).next() {
            log::debug!("found shipping form via selector: {}", selector_str);
            return Some(form);
        }
    }
    None
}

fn find_field(form: ElementRef<'_>, field: LogicalField) -> Option<FieldTarget> {
    for candidate in field.candidates() {
        // Try the candidate as a name attribute and as an element id in one query,
        // mirroring how checkout themes address these fields
        let selector_str = format!(r#"[name="{candidate}"], #{candidate}"#);
        let selector = parse_selector_with_fallback(&selector_str, "field lookup");
        if let Some(element) = form.select(&selector).next() {
            let matched_by = if element.value().attr("name") == Some(*candidate) {
                MatchKind::Name
            } else {
                MatchKind::Id
            };
            return Some(FieldTarget {
                identifier: (*candidate).to_string(),
                matched_by,
            });
        }
    }
    None
}

fn find_full_address(form: ElementRef<'_>) -> Option<FieldTarget> {
    for selector_str in FULL_ADDRESS_SELECTORS {
        let selector = parse_selector_with_fallback(selector_str, "full address lookup");
        for element in form.select(&selector) {
            // Address the element by name when it has one, otherwise by id
            if let Some(name) = element.value().attr("name") {
                return Some(FieldTarget {
                    identifier: name.to_string(),
                    matched_by: MatchKind::Name,
                });
            }
            if let Some(id) = element.value().attr("id") {
                return Some(FieldTarget {
                    identifier: id.to_string(),
                    matched_by: MatchKind::Id,
                });
            }
        }
    }
    None
}

fn extract_page_language(document: &Html) -> Option<String> {
    document
        .select(&HTML_ROOT_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("lang"))
        .and_then(|lang| lang.split(['-', '_']).next())
        .map(|subtag| subtag.trim().to_lowercase())
        .filter(|subtag| !subtag.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKOUT_PAGE: &str = r#"
        <html lang="en-US">
          <body>
            <input name="city" value="decoy outside the form">
            <form data-shipping-address action="/submit">
              <input name="address1">
              <input name="shipping_city">
              <input id="state">
              <input name="postal_code">
              <select name="country"></select>
              <textarea name="full_address_notes"></textarea>
            </form>
          </body>
        </html>
    "#;

    #[test]
    fn test_discovers_fields_inside_the_form() {
        let form = discover(CHECKOUT_PAGE).unwrap();

        let address1 = form.field(LogicalField::Address1).unwrap();
        assert_eq!(address1.identifier, "address1");
        assert_eq!(address1.matched_by, MatchKind::Name);

        // Second candidate wins when the first is absent
        let city = form.field(LogicalField::City).unwrap();
        assert_eq!(city.identifier, "shipping_city");

        // Id-only elements are matched by id
        let state = form.field(LogicalField::State).unwrap();
        assert_eq!(state.matched_by, MatchKind::Id);

        let zip = form.field(LogicalField::Zip).unwrap();
        assert_eq!(zip.identifier, "postal_code");

        assert!(form.field(LogicalField::Address2).is_none());
        assert_eq!(form.located_count(), 5);
    }

    #[test]
    fn test_first_candidate_outranks_later_ones() {
        let html = r#"
            <form class="checkout-form">
              <input name="shipping_city">
              <input name="city">
            </form>
        "#;
        let form = discover(html).unwrap();
        assert_eq!(form.field(LogicalField::City).unwrap().identifier, "city");
    }

    #[test]
    fn test_decoy_outside_the_form_is_ignored() {
        let html = r#"
            <input name="address1" id="outside">
            <div data-shipping-address>
              <input name="zip">
            </div>
        "#;
        let form = discover(html).unwrap();
        assert!(form.field(LogicalField::Address1).is_none());
        assert!(form.field(LogicalField::Zip).is_some());
    }

    #[test]
    fn test_no_form_container_means_no_mount() {
        let html = "<html><body><input name='address1'></body></html>";
        assert!(discover(html).is_none());
    }

    #[test]
    fn test_form_selector_priority_order() {
        // Both containers exist; the earlier selector in the list wins
        let html = r#"
            <div class="checkout-form"><input name="city"></div>
            <div data-shipping-address><input name="state"></div>
        "#;
        let form = discover(html).unwrap();
        assert!(form.field(LogicalField::State).is_some());
        assert!(form.field(LogicalField::City).is_none());
    }

    #[test]
    fn test_full_address_textarea_is_found() {
        let html = r#"
            <form action="/checkout/complete">
              <textarea name="delivery_address_details"></textarea>
            </form>
        "#;
        let form = discover(html).unwrap();
        let full = form.full_address().unwrap();
        assert_eq!(full.identifier, "delivery_address_details");
        assert_eq!(full.matched_by, MatchKind::Name);
    }

    #[test]
    fn test_page_language_takes_primary_subtag() {
        let form = discover(CHECKOUT_PAGE).unwrap();
        assert_eq!(form.page_language(), Some("en"));
    }

    #[test]
    fn test_missing_lang_attribute_yields_none() {
        let html = r#"<html><body><div id="shipping-address"></div></body></html>"#;
        let form = discover(html).unwrap();
        assert_eq!(form.page_language(), None);
        assert!(form.is_empty());
    }
}
