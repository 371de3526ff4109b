//! Checkout form field vocabulary.
//!
//! The selector and candidate lists here encode how hosted checkout pages
//! actually name their shipping fields. Order matters everywhere: earlier
//! entries are more specific or more common and win ties.

use strum_macros::EnumIter as EnumIterMacro;

/// Selectors that locate a shipping address form on a checkout page,
/// in priority order.
pub const FORM_SELECTORS: &[&str] = &[
    "[data-shipping-address]",
    "#shipping-address",
    r#"form[action*="checkout"]"#,
    ".checkout-form",
    "#checkout_shipping_address",
    "form[data-checkout-form]",
    ".step__sections [data-shipping]",
    r#"[data-section="shipping-address"]"#,
];

/// Selectors for a single free-text full-address field, in priority order.
pub const FULL_ADDRESS_SELECTORS: &[&str] = &[
    r#"[name="address"]"#,
    r#"[name="shipping_address_full"]"#,
    r#"textarea[name*="address"]"#,
];

/// The structured address fields a checkout form can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIterMacro)]
pub enum LogicalField {
    /// Primary street line.
    Address1,
    /// Secondary street line.
    Address2,
    /// City.
    City,
    /// State or province.
    State,
    /// Postal code.
    Zip,
    /// Country.
    Country,
}

impl LogicalField {
    /// Returns a stable label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalField::Address1 => "address1",
            LogicalField::Address2 => "address2",
            LogicalField::City => "city",
            LogicalField::State => "state",
            LogicalField::Zip => "zip",
            LogicalField::Country => "country",
        }
    }

    /// Name/id candidates for this field, in priority order.
    ///
    /// Each candidate is tried as both a `name` attribute and an element id;
    /// the first element found wins.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Address1 => &[
                "address1",
                "shipping_address",
                "checkout[shipping_address][address1]",
            ],
            LogicalField::Address2 => &[
                "address2",
                "shipping_address_2",
                "checkout[shipping_address][address2]",
            ],
            LogicalField::City => &["city", "shipping_city", "checkout[shipping_address][city]"],
            LogicalField::State => &[
                "state",
                "shipping_state",
                "checkout[shipping_address][state]",
            ],
            LogicalField::Zip => &[
                "zip",
                "shipping_zip",
                "postal_code",
                "checkout[shipping_address][zip]",
            ],
            LogicalField::Country => &[
                "country",
                "shipping_country",
                "checkout[shipping_address][country]",
            ],
        }
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
