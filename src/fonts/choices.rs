//! Curated font lists offered to the user.
use serde::Serialize;

/// A selectable font option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontChoice {
    /// Family name passed to the font loaders.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
    /// Optional secondary text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

const GOOGLE_FONTS: [&str; 10] = [
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Poppins",
    "Inter",
    "Raleway",
    "Nunito",
    "Oswald",
    "Playfair Display",
];

/// Popular Google Fonts families, in display order.
#[must_use]
pub fn google_font_choices() -> Vec<FontChoice> {
    GOOGLE_FONTS
        .iter()
        .map(|&name| FontChoice {
            value: name,
            label: name,
            hint: None,
        })
        .collect()
}

/// Weights of the Xiroi brand typeface, lightest first.
#[must_use]
pub fn xiroi_font_choices() -> Vec<FontChoice> {
    vec![
        FontChoice {
            value: "TT Satoshi Regular",
            label: "Regular",
            hint: Some("Regular weight"),
        },
        FontChoice {
            value: "TT Satoshi Medium",
            label: "Medium",
            hint: Some("Medium weight"),
        },
        FontChoice {
            value: "TT Satoshi DemiBold",
            label: "DemiBold",
            hint: Some("Bold weight"),
        },
    ]
}
