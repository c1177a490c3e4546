//! Template catalog and visual customization (color, font family, font size).

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Professional,
    Creative,
    Minimalist,
    Academic,
    #[default]
    Modern,
    Executive,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: TemplateId::Professional,
        name: "Professional",
        description: "Clean and professional layout suitable for corporate positions",
    },
    TemplateInfo {
        id: TemplateId::Creative,
        name: "Creative",
        description: "Modern design with creative elements for design and marketing roles",
    },
    TemplateInfo {
        id: TemplateId::Minimalist,
        name: "Minimalist",
        description: "Minimalist approach focusing on content with elegant spacing",
    },
    TemplateInfo {
        id: TemplateId::Academic,
        name: "Academic",
        description: "Structured format ideal for academic and research positions",
    },
    TemplateInfo {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Contemporary design with bold elements and modern typography",
    },
    TemplateInfo {
        id: TemplateId::Executive,
        name: "Executive",
        description: "Sophisticated layout designed for senior management and executive roles",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Colors and fonts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme { id: "blue", name: "Blue", value: "#3b82f6" },
    ColorScheme { id: "green", name: "Green", value: "#10b981" },
    ColorScheme { id: "purple", name: "Purple", value: "#8b5cf6" },
    ColorScheme { id: "red", name: "Red", value: "#ef4444" },
    ColorScheme { id: "gray", name: "Gray", value: "#6b7280" },
    ColorScheme { id: "teal", name: "Teal", value: "#14b8a6" },
    ColorScheme { id: "amber", name: "Amber", value: "#f59e0b" },
    ColorScheme { id: "pink", name: "Pink", value: "#ec4899" },
];

/// Supported font families, matching the template selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Inter,
    Roboto,
    Poppins,
    Merriweather,
    Montserrat,
    Playfair,
    OpenSans,
    Lato,
    Raleway,
}

impl FontFamily {
    pub const ALL: [FontFamily; 9] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::Poppins,
        FontFamily::Merriweather,
        FontFamily::Montserrat,
        FontFamily::Playfair,
        FontFamily::OpenSans,
        FontFamily::Lato,
        FontFamily::Raleway,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FontFamily::Inter => "inter",
            FontFamily::Roboto => "roboto",
            FontFamily::Poppins => "poppins",
            FontFamily::Merriweather => "merriweather",
            FontFamily::Montserrat => "montserrat",
            FontFamily::Playfair => "playfair",
            FontFamily::OpenSans => "opensans",
            FontFamily::Lato => "lato",
            FontFamily::Raleway => "raleway",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::Poppins => "Poppins",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Playfair => "Playfair Display",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Lato => "Lato",
            FontFamily::Raleway => "Raleway",
        }
    }

    pub fn is_serif(&self) -> bool {
        matches!(self, FontFamily::Merriweather | FontFamily::Playfair)
    }

    /// Accepts the selector id ("opensans") or the display name ("Open Sans").
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|font| {
            font.id().eq_ignore_ascii_case(value) || font.display_name().eq_ignore_ascii_case(value)
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn points(&self) -> u8 {
        match self {
            FontSize::Small => 10,
            FontSize::Medium => 11,
            FontSize::Large => 12,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Customization
// ────────────────────────────────────────────────────────────────────────────

/// User-chosen styling as sent by the client. Resolve before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customization {
    /// A color scheme id ("teal") or a `#rrggbb` hex value.
    pub primary_color: String,
    pub font_family: String,
    pub font_size: FontSize,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            font_family: "Inter".to_string(),
            font_size: FontSize::Medium,
        }
    }
}

/// Validated styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub primary_color: String,
    pub font: FontFamily,
    pub font_size: FontSize,
}

impl Customization {
    pub fn resolve(&self) -> Result<ResolvedStyle, AppError> {
        let primary_color = resolve_color(&self.primary_color).ok_or_else(|| {
            AppError::InvalidInput(format!("Unknown color '{}'", self.primary_color))
        })?;
        let font = FontFamily::parse(&self.font_family).ok_or_else(|| {
            AppError::InvalidInput(format!("Unknown font family '{}'", self.font_family))
        })?;
        Ok(ResolvedStyle {
            primary_color,
            font,
            font_size: self.font_size,
        })
    }
}

fn resolve_color(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(scheme) = COLOR_SCHEMES.iter().find(|c| c.id.eq_ignore_ascii_case(value)) {
        return Some(scheme.value.to_string());
    }
    let hex = value.strip_prefix('#')?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", hex.to_ascii_lowercase()))
    } else {
        None
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FontInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// Everything the template picker offers.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub templates: &'static [TemplateInfo],
    pub color_schemes: &'static [ColorScheme],
    pub fonts: Vec<FontInfo>,
    pub font_sizes: Vec<FontSize>,
    pub default_customization: Customization,
}

pub fn catalog() -> Catalog {
    Catalog {
        templates: TEMPLATES,
        color_schemes: COLOR_SCHEMES,
        fonts: FontFamily::ALL
            .iter()
            .map(|f| FontInfo {
                id: f.id(),
                name: f.display_name(),
            })
            .collect(),
        font_sizes: vec![FontSize::Small, FontSize::Medium, FontSize::Large],
        default_customization: Customization::default(),
    }
}
