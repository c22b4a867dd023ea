//! Domain records shared by the Tatvapada archive admin console.
//!
//! Everything here is plain serde data passed between the REST backend and
//! the Yew frontend. The crate compiles on both native and wasm32 targets so
//! the validation and cart logic can be unit-tested off the browser.

use serde::{Deserialize, Serialize};

pub mod cart;
pub mod money;
pub mod validate;

pub use cart::{Cart, CartLine};
pub use money::{format_paise, parse_rupees};
pub use validate::{Validate, ValidationError};

/// A volume of the archive. The volume number is kept as a string because the
/// backend uses it verbatim as a path key ("1", "2a", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samputa {
    pub samputa_sankhye: String,
    pub title: String,
    #[serde(default)]
    pub editor: Option<String>,
}

/// Author of one or more tatvapadas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tatvapadakara {
    pub hesaru: String,
    #[serde(default)]
    pub kavi_parichaya: Option<String>,
}

/// Listing row for a verse: enough to render the third cascade level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TatvapadaSummary {
    pub samputa_sankhye: String,
    pub tatvapada_sankhye: String,
    pub tatvapadakara_hesaru: String,
    pub modala_salu: String,
}

/// Full verse record as edited in the admin form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tatvapada {
    pub samputa_sankhye: String,
    pub tatvapada_sankhye: String,
    pub tatvapadakara_hesaru: String,
    pub modala_salu: String,
    pub content: String,
    #[serde(default)]
    pub bhavanuvada: Option<String>,
    #[serde(default)]
    pub klishta_padagalu: Option<String>,
}

impl From<Tatvapada> for TatvapadaSummary {
    fn from(t: Tatvapada) -> Self {
        let modala_salu = if t.modala_salu.trim().is_empty() {
            t.content.lines().next().unwrap_or_default().to_string()
        } else {
            t.modala_salu
        };
        TatvapadaSummary {
            samputa_sankhye: t.samputa_sankhye,
            tatvapada_sankhye: t.tatvapada_sankhye,
            tatvapadakara_hesaru: t.tatvapadakara_hesaru,
            modala_salu,
        }
    }
}

/// The four glossary sub-resources of the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlossaryKind {
    Arthakosha,
    Padavivarana,
    Tippani,
    Paribhashika,
}

impl GlossaryKind {
    /// Path segment the backend uses for this sub-resource.
    pub fn path_segment(self) -> &'static str {
        match self {
            GlossaryKind::Arthakosha => "arthakosha",
            GlossaryKind::Padavivarana => "padavivarana",
            GlossaryKind::Tippani => "tippani",
            GlossaryKind::Paribhashika => "paribhashika",
        }
    }

    /// Kannada display label for the kind selector.
    pub fn label(self) -> &'static str {
        match self {
            GlossaryKind::Arthakosha => "ಅರ್ಥಕೋಶ",
            GlossaryKind::Padavivarana => "ಪದವಿವರಣೆ",
            GlossaryKind::Tippani => "ಟಿಪ್ಪಣಿ",
            GlossaryKind::Paribhashika => "ಪಾರಿಭಾಷಿಕ",
        }
    }

    /// All kinds, in the order the admin UI lists them.
    pub fn all() -> [GlossaryKind; 4] {
        [
            GlossaryKind::Arthakosha,
            GlossaryKind::Padavivarana,
            GlossaryKind::Tippani,
            GlossaryKind::Paribhashika,
        ]
    }
}

/// One glossary term within a volume, shared by all four kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlossaryEntry {
    #[serde(default)]
    pub id: Option<u64>,
    pub samputa_sankhye: String,
    pub pada: String,
    pub artha: String,
}

/// Uploaded archive document (scans, PDFs, editor notes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub kind: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub description_md: String,
}

/// Catalog product sold through the shop tab. Price is stored in paise to
/// avoid floating-point money.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub price_paise: u64,
    pub stock: u32,
    #[serde(default)]
    pub description_md: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Console user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_falls_back_to_first_content_line() {
        let verse = Tatvapada {
            samputa_sankhye: "1".into(),
            tatvapada_sankhye: "12".into(),
            tatvapadakara_hesaru: "ಶಿಶುನಾಳ ಷರೀಫ".into(),
            modala_salu: "  ".into(),
            content: "ಸೋರುತಿಹುದು ಮನೆಯ ಮಾಳಿಗಿ\nಅಜ್ಞಾನದಿಂದ".into(),
            bhavanuvada: None,
            klishta_padagalu: None,
        };
        let summary = TatvapadaSummary::from(verse);
        assert_eq!(summary.modala_salu, "ಸೋರುತಿಹುದು ಮನೆಯ ಮಾಳಿಗಿ");
    }

    #[test]
    fn glossary_kind_round_trips_through_serde() {
        let json = serde_json::to_string(&GlossaryKind::Padavivarana).expect("serialize");
        assert_eq!(json, "\"padavivarana\"");
        let back: GlossaryKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, GlossaryKind::Padavivarana);
    }

    #[test]
    fn glossary_kind_segments_are_distinct() {
        let mut segments: Vec<&str> =
            GlossaryKind::all().iter().map(|k| k.path_segment()).collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), 4);
    }
}
