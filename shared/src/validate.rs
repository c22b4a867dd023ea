//! Required-field checks run before any create/update request leaves the
//! browser. A payload that fails validation never reaches the network layer.

use thiserror::Error;

use crate::{DocumentRecord, GlossaryEntry, Product, Samputa, Tatvapada, Tatvapadakara};

/// Client-side validation failure, surfaced verbatim in the feedback modal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} ಅಗತ್ಯವಿದೆ (required)")]
    Missing(&'static str),
    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Create/update payloads that can be checked before submission.
pub trait Validate {
    /// Returns the first problem found, field order matching the form layout.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

impl Validate for Samputa {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ಸಂಪುಟ ಸಂಖ್ಯೆ", &self.samputa_sankhye)?;
        require("ಶೀರ್ಷಿಕೆ", &self.title)
    }
}

impl Validate for Tatvapadakara {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ತತ್ವಪದಕಾರರ ಹೆಸರು", &self.hesaru)
    }
}

impl Validate for Tatvapada {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ಸಂಪುಟ ಸಂಖ್ಯೆ", &self.samputa_sankhye)?;
        require("ತತ್ವಪದ ಸಂಖ್ಯೆ", &self.tatvapada_sankhye)?;
        require("ತತ್ವಪದಕಾರರ ಹೆಸರು", &self.tatvapadakara_hesaru)?;
        require("ತತ್ವಪದ", &self.content)
    }
}

impl Validate for GlossaryEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ಸಂಪುಟ ಸಂಖ್ಯೆ", &self.samputa_sankhye)?;
        require("ಪದ", &self.pada)?;
        require("ಅರ್ಥ", &self.artha)
    }
}

impl Validate for DocumentRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ಶೀರ್ಷಿಕೆ", &self.title)?;
        require("ದಾಖಲೆಯ ಪ್ರಕಾರ", &self.kind)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ಉತ್ಪನ್ನದ ಹೆಸರು", &self.name)?;
        if self.price_paise == 0 {
            return Err(ValidationError::Invalid {
                field: "ಬೆಲೆ",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_after_trim_counts_as_missing() {
        let author = Tatvapadakara {
            hesaru: "   \t".into(),
            kavi_parichaya: None,
        };
        assert!(matches!(author.validate(), Err(ValidationError::Missing(_))));
    }

    #[test]
    fn verse_requires_full_key_triple() {
        let mut verse = Tatvapada {
            samputa_sankhye: "3".into(),
            tatvapada_sankhye: String::new(),
            tatvapadakara_hesaru: "ಕಡಕೋಳ ಮಡಿವಾಳಪ್ಪ".into(),
            content: "ಏನು ಬಂದಿರಿ ಹದುಳಿದ್ದಿರಿ".into(),
            ..Tatvapada::default()
        };
        assert!(verse.validate().is_err());
        verse.tatvapada_sankhye = "7".into();
        assert_eq!(verse.validate(), Ok(()));
    }

    #[test]
    fn zero_price_product_is_rejected() {
        let product = Product {
            name: "ಸಂಪುಟ 1 (ಮುದ್ರಿತ)".into(),
            price_paise: 0,
            stock: 10,
            ..Product::default()
        };
        assert!(matches!(
            product.validate(),
            Err(ValidationError::Invalid { field: "ಬೆಲೆ", .. })
        ));
    }

    #[test]
    fn validation_error_display_names_the_field() {
        let err = ValidationError::Missing("ಶೀರ್ಷಿಕೆ");
        let message = err.to_string();
        assert!(message.contains("ಶೀರ್ಷಿಕೆ"));
        assert!(message.contains("required"));
    }
}
