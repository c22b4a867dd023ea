//! Static registry of REST endpoints. Every logical operation maps to one URL
//! template here; `render` substitutes `{name}` placeholders with
//! percent-encoded path parameters so resource keys (Kannada names, volume
//! numbers) never leak into URLs unescaped.

use super::ApiError;

// Archive resources.
pub const SAMPUTA_LIST: &str = "/api/tatvapada/samputa";
pub const TATVAPADAKARA_LIST: &str = "/api/tatvapada/tatvapadakara";
pub const TATVAPADAKARA_DETAIL: &str = "/api/tatvapada/tatvapadakara/{hesaru}";
pub const TATVAPADAKARA_BY_SAMPUTA: &str = "/api/tatvapada/{samputa}/tatvapadakara";
pub const TATVAPADA_SAVE: &str = "/api/tatvapada";
pub const TATVAPADA_BY_AUTHOR: &str = "/api/tatvapada/{samputa}/{hesaru}";
pub const TATVAPADA_DETAIL: &str = "/api/tatvapada/{samputa}/{hesaru}/{sankhye}";
pub const GLOSSARY_LIST: &str = "/api/tatvapada/{kind}/{samputa}";
pub const GLOSSARY_SAVE: &str = "/api/tatvapada/{kind}";
pub const GLOSSARY_ENTRY: &str = "/api/tatvapada/{kind}/entry/{id}";

// Admin console resources.
pub const DOCUMENT_LIST: &str = "/admin/documents";
pub const DOCUMENT_DETAIL: &str = "/admin/documents/{id}";
pub const DOCUMENT_FILE: &str = "/admin/documents/{id}/file";
pub const PRODUCT_LIST: &str = "/admin/products";
pub const PRODUCT_DETAIL: &str = "/admin/products/{id}";
pub const PRODUCT_IMAGE: &str = "/admin/products/{id}/image";
pub const USER_LIST: &str = "/admin/users";
pub const USER_DETAIL: &str = "/admin/users/{id}";

// Public shop.
pub const SHOP_PRODUCTS: &str = "/shopping/api/v1/products";
pub const SHOP_ORDERS: &str = "/shopping/api/v1/orders";

/// Substitutes `{name}` placeholders in a template. Values are
/// percent-encoded. A placeholder with no matching parameter is an error, as
/// is a parameter the template never mentions.
pub fn render(template: &str, params: &[(&str, &str)]) -> Result<String, ApiError> {
    let mut out = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        if !out.contains(&placeholder) {
            return Err(ApiError::BadTemplate(format!(
                "template {template:?} has no placeholder {placeholder:?}"
            )));
        }
        out = out.replace(&placeholder, &urlencoding::encode(value));
    }
    if out.contains('{') || out.contains('}') {
        return Err(ApiError::BadTemplate(format!(
            "unresolved placeholder in {out:?}"
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_encodes_path_params() {
        let path = render(
            TATVAPADA_DETAIL,
            &[
                ("samputa", "3"),
                ("hesaru", "ಶಿಶುನಾಳ ಷರೀಫ"),
                ("sankhye", "12"),
            ],
        )
        .expect("render");
        assert!(path.starts_with("/api/tatvapada/3/"));
        assert!(path.ends_with("/12"));
        assert!(!path.contains(' '), "spaces must be percent-encoded");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let err = render(TATVAPADA_DETAIL, &[("samputa", "3")]).unwrap_err();
        assert!(matches!(err, ApiError::BadTemplate(_)));
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let err = render(SAMPUTA_LIST, &[("samputa", "3")]).unwrap_err();
        assert!(matches!(err, ApiError::BadTemplate(_)));
    }
}
