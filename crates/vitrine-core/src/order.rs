// ── WhatsApp order deep link ──
//
// Ordering happens out-of-band: the UI builds a wa.me link carrying a
// preformatted message and hands it to the platform opener.

use url::Url;

use crate::error::CoreError;
use crate::model::Product;

/// The preformatted order message for a product.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hello, I'm interested in purchasing the {}. Please provide more details.",
        product.name
    )
}

/// Build the `https://wa.me/{number}?text=…` deep link. The number is
/// reduced to its digits; an empty result is a configuration error.
pub fn order_url(number: &str, product: &Product) -> Result<Url, CoreError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(CoreError::Config {
            message: format!("order number {number:?} contains no digits"),
        });
    }

    Url::parse_with_params(
        &format!("https://wa.me/{digits}"),
        &[("text", order_message(product))],
    )
    .map_err(|e| CoreError::Config {
        message: format!("failed to build order link: {e}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::store::tests::product;

    #[test]
    fn message_follows_the_template() {
        let p = product("a", "iPhone 13 Pro", "Apple", None);
        assert_eq!(
            order_message(&p),
            "Hello, I'm interested in purchasing the iPhone 13 Pro. Please provide more details."
        );
    }

    #[test]
    fn url_encodes_the_message() {
        let p = product("a", "iPhone 13 Pro", "Apple", None);
        let url = order_url("+212 600-000000", &p).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/212600000000");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, order_message(&p));
        assert!(!url.query().unwrap().contains(' '));
    }

    #[test]
    fn digitless_number_is_a_config_error() {
        let p = product("a", "iPhone 13 Pro", "Apple", None);
        assert!(matches!(
            order_url("n/a", &p),
            Err(CoreError::Config { .. })
        ));
    }
}
