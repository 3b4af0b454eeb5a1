//! Referral link construction with optional campaign slug.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::notification::Notification;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NOT_SLUG_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";

/// Campaign slug reduced to nothing after sanitizing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slug {raw:?} contains no alphanumeric characters or hyphens")]
pub struct SlugError {
    pub raw: String,
}

impl SlugError {
    pub fn notification(&self) -> Notification {
        Notification::new("Invalid Custom Slug")
            .with_description("Please use alphanumeric characters and hyphens.")
            .destructive()
    }
}

/// Accepted outcome of applying a slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugOutcome {
    /// Link now carries `?campaign={slug}`
    Applied { slug: String, link: String },
    /// Blank input: link reset to the base
    Cleared { link: String },
}

impl SlugOutcome {
    pub fn link(&self) -> &str {
        match self {
            SlugOutcome::Applied { link, .. } | SlugOutcome::Cleared { link } => link,
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            SlugOutcome::Applied { slug, .. } => Notification::new("Custom Slug Applied")
                .with_description(format!("Your link now includes the campaign: {}", slug)),
            SlugOutcome::Cleared { .. } => Notification::new("Custom Slug Removed")
                .with_description("Your link has been reset to the default."),
        }
    }
}

/// Lowercase, collapse whitespace runs to `-`, drop anything outside `[a-z0-9-]`
pub fn sanitize_slug(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    NOT_SLUG_CHAR.replace_all(&hyphenated, "").into_owned()
}

/// Compose the campaign link for `base` from user input.
///
/// On `Err` the caller keeps whatever link it showed before.
pub fn apply_custom_slug(base: &str, raw: &str) -> Result<SlugOutcome, SlugError> {
    if raw.trim().is_empty() {
        return Ok(SlugOutcome::Cleared {
            link: base.to_string(),
        });
    }
    let slug = sanitize_slug(raw);
    if slug.is_empty() {
        return Err(SlugError {
            raw: raw.to_string(),
        });
    }
    Ok(SlugOutcome::Applied {
        link: format!("{}?campaign={}", base, slug),
        slug,
    })
}

/// Image URL of a QR code encoding `link`
pub fn qr_code_url(link: &str) -> String {
    format!("{}{}", QR_SERVICE, urlencoding::encode(link))
}

/// Referral link state for the "My Affiliate Link" page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateLink {
    base: String,
    current: String,
}

impl AffiliateLink {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            current: base.clone(),
            base,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Apply user input; the current link only changes on success
    pub fn apply(&mut self, raw: &str) -> Notification {
        match apply_custom_slug(&self.base, raw) {
            Ok(outcome) => {
                self.current = outcome.link().to_string();
                outcome.notification()
            }
            Err(err) => {
                log::debug!("{}", err);
                err.notification()
            }
        }
    }

    /// Placeholder shown under the slug input
    pub fn example(&self) -> String {
        format!("{}?campaign=your-slug", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://promillion.marketing/ref/mukarramali_9669";

    #[test]
    fn test_sanitize_slug() {
        assert_eq!(sanitize_slug("Summer Promo!"), "summer-promo");
        assert_eq!(sanitize_slug("  New   Product 2024 "), "new-product-2024");
        assert_eq!(sanitize_slug("already-fine"), "already-fine");
        assert_eq!(sanitize_slug("Ünïcode_stuff"), "ncodestuff");
        assert_eq!(sanitize_slug("!!!"), "");
    }

    #[test]
    fn test_apply_slug_appends_campaign() {
        let outcome = apply_custom_slug(BASE, "Summer Promo!").unwrap();
        assert_eq!(
            outcome,
            SlugOutcome::Applied {
                slug: "summer-promo".to_string(),
                link: format!("{}?campaign=summer-promo", BASE),
            }
        );
        assert_eq!(outcome.notification().title, "Custom Slug Applied");
    }

    #[test]
    fn test_blank_slug_reverts_to_base() {
        let outcome = apply_custom_slug(BASE, "   ").unwrap();
        assert_eq!(outcome.link(), BASE);
        assert!(matches!(outcome, SlugOutcome::Cleared { .. }));
    }

    #[test]
    fn test_unsanitizable_slug_rejected() {
        let err = apply_custom_slug(BASE, "!!!").unwrap_err();
        assert_eq!(err.raw, "!!!");
        assert!(err.notification().is_destructive());
    }

    #[test]
    fn test_link_state_keeps_prior_link_on_rejection() {
        let mut link = AffiliateLink::new(BASE);
        link.apply("spring");
        assert_eq!(link.current(), format!("{}?campaign=spring", BASE));

        let n = link.apply("@@@");
        assert_eq!(n.title, "Invalid Custom Slug");
        assert_eq!(link.current(), format!("{}?campaign=spring", BASE));

        let n = link.apply("");
        assert_eq!(n.title, "Custom Slug Removed");
        assert_eq!(link.current(), BASE);
    }

    #[test]
    fn test_qr_code_url_encodes_link() {
        let url = qr_code_url("https://x.test/ref/a?campaign=b");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Fx.test%2Fref%2Fa%3Fcampaign%3Db"
        );
    }
}
