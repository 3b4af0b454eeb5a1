use crate::app::use_config;
use crate::layout::toast_service::use_toast;
use crate::shared::clipboard::copy_link;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::shared::affiliate_link::{qr_code_url, AffiliateLink};
use leptos::prelude::*;

const SHARING_TIPS: [&str; 5] = [
    "Include your link in your blog posts and articles.",
    "Share it on your social media profiles and posts.",
    "Add it to your email signature.",
    "Use the QR code on physical marketing materials.",
    "Create specific campaign slugs to track performance from different sources.",
];

/// Referral link with campaign slug, copy button and QR code
#[component]
#[allow(non_snake_case)]
pub fn MyLinkPage() -> impl IntoView {
    let config = use_config();
    let toast = use_toast();

    let link = RwSignal::new(AffiliateLink::new(config.base_affiliate_url()));
    let (slug, set_slug) = signal(String::new());

    let current = Signal::derive(move || link.with(|l| l.current().to_string()));
    let example = link.with_untracked(|l| l.example());

    let on_copy = move |_| copy_link(
        toast,
        &current.get_untracked(),
        "Your affiliate link has been copied to the clipboard.",
    );

    let on_apply = move |_| {
        let raw = slug.get_untracked();
        let mut notification = None;
        link.update(|l| notification = Some(l.apply(&raw)));
        if let Some(n) = notification {
            log::info!("campaign link is now {}", current.get_untracked());
            toast.notify(n);
        }
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page-title page-title--center">"My Unique Affiliate Link"</h1>

            <div class="card">
                <div class="card__header card__header--center">
                    <span class="card__icon">{icon("link")}</span>
                    <div>
                        <h3 class="card__title">"Your Referral Link"</h3>
                        <p class="card__subtitle">"Share this link to earn commissions on referrals."</p>
                    </div>
                </div>

                <div class="inline-field">
                    <Input value=current readonly=true class="inline-field__input" />
                    <Button on_click=Callback::new(on_copy)>
                        {icon("copy")}
                        "Copy"
                    </Button>
                </div>

                <div class="inline-field">
                    <Input
                        id="customSlug"
                        label="Add a custom campaign slug (optional):"
                        placeholder="e.g., summer-promo or new-product"
                        value=slug
                        on_input=Callback::new(move |v| set_slug.set(v))
                        class="inline-field__input"
                    />
                    <Button variant="outline" on_click=Callback::new(on_apply)>
                        "Apply Slug"
                    </Button>
                </div>
                <p class="form__hint">
                    "This helps track specific campaigns. e.g., " {example}
                </p>

                <div class="qr-code">
                    <h3 class="qr-code__title">"Share via QR Code"</h3>
                    <img
                        class="qr-code__image"
                        src=move || qr_code_url(&current.get())
                        alt="Affiliate Link QR Code"
                        width="150"
                        height="150"
                    />
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Tips for Sharing"</h3>
                <ul class="tip-list">
                    {SHARING_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
