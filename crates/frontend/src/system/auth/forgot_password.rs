use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Input};
use crate::shared::form_view_model::FormViewModel;
use contracts::system::auth::ForgotPasswordForm;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toast = use_toast();
    let vm = FormViewModel::new(ForgotPasswordForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = vm.submit("password reset") {
            toast.notify(form.submitted());
        }
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h2 class="auth-card__title">"Forgot Your Password?"</h2>
                <p class="auth-card__subtitle">
                    "No worries! Enter your email address and we'll send you a link to reset your password."
                </p>
            </div>

            <form class="form" on:submit=on_submit>
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    value=vm.field(|f| &f.email)
                    on_input=vm.setter(|f, v| f.email = v)
                    error=vm.error("email")
                />
                <Button button_type="submit" class="button--block">"Send Reset Link"</Button>
            </form>

            <p class="auth-card__footer">
                <a class="link" href="/auth/signin">"Back to Sign In"</a>
            </p>
        </div>
    }
}
