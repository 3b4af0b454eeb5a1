use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::button::button_class;
use crate::shared::components::ui::{Button, Input};
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use contracts::system::auth::SignInForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
#[allow(non_snake_case)]
pub fn SignInPage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();
    let vm = FormViewModel::new(SignInForm::default());

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if vm.submit("sign in").is_some() {
                toast.notify(SignInForm::submitted());
                navigate("/dashboard", Default::default());
            }
        }
    };

    let on_google = move |_| {
        toast.notify(SignInForm::google_clicked());
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h2 class="auth-card__title">"Welcome Back!"</h2>
                <p class="auth-card__subtitle">"Sign in to access your ProMillion Marketing dashboard."</p>
            </div>

            <form class="form" on:submit=on_submit>
                <Input
                    id="emailOrUsername"
                    label="Email / Username"
                    autocomplete="username"
                    value=vm.field(|f| &f.email_or_username)
                    on_input=vm.setter(|f, v| f.email_or_username = v)
                    error=vm.error("emailOrUsername")
                />
                <div class="form__field-head">
                    <a class="link link--small" href="/auth/forgot-password">"Forgot password?"</a>
                </div>
                <Input
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=vm.field(|f| &f.password)
                    on_input=vm.setter(|f, v| f.password = v)
                    error=vm.error("password")
                />
                <Button button_type="submit" class="button--block">"Sign In"</Button>
            </form>

            <div class="auth-card__divider">
                <span>"Or continue with"</span>
            </div>
            <button
                type="button"
                class=format!("{} button--block", button_class(Some("outline"), None))
                on:click=on_google
            >
                {icon("user")}
                "Sign In with Google"
            </button>

            <p class="auth-card__footer">
                "Don't have an account? "
                <a class="link" href="/auth/signup">"Sign Up"</a>
            </p>
        </div>
    }
}
