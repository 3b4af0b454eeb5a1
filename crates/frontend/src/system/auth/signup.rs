use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::form_view_model::FormViewModel;
use contracts::shared::location::{cities_for, to_options, COUNTRIES};
use contracts::system::auth::SignUpForm;
use leptos::prelude::*;

/// Registration form. The city list follows the selected country.
#[component]
#[allow(non_snake_case)]
pub fn SignUpPage() -> impl IntoView {
    let toast = use_toast();
    let vm = FormViewModel::new(SignUpForm::default());

    let country = vm.field(|f| &f.country);
    let city_options = Signal::derive(move || to_options(cities_for(&country.get())));
    let city_disabled = Signal::derive(move || city_options.with(|c| c.is_empty()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.submit("sign up").is_some() {
            toast.notify(SignUpForm::submitted());
        }
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h2 class="auth-card__title">"Create an Account"</h2>
                <p class="auth-card__subtitle">"Enter your details to get started with ProMillion Marketing."</p>
            </div>

            <form class="form" on:submit=on_submit>
                <div class="form__row">
                    <Input
                        id="firstName"
                        label="First Name"
                        value=vm.field(|f| &f.first_name)
                        on_input=vm.setter(|f, v| f.first_name = v)
                        error=vm.error("firstName")
                    />
                    <Input
                        id="lastName"
                        label="Last Name"
                        value=vm.field(|f| &f.last_name)
                        on_input=vm.setter(|f, v| f.last_name = v)
                        error=vm.error("lastName")
                    />
                </div>
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    value=vm.field(|f| &f.email)
                    on_input=vm.setter(|f, v| f.email = v)
                    error=vm.error("email")
                />
                <Input
                    id="phoneNumber"
                    label="Phone Number"
                    input_type="tel"
                    value=vm.field(|f| &f.phone_number)
                    on_input=vm.setter(|f, v| f.phone_number = v)
                    error=vm.error("phoneNumber")
                />
                <div class="form__row">
                    <Select
                        id="country"
                        label="Country"
                        placeholder="Select Country"
                        value=country
                        on_change=vm.setter(|f, v| f.set_country(v))
                        options=Signal::stored(to_options(COUNTRIES))
                        error=vm.error("country")
                    />
                    <Select
                        id="city"
                        label="City"
                        placeholder="Select City"
                        value=vm.field(|f| &f.city)
                        on_change=vm.setter(|f, v| f.city = v)
                        options=city_options
                        disabled=city_disabled
                        error=vm.error("city")
                    />
                </div>
                <Input
                    id="username"
                    label="Username"
                    autocomplete="username"
                    value=vm.field(|f| &f.username)
                    on_input=vm.setter(|f, v| f.username = v)
                    error=vm.error("username")
                />
                <Input
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=vm.field(|f| &f.password)
                    on_input=vm.setter(|f, v| f.password = v)
                    error=vm.error("password")
                />
                <Input
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=vm.field(|f| &f.confirm_password)
                    on_input=vm.setter(|f, v| f.confirm_password = v)
                    error=vm.error("confirmPassword")
                />
                <Button button_type="submit" class="button--block">"Create Account"</Button>
            </form>

            <p class="auth-card__footer">
                "Already have an account? "
                <a class="link" href="/auth/signin">"Sign In"</a>
            </p>
        </div>
    }
}
