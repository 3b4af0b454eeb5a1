use crate::app::use_config;
use crate::layout::toast_service::use_toast;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Switch};
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::system::settings::{
    NotificationChannel, NotificationPreferences, PasswordChangeForm, ProfileForm,
};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Password,
    Notifications,
    Appearance,
}

impl SettingsTab {
    fn all() -> [SettingsTab; 4] {
        [
            SettingsTab::Profile,
            SettingsTab::Password,
            SettingsTab::Notifications,
            SettingsTab::Appearance,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Password => "Password",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Appearance => "Appearance",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "user",
            SettingsTab::Password => "lock",
            SettingsTab::Notifications => "message-square",
            SettingsTab::Appearance => "sun",
        }
    }
}

fn card_header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="card__header">
            <div>
                <h3 class="card__title">{title}</h3>
                <p class="card__subtitle">{subtitle}</p>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProfileTab() -> impl IntoView {
    let toast = use_toast();
    let config = use_config();
    let vm = FormViewModel::new(ProfileForm::from(&config.profile));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.submit("profile").is_some() {
            toast.notify(ProfileForm::submitted());
        }
    };

    view! {
        <div class="card">
            {card_header("Edit Profile", "Manage your personal information.")}
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
                <Input
                    id="username"
                    label="Username"
                    value=vm.field(|f| &f.username)
                    on_input=vm.setter(|f, v| f.username = v)
                    error=vm.error("username")
                />
                <div class="form__actions">
                    <Button button_type="submit">"Save Profile"</Button>
                </div>
            </form>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn PasswordTab() -> impl IntoView {
    let toast = use_toast();
    let vm = FormViewModel::new(PasswordChangeForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if vm.submit("password change").is_some() {
            toast.notify(PasswordChangeForm::submitted());
            vm.reset(PasswordChangeForm::default());
        }
    };

    view! {
        <div class="card">
            {card_header("Change Password", "Update your account password.")}
            <form class="form" on:submit=on_submit>
                <Input
                    id="currentPassword"
                    label="Current Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=vm.field(|f| &f.current_password)
                    on_input=vm.setter(|f, v| f.current_password = v)
                    error=vm.error("currentPassword")
                />
                <Input
                    id="newPassword"
                    label="New Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=vm.field(|f| &f.new_password)
                    on_input=vm.setter(|f, v| f.new_password = v)
                    error=vm.error("newPassword")
                />
                <Input
                    id="confirmNewPassword"
                    label="Confirm New Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=vm.field(|f| &f.confirm_new_password)
                    on_input=vm.setter(|f, v| f.confirm_new_password = v)
                    error=vm.error("confirmNewPassword")
                />
                <div class="form__actions">
                    <Button button_type="submit">"Update Password"</Button>
                </div>
            </form>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn NotificationsTab() -> impl IntoView {
    let toast = use_toast();
    let prefs = RwSignal::new(NotificationPreferences::default());

    let toggle = move |channel: NotificationChannel| {
        let mut notification = None;
        prefs.update(|p| notification = Some(p.toggle(channel)));
        if let Some(n) = notification {
            toast.notify(n);
        }
    };

    view! {
        <div class="card">
            {card_header("Notification Settings", "Manage how you receive notifications.")}
            <div class="settings__list">
                {NotificationChannel::all()
                    .into_iter()
                    .map(|channel| view! {
                        <Switch
                            id=format!("{:?}", channel)
                            label=channel.label().to_string()
                            hint=channel.hint().to_string()
                            checked=Signal::derive(move || prefs.with(|p| p.get(channel)))
                            on_change=Callback::new(move |_| toggle(channel))
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn AppearanceTab() -> impl IntoView {
    view! {
        <div class="card">
            {card_header("Appearance", "Customize the look and feel of the application.")}
            <div class="settings__list">
                <div class="form__switch-row">
                    <div class="form__switch-text">
                        <span class="form__label">"Dark Mode"</span>
                        <span class="form__hint">"Toggle between light and dark themes."</span>
                    </div>
                    <ThemeToggle />
                </div>
            </div>
        </div>
    }
}

/// Account settings split into four tabs
#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::Profile);

    view! {
        <div class="page page--narrow">
            <PageHeader title="Settings" />

            <div class="tabs">
                <div class="tabs__list" role="tablist">
                    {SettingsTab::all()
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                type="button"
                                role="tab"
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || active.get() == tab
                                on:click=move |_| active.set(tab)
                            >
                                {icon(tab.icon_name())}
                                {tab.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="tabs__content">
                    {move || match active.get() {
                        SettingsTab::Profile => view! { <ProfileTab /> }.into_any(),
                        SettingsTab::Password => view! { <PasswordTab /> }.into_any(),
                        SettingsTab::Notifications => view! { <NotificationsTab /> }.into_any(),
                        SettingsTab::Appearance => view! { <AppearanceTab /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_listed_in_display_order() {
        let labels: Vec<_> = SettingsTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Profile", "Password", "Notifications", "Appearance"]);
    }
}
