use crate::dashboards::{EarningsDashboard, HomeDashboard};
use crate::domain::a001_affiliate::ui::{AffiliateList, MyLinkPage};
use crate::domain::a002_product::ui::{MyProducts, ProductCatalog};
use crate::domain::a003_bonus::ui::BonusList;
use crate::domain::a004_invoice::ui::InvoiceList;
use crate::domain::a005_bank_account::ui::{BankDetailsList, NewBankDetails};
use crate::domain::a006_training_video::ui::TrainingPlayer;
use crate::layout::auth_layout::AuthLayout;
use crate::layout::chatbot::ChatBot;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::projections::p900_best_sellers::ui::BestSellers;
use crate::system::auth::{ForgotPasswordPage, SignInPage, SignUpPage};
use crate::system::pages::not_found::NotFound;
use crate::system::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Outlet /> }.into_any()
            right=|| view! { <ChatBot /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("/auth") view=AuthLayout>
                    <Route path=path!("signin") view=SignInPage />
                    <Route path=path!("signup") view=SignUpPage />
                    <Route path=path!("forgot-password") view=ForgotPasswordPage />
                </ParentRoute>

                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path=path!("dashboard") view=HomeDashboard />
                    <Route path=path!("earnings") view=EarningsDashboard />
                    <Route path=path!("bestsellers") view=BestSellers />
                    <Route path=path!("invoices") view=InvoiceList />
                    <Route path=path!("affiliates") view=AffiliateList />
                    <Route path=path!("bank/new") view=NewBankDetails />
                    <Route path=path!("bank/details") view=BankDetailsList />
                    <Route path=path!("products/all") view=ProductCatalog />
                    <Route path=path!("products/my") view=MyProducts />
                    <Route path=path!("bonuses") view=BonusList />
                    <Route path=path!("my-link") view=MyLinkPage />
                    <Route path=path!("training") view=TrainingPlayer />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
