//! App Shell
//!
//! Context providers, the session gate, and the routed dashboard layout.
//! Logged-out visitors cycle between the login, signup and password
//! reset cards; a session swaps in the sidebar plus routed pages.

use leptos::*;

use crate::components::{Sidebar, Toast};
use crate::pages::{
    Account, CustomerAnalysis, ForgotPassword, Login, MainDashboard, PerformanceAnalysis,
    ProductFocus, Signup,
};
use crate::router::{Route, Router};
use crate::state::{provide_auth_state, provide_toast_state, use_auth};

/// Which auth card is showing while logged out
#[derive(Clone, Copy, PartialEq)]
enum AuthScreen {
    Login,
    Signup,
    ForgotPassword,
}

fn dashboard_routes() -> Vec<Route> {
    vec![
        Route::new("/", || MainDashboard().into_view()),
        Route::new("/product-focus", || ProductFocus().into_view()),
        Route::new("/performance-analysis", || {
            PerformanceAnalysis().into_view()
        }),
        Route::new("/customer-analysis", || CustomerAnalysis().into_view()),
        Route::new("/account", || Account().into_view()),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    provide_auth_state();
    provide_toast_state();

    let auth = use_auth();
    let screen = create_rw_signal(AuthScreen::Login);

    view! {
        {move || {
            if auth.is_authenticated() {
                view! {
                    <Router routes=dashboard_routes()>
                        <Sidebar />
                    </Router>
                }
                .into_view()
            } else {
                match screen.get() {
                    AuthScreen::Login => view! {
                        <Login
                            on_forgot_password=move || screen.set(AuthScreen::ForgotPassword)
                            on_signup=move || screen.set(AuthScreen::Signup)
                        />
                    }
                    .into_view(),
                    AuthScreen::Signup => view! {
                        <Signup on_back=move || screen.set(AuthScreen::Login) />
                    }
                    .into_view(),
                    AuthScreen::ForgotPassword => view! {
                        <ForgotPassword on_back=move || screen.set(AuthScreen::Login) />
                    }
                    .into_view(),
                }
            }
        }}
        <Toast />
    }
}
