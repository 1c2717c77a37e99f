//! In-Memory Router
//!
//! Route matching over an application-held path. The address bar is never
//! touched; navigating swaps the rendered view and scrolls back to the top.

use leptos::*;

/// A path paired with the view that renders it
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub view: fn() -> View,
}

impl Route {
    pub fn new(path: &'static str, view: fn() -> View) -> Self {
        Self { path, view }
    }
}

/// Router context provided to the subtree
#[derive(Clone)]
pub struct RouterState {
    current_path: RwSignal<String>,
}

impl RouterState {
    /// Reactive current path
    pub fn current_path(&self) -> ReadSignal<String> {
        self.current_path.read_only()
    }

    /// Switch to another path and scroll back to the top
    pub fn navigate(&self, path: &str) {
        self.current_path.set(path.to_string());
        scroll_to_top();
    }
}

/// Router context accessor
pub fn use_router() -> RouterState {
    use_context::<RouterState>().expect("RouterState not found")
}

/// Index of the first route whose path matches, scanning in order
fn match_route(routes: &[Route], path: &str) -> Option<usize> {
    routes.iter().position(|route| route.path == path)
}

/// Layout shell owning the current path. Children render beside the matched
/// view; unknown paths fall back to a not-found message.
#[component]
pub fn Router(
    routes: Vec<Route>,
    #[prop(default = "/")] default_path: &'static str,
    children: Children,
) -> impl IntoView {
    let state = RouterState {
        current_path: create_rw_signal(default_path.to_string()),
    };
    provide_context(state.clone());

    let current = move || {
        state.current_path.with(|path| match match_route(&routes, path) {
            Some(index) => (routes[index].view)(),
            None => view! {
                <div class="p-8 text-center text-gray-500">"Page not found"</div>
            }
            .into_view(),
        })
    };

    view! {
        <div class="flex min-h-screen bg-gray-50">
            {children()}
            <div class="flex-1 ml-64">
                {current}
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_view() -> View {
        unreachable!()
    }

    fn dashboard_routes() -> Vec<Route> {
        vec![
            Route::new("/", stub_view),
            Route::new("/product-focus", stub_view),
            Route::new("/performance-analysis", stub_view),
            Route::new("/customer-analysis", stub_view),
            Route::new("/account", stub_view),
        ]
    }

    #[test]
    fn test_exact_match_only() {
        let routes = dashboard_routes();
        assert_eq!(match_route(&routes, "/"), Some(0));
        assert_eq!(match_route(&routes, "/customer-analysis"), Some(3));
        assert_eq!(match_route(&routes, "/customer-analysis/"), None);
        assert_eq!(match_route(&routes, "/unknown"), None);
        assert_eq!(match_route(&routes, ""), None);
    }

    #[test]
    fn test_first_route_wins_on_duplicate_path() {
        let routes = vec![
            Route::new("/dup", stub_view),
            Route::new("/dup", stub_view),
        ];
        assert_eq!(match_route(&routes, "/dup"), Some(0));
    }

    #[test]
    fn test_navigate_swaps_current_path() {
        let runtime = create_runtime();
        let state = RouterState {
            current_path: create_rw_signal("/".to_string()),
        };

        state.navigate("/performance-analysis");
        assert_eq!(
            state.current_path().get_untracked(),
            "/performance-analysis"
        );

        state.navigate("/");
        assert_eq!(state.current_path().get_untracked(), "/");

        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "RouterState not found")]
    fn test_use_router_outside_provider_panics() {
        let _runtime = create_runtime();
        let _ = use_router();
    }
}
