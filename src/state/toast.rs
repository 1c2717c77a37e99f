//! Toast State
//!
//! Success and error notifications with timed auto-clear.

use leptos::*;

/// Notification context provided to the whole component tree
#[derive(Clone)]
pub struct ToastState {
    success: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
}

/// Provide toast state to the component tree
pub fn provide_toast_state() {
    let state = ToastState {
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };
    provide_context(state);
}

/// Toast context accessor
pub fn use_toast() -> ToastState {
    use_context::<ToastState>().expect("ToastState not found")
}

impl ToastState {
    pub fn success(&self) -> ReadSignal<Option<String>> {
        self.success.read_only()
    }

    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));
        auto_clear(self.success, 3000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
        auto_clear(self.error, 5000);
    }
}

#[cfg(target_arch = "wasm32")]
fn auto_clear(signal: RwSignal<Option<String>>, millis: u32) {
    gloo_timers::callback::Timeout::new(millis, move || {
        signal.set(None);
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn auto_clear(_signal: RwSignal<Option<String>>, _millis: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> ToastState {
        ToastState {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    #[test]
    fn test_messages_land_on_their_own_signal() {
        let runtime = create_runtime();
        let state = test_state();

        state.show_success("저장되었습니다.");
        state.show_error("저장에 실패했습니다.");

        assert_eq!(
            state.success().get_untracked().as_deref(),
            Some("저장되었습니다.")
        );
        assert_eq!(
            state.error().get_untracked().as_deref(),
            Some("저장에 실패했습니다.")
        );

        runtime.dispose();
    }

    #[test]
    fn test_newer_message_replaces_older() {
        let runtime = create_runtime();
        let state = test_state();

        state.show_error("첫번째 실패");
        state.show_error("두번째 실패");

        assert_eq!(
            state.error().get_untracked().as_deref(),
            Some("두번째 실패")
        );

        runtime.dispose();
    }
}
