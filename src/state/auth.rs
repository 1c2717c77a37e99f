//! Authentication State
//!
//! Session context with localStorage persistence. Only the methods on
//! `AuthState` mutate the session; views read it through `user()`.

use leptos::*;

/// localStorage key holding the serialized session
const STORAGE_KEY: &str = "user";

/// createdAt used when no earlier session is known
const DEFAULT_CREATED_AT: &str = "2024-01-15T00:00:00.000Z";

/// Logged-in operator profile
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub site_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Profile fields the account page may change
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub bio: Option<String>,
}

/// Session context provided to the whole component tree
#[derive(Clone)]
pub struct AuthState {
    user: RwSignal<Option<User>>,
}

/// Provide auth state, hydrating any stored session
pub fn provide_auth_state() {
    let state = AuthState {
        user: create_rw_signal(stored_user()),
    };
    provide_context(state);
}

/// Auth context accessor
pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthState not found")
}

impl AuthState {
    /// Read-only view of the current session
    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Whether a session is active (reactive)
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Start a session. Any non-empty credential pair is accepted; the
    /// createdAt of an earlier session is carried over.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            return false;
        }

        let prior_created_at = self
            .user
            .get_untracked()
            .and_then(|user| user.created_at);
        let user = session_user(email, prior_created_at, now_iso());

        persist_user(Some(&user));
        self.user.set(Some(user));
        true
    }

    /// End the session and drop it from storage
    pub fn logout(&self) {
        persist_user(None);
        self.user.set(None);
    }

    /// Shallow-merge profile fields into the session. No-op when logged out.
    pub fn update_user(&self, patch: UserPatch) {
        let user = match self.user.get_untracked() {
            Some(user) => merged(user, patch),
            None => return,
        };

        persist_user(Some(&user));
        self.user.set(Some(user));
    }
}

/// Build the operator profile for a fresh login
fn session_user(email: &str, prior_created_at: Option<String>, last_login_at: String) -> User {
    User {
        id: "1".to_string(),
        email: email.to_string(),
        name: "관리자".to_string(),
        site_name: "Cafe24".to_string(),
        phone: Some("010-1234-5678".to_string()),
        department: Some("운영팀".to_string()),
        bio: Some("성장통 상품 분석 대시보드의 관리자입니다.".to_string()),
        created_at: Some(prior_created_at.unwrap_or_else(|| DEFAULT_CREATED_AT.to_string())),
        last_login_at: Some(last_login_at),
    }
}

fn merged(mut user: User, patch: UserPatch) -> User {
    if let Some(name) = patch.name {
        user.name = name;
    }
    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(phone) = patch.phone {
        user.phone = Some(phone);
    }
    if let Some(department) = patch.department {
        user.department = Some(department);
    }
    if let Some(bio) = patch.bio {
        user.bio = Some(bio);
    }
    user
}

/// Current instant with millisecond precision and a Z suffix
fn now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn parse_stored_user(json: &str) -> Option<User> {
    serde_json::from_str(json).ok()
}

#[cfg(target_arch = "wasm32")]
fn stored_user() -> Option<User> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY).ok()??;
    parse_stored_user(&json)
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_user() -> Option<User> {
    None
}

#[cfg(target_arch = "wasm32")]
fn persist_user(user: Option<&User>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match user {
                Some(user) => {
                    if let Ok(json) = serde_json::to_string(user) {
                        let _ = storage.set_item(STORAGE_KEY, &json);
                    }
                }
                None => {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_user(_user: Option<&User>) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AuthState {
        AuthState {
            user: create_rw_signal(None),
        }
    }

    #[test]
    fn test_login_rejects_missing_credentials() {
        let runtime = create_runtime();
        let state = test_state();

        assert!(!state.login("", "secret"));
        assert!(!state.login("admin@cafe24.com", ""));
        assert!(!state.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn test_login_builds_operator_profile() {
        let runtime = create_runtime();
        let state = test_state();

        assert!(state.login("admin@cafe24.com", "secret"));
        assert!(state.is_authenticated());

        let user = state.user().get_untracked().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "admin@cafe24.com");
        assert_eq!(user.name, "관리자");
        assert_eq!(user.site_name, "Cafe24");
        assert_eq!(user.created_at.as_deref(), Some(DEFAULT_CREATED_AT));
        assert!(user.last_login_at.is_some());

        runtime.dispose();
    }

    #[test]
    fn test_relogin_preserves_created_at() {
        let runtime = create_runtime();
        let state = test_state();

        state.update_user(UserPatch::default());
        assert!(!state.is_authenticated());

        assert!(state.login("first@cafe24.com", "pw"));
        let first_created = state.user().get_untracked().unwrap().created_at;

        assert!(state.login("second@cafe24.com", "pw"));
        let second = state.user().get_untracked().unwrap();
        assert_eq!(second.email, "second@cafe24.com");
        assert_eq!(second.created_at, first_created);

        state.logout();
        assert!(!state.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn test_update_user_merges_fields() {
        let runtime = create_runtime();
        let state = test_state();
        state.login("admin@cafe24.com", "pw");

        state.update_user(UserPatch {
            name: Some("김관리".to_string()),
            bio: Some("프로필 수정 테스트".to_string()),
            ..UserPatch::default()
        });

        let user = state.user().get_untracked().unwrap();
        assert_eq!(user.name, "김관리");
        assert_eq!(user.bio.as_deref(), Some("프로필 수정 테스트"));
        // Untouched fields survive the merge
        assert_eq!(user.email, "admin@cafe24.com");
        assert_eq!(user.phone.as_deref(), Some("010-1234-5678"));

        runtime.dispose();
    }

    #[test]
    fn test_stored_session_round_trips_camel_case() {
        let user = session_user("admin@cafe24.com", None, "2024-02-01T09:00:00.000Z".to_string());
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"siteName\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"lastLoginAt\""));

        let parsed = parse_stored_user(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_corrupt_stored_session_is_ignored() {
        assert!(parse_stored_user("{not json").is_none());
        assert!(parse_stored_user("{\"id\":1}").is_none());
    }
}
