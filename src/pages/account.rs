//! Account Page
//!
//! Profile editing and password change for the signed-in operator.

use chrono::{DateTime, Datelike, Duration, Utc};
use leptos::*;

use crate::state::{use_auth, use_toast, UserPatch};

#[derive(Clone, Copy, PartialEq)]
enum AccountTab {
    Profile,
    Security,
}

/// Join date in Korean long form, e.g. 2024년 1월 15일
fn format_join_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return "정보 없음".to_string();
    };
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => format!("{}년 {}월 {}일", parsed.year(), parsed.month(), parsed.day()),
        Err(_) => "정보 없음".to_string(),
    }
}

fn format_last_login(date: Option<&str>) -> String {
    let Some(date) = date else {
        return "정보 없음".to_string();
    };
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => elapsed_label(Utc::now() - parsed.with_timezone(&Utc)),
        Err(_) => "정보 없음".to_string(),
    }
}

/// Relative time since the last login
fn elapsed_label(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "방금 전".to_string();
    }
    if minutes < 60 {
        return format!("{}분 전", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}시간 전", hours);
    }
    format!("{}일 전", hours / 24)
}

/// Avatar letter, falling back for an unnamed operator
fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|ch| ch.to_string())
        .unwrap_or_else(|| "관".to_string())
}

/// First failing password rule, if any
fn password_change_error(current: &str, new: &str, confirm: &str) -> Option<&'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Some("모든 필드를 입력해주세요.");
    }
    if new != confirm {
        return Some("새 비밀번호와 확인 비밀번호가 일치하지 않습니다.");
    }
    if new.chars().count() < 8 {
        return Some("비밀번호는 8자 이상이어야 합니다.");
    }
    None
}

/// 내 계정 관리
#[component]
pub fn Account() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();

    let (tab, set_tab) = create_signal(AccountTab::Profile);

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (department, set_department) = create_signal(String::new());
    let (bio, set_bio) = create_signal(String::new());

    let (current_password, set_current_password) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());

    // Load the stored profile into the form whenever the session changes
    let auth_for_load = auth.clone();
    create_effect(move |_| {
        if let Some(user) = auth_for_load.user().get() {
            set_name.set(user.name);
            set_email.set(user.email);
            set_phone.set(user.phone.unwrap_or_default());
            set_department.set(user.department.unwrap_or_default());
            set_bio.set(user.bio.unwrap_or_default());
        }
    });

    let auth_for_save = auth.clone();
    let toast_for_save = toast.clone();
    let save_profile = move |_| {
        if auth_for_save.user().get_untracked().is_none() {
            return;
        }
        auth_for_save.update_user(UserPatch {
            name: Some(name.get_untracked()),
            email: Some(email.get_untracked()),
            phone: Some(phone.get_untracked()),
            department: Some(department.get_untracked()),
            bio: Some(bio.get_untracked()),
        });
        toast_for_save.show_success("프로필이 업데이트되었습니다.");
    };

    let auth_for_reset = auth.clone();
    let reset_profile = move |_| {
        if let Some(user) = auth_for_reset.user().get_untracked() {
            set_name.set(user.name);
            set_email.set(user.email);
            set_phone.set(user.phone.unwrap_or_default());
            set_department.set(user.department.unwrap_or_default());
            set_bio.set(user.bio.unwrap_or_default());
        }
    };

    let toast_for_password = toast.clone();
    let change_password = move |_| {
        let failure = password_change_error(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match failure {
            Some(message) => toast_for_password.show_error(message),
            None => {
                toast_for_password.show_success("비밀번호가 변경되었습니다.");
                set_current_password.set(String::new());
                set_new_password.set(String::new());
                set_confirm_password.set(String::new());
            }
        }
    };

    let tab_class = move |value: AccountTab| {
        if tab.get() == value {
            "px-4 py-2 rounded-md text-sm font-medium transition-colors bg-white text-gray-900 shadow-sm"
        } else {
            "px-4 py-2 rounded-md text-sm font-medium transition-colors text-gray-500 hover:text-gray-900"
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200 px-8 py-6">
                <h1 class="text-2xl font-bold text-gray-900 text-center">"내 계정 관리"</h1>
            </header>

            <div class="p-8">
                <div class="max-w-4xl mx-auto">
                    {move || {
                        let Some(user) = auth.user().get() else {
                            return view! {
                                <div class="text-center text-gray-500 p-8">
                                    "사용자 정보를 불러올 수 없습니다."
                                </div>
                            }
                            .into_view();
                        };

                        let save_profile = save_profile.clone();
                        let reset_profile = reset_profile.clone();
                        let change_password = change_password.clone();

                        view! {
                            <div class="space-y-8">
                                <div class="bg-gradient-to-br from-green-50 to-emerald-100 border border-green-200 rounded-xl p-8">
                                    <div class="flex items-center gap-6">
                                        <div class="w-24 h-24 rounded-full border-4 border-white shadow-lg bg-gradient-to-br from-green-400 to-emerald-500 flex items-center justify-center text-white text-3xl">
                                            {initial(&user.name)}
                                        </div>

                                        <div class="flex-1">
                                            <h3 class="text-2xl font-semibold text-gray-900 mb-1">{user.name.clone()}</h3>
                                            <p class="text-sm text-gray-600">{user.email.clone()}</p>
                                        </div>

                                        <div class="text-right">
                                            <p class="text-sm text-gray-600 mb-1">"가입일"</p>
                                            <p class="font-semibold text-gray-900">
                                                {format_join_date(user.created_at.as_deref())}
                                            </p>
                                            <p class="text-sm text-gray-600 mt-3">"마지막 로그인"</p>
                                            <p class="font-semibold text-gray-900">
                                                {format_last_login(user.last_login_at.as_deref())}
                                            </p>
                                        </div>
                                    </div>
                                </div>

                                <div class="grid w-full grid-cols-2 bg-gray-100 rounded-lg p-1">
                                    <button
                                        class=move || tab_class(AccountTab::Profile)
                                        on:click=move |_| set_tab.set(AccountTab::Profile)
                                    >
                                        "프로필"
                                    </button>
                                    <button
                                        class=move || tab_class(AccountTab::Security)
                                        on:click=move |_| set_tab.set(AccountTab::Security)
                                    >
                                        "보안"
                                    </button>
                                </div>

                                {move || {
                                    let save_profile = save_profile.clone();
                                    let reset_profile = reset_profile.clone();
                                    (tab.get() == AccountTab::Profile).then(|| view! {
                                        <ProfileForm
                                            name=name set_name=set_name
                                            email=email set_email=set_email
                                            phone=phone set_phone=set_phone
                                            department=department set_department=set_department
                                            bio=bio set_bio=set_bio
                                            on_save=save_profile
                                            on_reset=reset_profile
                                        />
                                    })
                                }}

                                {move || {
                                    let change_password = change_password.clone();
                                    (tab.get() == AccountTab::Security).then(|| view! {
                                        <PasswordForm
                                            current=current_password set_current=set_current_password
                                            new=new_password set_new=set_new_password
                                            confirm=confirm_password set_confirm=set_confirm_password
                                            on_change=change_password
                                        />
                                    })
                                }}
                            </div>
                        }
                        .into_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileForm(
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    email: ReadSignal<String>,
    set_email: WriteSignal<String>,
    phone: ReadSignal<String>,
    set_phone: WriteSignal<String>,
    department: ReadSignal<String>,
    set_department: WriteSignal<String>,
    bio: ReadSignal<String>,
    set_bio: WriteSignal<String>,
    on_save: impl Fn(leptos::ev::MouseEvent) + 'static,
    on_reset: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 shadow-sm rounded-xl p-8">
            <div class="mb-6">
                <h3 class="text-xl font-semibold text-gray-900">"개인 정보"</h3>
                <p class="text-sm text-gray-500 mt-1">"프로필 정보를 관리하세요"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="이름" icon="👤">
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <FormField label="이메일" icon="✉️">
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <FormField label="전화번호" icon="📞">
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <FormField label="부서" icon="🏢">
                    <input
                        type="text"
                        prop:value=move || department.get()
                        on:input=move |ev| set_department.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <div class="space-y-2 md:col-span-2">
                    <label class="text-sm text-gray-700">"소개"</label>
                    <textarea
                        rows="4"
                        placeholder="자신을 소개해주세요..."
                        prop:value=move || bio.get()
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                        class="w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg focus:border-green-400 focus:ring-1 focus:ring-green-400 outline-none resize-none"
                    ></textarea>
                </div>
            </div>

            <div class="flex gap-3 mt-8 pt-6 border-t border-gray-200">
                <button
                    class="px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-green-400 hover:bg-green-500 text-gray-900"
                    on:click=on_save
                >
                    "변경사항 저장"
                </button>
                <button
                    class="px-4 py-2 rounded-lg text-sm font-medium transition-colors border border-gray-200 hover:bg-gray-50 text-gray-700"
                    on:click=on_reset
                >
                    "취소"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PasswordForm(
    current: ReadSignal<String>,
    set_current: WriteSignal<String>,
    new: ReadSignal<String>,
    set_new: WriteSignal<String>,
    confirm: ReadSignal<String>,
    set_confirm: WriteSignal<String>,
    on_change: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-gray-200 shadow-sm rounded-xl p-8">
            <div class="mb-6">
                <h3 class="text-xl font-semibold text-gray-900">"비밀번호 변경"</h3>
                <p class="text-sm text-gray-500 mt-1">"안전한 비밀번호로 계정을 보호하세요"</p>
            </div>

            <div class="space-y-4 max-w-xl">
                <FormField label="현재 비밀번호" icon="🔒">
                    <input
                        type="password"
                        placeholder="현재 비밀번호 입력"
                        prop:value=move || current.get()
                        on:input=move |ev| set_current.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <FormField label="새 비밀번호" icon="🔒">
                    <input
                        type="password"
                        placeholder="새 비밀번호 입력"
                        prop:value=move || new.get()
                        on:input=move |ev| set_new.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>

                <FormField label="비밀번호 확인" icon="🔒">
                    <input
                        type="password"
                        placeholder="비밀번호 다시 입력"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        class=FIELD_CLASS
                    />
                </FormField>
            </div>

            <button
                class="px-4 py-2 rounded-lg text-sm font-medium transition-colors bg-green-400 hover:bg-green-500 text-gray-900 mt-6"
                on:click=on_change
            >
                "비밀번호 변경"
            </button>
        </div>
    }
}

const FIELD_CLASS: &str = "w-full pl-10 pr-3 py-2 bg-gray-50 border border-gray-200 rounded-lg focus:border-green-400 focus:ring-1 focus:ring-green-400 outline-none";

/// Labeled input with a leading glyph
#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="text-sm text-gray-700">{label}</label>
            <div class="relative">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-sm text-gray-400">{icon}</span>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_date_renders_korean_long_form() {
        assert_eq!(
            format_join_date(Some("2024-01-15T00:00:00.000Z")),
            "2024년 1월 15일"
        );
        assert_eq!(format_join_date(None), "정보 없음");
        assert_eq!(format_join_date(Some("어제")), "정보 없음");
    }

    #[test]
    fn test_elapsed_label_buckets() {
        assert_eq!(elapsed_label(Duration::seconds(30)), "방금 전");
        assert_eq!(elapsed_label(Duration::minutes(5)), "5분 전");
        assert_eq!(elapsed_label(Duration::minutes(59)), "59분 전");
        assert_eq!(elapsed_label(Duration::minutes(60)), "1시간 전");
        assert_eq!(elapsed_label(Duration::hours(23)), "23시간 전");
        assert_eq!(elapsed_label(Duration::hours(24)), "1일 전");
        assert_eq!(elapsed_label(Duration::days(3)), "3일 전");
    }

    #[test]
    fn test_initial_takes_first_character() {
        assert_eq!(initial("관리자"), "관");
        assert_eq!(initial("Alice"), "A");
        assert_eq!(initial(""), "관");
    }

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(
            password_change_error("", "newpass123", "newpass123"),
            Some("모든 필드를 입력해주세요.")
        );
        assert_eq!(
            password_change_error("old", "newpass123", "different"),
            Some("새 비밀번호와 확인 비밀번호가 일치하지 않습니다.")
        );
        assert_eq!(
            password_change_error("old", "short", "short"),
            Some("비밀번호는 8자 이상이어야 합니다.")
        );
        assert_eq!(
            password_change_error("old", "newpass123", "newpass123"),
            None
        );
    }
}
