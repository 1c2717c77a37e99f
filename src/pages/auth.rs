//! Auth Pages
//!
//! Login, signup and password reset cards shown while no session is
//! active. Signup and reset simulate their API round trips with short
//! delays before handing control back to the login card.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::state::{use_auth, use_toast};

/// Loose name@domain.tld shape check, rejecting whitespace
fn valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn after_delay(millis: u32, callback: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, callback).forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn after_delay(_millis: u32, _callback: impl FnOnce() + 'static) {}

const SUBMIT_CLASS: &str = "w-full bg-[#1a5632] hover:bg-[#143d24] disabled:opacity-50 text-white h-12 rounded-lg transition-colors";

/// 로그인
#[component]
pub fn Login(
    on_forgot_password: impl Fn() + 'static,
    on_signup: impl Fn() + 'static,
) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            toast.show_error("아이디와 비밀번호를 입력해주세요.");
            return;
        }

        set_submitting.set(true);
        if auth.login(&email, &password) {
            toast.show_success("로그인에 성공했습니다.");
        } else {
            toast.show_error("아이디 또는 비밀번호가 올바르지 않습니다.");
        }
        set_submitting.set(false);
    };

    view! {
        <AuthShell>
            <div class="mb-8 text-center">
                <h1 class="text-2xl text-gray-900 mb-2">"Coredata에 오신걸 환영합니다"</h1>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <AuthField label="아이디" value=email setter=set_email />
                <AuthField label="비밀번호" kind="password" value=password setter=set_password />

                <div class="text-right">
                    <button
                        type="button"
                        on:click=move |_| on_forgot_password()
                        class="text-sm text-blue-600 hover:text-blue-700 transition-colors"
                    >
                        "비밀번호 찾기"
                    </button>
                </div>

                <button type="submit" disabled=move || submitting.get() class=SUBMIT_CLASS>
                    {move || if submitting.get() { "로그인 중..." } else { "로그인" }}
                </button>

                <div class="text-center pt-4">
                    <button
                        type="button"
                        on:click=move |_| on_signup()
                        class="text-sm text-blue-600 hover:text-blue-700 transition-colors"
                    >
                        "회원가입"
                    </button>
                </div>
            </form>
        </AuthShell>
    }
}

/// 회원가입
#[component]
pub fn Signup(on_back: impl Fn() + 'static + Clone) -> impl IntoView {
    let toast = use_toast();

    let (site_name, set_site_name) = create_signal(String::new());
    let (site_domain, set_site_domain) = create_signal(String::new());
    let (shop_url, set_shop_url) = create_signal(String::new());
    let (timezone, set_timezone) = create_signal(String::new());
    let (business_category, set_business_category) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (agreed, set_agreed) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_back_for_header = on_back.clone();
    let toast_for_submit = toast.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let required = [
            (site_name, "사이트 호칭"),
            (site_domain, "사이트 이름"),
            (first_name, "이름"),
            (last_name, "성"),
            (email, "Email"),
            (password, "비밀번호"),
        ];
        for (field, label) in required {
            if field.get_untracked().is_empty() {
                toast_for_submit.show_error(&format!("{}을(를) 입력해주세요.", label));
                return;
            }
        }

        if !agreed.get_untracked() {
            toast_for_submit.show_error("개인정보 제공에 동의해주세요.");
            return;
        }

        if !valid_email(&email.get_untracked()) {
            toast_for_submit.show_error("올바른 이메일 주소를 입력해주세요.");
            return;
        }

        set_submitting.set(true);
        let toast = toast_for_submit.clone();
        let on_back = on_back.clone();
        after_delay(1500, move || {
            toast.show_success("회원가입이 완료되었습니다!");
            set_submitting.set(false);
            after_delay(2000, move || on_back());
        });
    };

    view! {
        <AuthShell>
            <BackToLogin on_back=on_back_for_header />

            <div class="mb-8 text-center">
                <h1 class="text-2xl text-gray-900">"회원가입"</h1>
            </div>

            <form on:submit=on_submit class="space-y-5">
                <AuthField label="사이트 호칭" placeholder="Cafe24" value=site_name setter=set_site_name />
                <AuthField
                    label="사이트 이름 (도메인)"
                    placeholder="공식 사이트 이름을 말씀주세요"
                    value=site_domain
                    setter=set_site_domain
                />
                <AuthField
                    label="쇼핑몰 URL (도메인 주소)"
                    placeholder="https: 성장통.com"
                    value=shop_url
                    setter=set_shop_url
                />
                <AuthField
                    label="사이트 타임존"
                    placeholder="아시아 / 서울"
                    value=timezone
                    setter=set_timezone
                />
                <AuthField
                    label="업종 카테고리 (패션)"
                    value=business_category
                    setter=set_business_category
                />

                <div class="grid grid-cols-2 gap-4">
                    <AuthField label="이름" value=first_name setter=set_first_name />
                    <AuthField label="성" value=last_name setter=set_last_name />
                </div>

                <AuthField label="Email" kind="email" value=email setter=set_email />
                <AuthField label="비밀번호" kind="password" value=password setter=set_password />

                <label class="flex items-center gap-2 pt-2 text-sm text-gray-700 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || agreed.get()
                        on:change=move |ev| set_agreed.set(event_target_checked(&ev))
                        class="w-4 h-4 rounded border-gray-300"
                    />
                    "개인정보 제공 동의"
                </label>

                <button type="submit" disabled=move || submitting.get() class=SUBMIT_CLASS>
                    {move || if submitting.get() { "가입 중..." } else { "가입하기" }}
                </button>
            </form>
        </AuthShell>
    }
}

/// 비밀번호 찾기
#[component]
pub fn ForgotPassword(on_back: impl Fn() + 'static + Clone) -> impl IntoView {
    let toast = use_toast();

    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_back_for_header = on_back.clone();
    let toast_for_submit = toast.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let address = email.get_untracked();
        if address.is_empty() {
            toast_for_submit.show_error("이메일 주소를 입력해주세요.");
            return;
        }
        if !valid_email(&address) {
            toast_for_submit.show_error("올바른 이메일 주소를 입력해주세요.");
            return;
        }

        set_submitting.set(true);
        let toast = toast_for_submit.clone();
        let on_back = on_back.clone();
        after_delay(1000, move || {
            toast.show_success("비밀번호 재설정 링크가 이메일로 전송되었습니다.");
            set_email.set(String::new());
            set_submitting.set(false);
            after_delay(2000, move || on_back());
        });
    };

    view! {
        <AuthShell>
            <BackToLogin on_back=on_back_for_header />

            <div class="mb-8 text-center">
                <h1 class="text-2xl text-gray-900 mb-2">"비밀번호를 잊으셨나요?"</h1>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <AuthField
                    label="이메일 주소"
                    kind="email"
                    placeholder="sungjangtong@gmail.com"
                    value=email
                    setter=set_email
                />

                <button type="submit" disabled=move || submitting.get() class=SUBMIT_CLASS>
                    {move || if submitting.get() { "전송 중..." } else { "이메일 주소로 비밀번호 전송하기" }}
                </button>
            </form>
        </AuthShell>
    }
}

/// Centered card on the gradient backdrop
#[component]
fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="bg-white rounded-2xl shadow-lg p-8">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn BackToLogin(on_back: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_back()
            class="mb-6 flex items-center gap-2 text-gray-600 hover:text-gray-900 transition-colors"
        >
            <span>"←"</span>
            <span class="text-sm">"로그인으로 돌아가기"</span>
        </button>
    }
}

#[component]
fn AuthField(
    #[prop(into)] label: String,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: ReadSignal<String>,
    setter: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="text-sm text-gray-700">{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| setter.set(event_target_value(&ev))
                class="w-full px-3 py-2 bg-gray-50 border border-gray-200 rounded-lg focus:border-green-400 focus:ring-1 focus:ring-green-400 outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_accepts_plain_addresses() {
        assert!(valid_email("admin@cafe24.com"));
        assert!(valid_email("park.jimin@growth.co.kr"));
    }

    #[test]
    fn test_valid_email_rejects_malformed_addresses() {
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign"));
        assert!(!valid_email("two@@signs.com"));
        assert!(!valid_email("spaced name@site.com"));
        assert!(!valid_email("nodot@site"));
        assert!(!valid_email("trailing@site."));
        assert!(!valid_email("leading@.site"));
    }
}
