//! Player sign-in and sign-up

use leptos::prelude::*;
use gameverse_core::auth::{AcceptAll, Authenticator, Credentials, Identity};
use crate::components::NavLink;
use crate::location::{navigate, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Name the player goes by: the chosen username on sign-up, else the email
fn player_name(mode: Mode, username: &str, identity: &Identity) -> String {
    match mode {
        Mode::SignUp if !username.trim().is_empty() => username.trim().to_string(),
        _ => identity.username.clone(),
    }
}

#[component]
pub fn SignInPage(set_route: WriteSignal<Route>) -> impl IntoView {
    let (mode, set_mode) = signal(Mode::SignIn);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get(), password.get());
        match AcceptAll.authenticate(&credentials) {
            Ok(identity) => {
                let name = player_name(mode.get(), &username.get(), &identity);
                match mode.get() {
                    Mode::SignIn => tracing::info!(player = %name, "player signed in"),
                    Mode::SignUp => tracing::info!(player = %name, email = %identity.username, "player signed up"),
                }
                set_error.set(None);
                navigate(set_route, Route::Dashboard);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let mode_tab = move |target: Mode, label: &'static str| view! {
        <button
            type="button"
            class="tab-btn"
            class:active=move || mode.get() == target
            on:click=move |_| {
                set_mode.set(target);
                set_error.set(None);
            }
        >
            {label}
        </button>
    };

    view! {
        <div class="page-body auth-page">
            <div class="auth-card">
                <h1 class="auth-title">
                    {move || match mode.get() {
                        Mode::SignIn => "Welcome Back",
                        Mode::SignUp => "Create Account",
                    }}
                </h1>
                <div class="tab-bar">
                    {mode_tab(Mode::SignIn, "Sign In")}
                    {mode_tab(Mode::SignUp, "Sign Up")}
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::SignUp>
                        <label>
                            "Username"
                            <input
                                type="text"
                                placeholder="Choose a username"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="icon-btn"
                                title="Show password"
                                on:click=move |_| set_show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </label>

                    {move || error.get().map(|message| view! {
                        <p class="form-error">{message}</p>
                    })}

                    <button type="submit" class="btn-primary full-width">
                        {move || match mode.get() {
                            Mode::SignIn => "Sign In",
                            Mode::SignUp => "Create Account",
                        }}
                    </button>
                </form>

                <div class="divider">"or"</div>
                <button
                    class="btn-secondary full-width"
                    on:click=move |_| {
                        tracing::info!("player signed in with Google");
                        navigate(set_route, Route::Dashboard);
                    }
                >
                    "Continue with Google"
                </button>

                <p class="auth-footer">
                    <NavLink route=Route::Home set_route=set_route>
                        "← Back to games"
                    </NavLink>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name() {
        let identity = Identity {
            username: "player@example.com".to_string(),
        };
        assert_eq!(player_name(Mode::SignUp, " NightRider ", &identity), "NightRider");
        assert_eq!(player_name(Mode::SignUp, "  ", &identity), "player@example.com");
        assert_eq!(player_name(Mode::SignIn, "NightRider", &identity), "player@example.com");
    }
}
