use payloads::requests::LoginCredentials;
use payloads::session::{DEMO_PASSWORD, DEMO_USERNAME};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ErrorAlert, FormInput};
use crate::hooks::{use_auth, use_title};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator().unwrap();
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let form_error = use_state(|| None::<String>);

    // Redirect to the catalog once signed in, including after a restored
    // session finishes loading
    {
        let navigator = navigator.clone();
        use_effect_with(auth.is_authenticated(), move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Catalog);
            }
        });
    }

    let sign_in = {
        let auth = auth.clone();
        Callback::from(move |credentials: LoginCredentials| {
            let auth = auth.clone();
            yew::platform::spawn_local(async move {
                // the redirect effect handles success
                let _ = auth.login(credentials).await;
            });
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let form_error = form_error.clone();
        let sign_in = sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.trim().is_empty() || password.is_empty() {
                form_error.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }
            form_error.set(None);
            sign_in.emit(LoginCredentials {
                username: username.trim().to_string(),
                password: (*password).clone(),
            });
        })
    };

    let on_demo = {
        let username = username.clone();
        let password = password.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            username.set(DEMO_USERNAME.into());
            password.set(DEMO_PASSWORD.into());
            form_error.set(None);
            sign_in.emit(LoginCredentials {
                username: DEMO_USERNAME.into(),
                password: DEMO_PASSWORD.into(),
            });
        })
    };

    let error = (*form_error).clone().or_else(|| auth.error().cloned());
    let busy = auth.login_loading() || auth.is_loading();

    html! {
        <div class="flex items-center justify-center min-h-screen px-4">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Sign in"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Buy data packages for your phone lines"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = error {
                        <ErrorAlert message={error} />
                    }

                    <FormInput
                        id="username"
                        label="Username"
                        value={(*username).clone()}
                        on_input={{
                            let username = username.clone();
                            Callback::from(move |v: String| username.set(v))
                        }}
                        autocomplete="username"
                        placeholder="Enter your username"
                        disabled={busy}
                    />
                    <FormInput
                        id="password"
                        label="Password"
                        input_type="password"
                        value={(*password).clone()}
                        on_input={{
                            let password = password.clone();
                            Callback::from(move |v: String| password.set(v))
                        }}
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        disabled={busy}
                    />

                    <button
                        type="submit"
                        disabled={busy}
                        class="w-full flex justify-center py-2 px-4 border border-transparent
                               rounded-md shadow-sm text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {if auth.login_loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="mt-6 text-center space-y-2">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("Demo credentials: {DEMO_USERNAME} / {DEMO_PASSWORD}")}
                    </p>
                    <button
                        onclick={on_demo}
                        disabled={busy}
                        class="text-sm font-medium underline disabled:opacity-50"
                    >
                        {"Sign in with the demo account"}
                    </button>
                </div>
            </div>
        </div>
    }
}
