use chrono::{DateTime, Local, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InboxMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Newest first, whatever order the server used.
pub fn newest_first(mut messages: Vec<InboxMessage>) -> Vec<InboxMessage> {
    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    messages
}

pub fn local_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%b %e, %Y %H:%M").to_string()
}

async fn error_text(response: gloo_net::http::Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => fallback.to_string(),
    }
}

async fn request_token(username: &str, password: &str) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/login", config::get_backend_url()))
        .json(&LoginRequest { username, password })
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "Login failed").await);
    }
    response
        .json::<LoginResponse>()
        .await
        .map(|body| body.token)
        .map_err(|_| "Failed to parse login response".to_string())
}

async fn fetch_messages(token: &str) -> Result<Vec<InboxMessage>, String> {
    let response = Request::get(&format!("{}/api/messages", config::get_backend_url()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_text(response, "Failed to fetch messages").await);
    }
    response
        .json::<Vec<InboxMessage>>()
        .await
        .map(newest_first)
        .map_err(|_| "Failed to parse messages".to_string())
}

/// Owner-only inbox. The token lives in component state only, so a reload
/// or logout means signing in again.
#[function_component(AdminPortal)]
pub fn admin_portal() -> Html {
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let token = use_state(|| None::<String>);
    let messages = use_state(Vec::<InboxMessage>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let load_messages = {
        let messages = messages.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |token: String| {
            let messages = messages.clone();
            let error = error.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_messages(&token).await {
                    Ok(list) => {
                        messages.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load messages: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_login = {
        let username = username.clone();
        let password = password.clone();
        let token = token.clone();
        let error = error.clone();
        let loading = loading.clone();
        let load_messages = load_messages.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*username).clone();
            let password = (*password).clone();
            let token = token.clone();
            let error = error.clone();
            let loading = loading.clone();
            let load_messages = load_messages.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match request_token(&username, &password).await {
                    Ok(session) => {
                        error.set(None);
                        token.set(Some(session.clone()));
                        load_messages.emit(session);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_refresh = {
        let token = token.clone();
        let load_messages = load_messages.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = (*token).clone() {
                load_messages.emit(session);
            }
        })
    };

    let on_logout = {
        let token = token.clone();
        let username = username.clone();
        let password = password.clone();
        let messages = messages.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            token.set(None);
            username.set(String::new());
            password.set(String::new());
            messages.set(Vec::new());
            error.set(None);
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    let style = html! {
        <style>
            {r#"
            .admin-portal {
                min-height: 100vh;
                background: #1a1a1a;
                color: #fff;
                padding: 4rem 1.5rem;
            }
            .admin-card {
                max-width: 420px;
                margin: 10vh auto 0;
                padding: 2.5rem;
                background: #262626;
                border-radius: 1rem;
            }
            .admin-card h1, .inbox-header h1 {
                font-family: var(--font-display);
                font-size: 2rem;
                margin-bottom: 1.5rem;
            }
            .admin-form { display: flex; flex-direction: column; gap: 1rem; }
            .admin-form input {
                padding: 0.8rem 1rem;
                background: #1a1a1a;
                border: 1px solid #444;
                border-radius: 0.5rem;
                color: #fff;
            }
            .admin-button {
                padding: 0.8rem 1.5rem;
                background: #EF4444;
                color: #fff;
                font-weight: 700;
                border-radius: 0.5rem;
            }
            .admin-button.secondary { background: transparent; border: 1px solid #555; }
            .admin-button:disabled { opacity: 0.6; cursor: wait; }
            .admin-error { color: #fca5a5; margin-top: 1rem; }
            .inbox { max-width: 900px; margin: 0 auto; }
            .inbox-header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
            .inbox-actions { display: flex; gap: 0.75rem; }
            .inbox-empty { color: #999; text-align: center; padding: 4rem 0; }
            .inbox-item {
                padding: 1.5rem;
                margin-bottom: 1rem;
                background: #262626;
                border-left: 4px solid #7A3F91;
                border-radius: 0.5rem;
            }
            .inbox-meta { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 0.75rem; }
            .inbox-from { font-weight: 700; }
            .inbox-from a { color: #c4a1d4; font-weight: 400; margin-left: 0.5rem; }
            .inbox-time { color: #999; font-size: 0.875rem; }
            .inbox-body { white-space: pre-wrap; line-height: 1.5; }
            "#}
        </style>
    };

    let error_view = match &*error {
        Some(e) => html! { <p class="admin-error">{e}</p> },
        None => html! {},
    };

    if token.is_none() {
        let on_username = {
            let username = username.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                username.set(input.value());
            })
        };
        let on_password = {
            let password = password.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                password.set(input.value());
            })
        };

        return html! {
            <div class="admin-portal">
                { style }
                <div class="admin-card">
                    <h1>{"Admin Login"}</h1>
                    <form class="admin-form" onsubmit={on_login}>
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                        <button class="admin-button" type="submit" disabled={*loading}>
                            { if *loading { "Signing in..." } else { "Login" } }
                        </button>
                        <button class="admin-button secondary" type="button" onclick={on_back}>
                            {"Back to site"}
                        </button>
                    </form>
                    { error_view }
                </div>
            </div>
        };
    }

    html! {
        <div class="admin-portal">
            { style }
            <div class="inbox">
                <div class="inbox-header">
                    <h1>{format!("Messages ({})", messages.len())}</h1>
                    <div class="inbox-actions">
                        <button class="admin-button secondary" onclick={on_refresh} disabled={*loading}>
                            { if *loading { "Loading..." } else { "Refresh" } }
                        </button>
                        <button class="admin-button secondary" onclick={on_back}>{"Back to site"}</button>
                        <button class="admin-button" onclick={on_logout}>{"Logout"}</button>
                    </div>
                </div>
                { error_view }
                {
                    if messages.is_empty() && !*loading {
                        html! { <p class="inbox-empty">{"No messages yet."}</p> }
                    } else {
                        html! {
                            <>{ for messages.iter().map(|msg| html! {
                                <div key={msg.id} class="inbox-item">
                                    <div class="inbox-meta">
                                        <span class="inbox-from">
                                            { &msg.name }
                                            <a href={format!("mailto:{}", msg.email)}>{ &msg.email }</a>
                                        </span>
                                        <span class="inbox-time">{ local_time(&msg.timestamp) }</span>
                                    </div>
                                    <p class="inbox-body">{ &msg.message }</p>
                                </div>
                            }) }</>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn message(id: u64, secs: i64) -> InboxMessage {
        InboxMessage {
            id,
            name: format!("n{}", id),
            email: "a@b.com".into(),
            message: "hi".into(),
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn inbox_is_sorted_newest_first() {
        let sorted = newest_first(vec![message(1, 100), message(3, 300), message(2, 200)]);
        let ids: Vec<u64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn same_timestamp_falls_back_to_id() {
        let sorted = newest_first(vec![message(1, 100), message(2, 100)]);
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn server_payload_parses() {
        let raw = r#"[{"id": 1717000000000, "name": "A", "email": "a@b.com", "message": "hi", "timestamp": "2024-05-29T16:26:40Z"}]"#;
        let parsed: Vec<InboxMessage> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[0].id, 1717000000000);
        assert_eq!(parsed[0].timestamp, Utc.timestamp_opt(1717000000, 0).unwrap());
    }
}
