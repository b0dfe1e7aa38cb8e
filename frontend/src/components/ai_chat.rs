use std::rc::Rc;

use chrono::{DateTime, Local, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;

pub const GREETING: &str =
    "Hi! I'm Md Umor's AI Assistant. Ask me anything about his skills, projects, or experience!";
pub const NETWORK_TROUBLE_REPLY: &str =
    "I'm having trouble connecting right now. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub id: usize,
    pub role: ChatRole,
    pub text: String,
    pub reasoning_details: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HistoryLine<'a> {
    pub role: ChatRole,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<&'a Value>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: Vec<HistoryLine<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
    #[serde(default)]
    reasoning_details: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    pub entries: Vec<ChatEntry>,
    pub pending: bool,
}

pub enum TranscriptAction {
    Ask(String),
    Answer {
        text: String,
        reasoning_details: Option<Value>,
    },
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            entries: vec![ChatEntry {
                id: 0,
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
                reasoning_details: None,
                created_at: Utc::now(),
            }],
            pending: false,
        }
    }
}

impl Transcript {
    /// Everything said so far, in the shape the relay expects.
    pub fn history(&self) -> Vec<HistoryLine<'_>> {
        self.entries
            .iter()
            .map(|entry| HistoryLine {
                role: entry.role,
                text: &entry.text,
                reasoning_details: entry.reasoning_details.as_ref(),
            })
            .collect()
    }

    fn push(&mut self, role: ChatRole, text: String, reasoning_details: Option<Value>) {
        let id = self.entries.last().map_or(0, |entry| entry.id + 1);
        self.entries.push(ChatEntry {
            id,
            role,
            text,
            reasoning_details,
            created_at: Utc::now(),
        });
    }
}

impl Reducible for Transcript {
    type Action = TranscriptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TranscriptAction::Ask(text) => {
                // one question in flight at a time
                if next.pending || text.trim().is_empty() {
                    return self;
                }
                next.push(ChatRole::User, text, None);
                next.pending = true;
            }
            TranscriptAction::Answer { text, reasoning_details } => {
                next.push(ChatRole::Assistant, text, reasoning_details);
                next.pending = false;
            }
        }
        Rc::new(next)
    }
}

async fn ask_relay(message: &str, history: Vec<HistoryLine<'_>>) -> TranscriptAction {
    let request = Request::post(&format!("{}/api/chat", config::get_backend_url()))
        .json(&ChatRequest { message, history });

    let response = match request {
        Ok(request) => request.send().await,
        Err(e) => Err(e),
    };

    match response {
        Ok(response) if response.ok() => match response.json::<ChatResponse>().await {
            Ok(reply) => TranscriptAction::Answer {
                text: reply.text,
                reasoning_details: reply.reasoning_details,
            },
            Err(e) => {
                log::error!("Failed to parse chat reply: {:?}", e);
                trouble()
            }
        },
        Ok(response) => {
            log::error!("Chat request failed with status {}", response.status());
            trouble()
        }
        Err(e) => {
            log::error!("Chat request failed: {:?}", e);
            trouble()
        }
    }
}

fn trouble() -> TranscriptAction {
    TranscriptAction::Answer {
        text: NETWORK_TROUBLE_REPLY.to_string(),
        reasoning_details: None,
    }
}

#[function_component(AiChat)]
pub fn ai_chat() -> Html {
    let is_open = use_state(|| false);
    let input = use_state(String::new);
    let transcript = use_reducer(Transcript::default);
    let bottom_ref = use_node_ref();

    {
        let bottom_ref = bottom_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(bottom) = bottom_ref.cast::<web_sys::Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    bottom.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
            (transcript.entries.len(), *is_open),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onsubmit = {
        let input = input.clone();
        let transcript = transcript.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = input.trim().to_string();
            if text.is_empty() || transcript.pending {
                return;
            }
            // history is what was said before this question
            let before = (*transcript).clone();
            input.set(String::new());
            transcript.dispatch(TranscriptAction::Ask(text.clone()));

            let transcript = transcript.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let lines = before.history();
                transcript.dispatch(ask_relay(&text, lines).await);
            });
        })
    };

    html! {
        <>
            <style>
                {r#"
                .chat-launcher {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 60;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #7A3F91;
                    color: #fff;
                    font-size: 1.5rem;
                    box-shadow: 0 10px 25px rgba(122, 63, 145, 0.4);
                    transition: transform 0.3s ease;
                }
                .chat-launcher:hover { transform: scale(1.1); }
                .chat-window {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 6rem;
                    z-index: 60;
                    width: min(380px, calc(100vw - 3rem));
                    height: 520px;
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    color: #1a1a1a;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .chat-header {
                    padding: 1rem 1.25rem;
                    background: #7A3F91;
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .chat-messages {
                    flex: 1;
                    overflow-y: auto;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    background: #f7f3fa;
                }
                .chat-bubble {
                    max-width: 85%;
                    padding: 0.75rem 1rem;
                    border-radius: 1rem;
                    font-size: 0.9rem;
                    line-height: 1.4;
                    white-space: pre-wrap;
                }
                .chat-bubble.user { align-self: flex-end; background: #EF4444; color: #fff; }
                .chat-bubble.assistant { align-self: flex-start; background: #fff; border: 1px solid #eee; }
                .chat-meta { display: block; margin-top: 0.35rem; font-size: 0.7rem; opacity: 0.6; }
                .chat-reasoning { display: block; margin-top: 0.25rem; font-size: 0.7rem; color: #7A3F91; }
                .chat-typing { align-self: flex-start; font-size: 0.8rem; color: #7A3F91; font-style: italic; }
                .chat-input-row { display: flex; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid #eee; }
                .chat-input-row input {
                    flex: 1;
                    padding: 0.6rem 0.9rem;
                    border: 1px solid #ddd;
                    border-radius: 999px;
                    outline: none;
                }
                .chat-input-row button {
                    padding: 0.6rem 1rem;
                    border-radius: 999px;
                    background: #7A3F91;
                    color: #fff;
                    font-weight: 700;
                }
                .chat-input-row button:disabled { opacity: 0.5; cursor: not-allowed; }
                "#}
            </style>
            {
                if *is_open {
                    html! {
                        <div class="chat-window">
                            <div class="chat-header">
                                <span>{"Ask about Md Umor"}</span>
                                <button onclick={toggle.clone()} aria-label="Close chat">{"✕"}</button>
                            </div>
                            <div class="chat-messages">
                                { for transcript.entries.iter().map(|entry| {
                                    let role_class = match entry.role {
                                        ChatRole::User => "user",
                                        ChatRole::Assistant => "assistant",
                                    };
                                    html! {
                                        <div key={entry.id} class={classes!("chat-bubble", role_class)}>
                                            { &entry.text }
                                            {
                                                if entry.reasoning_details.is_some() {
                                                    html! { <span class="chat-reasoning">{"Reasoning included"}</span> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <span class="chat-meta">
                                                { entry.created_at.with_timezone(&Local).format("%H:%M").to_string() }
                                            </span>
                                        </div>
                                    }
                                }) }
                                {
                                    if transcript.pending {
                                        html! { <div class="chat-typing">{"Thinking..."}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div ref={bottom_ref}></div>
                            </div>
                            <form class="chat-input-row" {onsubmit}>
                                <input
                                    type="text"
                                    placeholder="Ask me anything..."
                                    value={(*input).clone()}
                                    disabled={transcript.pending}
                                    {oninput}
                                />
                                <button type="submit" disabled={transcript.pending || input.trim().is_empty()}>
                                    {"Send"}
                                </button>
                            </form>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button class="chat-launcher" onclick={toggle} aria-label="Open chat">
                { if *is_open { "✕" } else { "💬" } }
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer(text: &str, reasoning_details: Option<Value>) -> TranscriptAction {
        TranscriptAction::Answer {
            text: text.to_string(),
            reasoning_details,
        }
    }

    #[test]
    fn starts_with_the_greeting() {
        let transcript = Transcript::default();
        assert_eq!(transcript.entries.len(), 1);
        assert_eq!(transcript.entries[0].role, ChatRole::Assistant);
        assert_eq!(transcript.entries[0].text, GREETING);
        assert!(!transcript.pending);
    }

    #[test]
    fn asking_marks_the_transcript_pending() {
        let transcript = Rc::new(Transcript::default()).reduce(TranscriptAction::Ask("Hi".into()));
        assert!(transcript.pending);
        assert_eq!(transcript.entries.len(), 2);
        assert_eq!(transcript.entries[1].role, ChatRole::User);
        assert_eq!(transcript.entries[1].text, "Hi");
    }

    #[test]
    fn second_question_waits_for_the_first_answer() {
        let transcript = Rc::new(Transcript::default())
            .reduce(TranscriptAction::Ask("first".into()))
            .reduce(TranscriptAction::Ask("second".into()));
        assert_eq!(transcript.entries.len(), 2);

        let transcript = transcript
            .reduce(answer("reply", None))
            .reduce(TranscriptAction::Ask("second".into()));
        assert_eq!(transcript.entries.len(), 4);
        assert_eq!(transcript.entries[3].text, "second");
    }

    #[test]
    fn blank_question_is_ignored() {
        let transcript = Rc::new(Transcript::default()).reduce(TranscriptAction::Ask("   ".into()));
        assert_eq!(transcript.entries.len(), 1);
        assert!(!transcript.pending);
    }

    #[test]
    fn answer_clears_pending_and_keeps_reasoning() {
        let details = json!([{"type": "reasoning.text", "text": "t"}]);
        let transcript = Rc::new(Transcript::default())
            .reduce(TranscriptAction::Ask("Hi".into()))
            .reduce(answer("Hello!", Some(details.clone())));
        assert!(!transcript.pending);
        assert_eq!(transcript.entries[2].reasoning_details, Some(details));

        let ids: Vec<usize> = transcript.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn history_serializes_for_the_relay() {
        let details = json!({"opaque": true});
        let transcript = Rc::new(Transcript::default())
            .reduce(TranscriptAction::Ask("Hi".into()))
            .reduce(answer("Hello!", Some(details)));

        let body = serde_json::to_value(ChatRequest {
            message: "next",
            history: transcript.history(),
        })
        .unwrap();

        assert_eq!(body["message"], "next");
        assert_eq!(body["history"][0]["role"], "assistant");
        assert_eq!(body["history"][1]["role"], "user");
        assert!(body["history"][1].get("reasoning_details").is_none());
        assert_eq!(body["history"][2]["reasoning_details"]["opaque"], true);
    }
}
