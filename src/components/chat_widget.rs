//! Simulated live-chat widget with a canned auto-reply.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::chat::AUTO_REPLY_DELAY_MS;
use crate::state::chat::{ChatAuthor, ChatState};

/// Floating chat toggle plus the chat panel.
///
/// Messages are local only; there is no transport. Sending a message
/// schedules the canned support reply on a fixed delay.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the input when the panel opens.
    Effect::new(move || {
        let open = chat.get().open;
        #[cfg(feature = "hydrate")]
        {
            if open {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = open;
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let mut accepted = false;
        chat.update(|c| accepted = c.push_visitor(&text));
        if !accepted {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_REPLY_DELAY_MS)).await;
            chat.update(ChatState::push_auto_reply);
        });
    };

    let on_send = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_toggle = move |_| chat.update(ChatState::toggle);
    let on_close = move |_| chat.update(ChatState::close);

    let container_class = move || {
        if chat.get().open {
            "chat-container active"
        } else {
            "chat-container"
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-widget">
            <button class="chat-toggle" aria-label="Toggle chat" on:click=on_toggle>
                "\u{1f4ac}"
            </button>

            <div class=container_class>
                <div class="chat-header">
                    <span class="chat-header__title">"Live Chat"</span>
                    <button class="close-chat" aria-label="Close chat" on:click=on_close>
                        "\u{00d7}"
                    </button>
                </div>

                <div class="chat-messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-messages__empty">
                                    "How can we help? Send us a message."
                                </div>
                            }
                                .into_any();
                        }

                        messages
                            .iter()
                            .map(|msg| {
                                let class = match msg.author {
                                    ChatAuthor::Visitor => "message user-message",
                                    ChatAuthor::Bot => "message bot-message",
                                };
                                let body = msg.body.clone();
                                view! {
                                    <div class=class>
                                        <p>{body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <div class="chat-input">
                    <input
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        node_ref=input_ref
                    />
                    <button class="send-message" on:click=on_send disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
