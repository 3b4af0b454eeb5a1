//! Floating chat assistant with scripted replies

use crate::app::use_config;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::shared::chat::Sender;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ChatBot() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let chat = ctx.chat;
    let (input, set_input) = signal(String::new());
    let list_ref = NodeRef::<Div>::new();

    let reply_delay = config.chat.reply_delay_ms;
    let bot_reply = StoredValue::new(config.chat.bot_reply.clone());

    let is_open = move || chat.with(|c| c.is_open());

    // keep the newest message in view
    Effect::new(move |_| {
        chat.track();
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send = move || {
        let text = input.get_untracked();
        let mut ticket = None;
        chat.update(|c| ticket = c.send(&text, Utc::now()));
        let Some(ticket) = ticket else {
            return;
        };
        set_input.set(String::new());

        spawn_local(async move {
            TimeoutFuture::new(reply_delay).await;
            let reply = bot_reply.get_value();
            chat.try_update(|c| c.deliver(ticket, &reply, Utc::now()));
        });
    };

    view! {
        <button
            class="chatbot__toggle"
            aria-label="Toggle Chatbot"
            on:click=move |_| chat.update(|c| c.toggle())
        >
            {move || if is_open() { icon("x") } else { icon("message-square") }}
        </button>

        <Show when=is_open>
            <div class="chatbot__panel">
                <div class="chatbot__header">
                    <div class="chatbot__title">
                        {icon("bot")}
                        <span>"Chat Assistant"</span>
                    </div>
                    <button class="top-header__icon-btn" on:click=move |_| chat.update(|c| c.toggle())>
                        {icon("x")}
                    </button>
                </div>

                <div class="chatbot__messages" node_ref=list_ref>
                    <For
                        each=move || chat.with(|c| c.messages().to_vec())
                        key=|msg| msg.id
                        children=move |msg| {
                            let from_user = msg.sender == Sender::User;
                            view! {
                                <div class="chatbot__row" class:chatbot__row--user=from_user>
                                    {(!from_user).then(|| view! {
                                        <span class="chatbot__avatar">{icon("bot")}</span>
                                    })}
                                    <div class="chatbot__bubble" class:chatbot__bubble--user=from_user>
                                        {msg.text.clone()}
                                    </div>
                                    {from_user.then(|| view! {
                                        <span class="chatbot__avatar">"U"</span>
                                    })}
                                </div>
                            }
                        }
                    />
                </div>

                <form
                    class="chatbot__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Type a message..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="button button--primary button--icon">
                        {icon("send")}
                    </button>
                </form>
            </div>
        </Show>
    }
}
