use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{tel_href, ContactForm, CONTACT_EMAIL, CONTACT_PHONE};

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    title: String,
    description: String,
    is_err: bool,
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (toast, set_toast) = signal(None::<Toast>);

    Effect::new(move |_| {
        if toast.with(Option::is_none) {
            return;
        }
        match set_timeout_with_handle(move || set_toast.set(None), TOAST_DURATION) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't schedule toast dismissal: {e:?}"),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.with_untracked(|f| f.draft(CONTACT_EMAIL));
        match draft {
            Ok(href) => {
                if let Err(e) = window().location().set_href(&href) {
                    log::error!("couldn't open mail draft: {e:?}");
                }
                form.set(ContactForm::default());
                set_toast.set(Some(Toast {
                    title: "Draft ready".to_string(),
                    description: "Opening your email client with your details pre-filled."
                        .to_string(),
                    is_err: false,
                }));
            }
            Err(e) => set_toast.set(Some(Toast {
                title: "Can't send yet".to_string(),
                description: e.to_string(),
                is_err: true,
            })),
        }
    };

    view! {
        <section id="contact" class="py-16 lg:py-24">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold mb-8">"Contact Me"</h2>
                <div class="grid gap-8 lg:grid-cols-2">
                    <form class="space-y-4" on:submit=on_submit>
                        <label class="block">
                            <span class="text-sm font-medium">"Name"</span>
                            <input
                                type="text"
                                required
                                class="mt-1 w-full px-4 py-2 rounded-md border border-muted bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="block">
                            <span class="text-sm font-medium">"Email"</span>
                            <input
                                type="email"
                                required
                                class="mt-1 w-full px-4 py-2 rounded-md border border-muted bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="block">
                            <span class="text-sm font-medium">"Message"</span>
                            <textarea
                                rows="5"
                                required
                                class="mt-1 w-full px-4 py-2 rounded-md border border-muted bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button
                            type="submit"
                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                        >
                            "Send message"
                        </button>
                        <p class="text-sm text-muted">
                            "Prefer email? "
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="underline">
                                {CONTACT_EMAIL}
                            </a>
                        </p>
                    </form>
                    <div class="space-y-4">
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="block p-4 rounded-lg border border-muted/30 hover:bg-brightBlack/20"
                        >
                            <span class="block font-medium">"Email"</span>
                            <span class="text-sm text-muted">{CONTACT_EMAIL}</span>
                        </a>
                        <a
                            href=tel_href(CONTACT_PHONE)
                            class="block p-4 rounded-lg border border-muted/30 hover:bg-brightBlack/20"
                        >
                            <span class="block font-medium">"Phone"</span>
                            <span class="text-sm text-muted">{CONTACT_PHONE}</span>
                        </a>
                    </div>
                </div>
            </div>
            {move || {
                toast
                    .get()
                    .map(|t| {
                        view! {
                            <div
                                role="status"
                                class=if t.is_err {
                                    "fixed bottom-6 right-6 z-50 p-4 rounded-md shadow-lg bg-red/20 border border-red/40"
                                } else {
                                    "fixed bottom-6 right-6 z-50 p-4 rounded-md shadow-lg bg-green/20 border border-green/40"
                                }
                            >
                                <p class="font-medium">{t.title}</p>
                                <p class="text-sm">{t.description}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
