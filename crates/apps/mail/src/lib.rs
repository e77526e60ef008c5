//! Simulated mail client backed by a fixed inbox.
//!
//! Pure presentation: no shared state, no delivery, no persistence. The only
//! interactivity is selecting which canned message the reading pane shows.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MailMessage {
    id: &'static str,
    sender: &'static str,
    subject: &'static str,
    received: &'static str,
    body: &'static [&'static str],
}

const FOLDERS: &[(&str, usize)] = &[("Inbox", 4), ("Sent", 12), ("Drafts", 2), ("Archive", 48)];

static INBOX: [MailMessage; 4] = [
    MailMessage {
        id: "welcome",
        sender: "The Desktop",
        subject: "Welcome to the portfolio",
        received: "9:02 AM",
        body: &[
            "Thanks for stopping by. Everything on this desktop is part of the site.",
            "Try dragging this window around, or minimize it and bring it back from the dock.",
        ],
    },
    MailMessage {
        id: "projects",
        sender: "Notes",
        subject: "Project write-ups moved",
        received: "8:47 AM",
        body: &[
            "The longer project write-ups now live in the Notes app.",
            "The dock icon with the document glyph will take you there.",
        ],
    },
    MailMessage {
        id: "uptime",
        sender: "Activity",
        subject: "Weekly status: all green",
        received: "Yesterday",
        body: &[
            "Windows opened: plenty. Windows leaked: zero.",
            "No background tasks were harmed in the making of this report.",
        ],
    },
    MailMessage {
        id: "colophon",
        sender: "The Desktop",
        subject: "How this site is built",
        received: "Monday",
        body: &[
            "The shell is a small window manager with a dock and a menu bar.",
            "See the Notes app for the colophon.",
        ],
    },
];

#[component]
pub fn MailApp() -> impl IntoView {
    let selected = create_rw_signal(INBOX[0].id);

    view! {
        <div class="app app-mail">
            <aside class="mail-folders">
                <For each=|| FOLDERS.to_vec() key=|(name, _)| *name let:folder>
                    <div class="mail-folder">
                        <span>{folder.0}</span>
                        <span class="mail-folder-count">{folder.1}</span>
                    </div>
                </For>
            </aside>
            <div class="mail-list" role="listbox" aria-label="Inbox">
                <For each=|| INBOX.to_vec() key=|message| message.id let:message>
                    <button
                        class=move || {
                            if selected.get() == message.id {
                                "mail-list-item selected"
                            } else {
                                "mail-list-item"
                            }
                        }
                        role="option"
                        aria-selected=move || selected.get() == message.id
                        on:click=move |_| selected.set(message.id)
                    >
                        <span class="mail-list-sender">{message.sender}</span>
                        <span class="mail-list-subject">{message.subject}</span>
                        <span class="mail-list-time">{message.received}</span>
                    </button>
                </For>
            </div>
            <article class="mail-reading-pane">
                {move || {
                    let message = INBOX
                        .iter()
                        .find(|m| m.id == selected.get())
                        .unwrap_or(&INBOX[0]);
                    view! {
                        <h2>{message.subject}</h2>
                        <p class="mail-meta">{format!("From: {}", message.sender)}</p>
                        <For each=move || message.body.to_vec() key=|line| *line let:line>
                            <p>{line}</p>
                        </For>
                    }
                }}
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_message_ids_are_unique() {
        let mut ids: Vec<&str> = INBOX.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), INBOX.len());
    }

    #[test]
    fn every_message_has_a_body() {
        assert!(INBOX.iter().all(|m| !m.body.is_empty()));
    }
}
