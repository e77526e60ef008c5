//! Simulated notes app; the portfolio's long-form content lives here.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Note {
    id: &'static str,
    title: &'static str,
    paragraphs: &'static [&'static str],
}

static NOTES: [Note; 3] = [
    Note {
        id: "about",
        title: "About this site",
        paragraphs: &[
            "This portfolio pretends to be a desktop operating system. The menu bar, \
             the dock, and every window you can drag around are part of the act.",
            "There is exactly one honest piece of machinery behind the curtain: the \
             window manager that tracks which of these little apps are open, which one \
             you are looking at, and where their windows sit.",
            "Everything else is set dressing. The mail is canned, the photos are \
             gradients, and the music player has never produced a sound.",
        ],
    },
    Note {
        id: "projects",
        title: "Projects",
        paragraphs: &[
            "Selected work lives here in place of a traditional project page.",
            "The desktop shell itself is the headline project: a single-focus, \
             one-window-per-app manager with dock and menu-bar integration, built so \
             its state machine can be tested without a browser in sight.",
            "Older entries: a static-site pipeline, a home-lab dashboard, and an \
             embarrassing number of half-finished game jams.",
        ],
    },
    Note {
        id: "colophon",
        title: "Colophon",
        paragraphs: &[
            "Built as a Rust workspace compiled to WebAssembly.",
            "The shell's window management is plain data and plain functions; the UI \
             layer subscribes to it and draws whatever it says.",
            "No analytics, no cookies, no backend. Closing a window really does \
             destroy it.",
        ],
    },
];

#[component]
pub fn NotesApp() -> impl IntoView {
    let selected = create_rw_signal(NOTES[0].id);

    view! {
        <div class="app app-notes">
            <aside class="notes-list" role="listbox" aria-label="Notes">
                <For each=|| NOTES.to_vec() key=|note| note.id let:note>
                    <button
                        class=move || {
                            if selected.get() == note.id {
                                "notes-list-item selected"
                            } else {
                                "notes-list-item"
                            }
                        }
                        role="option"
                        aria-selected=move || selected.get() == note.id
                        on:click=move |_| selected.set(note.id)
                    >
                        {note.title}
                    </button>
                </For>
            </aside>
            <article class="notes-body">
                {move || {
                    let note = NOTES
                        .iter()
                        .find(|n| n.id == selected.get())
                        .unwrap_or(&NOTES[0]);
                    view! {
                        <h2>{note.title}</h2>
                        <For each=move || note.paragraphs.to_vec() key=|p| *p let:paragraph>
                            <p>{paragraph}</p>
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
    fn note_ids_are_unique() {
        let mut ids: Vec<&str> = NOTES.iter().map(|n| n.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NOTES.len());
    }

    #[test]
    fn every_note_has_content() {
        assert!(NOTES.iter().all(|n| !n.paragraphs.is_empty()));
    }
}
