//! Simulated photo library rendered from gradient placeholders.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Photo {
    id: &'static str,
    caption: &'static str,
    gradient: &'static str,
}

const LIBRARY: [Photo; 8] = [
    Photo {
        id: "harbor",
        caption: "Harbor at dusk",
        gradient: "linear-gradient(135deg,#f6d365,#fda085)",
    },
    Photo {
        id: "ridge",
        caption: "Ridge line",
        gradient: "linear-gradient(135deg,#a1c4fd,#c2e9fb)",
    },
    Photo {
        id: "moss",
        caption: "Moss wall",
        gradient: "linear-gradient(135deg,#d4fc79,#96e6a1)",
    },
    Photo {
        id: "dunes",
        caption: "Dunes",
        gradient: "linear-gradient(135deg,#fbc2eb,#a6c1ee)",
    },
    Photo {
        id: "pier",
        caption: "Long pier",
        gradient: "linear-gradient(135deg,#84fab0,#8fd3f4)",
    },
    Photo {
        id: "lights",
        caption: "City lights",
        gradient: "linear-gradient(135deg,#30cfd0,#330867)",
    },
    Photo {
        id: "frost",
        caption: "First frost",
        gradient: "linear-gradient(135deg,#e0c3fc,#8ec5fc)",
    },
    Photo {
        id: "ember",
        caption: "Campfire",
        gradient: "linear-gradient(135deg,#f83600,#f9d423)",
    },
];

#[component]
pub fn PhotosApp() -> impl IntoView {
    view! {
        <div class="app app-photos">
            <header class="photos-toolbar">
                <span>"Library"</span>
                <span class="photos-count">{format!("{} items", LIBRARY.len())}</span>
            </header>
            <div class="photos-grid">
                <For each=|| LIBRARY.to_vec() key=|photo| photo.id let:photo>
                    <figure class="photos-tile">
                        <div
                            class="photos-thumb"
                            style=format!("background:{};", photo.gradient)
                            aria-label=photo.caption
                        ></div>
                        <figcaption>{photo.caption}</figcaption>
                    </figure>
                </For>
            </div>
        </div>
    }
}
