//! Simulated music player over a fixed playlist. The transport is cosmetic;
//! nothing actually plays.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Track {
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    length: &'static str,
}

const PLAYLIST: [Track; 6] = [
    Track {
        id: "signal",
        title: "Signal Path",
        artist: "Cassette Motor",
        length: "3:42",
    },
    Track {
        id: "terrace",
        title: "Terrace View",
        artist: "Slow Parade",
        length: "4:10",
    },
    Track {
        id: "glass",
        title: "Sea Glass",
        artist: "Hilde Marit",
        length: "2:58",
    },
    Track {
        id: "northbound",
        title: "Northbound",
        artist: "Cassette Motor",
        length: "5:01",
    },
    Track {
        id: "voltage",
        title: "Low Voltage",
        artist: "Room 204",
        length: "3:17",
    },
    Track {
        id: "paperwork",
        title: "Paperwork",
        artist: "Slow Parade",
        length: "3:55",
    },
];

#[component]
pub fn MusicApp() -> impl IntoView {
    let current = create_rw_signal(PLAYLIST[0]);
    let playing = create_rw_signal(false);

    view! {
        <div class="app app-music">
            <div class="music-tracklist" role="listbox" aria-label="Playlist">
                <For each=|| PLAYLIST.to_vec() key=|track| track.id let:track>
                    <button
                        class=move || {
                            if current.get().id == track.id {
                                "music-track selected"
                            } else {
                                "music-track"
                            }
                        }
                        role="option"
                        aria-selected=move || current.get().id == track.id
                        on:click=move |_| {
                            current.set(track);
                            playing.set(true);
                        }
                    >
                        <span class="music-track-title">{track.title}</span>
                        <span class="music-track-artist">{track.artist}</span>
                        <span class="music-track-length">{track.length}</span>
                    </button>
                </For>
            </div>
            <footer class="music-now-playing">
                <button
                    class="music-transport"
                    aria-label=move || if playing.get() { "Pause" } else { "Play" }
                    on:click=move |_| playing.update(|p| *p = !*p)
                >
                    {move || if playing.get() { "⏸" } else { "▶" }}
                </button>
                <div class="music-now-playing-meta">
                    <span>{move || current.get().title}</span>
                    <span class="music-now-playing-artist">{move || current.get().artist}</span>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_ids_are_unique() {
        let mut ids: Vec<&str> = PLAYLIST.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PLAYLIST.len());
    }
}
