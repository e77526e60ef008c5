use std::time::Duration;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use shell_runtime::{DesktopShell, ShellProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellPhase {
    Booting,
    Desktop,
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop Portfolio" />
        <Meta name="description" content="A portfolio site dressed up as a desktop operating system." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let phase = create_rw_signal(ShellPhase::Booting);

    // The splash is pure theater; it yields to the desktop on its own.
    set_timeout(
        move || phase.set(ShellPhase::Desktop),
        Duration::from_millis(1400),
    );

    view! {
        <Show
            when=move || phase.get() == ShellPhase::Desktop
            fallback=move || {
                view! {
                    <div class="boot-splash" on:click=move |_| phase.set(ShellPhase::Desktop)>
                        <div class="boot-splash-logo" aria-hidden="true">"✦"</div>
                        <p class="boot-splash-hint">"Click to skip"</p>
                    </div>
                }
            }
        >
            <ShellProvider>
                <DesktopShell />
            </ShellProvider>
        </Show>
    }
}
