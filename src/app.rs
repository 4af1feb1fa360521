mod case_studies;
mod contact;
mod experience;
mod floating;
mod hero;
mod reveal;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{content, ContentError};
use case_studies::CaseStudies;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-cream text-ink antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site_name = content()
        .map(|c| c.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Router>
            <main class="flex flex-col w-full overflow-x-hidden">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole site: every section stacked into one scrolling page.
#[component]
fn PortfolioPage() -> impl IntoView {
    match content() {
        Ok(content) => Either::Left(view! {
            <Title text="From Code to Products" />
            <Hero content />
            <Experience content />
            <Skills content />
            <CaseStudies content />
            <Contact content />
        }),
        Err(error) => {
            log::error!("portfolio content unavailable: {error}");
            Either::Right(view! { <ContentErrorView error /> })
        }
    }
}

#[component]
fn ContentErrorView(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-4 px-6 text-center">
            <h1 class="text-3xl font-bold">"Something went wrong"</h1>
            <p class="text-black/60">"This page couldn't be built from its content."</p>
            <pre class="text-sm text-red-700 whitespace-pre-wrap">{error.to_string()}</pre>
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-4 px-6 text-center">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-black/60">"There's nothing here."</p>
            <a href="/" class="underline underline-offset-4">
                "Back to the portfolio"
            </a>
        </section>
    }
}
