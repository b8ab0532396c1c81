mod browser;
mod hooks;
mod sections;

use crate::content::{BRAND, BRAND_SUFFIX, NAV_ITEMS};
use crate::navigation::{scroll_to_section, NavigationState, Section};
use crate::theme::{initialize_theme, persist_theme, Theme, ThemeTarget};
use crate::visibility::SectionVisibility;
use browser::{
    system_prefers_dark, BrowserStorage, DocumentRoot, PageAnchors, TransitionRoot,
};
use hooks::use_is_scrolled;
use sections::{
    About, Contact, CustomCursor, Experience, Footer, Hero, ParallaxGallery, Services,
    ShowcaseGallery, Skills,
};
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

impl Reducible for SectionVisibility {
    type Action = Section;

    fn reduce(self: Rc<Self>, section: Section) -> Rc<Self> {
        if self.is_visible(section) {
            return self;
        }
        let mut next = (*self).clone();
        next.reveal(section);
        Rc::new(next)
    }
}

/// Shared by every section: which sections have been revealed, and how to
/// jump to one.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub visibility: UseReducerHandle<SectionVisibility>,
    pub navigate: Callback<Section>,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    theme: Theme,
    navigation: NavigationState,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
    on_navigate: Callback<Section>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let scrolled = use_is_scrolled();

    let nav_buttons = |extra_class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|section| {
                let section = *section;
                let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                let active = props.navigation.active == section;
                html! {
                    <button
                        key={section.id()}
                        type="button"
                        class={classes!("nav-link", extra_class, active.then_some("is-active"))}
                        aria-current={active.then_some("true")}
                        {onclick}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    let theme = props.theme;
    let theme_button = html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            onclick={props.on_toggle_theme.reform(|_: MouseEvent| ())}
        >
            <span aria-hidden="true">{theme.icon()}</span>
        </button>
    };

    let menu_open = props.navigation.menu_open;

    html! {
        <nav class={classes!("site-nav", scrolled.then_some("is-scrolled"))}>
            <div class="container nav-bar">
                <div class="brand">{BRAND}<span class="brand-suffix">{BRAND_SUFFIX}</span></div>
                <div class="nav-desktop">
                    {nav_buttons("")}
                    {theme_button.clone()}
                </div>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={props.on_toggle_menu.reform(|_: MouseEvent| ())}
                >
                    {if menu_open { "✕" } else { "☰" }}
                </button>
            </div>
            if menu_open {
                <div class="nav-mobile">
                    {nav_buttons("nav-link-mobile")}
                    {theme_button}
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    initial_theme: Theme,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state(|| props.initial_theme);
    let navigation = use_state(NavigationState::default);
    let visibility = use_reducer_eq(SectionVisibility::default);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            persist_theme(&BrowserStorage::open(), next);
            TransitionRoot.apply(next);
            tracing::info!(theme = next.as_str(), "theme toggled");
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| navigation.set((*navigation).toggle_menu()))
    };

    let on_navigate = {
        let navigation = navigation.clone();
        Callback::from(move |section: Section| {
            navigation.set((*navigation).select(section));
            scroll_to_section(&PageAnchors, section.id());
        })
    };

    let page = PageContext {
        visibility,
        navigate: on_navigate.clone(),
    };

    html! {
        <ContextProvider<PageContext> context={page}>
            <a class="skip-link" href="#about">{"Skip to content"}</a>
            <CustomCursor />
            <Header
                theme={*theme}
                navigation={*navigation}
                {on_toggle_theme}
                {on_toggle_menu}
                {on_navigate}
            />
            <main>
                <Hero />
                <About />
                <Experience />
                <Skills />
                <ShowcaseGallery />
                <ParallaxGallery />
                <Services />
                <Contact />
            </main>
            <Footer />
        </ContextProvider<PageContext>>
    }
}

pub fn run() {
    let initial_theme =
        initialize_theme(&BrowserStorage::open(), system_prefers_dark(), &DocumentRoot);
    tracing::info!(theme = initial_theme.as_str(), "starting site");

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { initial_theme },
    )
    .render();
}
