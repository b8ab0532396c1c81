use super::browser::current_year;
use super::hooks::{
    use_auto_scroll, use_in_view, use_parallax, use_pointer_position, use_scroll_tracker,
};
use super::PageContext;
use crate::content::{
    ParallaxImage, Stat, TimelineSide, ABOUT_PARAGRAPHS, ABOUT_STATS, BRAND, BRAND_SUFFIX,
    CONTACT_DETAILS, EXPERIENCES, GALLERY_IMAGES, HERO_VIDEO, OWNER_NAME, PARALLAX_IMAGES,
    PORTRAIT, SERVICES, SHOWCASE_STATS, SKILLS, SOCIAL_LINKS, TAGLINE,
};
use crate::navigation::Section;
use crate::parallax::{card_sway, ParallaxRange};
use crate::pointer::translate_style;
use crate::visibility::ObserverOptions;
use yew::prelude::*;

#[hook]
fn use_navigate() -> Callback<Section> {
    use_context::<PageContext>()
        .map(|page| page.navigate)
        .unwrap_or_default()
}

fn jump_to(navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    navigate.reform(move |_: MouseEvent| section)
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    section: Option<Section>,
    #[prop_or(0.1)]
    threshold: f64,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

/// Fades its children in the first time they scroll into view and records the
/// owning section as revealed.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let page = use_context::<PageContext>();
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ObserverOptions::once(props.threshold));

    {
        let page = page.clone();
        let section = props.section;
        use_effect_with(in_view, move |in_view| {
            if let (true, Some(page), Some(section)) = (*in_view, page, section) {
                page.visibility.dispatch(section);
            }
            || ()
        });
    }

    let already_revealed = match (&page, props.section) {
        (Some(page), Some(section)) => page.visibility.is_visible(section),
        _ => false,
    };

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (in_view || already_revealed).then_some("is-visible"))}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2>{props.title.clone()}</h2>
            <div class="heading-rule" aria-hidden="true"></div>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}

fn stat_card(stat: &Stat) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigate = use_navigate();

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-media" aria-hidden="true">
                <video class="hero-video" autoplay=true loop=true muted=true playsinline="true">
                    <source src={HERO_VIDEO} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
                <div class="hero-overlay"></div>
            </div>

            <div class="container hero-content">
                <Reveal section={Section::Home}>
                    <h1 class="hero-title">{"Emmanuel "}<span class="accent">{"Kenneth"}</span></h1>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <div class="hero-actions">
                        <button type="button" class="button button-primary" onclick={jump_to(&navigate, Section::Contact)}>
                            {"Get in Touch"}
                        </button>
                        <button type="button" class="button button-secondary" onclick={jump_to(&navigate, Section::Gallery)}>
                            {"View Gallery"}
                        </button>
                    </div>
                </Reveal>
            </div>

            <button
                type="button"
                class="scroll-cue"
                aria-label="Scroll to about"
                onclick={jump_to(&navigate, Section::About)}
            >
                {"⌄"}
            </button>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section section-about">
            <div class="container">
                <Reveal section={Section::About} threshold={0.2}>
                    <SectionHeading title="About Me" />
                    <div class="about-grid">
                        <div class="about-portrait">
                            <img src={PORTRAIT} alt="Emmanuel Kenneth portrait" loading="lazy" />
                        </div>
                        <div class="about-copy">
                            <h3>{OWNER_NAME}</h3>
                            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                            <div class="stat-grid">
                                { for ABOUT_STATS.iter().map(stat_card) }
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <section id={Section::Experience.id()} class="section section-experience">
            <div class="container">
                <Reveal section={Section::Experience}>
                    <SectionHeading title="Work Experience" />
                    <div class="timeline">
                        <div class="timeline-line" aria-hidden="true"></div>
                        { for EXPERIENCES.iter().enumerate().map(|(index, entry)| {
                            let side = TimelineSide::for_index(index);
                            html! {
                                <article
                                    key={entry.year}
                                    class={side.class()}
                                    style={format!("--reveal-delay: {}ms;", index * 200)}
                                >
                                    <div class="timeline-marker" aria-hidden="true"></div>
                                    <div class="card timeline-card">
                                        <span class="pill">{entry.year}</span>
                                        <h3>{entry.title}</h3>
                                        <h4>{entry.company}</h4>
                                        <p>{entry.description}</p>
                                    </div>
                                </article>
                            }
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section section-skills">
            <div class="container">
                <Reveal>
                    <SectionHeading title="Skills" />
                    <div class="skill-grid">
                        { for SKILLS.iter().map(|skill| html! {
                            <div class="card skill-card" key={skill.name}>
                                <div class="skill-header">
                                    <span class="skill-name">{skill.name}</span>
                                    <span class="muted">{format!("{}%", skill.level)}</span>
                                </div>
                                <div
                                    class="progress"
                                    role="progressbar"
                                    aria-label={skill.name}
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    aria-valuenow={skill.level.to_string()}
                                >
                                    <div class="progress-fill" style={format!("width: {}%;", skill.level)}></div>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// The "Project Gallery" section: an auto-scrolling column of captioned
/// cards that sway with the page scroll, next to a showcase blurb.
#[function_component(ShowcaseGallery)]
pub fn showcase_gallery() -> Html {
    let navigate = use_navigate();
    let scroll = use_scroll_tracker();
    let container = use_node_ref();
    use_auto_scroll(container.clone());

    html! {
        <section id={Section::Gallery.id()} class="section section-gallery">
            <div class="container">
                <Reveal section={Section::Gallery}>
                    <SectionHeading
                        title="Project Gallery"
                        subtitle="Featured projects and fieldwork from my surveying career"
                    />
                    <div class="showcase">
                        <div class="showcase-column">
                            <div ref={container} class="showcase-scroller hide-scrollbar">
                                { for GALLERY_IMAGES.iter().enumerate().map(|(index, image)| html! {
                                    <figure
                                        key={image.id}
                                        class="showcase-card"
                                        style={format!("transform: translateY({:.2}px);", card_sway(index, scroll.offset()))}
                                    >
                                        <img src={image.src} alt={image.alt} loading="lazy" />
                                        <figcaption>{image.caption}</figcaption>
                                    </figure>
                                }) }
                            </div>
                        </div>
                        <div class="showcase-copy card">
                            <h3>{"Project Showcase"}</h3>
                            <p>{"Browse through a collection of my most significant surveying projects across various terrains and environments."}</p>
                            <p>{"From urban development surveys to complex topographic mapping in challenging environments, this gallery demonstrates the range of services I provide and the quality of results I deliver to clients."}</p>
                            <div class="stat-grid">
                                { for SHOWCASE_STATS.iter().map(stat_card) }
                            </div>
                            <button type="button" class="button button-primary" onclick={jump_to(&navigate, Section::Contact)}>
                                {"Discuss Your Project"}
                            </button>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ParallaxTileProps {
    index: usize,
    image: ParallaxImage,
}

#[function_component(ParallaxTile)]
fn parallax_tile(props: &ParallaxTileProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ObserverOptions::repeating(0.0));

    html! {
        <div
            ref={node}
            class={classes!("parallax-tile", in_view.then_some("is-visible"))}
            style={format!("--reveal-delay: {}ms;", props.index * 100)}
        >
            <img src={props.image.src} alt={props.image.alt} loading="lazy" />
        </div>
    }
}

#[function_component(ParallaxGallery)]
pub fn parallax_gallery() -> Html {
    let container = use_node_ref();
    let layer = use_parallax(container.clone(), ParallaxRange::default());

    html! {
        <section ref={container} id="field-work" class="section section-parallax">
            <h2 class="parallax-title">{"Field Work"}</h2>
            <div class="parallax-grid" style={layer.style()}>
                { for PARALLAX_IMAGES.iter().enumerate().map(|(index, image)| html! {
                    <ParallaxTile key={index} {index} image={*image} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section section-services">
            <div class="container">
                <Reveal section={Section::Services}>
                    <SectionHeading
                        title="My Services"
                        subtitle="Offering a comprehensive range of professional surveying services tailored to meet your specific needs"
                    />
                    <div class="service-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card service-card" key={service.title}>
                                <div class="service-icon" aria-hidden="true">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // The form is a visual affordance only; nothing is sent anywhere.
    let onsubmit = Callback::from(|event: SubmitEvent| event.prevent_default());

    html! {
        <section id={Section::Contact.id()} class="section section-contact">
            <div class="container">
                <Reveal section={Section::Contact}>
                    <SectionHeading
                        title="Get In Touch"
                        subtitle="Have a project in mind? Let's discuss how I can help with your surveying needs"
                    />
                    <div class="contact-grid">
                        <div class="card contact-info">
                            <h3>{"Contact Information"}</h3>
                            <ul class="contact-list">
                                { for CONTACT_DETAILS.iter().map(|detail| html! {
                                    <li key={detail.label}>
                                        <span class="contact-icon" aria-hidden="true">{detail.icon}</span>
                                        <div>
                                            <div class="muted">{detail.label}</div>
                                            <div class="contact-value">{detail.value}</div>
                                        </div>
                                    </li>
                                }) }
                            </ul>
                            <div class="contact-social">
                                <h4>{"Connect"}</h4>
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a
                                        key={link.label}
                                        class="social-link"
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {link.label}
                                    </a>
                                }) }
                            </div>
                        </div>
                        <div class="card contact-form-card">
                            <h3>{"Send Message"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div class="form-row">
                                    <label for="name">{"Name"}
                                        <input type="text" id="name" placeholder="Your name" />
                                    </label>
                                    <label for="email">{"Email"}
                                        <input type="email" id="email" placeholder="Your email" />
                                    </label>
                                </div>
                                <label for="subject">{"Subject"}
                                    <input type="text" id="subject" placeholder="Subject" />
                                </label>
                                <label for="message">{"Message"}
                                    <textarea id="message" rows="5" placeholder="Your message"></textarea>
                                </label>
                                <button type="submit" class="button button-primary">{"Send Message"}</button>
                            </form>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="brand">{BRAND}<span class="brand-suffix">{BRAND_SUFFIX}</span></div>
                <p class="muted">
                    {format!("© {} {OWNER_NAME} Surveying Services. All rights reserved.", current_year())}
                </p>
            </div>
        </footer>
    }
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let pointer = use_pointer_position();

    html! {
        <div class="custom-cursor" aria-hidden="true">
            <div class="cursor-ring" style={translate_style(pointer.ring_origin())}></div>
            <div class="cursor-dot" style={translate_style(pointer.dot_origin())}></div>
        </div>
    }
}
