//! Video showcase: embedded players plus a channel link

use leptos::prelude::*;

use super::{ICON_ARROW_SQUARE_OUT, Icon, Reveal};
use crate::reveal::{LIST_STAGGER_MS, stagger_delay_ms};
use crate::types::{SectionId, Video};

/// Permissions granted to embedded players.
pub const VIDEO_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn Videos(
    videos: &'static [Video],
    #[prop(default = None)] channel_url: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section id={SectionId::Videos.anchor()} class="section section-alt">
            <div class="container">
                <Reveal name="videos-header" class="section-header-row">
                    <div>
                        <h2 class="section-title">"Gameplay & Demos"</h2>
                        <p class="section-lead">
                            "Watch my latest creations in action. From gameplay mechanics to VR interactions."
                        </p>
                    </div>
                    {channel_url.map(|url| view! {
                        <a class="channel-link" href=url target="_blank" rel="noopener noreferrer">
                            "Visit Channel"
                            <Icon path=ICON_ARROW_SQUARE_OUT size="16" />
                        </a>
                    })}
                </Reveal>

                <div class="video-grid">
                    {videos.iter().enumerate().map(|(idx, video)| view! {
                        <Reveal
                            name=format!("video-{}", idx)
                            delay_ms=stagger_delay_ms(idx, LIST_STAGGER_MS)
                            class="video-card"
                        >
                            <div class="video-frame">
                                <iframe
                                    src=video.embed_url()
                                    title=video.title
                                    allow=VIDEO_PERMISSIONS
                                    allowfullscreen=true
                                ></iframe>
                            </div>
                            <div class="video-body">
                                <h3 class="video-title">{video.title}</h3>
                                <p class="video-description">{video.description}</p>
                            </div>
                        </Reveal>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
