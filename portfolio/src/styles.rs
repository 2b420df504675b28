//! CSS for the portfolio page.
//!
//! Theming is done with CSS custom properties: `:root` carries the light
//! palette and `html.dark` overrides it, so switching themes is a single
//! class flip on the document root.
//!
//! # Customization
//!
//! ```rust
//! use portfolio::styles::PORTFOLIO_CSS;
//!
//! let my_css = ".hero-name { letter-spacing: -0.04em; }";
//! let combined = format!("{}\n{}", PORTFOLIO_CSS, my_css);
//! assert!(combined.contains("--card-bg"));
//! ```

/// Complete stylesheet, injected by the page component.
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --background: #fafafa;
    --foreground: #171717;
    --muted: #525252;
    --subtle: #a3a3a3;
    --card-bg: #ffffff;
    --card-border: #e5e5e5;
    --secondary-bg: #f5f5f5;
    --nav-bg: rgba(255, 255, 255, 0.7);
    --pill-bg: #f5f5f5;
    --pill-text: #525252;
    --accent: #6366f1;
    --accent-strong: #4f46e5;
    --accent-soft: #eef2ff;
    --cta-bg: #171717;
    --cta-text: #ffffff;
    --hover-bg: #e5e5e5;
    --shadow: 0 20px 40px -20px rgba(0, 0, 0, 0.25);
    --font-sans: 'Outfit', 'Inter', system-ui, sans-serif;
    --container-max: 1280px;
}

html.dark {
    --background: #000000;
    --foreground: #ededed;
    --muted: #a3a3a3;
    --subtle: #737373;
    --card-bg: rgba(255, 255, 255, 0.05);
    --card-border: rgba(255, 255, 255, 0.08);
    --secondary-bg: #0a0a0a;
    --nav-bg: rgba(0, 0, 0, 0.5);
    --pill-bg: rgba(255, 255, 255, 0.05);
    --pill-text: #d4d4d4;
    --accent: #818cf8;
    --accent-strong: #a5b4fc;
    --accent-soft: rgba(255, 255, 255, 0.05);
    --cta-bg: #ffffff;
    --cta-text: #000000;
    --hover-bg: rgba(255, 255, 255, 0.1);
    --shadow: none;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
    transition: background-color 0.3s ease, color 0.3s ease;
}

::selection {
    background: rgba(99, 102, 241, 0.3);
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
    cursor: pointer;
    border: none;
    background: none;
    color: inherit;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.section {
    padding: 128px 0;
    border-top: 1px solid var(--card-border);
}

.section-alt {
    background: var(--secondary-bg);
}

.section-title {
    font-size: clamp(2rem, 5vw, 3.75rem);
    font-weight: 700;
    margin: 0 0 16px;
}

.section-lead {
    color: var(--muted);
    max-width: 42rem;
    line-height: 1.7;
}

.section-header-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: flex-end;
    gap: 24px;
    margin-bottom: 64px;
}

/* Nav */
.nav {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 50;
    backdrop-filter: blur(12px);
    background: var(--nav-bg);
    border-bottom: 1px solid var(--card-border);
}

.nav-inner {
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.02em;
}

.nav-brand-accent {
    color: var(--accent);
}

.nav-links {
    display: flex;
    gap: 32px;
    align-items: center;
}

.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--muted);
    transition: color 0.2s ease;
}

.nav-link:hover,
.nav-link.active {
    color: var(--foreground);
}

.theme-toggle {
    padding: 8px;
    border-radius: 999px;
    color: var(--muted);
    display: inline-flex;
    transition: background-color 0.2s ease;
}

.theme-toggle:hover {
    background: var(--hover-bg);
}

.nav-hire {
    display: none;
    padding: 8px 16px;
    border-radius: 999px;
    background: #4f46e5;
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.05em;
}

.nav-compact {
    display: none;
    align-items: center;
}

@media (max-width: 767px) {
    .nav-links { display: none; }
    .nav-hire { display: inline-block; }
    .nav-compact { display: flex; }
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding-top: 64px;
    overflow: hidden;
    text-align: center;
}

.hero-glow {
    position: absolute;
    inset: 0;
    transition: opacity 0.5s ease;
    pointer-events: none;
}

.hero-glow-dark {
    background: radial-gradient(circle at center, rgba(49, 46, 129, 0.2), #000 70%);
    opacity: 0;
}

.hero-glow-light {
    background: radial-gradient(circle at center, #e0e7ff, transparent 70%);
    opacity: 1;
}

html.dark .hero-glow-dark { opacity: 0.5; }
html.dark .hero-glow-light { opacity: 0; }

.hero-content {
    position: relative;
    z-index: 1;
    max-width: 64rem;
    padding: 0 24px;
}

.hero-badge {
    display: inline-block;
    margin-bottom: 16px;
    padding: 4px 12px;
    border: 1px solid var(--card-border);
    border-radius: 999px;
    background: var(--accent-soft);
    color: var(--accent);
    font-size: 0.75rem;
    font-weight: 500;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.hero-name {
    font-size: clamp(3rem, 9vw, 6rem);
    font-weight: 700;
    letter-spacing: -0.03em;
    margin: 0 0 24px;
}

html.dark .hero-name {
    background: linear-gradient(to bottom, #ffffff, #737373);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-tagline {
    max-width: 42rem;
    margin: 0 auto 40px;
    font-size: 1.25rem;
    line-height: 1.7;
    color: var(--muted);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: 999px;
    font-weight: 600;
    transition: background-color 0.2s ease, box-shadow 0.2s ease;
}

.btn-primary {
    background: var(--cta-bg);
    color: var(--cta-text);
    box-shadow: var(--shadow);
}

.btn-secondary {
    border: 1px solid var(--card-border);
    color: var(--foreground);
}

.btn-secondary:hover {
    background: var(--hover-bg);
}

.scroll-hint {
    position: absolute;
    bottom: 40px;
    left: 50%;
    transform: translateX(-50%);
    color: var(--subtle);
}

.scroll-hint svg {
    animation: bounce 1s infinite;
}

/* About */
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 64px;
    align-items: center;
}

.about-title {
    display: flex;
    align-items: center;
    gap: 12px;
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    margin: 0 0 24px;
}

.about-title-bar {
    display: inline-block;
    width: 48px;
    height: 4px;
    border-radius: 999px;
    background: #6366f1;
}

.about-text {
    font-size: 1.125rem;
    line-height: 1.8;
    color: var(--muted);
}

.about-photo {
    aspect-ratio: 1;
    border-radius: 24px;
    overflow: hidden;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    box-shadow: var(--shadow);
}

.about-photo-img {
    width: 100%;
    height: 100%;
    background-size: cover;
    background-position: center;
    transition: transform 0.7s ease;
}

.about-photo:hover .about-photo-img {
    transform: scale(1.1);
}

/* Skills */
.skills-header {
    text-align: center;
    margin-bottom: 64px;
}

.skills-header .section-lead {
    margin: 0 auto;
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}

.skill-card {
    padding: 32px;
    border-radius: 16px;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    transition: transform 0.2s ease, border-color 0.2s ease, box-shadow 0.2s ease;
}

.skill-card:hover {
    transform: translateY(-5px);
    border-color: rgba(99, 102, 241, 0.5);
    box-shadow: var(--shadow);
}

.skill-icon {
    display: inline-flex;
    margin-bottom: 24px;
    padding: 16px;
    border-radius: 12px;
    background: var(--secondary-bg);
    transition: transform 0.2s ease;
}

.skill-card:hover .skill-icon {
    transform: scale(1.1);
}

.skill-title {
    font-size: 1.25rem;
    margin: 0 0 12px;
}

.skill-description {
    font-size: 0.875rem;
    line-height: 1.7;
    color: var(--muted);
    margin: 0;
}

.accent-purple { color: #a855f7; }
.accent-blue { color: #3b82f6; }
.accent-green { color: #22c55e; }
.accent-orange { color: #f97316; }
html.dark .accent-purple { color: #c084fc; }
html.dark .accent-blue { color: #60a5fa; }
html.dark .accent-green { color: #4ade80; }
html.dark .accent-orange { color: #fb923c; }

/* Projects */
.project-list {
    display: grid;
    gap: 48px;
}

.project-row {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 32px;
    align-items: center;
    padding: 32px;
    border-radius: 24px;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.project-row:hover {
    border-color: rgba(99, 102, 241, 0.3);
    box-shadow: var(--shadow);
}

.project-row.reversed .project-media {
    order: 2;
}

.project-media {
    position: relative;
    aspect-ratio: 16 / 9;
    border-radius: 16px;
    overflow: hidden;
}

.project-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}

.project-row:hover .project-media img {
    transform: scale(1.05);
}

.project-category {
    font-size: 0.875rem;
    font-weight: 500;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--accent);
    margin-bottom: 8px;
}

.project-title {
    font-size: 1.875rem;
    margin: 0 0 16px;
}

.project-description {
    line-height: 1.7;
    color: var(--muted);
    margin: 0 0 24px;
}

.tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
}

.tag-pill {
    padding: 4px 12px;
    border-radius: 999px;
    border: 1px solid var(--card-border);
    background: var(--pill-bg);
    color: var(--pill-text);
    font-size: 0.75rem;
    font-weight: 500;
}

/* Videos */
.channel-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    color: #ef4444;
}

.video-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 32px;
}

.video-card {
    border-radius: 24px;
    overflow: hidden;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
}

.video-frame {
    aspect-ratio: 16 / 9;
}

.video-frame iframe {
    width: 100%;
    height: 100%;
    border: 0;
}

.video-body {
    padding: 24px;
}

.video-title {
    font-size: 1.5rem;
    margin: 0 0 8px;
}

.video-description {
    font-size: 0.875rem;
    line-height: 1.7;
    color: var(--muted);
    margin: 0;
}

/* Contact */
.contact-inner {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.contact-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 24px;
    margin: 48px 0 64px;
}

.social-links {
    display: flex;
    justify-content: center;
    gap: 32px;
}

.social-link {
    color: var(--subtle);
    transition: color 0.2s ease;
}

.social-link:hover {
    color: var(--foreground);
}

/* Footer */
.footer {
    padding: 32px 0;
    border-top: 1px solid var(--card-border);
    text-align: center;
    font-size: 0.875rem;
    color: var(--subtle);
}

.footer p {
    margin: 0;
}

.footer-credit {
    margin-top: 8px !important;
    font-size: 0.75rem;
}

.footer-credit a {
    text-decoration: underline;
}

/* Entrance (hero, on mount) */
.entrance {
    opacity: 0;
    animation: entrance-up 0.6s ease forwards;
    animation-delay: var(--entrance-delay, 0ms);
}

.entrance-fade {
    animation-name: entrance-fade;
    animation-duration: 1s;
}

@keyframes entrance-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@keyframes entrance-fade {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); }
    50% { transform: none; }
}

/* Reveal (sections, first time in view) */
.reveal {
    opacity: 0;
    transition: opacity 0.6s ease, transform 0.6s ease;
    transition-delay: var(--reveal-delay, 0ms);
}

.reveal-up { transform: translateY(30px); }
.reveal-slide { transform: translateX(-50px); }
.reveal-scale { transform: scale(0.9); }

.reveal.is-revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .entrance, .reveal {
        opacity: 1;
        transform: none;
        animation: none;
        transition: none;
    }
    .scroll-hint svg { animation: none; }
}
"#;
