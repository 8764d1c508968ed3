use yew::prelude::*;

use crate::config::LandingConfig;
use crate::effects;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#stats", "Numbers"),
    ("#full-curved-gallery", "Gallery"),
    ("#testimonials", "Stories"),
];

const STATS: &[(&str, &str)] = &[
    ("$1M+", "Traded volume"),
    ("20K+", "Collectors"),
    ("12,500", "Pieces minted"),
    ("99.9%", "Uptime"),
];

const FEATURES: &[(&str, &str)] = &[
    ("Curated drops", "Every collection is reviewed by people who actually look at art."),
    ("Instant settlement", "Trades clear in seconds and land straight in your wallet."),
    ("Zero lock-in", "Export your collection whenever you like, no questions asked."),
];

const GALLERY: &[(&str, &str)] = &[
    ("/assets/gallery-1.webp", "Neon harbour"),
    ("/assets/gallery-2.webp", "Paper cranes"),
    ("/assets/gallery-3.webp", "Solar bloom"),
    ("/assets/gallery-4.webp", "Glass tide"),
    ("/assets/gallery-5.webp", "Night orchard"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("\"The drop calendar is the only one I trust.\"", "Mika, collector"),
    ("\"Listing took two minutes. Selling took one.\"", "Jon, illustrator"),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub config: LandingConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Controllers look up the markup below, so install after it is mounted
    {
        use_effect_with_deps(
            move |config: &LandingConfig| {
                let installed: effects::Effects = effects::install(config);
                move || drop(installed)
            },
            props.config.clone(),
        );
    }

    html! {
        <div class="landing-page">
            <div class="scroll-progress" aria-hidden="true">
                <div class="scroll-progress__bar"></div>
            </div>

            <header class="header">
                <div class="header-content">
                    <a class="logo" href="#top">{"curved"}</a>
                    <button class="menu-toggle" aria-controls="primary-nav" aria-expanded="false" aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <nav id="primary-nav" class="primary-nav">
                        {
                            NAV_LINKS.iter().map(|(href, label)| html! {
                                <a class="nav-link" href={*href}>{*label}</a>
                            }).collect::<Html>()
                        }
                    </nav>
                </div>
            </header>

            <section id="top" class="hero">
                <div class="hero-copy">
                    <h1>{"Art that bends around you"}</h1>
                    <p>{"Collect, trade and show off digital work on a gallery wall that follows your scroll."}</p>
                    <button class="cta-button">{"Explore the gallery"}</button>
                </div>
                <div class="nft-display">
                    <div class="nft-card-inner">
                        <div class="nft-card-face nft-card-front">
                            <img src="/assets/hero-card.webp" alt="Featured piece" />
                        </div>
                        <div class="nft-card-face nft-card-back">
                            <h3>{"Solar bloom"}</h3>
                            <p>{"Edition 4 of 25"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="stats" class="stats">
                {
                    STATS.iter().map(|(figure, label)| html! {
                        <div class="stat-item">
                            <span class="stat-number">{*figure}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section id="features" class="features">
                {
                    FEATURES.iter().map(|(title, body)| html! {
                        <div class="feature-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section id="full-curved-gallery" class="full-curved-gallery">
                <h2>{"This week's wall"}</h2>
                <div class="full-curved-container">
                    {
                        GALLERY.iter().map(|(src, alt)| html! {
                            <div class="curved-item">
                                <img src={*src} alt={*alt} loading="lazy" />
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                {
                    TESTIMONIALS.iter().map(|(quote, who)| html! {
                        <div class="testimonial-card">
                            <p>{*quote}</p>
                            <span>{*who}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <footer class="footer">
                <p>{"Made with care. No cookies were harmed."}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0b0b12;
                    color: #f4f4f8;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 3px;
                    z-index: 1001;
                }
                .scroll-progress__bar {
                    width: 0%;
                    height: 100%;
                    background: linear-gradient(90deg, #7f5af0, #2cb67d);
                }
                .header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    padding: 1.5rem 0;
                    z-index: 1000;
                    transition: padding 0.3s ease, background 0.3s ease, transform 0.3s ease;
                }
                .header.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(11, 11, 18, 0.9);
                    backdrop-filter: blur(10px);
                }
                .header.hidden {
                    transform: translateY(-100%);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo {
                    color: inherit;
                    font-weight: 700;
                    text-decoration: none;
                }
                .primary-nav {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #c9c9d6;
                    text-decoration: none;
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .menu-toggle span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #f4f4f8;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: space-around;
                    gap: 3rem;
                    padding: 8rem 2rem 4rem;
                }
                .cta-button {
                    position: relative;
                    overflow: hidden;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 999px;
                    background: #7f5af0;
                    color: white;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .ripple {
                    position: absolute;
                    inset: 0;
                    border-radius: inherit;
                    background: rgba(255, 255, 255, 0.4);
                    animation: ripple 0.6s ease-out;
                    pointer-events: none;
                }
                @keyframes ripple {
                    from { transform: scale(0); opacity: 1; }
                    to { transform: scale(2.5); opacity: 0; }
                }
                .nft-display {
                    perspective: 1000px;
                    width: 320px;
                    height: 420px;
                    cursor: pointer;
                }
                .nft-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.15s ease-out;
                    transform-style: preserve-3d;
                }
                .nft-card-face {
                    position: absolute;
                    inset: 0;
                    border-radius: 20px;
                    overflow: hidden;
                    backface-visibility: hidden;
                    transition: transform 0.8s ease;
                }
                .nft-card-face img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .nft-card-back {
                    transform: rotateY(180deg);
                    background: #16161f;
                    padding: 2rem;
                }
                .nft-display.is-flipped .nft-card-front {
                    transform: rotateY(180deg);
                }
                .nft-display.is-flipped .nft-card-back {
                    transform: rotateY(360deg);
                }
                .stats, .features, .testimonials {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .stat-number {
                    display: block;
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .feature-card, .stat-item, .testimonial-card, .nft-display {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .feature-card.animate-in, .stat-item.animate-in,
                .testimonial-card.animate-in, .nft-display.animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }
                .full-curved-gallery {
                    padding: 6rem 0;
                    text-align: center;
                }
                .full-curved-container {
                    position: relative;
                    height: 420px;
                    perspective: 1600px;
                    transform-style: preserve-3d;
                }
                .curved-item {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    width: 260px;
                    height: 360px;
                    margin-left: -130px;
                    border-radius: 16px;
                    overflow: hidden;
                    cursor: zoom-in;
                    transition: transform 0.8s cubic-bezier(0.2, 0.8, 0.2, 1), opacity 0.8s ease;
                }
                .curved-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .curved-item.zoomed {
                    z-index: 10;
                }
                .curved-item.zoomed img {
                    transform: scale(1.25);
                }
                .footer {
                    padding: 3rem 2rem;
                    text-align: center;
                    color: #8a8a99;
                }
                @media (max-width: 768px) {
                    .menu-toggle {
                        display: block;
                    }
                    .primary-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem 2rem;
                        background: rgba(11, 11, 18, 0.97);
                        display: none;
                    }
                    .primary-nav.open {
                        display: flex;
                    }
                    .hero {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
