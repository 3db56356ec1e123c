pub const SITE_CSS: &str = r#"
    :root {
        --bg: #fffaf6;
        --ink: #2b2233;
        --muted: #6e6478;
        --accent: #8e5bd6;
        --accent-soft: #efe4ff;
        --card: #ffffff;
        --radius: 0.75rem;
        --shadow: 0 8px 24px rgba(43, 34, 51, 0.08);
    }
    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--bg);
        color: var(--ink);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        line-height: 1.6;
    }
    img { max-width: 100%; display: block; }
    a { color: inherit; }
    .container {
        width: min(1100px, 100% - 2rem);
        margin: 0 auto;
    }

    /* Header */
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        background: rgba(255, 250, 246, 0.92);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(142, 91, 214, 0.12);
    }
    .header-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 64px;
    }
    .brand {
        display: flex;
        align-items: center;
        text-decoration: none;
        font-weight: 700;
    }
    .brand-logo {
        display: inline-grid;
        place-items: center;
        width: 36px;
        height: 36px;
        margin-right: 8px;
        border-radius: 50%;
        background: var(--accent);
        color: #fff;
        font-size: 0.85rem;
    }
    .site-nav {
        display: flex;
        gap: 1.25rem;
    }
    .site-nav a {
        text-decoration: none;
        color: var(--muted);
        padding: 0.25rem 0;
        border-bottom: 2px solid transparent;
        transition: color 0.2s ease, border-color 0.2s ease;
    }
    .site-nav a:hover,
    .site-nav a.active {
        color: var(--accent);
        border-color: var(--accent);
    }
    .hamburger {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .hamburger span {
        width: 24px;
        height: 2px;
        background: var(--ink);
        transition: transform 0.2s ease, opacity 0.2s ease;
    }
    .hamburger.is-active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .hamburger.is-active span:nth-child(2) { opacity: 0; }
    .hamburger.is-active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

    /* Sections */
    .section { padding: 5rem 0; }
    .section-animated {
        opacity: 0;
        transform: translateY(32px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .section-animated.is-visible {
        opacity: 1;
        transform: none;
    }
    .section-head { margin-bottom: 2rem; }
    .section-head h2 { font-size: 2rem; margin: 0 0 0.5rem; }
    .section-head p { color: var(--muted); margin: 0; }

    .hero { padding-top: 4rem; }
    .hero-grid {
        display: grid;
        grid-template-columns: 1.2fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy h1 { font-size: clamp(2.4rem, 6vw, 3.6rem); margin: 0 0 1rem; }
    .accent { color: var(--accent); }
    .hero-highlights {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        padding: 0;
        list-style: none;
    }
    .hero-highlights li {
        background: var(--accent-soft);
        color: var(--accent);
        border-radius: 999px;
        padding: 0.25rem 0.75rem;
        font-size: 0.9rem;
    }
    .hero-art {
        position: relative;
        display: grid;
        place-items: center;
    }
    .orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(40px);
        opacity: 0.5;
    }
    .orb-1 { width: 220px; height: 220px; background: #d9b8ff; top: -20px; left: 10%; }
    .orb-2 { width: 180px; height: 180px; background: #ffc9de; bottom: -10px; right: 10%; }
    .hero-video-frame {
        position: relative;
        width: 300px;
        height: 300px;
        border-radius: 0.5rem;
        overflow: hidden;
        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.12);
        background: #fff;
    }
    .hero-video {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .about-grid,
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about-image-wrapper img,
    .contact-image-wrapper img {
        border-radius: var(--radius);
        box-shadow: var(--shadow);
    }
    .values-section { margin-top: 4rem; }
    .values-grid,
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .about-card,
    .card {
        background: var(--card);
        border-radius: var(--radius);
        padding: 1.5rem;
        box-shadow: var(--shadow);
    }
    .card-icon { font-size: 2rem; }

    .video-section { margin-bottom: 2.5rem; }
    .video-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
    }
    .video-wrapper video {
        width: 100%;
        border-radius: 0.5rem;
    }

    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        gap: 1rem;
    }
    .gallery-item {
        position: relative;
        padding: 0;
        border: none;
        border-radius: var(--radius);
        overflow: hidden;
        cursor: zoom-in;
        aspect-ratio: 1;
        background: var(--accent-soft);
    }
    .gallery-item img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.4s ease;
    }
    .gallery-item:hover img { transform: scale(1.05); }
    .gallery-item .glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, transparent 60%, rgba(142, 91, 214, 0.35));
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .gallery-item:hover .glow { opacity: 1; }

    .contact-points { list-style: none; padding: 0; }
    .contact-points li { margin-bottom: 0.75rem; }
    .contact-points strong { margin-right: 0.5rem; }

    /* Footer */
    .site-footer {
        background: #241c2b;
        color: #f3eefa;
        padding: 3rem 0;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 1fr 1.4fr;
        gap: 2rem;
    }
    .footer-socials { display: flex; gap: 1rem; }
    .footer-map iframe {
        width: 100%;
        height: 260px;
        border: 0;
        border-radius: var(--radius);
    }
    .map-placeholder {
        border: 1px dashed rgba(243, 238, 250, 0.4);
        border-radius: var(--radius);
        padding: 1.5rem;
    }

    /* Floating socials */
    .floating-socials {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        z-index: 60;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .floating-socials a {
        position: relative;
        display: grid;
        place-items: center;
        width: 44px;
        height: 44px;
        border-radius: 50%;
        background: var(--accent);
        color: #fff;
        box-shadow: var(--shadow);
    }
    .floating-socials svg { width: 22px; height: 22px; }
    .floating-socials .badge {
        position: absolute;
        right: 52px;
        white-space: nowrap;
        background: var(--ink);
        color: #fff;
        font-size: 0.8rem;
        padding: 0.2rem 0.5rem;
        border-radius: 0.4rem;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.2s ease;
    }
    .floating-socials a:hover .badge { opacity: 1; }

    /* Lightbox */
    .lightbox {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(20, 14, 26, 0.88);
    }
    .lightbox-figure {
        margin: 0;
        max-width: min(90vw, 900px);
        text-align: center;
        color: #f3eefa;
    }
    .lightbox-figure img {
        max-height: 80vh;
        margin: 0 auto;
        border-radius: 0.5rem;
    }
    .lightbox-btn,
    .lightbox-close {
        position: absolute;
        background: rgba(255, 255, 255, 0.12);
        color: #fff;
        border: none;
        cursor: pointer;
        border-radius: 50%;
        width: 48px;
        height: 48px;
        font-size: 1.75rem;
    }
    .lightbox-btn.prev { left: 1.5rem; }
    .lightbox-btn.next { right: 1.5rem; }
    .lightbox-close { top: 1.5rem; right: 1.5rem; font-size: 1.25rem; }

    @media (max-width: 820px) {
        .hamburger { display: flex; }
        .site-nav {
            position: absolute;
            top: 64px;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 0;
            background: var(--bg);
            max-height: 0;
            overflow: hidden;
            transition: max-height 0.3s ease;
        }
        .site-nav.open { max-height: 420px; }
        .site-nav a { padding: 0.9rem 1.5rem; border-bottom: 1px solid rgba(142, 91, 214, 0.1); }
        .hero-grid,
        .about-grid,
        .contact-grid,
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
