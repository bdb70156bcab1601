//! Global CSS for the portfolio.
//!
//! Dark by default; `body.light-mode` swaps the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0e0e10;
  --bg-raised: #18181b;
  --border: #2a2a2e;

  --text-primary: #f4f2ee;
  --text-secondary: rgba(244, 242, 238, 0.72);
  --text-muted: rgba(244, 242, 238, 0.5);

  --accent: #e2b15b;
  --accent-soft: rgba(226, 177, 91, 0.18);
  --danger: #ff5c5c;

  --overlay: rgba(8, 8, 10, 0.92);

  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --font-display: 'Fraunces', Georgia, serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 2rem;
  --text-2xl: 3rem;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.2, 0.7, 0.2, 1);
}

body.light-mode {
  --bg: #f7f5f0;
  --bg-raised: #ffffff;
  --border: #e3dfd6;

  --text-primary: #1b1a17;
  --text-secondary: rgba(27, 26, 23, 0.72);
  --text-muted: rgba(27, 26, 23, 0.5);

  --accent: #b5741c;
  --accent-soft: rgba(181, 116, 28, 0.14);

  --overlay: rgba(247, 245, 240, 0.95);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

body.lightbox-open,
body.menu-open {
  overflow: hidden;
}

a {
  color: inherit;
}

img {
  display: block;
  max-width: 100%;
}

:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 3px;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 2rem;
  background: var(--bg);
  border-bottom: 1px solid transparent;
  transition: padding var(--transition-normal), border-color var(--transition-normal);
}

.site-header.shrink {
  padding: 0.75rem 2rem;
  border-bottom-color: var(--border);
}

.site-logo {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  text-decoration: none;
}

.site-nav {
  display: flex;
  gap: 1.5rem;
  align-items: center;
}

.site-nav a {
  text-decoration: none;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.site-nav a:hover {
  color: var(--text-primary);
}

.header-actions {
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.menu-toggle {
  display: none;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: 999px;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast);
}

.btn-primary {
  padding: 0.75rem 1.75rem;
  background: var(--accent);
  color: var(--bg);
  border: 1px solid var(--accent);
}

.btn-primary:hover {
  background: transparent;
  color: var(--accent);
}

.btn-ghost {
  padding: 0.5rem 1rem;
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-ghost:hover {
  border-color: var(--accent);
}

.icon-btn {
  width: 2.75rem;
  height: 2.75rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--bg-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  font-size: 1.5rem;
  line-height: 1;
}

.icon-btn:hover {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Mobile menu === */
.menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: var(--overlay);
}

.mobile-menu {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 61;
  width: min(20rem, 85vw);
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  background: var(--bg-raised);
  border-left: 1px solid var(--border);
}

.mobile-menu a {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  text-decoration: none;
}

@media (max-width: 767px) {
  .site-nav {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }
}

/* === Sections === */
.site-main section {
  padding: 5rem 2rem;
  max-width: 1280px;
  margin: 0 auto;
}

.hero h1 {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  line-height: 1.1;
  max-width: 18ch;
}

.hero p {
  margin-top: 1.5rem;
  max-width: 48ch;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  margin-bottom: 2rem;
}

.animate-on-scroll {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.animate-on-scroll.is-visible {
  opacity: 1;
  transform: none;
}

/* === Gallery === */
.gallery-filters {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.chip {
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  transition: all var(--transition-fast);
}

.chip:hover {
  color: var(--text-primary);
}

.chip.is-active {
  background: var(--accent-soft);
  border-color: var(--accent);
  color: var(--accent);
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  grid-auto-rows: 220px;
  grid-auto-flow: dense;
  gap: 1rem;
}

@media (max-width: 1023px) {
  .gallery-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 599px) {
  .gallery-grid {
    grid-template-columns: 1fr;
  }

  .gallery-grid .tile {
    grid-column: auto;
    grid-row: auto;
  }
}

.tile {
  position: relative;
  display: block;
  overflow: hidden;
  border-radius: var(--radius);
  background: var(--bg-raised);
  text-decoration: none;
}

.tile--wide { grid-column: span 2; }
.tile--tall { grid-row: span 2; }
.tile--xl { grid-column: span 2; grid-row: span 2; }
.tile--3x2 { grid-column: span 3; grid-row: span 2; }
.tile--2x3 { grid-column: span 2; grid-row: span 3; }

.tile.is-loading {
  background: linear-gradient(100deg, var(--bg-raised) 40%, var(--border) 50%, var(--bg-raised) 60%);
  background-size: 200% 100%;
  animation: shimmer 1.4s linear infinite;
}

.tile__cover {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.tile.is-loaded .tile__cover {
  opacity: 1;
}

.tile:hover .tile__cover {
  transform: scale(1.04);
}

.tile__meta {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1rem;
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 0.5rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.65));
  color: #fff;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.tile.is-loaded:hover .tile__meta,
.tile.is-loaded:focus-visible .tile__meta {
  opacity: 1;
}

.tile__title {
  font-weight: 600;
}

.tile__badge,
.lightbox__brand {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: var(--accent);
  color: #111;
  white-space: nowrap;
}

.gallery-fallback {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--text-muted);
}

@keyframes shimmer {
  to { background-position: -200% 0; }
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--overlay);
  animation: fade-in var(--transition-normal);
}

.lightbox__dialog {
  position: relative;
  width: min(1100px, 100%);
  max-height: 100%;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  outline: none;
  touch-action: pan-y;
}

.lightbox__header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.lightbox__title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  margin-right: auto;
}

.lightbox__link {
  font-size: var(--text-sm);
  color: var(--accent);
}

.lightbox__stage {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 50vh;
}

.lightbox__media {
  max-width: 100%;
  max-height: 75vh;
  border-radius: var(--radius);
  object-fit: contain;
}

.lightbox__media.is-loading {
  visibility: hidden;
}

.lightbox__frame {
  width: 100%;
  aspect-ratio: 16 / 9;
  border: 0;
  border-radius: var(--radius);
}

.lightbox__error {
  color: var(--text-muted);
  text-align: center;
  padding: 4rem 1rem;
}

.lightbox__stage .loading-indicator {
  position: absolute;
  inset: 0;
}

.lightbox__nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.lightbox__prev { left: -1rem; }
.lightbox__next { right: -1rem; }

.lightbox__counter {
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  font-variant-numeric: tabular-nums;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Loading indicator === */
.loading-indicator {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  border: 2px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Contact === */
.contact-form {
  display: grid;
  gap: 1rem;
  max-width: 36rem;
}

.contact-form label {
  display: grid;
  gap: 0.35rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.contact-form input,
.contact-form textarea {
  font: inherit;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  color: var(--text-primary);
}

.contact-form textarea {
  min-height: 9rem;
  resize: vertical;
}

.form-status {
  min-height: 1.5em;
  font-size: var(--text-sm);
}

.form-status.is-success { color: var(--accent); }
.form-status.is-error { color: var(--danger); }

/* === Footer === */
.site-footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
  border-top: 1px solid var(--border);
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation: none !important;
    transition: none !important;
  }

  .animate-on-scroll {
    opacity: 1;
    transform: none;
  }
}
"#;
