use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

pub const LANDING_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Header and navigation */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  z-index: 50;
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.app-header.sticky-header {
  background-color: var(--overlay);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo {
  font-weight: 700;
  font-size: 1.5rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  list-style: none;
}

.nav-links a,
.dropdown-toggle {
  color: var(--text-primary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  background: none;
  border: none;
  font: inherit;
  cursor: pointer;
}

.nav-links a.active {
  color: var(--primary);
}

.dropdown {
  position: relative;
}

.dropdown-menu {
  display: none;
  position: absolute;
  top: 100%;
  left: 0;
  min-width: 180px;
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  border-radius: var(--radius-md);
  padding: var(--space-2) 0;
  list-style: none;
}

.dropdown.active .dropdown-menu,
.dropdown:hover .dropdown-menu {
  display: block;
}

.dropdown-menu a {
  display: block;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.theme-toggle,
.menu-toggle {
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
}

.menu-toggle {
  display: none;
}

.page-content {
  padding-top: var(--header-height);
}

.app-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-light);
  background-color: var(--background-alt);
}

@media (max-width: 768px) {
  .menu-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    background-color: var(--overlay);
    box-shadow: var(--shadow-md);
    padding: var(--space-4);
  }

  .nav-links.show {
    display: flex;
  }

  .dropdown-menu {
    position: static;
    box-shadow: none;
  }

  .dropdown:hover .dropdown-menu {
    display: none;
  }

  .dropdown.active .dropdown-menu {
    display: block;
  }
}
"#,
    HOME_STYLES
);
