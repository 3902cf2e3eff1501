pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #2ebf91;          /* Brand green */
  --primary-dark: #239a74;     /* Hover and active states */
  --secondary: #8360c3;        /* Gradient partner */
  --accent: #f39c12;

  /* Semantic Colors */
  --success: #2ebf91;
  --error: #e74c3c;

  /* Background and Surface Colors */
  --background: #ffffff;
  --background-alt: #f7f9fc;
  --surface: #ffffff;
  --overlay: rgba(255, 255, 255, 0.96);

  /* Text Colors */
  --text-primary: #2c3e50;
  --text-light: #7f8c8d;
  --text-inverse: #ffffff;

  /* Border Colors */
  --border: #e0e0e0;

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 3px rgba(0, 0, 0, 0.08);
  --shadow-md: 0 6px 18px rgba(0, 0, 0, 0.1);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark theme, switched by the data-theme attribute on <html> */
[data-theme="dark"] {
  --background: #121418;
  --background-alt: #1b1e24;
  --surface: #22262e;
  --overlay: rgba(18, 20, 24, 0.96);

  --text-primary: #ecf0f1;
  --text-light: #95a5a6;

  --border: #3a3f4a;

  --shadow-sm: 0 1px 3px rgba(0, 0, 0, 0.4);
  --shadow-md: 0 6px 18px rgba(0, 0, 0, 0.5);
}
"#;
