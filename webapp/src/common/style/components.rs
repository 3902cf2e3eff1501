pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  font-weight: 600;
  cursor: pointer;
  border: none;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-outline {
  background: transparent;
  color: var(--text-inverse);
  border: 2px solid var(--text-inverse);
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  margin-bottom: var(--space-4);
}

.form-label {
  font-weight: 500;
  margin-bottom: var(--space-1);
}

.form-input {
  padding: var(--space-3);
  border: 2px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-input.field-valid {
  border-color: var(--success);
}

.form-input.field-invalid {
  border-color: var(--error);
}

.form-error {
  display: block;
  color: var(--error);
  font-size: 0.875rem;
  margin-top: var(--space-1);
}

.form-status {
  color: var(--error);
  margin-top: var(--space-2);
}

.success-banner {
  background-color: var(--success);
  color: var(--text-inverse);
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  margin-bottom: var(--space-4);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

/* Loader */
.loader-wrapper {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--background);
  z-index: 100;
  transition: opacity 0.5s ease, visibility 0.5s ease;
}

.loader-wrapper.hidden {
  opacity: 0;
  visibility: hidden;
}

.loader {
  width: 48px;
  height: 48px;
  border: 4px solid var(--border);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: none;
  background-color: var(--primary);
  color: var(--text-inverse);
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.back-to-top.show {
  opacity: 1;
  pointer-events: auto;
}
"#;
