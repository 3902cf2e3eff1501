pub const HOME_STYLES: &str = r#"
/* Landing Page Styles */

section {
  padding: var(--space-16) 0;
}

.section-alt {
  background-color: var(--background-alt);
}

/* Hero Section */
.hero {
  min-height: 90vh;
  display: flex;
  align-items: center;
  background: linear-gradient(135deg, var(--primary), var(--secondary));
  color: var(--text-inverse);
  text-align: center;
  position: relative;
  overflow: hidden;
}

.hero-content {
  max-width: 800px;
  margin: 0 auto;
  will-change: transform, opacity;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  cursor: pointer;
  font-size: 1.5rem;
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}

/* Services and Counters */
.services-grid,
.counters-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
}

.counters-grid {
  margin-top: var(--space-12);
  text-align: center;
}

.counter {
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--primary);
}

.service-card i {
  font-size: 2rem;
  color: var(--primary);
  margin-bottom: var(--space-4);
}

.counter-item p {
  color: var(--text-light);
}

/* Reveal on scroll */
[data-aos] {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

[data-aos="fade-left"] {
  transform: translateX(-30px);
}

[data-aos].aos-animate {
  opacity: 1;
  transform: none;
}

/* Portfolio */
.filter-buttons {
  display: flex;
  gap: var(--space-2);
  justify-content: center;
  margin-bottom: var(--space-8);
  flex-wrap: wrap;
}

.filter-btn {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 2px solid var(--primary);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
}

.filter-btn.active {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-6);
}

.portfolio-item {
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.portfolio-thumb {
  height: 160px;
  background: linear-gradient(135deg, var(--secondary), var(--primary));
}

.portfolio-caption {
  padding: var(--space-4);
}

/* Testimonials */
.testimonial-slider {
  max-width: 720px;
  margin: 0 auto;
  text-align: center;
  position: relative;
}

.testimonial-item {
  display: none;
}

.testimonial-item.active {
  display: block;
  animation: fade 0.5s ease;
}

@keyframes fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

.testimonial-quote {
  font-size: 1.25rem;
  font-style: italic;
  margin-bottom: var(--space-4);
}

.testimonial-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: none;
  background-color: var(--border);
  cursor: pointer;
}

.dot.active {
  background-color: var(--primary);
}

/* Newsletter */
.newsletter-box {
  max-width: 560px;
  margin: 0 auto;
  text-align: center;
}

.newsletter-form {
  display: flex;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.newsletter-form .form-input {
  flex: 1;
}

.newsletter-message {
  min-height: 1.5em;
  margin-top: var(--space-2);
}

/* Contact and Submissions */
.contact-wrapper {
  max-width: 640px;
  margin: 0 auto;
}

.submission-card {
  margin-bottom: var(--space-6);
}

.submission-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: var(--space-3);
}

.submission-email,
.submission-meta {
  color: var(--text-light);
  font-size: 0.875rem;
}

.submission-index {
  color: var(--text-light);
  font-weight: 600;
}

.submission-message {
  margin: var(--space-3) 0;
}

.no-submissions {
  text-align: center;
  color: var(--text-light);
}
"#;
