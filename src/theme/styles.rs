//! Global CSS styles for the portfolio page.
//!
//! Soft pink palette. Dynamic values (navbar background, robot transforms,
//! skill bar widths) are set inline by the components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINK (Brand, Links, Accents) */
  --pink: #ff69b4;
  --pink-deep: #ff1493;
  --pink-light: #ffc0cb;
  --pink-glow: rgba(255, 105, 180, 0.3);

  /* SURFACES */
  --background: #fff5f8;
  --surface: #ffffff;

  /* TEXT */
  --text-primary: #333333;
  --text-secondary: #666666;

  /* ROBOT */
  --robot-body: #ffb6d9;
  --robot-eye: #2d2d2d;

  /* Typography */
  --font-sans: 'Poppins', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 0.2s ease;
  --transition-normal: 0.3s ease;
}

/* === Reset === */
*, *::before, *::after {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--background);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Container (scrolls instead of body) === */
.page {
  height: 100vh;
  overflow-x: hidden;
  scroll-behavior: smooth;
  outline: none;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  backdrop-filter: blur(10px);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  height: 70px;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo-text {
  font-size: 1.5rem;
  font-weight: 700;
  background: linear-gradient(135deg, var(--pink), var(--pink-deep));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-link {
  font-weight: 500;
  color: var(--text-secondary);
  position: relative;
  transition: color var(--transition-fast);
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--pink);
  transition: width var(--transition-normal);
}

.nav-link:hover,
.nav-link.active {
  color: var(--pink);
}

.nav-link.active::after {
  width: 100%;
}

.hamburger {
  display: none;
  flex-direction: column;
  cursor: pointer;
}

.bar {
  width: 25px;
  height: 3px;
  margin: 3px 0;
  background: var(--pink);
  border-radius: 2px;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: 70px;
  background: linear-gradient(135deg, #fff5f8 0%, #ffe4ec 100%);
}

.hero-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.hero-text,
.hero-image,
.section-header {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.hero-text.animate,
.hero-image.animate,
.section-header.animate {
  opacity: 1;
  transform: translateY(0);
}

.hero-title {
  font-size: 3rem;
  line-height: 1.2;
  margin-bottom: 1rem;
}

.highlight {
  color: var(--pink);
}

.hero-subtitle {
  font-size: 1.2rem;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
}

/* === Robot === */
.robot-container {
  display: flex;
  justify-content: center;
  transition: transform 0.1s ease-out;
}

.robot {
  position: relative;
  width: 200px;
  animation: robotFloat 4s ease-in-out infinite;
}

.robot-head {
  position: relative;
  width: 160px;
  height: 130px;
  margin: 0 auto;
  background: var(--robot-body);
  border-radius: 40px;
  box-shadow: 0 10px 30px var(--pink-glow);
}

.robot-antenna {
  position: absolute;
  top: -30px;
  left: 50%;
  width: 6px;
  height: 30px;
  background: var(--pink-deep);
  transform: translateX(-50%);
}

.robot-antenna::after {
  content: '';
  position: absolute;
  top: -10px;
  left: -5px;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--pink);
}

.robot-eyes {
  display: flex;
  justify-content: center;
  gap: 30px;
  padding-top: 35px;
}

.eye-socket {
  width: 36px;
  height: 36px;
  border-radius: 50%;
  background: var(--surface);
  display: flex;
  align-items: center;
  justify-content: center;
}

.eye {
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--robot-eye);
  transition: transform 0.1s ease-out;
}

.robot-mouth {
  width: 40px;
  height: 20px;
  margin: 15px auto 0;
  border-bottom: 4px solid var(--pink-deep);
  border-radius: 0 0 20px 20px;
}

.robot-body {
  width: 120px;
  height: 100px;
  margin: 10px auto 0;
  background: var(--robot-body);
  border-radius: 30px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.robot-heart {
  color: var(--pink-deep);
  font-size: 2rem;
}

.robot-arms {
  position: absolute;
  top: 150px;
  left: 0;
  right: 0;
}

.robot-arm {
  position: absolute;
  width: 20px;
  height: 70px;
  background: var(--robot-body);
  border-radius: 10px;
}

.robot-arm.left {
  left: 10px;
  transform: rotate(20deg);
}

.robot-arm.right {
  right: 10px;
  transform: rotate(-20deg);
}

/* === Sections === */
.about,
.portfolio,
.skills,
.contact {
  padding: 100px 0;
}

.about,
.skills {
  background: var(--surface);
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

.section-subtitle {
  color: var(--text-secondary);
}

/* === Cards === */
.about-grid,
.portfolio-grid,
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.about-card,
.portfolio-item,
.skill-item {
  opacity: 0;
  padding: 2rem;
  background: var(--surface);
  border-radius: 20px;
  box-shadow: 0 10px 30px var(--pink-glow);
  transition: transform var(--transition-normal);
}

.about-card:hover,
.portfolio-item:hover {
  transform: translateY(-8px);
}

.about-icon {
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

.portfolio-item {
  padding: 0;
  overflow: hidden;
  cursor: pointer;
}

.portfolio-image {
  height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  background: linear-gradient(135deg, var(--pink-light), var(--pink));
}

.portfolio-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.portfolio-content {
  padding: 1.5rem;
}

.portfolio-tags,
.modal-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  padding: 0.25rem 0.75rem;
  font-size: 0.8rem;
  color: var(--pink-deep);
  background: #ffe4ec;
  border-radius: 999px;
}

/* === Skills === */
.skill {
  margin-top: 1.25rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.4rem;
}

.skill-bar {
  height: 10px;
  background: #ffe4ec;
  border-radius: 5px;
  overflow: hidden;
}

.skill-progress {
  width: 0;
  height: 100%;
  background: linear-gradient(90deg, var(--pink), var(--pink-deep));
  border-radius: 5px;
  transition: width 1.5s ease;
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 3rem;
}

.contact-item {
  display: flex;
  gap: 1rem;
  margin-bottom: 1rem;
}

.form-group {
  margin-bottom: 1rem;
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 0.9rem 1rem;
  font: inherit;
  border: 2px solid var(--pink-light);
  border-radius: 10px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.form-group input:focus,
.form-group textarea:focus {
  border-color: var(--pink);
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.8rem 2rem;
  font: inherit;
  font-weight: 600;
  border-radius: 999px;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
}

.btn-primary {
  color: var(--surface);
  background: linear-gradient(135deg, var(--pink), var(--pink-deep));
  border: none;
  box-shadow: 0 5px 15px var(--pink-glow);
}

.btn-secondary {
  color: var(--pink);
  background: transparent;
  border: 2px solid var(--pink);
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--surface);
  background: linear-gradient(135deg, var(--pink), var(--pink-deep));
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
}

.modal-content {
  position: relative;
  width: 90%;
  max-width: 700px;
  max-height: 85vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--surface);
  border-radius: 20px;
  animation: fadeInUp 0.3s ease-out;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: 1.8rem;
  color: var(--text-secondary);
  background: none;
  border: none;
  cursor: pointer;
}

.modal-image {
  width: 100%;
  border-radius: 12px;
  margin-bottom: 1.5rem;
}

.modal-title {
  color: var(--pink-deep);
  margin-bottom: 1rem;
}

.modal-section {
  margin-top: 1.5rem;
}

.modal-features {
  padding-left: 1.25rem;
}

.modal-links {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Notification === */
.notification {
  position: fixed;
  top: 90px;
  right: 20px;
  z-index: 3000;
  min-width: 280px;
  padding: 1rem 1.25rem;
  color: var(--surface);
  border-radius: 12px;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
  animation: slideInRight 0.3s ease-out;
}

.notification-content {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.notification-close {
  font-size: 1.4rem;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Mobile (<= 768px) === */
@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: 70px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: var(--surface);
    box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }

  .hero-container,
  .contact-content {
    grid-template-columns: 1fr;
    text-align: center;
  }

  .hero-buttons {
    justify-content: center;
  }

  .hero-title {
    font-size: 2.2rem;
  }
}

/* === Keyframes === */
@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes robotFloat {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-15px); }
}

@keyframes rainbowRobot {
  0% { filter: hue-rotate(0deg); }
  100% { filter: hue-rotate(360deg); }
}

@keyframes slideInRight {
  from {
    transform: translateX(100%);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

@keyframes slideOutRight {
  from {
    transform: translateX(0);
    opacity: 1;
  }
  to {
    transform: translateX(100%);
    opacity: 0;
  }
}
"#;
