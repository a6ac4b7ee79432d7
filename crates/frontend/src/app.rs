use crate::chat::widget::ChatWidget;
use crate::config::AppConfig;
use crate::portfolio::context::PortfolioProvider;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::hero::Hero;
use crate::sections::navigation::Navigation;
use crate::sections::projects::Projects;
use crate::sections::resume::ResumeSection;
use crate::sections::skills::Skills;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(AppConfig::default());

    view! {
        <PortfolioProvider>
            <div style="min-height: 100vh; background: #0a0a1a; color: #fff; position: relative;">
                <Navigation />

                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <ResumeSection />
                    <Contact />
                </main>

                <footer style="text-align: center; padding: 32px; color: #6b7280; font-size: 0.9rem;">
                    {format!("© {} Alex Carter", chrono::Utc::now().year())}
                </footer>

                // The widget handles a missing endpoint itself (demo mode),
                // so it is always mounted.
                <ChatWidget />
            </div>
        </PortfolioProvider>
    }
}
