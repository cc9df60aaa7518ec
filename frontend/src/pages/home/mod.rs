pub mod components;

use leptos::*;

use self::components::{
    cta::CallToActionSection, footer::Footer, hero::HeroSection,
    properties::FeaturedPropertiesSection, services::ServicesSection, stats::StatsSection,
    testimonials::TestimonialsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <HeroSection/>
            <StatsSection/>
            <FeaturedPropertiesSection/>
            <TestimonialsSection/>
            <ServicesSection/>
            <CallToActionSection/>
            <Footer/>
        </div>
    }
}
