use leptos::*;

pub struct ServiceCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title: "Property Sales",
        blurb: "Expert guidance through every step of selling your property, from valuation to \
                settlement.",
    },
    ServiceCard {
        title: "Property Management",
        blurb: "Comprehensive management services to maximize your investment returns and \
                minimize stress.",
    },
    ServiceCard {
        title: "Investment Advisory",
        blurb: "Strategic advice to help you build and optimize your property investment \
                portfolio.",
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-brand mb-4">"Our Services"</h2>
                    <p class="text-fg-muted max-w-2xl mx-auto">
                        "Comprehensive real estate solutions tailored to your needs"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="bg-surface-elevated p-8 rounded-xl shadow-lg border border-border">
                                    <div class="bg-accent w-14 h-14 rounded-full mb-6"></div>
                                    <h3 class="text-xl font-bold mb-4 text-brand">{service.title}</h3>
                                    <p class="text-fg-muted mb-6">{service.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
