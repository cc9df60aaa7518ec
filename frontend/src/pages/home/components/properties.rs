use leptos::*;

pub struct FeaturedProperty {
    pub address: &'static str,
    pub suburb: &'static str,
    pub price_guide: &'static str,
    pub beds: u8,
    pub baths: u8,
    pub parks: u8,
    pub tag: &'static str,
}

pub const FEATURED_PROPERTIES: [FeaturedProperty; 3] = [
    FeaturedProperty {
        address: "14 Wakefield Street",
        suburb: "Adelaide",
        price_guide: "$895,000 - $940,000",
        beds: 3,
        baths: 2,
        parks: 1,
        tag: "For Sale",
    },
    FeaturedProperty {
        address: "8 Jeffcott Road",
        suburb: "North Adelaide",
        price_guide: "$1,250,000+",
        beds: 4,
        baths: 2,
        parks: 2,
        tag: "Auction",
    },
    FeaturedProperty {
        address: "22/5 Glen Osmond Road",
        suburb: "Parkside",
        price_guide: "$520 per week",
        beds: 2,
        baths: 1,
        parks: 1,
        tag: "For Lease",
    },
];

#[component]
pub fn FeaturedPropertiesSection() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-brand mb-4">"Featured Properties"</h2>
                    <p class="text-fg-muted max-w-2xl mx-auto">
                        "A selection of homes our team is currently representing across Adelaide"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {FEATURED_PROPERTIES
                        .iter()
                        .map(|property| {
                            view! {
                                <div class="bg-surface-elevated rounded-xl shadow-lg border border-border overflow-hidden">
                                    <div class="h-48 bg-surface-strong flex items-center justify-center text-fg-muted">
                                        <span class="text-sm uppercase tracking-wide">{property.tag}</span>
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-bold text-fg">{property.address}</h3>
                                        <p class="text-fg-muted">{property.suburb}</p>
                                        <p class="text-brand font-semibold mt-2">{property.price_guide}</p>
                                        <p class="text-sm text-fg-muted mt-3">
                                            {format!(
                                                "{} bed · {} bath · {} park",
                                                property.beds, property.baths, property.parks
                                            )}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
