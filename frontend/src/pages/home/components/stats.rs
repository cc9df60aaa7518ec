use leptos::*;

pub struct MarketStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat {
        label: "Properties Sold",
        value: "1,200+",
    },
    MarketStat {
        label: "Client Satisfaction",
        value: "98%",
    },
    MarketStat {
        label: "Years in Business",
        value: "15+",
    },
    MarketStat {
        label: "Adelaide Suburbs",
        value: "30+",
    },
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-surface-muted">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 md:gap-8">
                    {MARKET_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="bg-surface-elevated p-8 rounded-xl shadow-sm text-center">
                                    <h3 class="text-3xl font-bold text-brand">{stat.value}</h3>
                                    <p class="text-fg-muted">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
