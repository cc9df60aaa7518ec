use leptos::*;

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub context: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Sarah managed our rental for five years without a single hiccup. Inspections, \
                maintenance, tenants - all handled before we even had to ask.",
        name: "Robert & Lena K.",
        context: "Landlords, Prospect",
    },
    Testimonial {
        quote: "Michael sold our family home two weeks after listing, well above the price guide. \
                His knowledge of the eastern suburbs market is second to none.",
        name: "Priya S.",
        context: "Vendor, Burnside",
    },
    Testimonial {
        quote: "Jessica built us an investment plan we actually understand. Two properties in, \
                and the portfolio is performing exactly as she modelled.",
        name: "Daniel T.",
        context: "Investor, Mawson Lakes",
    },
];

/// Advances the carousel index with wrap-around in either direction.
pub fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (index, set_index) = create_signal(0usize);

    view! {
        <section class="py-16 bg-surface-muted">
            <div class="max-w-4xl mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-brand mb-12">"What Our Clients Say"</h2>

                <div class="relative bg-surface-elevated rounded-xl shadow-sm border border-border p-8 md:p-12">
                    {move || {
                        let testimonial = &TESTIMONIALS[index.get() % TESTIMONIALS.len()];
                        view! {
                            <blockquote class="text-lg text-fg leading-relaxed mb-6">
                                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                            </blockquote>
                            <p class="font-bold text-fg">{testimonial.name}</p>
                            <p class="text-sm text-fg-muted">{testimonial.context}</p>
                        }
                    }}

                    <button
                        class="absolute left-4 top-1/2 -translate-y-1/2 p-2 rounded-full hover:bg-surface-muted"
                        aria-label="Previous testimonial"
                        on:click=move |_| {
                            set_index.update(|i| *i = step_index(*i, TESTIMONIALS.len(), false))
                        }
                    >
                        {"‹"}
                    </button>
                    <button
                        class="absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-full hover:bg-surface-muted"
                        aria-label="Next testimonial"
                        on:click=move |_| {
                            set_index.update(|i| *i = step_index(*i, TESTIMONIALS.len(), true))
                        }
                    >
                        {"›"}
                    </button>
                </div>

                <div class="flex justify-center gap-2 mt-6">
                    {(0..TESTIMONIALS.len())
                        .map(|dot| {
                            view! {
                                <span class=move || {
                                    if index.get() == dot {
                                        "w-2 h-2 rounded-full bg-brand"
                                    } else {
                                        "w-2 h-2 rounded-full bg-surface-strong"
                                    }
                                }></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
