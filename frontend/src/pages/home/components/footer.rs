use chrono::Datelike;
use leptos::*;

use crate::config;
use crate::utils::time::today_in_agency_tz;

#[component]
pub fn Footer() -> impl IntoView {
    let agency = config::agency();
    let year = today_in_agency_tz().year();

    view! {
        <footer class="bg-footer text-text-inverse py-12">
            <div class="max-w-7xl mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    <div>
                        <h3 class="text-xl font-bold mb-4">{agency.name.clone()}</h3>
                        <p class="opacity-70 mb-4">
                            {format!("{} since {}.", agency.tagline, agency.established)}
                        </p>
                    </div>

                    <div>
                        <h3 class="text-lg font-bold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            <li><a href="#" class="opacity-70 hover:opacity-100 transition-opacity">"Home"</a></li>
                            <li><a href="#" class="opacity-70 hover:opacity-100 transition-opacity">"Our Team"</a></li>
                            <li><a href="#" class="opacity-70 hover:opacity-100 transition-opacity">"Services"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-bold mb-4">"Contact"</h3>
                        <ul class="space-y-2">
                            <li>
                                <a
                                    href=format!("tel:{}", agency.phone.replace(' ', ""))
                                    class="opacity-70 hover:opacity-100 transition-opacity"
                                >
                                    {agency.phone.clone()}
                                </a>
                            </li>
                            <li>
                                <a
                                    href=format!("mailto:{}", agency.email)
                                    class="opacity-70 hover:opacity-100 transition-opacity"
                                >
                                    {agency.email.clone()}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-overlay-border mt-12 pt-8 text-center opacity-70">
                    <p>{format!("© {} {}. All rights reserved.", year, agency.name)}</p>
                </div>
            </div>
        </footer>
    }
}
