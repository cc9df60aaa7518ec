use leptos::*;

use crate::pages::booking::calendar::{month_grid, WEEKDAY_HEADERS};
use crate::pages::booking::view_model::use_booking_view_model;
use crate::utils::time::today_in_agency_tz;

#[component]
pub fn CalendarGrid() -> impl IntoView {
    let vm = use_booking_view_model();
    let grid = create_memo(move |_| {
        month_grid(vm.cursor.get(), today_in_agency_tz(), vm.selected_date.get())
    });

    view! {
        <div class="bg-surface-elevated p-4 md:p-6 rounded-xl shadow-sm border border-border">
            <div class="flex justify-between items-center mb-4">
                <button
                    class="p-2 rounded-full hover:bg-surface-muted"
                    aria-label="Previous month"
                    on:click=move |_| vm.month_back()
                >
                    {"‹"}
                </button>
                <h3 class="font-bold text-lg">{move || vm.cursor.get().label()}</h3>
                <button
                    class="p-2 rounded-full hover:bg-surface-muted"
                    aria-label="Next month"
                    on:click=move |_| vm.month_forward()
                >
                    {"›"}
                </button>
            </div>

            <div class="grid grid-cols-7 gap-2 mb-2">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|day| {
                        view! {
                            <div class="text-center text-sm font-medium text-fg-muted">{*day}</div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-7 gap-2">
                {move || {
                    let grid = grid.get();
                    let blanks = (0..grid.leading_blanks)
                        .map(|_| view! { <div class="h-9"></div> })
                        .collect_view();
                    let days = grid
                        .days
                        .into_iter()
                        .map(|cell| {
                            let date = cell.date;
                            let selectable = cell.selectable();
                            let class = if cell.is_selected {
                                "h-9 flex items-center justify-center rounded-full cursor-pointer bg-brand text-text-inverse"
                            } else if cell.is_today {
                                "h-9 flex items-center justify-center rounded-full cursor-pointer ring-2 ring-brand text-fg hover:bg-surface-muted"
                            } else if cell.is_past {
                                "h-9 flex items-center justify-center rounded-full text-state-disabled-text cursor-not-allowed"
                            } else {
                                "h-9 flex items-center justify-center rounded-full cursor-pointer text-fg hover:bg-surface-muted"
                            };
                            view! {
                                <div
                                    class=class
                                    on:click=move |_| {
                                        if selectable {
                                            vm.select_date(date);
                                        }
                                    }
                                >
                                    {cell.day}
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <>
                            {blanks}
                            {days}
                        </>
                    }
                }}
            </div>
        </div>
    }
}
