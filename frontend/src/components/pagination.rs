use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-sm",
        "font-semibold",
        "transition-all",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center gap-3" aria-label="ಪುಟಗಳು">
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label="ಹಿಂದಿನ ಪುಟ"
            >
                {"<"}
            </button>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                { for slots.into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let page_classes = classes!(
                            base_btn_classes.clone(),
                            if page == current_page {
                                "bg-[var(--primary)] text-white border-transparent cursor-default pointer-events-none"
                            } else {
                                ""
                            }
                        );
                        let onclick = {
                            let on_page_change = on_page_change.clone();
                            Callback::from(move |_| on_page_change.emit(page))
                        };

                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={page_classes}
                                aria-current={if page == current_page {
                                    Some(AttrValue::from("page"))
                                } else {
                                    None
                                }}
                                disabled={page == current_page}
                                onclick={onclick}
                            >
                                { page }
                            </button>
                        }
                    }
                    PageSlot::Ellipsis(id) => {
                        html! {
                            <span
                                key={format!("ellipsis-{id}-{current_page}")}
                                class={classes!(
                                    base_btn_classes.clone(),
                                    "select-none",
                                    "cursor-default",
                                    "opacity-60",
                                    "pointer-events-none"
                                )}
                                aria-hidden="true"
                            >
                                {"..."}
                            </span>
                        }
                    }
                }) }
            </div>
            <button
                type="button"
                class={base_btn_classes}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label="ಮುಂದಿನ ಪುಟ"
            >
                {">"}
            </button>
        </nav>
    }
}

fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::new();
    slots.push(PageSlot::Page(1));

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 5;
    } else if current + 2 >= total {
        start = total.saturating_sub(4).max(2);
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }

    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }

    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }

    slots.push(PageSlot::Page(total));

    slots
}

#[cfg(test)]
mod tests {
    use super::{visible_slots, PageSlot};

    fn pages(slots: &[PageSlot]) -> Vec<Option<usize>> {
        slots
            .iter()
            .map(|s| match s {
                PageSlot::Page(p) => Some(*p),
                PageSlot::Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(
            pages(&visible_slots(2, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn middle_window_has_both_ellipses() {
        let slots = pages(&visible_slots(10, 20));
        assert_eq!(slots.first(), Some(&Some(1)));
        assert_eq!(slots.last(), Some(&Some(20)));
        assert_eq!(slots.iter().filter(|s| s.is_none()).count(), 2);
        assert!(slots.contains(&Some(10)));
    }

    #[test]
    fn edges_skip_the_near_ellipsis() {
        let first = pages(&visible_slots(1, 20));
        assert_eq!(first.iter().filter(|s| s.is_none()).count(), 1);
        let last = pages(&visible_slots(20, 20));
        assert_eq!(last.iter().filter(|s| s.is_none()).count(), 1);
    }
}
