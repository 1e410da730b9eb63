use leptos::prelude::*;

/// One entry of the windowed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Window the page numbers around the current page: always the first and
/// last page, the current page plus/minus two, and one ellipsis marker on
/// each truncated side.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    let current = current as i64;
    let mut items = Vec::new();

    for page in 1..=(total as i64) {
        if page == 1 || page == total as i64 || (page >= current - 2 && page <= current + 2) {
            items.push(PageItem::Page(page as usize));
        } else if page == current - 3 || page == current + 3 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

/// Pagination strip: first/prev, windowed numbers, next/last.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let total = move || total_pages.get().max(1);

    let nav_style = "padding: 6px 14px; font-size: 14px; color: #555; background: #eee; border: none; border-radius: 6px; cursor: pointer;";

    view! {
        <div style="display: flex; justify-content: center; gap: 6px; margin: 12px 0; flex-wrap: wrap;">
            <button
                style=nav_style
                disabled=move || current.get() == 1
                on:click=move |_| on_select.run(1)
            >
                "หน้าแรก"
            </button>
            <button
                style=nav_style
                disabled=move || current.get() == 1
                on:click=move |_| on_select.run(current.get().saturating_sub(1).max(1))
            >
                "ก่อนหน้า"
            </button>

            {move || {
                page_window(current.get(), total())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => {
                            let active = current.get() == page;
                            view! {
                                <button
                                    style=move || format!(
                                        "padding: 6px 12px; font-size: 14px; border: none; border-radius: 6px; cursor: pointer; background: {}; color: {};",
                                        if active { "#2e7d32" } else { "#eee" },
                                        if active { "white" } else { "#555" }
                                    )
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page}
                                </button>
                            }
                            .into_any()
                        }
                        PageItem::Ellipsis => view! {
                            <span style="padding: 6px 10px; font-size: 14px; color: #555;">"..."</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                style=nav_style
                disabled=move || current.get() >= total()
                on:click=move |_| on_select.run((current.get() + 1).min(total()))
            >
                "ถัดไป"
            </button>
            <button
                style=nav_style
                disabled=move || current.get() >= total()
                on:click=move |_| on_select.run(total())
            >
                "หน้าสุดท้าย"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(p) => Some(*p),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(
            pages(&page_window(1, 4)),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn windows_around_the_current_page() {
        assert_eq!(
            pages(&page_window(10, 20)),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn window_clamps_at_the_edges() {
        assert_eq!(
            pages(&page_window(1, 10)),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            pages(&page_window(10, 10)),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
    }
}
