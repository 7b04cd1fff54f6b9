use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// One accordion row. Open state lives in the parent so a list can keep a
/// single item expanded.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

/// Next open index after clicking `clicked`: clicking the open item closes it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [(&'static str, &'static str)],
}

/// Accordion over static Q/A pairs with the first one expanded.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| Some(0usize));

    // Reset when the parent swaps in a different list.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                open.set(Some(0));
                || ()
            },
            props.entries,
        );
    }

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, (question, answer))| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_| open.set(toggle_open(*open, i)))
                };
                html! {
                    <FaqItem question={*question} open={*open == Some(i)} {on_toggle}>
                        <p>{ *answer }</p>
                    </FaqItem>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn clicking_other_item_switches() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
        assert_eq!(toggle_open(None, 1), Some(1));
    }
}
