use yew::prelude::*;

pub const MAX_COMPARED: usize = 2;
pub const NOT_INCLUDED: &str = "No incluido";

pub const COMPARED_FEATURES: [&str; 6] = [
    "Velocidad",
    "Instalación",
    "Router WiFi",
    "Soporte",
    "TV Canales",
    "Telefonía",
];

#[derive(Debug, PartialEq, Eq)]
pub struct ComparablePlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    /// One value per entry of [`COMPARED_FEATURES`].
    pub values: [&'static str; 6],
}

pub static COMPARABLE_PLANS: [ComparablePlan; 3] = [
    ComparablePlan {
        id: "basic",
        name: "Básico",
        price: 69,
        values: ["100 Mbps", "Gratis", "Básico", "24/7", NOT_INCLUDED, NOT_INCLUDED],
    },
    ComparablePlan {
        id: "home",
        name: "Hogar",
        price: 89,
        values: ["200 Mbps", "Gratis", "Dual Band", "24/7 Prioritario", "80+ canales", NOT_INCLUDED],
    },
    ComparablePlan {
        id: "premium",
        name: "Premium",
        price: 119,
        values: ["300 Mbps", "Gratis", "WiFi 6", "24/7 VIP", "120+ canales HD", "Ilimitada"],
    },
];

/// Plan ids picked for comparison, in the order they were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    selected: Vec<&'static str>,
}

impl ComparisonSelection {
    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| *s == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Deselects a chosen plan, otherwise selects it if there is room.
    /// Returns whether anything changed.
    pub fn toggle(&mut self, id: &'static str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            true
        } else if self.selected.len() < MAX_COMPARED {
            self.selected.push(id);
            true
        } else {
            false
        }
    }

    /// The two plans to compare, in catalog order, once both are chosen.
    pub fn pair(&self) -> Option<(&'static ComparablePlan, &'static ComparablePlan)> {
        let mut chosen = COMPARABLE_PLANS.iter().filter(|p| self.contains(p.id));
        match (chosen.next(), chosen.next()) {
            (Some(a), Some(b)) if self.len() == MAX_COMPARED => Some((a, b)),
            _ => None,
        }
    }
}

/// A value wins its row when it differs from the other plan's and is included.
pub fn is_better(value: &str, other: &str) -> bool {
    value != other && value != NOT_INCLUDED
}

#[function_component(PlanComparator)]
pub fn plan_comparator() -> Html {
    let selection = use_state(ComparisonSelection::default);

    let toggle = |id: &'static str| {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            if next.toggle(id) {
                selection.set(next);
            }
        })
    };

    html! {
        <div class="plan-comparator">
            <div class="comparator-picks">
                { for COMPARABLE_PLANS.iter().map(|plan| html! {
                    <button
                        class={classes!("chip", selection.contains(plan.id).then_some("selected"))}
                        onclick={toggle(plan.id)}
                    >
                        { format!("{} - S/{}/mes", plan.name, plan.price) }
                    </button>
                }) }
            </div>
            {
                match selection.pair() {
                    Some((a, b)) => html! {
                        <div class="glass comparator-table">
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"Característica"}</th>
                                        <th>{ a.name }<div class="accent">{ format!("S/{}/mes", a.price) }</div></th>
                                        <th>{ b.name }<div class="accent">{ format!("S/{}/mes", b.price) }</div></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for COMPARED_FEATURES.iter().enumerate().map(|(row, feature)| {
                                        let cell = |value: &'static str, other: &'static str| html! {
                                            <td class={classes!(is_better(value, other).then_some("better"))}>
                                                if is_better(value, other) { <span class="trend">{"↑ "}</span> }
                                                { value }
                                            </td>
                                        };
                                        html! {
                                            <tr>
                                                <td class="muted">{ *feature }</td>
                                                { cell(a.values[row], b.values[row]) }
                                                { cell(b.values[row], a.values[row]) }
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    },
                    None => html! { <p class="muted center">{"Selecciona 2 planes para comparar"}</p> },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_selection_is_ignored() {
        let mut selection = ComparisonSelection::default();
        assert!(selection.toggle("basic"));
        assert!(selection.toggle("premium"));
        assert!(!selection.toggle("home"));
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("home"));
    }

    #[test]
    fn toggling_again_deselects() {
        let mut selection = ComparisonSelection::default();
        selection.toggle("home");
        selection.toggle("home");
        assert!(selection.is_empty());
    }

    #[test]
    fn pair_follows_catalog_order() {
        let mut selection = ComparisonSelection::default();
        selection.toggle("premium");
        assert!(selection.pair().is_none());
        selection.toggle("basic");
        let (a, b) = selection.pair().unwrap();
        assert_eq!((a.id, b.id), ("basic", "premium"));
    }

    #[test]
    fn not_included_never_wins() {
        assert!(is_better("80+ canales", NOT_INCLUDED));
        assert!(!is_better(NOT_INCLUDED, "80+ canales"));
        assert!(!is_better("Gratis", "Gratis"));
    }
}
