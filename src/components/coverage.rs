use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageZone {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub radius_m: f64,
}

pub static COVERAGE_ZONES: [CoverageZone; 8] = [
    CoverageZone { name: "Miraflores", lat: -12.1191, lng: -77.0297, radius_m: 2000.0 },
    CoverageZone { name: "San Isidro", lat: -12.0977, lng: -77.0347, radius_m: 1800.0 },
    CoverageZone { name: "Surco", lat: -12.1464, lng: -76.9917, radius_m: 2500.0 },
    CoverageZone { name: "La Molina", lat: -12.0867, lng: -76.9351, radius_m: 2200.0 },
    CoverageZone { name: "San Borja", lat: -12.1067, lng: -76.9997, radius_m: 1500.0 },
    CoverageZone { name: "Barranco", lat: -12.1456, lng: -77.0203, radius_m: 1200.0 },
    CoverageZone { name: "Jesús María", lat: -12.0708, lng: -77.0428, radius_m: 1300.0 },
    CoverageZone { name: "Lince", lat: -12.0833, lng: -77.0333, radius_m: 1100.0 },
];

pub const LIMA_CENTER: (f64, f64) = (-12.0464, -77.0428);

const METERS_PER_DEGREE: f64 = 111_320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    Covered,
    Pending,
}

impl CoverageStatus {
    pub fn message(&self) -> &'static str {
        match self {
            CoverageStatus::Covered => "✅ ¡Excelente! Tenemos cobertura en tu zona.",
            CoverageStatus::Pending => {
                "⏳ Zona en expansión. Déjanos tu email y te avisamos cuando tengamos cobertura."
            }
        }
    }
}

/// Exact, case-insensitive match on the zone name. Surrounding whitespace
/// is not stripped.
pub fn find_zone(district: &str) -> Option<&'static CoverageZone> {
    let needle = district.to_lowercase();
    COVERAGE_ZONES
        .iter()
        .find(|zone| zone.name.to_lowercase() == needle)
}

pub fn check_coverage(district: &str) -> CoverageStatus {
    match find_zone(district) {
        Some(_) => CoverageStatus::Covered,
        None => CoverageStatus::Pending,
    }
}

/// Bounding box `(min_lng, min_lat, max_lng, max_lat)` enclosing every zone
/// circle, in the order OpenStreetMap's `bbox` parameter expects.
pub fn coverage_bounds(zones: &[CoverageZone]) -> Option<(f64, f64, f64, f64)> {
    zones.iter().fold(None, |acc, zone| {
        let pad = zone.radius_m / METERS_PER_DEGREE;
        let (w, s, e, n) = (zone.lng - pad, zone.lat - pad, zone.lng + pad, zone.lat + pad);
        Some(match acc {
            None => (w, s, e, n),
            Some((min_lng, min_lat, max_lng, max_lat)) => (
                f64::min(min_lng, w),
                f64::min(min_lat, s),
                f64::max(max_lng, e),
                f64::max(max_lat, n),
            ),
        })
    })
}

pub fn map_embed_url(zones: &[CoverageZone]) -> String {
    let (lat, lng) = LIMA_CENTER;
    let (w, s, e, n) = coverage_bounds(zones).unwrap_or((lng - 0.1, lat - 0.1, lng + 0.1, lat + 0.1));
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.4},{:.4},{:.4},{:.4}&layer=mapnik&marker={},{}",
        w, s, e, n, lat, lng
    )
}

#[function_component]
pub fn CoverageCheck() -> Html {
    let district = use_state(String::new);
    let status = use_state(|| None::<CoverageStatus>);
    let email = use_state(String::new);
    let notify_requested = use_state(|| false);

    let on_district = {
        let district = district.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            district.set(input.value());
        })
    };

    let on_check = {
        let district = district.clone();
        let status = status.clone();
        let notify_requested = notify_requested.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = check_coverage(&district);
            debug!("Coverage for {:?}: {:?}", *district, result);
            notify_requested.set(false);
            status.set(Some(result));
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_notify = {
        let notify_requested = notify_requested.clone();
        Callback::from(move |_: MouseEvent| notify_requested.set(true))
    };

    html! {
        <div class="glass coverage-check">
            <h3>{"📍 Verifica tu cobertura"}</h3>
            <form onsubmit={on_check}>
                <input
                    type="text"
                    placeholder="Escribe tu distrito"
                    value={(*district).clone()}
                    oninput={on_district}
                />
                <button type="submit" class="btn-gradient">{"Verificar"}</button>
            </form>
            {
                match *status {
                    Some(CoverageStatus::Covered) => html! {
                        <p class="coverage-result covered">{ CoverageStatus::Covered.message() }</p>
                    },
                    Some(CoverageStatus::Pending) => html! {
                        <div class="coverage-result pending">
                            <p>{ CoverageStatus::Pending.message() }</p>
                            if *notify_requested {
                                <p class="muted">{"¡Gracias! Te avisaremos."}</p>
                            } else {
                                <div class="notify-row">
                                    <input
                                        type="email"
                                        placeholder="tu@email.com"
                                        value={(*email).clone()}
                                        oninput={on_email}
                                    />
                                    <button class="btn-outline" onclick={on_notify}>{"Avisarme"}</button>
                                </div>
                            }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[function_component]
pub fn CoverageMap() -> Html {
    html! {
        <div class="coverage-map">
            <div class="map-frame glass">
                <iframe
                    title="Mapa de cobertura"
                    src={map_embed_url(&COVERAGE_ZONES)}
                    loading="lazy"
                />
            </div>
            <div class="zone-list">
                <h4>{"Zonas con cobertura"}</h4>
                <ul>
                    { for COVERAGE_ZONES.iter().map(|zone| html! {
                        <li>
                            <span class="dot"></span>
                            { zone.name }
                            <small class="muted">{ format!(" {:.1} km", zone.radius_m / 1000.0) }</small>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
