use std::error::Error;

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::components::speed_test::SpeedTestRecord;

const WIDTH: u32 = 420;
const HEIGHT: u32 = 220;
/// Each run takes a download bar, an upload bar and a gap.
const SLOTS_PER_RUN: usize = 3;

const DOWNLOAD_COLOR: RGBColor = RGBColor(0, 212, 255);
const UPLOAD_COLOR: RGBColor = RGBColor(168, 85, 247);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<SpeedTestRecord>,
}

/// Upper bound of the y axis: the fastest reading plus 10% headroom.
pub fn y_axis_max(records: &[SpeedTestRecord]) -> u32 {
    let max = records
        .iter()
        .map(|r| r.download.max(r.upload))
        .max()
        .unwrap_or(0);
    (max + max / 10).max(1)
}

fn draw(canvas: HtmlCanvasElement, records: &[SpeedTestRecord]) -> Result<(), Box<dyn Error>> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&TRANSPARENT)?;

    let slots = records.len() * SLOTS_PER_RUN;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..slots, 0..y_axis_max(records))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(records.len())
        .x_label_formatter(&|x| {
            if x % SLOTS_PER_RUN == 1 {
                records
                    .get(x / SLOTS_PER_RUN)
                    .map(|r| r.taken_at.clone())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .label_style(("sans-serif", 11).into_font().color(&RGBColor(148, 163, 184)))
        .axis_style(RGBColor(71, 85, 105))
        .draw()?;

    chart.draw_series(records.iter().enumerate().map(|(i, r)| {
        let x = i * SLOTS_PER_RUN;
        Rectangle::new([(x, 0), (x + 1, r.download)], DOWNLOAD_COLOR.filled())
    }))?;
    chart.draw_series(records.iter().enumerate().map(|(i, r)| {
        let x = i * SLOTS_PER_RUN + 1;
        Rectangle::new([(x, 0), (x + 1, r.upload)], UPLOAD_COLOR.filled())
    }))?;

    root.present()?;
    Ok(())
}

#[function_component]
pub fn SpeedHistoryGraph(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let records = props.records.clone();
        use_effect_with_deps(
            move |records: &Vec<SpeedTestRecord>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !records.is_empty() {
                        if let Err(e) = draw(canvas, records) {
                            warn!("Failed to draw speed history: {}", e);
                        }
                    }
                }
                || ()
            },
            records,
        );
    }

    html! {
        <div class="speed-graph">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
            />
            <div class="legend">
                <span class="down">{"■ Descarga"}</span>
                <span class="up">{"■ Subida"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(download: u32, upload: u32) -> SpeedTestRecord {
        SpeedTestRecord {
            taken_at: "10:00:00".into(),
            download,
            upload,
            ping: 5,
        }
    }

    #[test]
    fn axis_has_headroom_over_fastest_reading() {
        assert_eq!(y_axis_max(&[record(300, 280), record(310, 290)]), 341);
    }

    #[test]
    fn empty_history_still_has_a_valid_axis() {
        assert_eq!(y_axis_max(&[]), 1);
    }
}
