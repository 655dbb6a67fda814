// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo binary: load a CSV, render the chart and slider, write a page.

use std::error::Error;
use std::process::ExitCode;

use kurbo::Rect;
use log::{error, info};
use strata_app::{ChartController, SvgScene, page};
use strata_charts::Size;
use strata_data::{ChartConfig, loader};

const DEFAULT_INPUT: &str = "NTDOY.csv";
const OUTPUT: &str = "strata_chart.html";

const VIEWPORT: Size = Size {
    width: 1200.0,
    height: 600.0,
};

fn main() -> ExitCode {
    if let Err(err) = setup_logger() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    match run(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str) -> Result<(), Box<dyn Error>> {
    let dataset = loader::load_csv_path(input)?;
    let mut controller = ChartController::new(dataset, ChartConfig::default(), VIEWPORT)?;

    let update = controller.rebuild();

    let mut chart = SvgScene::new();
    chart.set_view_box(Rect::new(0.0, 0.0, VIEWPORT.width, VIEWPORT.height));
    chart.apply_diffs(&update.chart);

    let mut slider = SvgScene::new();
    slider.set_view_box(Rect::new(
        0.0,
        0.0,
        VIEWPORT.width,
        strata_app::SLIDER_HEIGHT,
    ));
    slider.apply_diffs(&update.slider);

    let html = page::render_page(
        "Stock price by console",
        &chart.to_svg_string(),
        &slider.to_svg_string(),
    );
    std::fs::write(OUTPUT, html)?;
    info!("wrote {OUTPUT}");
    Ok(())
}

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
