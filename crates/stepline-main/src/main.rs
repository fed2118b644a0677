// Copyright (c) 2026 the stepline developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use serde::Serialize;
use std::fmt::Display;
use std::{fs::File, io::BufWriter};
use stepline_core::linear::{Boundary, linspace};
use stepline_core::step::{countdown, range, range_step, range_step_inclusive, range_to};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

fn show<I>(label: &str, seq: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    let rendered: Vec<String> = seq.into_iter().map(|x| x.to_string()).collect();
    println!("{label:32} {}", rendered.join(" "));
}

fn demo() {
    show("range_to(5)", range_to(5));
    show("range_to(5u32)", range_to(5u32));
    show("countdown(5)", countdown(5));
    show("countdown(5u32)", countdown(5u32));
    show("range(5, 10)", range(5, 10));
    show("range_step(0, 10, 2)", range_step(0, 10, 2));
    show(
        "range_step_inclusive(0, 10, 2)",
        range_step_inclusive(0, 10, 2),
    );
    show("range_step(10, 0, -2)", range_step(10, 0, -2));
    show(
        "range_step_inclusive(10, 0, -2)",
        range_step_inclusive(10, 0, -2),
    );
    println!("-----------------");
    show(
        "linspace closed",
        linspace(0.0, 2.0, 4, Boundary::Closed),
    );
    show(
        "linspace rightopen",
        linspace(0.0, 2.0, 4, Boundary::RightOpen),
    );
    show(
        "linspace leftopen",
        linspace(0.0, 2.0, 4, Boundary::LeftOpen),
    );
    show("linspace open", linspace(0.0, 2.0, 4, Boundary::Open));
    show("linspace thirds", linspace(0.0, 1.0, 3, Boundary::Closed));
}

#[derive(Debug, Clone, Serialize)]
struct DriftSample {
    steps: u32,
    naive_count: u32,
    exact_count: u32,
}

#[derive(Debug, Clone, Serialize)]
struct DriftReport {
    description: String,
    interval: (f64, f64),
    mismatches: usize,
    samples: Vec<DriftSample>,
}

/// Counts the elements a naive `x += dx; x <= b` loop produces for
/// `steps` points over `[a, b]`, next to the exact linspace count.
///
/// The accumulated rounding error makes the naive loop miss or repeat
/// the final point for many step counts; the precomputed-count iterator
/// cannot drift.
fn drift_sample(a: f64, b: f64, steps: u32) -> DriftSample {
    let n = steps - 1;
    let dx = (b - a) / f64::from(n);

    let mut naive_count = 0u32;
    let mut x = a;
    while x <= b {
        naive_count += 1;
        x += dx;
    }

    let exact_count = linspace(a, b, n, Boundary::Closed).len() as u32;
    DriftSample {
        steps,
        naive_count,
        exact_count,
    }
}

fn drift_report() -> DriftReport {
    let (a, b) = (1.0, 6.0);
    let samples: Vec<DriftSample> = (2..=50).map(|steps| drift_sample(a, b, steps)).collect();
    let mismatches = samples
        .iter()
        .filter(|s| s.naive_count != s.exact_count)
        .count();
    DriftReport {
        description: "Element counts of a naive x += dx loop vs the exact linspace count, \
                      49 step counts over [1, 6]."
            .into(),
        interval: (a, b),
        mismatches,
        samples,
    }
}

fn main() {
    enable_tracing();

    demo();

    let report = drift_report();
    tracing::info!(
        mismatches = report.mismatches,
        samples = report.samples.len(),
        "naive accumulation drifted on {} of {} step counts",
        report.mismatches,
        report.samples.len()
    );

    let file = File::create("drift_report.json").expect("create drift_report.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("Wrote: drift_report.json");
}
