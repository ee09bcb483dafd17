//! Figure descriptions: what each chart shows and how its axes are scaled.
//!
//! Rendering lives in [`crate::ui::plot`]; everything here is plain data so the
//! two layouts can be checked without a window.

use std::fmt;

use crate::color::SeriesColor;
use crate::data::model::{Dataset, Metric};

// ---------------------------------------------------------------------------
// Experiment – fixed parameters of the benchmarked run
// ---------------------------------------------------------------------------

/// Parameters of the benchmark that produced the results file. Only used in
/// chart titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
    pub image_width: u32,
    pub image_height: u32,
    pub cores: u32,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            image_width: 1200,
            image_height: 1200,
            cores: 2,
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} image, {} cores",
            self.image_width, self.image_height, self.cores
        )
    }
}

// ---------------------------------------------------------------------------
// Axes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Map a sample value to plot space. `None` when the value cannot be shown
    /// on this scale (non-positive on a log axis).
    pub fn to_plot(self, value: i64) -> Option<f64> {
        match self {
            Scale::Linear => Some(value as f64),
            Scale::Log => (value > 0).then(|| (value as f64).log10()),
        }
    }

    /// Inverse of [`Scale::to_plot`].
    pub fn from_plot(self, coord: f64) -> f64 {
        match self {
            Scale::Linear => coord,
            Scale::Log => 10f64.powf(coord),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub metric: Metric,
    pub label: String,
    pub scale: Scale,
}

impl AxisSpec {
    fn new(metric: Metric, label: &str, scale: Scale) -> Self {
        Self {
            metric,
            label: label.to_string(),
            scale,
        }
    }
}

// ---------------------------------------------------------------------------
// Charts and figures
// ---------------------------------------------------------------------------

/// One chart: a single series of markers joined by a line, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Unique egui id for the plot widget.
    pub id: &'static str,
    pub title: String,
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub color: SeriesColor,
}

impl ChartSpec {
    /// Plot coordinates per sample in file order; `None` where an axis scale
    /// cannot show the sample.
    fn mapped<'a>(&self, dataset: &'a Dataset) -> impl Iterator<Item = Option<[f64; 2]>> + 'a {
        let (x_scale, y_scale) = (self.x.scale, self.y.scale);
        let xs = dataset.column(self.x.metric);
        let ys = dataset.column(self.y.metric);
        xs.iter()
            .zip(ys)
            .map(move |(&x, &y)| Some([x_scale.to_plot(x)?, y_scale.to_plot(y)?]))
    }

    /// Plot coordinates for every sample that fits both axis scales, in file
    /// order.
    pub fn points(&self, dataset: &Dataset) -> Vec<[f64; 2]> {
        self.mapped(dataset).flatten().collect()
    }

    /// Runs of consecutive plottable samples. The connecting line breaks
    /// wherever a sample is left out, so hidden samples never get bridged.
    pub fn segments(&self, dataset: &Dataset) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in self.mapped(dataset) {
            match point {
                Some(p) => current.push(p),
                None if !current.is_empty() => {
                    segments.push(std::mem::take(&mut current));
                }
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Number of samples left out because a log axis cannot show them.
    pub fn hidden_samples(&self, dataset: &Dataset) -> usize {
        dataset.len() - self.points(dataset).len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Two charts in a row.
    #[default]
    SideBySide,
    /// Two charts in a column.
    Stacked,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::SideBySide, Layout::Stacked];

    pub fn label(self) -> &'static str {
        match self {
            Layout::SideBySide => "Side by side (log-log)",
            Layout::Stacked => "Stacked",
        }
    }
}

/// A window's worth of charts.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    pub layout: Layout,
    /// Native window title while this figure is shown.
    pub window_title: String,
    pub charts: [ChartSpec; 2],
}

impl FigureSpec {
    pub fn for_layout(layout: Layout, experiment: &Experiment) -> Self {
        match layout {
            Layout::SideBySide => Self::side_by_side(experiment),
            Layout::Stacked => Self::stacked(experiment),
        }
    }

    /// Time and task count against grain size, both log-log, in a row.
    pub fn side_by_side(experiment: &Experiment) -> Self {
        let grain = || AxisSpec::new(Metric::GrainSize, "Grain Size", Scale::Log);
        Self {
            layout: Layout::SideBySide,
            window_title: format!("Time and tasks vs grain size ({experiment})"),
            charts: [
                ChartSpec {
                    id: "time_vs_grain_size_loglog",
                    title: format!("Time vs Grain Size ({experiment}) (log scale)"),
                    x: grain(),
                    y: AxisSpec::new(Metric::TimeTaken, "Time Taken (microseconds)", Scale::Log),
                    color: SeriesColor::Default,
                },
                ChartSpec {
                    id: "tasks_vs_grain_size_loglog",
                    title: format!("Tasks vs Grain Size ({experiment}) (log scale)"),
                    x: grain(),
                    y: AxisSpec::new(Metric::TaskCount, "Number of Tasks", Scale::Log),
                    color: SeriesColor::Default,
                },
            ],
        }
    }

    /// Task count (log y) above time (linear), in a column.
    pub fn stacked(experiment: &Experiment) -> Self {
        let grain = || AxisSpec::new(Metric::GrainSize, "Grain size", Scale::Linear);
        Self {
            layout: Layout::Stacked,
            window_title: format!("Tasks and time vs grain size ({experiment})"),
            charts: [
                ChartSpec {
                    id: "tasks_vs_grain_size_stacked",
                    title: format!("Number of tasks vs grain size ({experiment})"),
                    x: grain(),
                    y: AxisSpec::new(
                        Metric::TaskCount,
                        "Number of tasks (log scale)",
                        Scale::Log,
                    ),
                    color: SeriesColor::Orange,
                },
                ChartSpec {
                    id: "time_vs_grain_size_stacked",
                    title: format!("Time taken vs grain size ({experiment})"),
                    x: grain(),
                    y: AxisSpec::new(
                        Metric::TimeTaken,
                        "Time taken (microseconds)",
                        Scale::Linear,
                    ),
                    color: SeriesColor::Default,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tick and readout text
// ---------------------------------------------------------------------------

/// Label for a grid mark on a log axis.
///
/// Decades read `1`, `10`, `10²`, `10⁻¹`... Marks between decades are only
/// labelled when the visible range is narrower than one decade, otherwise they
/// stay blank.
pub fn log_tick_label(coord: f64, visible_span: f64) -> String {
    let decade = coord.round();
    if (coord - decade).abs() < 1e-9 {
        return match decade as i32 {
            0 => "1".to_string(),
            1 => "10".to_string(),
            n => format!("10{}", superscript(n)),
        };
    }
    if visible_span < 1.0 {
        format_value(Scale::Log.from_plot(coord))
    } else {
        String::new()
    }
}

/// Render a sample value back in data units for hover readouts.
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-6 {
        format!("{}", value.round() as i64)
    } else if value.abs() >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.3}")
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}
