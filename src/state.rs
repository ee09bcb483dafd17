use std::path::PathBuf;

use crate::chart::{Experiment, FigureSpec, Layout};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Samples loaded at start-up.
    pub dataset: Dataset,

    /// File the samples came from, shown in the top bar.
    pub source: PathBuf,

    /// Benchmark parameters used in chart titles.
    pub experiment: Experiment,

    /// Charts currently on screen.
    pub figure: FigureSpec,
}

impl AppState {
    pub fn new(dataset: Dataset, source: PathBuf, experiment: Experiment) -> Self {
        Self {
            dataset,
            source,
            experiment,
            figure: FigureSpec::for_layout(Layout::default(), &experiment),
        }
    }

    pub fn layout(&self) -> Layout {
        self.figure.layout
    }

    /// Switch to another layout. No-op when it is already shown.
    pub fn set_layout(&mut self, layout: Layout) {
        if self.figure.layout == layout {
            return;
        }
        log::debug!("switching layout to {layout:?}");
        self.figure = FigureSpec::for_layout(layout, &self.experiment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Scale;
    use crate::data::loader::parse_str;

    fn state() -> AppState {
        let ds = parse_str("1 100 50\n2 80 25\n4 60 12\n").unwrap();
        AppState::new(ds, PathBuf::from("grain_size_times.txt"), Experiment::default())
    }

    #[test]
    fn starts_side_by_side() {
        let st = state();
        assert_eq!(st.layout(), Layout::SideBySide);
        assert_eq!(st.figure.charts[0].x.scale, Scale::Log);
    }

    #[test]
    fn switching_layout_rebuilds_figure() {
        let mut st = state();
        st.set_layout(Layout::Stacked);
        assert_eq!(st.figure, FigureSpec::stacked(&Experiment::default()));
        assert!(st.figure.window_title.starts_with("Tasks and time"));

        st.set_layout(Layout::SideBySide);
        assert_eq!(st.figure, FigureSpec::side_by_side(&Experiment::default()));
        assert_eq!(st.dataset.len(), 3);
    }
}
