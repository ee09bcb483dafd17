// ---------------------------------------------------------------------------
// Sample – one line of the results file
// ---------------------------------------------------------------------------

/// One benchmark measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Grain size the workload was run with.
    pub grain_size: i64,
    /// Elapsed time in microseconds.
    pub time_taken: i64,
    /// Number of tasks spawned.
    pub task_count: i64,
}

impl Sample {
    pub fn new(grain_size: i64, time_taken: i64, task_count: i64) -> Self {
        Self {
            grain_size,
            time_taken,
            task_count,
        }
    }
}

impl From<(i64, i64, i64)> for Sample {
    fn from((grain_size, time_taken, task_count): (i64, i64, i64)) -> Self {
        Self::new(grain_size, time_taken, task_count)
    }
}

// ---------------------------------------------------------------------------
// Metric – which column of the dataset a chart axis shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    GrainSize,
    TimeTaken,
    TaskCount,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All samples in file order, stored as three parallel columns.
///
/// The columns are only extended together by [`Dataset::push`], so they always
/// have the same length. Values are never sorted: charts follow file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    grain_sizes: Vec<i64>,
    times: Vec<i64>,
    task_counts: Vec<i64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample at the end.
    pub fn push(&mut self, sample: Sample) {
        self.grain_sizes.push(sample.grain_size);
        self.times.push(sample.time_taken);
        self.task_counts.push(sample.task_count);
    }

    /// The column backing a chart axis.
    pub fn column(&self, metric: Metric) -> &[i64] {
        match metric {
            Metric::GrainSize => &self.grain_sizes,
            Metric::TimeTaken => &self.times,
            Metric::TaskCount => &self.task_counts,
        }
    }

    /// Iterate the samples in file order.
    #[cfg(test)]
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.grain_sizes
            .iter()
            .zip(&self.times)
            .zip(&self.task_counts)
            .map(|((&g, &t), &c)| Sample::new(g, t, c))
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.grain_sizes.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.grain_sizes.is_empty()
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for sample in iter {
            dataset.push(sample);
        }
        dataset
    }
}
