pub const CPU_TEMP_WINDOW: usize = 5;

/// Rolling CPU-temperature window used to offset sensor self-heating.
///
/// The ambient temperature sensor sits close enough to the host CPU to read
/// systematically high. The filter tracks the recent CPU temperature in a
/// fixed five-slot ring and derates the CPU-over-ambient delta by a
/// configured factor.
#[derive(Debug)]
pub struct CompensationFilter {
    window: [f64; CPU_TEMP_WINDOW],
    next: usize,
}

impl CompensationFilter {
    /// Seed every slot with the first real reading so early averages are not
    /// biased by zeroed state.
    pub fn seeded(first_sample: f64) -> Self {
        CompensationFilter {
            window: [first_sample; CPU_TEMP_WINDOW],
            next: 0,
        }
    }

    /// Push one sample, evicting the oldest, and return the window average.
    pub fn update(&mut self, sample: f64) -> f64 {
        self.window[self.next] = sample;
        self.next = (self.next + 1) % CPU_TEMP_WINDOW;
        self.window.iter().sum::<f64>() / CPU_TEMP_WINDOW as f64
    }
}

/// The compensation formula, reproduced exactly:
/// `raw - (window_average - raw) / factor`.
///
/// `factor` is validated nonzero at configuration load.
pub fn compensate(raw_temp: f64, window_average: f64, factor: f64) -> f64 {
    raw_temp - (window_average - raw_temp) / factor
}
