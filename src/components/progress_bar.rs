const FILLED: char = '█';
const EMPTY: char = '░';
const SLOW: char = '▒';

/// Horizontal bar showing progress toward the next refresh.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    /// Fraction in `[0, 1]`; out-of-range values are clamped.
    pub progress: f64,
    pub width: usize,
    /// A request is in flight; the bar is drawn in the dimmed style.
    pub slow: bool,
}

impl ProgressBar {
    pub fn new(progress: f64, width: usize) -> Self {
        Self {
            progress,
            width,
            slow: false,
        }
    }

    pub fn slow(mut self, slow: bool) -> Self {
        self.slow = slow;
        self
    }

    pub fn render(&self) -> String {
        let fraction = if self.progress.is_finite() {
            self.progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (fraction * self.width as f64).round() as usize;
        let fill = if self.slow { SLOW } else { FILLED };

        let mut bar = String::with_capacity(self.width * 3 + 2);
        bar.push('[');
        bar.extend(std::iter::repeat_n(fill, filled));
        bar.extend(std::iter::repeat_n(EMPTY, self.width - filled));
        bar.push(']');
        bar
    }
}
