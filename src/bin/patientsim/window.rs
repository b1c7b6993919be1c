//! Fixed-size scrolling sample window for the chart.

/// Smallest window, in samples, regardless of sampling rate.
const MIN_WINDOW: usize = 500;
/// Seconds of trace kept on screen.
const WINDOW_SECONDS: usize = 2;

/// Window length for a given sampling rate (about two seconds of trace).
pub fn window_len(sampling_rate_hz: u32) -> usize {
    MIN_WINDOW.max(sampling_rate_hz as usize * WINDOW_SECONDS)
}

/// Newest samples on the right, oldest fall off the left.
pub struct ScrollingWindow {
    samples: Vec<f32>,
}

impl ScrollingWindow {
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![0.0; len.max(1)],
        }
    }

    pub fn push(&mut self, incoming: &[f32]) {
        let len = self.samples.len();
        if incoming.len() >= len {
            self.samples
                .copy_from_slice(&incoming[incoming.len() - len..]);
            return;
        }

        self.samples.rotate_left(incoming.len());
        self.samples[len - incoming.len()..].copy_from_slice(incoming);
    }

    /// Change the window length, clearing the trace if it actually changes.
    pub fn resize(&mut self, len: usize) {
        let len = len.max(1);
        if len != self.samples.len() {
            self.samples = vec![0.0; len];
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_two_seconds_with_floor() {
        assert_eq!(window_len(100), 500);
        assert_eq!(window_len(250), 500);
        assert_eq!(window_len(1000), 2000);
    }

    #[test]
    fn push_scrolls_left() {
        let mut window = ScrollingWindow::new(4);
        window.push(&[1.0, 2.0]);
        window.push(&[3.0]);
        assert_eq!(window.samples(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn oversized_push_keeps_newest() {
        let mut window = ScrollingWindow::new(3);
        window.push(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(window.samples(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn resize_clears_only_on_change() {
        let mut window = ScrollingWindow::new(3);
        window.push(&[1.0]);
        window.resize(3);
        assert_eq!(window.samples()[2], 1.0);
        window.resize(5);
        assert_eq!(window.len(), 5);
        assert!(window.samples().iter().all(|&s| s == 0.0));
    }
}
