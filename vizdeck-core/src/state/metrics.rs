use rand::Rng;

/// A simulated gauge that random-walks inside fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    /// Largest change a single tick may apply
    pub jitter: f32,
}

impl Metric {
    pub const fn new(value: f32, min: f32, max: f32, jitter: f32) -> Self {
        Self { value, min, max, jitter }
    }

    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let delta = if self.jitter > 0.0 {
            rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        self.value = (self.value + delta).clamp(self.min, self.max);
    }

    /// Position of the value inside its bounds, 0.0-1.0
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn in_bounds(&self) -> bool {
        self.value >= self.min && self.value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Fps,
    Cpu,
    Memory,
    Gpu,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Fps,
        MetricKind::Cpu,
        MetricKind::Memory,
        MetricKind::Gpu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Fps => "FPS",
            MetricKind::Cpu => "CPU",
            MetricKind::Memory => "Memory",
            MetricKind::Gpu => "GPU",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Fps => "",
            _ => "%",
        }
    }
}

/// Simulated performance counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub fps: Metric,
    pub cpu: Metric,
    pub memory: Metric,
    pub gpu: Metric,
}

impl Metrics {
    pub fn get(&self, kind: MetricKind) -> &Metric {
        match kind {
            MetricKind::Fps => &self.fps,
            MetricKind::Cpu => &self.cpu,
            MetricKind::Memory => &self.memory,
            MetricKind::Gpu => &self.gpu,
        }
    }

    pub fn perturb_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fps.perturb(rng);
        self.cpu.perturb(rng);
        self.memory.perturb(rng);
        self.gpu.perturb(rng);
    }

    pub fn all_in_bounds(&self) -> bool {
        MetricKind::ALL.iter().all(|k| self.get(*k).in_bounds())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            fps: Metric::new(60.0, 30.0, 60.0, 2.0),
            cpu: Metric::new(45.0, 5.0, 95.0, 5.0),
            memory: Metric::new(62.0, 20.0, 90.0, 3.0),
            gpu: Metric::new(78.0, 10.0, 100.0, 5.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn perturb_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = Metrics::default();
        for _ in 0..5_000 {
            metrics.perturb_all(&mut rng);
            assert!(metrics.all_in_bounds(), "out of bounds: {:?}", metrics);
        }
    }

    #[test]
    fn perturb_moves_by_at_most_jitter() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut m = Metric::new(50.0, 0.0, 100.0, 3.0);
        for _ in 0..1_000 {
            let before = m.value;
            m.perturb(&mut rng);
            assert!((m.value - before).abs() <= 3.0 + f32::EPSILON);
        }
    }

    #[test]
    fn zero_jitter_is_constant() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut m = Metric::new(12.0, 0.0, 20.0, 0.0);
        m.perturb(&mut rng);
        assert_eq!(m.value, 12.0);
    }

    #[test]
    fn fraction_maps_bounds() {
        let m = Metric::new(45.0, 30.0, 60.0, 1.0);
        assert!((m.fraction() - 0.5).abs() < 1e-6);
        let flat = Metric::new(5.0, 5.0, 5.0, 0.0);
        assert_eq!(flat.fraction(), 0.0);
    }
}
