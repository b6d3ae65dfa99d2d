/// One decomposition timing measurement: the vertex count of the input
/// polygon and the elapsed wall-clock seconds reported on the last line of
/// its output file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub vertex_count: u32,
    pub seconds: f64,
}

impl TimingRecord {
    pub fn new(vertex_count: u32, seconds: f64) -> Self {
        Self {
            vertex_count,
            seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_record_fields() {
        let record = TimingRecord::new(42, 0.125);
        assert_eq!(record.vertex_count, 42);
        assert_eq!(record.seconds, 0.125);
    }
}
