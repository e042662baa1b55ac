/// One raw measurement set pulled from the host statistics source.
///
/// Consumed exactly once per tick and never retained; everything the
/// overlay remembers across ticks lives in the sampler itself.
#[derive(Debug, Clone)]
pub struct RawSample {
    /// Wall-clock seconds since the previous tick, unscaled.
    pub frame_delta_seconds: f32,
    /// GPU frame time in seconds, `None` when the host could not capture
    /// a timing sample this tick.
    pub gpu_frame_seconds: Option<f32>,
    /// Draw statistics, `None` in builds without render introspection.
    pub render: Option<RenderStats>,
    /// Bytes currently allocated on the managed heap.
    pub used_managed_bytes: u64,
    /// Bytes reserved by the native allocator.
    pub reserved_native_bytes: u64,
    /// Live heap reading driving the used/peak readout.
    pub heap_bytes_in_use: u64,
    /// Memory ceiling for the process; constant per run.
    pub system_memory_limit_bytes: u64,
    /// Garbage collections since process start; never decreases.
    pub gc_count: u64,
    /// OS threads currently owned by the process.
    pub thread_count: u32,
    /// Graphics API name, e.g. `"Vulkan"`; constant per run.
    pub api_name: String,
    /// Graphics adapter name; constant per run.
    pub device_name: String,
}

/// Per-frame draw statistics, available only when the host build exposes
/// render introspection. Grouped so the three counters are always present
/// or absent together.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub draw_calls: u32,
    pub batches: u32,
    pub vertices: u64,
}
