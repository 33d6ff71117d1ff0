/// HLS packaging configuration applied to every clip asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlsPackagingConfiguration {
    /// Pass SCTE-35 ad markers through to the manifest; off for clips
    pub ad_markers: bool,
    pub manifest_name: String,
    pub program_date_time_interval_seconds: i32,
    pub segment_duration_seconds: i32,
    pub use_audio_rendition_group: bool,
}

impl Default for HlsPackagingConfiguration {
    fn default() -> Self {
        Self {
            ad_markers: false,
            manifest_name: String::from("index"),
            program_date_time_interval_seconds: 60,
            segment_duration_seconds: 6,
            use_audio_rendition_group: true,
        }
    }
}
