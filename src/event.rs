use std::path::PathBuf;

/// All events the app loop handles. Workers send exactly one terminal event
/// (plus per-page progress during an all-pages run).
#[derive(Debug)]
pub enum AppEvent {
    /// Background storyboard text generation completed.
    StoryboardGenerated(Result<String, String>),
    /// Background image generation for a single page completed.
    PageImageGenerated {
        page: usize,
        result: Result<PathBuf, String>,
    },
    /// One page finished during an all-pages image run.
    BatchImageProgress {
        page: usize,
        result: Result<PathBuf, String>,
    },
    /// The all-pages image run finished.
    BatchImagesFinished { success: usize, fail: usize },
}
