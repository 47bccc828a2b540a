#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableExclusion {
    /// Display name, e.g. `bash-5.2.26-1.x86_64`.
    pub package: String,
    pub selected_time: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRepo {
    pub repo_id: String,
    /// `None` for repositories that were passed through unfiltered.
    pub policy: Option<(u32, String)>,
    pub cutoff: Option<i64>,
    pub kept: u32,
    pub excluded: Vec<RenderableExclusion>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub now: i64,
    pub packages_scanned: u32,
    pub packages_excluded: u32,
    pub repos: Vec<RenderableRepo>,
}
