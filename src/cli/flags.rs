#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub similar: bool,
    pub strict: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub max_retries: Option<usize>,
    pub special: Option<String>,
    pub exclude: Option<String>,
    pub output: Option<String>,
}
