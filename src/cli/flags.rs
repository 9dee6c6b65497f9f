#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub interactive: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_numbers: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_special: bool,
    pub length: Option<usize>,
}
