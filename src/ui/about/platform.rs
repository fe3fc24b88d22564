/// A label/value row shown on the about screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutEntry {
    pub title: &'static str,
    pub value: String,
}

/// Rows describing the platform the client runs on.
pub fn about_entries() -> Vec<AboutEntry> {
    vec![
        AboutEntry {
            title: "Operating system",
            value: format!("{} ({})", std::env::consts::OS, std::env::consts::FAMILY),
        },
        AboutEntry {
            title: "Architecture",
            value: std::env::consts::ARCH.to_string(),
        },
        AboutEntry {
            title: "Version",
            value: env!("CARGO_PKG_VERSION").to_string(),
        },
    ]
}
