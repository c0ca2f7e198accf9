use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub url: String,
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
    pub start: u32,
    pub end: u32,
    pub fragment: String,
    pub copied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoteView {
    pub url: String,
    pub host: String,
    pub owner: String,
    pub repo: String,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
