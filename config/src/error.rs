#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error {0}")]
    IO(#[from] std::io::Error),

    #[error("toml error {0}")]
    Toml(#[from] toml::de::Error),
}
