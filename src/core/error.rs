use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the content catalog. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file is not valid catalog JSON.
    #[error("cannot parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A pool the game draws from has no entries.
    #[error("catalog pool `{0}` is empty")]
    EmptyPool(&'static str),

    #[error("weapon `{key}` has hit probability {value}, expected a value in [0, 1]")]
    InvalidProbability { key: String, value: f64 },

    #[error("`{key}` has negative {stat} ({value})")]
    NegativeStat {
        key: String,
        stat: &'static str,
        value: i32,
    },

    /// Equipment can be drawn such that neither side of a battle can ever
    /// wound the other.
    #[error("weapon `{weapon}` can never wound armor `{armor}`, so a battle could never end")]
    Stalemate { weapon: String, armor: String },

    #[error("no hero template named `{0}`")]
    UnknownHero(String),

    #[error("no enemy template named `{0}`")]
    UnknownEnemy(String),
}

/// Anything that stops a game session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The player's terminal went away (closed input, broken pipe).
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
